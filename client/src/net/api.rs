//! REST helpers for the protected profile endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports itself unreachable, since bearer
//! tokens only live in the browser.
//!
//! ERROR HANDLING
//! ==============
//! `ProfileFetcher` never panics or propagates transport errors raw; every
//! outcome is folded into an `ErrorKind` so callers only branch on three
//! cases.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use super::types::UserRecord;

/// Path of the protected profile resource.
pub const PROFILE_ENDPOINT: &str = "/api/v1/user";

/// Classification of a failed profile fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Bad or expired token, or any other non-2xx response.
    #[error("token rejected by server")]
    Unauthorized,
    /// The request never produced a response (unreachable, timeout).
    #[error("could not reach server")]
    NetworkError,
    /// A success response whose body is not a valid profile.
    #[error("server returned an unreadable profile")]
    MalformedResponse,
}

/// Raw response handed back by an `HttpTransport`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure below the HTTP layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Minimal GET-only HTTP seam.
///
/// Futures are not `Send`: the browser fetch API is single-threaded.
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    /// Issue a `GET` to `url` with the given request headers.
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse, TransportError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(url);
            for (name, value) in headers {
                request = request.header(name, value);
            }
            let resp = request.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, headers);
            Err(TransportError("not available on server".to_owned()))
        }
    }
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a raw transport outcome onto a profile or an `ErrorKind`.
fn classify(outcome: Result<HttpResponse, TransportError>) -> Result<UserRecord, ErrorKind> {
    let resp = match outcome {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("profile request failed: {e}");
            return Err(ErrorKind::NetworkError);
        }
    };
    if !resp.is_success() {
        log::warn!("profile request rejected with status {}", resp.status);
        return Err(ErrorKind::Unauthorized);
    }
    serde_json::from_str(&resp.body).map_err(|e| {
        log::warn!("profile body did not parse: {e}");
        ErrorKind::MalformedResponse
    })
}

/// Performs one authenticated profile request per call. No retries.
#[derive(Clone)]
pub struct ProfileFetcher {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
}

impl ProfileFetcher {
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_endpoint(transport, PROFILE_ENDPOINT)
    }

    /// Fetcher targeting a non-default profile URL (absolute or path).
    #[must_use]
    pub fn with_endpoint(transport: Arc<dyn HttpTransport>, endpoint: impl Into<String>) -> Self {
        Self { transport, endpoint: endpoint.into() }
    }

    /// Fetcher backed by the browser `fetch` API.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserTransport))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the profile for `token`.
    ///
    /// # Errors
    ///
    /// `NetworkError` when no response arrives, `Unauthorized` for any non-2xx
    /// status, `MalformedResponse` when a 2xx body is not a `UserRecord`.
    pub async fn fetch(&self, token: &str) -> Result<UserRecord, ErrorKind> {
        let headers = [
            ("Authorization", bearer_header(token)),
            ("Content-Type", "application/json".to_owned()),
        ];
        classify(self.transport.get(&self.endpoint, &headers).await)
    }
}

impl std::fmt::Debug for ProfileFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileFetcher").field("endpoint", &self.endpoint).finish_non_exhaustive()
    }
}
