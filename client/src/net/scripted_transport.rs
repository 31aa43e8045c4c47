//! Test transport with per-token scripted replies.
//!
//! Replies are either immediate or gated behind a oneshot channel so tests can
//! hold a request in flight while they drive other session transitions.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::api::{HttpResponse, HttpTransport, TransportError};

pub(crate) type Outcome = Result<HttpResponse, TransportError>;

enum Reply {
    Ready(Outcome),
    Gated(oneshot::Receiver<Outcome>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RecordedCall {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue an immediate reply for the next request carrying `token`.
    pub fn reply(&self, token: &str, outcome: Outcome) {
        self.push(token, Reply::Ready(outcome));
    }

    /// Queue a reply that resolves only when the returned sender fires.
    pub fn gate(&self, token: &str) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.push(token, Reply::Gated(rx));
        tx
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn push(&self, token: &str, reply: Reply) {
        self.replies.lock().unwrap().entry(token.to_owned()).or_default().push_back(reply);
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse, TransportError> {
        let call = RecordedCall {
            url: url.to_owned(),
            headers: headers.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect(),
        };
        let token = call.header("Authorization").and_then(|v| v.strip_prefix("Bearer ")).unwrap_or_default().to_owned();
        self.calls.lock().unwrap().push(call);

        let next = self.replies.lock().unwrap().get_mut(&token).and_then(VecDeque::pop_front);
        match next {
            Some(Reply::Ready(outcome)) => outcome,
            Some(Reply::Gated(rx)) => rx.await.unwrap_or_else(|_| Err(TransportError("gate dropped".to_owned()))),
            None => Err(TransportError(format!("no scripted reply for {token:?}"))),
        }
    }
}

pub(crate) fn json(status: u16, body: &str) -> Outcome {
    Ok(HttpResponse { status, body: body.to_owned() })
}

pub(crate) fn offline() -> Outcome {
    Err(TransportError("connection refused".to_owned()))
}
