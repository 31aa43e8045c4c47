//! Session controller: bearer token, current user, and the login/logout/fetch
//! state machine that drives every auth-aware view.
//!
//! DESIGN
//! ======
//! `SessionController` is a cheap `Clone` handle around shared state. Views
//! receive it explicitly and observe changes through `subscribe`; the app root
//! mirrors notifications into a Leptos signal.
//!
//! Each transition mutates the `Session` under a short lock, releases it, then
//! notifies subscribers with a snapshot, so a subscriber may call back into the
//! controller.
//!
//! CONCURRENCY
//! ===========
//! Overlapping `fetch_user_profile` calls for the same session epoch coalesce:
//! the second call is a no-op while the first is in flight. `login` and
//! `logout` bump the epoch, so results from requests issued under an older
//! epoch or token are discarded on arrival. The in-flight marker lives in a
//! guard that releases `loading` even when the fetch future is dropped or
//! unwinds.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use super::credentials::CredentialStore;
use crate::net::api::{ErrorKind, ProfileFetcher};
use crate::net::types::UserRecord;

/// Coarse authentication state derived from token, user and last fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No token.
    #[default]
    Anonymous,
    /// Token present, first profile fetch not yet resolved.
    Authenticating,
    /// Token present and the last fetch succeeded.
    Authenticated,
    /// Token present and the last fetch failed.
    Error,
}

/// Snapshot of the controller's view of authentication.
///
/// `user` is only ever `Some` while `token` is `Some`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
    /// True only while a profile fetch for the current token is in flight.
    pub loading: bool,
    pub error: Option<ErrorKind>,
    pub status: SessionStatus,
}

impl Session {
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("token must not be empty")]
    EmptyToken,
}

/// Handle returned by [`SessionController::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&Session) + Send + Sync>;

struct Machine {
    session: Session,
    /// Bumped by `login` and `logout`; fetch results carry the epoch they were
    /// issued under.
    epoch: u64,
    /// Epoch of the fetch currently in flight, if any.
    in_flight: Option<u64>,
}

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber)>,
}

struct Shared {
    machine: Mutex<Machine>,
    subscribers: Mutex<Subscribers>,
    store: Arc<dyn CredentialStore>,
    fetcher: ProfileFetcher,
}

/// Owner of the `Session` value.
#[derive(Clone)]
pub struct SessionController {
    shared: Arc<Shared>,
}

impl SessionController {
    /// Build a controller from whatever token `store` already holds.
    ///
    /// A stored token puts the session in `Authenticating`; the caller is
    /// expected to drive [`Self::fetch_user_profile`] right away.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>, fetcher: ProfileFetcher) -> Self {
        let token = store.get().filter(|t| !t.is_empty());
        let status = if token.is_some() { SessionStatus::Authenticating } else { SessionStatus::Anonymous };
        let session = Session { token, status, ..Session::default() };
        Self {
            shared: Arc::new(Shared {
                machine: Mutex::new(Machine { session, epoch: 0, in_flight: None }),
                subscribers: Mutex::new(Subscribers::default()),
                store,
                fetcher,
            }),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.lock_machine().session.clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.lock_machine().session.status
    }

    /// Register `subscriber`; it runs after every state transition.
    pub fn subscribe(&self, subscriber: impl Fn(&Session) + Send + Sync + 'static) -> SubscriptionId {
        let mut subs = self.lock_subscribers();
        let id = SubscriptionId(subs.next_id);
        subs.next_id += 1;
        subs.entries.push((id, Arc::new(subscriber)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.lock_subscribers();
        let before = subs.entries.len();
        subs.entries.retain(|(entry, _)| *entry != id);
        subs.entries.len() != before
    }

    /// Store `token`, reset user and error, and start the first profile fetch.
    ///
    /// The token is not verified here; validity is only discovered by the
    /// returned fetch, which must be driven to completion by the caller.
    ///
    /// # Errors
    ///
    /// `SessionError::EmptyToken` if `token` is empty; the session is untouched.
    pub fn login(&self, token: &str) -> Result<impl Future<Output = ()> + use<>, SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        self.shared.store.set(token);
        let token = token.to_owned();
        self.update(move |m| {
            m.epoch += 1;
            m.in_flight = None;
            m.session = Session { token: Some(token), status: SessionStatus::Authenticating, ..Session::default() };
            Some(())
        });
        Ok(self.fetch_user_profile())
    }

    /// Drop the token and user. Any fetch still in flight is orphaned.
    pub fn logout(&self) {
        self.shared.store.clear();
        self.update(|m| {
            m.epoch += 1;
            m.in_flight = None;
            m.session = Session::default();
            Some(())
        });
    }

    /// Refresh the profile for the current token.
    ///
    /// `loading` is raised before this returns. Without a token, or while a
    /// fetch for the current session is already in flight, the returned future
    /// completes immediately without touching state.
    pub fn fetch_user_profile(&self) -> impl Future<Output = ()> + use<> {
        let request = self.begin_fetch();
        async move {
            if let Some(request) = request {
                request.run().await;
            }
        }
    }

    /// Check `token` against the profile endpoint without touching the session.
    ///
    /// # Errors
    ///
    /// The classified fetch failure.
    pub async fn probe(&self, token: &str) -> Result<UserRecord, ErrorKind> {
        self.shared.fetcher.fetch(token).await
    }

    fn begin_fetch(&self) -> Option<InFlight> {
        let (epoch, token) = self.update(|m| {
            let token = m.session.token.clone()?;
            if m.in_flight == Some(m.epoch) {
                log::debug!("profile fetch already in flight; coalescing");
                return None;
            }
            m.in_flight = Some(m.epoch);
            m.session.loading = true;
            Some((m.epoch, token))
        })?;
        Some(InFlight { controller: self.clone(), epoch, token, settled: false })
    }

    /// Apply a finished (or abandoned, when `outcome` is `None`) fetch.
    fn settle(&self, epoch: u64, token: &str, outcome: Option<Result<UserRecord, ErrorKind>>) {
        self.update(|m| {
            let current =
                m.epoch == epoch && m.in_flight == Some(epoch) && m.session.token.as_deref() == Some(token);
            if !current {
                log::debug!("discarding profile result from a previous session");
                return None;
            }
            m.in_flight = None;
            m.session.loading = false;
            match outcome {
                Some(Ok(user)) => {
                    m.session.user = Some(user);
                    m.session.error = None;
                    m.session.status = SessionStatus::Authenticated;
                }
                Some(Err(kind)) => {
                    m.session.error = Some(kind);
                    m.session.status = SessionStatus::Error;
                }
                None => {}
            }
            Some(())
        });
    }

    /// Run `f` under the state lock; when it returns `Some`, notify
    /// subscribers with the resulting snapshot after the lock is released.
    fn update<R>(&self, f: impl FnOnce(&mut Machine) -> Option<R>) -> Option<R> {
        let (result, snapshot) = {
            let mut machine = self.lock_machine();
            let result = f(&mut *machine)?;
            (result, machine.session.clone())
        };
        let subscribers: Vec<Subscriber> =
            self.lock_subscribers().entries.iter().map(|(_, s)| Arc::clone(s)).collect();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
        Some(result)
    }

    fn lock_machine(&self) -> std::sync::MutexGuard<'_, Machine> {
        self.shared.machine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_subscribers(&self) -> std::sync::MutexGuard<'_, Subscribers> {
        self.shared.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController").field("session", &self.snapshot()).finish_non_exhaustive()
    }
}

/// One issued profile fetch. Dropping it unsettled releases `loading`.
struct InFlight {
    controller: SessionController,
    epoch: u64,
    token: String,
    settled: bool,
}

impl InFlight {
    async fn run(mut self) {
        let outcome = self.controller.shared.fetcher.fetch(&self.token).await;
        self.settled = true;
        self.controller.settle(self.epoch, &self.token, Some(outcome));
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.settled {
            self.controller.settle(self.epoch, &self.token, None);
        }
    }
}
