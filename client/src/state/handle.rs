//! Leptos binding for the session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root builds one `SessionHandle` and passes it to each view as a
//! prop. The handle mirrors controller notifications into a read-only signal
//! so views re-render on every transition.
//!
//! TRADE-OFFS
//! ==========
//! The signal starts as an anonymous session on both server and client so
//! hydration sees identical markup; the persisted token is applied by a
//! mount effect, which also flips `ready`. Redirect logic waits for `ready`.

use leptos::prelude::*;

use super::session::{Session, SessionController};

#[derive(Clone)]
pub struct SessionHandle {
    pub controller: SessionController,
    /// Latest session snapshot.
    pub state: ReadSignal<Session>,
    /// True once the client has applied the persisted session.
    pub ready: ReadSignal<bool>,
}

impl SessionHandle {
    /// Subscribe a signal to `controller` for the lifetime of the current owner.
    pub fn bind(controller: SessionController) -> Self {
        let (state, set_state) = signal(Session::default());
        let (ready, set_ready) = signal(false);

        let id = controller.subscribe(move |s| set_state.set(s.clone()));
        let subscribed = controller.clone();
        on_cleanup(move || {
            let _ = subscribed.unsubscribe(id);
        });

        // Effects only run in the browser, after hydration.
        let mounted = controller.clone();
        Effect::new(move || {
            set_state.set(mounted.snapshot());
            set_ready.set(true);
            spawn_request(mounted.fetch_user_profile());
        });

        Self { controller, state, ready }
    }

    /// Kick off a profile fetch (no-op without a token or while one is in flight).
    pub fn refresh(&self) {
        spawn_request(self.controller.fetch_user_profile());
    }

    pub fn logout(&self) {
        self.controller.logout();
    }
}

/// Drive a controller future on the browser task queue.
pub(crate) fn spawn_request(request: impl std::future::Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(request);
    #[cfg(not(feature = "hydrate"))]
    drop(request);
}
