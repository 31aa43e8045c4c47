//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::handle::SessionHandle;
use crate::state::session::Session;

/// Redirect decision: the persisted session has been applied and holds no token.
///
/// Only token presence matters; a missing or stale `user` never redirects.
pub fn should_redirect_to_login(ready: bool, session: &Session) -> bool {
    ready && !session.has_token()
}

/// Redirect to `/login` whenever the session is ready and has no token.
pub fn install_login_redirect<F>(session: &SessionHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let state = session.state;
    let ready = session.ready;
    Effect::new(move || {
        if should_redirect_to_login(ready.get(), &state.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
