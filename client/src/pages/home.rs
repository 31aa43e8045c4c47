//! Landing page.
//!
//! Shows a login affordance or a profile link depending solely on whether a
//! token is held.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::state::handle::SessionHandle;
use crate::state::session::Session;

/// Primary call-to-action link as `(href, label)`.
pub(crate) fn call_to_action(session: &Session) -> (&'static str, &'static str) {
    if session.has_token() { ("/profile", "View Your Profile") } else { ("/login", "Login") }
}

#[component]
pub fn HomePage(session: SessionHandle) -> impl IntoView {
    let state = session.state;
    let signed_in = move || state.with(Session::has_token);

    view! {
        <div class="card">
            <h1>"Welcome to Apacks"</h1>
            <p>"A user management system with a Rust API and a Leptos client."</p>

            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <div class="alert alert-info">
                            <strong>"Get started: "</strong>
                            "Please log in to access your profile."
                        </div>
                    }
                }
            >
                <div class="alert alert-success">
                    <strong>"Welcome back! "</strong>
                    "You are logged in."
                </div>
            </Show>

            <div class="card__actions">
                {move || {
                    let (href, label) = call_to_action(&state.get());
                    view! { <a href=href class="btn btn-primary">{label}</a> }
                }}
            </div>
        </div>
    }
}
