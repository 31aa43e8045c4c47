//! Login page: bearer-token entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! The entered token is probed against the profile endpoint first. Only a
//! successful probe reaches `SessionController::login`; any failure shows one
//! generic message and leaves the session untouched.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ErrorKind;
use crate::state::handle::SessionHandle;

/// Token that the development server accepts; shown as a hint.
pub const DEMO_TOKEN: &str = "demo-token-123";

const EMPTY_TOKEN_MESSAGE: &str = "Please enter a token";
const INVALID_TOKEN_MESSAGE: &str = "Invalid token. Please try again.";

/// Accept any input that is not blank. The token itself is passed on verbatim.
pub(crate) fn validate_token_input(raw: &str) -> Result<String, &'static str> {
    if raw.trim().is_empty() { Err(EMPTY_TOKEN_MESSAGE) } else { Ok(raw.to_owned()) }
}

/// Message shown for a failed probe; every failure kind reads the same.
pub(crate) fn login_failure_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Unauthorized | ErrorKind::NetworkError | ErrorKind::MalformedResponse => INVALID_TOKEN_MESSAGE,
    }
}

#[component]
pub fn LoginPage(session: SessionHandle) -> impl IntoView {
    let token = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let logged_in = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        if logged_in.get() {
            logged_in.set(false);
            navigate("/profile", NavigateOptions::default());
        }
    });

    let controller = session.controller.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let candidate = match validate_token_input(&token.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let controller = controller.clone();
            leptos::task::spawn_local(async move {
                if let Err(kind) = controller.probe(&candidate).await {
                    log::warn!("login probe failed: {kind}");
                    error.set(login_failure_message(kind).to_owned());
                    busy.set(false);
                    return;
                }
                match controller.login(&candidate) {
                    Ok(request) => {
                        busy.set(false);
                        logged_in.set(true);
                        request.await;
                    }
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&controller, candidate);
        }
    };

    view! {
        <div class="card">
            <h1>"Login"</h1>
            <p>"Enter your access token to view your profile."</p>

            <Show when=move || !error.get().is_empty()>
                <div class="alert alert-error">
                    <strong>"Error: "</strong>
                    {move || error.get()}
                </div>
            </Show>

            <form class="login-form" on:submit=on_submit>
                <label class="form-group">
                    <span class="form-label">"Access Token"</span>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Enter your access token"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                </label>
                <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>

            <div class="login-demo">
                <h3>"Demo Token"</h3>
                <p>"The development server accepts any non-empty token."</p>
                <div class="alert alert-info">
                    <strong>"Example: "</strong>
                    {DEMO_TOKEN}
                </div>
            </div>
        </div>
    }
}
