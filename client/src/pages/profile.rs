//! Profile page: renders the cached user record or fetches it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable only with a token. A populated `user` renders directly; otherwise
//! the page asks the controller for a fetch once the persisted session has
//! been applied. Failures keep any cached record on screen below the error.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::ErrorKind;
use crate::net::types::UserRecord;
use crate::state::handle::SessionHandle;
use crate::state::session::{Session, SessionStatus};
use crate::util::auth::install_login_redirect;

/// What the page does on entry for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ProfileEntry {
    RedirectToLogin,
    ShowCached,
    AwaitInFlight,
    Fetch,
}

pub(crate) fn profile_entry(session: &Session) -> ProfileEntry {
    if !session.has_token() {
        ProfileEntry::RedirectToLogin
    } else if session.user.is_some() {
        ProfileEntry::ShowCached
    } else if session.loading {
        ProfileEntry::AwaitInFlight
    } else {
        ProfileEntry::Fetch
    }
}

/// Failure banner contents; present only in the `Error` state.
pub(crate) fn failure_banner(session: &Session) -> Option<ErrorKind> {
    match session.status {
        SessionStatus::Error => session.error,
        _ => None,
    }
}

/// Labelled rows for the user card, omitting absent optional fields.
pub(crate) fn profile_fields(user: &UserRecord) -> Vec<(&'static str, String)> {
    let mut rows = vec![("User ID", user.user_id.clone()), ("Message", user.message.clone())];
    let optional = [
        ("Email", user.email.clone()),
        ("First Name", user.first_name.clone()),
        ("Last Name", user.last_name.clone()),
        ("Created", user.created_date()),
    ];
    rows.extend(optional.into_iter().filter_map(|(label, value)| value.map(|v| (label, v))));
    rows
}

#[component]
pub fn ProfilePage(session: SessionHandle) -> impl IntoView {
    let state = session.state;
    let ready = session.ready;
    install_login_redirect(&session, use_navigate());

    let entry_handle = session.clone();
    Effect::new(move |requested: Option<bool>| {
        if requested == Some(true) {
            return true;
        }
        if !ready.get() {
            return false;
        }
        if profile_entry(&state.get_untracked()) == ProfileEntry::Fetch {
            entry_handle.refresh();
        }
        true
    });

    let retry_handle = session.clone();
    let refresh_handle = session;

    view! {
        <div class="card">
            <h1>"User Profile"</h1>

            <Show when=move || state.with(|s| s.loading)>
                <div class="loading">"Loading user profile..."</div>
            </Show>

            {move || {
                failure_banner(&state.get()).map(|kind| {
                    let retry_handle = retry_handle.clone();
                    view! {
                        <div class="alert alert-error">
                            <strong>"Error: "</strong>
                            {kind.to_string()}
                        </div>
                        <button class="btn btn-primary" on:click=move |_| retry_handle.refresh()>
                            "Retry"
                        </button>
                    }
                })
            }}

            {move || match state.with(|s| s.user.clone()) {
                Some(user) => {
                    view! {
                        <div class="user-info">
                            <h3>"User Information"</h3>
                            {profile_fields(&user)
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <p>
                                            <strong>{label}": "</strong>
                                            {value}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
                None => view! { <div class="alert alert-info">"No user data available."</div> }.into_any(),
            }}

            <div class="card__actions">
                <button class="btn btn-secondary" on:click=move |_| refresh_handle.refresh()>
                    "Refresh Data"
                </button>
            </div>
        </div>
    }
}
