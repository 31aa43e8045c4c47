//! Top navigation bar.
//!
//! Links depend only on token presence. Logout clears the session through the
//! controller, then returns to `/`.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::handle::SessionHandle;
use crate::state::session::{Session, SessionController};

/// Navigation links as `(href, label)`, in display order.
pub(crate) fn nav_links(session: &Session) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("/", "Home")];
    if session.has_token() {
        links.push(("/profile", "Profile"));
    } else {
        links.push(("/login", "Login"));
    }
    links
}

/// Clear the session and navigate to `/` synchronously.
pub(crate) fn log_out(controller: &SessionController, navigate: impl Fn(&str, NavigateOptions)) {
    controller.logout();
    navigate("/", NavigateOptions::default());
}

#[component]
pub fn Header(session: SessionHandle) -> impl IntoView {
    let state = session.state;
    let navigate = use_navigate();
    let controller = session.controller;
    let on_logout = move |_| log_out(&controller, &navigate);

    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <a href="/" class="site-header__brand">"Apacks"</a>
                <nav>
                    <ul class="site-header__links">
                        {move || {
                            nav_links(&state.get())
                                .into_iter()
                                .map(|(href, label)| view! { <li><a href=href>{label}</a></li> })
                                .collect_view()
                        }}
                        <li hidden=move || !state.with(Session::has_token)>
                            <button class="site-header__logout" on:click=on_logout>"Logout"</button>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
