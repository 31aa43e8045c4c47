//! Root application component with routing and the shared session.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::net::api::ProfileFetcher;
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage};
use crate::state::credentials::BrowserCredentialStore;
use crate::state::handle::SessionHandle;
use crate::state::session::SessionController;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the one session controller for this page load and hands a bound
/// handle to the header and every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controller = SessionController::new(Arc::new(BrowserCredentialStore::load()), ProfileFetcher::browser());
    let session = SessionHandle::bind(controller);

    let home = {
        let session = session.clone();
        move || view! { <HomePage session=session.clone()/> }
    };
    let login = {
        let session = session.clone();
        move || view! { <LoginPage session=session.clone()/> }
    };
    let profile = {
        let session = session.clone();
        move || view! { <ProfilePage session=session.clone()/> }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/apacks.css"/>
        <Title text="Apacks"/>

        <Router>
            <Header session=session/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=home/>
                    <Route path=StaticSegment("login") view=login/>
                    <Route path=StaticSegment("profile") view=profile/>
                </Routes>
            </main>
        </Router>
    }
}
