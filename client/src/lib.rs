//! # client
//!
//! Leptos + WASM frontend for Apacks: bearer-token login, a persisted session,
//! and the user profile view.
//!
//! `state::session` holds the session state machine; `net` talks to the
//! profile endpoint; `pages` and `components` render it. The server crate
//! renders `app::App` for SSR and the `hydrate` build takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console_log init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
