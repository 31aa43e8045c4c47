//! Client-side session state.
//!
//! DESIGN
//! ======
//! `credentials` persists the bearer token, `session` owns the auth state
//! machine, and `handle` bridges it into Leptos signals for the views.

pub mod credentials;
pub mod handle;
pub mod session;
