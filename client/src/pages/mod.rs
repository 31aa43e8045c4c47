//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (redirects, fetch triggers) and
//! reads session state through the `SessionHandle` it is given.

pub mod home;
pub mod login;
pub mod profile;
