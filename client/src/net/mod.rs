//! Networking modules for the profile REST endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and the profile fetch/classification, and
//! `types` defines the wire schema shared with the server.

pub mod api;
#[cfg(test)]
pub(crate) mod scripted_transport;
pub mod types;
