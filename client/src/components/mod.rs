//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components shared across routes. They receive the session handle as a prop
//! rather than reading it from context.

pub mod header;
