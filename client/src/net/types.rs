//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server serializes these same types, so the profile payload shape is
//! defined exactly once. Optional fields are omitted on the wire when absent
//! and tolerated when missing on input.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

/// Profile payload returned by `GET /api/v1/user` for the presented token.
///
/// Immutable snapshot; the client never edits it locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-side user identifier.
    pub user_id: String,
    /// Human-readable status message from the profile endpoint.
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Account creation time (RFC 3339 on the wire).
    #[serde(default, skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Last profile update time (RFC 3339 on the wire).
    #[serde(default, skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl UserRecord {
    /// Minimal record with only the required fields set.
    #[must_use]
    pub fn new(user_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            message: message.into(),
            email: None,
            first_name: None,
            last_name: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Creation date formatted as `YYYY-MM-DD`, if known.
    pub fn created_date(&self) -> Option<String> {
        let format = format_description!("[year]-[month]-[day]");
        self.created_at.and_then(|ts| ts.format(&format).ok())
    }
}
