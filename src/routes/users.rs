//! User profile route.

use axum::response::Json;
use client::net::types::UserRecord;
use time::macros::datetime;

use super::auth::BearerUser;

/// Fixed profile reported for the authenticated mock user.
pub(crate) fn mock_profile(user_id: &str) -> UserRecord {
    let seeded = datetime!(2024-01-01 00:00:00 UTC);
    UserRecord {
        email: Some("user@example.com".to_owned()),
        first_name: Some("John".to_owned()),
        last_name: Some("Doe".to_owned()),
        created_at: Some(seeded),
        updated_at: Some(seeded),
        ..UserRecord::new(user_id, "User retrieved successfully")
    }
}

/// `GET /api/v1/user`: profile for the bearer token's user.
pub async fn get_user(auth: BearerUser) -> Json<UserRecord> {
    tracing::info!(user_id = %auth.user_id, token_len = auth.token.len(), "user profile requested");
    Json(mock_profile(&auth.user_id))
}
