use super::*;
use time::macros::datetime;

// =============================================================
// UserRecord serde
// =============================================================

#[test]
fn user_record_parses_minimal_body() {
    let user: UserRecord = serde_json::from_str(r#"{"user_id":"u1","message":"ok"}"#).unwrap();
    assert_eq!(user, UserRecord::new("u1", "ok"));
}

#[test]
fn user_record_parses_full_backend_body() {
    let json = r#"{
        "user_id": "mock-user-id",
        "message": "User retrieved successfully",
        "email": "user@example.com",
        "first_name": "John",
        "last_name": "Doe",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;
    let user: UserRecord = serde_json::from_str(json).unwrap();
    assert_eq!(user.user_id, "mock-user-id");
    assert_eq!(user.email.as_deref(), Some("user@example.com"));
    assert_eq!(user.first_name.as_deref(), Some("John"));
    assert_eq!(user.last_name.as_deref(), Some("Doe"));
    assert_eq!(user.created_at, Some(datetime!(2024-01-01 00:00:00 UTC)));
    assert_eq!(user.updated_at, Some(datetime!(2024-01-01 00:00:00 UTC)));
}

#[test]
fn user_record_ignores_unknown_fields() {
    let user: UserRecord =
        serde_json::from_str(r#"{"user_id":"u1","message":"ok","role":"admin"}"#).unwrap();
    assert_eq!(user.user_id, "u1");
}

#[test]
fn user_record_requires_user_id() {
    assert!(serde_json::from_str::<UserRecord>(r#"{"message":"ok"}"#).is_err());
}

#[test]
fn user_record_rejects_non_rfc3339_timestamp() {
    let json = r#"{"user_id":"u1","message":"ok","created_at":"yesterday"}"#;
    assert!(serde_json::from_str::<UserRecord>(json).is_err());
}

#[test]
fn user_record_omits_absent_optionals_when_serialized() {
    let value = serde_json::to_value(UserRecord::new("u1", "ok")).unwrap();
    assert_eq!(value, serde_json::json!({"user_id": "u1", "message": "ok"}));
}

// =============================================================
// created_date
// =============================================================

#[test]
fn created_date_formats_calendar_day() {
    let mut user = UserRecord::new("u1", "ok");
    user.created_at = Some(datetime!(2024-03-09 17:45:00 UTC));
    assert_eq!(user.created_date().as_deref(), Some("2024-03-09"));
}

#[test]
fn created_date_is_none_without_timestamp() {
    assert!(UserRecord::new("u1", "ok").created_date().is_none());
}
