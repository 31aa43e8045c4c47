use time::macros::datetime;

use super::*;

fn with_token() -> Session {
    Session {
        token: Some("demo-token-123".to_owned()),
        status: SessionStatus::Authenticating,
        ..Session::default()
    }
}

#[test]
fn profile_entry_redirects_without_token() {
    assert_eq!(profile_entry(&Session::default()), ProfileEntry::RedirectToLogin);
}

#[test]
fn profile_entry_renders_cached_user_without_fetch() {
    let session = Session {
        user: Some(UserRecord::new("u1", "ok")),
        status: SessionStatus::Authenticated,
        ..with_token()
    };
    assert_eq!(profile_entry(&session), ProfileEntry::ShowCached);
}

#[test]
fn profile_entry_waits_for_request_already_in_flight() {
    let session = Session { loading: true, ..with_token() };
    assert_eq!(profile_entry(&session), ProfileEntry::AwaitInFlight);
}

#[test]
fn profile_entry_fetches_when_user_missing() {
    assert_eq!(profile_entry(&with_token()), ProfileEntry::Fetch);
}

#[test]
fn failure_banner_only_in_error_state() {
    let failed = Session {
        error: Some(ErrorKind::NetworkError),
        status: SessionStatus::Error,
        ..with_token()
    };
    assert_eq!(failure_banner(&failed), Some(ErrorKind::NetworkError));
    assert_eq!(failure_banner(&with_token()), None);
}

#[test]
fn profile_fields_lists_required_rows_first() {
    let rows = profile_fields(&UserRecord::new("u1", "ok"));
    assert_eq!(rows, vec![("User ID", "u1".to_owned()), ("Message", "ok".to_owned())]);
}

#[test]
fn profile_fields_includes_present_optional_rows() {
    let user = UserRecord {
        email: Some("user@example.com".to_owned()),
        last_name: Some("Doe".to_owned()),
        created_at: Some(datetime!(2024-01-01 00:00:00 UTC)),
        ..UserRecord::new("u1", "ok")
    };
    let labels: Vec<_> = profile_fields(&user).into_iter().map(|(label, _)| label).collect();
    assert_eq!(labels, ["User ID", "Message", "Email", "Last Name", "Created"]);
    assert_eq!(profile_fields(&user)[4].1, "2024-01-01");
}

mod refresh {
    use std::sync::Arc;

    use futures::FutureExt;
    use futures::executor::block_on;

    use crate::net::api::ProfileFetcher;
    use crate::net::scripted_transport::{ScriptedTransport, json, offline};
    use crate::state::credentials::MemoryCredentialStore;
    use crate::state::session::{SessionController, SessionStatus};

    const U1: &str = r#"{"user_id":"u1","message":"ok"}"#;

    fn controller(transport: &Arc<ScriptedTransport>) -> SessionController {
        SessionController::new(Arc::new(MemoryCredentialStore::new()), ProfileFetcher::new(transport.clone()))
    }

    #[test]
    fn refresh_while_loading_sends_no_second_request() {
        let transport = ScriptedTransport::new();
        let gate = transport.gate("t");
        let session = controller(&transport);
        let pending = session.login("t").unwrap();
        assert!(session.snapshot().loading);

        assert!(session.fetch_user_profile().now_or_never().is_some());
        gate.send(json(200, U1)).unwrap();
        block_on(pending);

        assert_eq!(transport.call_count(), 1);
        assert_eq!(session.status(), SessionStatus::Authenticated);
    }

    #[test]
    fn refresh_after_error_refetches() {
        let transport = ScriptedTransport::new();
        transport.reply("t", offline());
        transport.reply("t", json(200, U1));
        let session = controller(&transport);
        block_on(session.login("t").unwrap());
        assert_eq!(session.status(), SessionStatus::Error);

        block_on(session.fetch_user_profile());

        assert_eq!(transport.call_count(), 2);
        assert_eq!(session.status(), SessionStatus::Authenticated);
    }
}
