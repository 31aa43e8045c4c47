use super::*;

#[test]
fn validate_token_input_requires_non_blank_value() {
    assert_eq!(validate_token_input(""), Err("Please enter a token"));
    assert_eq!(validate_token_input("   "), Err("Please enter a token"));
}

#[test]
fn validate_token_input_keeps_token_verbatim() {
    assert_eq!(validate_token_input("demo-token-123"), Ok("demo-token-123".to_owned()));
    assert_eq!(validate_token_input(" padded "), Ok(" padded ".to_owned()));
}

#[test]
fn every_failure_kind_shows_the_same_message() {
    let messages = [ErrorKind::Unauthorized, ErrorKind::NetworkError, ErrorKind::MalformedResponse]
        .map(login_failure_message);
    assert!(messages.iter().all(|m| *m == "Invalid token. Please try again."));
}

#[test]
fn demo_token_matches_dev_server_hint() {
    assert_eq!(DEMO_TOKEN, "demo-token-123");
}
