use super::*;
use crate::net::test_helpers::{FakeTransport, TEST_BASE_URL, gateway};
use futures::executor::block_on;
use serde_json::json;

// =============================================================
// Local validation
// =============================================================

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("a@b.com", "secret1"), Ok(()));
    assert_eq!(validate_login_input("", "secret1"), Err(ValidationError::MissingCredentials));
    assert_eq!(validate_login_input("a@b.com", ""), Err(ValidationError::MissingCredentials));
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(validate_register_input("", "a@b.com", "secret1"), Err(ValidationError::MissingFields));
    assert_eq!(validate_register_input("alice", "", "secret1"), Err(ValidationError::MissingFields));
    assert_eq!(validate_register_input("alice", "a@b.com", ""), Err(ValidationError::MissingFields));
}

#[test]
fn validate_register_input_enforces_min_password_length() {
    assert_eq!(validate_register_input("alice", "a@b.com", "abc"), Err(ValidationError::PasswordTooShort));
    assert_eq!(validate_register_input("alice", "a@b.com", "12345"), Err(ValidationError::PasswordTooShort));
    assert_eq!(validate_register_input("alice", "a@b.com", "123456"), Ok(()));
}

#[test]
fn validation_messages_match_form_copy() {
    assert_eq!(ValidationError::MissingCredentials.to_string(), "Please enter both email and password.");
    assert_eq!(ValidationError::MissingFields.to_string(), "Please fill in all fields.");
    assert_eq!(ValidationError::PasswordTooShort.to_string(), "Password must be at least 6 characters long.");
}

// =============================================================
// Response interpretation
// =============================================================

#[test]
fn api_error_uses_server_message() {
    let resp = HttpResponse::new(401, r#"{"message":"Invalid credentials"}"#);
    let err = api_error(&resp);
    assert_eq!(err, AuthError::Api { status: 401, message: "Invalid credentials".to_owned() });
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn api_error_falls_back_to_status_message() {
    assert_eq!(api_error(&HttpResponse::new(500, "<html>oops</html>")).to_string(), "HTTP error! Status: 500");
    assert_eq!(api_error(&HttpResponse::new(400, r#"{"message":""}"#)).to_string(), "HTTP error! Status: 400");
    assert_eq!(api_error(&HttpResponse::new(404, "{}")).to_string(), "HTTP error! Status: 404");
}

#[test]
fn interpret_login_response_extracts_session_pair() {
    let resp = HttpResponse::new(200, json!({ "token": "T1", "user": { "username": "alice" } }).to_string());
    let success = interpret_login_response(&resp).unwrap();
    assert_eq!(success.token, "T1");
    assert_eq!(success.user.username(), Some("alice"));
}

#[test]
fn interpret_login_response_accepts_user_fields_of_any_type() {
    let user = json!({ "username": 42, "name": { "first": "Alice" }, "email": null });
    let resp = HttpResponse::new(200, json!({ "token": "T1", "user": user }).to_string());
    let success = interpret_login_response(&resp).unwrap();
    assert_eq!(success.token, "T1");
    assert_eq!(success.user.display_name(), "User");
    assert_eq!(serde_json::to_value(&success.user).unwrap(), user);
}

#[test]
fn interpret_login_response_requires_token_and_user() {
    let cases = [
        json!({ "user": { "username": "alice" } }),
        json!({ "token": "T1" }),
        json!({ "token": "", "user": { "username": "alice" } }),
        json!({ "token": "T1", "user": null }),
        json!({ "token": "T1", "user": "alice" }),
    ];
    for body in cases {
        let resp = HttpResponse::new(200, body.to_string());
        assert_eq!(interpret_login_response(&resp), Err(AuthError::MalformedResponse), "body: {body}");
    }
}

#[test]
fn interpret_login_response_rejects_non_json_success() {
    let resp = HttpResponse::new(200, "OK");
    assert_eq!(interpret_login_response(&resp), Err(AuthError::MalformedResponse));
}

#[test]
fn interpret_register_response_accepts_any_success_body() {
    assert_eq!(
        interpret_register_response(&HttpResponse::new(201, r#"{"message":"created"}"#)),
        Ok(RegisterAck { message: Some("created".to_owned()) })
    );
    assert_eq!(interpret_register_response(&HttpResponse::new(204, "")), Ok(RegisterAck::default()));
}

#[test]
fn interpret_register_response_surfaces_server_rejection() {
    let resp = HttpResponse::new(409, r#"{"message":"Email already in use"}"#);
    assert_eq!(interpret_register_response(&resp).unwrap_err().to_string(), "Email already in use");
}

// =============================================================
// Gateway requests
// =============================================================

#[test]
fn gateway_trims_trailing_slash_from_base_url() {
    let gw = AuthGateway::new("https://api.test///", FakeTransport::replying(200, json!({})));
    assert_eq!(gw.base_url(), "https://api.test");
}

#[test]
fn login_posts_credentials_to_login_endpoint() {
    let gw = gateway(FakeTransport::replying(200, json!({ "token": "T1", "user": { "username": "alice" } })));
    block_on(gw.login("a@b.com", "secret1")).unwrap();

    let requests = gw.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, format!("{TEST_BASE_URL}/auth/login"));
    assert_eq!(requests[0].1, json!({ "email": "a@b.com", "password": "secret1" }));
}

#[test]
fn login_with_empty_field_sends_nothing() {
    let gw = gateway(FakeTransport::replying(200, json!({})));
    let err = block_on(gw.login("", "secret1")).unwrap_err();
    assert_eq!(err, AuthError::Validation(ValidationError::MissingCredentials));
    assert!(gw.transport().requests().is_empty());
}

#[test]
fn register_posts_to_register_endpoint() {
    let gw = gateway(FakeTransport::replying(201, json!({ "message": "ok" })));
    block_on(gw.register("alice", "a@b.com", "secret1")).unwrap();

    let requests = gw.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, format!("{TEST_BASE_URL}/auth/register"));
    assert_eq!(requests[0].1, json!({ "username": "alice", "email": "a@b.com", "password": "secret1" }));
}

#[test]
fn register_with_short_password_sends_nothing() {
    let gw = gateway(FakeTransport::replying(201, json!({})));
    let err = block_on(gw.register("alice", "a@b.com", "abc")).unwrap_err();
    assert_eq!(err.to_string(), "Password must be at least 6 characters long.");
    assert!(gw.transport().requests().is_empty());
}

#[test]
fn transport_failure_is_reported_verbatim() {
    let gw = gateway(FakeTransport::failing("Failed to fetch"));
    let err = block_on(gw.login("a@b.com", "secret1")).unwrap_err();
    assert_eq!(err, AuthError::Transport("Failed to fetch".to_owned()));
    assert_eq!(err.to_string(), "Failed to fetch");
}

#[test]
fn login_with_non_json_error_reports_status() {
    let gw = gateway(FakeTransport::replying_raw(502, "<html>Bad Gateway</html>"));
    let err = block_on(gw.login("a@b.com", "secret1")).unwrap_err();
    assert_eq!(err, AuthError::Api { status: 502, message: "HTTP error! Status: 502".to_owned() });
}
