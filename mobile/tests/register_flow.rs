//! End-to-end submission flow against an HTTP double.
//!
//! Drives the registration service through the real reqwest gateway at a
//! wiremock server, covering the success, server-rejection, and transport
//! failure classifications plus the no-network guarantee for invalid
//! candidates.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mobile::domain::ports::NullNotifier;
use mobile::domain::{
    LoginCredentials, RegistrationCandidate, RegistrationService, SubmissionOutcome,
};
use mobile::outbound::http::HttpAccountGateway;

const TIMEOUT: Duration = Duration::from_secs(5);

fn valid_candidate() -> RegistrationCandidate {
    let mut candidate = RegistrationCandidate::new();
    candidate.set_username("validUser");
    candidate.set_email("x@y.com");
    candidate.set_phone("+254712345678");
    candidate.set_password("Str0ng!Passw0rd");
    candidate.set_confirm_password("Str0ng!Passw0rd");
    candidate.set_location("Bumadeya");
    candidate
}

fn service_for(server_uri: &str) -> RegistrationService<HttpAccountGateway, NullNotifier> {
    let base_url = Url::parse(server_uri).expect("mock server URI should parse");
    let gateway =
        HttpAccountGateway::new(&base_url, TIMEOUT).expect("gateway should construct");
    RegistrationService::new(Arc::new(gateway), Arc::new(NullNotifier))
}

#[tokio::test]
async fn created_response_classifies_as_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_partial_json(json!({
            "username": "validUser",
            "confirmPassword": "Str0ng!Passw0rd",
            "role": "viewer",
        })))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    let outcome = service_for(&mock_server.uri())
        .submit(&valid_candidate())
        .await;

    assert_eq!(outcome, SubmissionOutcome::Success);
    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1, "exactly one request per submit");
}

#[tokio::test]
async fn conflict_with_error_body_carries_the_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"error": "email already registered"})),
        )
        .mount(&mock_server)
        .await;

    let outcome = service_for(&mock_server.uri())
        .submit(&valid_candidate())
        .await;

    assert_eq!(
        outcome,
        SubmissionOutcome::RequestFailed {
            reason: "email already registered".to_owned()
        }
    );
}

#[tokio::test]
async fn rejection_without_an_error_body_uses_the_generic_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let outcome = service_for(&mock_server.uri())
        .submit(&valid_candidate())
        .await;

    assert_eq!(
        outcome,
        SubmissionOutcome::RequestFailed {
            reason: "registration failed".to_owned()
        }
    );
}

#[tokio::test]
async fn unreachable_server_classifies_as_the_network_error_class() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    // Shut the double down so the connection is refused.
    drop(mock_server);

    let outcome = service_for(&uri).submit(&valid_candidate()).await;

    assert_eq!(
        outcome,
        SubmissionOutcome::RequestFailed {
            reason: "network error".to_owned()
        }
    );
}

#[tokio::test]
async fn invalid_candidate_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    let mut candidate = valid_candidate();
    candidate.set_username("ab");

    let outcome = service_for(&mock_server.uri()).submit(&candidate).await;

    assert!(matches!(outcome, SubmissionOutcome::ValidationFailed(_)));
    let received = mock_server.received_requests().await.unwrap();
    assert!(
        received.is_empty(),
        "validation failures must never reach the network"
    );
}

#[tokio::test]
async fn login_returns_the_opaque_success_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_partial_json(json!({"email": "x@y.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "opaque"})))
        .mount(&mock_server)
        .await;

    let base_url = Url::parse(&mock_server.uri()).expect("mock server URI should parse");
    let gateway = HttpAccountGateway::new(&base_url, TIMEOUT).expect("gateway should construct");
    let credentials = LoginCredentials::try_from_parts("x@y.com", "Str0ng!Passw0rd")
        .expect("credentials shape");

    use mobile::domain::ports::AccountGateway;
    let payload = gateway
        .login(&credentials)
        .await
        .expect("login should succeed");

    assert_eq!(payload, json!({"token": "opaque"}));
}
