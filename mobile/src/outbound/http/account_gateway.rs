//! Reqwest-backed account service gateway.
//!
//! This adapter owns transport details only: request serialisation, timeout
//! and HTTP error mapping. Deciding what a failure means for the user stays
//! in the registration service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use super::dto::{ErrorBodyDto, LoginRequestDto, RegisterRequestDto};
use crate::domain::login::LoginCredentials;
use crate::domain::ports::{AccountGateway, AccountGatewayError};
use crate::domain::validation::NormalizedRecord;

/// Errors raised while constructing the gateway.
#[derive(Debug, thiserror::Error)]
pub enum AccountGatewayBuildError {
    /// The configured base URL could not host the endpoint paths.
    #[error("invalid account service URL: {0}")]
    Url(#[from] url::ParseError),
    /// The HTTP client could not be constructed.
    #[error("failed to construct HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Account service gateway performing HTTP POST requests against a base URL.
pub struct HttpAccountGateway {
    client: Client,
    register_endpoint: Url,
    login_endpoint: Url,
}

impl HttpAccountGateway {
    /// Build a gateway using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint URLs cannot be derived from
    /// `base_url` or the reqwest client cannot be constructed.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, AccountGatewayBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            register_endpoint: base_url.join("register")?,
            login_endpoint: base_url.join("login")?,
        })
    }
}

#[async_trait]
impl AccountGateway for HttpAccountGateway {
    async fn register(&self, record: &NormalizedRecord) -> Result<(), AccountGatewayError> {
        let response = self
            .client
            .post(self.register_endpoint.clone())
            .json(&RegisterRequestDto::from(record))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            // Any 2xx counts; the body is ignored beyond presence.
            return Ok(());
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        Err(rejection(status, body.as_ref()))
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<Value, AccountGatewayError> {
        let response = self
            .client
            .post(self.login_endpoint.clone())
            .json(&LoginRequestDto::from(credentials))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(rejection(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref()).map_err(|error| {
            AccountGatewayError::decode(format!("invalid login payload: {error}"))
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> AccountGatewayError {
    if error.is_timeout() {
        AccountGatewayError::timeout(error.to_string())
    } else {
        AccountGatewayError::transport(error.to_string())
    }
}

fn rejection(status: StatusCode, body: &[u8]) -> AccountGatewayError {
    AccountGatewayError::rejected(status.as_u16(), server_error_message(body))
}

/// Extract the `error` text some rejection bodies carry.
fn server_error_message(body: &[u8]) -> Option<String> {
    let decoded: ErrorBodyDto = serde_json::from_slice(body).ok()?;
    let message = decoded.error?;
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::domain::candidate::RegistrationCandidate;
    use crate::domain::validation::{RegistrationResult, validate};

    fn normalized_record() -> NormalizedRecord {
        let mut candidate = RegistrationCandidate::new();
        candidate.set_username("validUser");
        candidate.set_email("x@y.com");
        candidate.set_phone("+254712345678");
        candidate.set_password("Str0ng!Passw0rd");
        candidate.set_confirm_password("Str0ng!Passw0rd");
        candidate.set_location("Bumadeya");
        match validate(&candidate) {
            RegistrationResult::Accepted(record) => record,
            RegistrationResult::Rejected(violations) => {
                panic!("fixture candidate must validate: {violations:?}")
            }
        }
    }

    #[rstest]
    fn register_body_uses_the_screen_wire_shape() {
        let record = normalized_record();
        let body = serde_json::to_value(RegisterRequestDto::from(&record))
            .expect("DTO should serialise");

        assert_eq!(
            body,
            json!({
                "username": "validUser",
                "email": "x@y.com",
                "phone": "+254712345678",
                "password": "Str0ng!Passw0rd",
                "confirmPassword": "Str0ng!Passw0rd",
                "location": "Bumadeya",
                "role": "viewer",
            })
        );
    }

    #[rstest]
    #[case::error_field(br#"{"error":"email already registered"}"#, Some("email already registered"))]
    #[case::trimmed(br#"{"error":"  spaced out  "}"#, Some("spaced out"))]
    #[case::empty_error(br#"{"error":""}"#, None)]
    #[case::null_error(br#"{"error":null}"#, None)]
    #[case::no_error_field(br#"{"message":"nope"}"#, None)]
    #[case::not_json(b"service unavailable", None)]
    fn server_error_message_reads_the_error_field(
        #[case] body: &[u8],
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(server_error_message(body).as_deref(), expected);
    }

    #[rstest]
    fn rejection_carries_status_and_verbatim_message() {
        let error = rejection(
            StatusCode::CONFLICT,
            br#"{"error":"email already registered"}"#,
        );
        assert_eq!(
            error,
            AccountGatewayError::rejected(409, Some("email already registered".to_owned()))
        );
    }

    #[rstest]
    fn rejection_without_a_body_message_keeps_only_the_status() {
        let error = rejection(StatusCode::INTERNAL_SERVER_ERROR, b"");
        assert_eq!(error, AccountGatewayError::rejected(500, None));
    }
}
