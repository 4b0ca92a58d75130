//! Driven port for the remote account service.
//!
//! The workflow hands over an already-validated record; the adapter owns the
//! wire contract. Classifying an outcome for the user stays in the
//! registration service.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::login::LoginCredentials;
use crate::domain::validation::NormalizedRecord;

/// Errors surfaced while calling the account service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountGatewayError {
    /// Network transport failed before any response arrived.
    #[error("account service transport failed: {message}")]
    Transport {
        /// Underlying transport detail.
        message: String,
    },
    /// The request exceeded the client timeout.
    #[error("account service timeout: {message}")]
    Timeout {
        /// Underlying timeout detail.
        message: String,
    },
    /// The service answered with an error status.
    #[error("account service rejected the request: status {status}")]
    Rejected {
        /// HTTP status code returned by the service.
        status: u16,
        /// Server-supplied `error` text, when the body carried one.
        message: Option<String>,
    },
    /// A success response could not be decoded.
    #[error("account service response decode failed: {message}")]
    Decode {
        /// Decoding failure detail.
        message: String,
    },
}

impl AccountGatewayError {
    /// Build an [`AccountGatewayError::Transport`] error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build an [`AccountGatewayError::Timeout`] error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build an [`AccountGatewayError::Rejected`] error.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    /// Build an [`AccountGatewayError::Decode`] error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Return whether no response was received at all.
    pub fn is_transport_class(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// Port for creating and authenticating accounts against the remote service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Send one accepted registration record to the account service.
    ///
    /// Any 2xx response counts as success; the response body is ignored
    /// beyond presence.
    async fn register(&self, record: &NormalizedRecord) -> Result<(), AccountGatewayError>;

    /// Exchange login credentials for the service's opaque success payload.
    async fn login(&self, credentials: &LoginCredentials) -> Result<Value, AccountGatewayError>;
}

/// Fixture gateway that accepts every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAccountGateway;

#[async_trait]
impl AccountGateway for FixtureAccountGateway {
    async fn register(&self, _record: &NormalizedRecord) -> Result<(), AccountGatewayError> {
        Ok(())
    }

    async fn login(&self, _credentials: &LoginCredentials) -> Result<Value, AccountGatewayError> {
        Ok(Value::Null)
    }
}
