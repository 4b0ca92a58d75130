//! Driven port for reverse geocoding device coordinates.
//!
//! The domain owns the place-name contract so the workflow stays
//! adapter-agnostic about which geocoding service answers.

use std::fmt;

use async_trait::async_trait;

use super::position_sensor::GeoPosition;

/// Validation errors returned by [`PlaceName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceNameValidationError {
    /// Place name was missing or blank once trimmed.
    EmptyPlaceName,
}

impl fmt::Display for PlaceNameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPlaceName => write!(f, "place name must not be empty"),
        }
    }
}

impl std::error::Error for PlaceNameValidationError {}

/// Human-readable place name resolved from coordinates.
///
/// ## Invariants
/// - The name is trimmed and must not be empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceName(String);

impl PlaceName {
    /// Validate and construct a [`PlaceName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, PlaceNameValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PlaceNameValidationError::EmptyPlaceName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PlaceName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PlaceName> for String {
    fn from(value: PlaceName) -> Self {
        value.0
    }
}

/// Errors surfaced while resolving a place name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceLookupError {
    /// Network transport failed before receiving a response.
    #[error("place lookup transport failed: {message}")]
    Transport {
        /// Underlying transport detail.
        message: String,
    },
    /// The lookup exceeded the client timeout.
    #[error("place lookup timeout: {message}")]
    Timeout {
        /// Underlying timeout detail.
        message: String,
    },
    /// The geocoding service answered with an error status.
    #[error("place lookup rejected: status {status}")]
    Rejected {
        /// HTTP status code returned by the service.
        status: u16,
    },
    /// The response held no usable place name.
    #[error("place lookup response decode failed: {message}")]
    Decode {
        /// Decoding failure detail.
        message: String,
    },
    /// The adapter rejected the coordinates before execution.
    #[error("place lookup position invalid: {message}")]
    InvalidPosition {
        /// Why the coordinates were rejected.
        message: String,
    },
}

impl PlaceLookupError {
    /// Build a [`PlaceLookupError::Transport`] error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`PlaceLookupError::Timeout`] error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`PlaceLookupError::Rejected`] error.
    pub fn rejected(status: u16) -> Self {
        Self::Rejected { status }
    }

    /// Build a [`PlaceLookupError::Decode`] error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Build a [`PlaceLookupError::InvalidPosition`] error.
    pub fn invalid_position(message: impl Into<String>) -> Self {
        Self::InvalidPosition {
            message: message.into(),
        }
    }
}

/// Port for mapping coordinates to a human-readable place name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceLookup: Send + Sync {
    /// Resolve one position into a place name.
    async fn place_name(&self, position: GeoPosition) -> Result<PlaceName, PlaceLookupError>;
}

/// Fixture lookup returning one fixed place name.
#[derive(Debug, Clone)]
pub struct FixturePlaceLookup {
    place: PlaceName,
}

impl FixturePlaceLookup {
    /// Build a lookup that always resolves to `place`.
    pub fn new(place: PlaceName) -> Self {
        Self { place }
    }
}

#[async_trait]
impl PlaceLookup for FixturePlaceLookup {
    async fn place_name(&self, _position: GeoPosition) -> Result<PlaceName, PlaceLookupError> {
        Ok(self.place.clone())
    }
}
