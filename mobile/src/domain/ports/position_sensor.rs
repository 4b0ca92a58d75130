//! Driven port for reading the device position.
//!
//! The platform layer owns permission prompts and sensor access; the
//! workflow only sees coordinates or a classified failure.

use async_trait::async_trait;

/// WGS84 coordinates reported by the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Errors surfaced while reading the device position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionSensorError {
    /// The user (or platform policy) denied location access.
    #[error("location permission was denied")]
    PermissionDenied,
    /// The sensor produced no reading.
    #[error("position sensor unavailable: {message}")]
    Unavailable {
        /// Platform-supplied failure detail.
        message: String,
    },
}

impl PositionSensorError {
    /// Build an [`PositionSensorError::Unavailable`] error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Port for reading the device's current position.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PositionSensor: Send + Sync {
    /// Request permission if needed and read the current position.
    async fn current_position(&self) -> Result<GeoPosition, PositionSensorError>;
}

/// Fixture sensor reporting one fixed position.
///
/// Also wired by the headless CLI, where explicit coordinates stand in for
/// real sensor hardware.
#[derive(Debug, Clone, Copy)]
pub struct FixturePositionSensor {
    position: GeoPosition,
}

impl FixturePositionSensor {
    /// Build a sensor that always reports `position`.
    pub fn new(position: GeoPosition) -> Self {
        Self { position }
    }
}

#[async_trait]
impl PositionSensor for FixturePositionSensor {
    async fn current_position(&self) -> Result<GeoPosition, PositionSensorError> {
        Ok(self.position)
    }
}
