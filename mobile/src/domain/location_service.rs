//! Device location resolution workflow.
//!
//! Chains the position sensor and the reverse-geocoding lookup behind one
//! operation the screen can trigger from its "detect" action. Resolution is
//! a convenience: any failure leaves the candidate untouched and is surfaced
//! to the notification sink, never escalated.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::candidate::RegistrationCandidate;
use crate::domain::ports::{
    Notification, Notifier, PlaceLookup, PlaceName, PositionSensor, PositionSensorError,
};

/// Errors surfaced while resolving the device location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The user (or platform policy) denied location access.
    #[error("location permission was denied")]
    PermissionDenied,
    /// The device produced no position reading.
    #[error("location sensor unavailable: {message}")]
    SensorUnavailable {
        /// Platform-supplied failure detail.
        message: String,
    },
    /// Coordinates were read but could not be resolved to a place name.
    #[error("place lookup failed: {message}")]
    LookupFailed {
        /// Lookup failure detail.
        message: String,
    },
}

/// Location workflow service driving the sensor and lookup ports.
#[derive(Clone)]
pub struct LocationService<S, P, N> {
    sensor: Arc<S>,
    lookup: Arc<P>,
    notifier: Arc<N>,
}

impl<S, P, N> LocationService<S, P, N> {
    /// Create a new service over the sensor, lookup, and notification sink.
    pub fn new(sensor: Arc<S>, lookup: Arc<P>, notifier: Arc<N>) -> Self {
        Self {
            sensor,
            lookup,
            notifier,
        }
    }
}

impl<S, P, N> LocationService<S, P, N>
where
    S: PositionSensor,
    P: PlaceLookup,
    N: Notifier,
{
    /// Resolve the device position into a human-readable place name.
    pub async fn resolve_current_location(&self) -> Result<PlaceName, LocationError> {
        let position = self
            .sensor
            .current_position()
            .await
            .map_err(|error| match error {
                PositionSensorError::PermissionDenied => LocationError::PermissionDenied,
                PositionSensorError::Unavailable { message } => {
                    LocationError::SensorUnavailable { message }
                }
            })?;

        self.lookup
            .place_name(position)
            .await
            .map_err(|error| LocationError::LookupFailed {
                message: error.to_string(),
            })
    }

    /// Fill the candidate's location from the device.
    ///
    /// On success the candidate's location becomes the resolved place name
    /// with detected provenance; on any error the candidate is left
    /// untouched. Both paths notify the sink.
    pub async fn fill_current_location(
        &self,
        candidate: &mut RegistrationCandidate,
    ) -> Result<(), LocationError> {
        match self.resolve_current_location().await {
            Ok(place) => {
                self.notifier
                    .notify(Notification::success("Location detected", place.as_ref()))
                    .await;
                info!(place = %place, "device location resolved");
                candidate.apply_detected_location(place);
                Ok(())
            }
            Err(error) => {
                let detail = match &error {
                    LocationError::PermissionDenied => "Permission to access location was denied",
                    LocationError::SensorUnavailable { .. }
                    | LocationError::LookupFailed { .. } => {
                        "Failed to retrieve location details."
                    }
                };
                self.notifier
                    .notify(Notification::error("Location Error", detail))
                    .await;
                warn!(%error, "device location resolution failed");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
#[path = "location_service_tests.rs"]
mod tests;
