//! Reqwest-backed Nominatim reverse-geocoding adapter.
//!
//! This adapter owns transport details only: query construction, timeout and
//! HTTP error mapping, and JSON decoding into a place name.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::ReverseGeocodeDto;
use crate::domain::ports::{GeoPosition, PlaceLookup, PlaceLookupError, PlaceName};

const DEFAULT_USER_AGENT: &str = "mobile-registration-core/0.1";

/// Nominatim lookup adapter performing HTTP GET requests against one
/// `reverse` endpoint.
pub struct NominatimPlaceLookup {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl NominatimPlaceLookup {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout. `endpoint` must already point at the `reverse` resource.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(endpoint, timeout, DEFAULT_USER_AGENT)
    }

    /// Build an adapter with an explicit outbound user agent.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_user_agent(
        endpoint: Url,
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: user_agent.into(),
        })
    }
}

#[async_trait]
impl PlaceLookup for NominatimPlaceLookup {
    async fn place_name(&self, position: GeoPosition) -> Result<PlaceName, PlaceLookupError> {
        validate_position(position)?;

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("format", "json".to_owned()),
                ("lat", position.latitude.to_string()),
                ("lon", position.longitude.to_string()),
            ])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_status_error(status));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_place_name(body.as_ref())
    }
}

fn parse_place_name(body: &[u8]) -> Result<PlaceName, PlaceLookupError> {
    let decoded: ReverseGeocodeDto = serde_json::from_slice(body).map_err(|error| {
        PlaceLookupError::decode(format!("invalid reverse geocode payload: {error}"))
    })?;
    let name = decoded
        .into_place_name()
        .ok_or_else(|| PlaceLookupError::decode("response held no usable place name"))?;
    PlaceName::new(name).map_err(|error| PlaceLookupError::decode(error.to_string()))
}

fn validate_position(position: GeoPosition) -> Result<(), PlaceLookupError> {
    if !position.latitude.is_finite() || !position.longitude.is_finite() {
        return Err(PlaceLookupError::invalid_position(
            "coordinates must be finite",
        ));
    }
    if !(-90.0..=90.0).contains(&position.latitude) {
        return Err(PlaceLookupError::invalid_position(
            "latitude must be within [-90, 90]",
        ));
    }
    if !(-180.0..=180.0).contains(&position.longitude) {
        return Err(PlaceLookupError::invalid_position(
            "longitude must be within [-180, 180]",
        ));
    }
    Ok(())
}

fn map_transport_error(error: reqwest::Error) -> PlaceLookupError {
    if error.is_timeout() {
        PlaceLookupError::timeout(error.to_string())
    } else {
        PlaceLookupError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode) -> PlaceLookupError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            PlaceLookupError::timeout(format!("status {}", status.as_u16()))
        }
        _ => PlaceLookupError::rejected(status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn parses_the_most_specific_place_name() {
        let body = br#"{
            "display_name": "Bunyala, Busia County, Kenya",
            "address": { "village": "Sio Port" }
        }"#;

        let place = parse_place_name(body).expect("payload should decode");
        assert_eq!(place.as_ref(), "Sio Port");
    }

    #[rstest]
    fn empty_payload_maps_to_a_decode_error() {
        let error = parse_place_name(br"{}").expect_err("decode should fail");
        assert!(matches!(error, PlaceLookupError::Decode { .. }));
    }

    #[rstest]
    fn invalid_json_maps_to_a_decode_error() {
        let error = parse_place_name(b"<html>rate limited</html>").expect_err("decode should fail");
        assert!(matches!(error, PlaceLookupError::Decode { .. }));
    }

    #[rstest]
    #[case::latitude_out_of_range(91.0, 0.0)]
    #[case::longitude_out_of_range(0.0, 181.0)]
    #[case::non_finite(f64::NAN, 0.0)]
    fn rejects_coordinates_outside_wgs84(#[case] latitude: f64, #[case] longitude: f64) {
        let error = validate_position(GeoPosition {
            latitude,
            longitude,
        })
        .expect_err("invalid coordinates must fail");
        assert!(matches!(error, PlaceLookupError::InvalidPosition { .. }));
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, true)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, true)]
    #[case::forbidden(StatusCode::FORBIDDEN, false)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn maps_http_statuses_to_expected_errors(#[case] status: StatusCode, #[case] timeout: bool) {
        let error = map_status_error(status);
        if timeout {
            assert!(matches!(error, PlaceLookupError::Timeout { .. }));
        } else {
            assert!(
                matches!(error, PlaceLookupError::Rejected { status: s } if s == status.as_u16())
            );
        }
    }
}
