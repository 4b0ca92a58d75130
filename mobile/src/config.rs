//! Application settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/";
const DEFAULT_GEOCODE_ENDPOINT: &str = "https://nominatim.openstreetmap.org/reverse";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Configuration values for the outbound adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MOBILE")]
pub struct AppSettings {
    /// Base URL of the account service.
    pub api_base_url: Option<String>,
    /// Reverse-geocoding endpoint (a Nominatim `reverse` resource).
    pub geocode_endpoint: Option<String>,
    /// Outbound HTTP request timeout in seconds.
    pub request_timeout_seconds: Option<u64>,
}

impl AppSettings {
    /// Return the configured account service URL, falling back to the
    /// development default.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Return the configured geocoding endpoint, falling back to the public
    /// Nominatim instance.
    pub fn geocode_endpoint(&self) -> &str {
        self.geocode_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_GEOCODE_ENDPOINT)
    }

    /// Return the outbound request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_seconds
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("mobile")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("MOBILE_API_BASE_URL", None::<String>),
            ("MOBILE_GEOCODE_ENDPOINT", None::<String>),
            ("MOBILE_REQUEST_TIMEOUT_SECONDS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(settings.geocode_endpoint(), DEFAULT_GEOCODE_ENDPOINT);
        assert_eq!(
            settings.request_timeout(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS)
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "MOBILE_API_BASE_URL",
                Some("https://api.example.org/".to_owned()),
            ),
            (
                "MOBILE_GEOCODE_ENDPOINT",
                Some("https://geocode.example.org/reverse".to_owned()),
            ),
            ("MOBILE_REQUEST_TIMEOUT_SECONDS", Some("5".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.api_base_url(), "https://api.example.org/");
        assert_eq!(
            settings.geocode_endpoint(),
            "https://geocode.example.org/reverse"
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    }
}
