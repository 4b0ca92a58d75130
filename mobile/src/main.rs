//! Headless registration entry-point.
//!
//! Wires the workflow services to the HTTP adapters so a deployment can be
//! smoke-tested without the mobile shell: fields arrive as flags, optional
//! fixed coordinates stand in for the device sensor, and notifications
//! become log events. Settings (API base URL, geocode endpoint, timeout)
//! come from the environment via OrthoConfig.

use std::ffi::OsString;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use reqwest::Url;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use mobile::config::AppSettings;
use mobile::domain::ports::{FixturePositionSensor, GeoPosition};
use mobile::domain::{LocationService, RegistrationCandidate, RegistrationService, SubmissionOutcome};
use mobile::outbound::geocode::NominatimPlaceLookup;
use mobile::outbound::http::HttpAccountGateway;
use mobile::outbound::notify::TracingNotifier;

/// `mobile-register` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mobile-register",
    about = "Submit one registration to the account service",
    version
)]
struct CliArgs {
    /// Username for the new account.
    #[arg(long)]
    username: String,
    /// Email address for the new account.
    #[arg(long)]
    email: String,
    /// Kenyan mobile number, `+2547XXXXXXXX`.
    #[arg(long)]
    phone: String,
    /// Account password.
    #[arg(long)]
    password: String,
    /// Confirmation password. Defaults to the password value.
    #[arg(long = "confirm-password")]
    confirm_password: Option<String>,
    /// Manually chosen location.
    #[arg(long)]
    location: Option<String>,
    /// Fixed device latitude used instead of a real position sensor.
    #[arg(long, requires = "lon")]
    lat: Option<f64>,
    /// Fixed device longitude used instead of a real position sensor.
    #[arg(long, requires = "lat")]
    lon: Option<f64>,
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    // Only the program name: settings come from env/file sources, the
    // candidate fields from clap.
    let settings = AppSettings::load_from_iter([OsString::from("mobile")])
        .wrap_err("failed to load settings")?;
    run(args, &settings).await
}

async fn run(args: CliArgs, settings: &AppSettings) -> color_eyre::eyre::Result<()> {
    let timeout = settings.request_timeout();
    let base_url = Url::parse(settings.api_base_url()).wrap_err("invalid API base URL")?;
    let gateway =
        Arc::new(HttpAccountGateway::new(&base_url, timeout).wrap_err("gateway setup failed")?);
    let notifier = Arc::new(TracingNotifier);

    let mut candidate = build_candidate(&args);

    if let (Some(latitude), Some(longitude)) = (args.lat, args.lon) {
        let endpoint =
            Url::parse(settings.geocode_endpoint()).wrap_err("invalid geocode endpoint")?;
        let sensor = Arc::new(FixturePositionSensor::new(GeoPosition {
            latitude,
            longitude,
        }));
        let lookup = Arc::new(
            NominatimPlaceLookup::new(endpoint, timeout).wrap_err("geocode setup failed")?,
        );
        let location_service = LocationService::new(sensor, lookup, notifier.clone());
        if let Err(error) = location_service.fill_current_location(&mut candidate).await {
            warn!(%error, "continuing with the manually supplied location");
        }
    }

    let service = RegistrationService::new(gateway, notifier);
    match service.submit(&candidate).await {
        SubmissionOutcome::Success => {
            info!(username = candidate.username(), "registration accepted");
            Ok(())
        }
        SubmissionOutcome::ValidationFailed(violations) => {
            Err(eyre!("{} field(s) failed validation", violations.len()))
        }
        SubmissionOutcome::RequestFailed { reason } => {
            Err(eyre!("registration request failed: {reason}"))
        }
    }
}

fn build_candidate(args: &CliArgs) -> RegistrationCandidate {
    let mut candidate = RegistrationCandidate::new();
    candidate.set_username(args.username.as_str());
    candidate.set_email(args.email.as_str());
    candidate.set_phone(args.phone.as_str());
    candidate.set_password(args.password.as_str());
    candidate.set_confirm_password(
        args.confirm_password
            .as_deref()
            .unwrap_or(args.password.as_str()),
    );
    if let Some(location) = args.location.as_deref() {
        candidate.set_location(location);
    }
    candidate
}
