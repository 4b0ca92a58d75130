//! Domain model and workflow services.
//!
//! Purpose: hold the registration screen's candidate record, the declarative
//! validator, and the workflow services that drive the ports. Types here are
//! transport agnostic; adapters own wire formats.
//!
//! Public surface:
//! - `RegistrationCandidate` / `LocationSource` — one form session's record.
//! - `validate` / `RegistrationResult` — the pure field-rule validator.
//! - `RegistrationService` / `SubmissionOutcome` — the submit workflow.
//! - `LocationService` / `LocationError` — the detect-location workflow.
//! - `LoginCredentials` — validated input for the sibling sign-in call.

pub mod candidate;
pub mod location_service;
pub mod login;
pub mod ports;
pub mod registration_service;
pub mod validation;

pub use self::candidate::{DEFAULT_ROLE, LocationSource, RegistrationCandidate, WARD_OPTIONS};
pub use self::location_service::{LocationError, LocationService};
pub use self::login::{LoginCredentials, LoginValidationError};
pub use self::registration_service::{RegistrationService, SubmissionOutcome};
pub use self::validation::{
    Field, FieldViolation, NormalizedRecord, RegistrationResult, validate,
};
