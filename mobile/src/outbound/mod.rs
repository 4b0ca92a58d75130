//! Outbound adapters implementing domain ports for external services.
//!
//! Adapters are thin translators between domain types and wire formats:
//!
//! - **http**: the account service gateway (`register`, `login`).
//! - **geocode**: Nominatim reverse geocoding behind the place lookup port.
//! - **notify**: a tracing-backed notification sink for headless use.
//!
//! They contain no business logic; outcome policy lives in the domain
//! services.

pub mod geocode;
pub mod http;
pub mod notify;
