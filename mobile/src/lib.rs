//! Platform-independent core of the community app's registration screen:
//! the candidate record, the declarative validator, the submission and
//! location workflows, and the outbound adapters behind their ports.

pub mod config;
pub mod domain;
pub mod outbound;
