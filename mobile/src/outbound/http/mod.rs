//! Account service outbound adapter.
//!
//! This module provides the HTTP implementation of the `AccountGateway`
//! port.

mod account_gateway;
mod dto;

pub use account_gateway::{AccountGatewayBuildError, HttpAccountGateway};
