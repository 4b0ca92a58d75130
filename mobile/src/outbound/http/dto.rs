//! DTOs for the account service wire contract.
//!
//! The registration body mirrors the request the screen sends: camelCase
//! field names, the confirmation password included, `role` always present.

use serde::{Deserialize, Serialize};

use crate::domain::login::LoginCredentials;
use crate::domain::validation::NormalizedRecord;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RegisterRequestDto<'a> {
    pub(super) username: &'a str,
    pub(super) email: &'a str,
    pub(super) phone: &'a str,
    pub(super) password: &'a str,
    pub(super) confirm_password: &'a str,
    pub(super) location: &'a str,
    pub(super) role: &'a str,
}

impl<'a> From<&'a NormalizedRecord> for RegisterRequestDto<'a> {
    fn from(record: &'a NormalizedRecord) -> Self {
        Self {
            username: record.username(),
            email: record.email(),
            phone: record.phone(),
            password: record.password(),
            confirm_password: record.confirm_password(),
            location: record.location(),
            role: record.role(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct LoginRequestDto<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

impl<'a> From<&'a LoginCredentials> for LoginRequestDto<'a> {
    fn from(credentials: &'a LoginCredentials) -> Self {
        Self {
            email: credentials.email(),
            password: credentials.password(),
        }
    }
}

/// Error envelope some rejections carry; anything else decodes to `None`.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBodyDto {
    #[serde(default)]
    pub(super) error: Option<String>,
}
