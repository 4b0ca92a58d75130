//! Registration submission workflow.
//!
//! Implements the screen's submit action: validate the candidate, fail fast
//! on violations without touching the network, issue exactly one request
//! through the account gateway, and classify the result. Every path surfaces
//! at least one notification; silent failure is not permitted.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::candidate::RegistrationCandidate;
use crate::domain::ports::{AccountGateway, AccountGatewayError, Notification, Notifier};
use crate::domain::validation::{FieldViolation, RegistrationResult, validate};

/// Reason reported when no response was received at all.
const NETWORK_ERROR_REASON: &str = "network error";
/// Reason reported when the server rejected without a usable message.
const REJECTED_FALLBACK_REASON: &str = "registration failed";

/// Classified result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The account service accepted the record.
    Success,
    /// The candidate never left the device; the violations say why.
    ValidationFailed(Vec<FieldViolation>),
    /// The request was sent but did not succeed.
    RequestFailed {
        /// User-facing failure reason: the server's `error` text when
        /// present, otherwise a generic class.
        reason: String,
    },
}

/// Registration workflow service driving the account gateway.
///
/// Stateless across calls: each [`Self::submit`] is one independent attempt
/// with no retry, no session, and no deduplication of repeats.
#[derive(Clone)]
pub struct RegistrationService<G, N> {
    gateway: Arc<G>,
    notifier: Arc<N>,
}

impl<G, N> RegistrationService<G, N> {
    /// Create a new service over the account gateway and notification sink.
    pub fn new(gateway: Arc<G>, notifier: Arc<N>) -> Self {
        Self { gateway, notifier }
    }
}

impl<G, N> RegistrationService<G, N>
where
    G: AccountGateway,
    N: Notifier,
{
    /// Validate and submit one candidate.
    ///
    /// Rejected candidates return [`SubmissionOutcome::ValidationFailed`]
    /// before any network access, with one error notification per violation.
    pub async fn submit(&self, candidate: &RegistrationCandidate) -> SubmissionOutcome {
        let record = match validate(candidate) {
            RegistrationResult::Accepted(record) => record,
            RegistrationResult::Rejected(violations) => {
                for violation in &violations {
                    self.notifier
                        .notify(Notification::error("Validation Error", violation.message()))
                        .await;
                }
                warn!(
                    violations = violations.len(),
                    "registration rejected before submission"
                );
                return SubmissionOutcome::ValidationFailed(violations);
            }
        };

        match self.gateway.register(&record).await {
            Ok(()) => {
                self.notifier
                    .notify(Notification::success("Registered successfully!", ""))
                    .await;
                info!(username = record.username(), "registration accepted");
                SubmissionOutcome::Success
            }
            Err(error) => {
                let reason = failure_reason(&error);
                self.notifier
                    .notify(Notification::error("Registration Failed", reason.as_str()))
                    .await;
                warn!(%error, "registration request failed");
                SubmissionOutcome::RequestFailed { reason }
            }
        }
    }
}

fn failure_reason(error: &AccountGatewayError) -> String {
    match error {
        AccountGatewayError::Transport { .. } | AccountGatewayError::Timeout { .. } => {
            NETWORK_ERROR_REASON.to_owned()
        }
        AccountGatewayError::Rejected {
            message: Some(message),
            ..
        } if !message.trim().is_empty() => message.clone(),
        AccountGatewayError::Rejected { .. } | AccountGatewayError::Decode { .. } => {
            REJECTED_FALLBACK_REASON.to_owned()
        }
    }
}

#[cfg(test)]
#[path = "registration_service_tests.rs"]
mod tests;
