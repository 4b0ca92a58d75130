//! Declarative validation for the registration candidate.
//!
//! [`validate`] is pure and total: it never panics and always classifies the
//! candidate as accepted or rejected. Every field rule is evaluated
//! independently so the user sees the full list of problems at once, not
//! just the first.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use zeroize::Zeroizing;

use crate::domain::candidate::{DEFAULT_ROLE, RegistrationCandidate};

/// Minimum username length in characters.
pub const USERNAME_MIN: usize = 3;
/// Minimum password length in characters.
pub const PASSWORD_MIN: usize = 12;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Local part, one "@", and a domain containing at least one dot.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        // Kenyan mobile numbers: +2547 then exactly eight digits.
        let pattern = r"^\+2547\d{8}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

/// Fields checked by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The `username` input.
    Username,
    /// The `email` input.
    Email,
    /// The `phone` input.
    Phone,
    /// The `password` input.
    Password,
    /// The `location` input.
    Location,
    /// The `confirmPassword` input (cross-field password match).
    ConfirmPassword,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::Location => "location",
            Self::ConfirmPassword => "confirmPassword",
        };
        f.write_str(name)
    }
}

/// A single field-rule failure with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: Field,
    message: String,
}

impl FieldViolation {
    /// Build a violation for `field` carrying `message`.
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Field the rule is attributed to.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Human-readable message shown to the user.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Candidate confirmed against every field rule.
///
/// ## Invariants
/// - Every field satisfies its [`validate`] rule.
/// - `role` always equals [`DEFAULT_ROLE`], whatever the candidate held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    username: String,
    email: String,
    phone: String,
    password: Zeroizing<String>,
    confirm_password: Zeroizing<String>,
    location: String,
    role: String,
}

impl NormalizedRecord {
    /// Validated username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Validated email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Validated phone number.
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Validated password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Confirmation password, equal to [`Self::password`].
    pub fn confirm_password(&self) -> &str {
        self.confirm_password.as_str()
    }

    /// Validated location.
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// Role the record will be registered with, always [`DEFAULT_ROLE`].
    pub fn role(&self) -> &str {
        self.role.as_str()
    }
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationResult {
    /// Every rule passed; the record is ready for submission.
    Accepted(NormalizedRecord),
    /// At least one rule failed; violations appear in field order with the
    /// password-match rule last.
    Rejected(Vec<FieldViolation>),
}

/// Check one candidate against every field rule.
///
/// Violations are collected, never short-circuited, and ordered by field
/// (username, email, phone, password, location) with the cross-field
/// password-match violation last.
///
/// # Examples
/// ```
/// use mobile::domain::{RegistrationCandidate, RegistrationResult, validate};
///
/// let candidate = RegistrationCandidate::new();
/// assert!(matches!(validate(&candidate), RegistrationResult::Rejected(_)));
/// ```
pub fn validate(candidate: &RegistrationCandidate) -> RegistrationResult {
    let mut violations = Vec::new();

    if candidate.username().chars().count() < USERNAME_MIN {
        violations.push(FieldViolation::new(
            Field::Username,
            "Username must be at least 3 characters",
        ));
    }

    if !email_regex().is_match(candidate.email()) {
        violations.push(FieldViolation::new(Field::Email, "Invalid email address"));
    }

    if !phone_regex().is_match(candidate.phone()) {
        violations.push(FieldViolation::new(
            Field::Phone,
            "Invalid Kenyan mobile number. Format: +2547XXXXXXXX",
        ));
    }

    collect_password_violations(candidate.password(), &mut violations);

    if candidate.location().trim().is_empty() {
        violations.push(FieldViolation::new(
            Field::Location,
            "Please select your location",
        ));
    }

    // Cross-field rule, attributed to the confirmation field and kept last.
    if candidate.password() != candidate.confirm_password() {
        violations.push(FieldViolation::new(
            Field::ConfirmPassword,
            "Passwords do not match",
        ));
    }

    if violations.is_empty() {
        RegistrationResult::Accepted(NormalizedRecord {
            username: candidate.username().to_owned(),
            email: candidate.email().to_owned(),
            phone: candidate.phone().to_owned(),
            password: Zeroizing::new(candidate.password().to_owned()),
            confirm_password: Zeroizing::new(candidate.confirm_password().to_owned()),
            location: candidate.location().to_owned(),
            role: DEFAULT_ROLE.to_owned(),
        })
    } else {
        RegistrationResult::Rejected(violations)
    }
}

fn collect_password_violations(password: &str, violations: &mut Vec<FieldViolation>) {
    if password.chars().count() < PASSWORD_MIN {
        violations.push(FieldViolation::new(
            Field::Password,
            "Password must be at least 12 characters",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(FieldViolation::new(
            Field::Password,
            "Password must include at least one uppercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push(FieldViolation::new(
            Field::Password,
            "Password must include at least one lowercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(FieldViolation::new(
            Field::Password,
            "Password must include at least one number",
        ));
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        violations.push(FieldViolation::new(
            Field::Password,
            "Password must include at least one special character",
        ));
    }
}
