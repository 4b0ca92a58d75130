//! Registration candidate record.
//!
//! One value of [`RegistrationCandidate`] lives for the duration of a single
//! form session: created empty at screen entry, mutated field by field as
//! the user types or the location workflow responds, validated on each
//! submit attempt, and discarded once submission succeeds.

use zeroize::Zeroizing;

use crate::domain::ports::PlaceName;

/// Role granted to every self-registered account.
pub const DEFAULT_ROLE: &str = "viewer";

/// Wards the screen offers for manual location selection.
///
/// Manual entry stays free-form; this list only feeds the picker.
pub const WARD_OPTIONS: &[&str] = &[
    "Bumadeya",
    "Budalangi Central",
    "Budubusi",
    "Mundere",
    "Musoma",
    "Sibuka",
    "Sio Port",
    "Rukala",
    "Mukhweya",
    "Sigulu Island",
    "Siyaya",
    "Nambuku",
    "West Bunyala",
    "East Bunyala",
    "South Bunyala",
];

/// Provenance of the candidate's `location` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationSource {
    /// The user typed or picked the location by hand.
    #[default]
    Manual,
    /// The location workflow resolved it from device coordinates.
    Detected,
}

/// One form session's in-progress registration record.
///
/// ## Invariants
/// - Editing `location` by hand resets `location_source` to
///   [`LocationSource::Manual`]; only [`Self::apply_detected_location`] sets
///   [`LocationSource::Detected`].
/// - `role` defaults to [`DEFAULT_ROLE`] and is forced back to it on
///   acceptance regardless of what a caller set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationCandidate {
    username: String,
    email: String,
    phone: String,
    password: Zeroizing<String>,
    confirm_password: Zeroizing<String>,
    location: String,
    location_source: LocationSource,
    role: String,
}

impl Default for RegistrationCandidate {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            phone: String::new(),
            password: Zeroizing::default(),
            confirm_password: Zeroizing::default(),
            location: String::new(),
            location_source: LocationSource::default(),
            role: DEFAULT_ROLE.to_owned(),
        }
    }
}

impl RegistrationCandidate {
    /// Create an empty candidate for a fresh form session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the username field.
    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    /// Replace the email field.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Replace the phone field.
    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    /// Replace the password field.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = Zeroizing::new(value.into());
    }

    /// Replace the confirmation password field.
    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = Zeroizing::new(value.into());
    }

    /// Replace the location with a manually entered value.
    ///
    /// Always resets the provenance to [`LocationSource::Manual`].
    pub fn set_location(&mut self, value: impl Into<String>) {
        self.location = value.into();
        self.location_source = LocationSource::Manual;
    }

    /// Replace the location with a resolver-supplied place name.
    pub fn apply_detected_location(&mut self, place: PlaceName) {
        self.location = place.into();
        self.location_source = LocationSource::Detected;
    }

    /// Replace the role field.
    ///
    /// Present for parity with the wire record; acceptance always forces the
    /// role back to [`DEFAULT_ROLE`].
    pub fn set_role(&mut self, value: impl Into<String>) {
        self.role = value.into();
    }

    /// Username as typed.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Email address as typed.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Phone number as typed.
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Password as typed.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Confirmation password as typed.
    pub fn confirm_password(&self) -> &str {
        self.confirm_password.as_str()
    }

    /// Location as typed or detected.
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// Provenance of the current location value.
    pub fn location_source(&self) -> LocationSource {
        self.location_source
    }

    /// Role the candidate will be registered with.
    pub fn role(&self) -> &str {
        self.role.as_str()
    }
}

#[cfg(test)]
mod tests;
