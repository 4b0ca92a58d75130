//! Tests for the registration candidate record.

use rstest::rstest;

use super::*;

fn detected(place: &str) -> PlaceName {
    PlaceName::new(place).expect("fixture place name must be valid")
}

#[rstest]
fn new_candidate_starts_empty_with_viewer_role() {
    let candidate = RegistrationCandidate::new();
    assert_eq!(candidate.username(), "");
    assert_eq!(candidate.email(), "");
    assert_eq!(candidate.phone(), "");
    assert_eq!(candidate.password(), "");
    assert_eq!(candidate.confirm_password(), "");
    assert_eq!(candidate.location(), "");
    assert_eq!(candidate.location_source(), LocationSource::Manual);
    assert_eq!(candidate.role(), DEFAULT_ROLE);
}

#[rstest]
fn detected_location_overwrites_value_and_provenance() {
    let mut candidate = RegistrationCandidate::new();
    candidate.set_location("Mundere");

    candidate.apply_detected_location(detected("Sio Port"));

    assert_eq!(candidate.location(), "Sio Port");
    assert_eq!(candidate.location_source(), LocationSource::Detected);
}

#[rstest]
fn manual_edit_resets_provenance_after_detection() {
    let mut candidate = RegistrationCandidate::new();
    candidate.apply_detected_location(detected("Bumadeya"));

    candidate.set_location("Siyaya");

    assert_eq!(candidate.location(), "Siyaya");
    assert_eq!(candidate.location_source(), LocationSource::Manual);
}

#[rstest]
fn field_setters_replace_previous_values() {
    let mut candidate = RegistrationCandidate::new();
    candidate.set_username("first");
    candidate.set_username("second");
    candidate.set_password("pw-one");
    candidate.set_password("pw-two");

    assert_eq!(candidate.username(), "second");
    assert_eq!(candidate.password(), "pw-two");
}

#[rstest]
fn ward_options_cover_the_bunyala_wards() {
    assert_eq!(WARD_OPTIONS.len(), 15);
    assert!(WARD_OPTIONS.contains(&"Bumadeya"));
    assert!(WARD_OPTIONS.contains(&"South Bunyala"));
}
