//! DTOs for decoding Nominatim reverse-geocoding responses.
//!
//! The adapter decodes into these transport DTOs first, then picks a place
//! name with the city, town, village, display-name fallback chain.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct ReverseGeocodeDto {
    #[serde(default)]
    pub(super) address: AddressDto,
    pub(super) display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct AddressDto {
    pub(super) city: Option<String>,
    pub(super) town: Option<String>,
    pub(super) village: Option<String>,
}

impl ReverseGeocodeDto {
    /// Pick the most specific non-blank name the response offers.
    pub(super) fn into_place_name(self) -> Option<String> {
        [
            self.address.city,
            self.address.town,
            self.address.village,
            self.display_name,
        ]
        .into_iter()
        .flatten()
        .map(|name| name.trim().to_owned())
        .find(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the fallback chain.

    use rstest::rstest;

    use super::*;

    fn decode(body: &str) -> ReverseGeocodeDto {
        serde_json::from_str(body).expect("fixture JSON should decode")
    }

    #[rstest]
    #[case::city_wins(
        r#"{"address":{"city":"Busia","town":"Sio Port"},"display_name":"Busia County"}"#,
        "Busia"
    )]
    #[case::town_when_no_city(
        r#"{"address":{"town":"Sio Port","village":"Rukala"},"display_name":"x"}"#,
        "Sio Port"
    )]
    #[case::village_when_no_town(
        r#"{"address":{"village":"Rukala"},"display_name":"x"}"#,
        "Rukala"
    )]
    #[case::display_name_fallback(
        r#"{"address":{},"display_name":"Bunyala, Busia County, Kenya"}"#,
        "Bunyala, Busia County, Kenya"
    )]
    #[case::blank_entries_are_skipped(
        r#"{"address":{"city":"  ","town":"Mundere"},"display_name":"x"}"#,
        "Mundere"
    )]
    fn fallback_chain_prefers_the_most_specific_name(
        #[case] body: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(decode(body).into_place_name().as_deref(), Some(expected));
    }

    #[rstest]
    fn missing_address_and_display_name_yield_nothing() {
        assert_eq!(decode(r"{}").into_place_name(), None);
    }
}
