//! Reverse-geocoding outbound adapter.
//!
//! This module provides the Nominatim implementation of the `PlaceLookup`
//! port.

mod dto;
mod nominatim;

pub use nominatim::NominatimPlaceLookup;
