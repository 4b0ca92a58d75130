//! Domain ports for the registration screen's external collaborators.

mod account_gateway;
mod notifier;
mod place_lookup;
mod position_sensor;

#[cfg(test)]
pub use account_gateway::MockAccountGateway;
pub use account_gateway::{AccountGateway, AccountGatewayError, FixtureAccountGateway};
#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::{Notification, NotificationCategory, Notifier, NullNotifier};
#[cfg(test)]
pub use place_lookup::MockPlaceLookup;
pub use place_lookup::{
    FixturePlaceLookup, PlaceLookup, PlaceLookupError, PlaceName, PlaceNameValidationError,
};
#[cfg(test)]
pub use position_sensor::MockPositionSensor;
pub use position_sensor::{
    FixturePositionSensor, GeoPosition, PositionSensor, PositionSensorError,
};
