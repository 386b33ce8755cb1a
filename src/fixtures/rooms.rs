//! Room Fixtures

use std::collections::BTreeMap;

use rusty_money::Money;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, values::parse_price},
    rooms::{Room, RoomType},
};

/// Wrapper for rooms in YAML
#[derive(Debug, Deserialize)]
pub struct RoomsFixture {
    /// Map of room code -> room fixture
    pub rooms: BTreeMap<String, RoomFixture>,
}

/// Room Fixture
#[derive(Debug, Deserialize)]
pub struct RoomFixture {
    /// Room name
    pub name: String,

    /// Room type (e.g., "deluxe")
    #[serde(rename = "type")]
    pub room_type: String,

    /// Nightly rate (e.g., "150.00 USD")
    pub rate: String,

    /// Maximum guests
    pub capacity: u32,
}

impl RoomFixture {
    /// Convert to a [`Room`] with the given code
    ///
    /// # Errors
    ///
    /// Returns an error if the room type or rate cannot be parsed.
    pub fn try_into_room(self, code: String) -> Result<Room<'static>, FixtureError> {
        let room_type: RoomType = self.room_type.parse()?;
        let (minor_units, currency) = parse_price(&self.rate)?;

        Ok(Room {
            code,
            name: self.name,
            room_type,
            nightly_rate: Money::from_minor(minor_units, currency),
            capacity: self.capacity,
        })
    }
}
