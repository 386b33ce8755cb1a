//! Rooms

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    /// Room Key
    pub struct RoomKey;
}

/// Room category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    /// Single room
    Single,

    /// Double room
    Double,

    /// Deluxe room
    Deluxe,

    /// Suite
    Suite,

    /// Family room
    Family,
}

/// Unrecognised room type name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown room type: {0}")]
pub struct UnknownRoomType(pub String);

impl FromStr for RoomType {
    type Err = UnknownRoomType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(RoomType::Single),
            "double" => Ok(RoomType::Double),
            "deluxe" => Ok(RoomType::Deluxe),
            "suite" => Ok(RoomType::Suite),
            "family" => Ok(RoomType::Family),
            _ => Err(UnknownRoomType(s.to_string())),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
            RoomType::Family => "family",
        };

        f.write_str(name)
    }
}

/// Room reference data
#[derive(Debug, Clone, PartialEq)]
pub struct Room<'a> {
    /// Room code, unique within a catalog (e.g. `DLX-201`)
    pub code: String,

    /// Display name
    pub name: String,

    /// Room category
    pub room_type: RoomType,

    /// Price of one night
    pub nightly_rate: Money<'a, Currency>,

    /// Maximum number of guests
    pub capacity: u32,
}

impl Room<'_> {
    /// Whether a party of `guests` fits in the room.
    pub fn fits(&self, guests: u32) -> bool {
        guests <= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    #[test]
    fn room_type_parses_case_insensitively() {
        assert_eq!("Suite".parse(), Ok(RoomType::Suite));
        assert_eq!(" FAMILY ".parse(), Ok(RoomType::Family));
        assert_eq!(
            "penthouse".parse::<RoomType>(),
            Err(UnknownRoomType("penthouse".to_string()))
        );
    }

    #[test]
    fn room_type_display_round_trips_through_parse() {
        for room_type in [
            RoomType::Single,
            RoomType::Double,
            RoomType::Deluxe,
            RoomType::Suite,
            RoomType::Family,
        ] {
            assert_eq!(room_type.to_string().parse(), Ok(room_type));
        }
    }

    #[test]
    fn fits_respects_capacity() {
        let room = Room {
            code: "DBL-101".to_string(),
            name: "Garden Double".to_string(),
            room_type: RoomType::Double,
            nightly_rate: Money::from_minor(12000, USD),
            capacity: 2,
        };

        assert!(room.fits(1));
        assert!(room.fits(2));
        assert!(!room.fits(3));
    }
}
