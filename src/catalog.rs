//! Room Catalog
//!
//! In-memory room reference data, looked up by key or by room code.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::rooms::{Room, RoomKey};

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A room with the same code is already in the catalog.
    #[error("duplicate room code: {0}")]
    DuplicateCode(String),

    /// The room cannot hold any guests.
    #[error("room {0} has no capacity")]
    ZeroCapacity(String),

    /// The room's nightly rate is below zero.
    #[error("room {0} has a negative nightly rate")]
    NegativeRate(String),
}

/// Rooms indexed by key and by code
#[derive(Debug, Default)]
pub struct RoomCatalog<'a> {
    rooms: SlotMap<RoomKey, Room<'a>>,
    codes: FxHashMap<String, RoomKey>,
}

impl<'a> RoomCatalog<'a> {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room, returning its key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ZeroCapacity`] or [`CatalogError::NegativeRate`]
    /// for a room that could never be booked or priced, and
    /// [`CatalogError::DuplicateCode`] if a room with the same code exists.
    pub fn insert(&mut self, room: Room<'a>) -> Result<RoomKey, CatalogError> {
        if room.capacity == 0 {
            return Err(CatalogError::ZeroCapacity(room.code));
        }

        if room.nightly_rate.to_minor_units() < 0 {
            return Err(CatalogError::NegativeRate(room.code));
        }

        if self.codes.contains_key(&room.code) {
            return Err(CatalogError::DuplicateCode(room.code));
        }

        let code = room.code.clone();
        let key = self.rooms.insert(room);

        self.codes.insert(code, key);

        Ok(key)
    }

    /// Room by key
    pub fn get(&self, key: RoomKey) -> Option<&Room<'a>> {
        self.rooms.get(key)
    }

    /// Room key by room code
    pub fn key_for(&self, code: &str) -> Option<RoomKey> {
        self.codes.get(code).copied()
    }

    /// Room by room code
    pub fn by_code(&self, code: &str) -> Option<&Room<'a>> {
        let key = self.key_for(code)?;

        self.rooms.get(key)
    }

    /// Rooms that can host a party of `guests`, cheapest nightly rate first.
    ///
    /// Rooms with the same rate are ordered by code.
    pub fn available_for(&self, guests: u32) -> SmallVec<[(RoomKey, &Room<'a>); 8]> {
        let mut rooms: SmallVec<[(RoomKey, &Room<'a>); 8]> = self
            .rooms
            .iter()
            .filter(|(_, room)| room.fits(guests))
            .collect();

        rooms.sort_by(|(_, a), (_, b)| {
            a.nightly_rate
                .to_minor_units()
                .cmp(&b.nightly_rate.to_minor_units())
                .then_with(|| a.code.cmp(&b.code))
        });

        rooms
    }

    /// Number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the catalog has no rooms
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterate over all rooms
    pub fn rooms(&self) -> impl Iterator<Item = (RoomKey, &Room<'a>)> {
        self.rooms.iter()
    }
}
