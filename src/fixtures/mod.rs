//! Fixtures
//!
//! Loads hotel reference data from YAML files laid out as
//! `<base>/{config,rooms,promotions}/<set>.yml`. Every money value in a set
//! must share one currency.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rusty_money::iso::Currency;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{CatalogError, RoomCatalog},
    config::{Configuration, ConfigurationError},
    fixtures::{config::ConfigFixture, promotions::PromotionsFixture, rooms::RoomsFixture},
    promotions::{
        PromoDiscount,
        offers::{OfferError, PromotionCatalog},
    },
    rooms::UnknownRoomType,
};

pub mod config;
pub mod promotions;
pub mod rooms;
pub mod values;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between fixture values
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Nothing loaded yet
    #[error("No fixtures loaded yet; currency unknown")]
    NoCurrency,

    /// Unknown room type
    #[error(transparent)]
    RoomType(#[from] UnknownRoomType),

    /// Room catalog rejected a room
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Promotion catalog rejected an offer
    #[error(transparent)]
    Offer(#[from] OfferError),

    /// Configuration values are invalid
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Pricing configuration, if a config fixture was loaded
    config: Option<Configuration<'a>>,

    /// Rooms by code
    rooms: RoomCatalog<'a>,

    /// Offers by promo code
    promotions: PromotionCatalog<'a>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            config: None,
            rooms: RoomCatalog::new(),
            promotions: PromotionCatalog::new(),
            currency: None,
        }
    }

    /// Load pricing configuration from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if its values
    /// are invalid, or if its currency differs from data already loaded.
    pub fn load_config(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.file_path("config", name);
        let fixture: ConfigFixture = read_yaml(&file_path)?;

        self.ensure_currency(fixture.currency()?)?;

        let config = fixture.try_into_configuration()?;

        debug!(
            path = %file_path.display(),
            min_nights = config.min_nights(),
            max_nights = config.max_nights(),
            "loaded pricing configuration"
        );

        self.config = Some(config);

        Ok(self)
    }

    /// Load rooms from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a room is
    /// invalid or duplicated, or if there are currency mismatches.
    pub fn load_rooms(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.file_path("rooms", name);
        let fixture: RoomsFixture = read_yaml(&file_path)?;

        let count = fixture.rooms.len();

        for (code, room_fixture) in fixture.rooms {
            let room = room_fixture.try_into_room(code)?;

            self.ensure_currency(room.nightly_rate.currency())?;
            self.rooms.insert(room)?;
        }

        debug!(path = %file_path.display(), count, "loaded room fixtures");

        Ok(self)
    }

    /// Load promotional offers from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if an offer is
    /// invalid or duplicated, or if a fixed discount is in another currency.
    pub fn load_promotions(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.file_path("promotions", name);
        let fixture: PromotionsFixture = read_yaml(&file_path)?;

        let count = fixture.promotions.len();

        for (code, offer_fixture) in fixture.promotions {
            let offer = offer_fixture.try_into_offer(code)?;

            if let PromoDiscount::FixedAmount(amount) = offer.discount {
                self.ensure_currency(amount.currency())?;
            }

            self.promotions.insert(offer)?;
        }

        debug!(path = %file_path.display(), count, "loaded promotion fixtures");

        Ok(self)
    }

    /// Load config, rooms and promotions of the same set name
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three files fails to load.
    pub fn load_set(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        self.load_config(name)?
            .load_rooms(name)?
            .load_promotions(name)
    }

    /// Load a complete fixture set from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the set's files fails to load.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_set(name)?;

        Ok(fixture)
    }

    /// Pricing configuration, falling back to the defaults in the fixture
    /// currency when no config fixture was loaded
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoCurrency`] if nothing has been loaded.
    pub fn config(&self) -> Result<Configuration<'a>, FixtureError> {
        match &self.config {
            Some(config) => Ok(config.clone()),
            None => Ok(Configuration::with_defaults(self.currency()?)?),
        }
    }

    /// Rooms loaded so far
    pub fn rooms(&self) -> &RoomCatalog<'a> {
        &self.rooms
    }

    /// Offers loaded so far
    pub fn promotions(&self) -> &PromotionCatalog<'a> {
        &self.promotions
    }

    /// Offers loaded so far, for recording redemptions
    pub fn promotions_mut(&mut self) -> &mut PromotionCatalog<'a> {
        &mut self.promotions
    }

    /// Currency of the fixture set
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoCurrency`] if nothing has been loaded.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    fn file_path(&self, kind: &str, name: &str) -> PathBuf {
        self.base_path.join(kind).join(format!("{name}.yml"))
    }

    fn ensure_currency(&mut self, currency: &'static Currency) -> Result<(), FixtureError> {
        match self.currency {
            Some(existing) if existing != currency => Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            )),
            Some(_) => Ok(()),
            None => {
                self.currency = Some(currency);

                Ok(())
            }
        }
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let contents = fs::read_to_string(path)?;

    Ok(serde_norway::from_str(&contents)?)
}
