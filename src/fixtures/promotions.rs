//! Promotion Fixtures

use std::collections::BTreeMap;

use jiff::civil::Date;
use rusty_money::Money;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    fixtures::{
        FixtureError,
        values::{parse_percentage, parse_price},
    },
    promotions::{
        PromoDiscount,
        offers::{Offer, OfferStatus},
    },
    rooms::RoomType,
};

/// Wrapper for promotions in YAML
#[derive(Debug, Deserialize)]
pub struct PromotionsFixture {
    /// Map of promo code -> offer fixture
    pub promotions: BTreeMap<String, OfferFixture>,
}

/// Offer fixture from YAML
#[derive(Debug, Deserialize)]
pub struct OfferFixture {
    /// Offer name
    pub name: String,

    /// Discount granted
    pub discount: DiscountFixture,

    /// First day the offer can be used
    #[serde(default)]
    pub valid_from: Option<Date>,

    /// Last day the offer can be used
    #[serde(default)]
    pub valid_until: Option<Date>,

    /// Minimum nights the stay must have
    #[serde(default)]
    pub min_nights: Option<u32>,

    /// Room types the offer covers; empty covers all rooms
    #[serde(default)]
    pub room_types: Vec<String>,

    /// Maximum number of redemptions
    #[serde(default)]
    pub max_uses: Option<u32>,

    /// Redemptions so far
    #[serde(default)]
    pub used: u32,

    /// Lifecycle status
    #[serde(default)]
    pub status: OfferStatus,
}

/// Promo discount configuration from YAML fixtures
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountFixture {
    /// Percentage off (e.g., "20%")
    Percentage {
        /// Discount percentage
        value: String,
    },

    /// Fixed amount off (e.g., "50.00 USD")
    AmountOff {
        /// Discount amount string
        value: String,
    },
}

impl TryFrom<DiscountFixture> for PromoDiscount<'_> {
    type Error = FixtureError;

    fn try_from(config: DiscountFixture) -> Result<Self, Self::Error> {
        match config {
            DiscountFixture::Percentage { value } => {
                Ok(PromoDiscount::Percentage(parse_percentage(&value)?))
            }
            DiscountFixture::AmountOff { value } => {
                let (minor_units, currency) = parse_price(&value)?;

                Ok(PromoDiscount::FixedAmount(Money::from_minor(
                    minor_units,
                    currency,
                )))
            }
        }
    }
}

impl OfferFixture {
    /// Convert to an [`Offer`] with the given code
    ///
    /// # Errors
    ///
    /// Returns an error if the discount or a room type cannot be parsed.
    pub fn try_into_offer(self, code: String) -> Result<Offer<'static>, FixtureError> {
        let room_types = self
            .room_types
            .iter()
            .map(String::as_str)
            .map(str::parse::<RoomType>)
            .collect::<Result<SmallVec<_>, _>>()?;

        Ok(Offer {
            code,
            name: self.name,
            discount: PromoDiscount::try_from(self.discount)?,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            min_nights: self.min_nights.unwrap_or(1),
            room_types,
            max_uses: self.max_uses,
            used: self.used,
            status: self.status,
        })
    }
}
