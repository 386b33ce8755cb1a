//! Offers
//!
//! Promotional offers keyed by promo code, and the validation that turns a
//! code typed by a guest into a [`PromoCode`] the pricing engine can apply.

use jiff::civil::Date;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    promotions::{PromoCode, PromoDiscount},
    rooms::RoomType,
};

/// Reasons a promo code cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OfferError {
    /// No offer has this code.
    #[error("unknown promo code: {0}")]
    UnknownCode(String),

    /// An offer with this code already exists.
    #[error("duplicate promo code: {0}")]
    DuplicateCode(String),

    /// The offer's discount is below zero.
    #[error("promo code {0} has a negative discount")]
    NegativeDiscount(String),

    /// The offer has been switched off.
    #[error("promo code {0} is not active")]
    Inactive(String),

    /// The offer has not started yet.
    #[error("promo code {code} is valid from {valid_from}")]
    NotYetValid {
        /// Promo code
        code: String,
        /// First day the offer can be used
        valid_from: Date,
    },

    /// The offer has ended.
    #[error("promo code {0} has expired")]
    Expired(String),

    /// The offer has been redeemed as often as allowed.
    #[error("promo code {code} has reached its limit of {max_uses} uses")]
    UsageExhausted {
        /// Promo code
        code: String,
        /// Maximum number of redemptions
        max_uses: u32,
    },

    /// The stay is too short for the offer.
    #[error("promo code {code} needs at least {required} nights, stay has {nights}")]
    MinimumNightsNotMet {
        /// Promo code
        code: String,
        /// Minimum nights required by the offer
        required: u32,
        /// Nights in the stay
        nights: u32,
    },

    /// The offer does not cover this kind of room.
    #[error("promo code {code} does not apply to {room_type} rooms")]
    RoomTypeNotEligible {
        /// Promo code
        code: String,
        /// Room type of the stay
        room_type: RoomType,
    },
}

/// Offer lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    /// Offer can be redeemed
    #[default]
    Active,

    /// Offer has been switched off
    Inactive,

    /// Offer has been retired
    Expired,

    /// Offer is set up but not yet open
    Scheduled,
}

/// A promotional offer
#[derive(Debug, Clone, PartialEq)]
pub struct Offer<'a> {
    /// Promo code guests type in
    pub code: String,

    /// Offer name
    pub name: String,

    /// Discount granted
    pub discount: PromoDiscount<'a>,

    /// First day the offer can be used
    pub valid_from: Option<Date>,

    /// Last day the offer can be used
    pub valid_until: Option<Date>,

    /// Minimum nights the stay must have
    pub min_nights: u32,

    /// Room types the offer covers; empty covers all rooms
    pub room_types: SmallVec<[RoomType; 5]>,

    /// Maximum number of redemptions
    pub max_uses: Option<u32>,

    /// Redemptions so far
    pub used: u32,

    /// Lifecycle status
    pub status: OfferStatus,
}

impl<'a> Offer<'a> {
    /// Create an active, unrestricted offer.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        discount: PromoDiscount<'a>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            discount,
            valid_from: None,
            valid_until: None,
            min_nights: 1,
            room_types: SmallVec::new(),
            max_uses: None,
            used: 0,
            status: OfferStatus::Active,
        }
    }

    /// Check whether the offer can be used for a stay booked on `today`.
    ///
    /// # Errors
    ///
    /// Returns the first [`OfferError`] that rules the offer out, checked in
    /// order: status, validity window, usage limit, minimum nights, room type.
    ///
    /// Only [`OfferStatus::Active`] offers can be used. A scheduled offer is
    /// reported as [`OfferError::NotYetValid`] before its start date and as
    /// [`OfferError::Inactive`] after it, until someone activates it.
    pub fn check(&self, nights: u32, room_type: RoomType, today: Date) -> Result<(), OfferError> {
        match self.status {
            OfferStatus::Active => {}
            OfferStatus::Inactive => return Err(OfferError::Inactive(self.code.clone())),
            OfferStatus::Expired => return Err(OfferError::Expired(self.code.clone())),
            OfferStatus::Scheduled => return Err(self.not_open(today)),
        }

        if let Some(valid_from) = self.valid_from
            && today < valid_from
        {
            return Err(OfferError::NotYetValid {
                code: self.code.clone(),
                valid_from,
            });
        }

        if let Some(valid_until) = self.valid_until
            && today > valid_until
        {
            return Err(OfferError::Expired(self.code.clone()));
        }

        if let Some(max_uses) = self.max_uses
            && self.used >= max_uses
        {
            return Err(OfferError::UsageExhausted {
                code: self.code.clone(),
                max_uses,
            });
        }

        if nights < self.min_nights {
            return Err(OfferError::MinimumNightsNotMet {
                code: self.code.clone(),
                required: self.min_nights,
                nights,
            });
        }

        if !self.room_types.is_empty() && !self.room_types.contains(&room_type) {
            return Err(OfferError::RoomTypeNotEligible {
                code: self.code.clone(),
                room_type,
            });
        }

        Ok(())
    }

    fn not_open(&self, today: Date) -> OfferError {
        match self.valid_from {
            Some(valid_from) if today < valid_from => OfferError::NotYetValid {
                code: self.code.clone(),
                valid_from,
            },
            _ => OfferError::Inactive(self.code.clone()),
        }
    }

    /// The promo code the pricing engine applies for this offer.
    pub fn promo_code(&self) -> PromoCode<'a> {
        PromoCode::new(self.code.clone(), self.discount)
    }

    /// Return a copy with one more redemption recorded.
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::UsageExhausted`] if the usage limit has been reached.
    pub fn redeem(&self) -> Result<Self, OfferError> {
        if let Some(max_uses) = self.max_uses
            && self.used >= max_uses
        {
            return Err(OfferError::UsageExhausted {
                code: self.code.clone(),
                max_uses,
            });
        }

        Ok(Self {
            used: self.used.saturating_add(1),
            ..self.clone()
        })
    }

    /// Short description of the discount, e.g. "20% off".
    pub fn description(&self) -> String {
        match &self.discount {
            PromoDiscount::Percentage(percent) => {
                let points = ((*percent) * Decimal::ONE * Decimal::ONE_HUNDRED).normalize();

                format!("{points}% off")
            }
            PromoDiscount::FixedAmount(amount) => format!("{amount} off"),
        }
    }
}

/// Offers indexed by promo code.
///
/// Codes are matched case-insensitively.
#[derive(Debug, Default)]
pub struct PromotionCatalog<'a> {
    offers: FxHashMap<String, Offer<'a>>,
}

impl<'a> PromotionCatalog<'a> {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an offer.
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::NegativeDiscount`] if the offer would add to the
    /// price, or [`OfferError::DuplicateCode`] if an offer with the same code
    /// exists.
    pub fn insert(&mut self, offer: Offer<'a>) -> Result<(), OfferError> {
        if offer.discount.is_negative() {
            return Err(OfferError::NegativeDiscount(offer.code));
        }

        let key = normalise_code(&offer.code);

        if self.offers.contains_key(&key) {
            return Err(OfferError::DuplicateCode(offer.code));
        }

        self.offers.insert(key, offer);

        Ok(())
    }

    /// Offer by promo code
    pub fn offer(&self, code: &str) -> Option<&Offer<'a>> {
        self.offers.get(&normalise_code(code))
    }

    /// Validate a promo code for a stay booked on `today`.
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::UnknownCode`] if no offer has the code, otherwise
    /// any error from [`Offer::check`].
    pub fn validate(
        &self,
        code: &str,
        nights: u32,
        room_type: RoomType,
        today: Date,
    ) -> Result<PromoCode<'a>, OfferError> {
        let offer = self
            .offer(code)
            .ok_or_else(|| OfferError::UnknownCode(code.trim().to_string()))?;

        offer.check(nights, room_type, today)?;

        Ok(offer.promo_code())
    }

    /// Record a redemption of `code`.
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::UnknownCode`] or [`OfferError::UsageExhausted`].
    pub fn redeem(&mut self, code: &str) -> Result<(), OfferError> {
        let offer = self
            .offers
            .get_mut(&normalise_code(code))
            .ok_or_else(|| OfferError::UnknownCode(code.trim().to_string()))?;

        *offer = offer.redeem()?;

        Ok(())
    }

    /// Number of offers
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Whether the catalog has no offers
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

fn normalise_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
