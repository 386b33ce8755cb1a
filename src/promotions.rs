//! Promotions
//!
//! Validated promo codes as consumed by the pricing engine. Codes reach the
//! engine only after validation (see [`offers`]); the engine trusts the
//! discount they carry.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::discounts::{DiscountError, percent_of};

pub mod offers;

/// Discount carried by a promo code.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PromoDiscount<'a> {
    /// Take a share of the base price off (e.g. 0.20 for "20% off")
    Percentage(Percentage),

    /// Take a flat amount off (e.g. "$50 off")
    FixedAmount(Money<'a, Currency>),
}

/// A validated promo code
#[derive(Debug, Clone, PartialEq)]
pub struct PromoCode<'a> {
    code: String,
    discount: PromoDiscount<'a>,
}

impl PromoDiscount<'_> {
    /// Whether the discount would add to the price instead of taking off.
    pub fn is_negative(&self) -> bool {
        match self {
            PromoDiscount::Percentage(percent) => ((*percent) * Decimal::ONE).is_sign_negative(),
            PromoDiscount::FixedAmount(amount) => amount.to_minor_units() < 0,
        }
    }
}

impl<'a> PromoCode<'a> {
    /// Create a promo code with the given discount.
    pub fn new(code: impl Into<String>, discount: PromoDiscount<'a>) -> Self {
        Self {
            code: code.into(),
            discount,
        }
    }

    /// Create a percentage-off promo code.
    pub fn percentage(code: impl Into<String>, percent: Percentage) -> Self {
        Self::new(code, PromoDiscount::Percentage(percent))
    }

    /// Create a fixed-amount-off promo code.
    pub fn fixed_amount(code: impl Into<String>, amount: Money<'a, Currency>) -> Self {
        Self::new(code, PromoDiscount::FixedAmount(amount))
    }

    /// Return the code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Return the discount
    pub fn discount(&self) -> &PromoDiscount<'a> {
        &self.discount
    }

    /// Amount this code takes off a base price.
    ///
    /// Fixed amounts are not limited to the base price.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a percentage calculation cannot be represented in minor units.
    /// - a fixed amount is in a different currency from `base`.
    pub fn amount_off(
        &self,
        base: &Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        match &self.discount {
            PromoDiscount::Percentage(percent) => percent_of(base, percent),
            PromoDiscount::FixedAmount(amount) => {
                Ok(Money::from_minor(0, base.currency()).add(*amount)?)
            }
        }
    }
}
