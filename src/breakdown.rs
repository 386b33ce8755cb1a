//! Price Breakdown
//!
//! The result of pricing a stay. A breakdown is built once per calculation
//! and never modified afterwards; recalculating produces a new breakdown.

use std::{fmt, io};

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::seasons::Season;

/// Errors writing a breakdown.
#[derive(Debug, Error)]
pub enum BreakdownError {
    /// Output could not be written.
    #[error("failed to write price breakdown: {0}")]
    Io(#[from] io::Error),
}

/// The rule a discount line came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountKind {
    /// Booked well ahead of arrival
    EarlyBird,

    /// Long stay
    ExtendedStay,

    /// Promo code
    Promo(String),
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountKind::EarlyBird => f.write_str("Early-bird discount"),
            DiscountKind::ExtendedStay => f.write_str("Extended-stay discount"),
            DiscountKind::Promo(code) => write!(f, "Promo {code}"),
        }
    }
}

/// One discount taken off a stay.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedDiscount<'a> {
    /// Rule that produced the discount
    pub kind: DiscountKind,

    /// Amount taken off
    pub amount: Money<'a, Currency>,
}

/// Itemised price of a stay.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown<'a> {
    pub(crate) nights: u32,
    pub(crate) season: Season,
    pub(crate) base_price: Money<'a, Currency>,
    pub(crate) seasonal_multiplier: Decimal,
    pub(crate) adjusted_price: Money<'a, Currency>,
    pub(crate) taxes: Money<'a, Currency>,
    pub(crate) service_fee: Money<'a, Currency>,
    pub(crate) discounts: SmallVec<[AppliedDiscount<'a>; 3]>,
    pub(crate) discount_total: Money<'a, Currency>,
    pub(crate) total: Money<'a, Currency>,
}

impl<'a> PriceBreakdown<'a> {
    /// Nights in the stay
    pub fn nights(&self) -> u32 {
        self.nights
    }

    /// Season of the check-in month
    pub fn season(&self) -> Season {
        self.season
    }

    /// Nightly rate times nights, before the seasonal multiplier
    pub fn base_price(&self) -> Money<'a, Currency> {
        self.base_price
    }

    /// Seasonal multiplier applied to the base price
    pub fn seasonal_multiplier(&self) -> Decimal {
        self.seasonal_multiplier
    }

    /// Base price after the seasonal multiplier; taxes and discounts are
    /// measured against this amount
    pub fn adjusted_price(&self) -> Money<'a, Currency> {
        self.adjusted_price
    }

    /// Taxes
    pub fn taxes(&self) -> Money<'a, Currency> {
        self.taxes
    }

    /// Flat service fee
    pub fn service_fee(&self) -> Money<'a, Currency> {
        self.service_fee
    }

    /// Each discount applied, in rule order
    pub fn discounts(&self) -> &[AppliedDiscount<'a>] {
        &self.discounts
    }

    /// Sum of all discounts
    pub fn discount_total(&self) -> Money<'a, Currency> {
        self.discount_total
    }

    /// Amount due, never below zero
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Whether discounts exceeded the price and the total was floored at zero.
    pub fn is_clamped(&self) -> bool {
        let uncapped = i128::from(self.adjusted_price.to_minor_units())
            + i128::from(self.taxes.to_minor_units())
            + i128::from(self.service_fee.to_minor_units())
            - i128::from(self.discount_total.to_minor_units());

        uncapped < 0
    }

    /// Writes the breakdown as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), BreakdownError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Amount"]);
        builder.push_record([
            format!("{} nights", self.nights),
            self.base_price.to_string(),
        ]);
        builder.push_record([
            format!("Season ({}) x{}", self.season, self.seasonal_multiplier),
            self.adjusted_price.to_string(),
        ]);
        builder.push_record(["Taxes".to_string(), self.taxes.to_string()]);
        builder.push_record(["Service fee".to_string(), self.service_fee.to_string()]);

        for discount in &self.discounts {
            builder.push_record([discount.kind.to_string(), format!("-{}", discount.amount)]);
        }

        builder.push_record(["Total".to_string(), self.total.to_string()]);

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Rows::last(), Color::BOLD);
        table.modify(Columns::new(1..), Alignment::right());

        writeln!(out, "{table}")?;

        if self.is_clamped() {
            writeln!(out, " Discounts exceed the price; total floored at zero.")?;
        }

        Ok(())
    }
}
