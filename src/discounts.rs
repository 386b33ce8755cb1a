//! Discounts
//!
//! Minor-unit percentage arithmetic and the automatic stay discount rules.
//! Every discount is measured against the seasonally adjusted base price and
//! all applicable rules stack.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Discount for booking well ahead of arrival.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarlyBird {
    /// Minimum number of days between booking and check-in
    pub min_days_ahead: u32,

    /// Share of the base price taken off
    pub rate: Percentage,
}

impl EarlyBird {
    /// Whether a check-in `days_ahead` days from today qualifies.
    pub fn applies(&self, days_ahead: i64) -> bool {
        days_ahead >= i64::from(self.min_days_ahead)
    }
}

impl Default for EarlyBird {
    fn default() -> Self {
        Self {
            min_days_ahead: 30,
            rate: Percentage::from(Decimal::new(10, 2)),
        }
    }
}

/// Discount for long stays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtendedStay {
    /// Minimum number of nights
    pub min_nights: u32,

    /// Share of the base price taken off
    pub rate: Percentage,
}

impl ExtendedStay {
    /// Whether a stay of `nights` qualifies.
    pub fn applies(&self, nights: u32) -> bool {
        nights >= self.min_nights
    }
}

impl Default for ExtendedStay {
    fn default() -> Self {
        Self {
            min_nights: 7,
            rate: Percentage::from(Decimal::new(5, 2)),
        }
    }
}

/// Calculate the amount in minor units based on a percentage and a minor unit amount.
///
/// Rounds to the nearest minor unit, midpoints away from zero.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the result cannot be
/// represented in minor units.
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    scale_minor((*percent) * Decimal::ONE, minor)
}

/// Multiply a minor unit amount by `factor`, rounding to the nearest minor unit.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the product overflows.
pub fn scale_minor(factor: Decimal, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    factor
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}

/// The `percent` share of a money amount.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the result cannot be
/// represented in minor units.
pub fn percent_of<'a>(
    price: &Money<'a, Currency>,
    percent: &Percentage,
) -> Result<Money<'a, Currency>, DiscountError> {
    let minor = percent_of_minor(percent, price.to_minor_units())?;

    Ok(Money::from_minor(minor, price.currency()))
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn percent_of_minor_calculates_correctly() -> TestResult {
        let percent = Percentage::from(0.25);

        assert_eq!(percent_of_minor(&percent, 200)?, 50);

        Ok(())
    }

    #[test]
    fn percent_of_minor_rounds_midpoints_away_from_zero() -> TestResult {
        let percent = Percentage::from(Decimal::new(5, 1));

        assert_eq!(percent_of_minor(&percent, 3)?, 2);
        assert_eq!(percent_of_minor(&percent, -3)?, -2);

        Ok(())
    }

    #[test]
    fn percent_of_minor_overflow_returns_error() {
        let percent = Percentage::from(2.0);
        let result = percent_of_minor(&percent, i64::MAX);

        assert!(matches!(result, Err(DiscountError::PercentConversion)));
    }

    #[test]
    fn percent_of_minor_checked_mul_overflow_returns_error() -> TestResult {
        let percent = Percentage::try_from("100000000000000000000")?;
        let result = percent_of_minor(&percent, i64::MAX);

        assert!(matches!(result, Err(DiscountError::PercentConversion)));

        Ok(())
    }

    #[test]
    fn scale_minor_applies_multipliers() -> TestResult {
        assert_eq!(scale_minor(Decimal::new(130, 2), 150_000)?, 195_000);
        assert_eq!(scale_minor(Decimal::new(115, 2), 9999)?, 11499);
        assert_eq!(scale_minor(Decimal::ONE, 42)?, 42);

        Ok(())
    }

    #[test]
    fn percent_of_keeps_currency() -> TestResult {
        let price = Money::from_minor(150_000, USD);
        let discount = percent_of(&price, &Percentage::from(Decimal::new(10, 2)))?;

        assert_eq!(discount, Money::from_minor(15000, USD));

        Ok(())
    }

    #[test]
    fn early_bird_applies_from_threshold() {
        let rule = EarlyBird::default();

        assert!(!rule.applies(29));
        assert!(rule.applies(30));
        assert!(rule.applies(45));
        assert!(!rule.applies(-1));
    }

    #[test]
    fn extended_stay_applies_from_threshold() {
        let rule = ExtendedStay::default();

        assert!(!rule.applies(6));
        assert!(rule.applies(7));
        assert!(rule.applies(10));
    }
}
