//! Pricing Configuration
//!
//! Process-wide pricing settings, read once at startup and passed to the
//! engine by reference. A [`Configuration`] can only be obtained through
//! [`ConfigurationBuilder::build`], which checks its invariants.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::discounts::{EarlyBird, ExtendedStay};

/// Default shortest bookable stay
pub const DEFAULT_MIN_NIGHTS: u32 = 1;

/// Default longest bookable stay
pub const DEFAULT_MAX_NIGHTS: u32 = 30;

/// Default booking horizon
pub const DEFAULT_ADVANCE_BOOKING_DAYS: u32 = 365;

/// Default flat service fee, in minor units
pub const DEFAULT_SERVICE_FEE_MINOR: i64 = 2500;

/// Invalid configuration values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Stays must be at least one night.
    #[error("minimum nights must be at least 1")]
    ZeroMinNights,

    /// Night range is empty.
    #[error("minimum nights ({min}) exceeds maximum nights ({max})")]
    NightsRange {
        /// Configured minimum
        min: u32,
        /// Configured maximum
        max: u32,
    },

    /// Tax rate is below zero.
    #[error("tax rate must not be negative")]
    NegativeTaxRate,

    /// Discount rate is below zero.
    #[error("discount rate must not be negative")]
    NegativeDiscountRate,

    /// Service fee is below zero.
    #[error("service fee must not be negative")]
    NegativeServiceFee,
}

/// Pricing configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration<'a> {
    min_nights: u32,
    max_nights: u32,
    tax_rate: Percentage,
    service_fee: Money<'a, Currency>,
    advance_booking_days: u32,
    early_bird: EarlyBird,
    extended_stay: ExtendedStay,
}

impl<'a> Configuration<'a> {
    /// Start building a configuration from the defaults, charging the
    /// service fee in `currency`.
    pub fn builder(currency: &'a Currency) -> ConfigurationBuilder<'a> {
        ConfigurationBuilder::new(currency)
    }

    /// Default configuration in `currency`.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in defaults; the `Result` mirrors [`ConfigurationBuilder::build`].
    pub fn with_defaults(currency: &'a Currency) -> Result<Self, ConfigurationError> {
        Self::builder(currency).build()
    }

    /// Shortest bookable stay, in nights
    pub fn min_nights(&self) -> u32 {
        self.min_nights
    }

    /// Longest bookable stay, in nights
    pub fn max_nights(&self) -> u32 {
        self.max_nights
    }

    /// Tax charged on the seasonally adjusted base price
    pub fn tax_rate(&self) -> Percentage {
        self.tax_rate
    }

    /// Flat fee charged once per stay
    pub fn service_fee(&self) -> Money<'a, Currency> {
        self.service_fee
    }

    /// How many days ahead a check-in may be booked
    pub fn advance_booking_days(&self) -> u32 {
        self.advance_booking_days
    }

    /// Early booking discount rule
    pub fn early_bird(&self) -> &EarlyBird {
        &self.early_bird
    }

    /// Long stay discount rule
    pub fn extended_stay(&self) -> &ExtendedStay {
        &self.extended_stay
    }

    /// Whether `nights` lies within the bookable range.
    pub fn allows_nights(&self, nights: u32) -> bool {
        (self.min_nights..=self.max_nights).contains(&nights)
    }
}

/// Builder for [`Configuration`]
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder<'a> {
    config: Configuration<'a>,
}

impl<'a> ConfigurationBuilder<'a> {
    fn new(currency: &'a Currency) -> Self {
        Self {
            config: Configuration {
                min_nights: DEFAULT_MIN_NIGHTS,
                max_nights: DEFAULT_MAX_NIGHTS,
                tax_rate: Percentage::from(Decimal::new(10, 2)),
                service_fee: Money::from_minor(DEFAULT_SERVICE_FEE_MINOR, currency),
                advance_booking_days: DEFAULT_ADVANCE_BOOKING_DAYS,
                early_bird: EarlyBird::default(),
                extended_stay: ExtendedStay::default(),
            },
        }
    }

    /// Set the bookable night range.
    #[must_use]
    pub fn nights(mut self, min: u32, max: u32) -> Self {
        self.config.min_nights = min;
        self.config.max_nights = max;
        self
    }

    /// Set the tax rate.
    #[must_use]
    pub fn tax_rate(mut self, rate: Percentage) -> Self {
        self.config.tax_rate = rate;
        self
    }

    /// Set the service fee.
    #[must_use]
    pub fn service_fee(mut self, fee: Money<'a, Currency>) -> Self {
        self.config.service_fee = fee;
        self
    }

    /// Set the booking horizon.
    #[must_use]
    pub fn advance_booking_days(mut self, days: u32) -> Self {
        self.config.advance_booking_days = days;
        self
    }

    /// Set the early booking discount rule.
    #[must_use]
    pub fn early_bird(mut self, rule: EarlyBird) -> Self {
        self.config.early_bird = rule;
        self
    }

    /// Set the long stay discount rule.
    #[must_use]
    pub fn extended_stay(mut self, rule: ExtendedStay) -> Self {
        self.config.extended_stay = rule;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the night range is empty or starts
    /// at zero, or if a rate or the service fee is negative.
    pub fn build(self) -> Result<Configuration<'a>, ConfigurationError> {
        let config = self.config;

        if config.min_nights == 0 {
            return Err(ConfigurationError::ZeroMinNights);
        }

        if config.min_nights > config.max_nights {
            return Err(ConfigurationError::NightsRange {
                min: config.min_nights,
                max: config.max_nights,
            });
        }

        if is_negative(config.tax_rate) {
            return Err(ConfigurationError::NegativeTaxRate);
        }

        if is_negative(config.early_bird.rate) || is_negative(config.extended_stay.rate) {
            return Err(ConfigurationError::NegativeDiscountRate);
        }

        if config.service_fee.to_minor_units() < 0 {
            return Err(ConfigurationError::NegativeServiceFee);
        }

        Ok(config)
    }
}

fn is_negative(percent: Percentage) -> bool {
    (percent * Decimal::ONE).is_sign_negative()
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_are_valid() -> TestResult {
        let config = Configuration::with_defaults(USD)?;

        assert_eq!(config.min_nights(), 1);
        assert_eq!(config.max_nights(), 30);
        assert_eq!(config.tax_rate(), Percentage::from(Decimal::new(10, 2)));
        assert_eq!(config.service_fee(), Money::from_minor(2500, USD));
        assert_eq!(config.advance_booking_days(), 365);
        assert_eq!(config.early_bird().min_days_ahead, 30);
        assert_eq!(config.extended_stay().min_nights, 7);

        Ok(())
    }

    #[test]
    fn builder_overrides_defaults() -> TestResult {
        let config = Configuration::builder(USD)
            .nights(2, 14)
            .tax_rate(Percentage::from(Decimal::new(8, 2)))
            .service_fee(Money::from_minor(1000, USD))
            .advance_booking_days(180)
            .build()?;

        assert!(!config.allows_nights(1));
        assert!(config.allows_nights(2));
        assert!(config.allows_nights(14));
        assert!(!config.allows_nights(15));
        assert_eq!(config.service_fee(), Money::from_minor(1000, USD));
        assert_eq!(config.advance_booking_days(), 180);

        Ok(())
    }

    #[test]
    fn build_rejects_invalid_night_ranges() {
        assert_eq!(
            Configuration::builder(USD).nights(0, 5).build(),
            Err(ConfigurationError::ZeroMinNights)
        );
        assert_eq!(
            Configuration::builder(USD).nights(10, 5).build(),
            Err(ConfigurationError::NightsRange { min: 10, max: 5 })
        );
    }

    #[test]
    fn build_rejects_negative_amounts() {
        assert_eq!(
            Configuration::builder(USD)
                .tax_rate(Percentage::from(Decimal::new(-1, 2)))
                .build(),
            Err(ConfigurationError::NegativeTaxRate)
        );
        assert_eq!(
            Configuration::builder(USD)
                .service_fee(Money::from_minor(-1, USD))
                .build(),
            Err(ConfigurationError::NegativeServiceFee)
        );
        assert_eq!(
            Configuration::builder(USD)
                .extended_stay(ExtendedStay {
                    min_nights: 7,
                    rate: Percentage::from(Decimal::new(-5, 2)),
                })
                .build(),
            Err(ConfigurationError::NegativeDiscountRate)
        );
    }
}
