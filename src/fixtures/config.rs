//! Configuration Fixtures

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    config::Configuration,
    discounts::{EarlyBird, ExtendedStay},
    fixtures::{
        FixtureError,
        values::{parse_currency, parse_percentage, parse_price},
    },
};

/// Pricing configuration from YAML. Anything left out keeps its default.
#[derive(Debug, Deserialize)]
pub struct ConfigFixture {
    /// Currency code (e.g., "USD")
    pub currency: String,

    /// Bookable night range
    pub nights: Option<NightsFixture>,

    /// Tax rate (e.g., "10%")
    pub tax_rate: Option<String>,

    /// Flat service fee (e.g., "25.00 USD")
    pub service_fee: Option<String>,

    /// Booking horizon in days
    pub advance_booking_days: Option<u32>,

    /// Early booking discount rule
    pub early_bird: Option<EarlyBirdFixture>,

    /// Long stay discount rule
    pub extended_stay: Option<ExtendedStayFixture>,
}

/// Night range
#[derive(Debug, Deserialize)]
pub struct NightsFixture {
    /// Shortest stay
    pub min: u32,

    /// Longest stay
    pub max: u32,
}

/// Early booking discount rule
#[derive(Debug, Deserialize)]
pub struct EarlyBirdFixture {
    /// Days between booking and check-in needed to qualify
    pub min_days_ahead: u32,

    /// Discount rate (e.g., "10%")
    pub rate: String,
}

/// Long stay discount rule
#[derive(Debug, Deserialize)]
pub struct ExtendedStayFixture {
    /// Nights needed to qualify
    pub min_nights: u32,

    /// Discount rate (e.g., "5%")
    pub rate: String,
}

impl ConfigFixture {
    /// Currency the configuration is priced in
    ///
    /// # Errors
    ///
    /// Returns an error if the currency code is not recognised.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        parse_currency(&self.currency)
    }

    /// Convert to a validated [`Configuration`]
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed, if the service fee is in
    /// another currency, or if the resulting configuration is invalid.
    pub fn try_into_configuration(self) -> Result<Configuration<'static>, FixtureError> {
        let currency = self.currency()?;
        let mut builder = Configuration::builder(currency);

        if let Some(nights) = self.nights {
            builder = builder.nights(nights.min, nights.max);
        }

        if let Some(tax_rate) = &self.tax_rate {
            builder = builder.tax_rate(parse_percentage(tax_rate)?);
        }

        if let Some(service_fee) = &self.service_fee {
            let (minor_units, fee_currency) = parse_price(service_fee)?;

            if fee_currency != currency {
                return Err(FixtureError::CurrencyMismatch(
                    currency.iso_alpha_code.to_string(),
                    fee_currency.iso_alpha_code.to_string(),
                ));
            }

            builder = builder.service_fee(Money::from_minor(minor_units, currency));
        }

        if let Some(days) = self.advance_booking_days {
            builder = builder.advance_booking_days(days);
        }

        if let Some(early_bird) = &self.early_bird {
            builder = builder.early_bird(EarlyBird {
                min_days_ahead: early_bird.min_days_ahead,
                rate: parse_percentage(&early_bird.rate)?,
            });
        }

        if let Some(extended_stay) = &self.extended_stay {
            builder = builder.extended_stay(ExtendedStay {
                min_nights: extended_stay.min_nights,
                rate: parse_percentage(&extended_stay.rate)?,
            });
        }

        Ok(builder.build()?)
    }
}
