//! Stay Pricing
//!
//! Booking price calculation for hotel stays: nightly base price, seasonal
//! adjustment, taxes, service fee and stacked discounts, along with the room
//! catalog, promo code validation and fixture loading that feed it.

pub mod breakdown;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod discounts;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod rooms;
pub mod seasons;
pub mod stays;
