//! Stay Quote CLI
//!
//! Prices a stay against a fixture set and prints the breakdown.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use thiserror::Error;
use tracing::{debug, error, info};

use stay_pricing::prelude::*;

use crate::config::QuoteConfig;

mod config;
mod logging;

/// Reasons a quote cannot be produced.
#[derive(Debug, Error)]
enum QuoteError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("unknown room: {0}")]
    UnknownRoom(String),

    #[error(transparent)]
    Offer(#[from] OfferError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Breakdown(#[from] BreakdownError),

    #[error("failed to write quote: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let config = match QuoteConfig::load() {
        Ok(config) => config,
        Err(error) => {
            // Help and version requests also arrive here.
            _ = error.print();

            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(error) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for subscriber errors"
        )]
        {
            eprintln!("Logging error: {error}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, room = %config.stay.room, "failed to price stay");

            ExitCode::FAILURE
        }
    }
}

fn run(config: &QuoteConfig) -> Result<(), QuoteError> {
    let mut fixture = Fixture::with_base_path(&config.fixtures.base_path);
    fixture.load_set(&config.fixtures.set)?;

    let pricing = fixture.config()?;

    let room = fixture
        .rooms()
        .by_code(&config.stay.room)
        .ok_or_else(|| QuoteError::UnknownRoom(config.stay.room.clone()))?;

    let clock = FixedClock::new(config.stay.today.unwrap_or_else(|| SystemClock.today()));
    let stay = Stay::new(config.stay.check_in, config.stay.check_out, config.stay.guests);

    debug!(
        room = %room.code,
        check_in = %config.stay.check_in,
        check_out = %config.stay.check_out,
        guests = config.stay.guests,
        today = %clock.today(),
        "pricing stay"
    );

    let mut breakdown = compute_price(&stay, Some(room), None, &pricing, &clock)?;

    let mut offer_line = None;

    if let Some(code) = &config.stay.promo {
        let promo = fixture.promotions().validate(
            code,
            breakdown.nights(),
            room.room_type,
            clock.today(),
        )?;

        if let Some(offer) = fixture.promotions().offer(code) {
            offer_line = Some(format!(
                "{}: {} ({})",
                promo.code(),
                offer.name,
                offer.description()
            ));
        }

        info!(code = promo.code(), "promo code accepted");

        breakdown = compute_price(&stay, Some(room), Some(&promo), &pricing, &clock)?;
    }

    let mut out = io::stdout().lock();

    writeln!(out, "{} ({}), {} room", room.name, room.code, room.room_type)?;
    writeln!(
        out,
        "{} to {}, {} guest(s)",
        config.stay.check_in, config.stay.check_out, config.stay.guests
    )?;

    if let Some(line) = offer_line {
        writeln!(out, "{line}")?;
    }

    breakdown.write_to(&mut out)?;

    Ok(())
}
