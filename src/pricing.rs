//! Pricing
//!
//! Prices a stay in a room:
//!
//! 1. validate the stay (dates, night range, party size, booking window)
//! 2. base price: nightly rate times nights
//! 3. seasonal multiplier of the check-in month, applied once to the base
//! 4. taxes on the adjusted base
//! 5. flat service fee
//! 6. early-bird, extended-stay and promo discounts, each measured against the
//!    adjusted base, all stacking
//! 7. total: adjusted base + taxes + service fee - discounts, floored at zero
//!
//! Pricing is a pure function of its arguments. "Today" comes from the
//! [`Clock`] passed in, never from the system clock directly.

use jiff::civil::Date;
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    breakdown::{AppliedDiscount, DiscountKind, PriceBreakdown},
    clock::Clock,
    config::Configuration,
    discounts::{DiscountError, percent_of, scale_minor},
    promotions::PromoCode,
    rooms::Room,
    seasons::Season,
    stays::{Stay, nights_between},
};

/// Reasons a stay cannot be priced.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Check-in or check-out has not been chosen.
    #[error("check-in and check-out dates are required")]
    MissingStayDates,

    /// No room has been chosen.
    #[error("a room is required")]
    MissingRoom,

    /// Check-out is not after check-in.
    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidDateOrder {
        /// Check-in date
        check_in: Date,
        /// Check-out date
        check_out: Date,
    },

    /// The stay is shorter or longer than allowed.
    #[error("a stay of {nights} nights is outside the allowed {min} to {max} nights")]
    InvalidNights {
        /// Nights in the stay
        nights: u32,
        /// Shortest allowed stay
        min: u32,
        /// Longest allowed stay
        max: u32,
    },

    /// The party is empty.
    #[error("a stay needs at least one guest")]
    NoGuests,

    /// The party does not fit in the room.
    #[error("{guests} guests exceed the room capacity of {capacity}")]
    OverCapacity {
        /// Guests in the party
        guests: u32,
        /// Room capacity
        capacity: u32,
    },

    /// Check-in is before today.
    #[error("check-in {check_in} is before today ({today})")]
    CheckInInPast {
        /// Check-in date
        check_in: Date,
        /// Today's date
        today: Date,
    },

    /// Check-in is further ahead than bookings are accepted.
    #[error("check-in {check_in} is more than {max_days} days ahead")]
    BeyondBookingHorizon {
        /// Check-in date
        check_in: Date,
        /// Booking horizon in days
        max_days: u32,
    },

    /// The base price does not fit in minor units.
    #[error("base price overflowed")]
    Overflow,

    /// Wrapped discount calculation error.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Wrapped date arithmetic error.
    #[error(transparent)]
    Date(#[from] jiff::Error),
}

/// Price a stay.
///
/// `room` and `promo` are optional because the booking form may not have
/// them yet; a missing room is reported as [`PricingError::MissingRoom`],
/// a missing promo code simply means no promo discount.
///
/// # Errors
///
/// Returns a [`PricingError`] when the stay fails validation, or when money
/// arithmetic fails (for example, the service fee is configured in a
/// different currency from the room rate).
pub fn compute_price<'a, C>(
    stay: &Stay,
    room: Option<&Room<'a>>,
    promo: Option<&PromoCode<'a>>,
    config: &Configuration<'a>,
    clock: &C,
) -> Result<PriceBreakdown<'a>, PricingError>
where
    C: Clock + ?Sized,
{
    let (check_in, check_out) = stay.dates().ok_or(PricingError::MissingStayDates)?;
    let room = room.ok_or(PricingError::MissingRoom)?;

    let nights = validate_nights(check_in, check_out, config)?;

    validate_party(stay.guests(), room)?;

    let today = clock.today();
    let days_ahead = validate_lead_time(check_in, today, config)?;

    let currency = room.nightly_rate.currency();

    let base_minor = room
        .nightly_rate
        .to_minor_units()
        .checked_mul(i64::from(nights))
        .ok_or(PricingError::Overflow)?;

    let season = Season::for_check_in(check_in);
    let seasonal_multiplier = season.multiplier();

    let base_price = Money::from_minor(base_minor, currency);
    let adjusted_price = Money::from_minor(scale_minor(seasonal_multiplier, base_minor)?, currency);

    let taxes = percent_of(&adjusted_price, &config.tax_rate())?;
    let service_fee = zero(currency).add(config.service_fee())?;

    let discounts = stay_discounts(nights, days_ahead, &adjusted_price, promo, config)?;
    let discount_total = discounts
        .iter()
        .try_fold(zero(currency), |acc, discount| acc.add(discount.amount))?;

    let gross = adjusted_price.add(taxes)?.add(service_fee)?;
    let total = if discount_total.to_minor_units() > gross.to_minor_units() {
        zero(currency)
    } else {
        gross.sub(discount_total)?
    };

    Ok(PriceBreakdown {
        nights,
        season,
        base_price,
        seasonal_multiplier,
        adjusted_price,
        taxes,
        service_fee,
        discounts,
        discount_total,
        total,
    })
}

/// Checks date order and the night range, returning the number of nights.
fn validate_nights(
    check_in: Date,
    check_out: Date,
    config: &Configuration<'_>,
) -> Result<u32, PricingError> {
    if check_out <= check_in {
        return Err(PricingError::InvalidDateOrder {
            check_in,
            check_out,
        });
    }

    let nights = nights_between(check_in, check_out)?.unsigned_abs();

    if !config.allows_nights(nights) {
        return Err(PricingError::InvalidNights {
            nights,
            min: config.min_nights(),
            max: config.max_nights(),
        });
    }

    Ok(nights)
}

fn validate_party(guests: u32, room: &Room<'_>) -> Result<(), PricingError> {
    if guests == 0 {
        return Err(PricingError::NoGuests);
    }

    if !room.fits(guests) {
        return Err(PricingError::OverCapacity {
            guests,
            capacity: room.capacity,
        });
    }

    Ok(())
}

/// Checks the check-in falls within the booking window, returning how many
/// days ahead of today it is.
fn validate_lead_time(
    check_in: Date,
    today: Date,
    config: &Configuration<'_>,
) -> Result<i64, PricingError> {
    let days_ahead = i64::from(nights_between(today, check_in)?);

    if days_ahead < 0 {
        return Err(PricingError::CheckInInPast { check_in, today });
    }

    if days_ahead > i64::from(config.advance_booking_days()) {
        return Err(PricingError::BeyondBookingHorizon {
            check_in,
            max_days: config.advance_booking_days(),
        });
    }

    Ok(days_ahead)
}

fn stay_discounts<'a>(
    nights: u32,
    days_ahead: i64,
    adjusted_price: &Money<'a, Currency>,
    promo: Option<&PromoCode<'a>>,
    config: &Configuration<'a>,
) -> Result<SmallVec<[AppliedDiscount<'a>; 3]>, DiscountError> {
    let mut discounts = SmallVec::new();

    let early_bird = config.early_bird();
    if early_bird.applies(days_ahead) {
        discounts.push(AppliedDiscount {
            kind: DiscountKind::EarlyBird,
            amount: percent_of(adjusted_price, &early_bird.rate)?,
        });
    }

    let extended_stay = config.extended_stay();
    if extended_stay.applies(nights) {
        discounts.push(AppliedDiscount {
            kind: DiscountKind::ExtendedStay,
            amount: percent_of(adjusted_price, &extended_stay.rate)?,
        });
    }

    if let Some(promo) = promo {
        discounts.push(AppliedDiscount {
            kind: DiscountKind::Promo(promo.code().to_string()),
            amount: promo.amount_off(adjusted_price)?,
        });
    }

    Ok(discounts)
}

fn zero(currency: &Currency) -> Money<'_, Currency> {
    Money::from_minor(0, currency)
}
