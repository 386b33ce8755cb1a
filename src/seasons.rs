//! Seasons
//!
//! Seasonal pricing tiers, keyed by the calendar month of check-in.
//!
//! The tier of the check-in month applies to the whole stay. A stay that
//! starts in late May and runs into June is priced entirely as high season;
//! nights are not priced individually.

use std::fmt;

use jiff::civil::Date;
use rust_decimal::Decimal;

/// Seasonal pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// June, July, August and December.
    Peak,

    /// March, April and May.
    High,

    /// Every other month.
    Low,
}

impl Season {
    /// Season for a check-in date.
    pub fn for_check_in(check_in: Date) -> Self {
        match check_in.month() {
            6..=8 | 12 => Season::Peak,
            3..=5 => Season::High,
            _ => Season::Low,
        }
    }

    /// Multiplier applied to the base price of a stay in this season.
    pub fn multiplier(self) -> Decimal {
        match self {
            Season::Peak => Decimal::new(130, 2),
            Season::High => Decimal::new(115, 2),
            Season::Low => Decimal::ONE,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Peak => f.write_str("peak"),
            Season::High => f.write_str("high"),
            Season::Low => f.write_str("low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn every_month_maps_to_its_tier() {
        let expected = [
            Season::Low,
            Season::Low,
            Season::High,
            Season::High,
            Season::High,
            Season::Peak,
            Season::Peak,
            Season::Peak,
            Season::Low,
            Season::Low,
            Season::Low,
            Season::Peak,
        ];

        for (month, season) in (1..=12).zip(expected) {
            assert_eq!(
                Season::for_check_in(date(2026, month, 1)),
                season,
                "month {month}"
            );
        }
    }

    #[test]
    fn multipliers_match_tiers() {
        assert_eq!(Season::Peak.multiplier(), Decimal::new(13, 1));
        assert_eq!(Season::High.multiplier(), Decimal::new(115, 2));
        assert_eq!(Season::Low.multiplier(), Decimal::ONE);
    }

    #[test]
    fn last_day_of_month_keeps_its_tier() {
        assert_eq!(Season::for_check_in(date(2026, 5, 31)), Season::High);
        assert_eq!(Season::for_check_in(date(2026, 8, 31)), Season::Peak);
        assert_eq!(Season::for_check_in(date(2026, 11, 30)), Season::Low);
    }
}
