//! Clock
//!
//! Supplies "today" to the pricing engine so eligibility rules that depend on
//! the current date can be driven deterministically.

use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// Source of the current calendar date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> Date;
}

/// Reads the system clock and reports the current UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Timestamp::now().to_zoned(TimeZone::UTC).date()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: Date,
}

impl FixedClock {
    /// Create a clock pinned to `today`.
    #[must_use]
    pub const fn new(today: Date) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.today
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}
