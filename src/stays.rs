//! Stays

use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// A requested stay, as collected from the guest.
///
/// Either date may still be missing while the guest is filling in the booking
/// form; the pricing engine reports that as an error rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    check_in: Option<Date>,
    check_out: Option<Date>,
    guests: u32,
}

impl Stay {
    /// Creates a stay with both dates chosen.
    #[must_use]
    pub const fn new(check_in: Date, check_out: Date, guests: u32) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: Some(check_out),
            guests,
        }
    }

    /// Creates a stay for `guests` with no dates chosen yet.
    #[must_use]
    pub const fn undated(guests: u32) -> Self {
        Self {
            check_in: None,
            check_out: None,
            guests,
        }
    }

    /// Creates a stay from two instants, using the UTC calendar date of each.
    ///
    /// Time of day is discarded, so a late arrival or early departure never
    /// changes the number of nights.
    #[must_use]
    pub fn from_timestamps(check_in: Timestamp, check_out: Timestamp, guests: u32) -> Self {
        Self::new(utc_date(check_in), utc_date(check_out), guests)
    }

    /// Returns a copy with the check-in date set.
    #[must_use]
    pub fn with_check_in(mut self, check_in: Date) -> Self {
        self.check_in = Some(check_in);
        self
    }

    /// Returns a copy with the check-out date set.
    #[must_use]
    pub fn with_check_out(mut self, check_out: Date) -> Self {
        self.check_out = Some(check_out);
        self
    }

    /// Check-in date, if chosen.
    pub const fn check_in(&self) -> Option<Date> {
        self.check_in
    }

    /// Check-out date, if chosen.
    pub const fn check_out(&self) -> Option<Date> {
        self.check_out
    }

    /// Number of guests in the party.
    pub const fn guests(&self) -> u32 {
        self.guests
    }

    /// Both dates, when the stay is fully dated.
    pub fn dates(&self) -> Option<(Date, Date)> {
        self.check_in.zip(self.check_out)
    }
}

/// Counts the nights between two calendar dates.
///
/// Negative when `check_out` precedes `check_in`.
///
/// # Errors
///
/// Returns a [`jiff::Error`] if the span between the dates cannot be represented.
pub fn nights_between(check_in: Date, check_out: Date) -> Result<i32, jiff::Error> {
    Ok(check_in.until(check_out)?.get_days())
}

fn utc_date(instant: Timestamp) -> Date {
    instant.to_zoned(TimeZone::UTC).date()
}
