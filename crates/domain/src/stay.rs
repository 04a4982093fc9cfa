// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validated stay date ranges.
//!
//! All dates in this system are calendar dates with no time component; the
//! wire format everywhere is ISO `YYYY-MM-DD`.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

const WIRE_DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parses an ISO `YYYY-MM-DD` wire string into a `Date`.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date in wire format.
pub fn parse_wire_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, WIRE_DATE_FORMAT).map_err(|err| DomainError::DateParseError {
        date_string: value.to_string(),
        error: err.to_string(),
    })
}

/// Formats a `Date` as an ISO `YYYY-MM-DD` wire string.
#[must_use]
pub fn format_wire_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// A validated check-in/check-out date range.
///
/// Construction enforces the booking invariant: check-out must be strictly
/// later than check-in (same-day stays are not bookable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayDates {
    /// The check-in date (inclusive).
    check_in: Date,
    /// The check-out date (exclusive).
    check_out: Date,
}

impl StayDates {
    /// Creates a new `StayDates`.
    ///
    /// # Arguments
    ///
    /// * `check_in` - The check-in date
    /// * `check_out` - The check-out date
    ///
    /// # Returns
    ///
    /// * `Ok(StayDates)` if `check_out` is strictly later than `check_in`
    /// * `Err(DomainError::InvalidStayDates)` otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the check-out date is not strictly later than the
    /// check-in date.
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidStayDates {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Parses a stay range from two wire strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either string is not a valid wire date or the
    /// range violates the check-out-after-check-in invariant.
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, DomainError> {
        let check_in: Date = parse_wire_date(check_in)?;
        let check_out: Date = parse_wire_date(check_out)?;
        Self::new(check_in, check_out)
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Returns the number of nights in this stay.
    ///
    /// Dates are whole calendar days, so this is the day difference; it is
    /// always at least 1 by construction.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).whole_days()
    }

    /// Returns the check-in date as a wire string.
    #[must_use]
    pub fn check_in_wire(&self) -> String {
        format_wire_date(self.check_in)
    }

    /// Returns the check-out date as a wire string.
    #[must_use]
    pub fn check_out_wire(&self) -> String {
        format_wire_date(self.check_out)
    }

    /// Returns whether this stay overlaps another.
    ///
    /// Two stays overlap when each begins before the other ends; a stay
    /// ending on the day another begins does not overlap (check-out day is
    /// not occupied overnight).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

impl std::fmt::Display for StayDates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.check_in_wire(), self.check_out_wire())
    }
}
