// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Check-out is not strictly later than check-in.
    InvalidStayDates {
        /// The check-in date.
        check_in: Date,
        /// The check-out date.
        check_out: Date,
    },
    /// Failed to parse a date from a wire string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Room type string is not recognized.
    InvalidRoomType(String),
    /// Room status string is not recognized.
    InvalidRoomStatus(String),
    /// Reservation status string is not recognized.
    InvalidReservationStatus(String),
    /// Guest full name is empty or invalid.
    InvalidFullName(String),
    /// Guest email is empty or malformed.
    InvalidEmail(String),
    /// Room number is empty or invalid.
    InvalidRoomNumber(String),
    /// Nightly rate is negative or not a finite number.
    InvalidNightlyRate {
        /// The invalid rate value.
        rate: f64,
    },
    /// An entity that must already be persisted has no identifier.
    MissingIdentifier {
        /// The entity kind (e.g., "guest", "room").
        entity: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStayDates {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out date {check_out} must be strictly later than check-in date {check_in}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidRoomType(value) => write!(f, "Invalid room type: {value}"),
            Self::InvalidRoomStatus(value) => write!(f, "Invalid room status: {value}"),
            Self::InvalidReservationStatus(value) => {
                write!(f, "Invalid reservation status: {value}")
            }
            Self::InvalidFullName(msg) => write!(f, "Invalid full name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidRoomNumber(msg) => write!(f, "Invalid room number: {msg}"),
            Self::InvalidNightlyRate { rate } => {
                write!(f, "Invalid nightly rate: {rate}. Must be a non-negative number")
            }
            Self::MissingIdentifier { entity } => {
                write!(f, "The {entity} has not been assigned an identifier yet")
            }
        }
    }
}

impl std::error::Error for DomainError {}
