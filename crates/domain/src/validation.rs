// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Guest, Room};

/// Validates that a guest's basic field constraints are met.
///
/// This function checks local field shape only. It does NOT check that the
/// guest exists in the directory (that requires the remote service).
///
/// # Arguments
///
/// * `guest` - The guest to validate
///
/// # Returns
///
/// * `Ok(())` if the guest's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The full name is empty
/// - The email is empty or has no `@`
pub fn validate_guest_fields(guest: &Guest) -> Result<(), DomainError> {
    // Rule: full name must not be empty
    if guest.full_name.trim().is_empty() {
        return Err(DomainError::InvalidFullName(String::from(
            "Full name cannot be empty",
        )));
    }

    // Rule: email must look like an address
    if guest.email.trim().is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email cannot be empty",
        )));
    }
    if !guest.email.contains('@') {
        return Err(DomainError::InvalidEmail(format!(
            "'{}' is not a valid email address",
            guest.email
        )));
    }

    Ok(())
}

/// Validates that a room's basic field constraints are met.
///
/// # Arguments
///
/// * `room` - The room to validate
///
/// # Returns
///
/// * `Ok(())` if the room's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The room number is empty
/// - The nightly rate is negative or not finite
pub fn validate_room_fields(room: &Room) -> Result<(), DomainError> {
    // Rule: room number must not be empty
    if room.room_number.trim().is_empty() {
        return Err(DomainError::InvalidRoomNumber(String::from(
            "Room number cannot be empty",
        )));
    }

    // Rule: nightly rate must be a non-negative finite number
    if !room.price_per_night.is_finite() || room.price_per_night < 0.0 {
        return Err(DomainError::InvalidNightlyRate {
            rate: room.price_per_night,
        });
    }

    Ok(())
}
