// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! The taxonomy follows where a failure happened rather than what went
//! wrong inside: validation errors never reach the network, fetch errors
//! come from the read path, and mutation errors from the write path.
//! Nothing here is fatal; every failure is recoverable by user retry or
//! cancellation.

use front_desk::CoreError;
use front_desk_client::ClientError;
use front_desk_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core/client errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A local validation failure; no network call was made.
    Validation {
        /// The field (or comma-separated fields) that failed validation.
        field: String,
        /// A human-readable description of the failure.
        message: String,
    },
    /// A read against a remote service failed.
    Fetch {
        /// The resource that could not be read (e.g., "guests").
        resource: String,
        /// A human-readable description of the failure.
        message: String,
    },
    /// A write against a remote service failed.
    Mutation {
        /// The operation that failed (e.g., "create_reservation").
        operation: String,
        /// A human-readable description of the failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Fetch { resource, message } => {
                write!(f, "Failed to load {resource}: {message}")
            }
            Self::Mutation { operation, message } => {
                write!(f, "Failed to {operation}: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into the field-level validation error shown
/// next to the offending input.
fn translate_domain_error(err: &DomainError) -> ApiError {
    let field: &str = match err {
        DomainError::InvalidStayDates { .. } | DomainError::DateParseError { .. } => "dates",
        DomainError::InvalidRoomType(_) => "room_type",
        DomainError::InvalidRoomStatus(_)
        | DomainError::InvalidReservationStatus(_) => "status",
        DomainError::InvalidFullName(_) => "full_name",
        DomainError::InvalidEmail(_) => "email",
        DomainError::InvalidRoomNumber(_) => "room_number",
        DomainError::InvalidNightlyRate { .. } => "price_per_night",
        DomainError::MissingIdentifier { entity } => entity,
    };
    ApiError::Validation {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly. Everything the coordinator rejects is a local validation
/// failure; it never issued a network call.
#[must_use]
pub fn translate_core_error(err: &CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::IncompleteDraft { missing } => ApiError::Validation {
            field: missing.join(", "),
            message: String::from("all required fields must be set before submitting"),
        },
        CoreError::GuestLocked => ApiError::Validation {
            field: String::from("guest"),
            message: err.to_string(),
        },
        CoreError::RoomLocked | CoreError::RoomNotAvailable { .. } => ApiError::Validation {
            field: String::from("room"),
            message: err.to_string(),
        },
        CoreError::InvalidTransition { .. } => ApiError::Validation {
            field: String::from("flow"),
            message: err.to_string(),
        },
    }
}

/// Translates a read-path client error into an API error.
#[must_use]
pub fn translate_fetch_error(resource: &str, err: &ClientError) -> ApiError {
    ApiError::Fetch {
        resource: resource.to_string(),
        message: err.to_string(),
    }
}

/// Translates a write-path client error into an API error.
#[must_use]
pub fn translate_mutation_error(operation: &str, err: &ClientError) -> ApiError {
    ApiError::Mutation {
        operation: operation.to_string(),
        message: err.to_string(),
    }
}
