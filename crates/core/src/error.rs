// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use front_desk_domain::DomainError;

/// Errors that can occur during booking flow transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The draft is missing required fields and cannot be submitted.
    IncompleteDraft {
        /// The names of the missing fields.
        missing: Vec<&'static str>,
    },
    /// The guest selection is frozen while editing an existing reservation.
    GuestLocked,
    /// The room selection is frozen while editing an existing reservation.
    RoomLocked,
    /// The room is not part of the current availability result.
    RoomNotAvailable {
        /// The identifier of the rejected room.
        room_id: i64,
    },
    /// The command is not valid in the current flow phase.
    InvalidTransition {
        /// The phase the flow was in.
        phase: &'static str,
        /// The name of the rejected command.
        command: &'static str,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::IncompleteDraft { missing } => {
                write!(f, "Draft is missing required fields: {}", missing.join(", "))
            }
            Self::GuestLocked => {
                write!(f, "The guest cannot be changed while editing a reservation")
            }
            Self::RoomLocked => {
                write!(f, "The room cannot be changed while editing a reservation")
            }
            Self::RoomNotAvailable { room_id } => {
                write!(f, "Room {room_id} is not available for the selected dates")
            }
            Self::InvalidTransition { phase, command } => {
                write!(f, "Command '{command}' is not valid in phase '{phase}'")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
