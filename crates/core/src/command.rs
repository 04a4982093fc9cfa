// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use front_desk_domain::{Guest, Reservation, ReservationStatus, Room};
use time::Date;

/// A command represents user or completion intent as data only.
///
/// Commands are the only way to advance a booking flow. User-driven
/// commands originate from form interaction; completion commands
/// (`AvailabilityLoaded`, `AvailabilityFailed`, `SubmitSucceeded`,
/// `SubmitFailed`) report the outcome of a directive that the caller
/// executed asynchronously.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Open the flow with an empty creation draft.
    StartCreate,
    /// Open the flow with a draft seeded from an existing reservation.
    StartEdit(Reservation),
    /// Update the draft's check-in and check-out dates.
    SetDates {
        /// The check-in date, if chosen.
        check_in: Option<Date>,
        /// The check-out date, if chosen.
        check_out: Option<Date>,
    },
    /// Update the draft's reservation status.
    SetStatus(ReservationStatus),
    /// Select the guest the reservation is for.
    SelectGuest(Guest),
    /// Select the room from the current availability result.
    SelectRoom(Room),
    /// An availability query completed successfully.
    AvailabilityLoaded {
        /// The request token the query was issued with.
        token: u64,
        /// The rooms available for the queried date range.
        rooms: Vec<Room>,
    },
    /// An availability query failed.
    AvailabilityFailed {
        /// The request token the query was issued with.
        token: u64,
        /// A human-readable failure description.
        message: String,
    },
    /// Validate the draft and request the create/update mutation.
    Submit,
    /// The submitted mutation completed successfully.
    SubmitSucceeded,
    /// The submitted mutation failed.
    SubmitFailed {
        /// A human-readable failure description.
        message: String,
    },
    /// Discard the draft without any network call.
    Cancel,
}

impl Command {
    /// Returns the command's name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::StartCreate => "StartCreate",
            Self::StartEdit(_) => "StartEdit",
            Self::SetDates { .. } => "SetDates",
            Self::SetStatus(_) => "SetStatus",
            Self::SelectGuest(_) => "SelectGuest",
            Self::SelectRoom(_) => "SelectRoom",
            Self::AvailabilityLoaded { .. } => "AvailabilityLoaded",
            Self::AvailabilityFailed { .. } => "AvailabilityFailed",
            Self::Submit => "Submit",
            Self::SubmitSucceeded => "SubmitSucceeded",
            Self::SubmitFailed { .. } => "SubmitFailed",
            Self::Cancel => "Cancel",
        }
    }
}
