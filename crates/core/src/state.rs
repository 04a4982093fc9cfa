// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use front_desk_domain::{
    DomainError, Guest, Reservation, ReservationInput, ReservationPatch, ReservationStatus, Room,
    StayDates, draft_quote,
};
use time::Date;

/// The mode a draft was opened in.
///
/// The two modes carry only the fields that are mutable in that mode:
/// a creation draft holds the guest and room selections, while an edit
/// draft pins the original reservation's identifiers so the guest and
/// room can never drift from the persisted reservation.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftMode {
    /// A new reservation is being drafted.
    Create {
        /// The selected guest, once chosen.
        guest: Option<Guest>,
        /// The selected room, once chosen from the availability result.
        room: Option<Room>,
    },
    /// An existing reservation is being edited.
    Edit {
        /// The identifier of the reservation being edited.
        reservation_id: i64,
        /// The original guest identifier; resubmitted unchanged.
        guest_id: i64,
        /// The original room identifier; resubmitted unchanged.
        room_id: i64,
        /// The original room's nightly rate, when the ledger included a
        /// room snapshot; used for the advisory quote only.
        price_per_night: Option<f64>,
    },
}

/// The state of the room-availability lookup for the draft's date range.
///
/// The `token` is a monotonically increasing request identifier scoped to
/// one draft; a completion carrying any token other than the one issued
/// with the in-flight query is stale and must be discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum Availability {
    /// No query has been issued; dates are not yet chosen.
    NotQueried,
    /// A query is in flight.
    Loading {
        /// The token the in-flight query was issued with.
        token: u64,
    },
    /// The most recent query succeeded.
    Loaded {
        /// The token the query was issued with.
        token: u64,
        /// The full replacement room list for the queried range.
        rooms: Vec<Room>,
    },
    /// The most recent query failed.
    Failed {
        /// The token the query was issued with.
        token: u64,
        /// A human-readable failure description.
        message: String,
    },
}

impl Availability {
    /// Returns whether a query is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Returns the loaded room list, if the last query succeeded.
    #[must_use]
    pub fn rooms(&self) -> Option<&[Room]> {
        match self {
            Self::Loaded { rooms, .. } => Some(rooms),
            _ => None,
        }
    }
}

/// The working, unsaved state of a reservation being created or edited.
///
/// A draft exists only while the flow is open; it is discarded on cancel
/// and after a successful mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    /// Whether this draft creates a new reservation or edits an existing one.
    pub mode: DraftMode,
    /// The chosen check-in date, if any.
    pub check_in: Option<Date>,
    /// The chosen check-out date, if any.
    pub check_out: Option<Date>,
    /// The reservation status to submit.
    pub status: ReservationStatus,
    /// The state of the availability lookup for the current date range.
    pub availability: Availability,
    /// The failure message of the last rejected submission, if any.
    pub submit_error: Option<String>,
    /// The highest availability request token issued for this draft.
    pub(crate) last_token: u64,
}

impl Draft {
    /// Creates an empty creation draft.
    #[must_use]
    pub const fn for_create() -> Self {
        Self {
            mode: DraftMode::Create {
                guest: None,
                room: None,
            },
            check_in: None,
            check_out: None,
            status: ReservationStatus::Confirmed,
            availability: Availability::NotQueried,
            submit_error: None,
            last_token: 0,
        }
    }

    /// Creates an edit draft seeded from a persisted reservation.
    ///
    /// The guest and room are pinned to the reservation's original
    /// identifiers; only the dates and status remain mutable.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingIdentifier` if the reservation has no
    /// persisted identifier.
    pub fn for_edit(reservation: &Reservation) -> Result<Self, DomainError> {
        let reservation_id: i64 = reservation.require_id()?;
        Ok(Self {
            mode: DraftMode::Edit {
                reservation_id,
                guest_id: reservation.guest_id,
                room_id: reservation.room_id,
                price_per_night: reservation.room.as_ref().map(|room| room.price_per_night),
            },
            check_in: Some(reservation.stay.check_in()),
            check_out: Some(reservation.stay.check_out()),
            status: reservation.status,
            availability: Availability::NotQueried,
            submit_error: None,
            last_token: 0,
        })
    }

    /// Returns whether this draft creates a new reservation.
    #[must_use]
    pub const fn is_create(&self) -> bool {
        matches!(self.mode, DraftMode::Create { .. })
    }

    /// Returns the selected guest, if this is a creation draft with one chosen.
    #[must_use]
    pub const fn selected_guest(&self) -> Option<&Guest> {
        match &self.mode {
            DraftMode::Create { guest, .. } => guest.as_ref(),
            DraftMode::Edit { .. } => None,
        }
    }

    /// Returns the selected room, if this is a creation draft with one chosen.
    #[must_use]
    pub const fn selected_room(&self) -> Option<&Room> {
        match &self.mode {
            DraftMode::Create { room, .. } => room.as_ref(),
            DraftMode::Edit { .. } => None,
        }
    }

    /// Returns the nightly rate the advisory quote is based on.
    #[must_use]
    pub fn nightly_rate(&self) -> Option<f64> {
        match &self.mode {
            DraftMode::Create { room, .. } => room.as_ref().map(|room| room.price_per_night),
            DraftMode::Edit {
                price_per_night, ..
            } => *price_per_night,
        }
    }

    /// Returns the advisory total price for the draft.
    ///
    /// Zero means "not yet computable": a rate or date is still missing.
    /// The Reservation Ledger is the authority on the final price.
    #[must_use]
    pub fn advisory_quote(&self) -> f64 {
        self.nightly_rate()
            .map_or(0.0, |rate| draft_quote(rate, self.check_in, self.check_out))
    }
}

/// The booking flow's lifecycle phase.
///
/// One flow covers one create/edit interaction: it opens with a draft,
/// optionally passes through a submission, and closes. Nothing persists
/// across reopenings.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BookingFlow {
    /// No interaction is active.
    #[default]
    Closed,
    /// A draft is being edited by the user.
    Open(Draft),
    /// The draft's mutation has been issued and has not completed yet.
    Submitting(Draft),
}

impl BookingFlow {
    /// Returns the phase's name for diagnostics.
    #[must_use]
    pub const fn phase_name(&self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::Open(_) => "Open",
            Self::Submitting(_) => "Submitting",
        }
    }

    /// Returns the active draft, if the flow is open or submitting.
    #[must_use]
    pub const fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Closed => None,
            Self::Open(draft) | Self::Submitting(draft) => Some(draft),
        }
    }

    /// Returns whether a mutation is currently in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }
}

/// A side effect the caller must execute after a transition.
///
/// The state machine never performs I/O; it describes the work as data
/// and the caller reports the outcome back as a completion command.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Query the Room Inventory for rooms available over `stay`.
    FetchAvailability {
        /// The token the completion must carry.
        token: u64,
        /// The date range to query.
        stay: StayDates,
    },
    /// Create a new reservation in the Reservation Ledger.
    CreateReservation(ReservationInput),
    /// Update an existing reservation in the Reservation Ledger.
    UpdateReservation {
        /// The reservation to update.
        reservation_id: i64,
        /// The fields to change; always carries the original guest and room.
        patch: ReservationPatch,
    },
    /// Re-fetch the reservation list; the ledger has changed.
    RefreshReservations,
}

/// The result of a successful flow transition.
///
/// Transitions are atomic: they either succeed completely or fail
/// without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The new flow state after the transition.
    pub flow: BookingFlow,
    /// The side effect the caller must execute, if any.
    pub directive: Option<Directive>,
}

impl Transition {
    /// A transition that keeps the flow unchanged and runs no side effect.
    ///
    /// Used to discard stale or post-dismissal completion commands.
    #[must_use]
    pub const fn unchanged(flow: BookingFlow) -> Self {
        Self {
            flow,
            directive: None,
        }
    }
}
