// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display-oriented row types for the admin tables and the dashboard.
//!
//! These are distinct from the domain types: they are flattened for
//! rendering, carry wire-format dates, and include derived columns such
//! as the advisory total price.

use front_desk_domain::{DomainError, Guest, Reservation, Room, quote_total};
use serde::{Deserialize, Serialize};

/// One row of the guests table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRow {
    /// The guest's identifier.
    pub id: i64,
    /// The guest's full name.
    pub full_name: String,
    /// The guest's email address.
    pub email: String,
    /// The guest's phone number, if known.
    pub phone: Option<String>,
    /// The guest's postal address, if known.
    pub address: Option<String>,
}

impl GuestRow {
    /// Builds a row from a persisted guest.
    ///
    /// # Errors
    ///
    /// Returns an error if the guest has no persisted identifier.
    pub fn from_guest(guest: &Guest) -> Result<Self, DomainError> {
        Ok(Self {
            id: guest.require_id()?,
            full_name: guest.full_name.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            address: guest.address.clone(),
        })
    }
}

/// One row of the rooms table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRow {
    /// The room's identifier.
    pub id: i64,
    /// Human-facing room number.
    pub room_number: String,
    /// The room's category, as its wire string.
    pub room_type: String,
    /// Nightly rate.
    pub price_per_night: f64,
    /// Current occupancy state, as its wire string.
    pub status: String,
}

impl RoomRow {
    /// Builds a row from a persisted room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room has no persisted identifier.
    pub fn from_room(room: &Room) -> Result<Self, DomainError> {
        Ok(Self {
            id: room.require_id()?,
            room_number: room.room_number.clone(),
            room_type: room.room_type.to_string(),
            price_per_night: room.price_per_night,
            status: room.status.to_string(),
        })
    }
}

/// One row of the reservations table.
///
/// Guest name and room number come from the ledger's denormalized
/// snapshots and may be absent when the ledger did not include them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRow {
    /// The reservation's identifier.
    pub id: i64,
    /// The guest identifier.
    pub guest_id: i64,
    /// The room identifier.
    pub room_id: i64,
    /// The guest's name, when the ledger included a snapshot.
    pub guest_name: Option<String>,
    /// The room number, when the ledger included a snapshot.
    pub room_number: Option<String>,
    /// The check-in date, wire format.
    pub check_in: String,
    /// The check-out date, wire format.
    pub check_out: String,
    /// The reservation status, as its wire string.
    pub status: String,
    /// The advisory total price; zero when the nightly rate is unknown.
    pub total_price: f64,
}

impl ReservationRow {
    /// Builds a row from a persisted reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation has no persisted identifier.
    pub fn from_reservation(reservation: &Reservation) -> Result<Self, DomainError> {
        let total_price: f64 = reservation
            .room
            .as_ref()
            .map_or(0.0, |room| quote_total(room.price_per_night, &reservation.stay));
        Ok(Self {
            id: reservation.require_id()?,
            guest_id: reservation.guest_id,
            room_id: reservation.room_id,
            guest_name: reservation
                .guest
                .as_ref()
                .map(|guest| guest.full_name.clone()),
            room_number: reservation
                .room
                .as_ref()
                .map(|room| room.room_number.clone()),
            check_in: reservation.stay.check_in_wire(),
            check_out: reservation.stay.check_out_wire(),
            status: reservation.status.to_string(),
            total_price,
        })
    }
}

/// The headline numbers of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// All guests in the directory.
    pub total_guests: usize,
    /// Rooms currently marked available.
    pub available_rooms: usize,
    /// Reservations that still hold a room.
    pub active_reservations: usize,
    /// Reservations awaiting confirmation.
    pub pending_reservations: usize,
}

impl DashboardStats {
    /// Computes the stats from live service data.
    #[must_use]
    pub fn compute(guests: &[Guest], rooms: &[Room], reservations: &[Reservation]) -> Self {
        Self {
            total_guests: guests.len(),
            available_rooms: rooms
                .iter()
                .filter(|room| room.status == front_desk_domain::RoomStatus::Available)
                .count(),
            active_reservations: reservations
                .iter()
                .filter(|reservation| reservation.status.is_active())
                .count(),
            pending_reservations: reservations
                .iter()
                .filter(|reservation| {
                    reservation.status == front_desk_domain::ReservationStatus::Pending
                })
                .count(),
        }
    }
}
