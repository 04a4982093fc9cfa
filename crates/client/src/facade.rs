// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The collaborator contracts the booking workflow consumes.
//!
//! Each backing service is its own source of truth with its own
//! consistency boundary; there is no cross-service transaction. The
//! traits exist so callers receive their collaborators by explicit
//! injection and tests can substitute in-memory fakes.

use crate::error::ClientError;
use async_trait::async_trait;
use front_desk_domain::{
    Guest, Reservation, ReservationInput, ReservationPatch, Room, RoomStatus, RoomType, StayDates,
};

/// The fields required to create or replace a guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestInput {
    /// The guest's full name.
    pub full_name: String,
    /// The guest's email address.
    pub email: String,
    /// The guest's phone number, if known.
    pub phone: Option<String>,
    /// The guest's postal address, if known.
    pub address: Option<String>,
}

/// The fields required to create or replace a room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomInput {
    /// Human-facing room number.
    pub room_number: String,
    /// The room's category.
    pub room_type: RoomType,
    /// Nightly rate.
    pub price_per_night: f64,
    /// Current occupancy state.
    pub status: RoomStatus,
}

/// The Guest Directory service.
#[async_trait]
pub trait GuestDirectory {
    /// Lists all guests.
    async fn list_guests(&self) -> Result<Vec<Guest>, ClientError>;

    /// Creates a new guest and returns it with its assigned identifier.
    async fn create_guest(&self, input: GuestInput) -> Result<Guest, ClientError>;

    /// Replaces a guest's fields and returns the updated guest.
    async fn update_guest(&self, guest_id: i64, input: GuestInput) -> Result<Guest, ClientError>;

    /// Deletes a guest; returns whether the guest existed.
    async fn delete_guest(&self, guest_id: i64) -> Result<bool, ClientError>;
}

/// The Room Inventory service.
#[async_trait]
pub trait RoomInventory {
    /// Lists all rooms.
    async fn list_rooms(&self) -> Result<Vec<Room>, ClientError>;

    /// Lists the rooms available to book over the given stay.
    ///
    /// The result replaces any previously fetched list in full; callers
    /// must not merge it incrementally.
    async fn list_available_rooms(&self, stay: StayDates) -> Result<Vec<Room>, ClientError>;

    /// Creates a new room and returns it with its assigned identifier.
    async fn create_room(&self, input: RoomInput) -> Result<Room, ClientError>;

    /// Replaces a room's fields and returns the updated room.
    async fn update_room(&self, room_id: i64, input: RoomInput) -> Result<Room, ClientError>;

    /// Deletes a room; returns whether the room existed.
    async fn delete_room(&self, room_id: i64) -> Result<bool, ClientError>;
}

/// The Reservation Ledger service, the system of record for persisted
/// reservations and the authority on final prices.
#[async_trait]
pub trait ReservationLedger {
    /// Lists all reservations with their denormalized guest/room snapshots.
    async fn list_reservations(&self) -> Result<Vec<Reservation>, ClientError>;

    /// Creates a new reservation and returns it with its assigned
    /// identifier.
    async fn create_reservation(
        &self,
        input: ReservationInput,
    ) -> Result<Reservation, ClientError>;

    /// Applies a partial update and returns the updated reservation.
    async fn update_reservation(
        &self,
        reservation_id: i64,
        patch: ReservationPatch,
    ) -> Result<Reservation, ClientError>;

    /// Deletes a reservation; returns whether the reservation existed.
    async fn delete_reservation(&self, reservation_id: i64) -> Result<bool, ClientError>;
}
