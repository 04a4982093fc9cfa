// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire representations of the service entities.
//!
//! These types mirror the services' GraphQL schemas exactly (camel-case
//! fields, string dates) and are converted to and from the domain types
//! at the facade boundary.

use crate::facade::{GuestInput, RoomInput};
use front_desk_domain::{
    DomainError, Guest, Reservation, ReservationInput, ReservationPatch, ReservationStatus, Room,
    RoomStatus, RoomType, StayDates, format_wire_date,
};
use serde::{Deserialize, Serialize};

/// A guest as returned by the Guest Directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireGuest {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl WireGuest {
    pub(crate) fn into_domain(self) -> Guest {
        Guest::with_id(
            self.id,
            self.full_name,
            self.email.unwrap_or_default(),
            self.phone,
            self.address,
        )
    }
}

/// A room as returned by the Room Inventory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRoom {
    pub id: i64,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    #[serde(default)]
    pub status: Option<String>,
}

impl WireRoom {
    pub(crate) fn into_domain(self) -> Result<Room, DomainError> {
        let room_type: RoomType = self.room_type.parse()?;
        let status: RoomStatus = match self.status {
            Some(status) => status.parse()?,
            None => RoomStatus::Available,
        };
        Ok(Room::with_id(
            self.id,
            self.room_number,
            room_type,
            self.price_per_night,
            status,
        ))
    }
}

/// A reservation as returned by the Reservation Ledger, including the
/// denormalized guest and room snapshots when the ledger provides them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireReservation {
    pub id: i64,
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: String,
    #[serde(default)]
    pub guest: Option<WireGuest>,
    #[serde(default)]
    pub room: Option<WireRoom>,
}

impl WireReservation {
    pub(crate) fn into_domain(self) -> Result<Reservation, DomainError> {
        let stay: StayDates = StayDates::parse(&self.check_in_date, &self.check_out_date)?;
        let status: ReservationStatus = self.status.parse()?;
        Ok(Reservation {
            reservation_id: Some(self.id),
            guest_id: self.guest_id,
            room_id: self.room_id,
            stay,
            status,
            guest: self.guest.map(WireGuest::into_domain),
            room: self.room.map(WireRoom::into_domain).transpose()?,
        })
    }
}

/// The `guestData` payload of the guest mutations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GuestData {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl From<GuestInput> for GuestData {
    fn from(input: GuestInput) -> Self {
        Self {
            full_name: input.full_name,
            email: input.email,
            phone: input.phone,
            address: input.address,
        }
    }
}

/// The `roomData` payload of the room mutations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoomData {
    pub room_number: String,
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub status: RoomStatus,
}

impl From<RoomInput> for RoomData {
    fn from(input: RoomInput) -> Self {
        Self {
            room_number: input.room_number,
            room_type: input.room_type,
            price_per_night: input.price_per_night,
            status: input.status,
        }
    }
}

/// The `reservationData` payload of the create mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReservationData {
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: ReservationStatus,
}

impl From<ReservationInput> for ReservationData {
    fn from(input: ReservationInput) -> Self {
        Self {
            guest_id: input.guest_id,
            room_id: input.room_id,
            check_in_date: input.stay.check_in_wire(),
            check_out_date: input.stay.check_out_wire(),
            status: input.status,
        }
    }
}

/// The `reservationData` payload of the update mutation; absent fields
/// are left untouched by the ledger.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReservationUpdateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
}

impl From<ReservationPatch> for ReservationUpdateData {
    fn from(patch: ReservationPatch) -> Self {
        Self {
            guest_id: patch.guest_id,
            room_id: patch.room_id,
            check_in_date: patch.check_in.map(format_wire_date),
            check_out_date: patch.check_out.map(format_wire_date),
            status: patch.status,
        }
    }
}

// Variable envelopes, one per operation shape.

#[derive(Debug, Serialize)]
pub(crate) struct NoVariables {}

#[derive(Debug, Serialize)]
pub(crate) struct IdVariables {
    pub id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AvailabilityVariables {
    pub check_in_date: String,
    pub check_out_date: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GuestVariables {
    pub guest_data: GuestData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GuestUpdateVariables {
    pub id: i64,
    pub guest_data: GuestData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoomVariables {
    pub room_data: RoomData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoomUpdateVariables {
    pub id: i64,
    pub room_data: RoomData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReservationVariables {
    pub reservation_data: ReservationData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReservationUpdateVariables {
    pub id: i64,
    pub reservation_data: ReservationUpdateData,
}

// Response data members, one per operation.

#[derive(Debug, Deserialize)]
pub(crate) struct GuestsData {
    pub guests: Vec<WireGuest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateGuestData {
    pub create_guest: WireGuest,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateGuestData {
    pub update_guest: WireGuest,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteGuestData {
    pub delete_guest: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoomsData {
    pub rooms: Vec<WireRoom>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AvailableRoomsData {
    pub available_rooms: Vec<WireRoom>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateRoomData {
    pub create_room: WireRoom,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateRoomData {
    pub update_room: WireRoom,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteRoomData {
    pub delete_room: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReservationsData {
    pub reservations: Vec<WireReservation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateReservationData {
    pub create_reservation: WireReservation,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateReservationData {
    pub update_reservation: WireReservation,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteReservationData {
    pub delete_reservation: bool,
}
