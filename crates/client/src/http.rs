// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! GraphQL-over-HTTP implementations of the service facades.

use crate::documents;
use crate::error::ClientError;
use crate::facade::{GuestDirectory, GuestInput, ReservationLedger, RoomInput, RoomInventory};
use crate::transport::GraphqlTransport;
use crate::wire::{
    AvailabilityVariables, AvailableRoomsData, CreateGuestData, CreateReservationData,
    CreateRoomData, DeleteGuestData, DeleteReservationData, DeleteRoomData, GuestUpdateVariables,
    GuestVariables, GuestsData, IdVariables, NoVariables, ReservationUpdateVariables,
    ReservationVariables, ReservationsData, RoomUpdateVariables, RoomVariables, RoomsData,
    UpdateGuestData, UpdateReservationData, UpdateRoomData, WireReservation, WireRoom,
};
use async_trait::async_trait;
use front_desk_domain::{
    Guest, Reservation, ReservationInput, ReservationPatch, Room, StayDates,
};

/// The Guest Directory over its GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct HttpGuestDirectory {
    transport: GraphqlTransport,
}

impl HttpGuestDirectory {
    /// Creates a client for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self {
            transport: GraphqlTransport::new(endpoint.to_string()),
        }
    }
}

#[async_trait]
impl GuestDirectory for HttpGuestDirectory {
    async fn list_guests(&self) -> Result<Vec<Guest>, ClientError> {
        let data: GuestsData = self
            .transport
            .execute(documents::GET_GUESTS, NoVariables {})
            .await?;
        Ok(data
            .guests
            .into_iter()
            .map(crate::wire::WireGuest::into_domain)
            .collect())
    }

    async fn create_guest(&self, input: GuestInput) -> Result<Guest, ClientError> {
        let data: CreateGuestData = self
            .transport
            .execute(
                documents::CREATE_GUEST,
                GuestVariables {
                    guest_data: input.into(),
                },
            )
            .await?;
        Ok(data.create_guest.into_domain())
    }

    async fn update_guest(&self, guest_id: i64, input: GuestInput) -> Result<Guest, ClientError> {
        let data: UpdateGuestData = self
            .transport
            .execute(
                documents::UPDATE_GUEST,
                GuestUpdateVariables {
                    id: guest_id,
                    guest_data: input.into(),
                },
            )
            .await?;
        Ok(data.update_guest.into_domain())
    }

    async fn delete_guest(&self, guest_id: i64) -> Result<bool, ClientError> {
        let data: DeleteGuestData = self
            .transport
            .execute(documents::DELETE_GUEST, IdVariables { id: guest_id })
            .await?;
        Ok(data.delete_guest)
    }
}

/// The Room Inventory over its GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct HttpRoomInventory {
    transport: GraphqlTransport,
}

impl HttpRoomInventory {
    /// Creates a client for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self {
            transport: GraphqlTransport::new(endpoint.to_string()),
        }
    }
}

fn rooms_into_domain(rooms: Vec<WireRoom>) -> Result<Vec<Room>, ClientError> {
    rooms
        .into_iter()
        .map(|room| room.into_domain().map_err(ClientError::from))
        .collect()
}

#[async_trait]
impl RoomInventory for HttpRoomInventory {
    async fn list_rooms(&self) -> Result<Vec<Room>, ClientError> {
        let data: RoomsData = self
            .transport
            .execute(documents::GET_ROOMS, NoVariables {})
            .await?;
        rooms_into_domain(data.rooms)
    }

    async fn list_available_rooms(&self, stay: StayDates) -> Result<Vec<Room>, ClientError> {
        let data: AvailableRoomsData = self
            .transport
            .execute(
                documents::GET_AVAILABLE_ROOMS,
                AvailabilityVariables {
                    check_in_date: stay.check_in_wire(),
                    check_out_date: stay.check_out_wire(),
                },
            )
            .await?;
        rooms_into_domain(data.available_rooms)
    }

    async fn create_room(&self, input: RoomInput) -> Result<Room, ClientError> {
        let data: CreateRoomData = self
            .transport
            .execute(
                documents::CREATE_ROOM,
                RoomVariables {
                    room_data: input.into(),
                },
            )
            .await?;
        Ok(data.create_room.into_domain()?)
    }

    async fn update_room(&self, room_id: i64, input: RoomInput) -> Result<Room, ClientError> {
        let data: UpdateRoomData = self
            .transport
            .execute(
                documents::UPDATE_ROOM,
                RoomUpdateVariables {
                    id: room_id,
                    room_data: input.into(),
                },
            )
            .await?;
        Ok(data.update_room.into_domain()?)
    }

    async fn delete_room(&self, room_id: i64) -> Result<bool, ClientError> {
        let data: DeleteRoomData = self
            .transport
            .execute(documents::DELETE_ROOM, IdVariables { id: room_id })
            .await?;
        Ok(data.delete_room)
    }
}

/// The Reservation Ledger over its GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct HttpReservationLedger {
    transport: GraphqlTransport,
}

impl HttpReservationLedger {
    /// Creates a client for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self {
            transport: GraphqlTransport::new(endpoint.to_string()),
        }
    }
}

fn reservations_into_domain(
    reservations: Vec<WireReservation>,
) -> Result<Vec<Reservation>, ClientError> {
    reservations
        .into_iter()
        .map(|reservation| reservation.into_domain().map_err(ClientError::from))
        .collect()
}

#[async_trait]
impl ReservationLedger for HttpReservationLedger {
    async fn list_reservations(&self) -> Result<Vec<Reservation>, ClientError> {
        let data: ReservationsData = self
            .transport
            .execute(documents::GET_RESERVATIONS, NoVariables {})
            .await?;
        reservations_into_domain(data.reservations)
    }

    async fn create_reservation(
        &self,
        input: ReservationInput,
    ) -> Result<Reservation, ClientError> {
        let data: CreateReservationData = self
            .transport
            .execute(
                documents::CREATE_RESERVATION,
                ReservationVariables {
                    reservation_data: input.into(),
                },
            )
            .await?;
        Ok(data.create_reservation.into_domain()?)
    }

    async fn update_reservation(
        &self,
        reservation_id: i64,
        patch: ReservationPatch,
    ) -> Result<Reservation, ClientError> {
        let data: UpdateReservationData = self
            .transport
            .execute(
                documents::UPDATE_RESERVATION,
                ReservationUpdateVariables {
                    id: reservation_id,
                    reservation_data: patch.into(),
                },
            )
            .await?;
        Ok(data.update_reservation.into_domain()?)
    }

    async fn delete_reservation(&self, reservation_id: i64) -> Result<bool, ClientError> {
        let data: DeleteReservationData = self
            .transport
            .execute(
                documents::DELETE_RESERVATION,
                IdVariables { id: reservation_id },
            )
            .await?;
        Ok(data.delete_reservation)
    }
}
