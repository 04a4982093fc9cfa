// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! GraphQL documents for the three backing services.
//!
//! Field names are the services' camel-case wire names; dates travel as
//! ISO `YYYY-MM-DD` strings.

pub(crate) const GET_GUESTS: &str = "
query GetGuests {
  guests {
    id
    fullName
    email
    phone
    address
  }
}";

pub(crate) const CREATE_GUEST: &str = "
mutation CreateGuest($guestData: GuestInput!) {
  createGuest(guestData: $guestData) {
    id
    fullName
    email
    phone
    address
  }
}";

pub(crate) const UPDATE_GUEST: &str = "
mutation UpdateGuest($id: Int!, $guestData: GuestUpdateInput!) {
  updateGuest(id: $id, guestData: $guestData) {
    id
    fullName
    email
    phone
    address
  }
}";

pub(crate) const DELETE_GUEST: &str = "
mutation DeleteGuest($id: Int!) {
  deleteGuest(id: $id)
}";

pub(crate) const GET_ROOMS: &str = "
query GetRooms {
  rooms {
    id
    roomNumber
    roomType
    pricePerNight
    status
  }
}";

// The date arguments are declared optional: an inventory deployment that
// predates date-ranged availability ignores them and answers with its
// currently-unbooked rooms.
pub(crate) const GET_AVAILABLE_ROOMS: &str = "
query GetAvailableRooms($checkInDate: Date, $checkOutDate: Date) {
  availableRooms(checkInDate: $checkInDate, checkOutDate: $checkOutDate) {
    id
    roomNumber
    roomType
    pricePerNight
    status
  }
}";

pub(crate) const CREATE_ROOM: &str = "
mutation CreateRoom($roomData: RoomInput!) {
  createRoom(roomData: $roomData) {
    id
    roomNumber
    roomType
    pricePerNight
    status
  }
}";

pub(crate) const UPDATE_ROOM: &str = "
mutation UpdateRoom($id: Int!, $roomData: RoomUpdateInput!) {
  updateRoom(id: $id, roomData: $roomData) {
    id
    roomNumber
    roomType
    pricePerNight
    status
  }
}";

pub(crate) const DELETE_ROOM: &str = "
mutation DeleteRoom($id: Int!) {
  deleteRoom(id: $id)
}";

pub(crate) const GET_RESERVATIONS: &str = "
query GetReservations {
  reservations {
    id
    guestId
    roomId
    checkInDate
    checkOutDate
    status
    guest {
      id
      fullName
      email
    }
    room {
      id
      roomNumber
      roomType
      pricePerNight
      status
    }
  }
}";

pub(crate) const CREATE_RESERVATION: &str = "
mutation CreateReservation($reservationData: ReservationInput!) {
  createReservation(reservationData: $reservationData) {
    id
    guestId
    roomId
    checkInDate
    checkOutDate
    status
  }
}";

pub(crate) const UPDATE_RESERVATION: &str = "
mutation UpdateReservation($id: Int!, $reservationData: ReservationUpdateInput!) {
  updateReservation(id: $id, reservationData: $reservationData) {
    id
    guestId
    roomId
    checkInDate
    checkOutDate
    status
  }
}";

pub(crate) const DELETE_RESERVATION: &str = "
mutation DeleteReservation($id: Int!) {
  deleteReservation(id: $id)
}";
