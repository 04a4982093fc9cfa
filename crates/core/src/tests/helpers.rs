// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingFlow, Command, Directive, Transition, apply};
use front_desk_domain::{
    Guest, Reservation, ReservationStatus, Room, RoomStatus, RoomType, StayDates,
};
use time::macros::date;

pub fn test_guest(guest_id: i64) -> Guest {
    Guest::with_id(
        guest_id,
        String::from("Ada Lovelace"),
        String::from("ada@example.com"),
        None,
        None,
    )
}

pub fn test_room(room_id: i64, room_number: &str, price_per_night: f64) -> Room {
    Room::with_id(
        room_id,
        room_number.to_string(),
        RoomType::Standard,
        price_per_night,
        RoomStatus::Available,
    )
}

pub fn test_reservation(reservation_id: i64, guest_id: i64, room_id: i64) -> Reservation {
    let stay: StayDates = StayDates::new(date!(2024 - 05 - 01), date!(2024 - 05 - 04)).unwrap();
    Reservation {
        reservation_id: Some(reservation_id),
        guest_id,
        room_id,
        stay,
        status: ReservationStatus::Confirmed,
        guest: Some(test_guest(guest_id)),
        room: Some(test_room(room_id, "204", 150.0)),
    }
}

/// Opens a fresh creation draft.
pub fn open_create() -> BookingFlow {
    apply(&BookingFlow::Closed, Command::StartCreate)
        .unwrap()
        .flow
}

/// Extracts the token from a `FetchAvailability` directive.
pub fn fetch_token(transition: &Transition) -> u64 {
    match &transition.directive {
        Some(Directive::FetchAvailability { token, .. }) => *token,
        other => panic!("expected FetchAvailability directive, got {other:?}"),
    }
}

/// Opens a creation draft, picks a default date range, and loads the
/// given rooms as the availability result.
pub fn open_create_with_rooms(rooms: Vec<Room>) -> BookingFlow {
    let flow: BookingFlow = open_create();
    let transition: Transition = apply(
        &flow,
        Command::SetDates {
            check_in: Some(date!(2024 - 05 - 01)),
            check_out: Some(date!(2024 - 05 - 04)),
        },
    )
    .unwrap();
    let token: u64 = fetch_token(&transition);
    apply(&transition.flow, Command::AvailabilityLoaded { token, rooms })
        .unwrap()
        .flow
}

/// Builds a creation draft that is complete and ready to submit.
pub fn ready_create_flow(guest: Guest, room: Room) -> BookingFlow {
    let flow: BookingFlow = open_create_with_rooms(vec![room.clone()]);
    let flow: BookingFlow = apply(&flow, Command::SelectGuest(guest)).unwrap().flow;
    apply(&flow, Command::SelectRoom(room)).unwrap().flow
}
