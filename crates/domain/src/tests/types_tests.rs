// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, Guest, Reservation, ReservationStatus, Room, RoomStatus, RoomType, StayDates,
};
use std::str::FromStr;

#[test]
fn test_room_type_wire_strings() {
    assert_eq!(RoomType::Standard.as_str(), "standard");
    assert_eq!(RoomType::Deluxe.as_str(), "deluxe");
    assert_eq!(RoomType::Suite.as_str(), "suite");
    assert_eq!(RoomType::Executive.as_str(), "executive");
    assert_eq!(RoomType::Presidential.as_str(), "presidential");
}

#[test]
fn test_room_type_parse_is_case_insensitive() {
    assert_eq!(RoomType::from_str("Deluxe").unwrap(), RoomType::Deluxe);
    assert_eq!(RoomType::from_str("SUITE").unwrap(), RoomType::Suite);
}

#[test]
fn test_room_type_parse_rejects_unknown() {
    let result: Result<RoomType, DomainError> = RoomType::from_str("penthouse");

    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidRoomType(_)
    ));
}

#[test]
fn test_room_status_round_trip() {
    for status in [
        RoomStatus::Available,
        RoomStatus::Reserved,
        RoomStatus::Occupied,
        RoomStatus::Maintenance,
    ] {
        assert_eq!(RoomStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_reservation_status_wire_strings() {
    assert_eq!(ReservationStatus::Pending.as_str(), "PENDING");
    assert_eq!(ReservationStatus::Confirmed.as_str(), "CONFIRMED");
    assert_eq!(ReservationStatus::CheckedIn.as_str(), "CHECKED_IN");
    assert_eq!(ReservationStatus::CheckedOut.as_str(), "CHECKED_OUT");
    assert_eq!(ReservationStatus::Cancelled.as_str(), "CANCELLED");
}

#[test]
fn test_reservation_status_parse_accepts_lower_case() {
    assert_eq!(
        ReservationStatus::from_str("confirmed").unwrap(),
        ReservationStatus::Confirmed
    );
    assert_eq!(
        ReservationStatus::from_str("checked_in").unwrap(),
        ReservationStatus::CheckedIn
    );
}

#[test]
fn test_reservation_status_parse_rejects_unknown() {
    let result: Result<ReservationStatus, DomainError> = ReservationStatus::from_str("ON_HOLD");

    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidReservationStatus(_)
    ));
}

#[test]
fn test_active_statuses_hold_the_room() {
    assert!(ReservationStatus::Pending.is_active());
    assert!(ReservationStatus::Confirmed.is_active());
    assert!(ReservationStatus::CheckedIn.is_active());
    assert!(!ReservationStatus::CheckedOut.is_active());
    assert!(!ReservationStatus::Cancelled.is_active());
}

#[test]
fn test_guest_without_id_fails_require_id() {
    let guest: Guest = Guest::new(
        String::from("Ada Lovelace"),
        String::from("ada@example.com"),
        None,
        None,
    );

    assert!(guest.guest_id.is_none());
    assert!(matches!(
        guest.require_id().unwrap_err(),
        DomainError::MissingIdentifier { .. }
    ));
}

#[test]
fn test_guest_with_id_succeeds_require_id() {
    let guest: Guest = Guest::with_id(
        7,
        String::from("Ada Lovelace"),
        String::from("ada@example.com"),
        Some(String::from("555-0100")),
        None,
    );

    assert_eq!(guest.require_id().unwrap(), 7);
}

#[test]
fn test_new_room_starts_available() {
    let room: Room = Room::new(String::from("204"), RoomType::Deluxe, 150.0);

    assert_eq!(room.status, RoomStatus::Available);
    assert!(room.room_id.is_none());
}

#[test]
fn test_reservation_without_id_fails_require_id() {
    let stay: StayDates = StayDates::parse("2024-01-01", "2024-01-04").unwrap();
    let reservation: Reservation = Reservation::new(1, 2, stay, ReservationStatus::Confirmed);

    assert!(matches!(
        reservation.require_id().unwrap_err(),
        DomainError::MissingIdentifier { .. }
    ));
}

#[test]
fn test_reservation_status_serde_uses_wire_strings() {
    let json: String = serde_json::to_string(&ReservationStatus::CheckedIn).unwrap();

    assert_eq!(json, "\"CHECKED_IN\"");

    let parsed: ReservationStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
    assert_eq!(parsed, ReservationStatus::Cancelled);
}

#[test]
fn test_room_type_serde_uses_wire_strings() {
    let json: String = serde_json::to_string(&RoomType::Presidential).unwrap();

    assert_eq!(json, "\"presidential\"");
}
