// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::stay::StayDates;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a hotel guest as recorded by the Guest Directory.
///
/// Guests are read-only from the booking workflow's perspective; the Guest
/// Directory service is their source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// Canonical identifier assigned by the Guest Directory.
    /// `None` indicates the guest has not been persisted yet.
    pub guest_id: Option<i64>,
    /// The guest's full name.
    pub full_name: String,
    /// The guest's email address.
    pub email: String,
    /// The guest's phone number (optional in list contexts).
    pub phone: Option<String>,
    /// The guest's postal address (optional in list contexts).
    pub address: Option<String>,
}

impl Guest {
    /// Creates a new `Guest` without a persisted identifier.
    #[must_use]
    pub const fn new(
        full_name: String,
        email: String,
        phone: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            guest_id: None,
            full_name,
            email,
            phone,
            address,
        }
    }

    /// Creates a `Guest` with an identifier already assigned by the directory.
    #[must_use]
    pub const fn with_id(
        guest_id: i64,
        full_name: String,
        email: String,
        phone: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            guest_id: Some(guest_id),
            full_name,
            email,
            phone,
            address,
        }
    }

    /// Returns the persisted identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingIdentifier` if the guest has not been
    /// persisted yet.
    pub fn require_id(&self) -> Result<i64, DomainError> {
        self.guest_id.ok_or_else(|| DomainError::MissingIdentifier {
            entity: String::from("guest"),
        })
    }
}

/// Room categories offered by the hotel.
///
/// Wire representation is the lower-case category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Standard room.
    Standard,
    /// Deluxe room.
    Deluxe,
    /// Suite.
    Suite,
    /// Executive suite.
    Executive,
    /// Presidential suite.
    Presidential,
}

impl RoomType {
    /// Returns the wire string for this room type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Deluxe => "deluxe",
            Self::Suite => "suite",
            Self::Executive => "executive",
            Self::Presidential => "presidential",
        }
    }
}

impl FromStr for RoomType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "deluxe" => Ok(Self::Deluxe),
            "suite" => Ok(Self::Suite),
            "executive" => Ok(Self::Executive),
            "presidential" => Ok(Self::Presidential),
            _ => Err(DomainError::InvalidRoomType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Occupancy state of a room as tracked by the Room Inventory.
///
/// Wire representation is the lower-case state name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// Room is free to be booked.
    #[default]
    Available,
    /// Room is held by a reservation that has not checked in.
    Reserved,
    /// Room is currently occupied.
    Occupied,
    /// Room is out of service.
    Maintenance,
}

impl RoomStatus {
    /// Returns the wire string for this room status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(DomainError::InvalidRoomStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a hotel room as recorded by the Room Inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Canonical identifier assigned by the Room Inventory.
    /// `None` indicates the room has not been persisted yet.
    pub room_id: Option<i64>,
    /// Human-facing room number (e.g., "204").
    pub room_number: String,
    /// The room's category.
    pub room_type: RoomType,
    /// Nightly rate used for advisory price quotes.
    pub price_per_night: f64,
    /// Current occupancy state.
    pub status: RoomStatus,
}

impl Room {
    /// Creates a new `Room` without a persisted identifier.
    #[must_use]
    pub const fn new(room_number: String, room_type: RoomType, price_per_night: f64) -> Self {
        Self {
            room_id: None,
            room_number,
            room_type,
            price_per_night,
            status: RoomStatus::Available,
        }
    }

    /// Creates a `Room` with an identifier already assigned by the inventory.
    #[must_use]
    pub const fn with_id(
        room_id: i64,
        room_number: String,
        room_type: RoomType,
        price_per_night: f64,
        status: RoomStatus,
    ) -> Self {
        Self {
            room_id: Some(room_id),
            room_number,
            room_type,
            price_per_night,
            status,
        }
    }

    /// Returns the persisted identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingIdentifier` if the room has not been
    /// persisted yet.
    pub fn require_id(&self) -> Result<i64, DomainError> {
        self.room_id.ok_or_else(|| DomainError::MissingIdentifier {
            entity: String::from("room"),
        })
    }
}

/// Lifecycle state of a reservation in the Reservation Ledger.
///
/// Wire representation is the upper-case snake name (e.g., `CHECKED_IN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Reservation created but not yet confirmed.
    Pending,
    /// Reservation confirmed.
    #[default]
    Confirmed,
    /// Guest has checked in.
    CheckedIn,
    /// Guest has checked out.
    CheckedOut,
    /// Reservation cancelled.
    Cancelled,
}

impl ReservationStatus {
    /// Returns the wire string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns whether this status still holds the room.
    ///
    /// Pending, confirmed, and checked-in reservations occupy the room for
    /// their stay; checked-out and cancelled reservations do not.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::CheckedIn)
    }
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CHECKED_IN" => Ok(Self::CheckedIn),
            "CHECKED_OUT" => Ok(Self::CheckedOut),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidReservationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a persisted reservation as returned by the Reservation Ledger.
///
/// The ledger denormalizes guest and room snapshots into list responses so
/// tables can render without extra lookups; both snapshots are optional on
/// the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Canonical identifier assigned by the Reservation Ledger.
    /// `None` indicates the reservation has not been persisted yet.
    pub reservation_id: Option<i64>,
    /// The guest this reservation belongs to.
    pub guest_id: i64,
    /// The room this reservation occupies.
    pub room_id: i64,
    /// The validated stay date range.
    pub stay: StayDates,
    /// Current lifecycle status.
    pub status: ReservationStatus,
    /// Denormalized guest snapshot, when the ledger includes one.
    pub guest: Option<Guest>,
    /// Denormalized room snapshot, when the ledger includes one.
    pub room: Option<Room>,
}

impl Reservation {
    /// Creates a new `Reservation` without a persisted identifier.
    #[must_use]
    pub const fn new(guest_id: i64, room_id: i64, stay: StayDates, status: ReservationStatus) -> Self {
        Self {
            reservation_id: None,
            guest_id,
            room_id,
            stay,
            status,
            guest: None,
            room: None,
        }
    }

    /// Returns the persisted identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingIdentifier` if the reservation has not
    /// been persisted yet.
    pub fn require_id(&self) -> Result<i64, DomainError> {
        self.reservation_id
            .ok_or_else(|| DomainError::MissingIdentifier {
                entity: String::from("reservation"),
            })
    }
}

/// The fields required to create a new reservation in the Reservation Ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationInput {
    /// The guest this reservation belongs to.
    pub guest_id: i64,
    /// The room this reservation occupies.
    pub room_id: i64,
    /// The validated stay date range.
    pub stay: StayDates,
    /// The initial lifecycle status.
    pub status: ReservationStatus,
}

/// A partial update to a persisted reservation.
///
/// `None` fields are left untouched by the Reservation Ledger. The booking
/// workflow always fills `guest_id` and `room_id` with the reservation's
/// original values so an edit can never move a reservation to a different
/// guest or room.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReservationPatch {
    /// Replacement guest id, if any.
    pub guest_id: Option<i64>,
    /// Replacement room id, if any.
    pub room_id: Option<i64>,
    /// Replacement check-in date, if any.
    pub check_in: Option<time::Date>,
    /// Replacement check-out date, if any.
    pub check_out: Option<time::Date>,
    /// Replacement status, if any.
    pub status: Option<ReservationStatus>,
}
