// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod pricing;
mod stay;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use pricing::{draft_quote, quote_total};
pub use stay::{StayDates, format_wire_date, parse_wire_date};
pub use types::{
    Guest, Reservation, ReservationInput, ReservationPatch, ReservationStatus, Room, RoomStatus,
    RoomType,
};
pub use validation::{validate_guest_fields, validate_room_fields};
