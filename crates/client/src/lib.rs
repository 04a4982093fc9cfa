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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod documents;
mod endpoints;
mod error;
mod facade;
mod http;
mod transport;
mod wire;

#[cfg(test)]
mod tests;

// Re-export public types
pub use endpoints::ServiceEndpoints;
pub use error::ClientError;
pub use facade::{GuestDirectory, GuestInput, ReservationLedger, RoomInput, RoomInventory};
pub use http::{HttpGuestDirectory, HttpReservationLedger, HttpRoomInventory};
