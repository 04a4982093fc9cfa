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

mod error;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::{ApiError, translate_core_error, translate_fetch_error, translate_mutation_error};
pub use request_response::{DashboardStats, GuestRow, ReservationRow, RoomRow};
pub use session::{BookingSession, SessionEvent};
