// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Advisory price quoting.
//!
//! Quotes are derived values shown while a reservation is being drafted.
//! The Reservation Ledger is the authority on the final price; nothing in
//! this module is ever submitted as an amount.

use crate::stay::StayDates;
use time::Date;

/// Computes the total price for a stay.
///
/// The total is `price_per_night` multiplied by the number of nights.
/// Deterministic and side-effect free.
#[must_use]
pub fn quote_total(price_per_night: f64, stay: &StayDates) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let nights: f64 = stay.nights() as f64;
    price_per_night * nights
}

/// Computes an advisory quote for a draft that may not have both dates yet.
///
/// Returns `0.0` whenever either date is absent or the pair does not form a
/// valid stay. Callers must treat `0.0` as "not yet computable", not as a
/// valid quote of zero.
#[must_use]
pub fn draft_quote(
    price_per_night: f64,
    check_in: Option<Date>,
    check_out: Option<Date>,
) -> f64 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => StayDates::new(check_in, check_out)
            .map_or(0.0, |stay| quote_total(price_per_night, &stay)),
        _ => 0.0,
    }
}
