// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory fakes for the service facades.
//!
//! `GatedInventory` holds every availability call open until the test
//! releases it, which makes out-of-order resolution reproducible.

use async_trait::async_trait;
use front_desk_client::{ClientError, ReservationLedger, RoomInput, RoomInventory};
use front_desk_domain::{
    Guest, Reservation, ReservationInput, ReservationPatch, Room, RoomStatus, RoomType, StayDates,
};
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, oneshot};

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

type RoomsResult = Result<Vec<Room>, ClientError>;

/// A Room Inventory whose availability calls block until released.
#[derive(Clone, Default)]
pub struct GatedInventory {
    waiters: Arc<Mutex<Vec<Option<oneshot::Sender<RoomsResult>>>>>,
    notify: Arc<Notify>,
}

impl GatedInventory {
    pub fn call_count(&self) -> usize {
        self.waiters.lock().unwrap().len()
    }

    /// Waits until at least `count` availability calls have been issued.
    pub async fn wait_for_calls(&self, count: usize) {
        loop {
            if self.call_count() >= count {
                return;
            }
            self.notify.notified().await;
        }
    }

    /// Resolves the `index`-th availability call (zero-based, in issue
    /// order) with the given result.
    pub fn release(&self, index: usize, result: RoomsResult) {
        let sender = self.waiters.lock().unwrap()[index]
            .take()
            .expect("call already released");
        let _ = sender.send(result);
    }
}

#[async_trait]
impl RoomInventory for GatedInventory {
    async fn list_rooms(&self) -> Result<Vec<Room>, ClientError> {
        Ok(Vec::new())
    }

    async fn list_available_rooms(&self, _stay: StayDates) -> Result<Vec<Room>, ClientError> {
        let (sender, receiver) = oneshot::channel();
        self.waiters.lock().unwrap().push(Some(sender));
        self.notify.notify_one();
        receiver.await.unwrap_or_else(|_| Ok(Vec::new()))
    }

    async fn create_room(&self, _input: RoomInput) -> Result<Room, ClientError> {
        Err(ClientError::Status(501))
    }

    async fn update_room(&self, _room_id: i64, _input: RoomInput) -> Result<Room, ClientError> {
        Err(ClientError::Status(501))
    }

    async fn delete_room(&self, _room_id: i64) -> Result<bool, ClientError> {
        Ok(false)
    }
}

/// A Reservation Ledger backed by an in-memory list.
#[derive(Clone, Default)]
pub struct FakeLedger {
    reservations: Arc<Mutex<Vec<Reservation>>>,
    fail_creates: Arc<Mutex<bool>>,
    create_calls: Arc<Mutex<usize>>,
    last_patch: Arc<Mutex<Option<(i64, ReservationPatch)>>>,
}

impl FakeLedger {
    pub fn set_fail_creates(&self, fail: bool) {
        *self.fail_creates.lock().unwrap() = fail;
    }

    pub fn create_calls(&self) -> usize {
        *self.create_calls.lock().unwrap()
    }

    pub fn stored(&self) -> Vec<Reservation> {
        self.reservations.lock().unwrap().clone()
    }

    pub fn store(&self, reservation: Reservation) {
        self.reservations.lock().unwrap().push(reservation);
    }

    pub fn last_patch(&self) -> Option<(i64, ReservationPatch)> {
        self.last_patch.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReservationLedger for FakeLedger {
    async fn list_reservations(&self) -> Result<Vec<Reservation>, ClientError> {
        Ok(self.stored())
    }

    async fn create_reservation(
        &self,
        input: ReservationInput,
    ) -> Result<Reservation, ClientError> {
        *self.create_calls.lock().unwrap() += 1;
        if *self.fail_creates.lock().unwrap() {
            return Err(ClientError::Status(503));
        }
        let mut stored = self.reservations.lock().unwrap();
        let id: i64 = i64::try_from(stored.len()).unwrap() + 1;
        let reservation: Reservation = Reservation {
            reservation_id: Some(id),
            guest_id: input.guest_id,
            room_id: input.room_id,
            stay: input.stay,
            status: input.status,
            guest: None,
            room: None,
        };
        stored.push(reservation.clone());
        Ok(reservation)
    }

    async fn update_reservation(
        &self,
        reservation_id: i64,
        patch: ReservationPatch,
    ) -> Result<Reservation, ClientError> {
        *self.last_patch.lock().unwrap() = Some((reservation_id, patch.clone()));
        let mut stored = self.reservations.lock().unwrap();
        let reservation = stored
            .iter_mut()
            .find(|reservation| reservation.reservation_id == Some(reservation_id))
            .ok_or(ClientError::Status(404))?;
        if let Some(guest_id) = patch.guest_id {
            reservation.guest_id = guest_id;
        }
        if let Some(room_id) = patch.room_id {
            reservation.room_id = room_id;
        }
        let check_in = patch.check_in.unwrap_or_else(|| reservation.stay.check_in());
        let check_out = patch
            .check_out
            .unwrap_or_else(|| reservation.stay.check_out());
        reservation.stay = StayDates::new(check_in, check_out)?;
        if let Some(status) = patch.status {
            reservation.status = status;
        }
        Ok(reservation.clone())
    }

    async fn delete_reservation(&self, reservation_id: i64) -> Result<bool, ClientError> {
        let mut stored = self.reservations.lock().unwrap();
        let before: usize = stored.len();
        stored.retain(|reservation| reservation.reservation_id != Some(reservation_id));
        Ok(stored.len() < before)
    }
}

