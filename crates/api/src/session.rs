// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The asynchronous driver around the booking flow.
//!
//! A `BookingSession` owns one `BookingFlow` and the service facades its
//! directives run against. User operations apply a core command and
//! spawn the resulting directive; completions come back through an
//! internal channel and are re-applied as commands, so the latest-wins
//! and discard-after-dismissal rules live in the pure core, not here.

use crate::error::{ApiError, translate_core_error};
use front_desk::{BookingFlow, Command, Directive, Draft, Transition, apply};
use front_desk_client::{ReservationLedger, RoomInventory};
use front_desk_domain::{Guest, Reservation, ReservationStatus, Room};
use std::collections::VecDeque;
use std::sync::Arc;
use time::Date;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// A state change worth reporting to whoever renders the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The availability result for the current date range arrived.
    AvailabilityUpdated,
    /// The availability query for the current date range failed.
    AvailabilityFailed {
        /// A human-readable failure description.
        message: String,
    },
    /// The submitted mutation completed; the flow has closed.
    SubmitCompleted,
    /// The submitted mutation failed; the draft is preserved for retry.
    SubmitFailed {
        /// A human-readable failure description.
        message: String,
    },
    /// The reservation list is out of date and should be re-fetched.
    ReservationsInvalidated,
}

/// An asynchronous booking session over injected service facades.
pub struct BookingSession<I: ?Sized, L: ?Sized> {
    flow: BookingFlow,
    inventory: Arc<I>,
    ledger: Arc<L>,
    completion_tx: mpsc::UnboundedSender<Command>,
    completion_rx: mpsc::UnboundedReceiver<Command>,
    pending_events: VecDeque<SessionEvent>,
}

impl<I, L> BookingSession<I, L>
where
    I: RoomInventory + Send + Sync + ?Sized + 'static,
    L: ReservationLedger + Send + Sync + ?Sized + 'static,
{
    /// Creates a closed session over the given collaborators.
    #[must_use]
    pub fn new(inventory: Arc<I>, ledger: Arc<L>) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            flow: BookingFlow::Closed,
            inventory,
            ledger,
            completion_tx,
            completion_rx,
            pending_events: VecDeque::new(),
        }
    }

    /// Returns the current flow state.
    #[must_use]
    pub const fn flow(&self) -> &BookingFlow {
        &self.flow
    }

    /// Returns the rooms of the current availability result, if loaded.
    #[must_use]
    pub fn available_rooms(&self) -> Option<&[Room]> {
        self.flow
            .draft()
            .and_then(|draft| draft.availability.rooms())
    }

    /// Returns whether an availability query is in flight.
    #[must_use]
    pub fn is_loading_availability(&self) -> bool {
        self.flow
            .draft()
            .is_some_and(|draft| draft.availability.is_loading())
    }

    /// Returns the advisory total price for the current draft.
    #[must_use]
    pub fn advisory_quote(&self) -> f64 {
        self.flow.draft().map_or(0.0, Draft::advisory_quote)
    }

    /// Opens the flow with an empty creation draft.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the flow is already open.
    pub fn start_create(&mut self) -> Result<(), ApiError> {
        self.dispatch(Command::StartCreate)
    }

    /// Opens the flow with a draft seeded from an existing reservation.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the flow is already open or the
    /// reservation has no identifier.
    pub fn start_edit(&mut self, reservation: Reservation) -> Result<(), ApiError> {
        self.dispatch(Command::StartEdit(reservation))
    }

    /// Updates the draft's date range, re-querying availability in
    /// creation mode when both dates are present.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the flow is not open or the range
    /// is inverted.
    pub fn set_dates(
        &mut self,
        check_in: Option<Date>,
        check_out: Option<Date>,
    ) -> Result<(), ApiError> {
        self.dispatch(Command::SetDates {
            check_in,
            check_out,
        })
    }

    /// Updates the draft's status.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the flow is not open.
    pub fn set_status(&mut self, status: ReservationStatus) -> Result<(), ApiError> {
        self.dispatch(Command::SetStatus(status))
    }

    /// Selects the guest for a creation draft.
    ///
    /// # Errors
    ///
    /// Returns a validation error in edit mode (the guest is locked) or
    /// if the flow is not open.
    pub fn select_guest(&mut self, guest: Guest) -> Result<(), ApiError> {
        self.dispatch(Command::SelectGuest(guest))
    }

    /// Selects the room for a creation draft from the availability result.
    ///
    /// # Errors
    ///
    /// Returns a validation error in edit mode (the room is locked), if
    /// the room is not in the current result, or if the flow is not open.
    pub fn select_room(&mut self, room: Room) -> Result<(), ApiError> {
        self.dispatch(Command::SelectRoom(room))
    }

    /// Validates the draft and issues the create/update mutation.
    ///
    /// # Errors
    ///
    /// Returns a validation error listing the missing fields; no network
    /// call is made in that case.
    pub fn submit(&mut self) -> Result<(), ApiError> {
        self.dispatch(Command::Submit)
    }

    /// Discards the draft without any network call.
    ///
    /// An in-flight request is left to resolve; its completion will be
    /// discarded by the core.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches the other
    /// operations for uniform call sites.
    pub fn cancel(&mut self) -> Result<(), ApiError> {
        self.dispatch(Command::Cancel)
    }

    /// Applies completions that have already arrived, without blocking,
    /// and returns the events they produced.
    pub fn process_pending(&mut self) -> Vec<SessionEvent> {
        while let Ok(command) = self.completion_rx.try_recv() {
            self.apply_completion(command);
        }
        self.pending_events.drain(..).collect()
    }

    /// Waits for the next completion and applies it, returning the
    /// events it produced.
    ///
    /// The returned list is empty when the completion was discarded as
    /// stale or post-dismissal.
    pub async fn settle_next(&mut self) -> Vec<SessionEvent> {
        if let Some(command) = self.completion_rx.recv().await {
            self.apply_completion(command);
        }
        self.pending_events.drain(..).collect()
    }

    /// Waits until a completion produces a visible event and returns it.
    pub async fn next_event(&mut self) -> SessionEvent {
        loop {
            if let Some(event) = self.pending_events.pop_front() {
                return event;
            }
            if let Some(command) = self.completion_rx.recv().await {
                self.apply_completion(command);
            }
        }
    }

    /// Applies a user command and executes any resulting directive.
    fn dispatch(&mut self, command: Command) -> Result<(), ApiError> {
        let transition: Transition =
            apply(&self.flow, command).map_err(|err| translate_core_error(&err))?;
        self.flow = transition.flow;
        if let Some(directive) = transition.directive {
            self.run_directive(directive);
        }
        Ok(())
    }

    /// Applies a completion command; stale completions leave the flow
    /// untouched and produce no event.
    fn apply_completion(&mut self, command: Command) {
        let command_name: &'static str = command.name();
        let event: Option<SessionEvent> = match &command {
            Command::AvailabilityLoaded { .. } => Some(SessionEvent::AvailabilityUpdated),
            Command::AvailabilityFailed { message, .. } => {
                Some(SessionEvent::AvailabilityFailed {
                    message: message.clone(),
                })
            }
            Command::SubmitSucceeded => Some(SessionEvent::SubmitCompleted),
            Command::SubmitFailed { message } => Some(SessionEvent::SubmitFailed {
                message: message.clone(),
            }),
            _ => None,
        };
        match apply(&self.flow, command) {
            Ok(transition) => {
                let applied: bool = transition.flow != self.flow;
                self.flow = transition.flow;
                if applied {
                    self.pending_events.extend(event);
                } else {
                    debug!(command = command_name, "Discarded stale completion");
                }
                if let Some(directive) = transition.directive {
                    self.run_directive(directive);
                }
            }
            Err(err) => {
                // Completions are discarded by the core rather than
                // rejected; reaching this arm means a programming error.
                warn!(command = command_name, error = %err, "Completion rejected");
            }
        }
    }

    /// Executes a directive, reporting its completion into the channel.
    fn run_directive(&mut self, directive: Directive) {
        match directive {
            Directive::FetchAvailability { token, stay } => {
                let inventory: Arc<I> = Arc::clone(&self.inventory);
                let completion_tx = self.completion_tx.clone();
                tokio::spawn(async move {
                    let command: Command = match inventory.list_available_rooms(stay).await {
                        Ok(rooms) => Command::AvailabilityLoaded { token, rooms },
                        Err(err) => Command::AvailabilityFailed {
                            token,
                            message: err.to_string(),
                        },
                    };
                    // The session may have been dropped in the meantime.
                    let _ = completion_tx.send(command);
                });
            }
            Directive::CreateReservation(input) => {
                let ledger: Arc<L> = Arc::clone(&self.ledger);
                let completion_tx = self.completion_tx.clone();
                tokio::spawn(async move {
                    let command: Command = match ledger.create_reservation(input).await {
                        Ok(_) => Command::SubmitSucceeded,
                        Err(err) => Command::SubmitFailed {
                            message: err.to_string(),
                        },
                    };
                    let _ = completion_tx.send(command);
                });
            }
            Directive::UpdateReservation {
                reservation_id,
                patch,
            } => {
                let ledger: Arc<L> = Arc::clone(&self.ledger);
                let completion_tx = self.completion_tx.clone();
                tokio::spawn(async move {
                    let command: Command =
                        match ledger.update_reservation(reservation_id, patch).await {
                            Ok(_) => Command::SubmitSucceeded,
                            Err(err) => Command::SubmitFailed {
                                message: err.to_string(),
                            },
                        };
                    let _ = completion_tx.send(command);
                });
            }
            Directive::RefreshReservations => {
                self.pending_events
                    .push_back(SessionEvent::ReservationsInvalidated);
            }
        }
    }
}
