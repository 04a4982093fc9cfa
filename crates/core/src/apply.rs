// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Availability, BookingFlow, Directive, Draft, DraftMode, Transition};
use front_desk_domain::{ReservationInput, ReservationPatch, StayDates};

/// Applies a command to the current flow, producing a new flow and an
/// optional directive for the caller to execute.
///
/// The function is pure: it performs no I/O and never mutates its input.
/// Completion commands that arrive stale (superseded token) or after the
/// flow has closed are discarded as identity transitions rather than
/// errors, since the user may legitimately have moved on before the
/// network call resolved.
///
/// # Arguments
///
/// * `flow` - The current flow state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Transition)` containing the new flow and optional directive
/// * `Err(CoreError)` if the command is invalid in the current phase
///
/// # Errors
///
/// Returns an error if:
/// - The command is not valid in the current phase
/// - A domain rule is violated (invalid date range, unpersisted entity)
/// - The draft is incomplete at submission time
#[allow(clippy::too_many_lines)]
pub fn apply(flow: &BookingFlow, command: Command) -> Result<Transition, CoreError> {
    let command_name: &'static str = command.name();
    match command {
        Command::StartCreate => {
            let BookingFlow::Closed = flow else {
                return Err(invalid_transition(flow, command_name));
            };
            Ok(Transition {
                flow: BookingFlow::Open(Draft::for_create()),
                directive: None,
            })
        }
        Command::StartEdit(reservation) => {
            let BookingFlow::Closed = flow else {
                return Err(invalid_transition(flow, command_name));
            };
            let draft: Draft = Draft::for_edit(&reservation)?;
            Ok(Transition {
                flow: BookingFlow::Open(draft),
                directive: None,
            })
        }
        Command::SetDates {
            check_in,
            check_out,
        } => {
            let BookingFlow::Open(draft) = flow else {
                return Err(invalid_transition(flow, command_name));
            };

            // Validate the pair eagerly; an inverted or same-day range
            // never enters the draft.
            let stay: Option<StayDates> = match (check_in, check_out) {
                (Some(check_in), Some(check_out)) => Some(StayDates::new(check_in, check_out)?),
                _ => None,
            };

            let mut new_draft: Draft = draft.clone();
            new_draft.check_in = check_in;
            new_draft.check_out = check_out;

            // Room choice is frozen in edit mode; only creation drafts
            // re-query availability when the range changes.
            if !new_draft.is_create() {
                return Ok(Transition {
                    flow: BookingFlow::Open(new_draft),
                    directive: None,
                });
            }

            if let Some(stay) = stay {
                let token: u64 = new_draft.last_token + 1;
                new_draft.last_token = token;
                new_draft.availability = Availability::Loading { token };
                // The previously selected room is kept until the new
                // result arrives and revalidates it.
                return Ok(Transition {
                    flow: BookingFlow::Open(new_draft),
                    directive: Some(Directive::FetchAvailability { token, stay }),
                });
            }

            // Incomplete dates: no room list applies any more.
            new_draft.availability = Availability::NotQueried;
            clear_room_selection(&mut new_draft);
            Ok(Transition {
                flow: BookingFlow::Open(new_draft),
                directive: None,
            })
        }
        Command::SetStatus(status) => {
            let BookingFlow::Open(draft) = flow else {
                return Err(invalid_transition(flow, command_name));
            };
            let mut new_draft: Draft = draft.clone();
            new_draft.status = status;
            Ok(Transition {
                flow: BookingFlow::Open(new_draft),
                directive: None,
            })
        }
        Command::SelectGuest(guest) => {
            let BookingFlow::Open(draft) = flow else {
                return Err(invalid_transition(flow, command_name));
            };
            let mut new_draft: Draft = draft.clone();
            match &mut new_draft.mode {
                DraftMode::Edit { .. } => Err(CoreError::GuestLocked),
                DraftMode::Create {
                    guest: selection, ..
                } => {
                    guest.require_id()?;
                    *selection = Some(guest);
                    Ok(Transition {
                        flow: BookingFlow::Open(new_draft),
                        directive: None,
                    })
                }
            }
        }
        Command::SelectRoom(room) => {
            let BookingFlow::Open(draft) = flow else {
                return Err(invalid_transition(flow, command_name));
            };
            let mut new_draft: Draft = draft.clone();
            match &mut new_draft.mode {
                DraftMode::Edit { .. } => Err(CoreError::RoomLocked),
                DraftMode::Create {
                    room: selection, ..
                } => {
                    let room_id: i64 = room.require_id()?;
                    // Only rooms from the current availability result are
                    // selectable.
                    let in_result: bool = draft
                        .availability
                        .rooms()
                        .is_some_and(|rooms| {
                            rooms
                                .iter()
                                .any(|candidate| candidate.room_id == Some(room_id))
                        });
                    if !in_result {
                        return Err(CoreError::RoomNotAvailable { room_id });
                    }
                    *selection = Some(room);
                    Ok(Transition {
                        flow: BookingFlow::Open(new_draft),
                        directive: None,
                    })
                }
            }
        }
        Command::AvailabilityLoaded { token, rooms } => {
            let BookingFlow::Open(draft) = flow else {
                return Ok(Transition::unchanged(flow.clone()));
            };
            if !matches_in_flight(draft, token) {
                return Ok(Transition::unchanged(flow.clone()));
            }
            // The result replaces the previous room list in full; a
            // selection absent from it is no longer valid.
            let selection_stale: bool = match &draft.mode {
                DraftMode::Create {
                    room: Some(selected),
                    ..
                } => !rooms
                    .iter()
                    .any(|candidate| candidate.room_id == selected.room_id),
                _ => false,
            };
            let mut new_draft: Draft = draft.clone();
            if selection_stale {
                clear_room_selection(&mut new_draft);
            }
            new_draft.availability = Availability::Loaded { token, rooms };
            Ok(Transition {
                flow: BookingFlow::Open(new_draft),
                directive: None,
            })
        }
        Command::AvailabilityFailed { token, message } => {
            let BookingFlow::Open(draft) = flow else {
                return Ok(Transition::unchanged(flow.clone()));
            };
            if !matches_in_flight(draft, token) {
                return Ok(Transition::unchanged(flow.clone()));
            }
            let mut new_draft: Draft = draft.clone();
            // With no result to validate against, any prior selection is
            // stale.
            clear_room_selection(&mut new_draft);
            new_draft.availability = Availability::Failed { token, message };
            Ok(Transition {
                flow: BookingFlow::Open(new_draft),
                directive: None,
            })
        }
        Command::Submit => {
            let BookingFlow::Open(draft) = flow else {
                return Err(invalid_transition(flow, command_name));
            };
            let mut new_draft: Draft = draft.clone();
            new_draft.submit_error = None;
            match &draft.mode {
                DraftMode::Create { guest, room } => {
                    match (guest, room, draft.check_in, draft.check_out) {
                        (Some(guest), Some(room), Some(check_in), Some(check_out)) => {
                            let stay: StayDates = StayDates::new(check_in, check_out)?;
                            let input: ReservationInput = ReservationInput {
                                guest_id: guest.require_id()?,
                                room_id: room.require_id()?,
                                stay,
                                status: draft.status,
                            };
                            Ok(Transition {
                                flow: BookingFlow::Submitting(new_draft),
                                directive: Some(Directive::CreateReservation(input)),
                            })
                        }
                        (guest, room, check_in, check_out) => {
                            let mut missing: Vec<&'static str> = Vec::new();
                            if guest.is_none() {
                                missing.push("guest");
                            }
                            if room.is_none() {
                                missing.push("room");
                            }
                            if check_in.is_none() {
                                missing.push("check_in");
                            }
                            if check_out.is_none() {
                                missing.push("check_out");
                            }
                            Err(CoreError::IncompleteDraft { missing })
                        }
                    }
                }
                DraftMode::Edit {
                    reservation_id,
                    guest_id,
                    room_id,
                    ..
                } => {
                    // The patch always carries the original guest and room
                    // so an edit can never move the reservation.
                    let patch: ReservationPatch = ReservationPatch {
                        guest_id: Some(*guest_id),
                        room_id: Some(*room_id),
                        check_in: draft.check_in,
                        check_out: draft.check_out,
                        status: Some(draft.status),
                    };
                    Ok(Transition {
                        flow: BookingFlow::Submitting(new_draft),
                        directive: Some(Directive::UpdateReservation {
                            reservation_id: *reservation_id,
                            patch,
                        }),
                    })
                }
            }
        }
        Command::SubmitSucceeded => {
            let BookingFlow::Submitting(_) = flow else {
                return Ok(Transition::unchanged(flow.clone()));
            };
            Ok(Transition {
                flow: BookingFlow::Closed,
                directive: Some(Directive::RefreshReservations),
            })
        }
        Command::SubmitFailed { message } => {
            let BookingFlow::Submitting(draft) = flow else {
                return Ok(Transition::unchanged(flow.clone()));
            };
            // The draft is preserved so the user can retry or cancel.
            let mut new_draft: Draft = draft.clone();
            new_draft.submit_error = Some(message);
            Ok(Transition {
                flow: BookingFlow::Open(new_draft),
                directive: None,
            })
        }
        Command::Cancel => match flow {
            BookingFlow::Closed => Ok(Transition::unchanged(BookingFlow::Closed)),
            BookingFlow::Open(_) | BookingFlow::Submitting(_) => Ok(Transition {
                flow: BookingFlow::Closed,
                directive: None,
            }),
        },
    }
}

/// Returns whether a completion token matches the query currently in
/// flight for the draft.
const fn matches_in_flight(draft: &Draft, token: u64) -> bool {
    matches!(draft.availability, Availability::Loading { token: issued } if issued == token)
}

/// Clears the room selection of a creation draft; a no-op in edit mode.
fn clear_room_selection(draft: &mut Draft) {
    if let DraftMode::Create { room, .. } = &mut draft.mode {
        *room = None;
    }
}

/// Builds the error for a command rejected by the current phase.
const fn invalid_transition(flow: &BookingFlow, command: &'static str) -> CoreError {
    CoreError::InvalidTransition {
        phase: flow.phase_name(),
        command,
    }
}
