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

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use clap::Parser;
use front_desk::{BookingFlow, Command, CoreError, Directive, Draft, Transition, apply};
use front_desk_api::{
    ApiError, DashboardStats, GuestRow, ReservationRow, RoomRow, translate_core_error,
    translate_fetch_error, translate_mutation_error,
};
use front_desk_client::{
    ClientError, GuestDirectory, GuestInput, HttpGuestDirectory, HttpReservationLedger,
    HttpRoomInventory, ReservationLedger, RoomInput, RoomInventory, ServiceEndpoints,
};
use front_desk_domain::{
    DomainError, Guest, Reservation, ReservationStatus, Room, RoomStatus, RoomType, StayDates,
    parse_wire_date, validate_guest_fields, validate_room_fields,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Front Desk Server - HTTP facade over the hotel's backing services
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 4000)]
    port: u16,

    /// Guest Directory GraphQL endpoint (overrides the default)
    #[arg(long)]
    guest_service: Option<String>,

    /// Room Inventory GraphQL endpoint (overrides the default)
    #[arg(long)]
    room_service: Option<String>,

    /// Reservation Ledger GraphQL endpoint (overrides the default)
    #[arg(long)]
    reservation_service: Option<String>,
}

type SharedDirectory = Arc<dyn GuestDirectory + Send + Sync>;
type SharedInventory = Arc<dyn RoomInventory + Send + Sync>;
type SharedLedger = Arc<dyn ReservationLedger + Send + Sync>;

/// Application state shared across handlers.
///
/// The three services are injected explicitly; handlers never resolve
/// them from ambient context.
#[derive(Clone)]
struct AppState {
    /// The Guest Directory client.
    guests: SharedDirectory,
    /// The Room Inventory client.
    rooms: SharedInventory,
    /// The Reservation Ledger client.
    reservations: SharedLedger,
}

/// API request for creating or replacing a guest.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct GuestApiRequest {
    /// The guest's full name.
    full_name: String,
    /// The guest's email address.
    email: String,
    /// The guest's phone number.
    phone: Option<String>,
    /// The guest's postal address.
    address: Option<String>,
}

/// API request for creating or replacing a room.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RoomApiRequest {
    /// Human-facing room number.
    room_number: String,
    /// The room's category (standard, deluxe, suite, executive,
    /// presidential).
    room_type: String,
    /// Nightly rate.
    price_per_night: f64,
    /// Occupancy state; defaults to available.
    status: Option<String>,
}

/// API request for creating a reservation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateReservationApiRequest {
    /// The guest the reservation is for.
    guest_id: i64,
    /// The room to book.
    room_id: i64,
    /// Check-in date, `YYYY-MM-DD`.
    check_in_date: String,
    /// Check-out date, `YYYY-MM-DD`.
    check_out_date: String,
    /// Reservation status; defaults to CONFIRMED.
    status: Option<String>,
}

/// API request for updating a reservation.
///
/// Only dates and status are updatable; the guest and room always stay
/// pinned to the original reservation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateReservationApiRequest {
    /// Replacement check-in date, `YYYY-MM-DD`.
    check_in_date: Option<String>,
    /// Replacement check-out date, `YYYY-MM-DD`.
    check_out_date: Option<String>,
    /// Replacement status.
    status: Option<String>,
}

/// Query parameters for the available-rooms endpoint.
#[derive(Debug, Deserialize)]
struct AvailableRoomsQuery {
    /// Check-in date, `YYYY-MM-DD`.
    check_in: String,
    /// Check-out date, `YYYY-MM-DD`.
    check_out: String,
}

/// API response for delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteResponse {
    /// Whether the entity existed and was deleted.
    deleted: bool,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    const fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    const fn not_found(message: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message,
        }
    }

    /// A backing service answered with something the facade cannot use.
    const fn bad_gateway(message: String) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Fetch { .. } | ApiError::Mutation { .. } => Self {
                status: StatusCode::BAD_GATEWAY,
                message: err.to_string(),
            },
        }
    }
}

/// Maps a coordinator rejection to its HTTP response.
fn core_error(err: &CoreError) -> HttpError {
    translate_core_error(err).into()
}

/// Maps a read-path service failure to its HTTP response.
fn fetch_error(resource: &str, err: &ClientError) -> HttpError {
    translate_fetch_error(resource, err).into()
}

/// Maps a write-path service failure to its HTTP response.
fn mutation_error(operation: &str, err: &ClientError) -> HttpError {
    translate_mutation_error(operation, err).into()
}

/// Maps a malformed service payload (e.g., an entity without an
/// identifier) to its HTTP response.
fn malformed(resource: &str, err: &DomainError) -> HttpError {
    HttpError::bad_gateway(format!("{resource} returned malformed data: {err}"))
}

fn parse_status_or_default(value: Option<&str>) -> Result<ReservationStatus, HttpError> {
    value.map_or(Ok(ReservationStatus::Confirmed), |status| {
        status
            .parse()
            .map_err(|err: DomainError| HttpError::bad_request(err.to_string()))
    })
}

/// Handler for GET `/dashboard/stats` endpoint.
///
/// Computes the headline numbers live from the three services.
async fn handle_dashboard_stats(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<DashboardStats>, HttpError> {
    info!("Handling dashboard_stats request");

    let guests_future = async {
        state
            .guests
            .list_guests()
            .await
            .map_err(|err| fetch_error("guests", &err))
    };
    let rooms_future = async {
        state
            .rooms
            .list_rooms()
            .await
            .map_err(|err| fetch_error("rooms", &err))
    };
    let reservations_future = async {
        state
            .reservations
            .list_reservations()
            .await
            .map_err(|err| fetch_error("reservations", &err))
    };
    let (guests, rooms, reservations) =
        futures::future::try_join3(guests_future, rooms_future, reservations_future).await?;

    Ok(Json(DashboardStats::compute(&guests, &rooms, &reservations)))
}

/// Handler for GET `/guests` endpoint.
async fn handle_list_guests(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Vec<GuestRow>>, HttpError> {
    info!("Handling list_guests request");

    let guests: Vec<Guest> = state
        .guests
        .list_guests()
        .await
        .map_err(|err| fetch_error("guests", &err))?;
    let rows: Vec<GuestRow> = guests
        .iter()
        .map(GuestRow::from_guest)
        .collect::<Result<Vec<GuestRow>, DomainError>>()
        .map_err(|err| malformed("Guest Directory", &err))?;

    Ok(Json(rows))
}

/// Validates the request fields and builds the directory input.
fn guest_input_from_request(req: GuestApiRequest) -> Result<GuestInput, HttpError> {
    let candidate: Guest = Guest::new(
        req.full_name.clone(),
        req.email.clone(),
        req.phone.clone(),
        req.address.clone(),
    );
    validate_guest_fields(&candidate).map_err(|err| HttpError::bad_request(err.to_string()))?;
    Ok(GuestInput {
        full_name: req.full_name,
        email: req.email,
        phone: req.phone,
        address: req.address,
    })
}

/// Handler for POST `/guests` endpoint.
async fn handle_create_guest(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<GuestApiRequest>,
) -> Result<Json<GuestRow>, HttpError> {
    info!(full_name = %req.full_name, "Handling create_guest request");

    let input: GuestInput = guest_input_from_request(req)?;
    let created: Guest = state
        .guests
        .create_guest(input)
        .await
        .map_err(|err| mutation_error("create guest", &err))?;

    info!(guest_id = ?created.guest_id, "Successfully created guest");
    Ok(Json(
        GuestRow::from_guest(&created).map_err(|err| malformed("Guest Directory", &err))?,
    ))
}

/// Handler for PUT `/guests/{id}` endpoint.
async fn handle_update_guest(
    AxumState(state): AxumState<AppState>,
    Path(guest_id): Path<i64>,
    Json(req): Json<GuestApiRequest>,
) -> Result<Json<GuestRow>, HttpError> {
    info!(guest_id = guest_id, "Handling update_guest request");

    let input: GuestInput = guest_input_from_request(req)?;
    let updated: Guest = state
        .guests
        .update_guest(guest_id, input)
        .await
        .map_err(|err| mutation_error("update guest", &err))?;

    Ok(Json(
        GuestRow::from_guest(&updated).map_err(|err| malformed("Guest Directory", &err))?,
    ))
}

/// Handler for DELETE `/guests/{id}` endpoint.
async fn handle_delete_guest(
    AxumState(state): AxumState<AppState>,
    Path(guest_id): Path<i64>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(guest_id = guest_id, "Handling delete_guest request");

    let deleted: bool = state
        .guests
        .delete_guest(guest_id)
        .await
        .map_err(|err| mutation_error("delete guest", &err))?;
    if !deleted {
        return Err(HttpError::not_found(format!(
            "Guest {guest_id} does not exist"
        )));
    }

    Ok(Json(DeleteResponse { deleted }))
}

/// Handler for GET `/rooms` endpoint.
async fn handle_list_rooms(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Vec<RoomRow>>, HttpError> {
    info!("Handling list_rooms request");

    let rooms: Vec<Room> = state
        .rooms
        .list_rooms()
        .await
        .map_err(|err| fetch_error("rooms", &err))?;
    let rows: Vec<RoomRow> = rooms
        .iter()
        .map(RoomRow::from_room)
        .collect::<Result<Vec<RoomRow>, DomainError>>()
        .map_err(|err| malformed("Room Inventory", &err))?;

    Ok(Json(rows))
}

/// Handler for GET `/rooms/available` endpoint.
///
/// Both dates are required; without a valid range there is no
/// availability to speak of.
async fn handle_available_rooms(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<AvailableRoomsQuery>,
) -> Result<Json<Vec<RoomRow>>, HttpError> {
    info!(
        check_in = %query.check_in,
        check_out = %query.check_out,
        "Handling available_rooms request"
    );

    let stay: StayDates = StayDates::parse(&query.check_in, &query.check_out)
        .map_err(|err| HttpError::bad_request(err.to_string()))?;
    let rooms: Vec<Room> = state
        .rooms
        .list_available_rooms(stay)
        .await
        .map_err(|err| fetch_error("available rooms", &err))?;
    let rows: Vec<RoomRow> = rooms
        .iter()
        .map(RoomRow::from_room)
        .collect::<Result<Vec<RoomRow>, DomainError>>()
        .map_err(|err| malformed("Room Inventory", &err))?;

    Ok(Json(rows))
}

/// Validates the request fields and builds the inventory input.
fn room_input_from_request(req: RoomApiRequest) -> Result<RoomInput, HttpError> {
    let room_type: RoomType = req
        .room_type
        .parse()
        .map_err(|err: DomainError| HttpError::bad_request(err.to_string()))?;
    let status: RoomStatus = match req.status.as_deref() {
        Some(status) => status
            .parse()
            .map_err(|err: DomainError| HttpError::bad_request(err.to_string()))?,
        None => RoomStatus::Available,
    };
    let mut candidate: Room = Room::new(req.room_number.clone(), room_type, req.price_per_night);
    candidate.status = status;
    validate_room_fields(&candidate).map_err(|err| HttpError::bad_request(err.to_string()))?;
    Ok(RoomInput {
        room_number: req.room_number,
        room_type,
        price_per_night: req.price_per_night,
        status,
    })
}

/// Handler for POST `/rooms` endpoint.
async fn handle_create_room(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<RoomApiRequest>,
) -> Result<Json<RoomRow>, HttpError> {
    info!(room_number = %req.room_number, "Handling create_room request");

    let input: RoomInput = room_input_from_request(req)?;
    let created: Room = state
        .rooms
        .create_room(input)
        .await
        .map_err(|err| mutation_error("create room", &err))?;

    info!(room_id = ?created.room_id, "Successfully created room");
    Ok(Json(
        RoomRow::from_room(&created).map_err(|err| malformed("Room Inventory", &err))?,
    ))
}

/// Handler for PUT `/rooms/{id}` endpoint.
async fn handle_update_room(
    AxumState(state): AxumState<AppState>,
    Path(room_id): Path<i64>,
    Json(req): Json<RoomApiRequest>,
) -> Result<Json<RoomRow>, HttpError> {
    info!(room_id = room_id, "Handling update_room request");

    let input: RoomInput = room_input_from_request(req)?;
    let updated: Room = state
        .rooms
        .update_room(room_id, input)
        .await
        .map_err(|err| mutation_error("update room", &err))?;

    Ok(Json(
        RoomRow::from_room(&updated).map_err(|err| malformed("Room Inventory", &err))?,
    ))
}

/// Handler for DELETE `/rooms/{id}` endpoint.
async fn handle_delete_room(
    AxumState(state): AxumState<AppState>,
    Path(room_id): Path<i64>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(room_id = room_id, "Handling delete_room request");

    let deleted: bool = state
        .rooms
        .delete_room(room_id)
        .await
        .map_err(|err| mutation_error("delete room", &err))?;
    if !deleted {
        return Err(HttpError::not_found(format!(
            "Room {room_id} does not exist"
        )));
    }

    Ok(Json(DeleteResponse { deleted }))
}

/// Handler for GET `/reservations` endpoint.
async fn handle_list_reservations(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Vec<ReservationRow>>, HttpError> {
    info!("Handling list_reservations request");

    let reservations: Vec<Reservation> = state
        .reservations
        .list_reservations()
        .await
        .map_err(|err| fetch_error("reservations", &err))?;
    let rows: Vec<ReservationRow> = reservations
        .iter()
        .map(ReservationRow::from_reservation)
        .collect::<Result<Vec<ReservationRow>, DomainError>>()
        .map_err(|err| malformed("Reservation Ledger", &err))?;

    Ok(Json(rows))
}

/// Handler for POST `/reservations` endpoint.
///
/// Drives the booking coordinator through the full creation workflow:
/// date selection, availability lookup, guest and room selection, and
/// submission. The coordinator enforces the booking rules; this handler
/// only executes its directives against the services.
#[allow(clippy::too_many_lines)]
async fn handle_create_reservation(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateReservationApiRequest>,
) -> Result<Json<ReservationRow>, HttpError> {
    info!(
        guest_id = req.guest_id,
        room_id = req.room_id,
        check_in = %req.check_in_date,
        check_out = %req.check_out_date,
        "Handling create_reservation request"
    );

    let stay: StayDates = StayDates::parse(&req.check_in_date, &req.check_out_date)
        .map_err(|err| HttpError::bad_request(err.to_string()))?;
    let status: ReservationStatus = parse_status_or_default(req.status.as_deref())?;

    let mut flow: BookingFlow = apply(&BookingFlow::Closed, Command::StartCreate)
        .map_err(|err| core_error(&err))?
        .flow;
    let transition: Transition = apply(
        &flow,
        Command::SetDates {
            check_in: Some(stay.check_in()),
            check_out: Some(stay.check_out()),
        },
    )
    .map_err(|err| core_error(&err))?;
    flow = transition.flow;
    let Some(Directive::FetchAvailability {
        token,
        stay: query_stay,
    }) = transition.directive
    else {
        return Err(HttpError::bad_gateway(String::from(
            "availability query was not issued",
        )));
    };

    let rooms: Vec<Room> = state
        .rooms
        .list_available_rooms(query_stay)
        .await
        .map_err(|err| fetch_error("available rooms", &err))?;
    let selected_room: Option<Room> = rooms
        .iter()
        .find(|room| room.room_id == Some(req.room_id))
        .cloned();
    flow = apply(&flow, Command::AvailabilityLoaded { token, rooms })
        .map_err(|err| core_error(&err))?
        .flow;

    let guests: Vec<Guest> = state
        .guests
        .list_guests()
        .await
        .map_err(|err| fetch_error("guests", &err))?;
    let guest: Guest = guests
        .into_iter()
        .find(|guest| guest.guest_id == Some(req.guest_id))
        .ok_or_else(|| {
            HttpError::not_found(format!("Guest {} does not exist", req.guest_id))
        })?;
    flow = apply(&flow, Command::SelectGuest(guest))
        .map_err(|err| core_error(&err))?
        .flow;

    let room: Room = selected_room.ok_or_else(|| {
        core_error(&CoreError::RoomNotAvailable {
            room_id: req.room_id,
        })
    })?;
    flow = apply(&flow, Command::SelectRoom(room))
        .map_err(|err| core_error(&err))?
        .flow;
    flow = apply(&flow, Command::SetStatus(status))
        .map_err(|err| core_error(&err))?
        .flow;

    let transition: Transition = apply(&flow, Command::Submit).map_err(|err| core_error(&err))?;
    let advisory_total: f64 = transition.flow.draft().map_or(0.0, Draft::advisory_quote);
    let Some(Directive::CreateReservation(input)) = transition.directive else {
        return Err(HttpError::bad_gateway(String::from(
            "submission produced no mutation",
        )));
    };

    let created: Reservation = state
        .reservations
        .create_reservation(input)
        .await
        .map_err(|err| mutation_error("create reservation", &err))?;

    info!(
        reservation_id = ?created.reservation_id,
        "Successfully created reservation"
    );

    let mut row: ReservationRow = ReservationRow::from_reservation(&created)
        .map_err(|err| malformed("Reservation Ledger", &err))?;
    // The ledger omits the room snapshot on creation; quote from the
    // draft instead. The ledger remains the authority on the final price.
    row.total_price = advisory_total;
    Ok(Json(row))
}

/// Handler for PUT `/reservations/{id}` endpoint.
///
/// Edits never move a reservation: the coordinator pins the original
/// guest and room, and only dates and status are updatable.
async fn handle_update_reservation(
    AxumState(state): AxumState<AppState>,
    Path(reservation_id): Path<i64>,
    Json(req): Json<UpdateReservationApiRequest>,
) -> Result<Json<ReservationRow>, HttpError> {
    info!(
        reservation_id = reservation_id,
        "Handling update_reservation request"
    );

    let reservations: Vec<Reservation> = state
        .reservations
        .list_reservations()
        .await
        .map_err(|err| fetch_error("reservations", &err))?;
    let existing: Reservation = reservations
        .into_iter()
        .find(|reservation| reservation.reservation_id == Some(reservation_id))
        .ok_or_else(|| {
            HttpError::not_found(format!("Reservation {reservation_id} does not exist"))
        })?;

    let check_in: time::Date = match req.check_in_date.as_deref() {
        Some(value) => {
            parse_wire_date(value).map_err(|err| HttpError::bad_request(err.to_string()))?
        }
        None => existing.stay.check_in(),
    };
    let check_out: time::Date = match req.check_out_date.as_deref() {
        Some(value) => {
            parse_wire_date(value).map_err(|err| HttpError::bad_request(err.to_string()))?
        }
        None => existing.stay.check_out(),
    };

    let mut flow: BookingFlow = apply(&BookingFlow::Closed, Command::StartEdit(existing))
        .map_err(|err| core_error(&err))?
        .flow;
    flow = apply(
        &flow,
        Command::SetDates {
            check_in: Some(check_in),
            check_out: Some(check_out),
        },
    )
    .map_err(|err| core_error(&err))?
    .flow;
    if let Some(status) = req.status.as_deref() {
        let status: ReservationStatus = status
            .parse()
            .map_err(|err: DomainError| HttpError::bad_request(err.to_string()))?;
        flow = apply(&flow, Command::SetStatus(status))
            .map_err(|err| core_error(&err))?
            .flow;
    }

    let transition: Transition = apply(&flow, Command::Submit).map_err(|err| core_error(&err))?;
    let Some(Directive::UpdateReservation {
        reservation_id: target_id,
        patch,
    }) = transition.directive
    else {
        return Err(HttpError::bad_gateway(String::from(
            "submission produced no mutation",
        )));
    };

    let updated: Reservation = state
        .reservations
        .update_reservation(target_id, patch)
        .await
        .map_err(|err| mutation_error("update reservation", &err))?;

    info!(reservation_id = target_id, "Successfully updated reservation");
    Ok(Json(
        ReservationRow::from_reservation(&updated)
            .map_err(|err| malformed("Reservation Ledger", &err))?,
    ))
}

/// Handler for DELETE `/reservations/{id}` endpoint.
async fn handle_delete_reservation(
    AxumState(state): AxumState<AppState>,
    Path(reservation_id): Path<i64>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(
        reservation_id = reservation_id,
        "Handling delete_reservation request"
    );

    let deleted: bool = state
        .reservations
        .delete_reservation(reservation_id)
        .await
        .map_err(|err| mutation_error("delete reservation", &err))?;
    if !deleted {
        return Err(HttpError::not_found(format!(
            "Reservation {reservation_id} does not exist"
        )));
    }

    Ok(Json(DeleteResponse { deleted }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/dashboard/stats", get(handle_dashboard_stats))
        .route("/guests", get(handle_list_guests).post(handle_create_guest))
        .route(
            "/guests/{id}",
            delete(handle_delete_guest).put(handle_update_guest),
        )
        .route("/rooms", get(handle_list_rooms).post(handle_create_room))
        .route("/rooms/available", get(handle_available_rooms))
        .route(
            "/rooms/{id}",
            delete(handle_delete_room).put(handle_update_room),
        )
        .route(
            "/reservations",
            get(handle_list_reservations).post(handle_create_reservation),
        )
        .route(
            "/reservations/{id}",
            delete(handle_delete_reservation).put(handle_update_reservation),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Front Desk Server");

    let mut endpoints: ServiceEndpoints = ServiceEndpoints::default();
    if let Some(url) = args.guest_service {
        endpoints.guest_directory = url;
    }
    if let Some(url) = args.room_service {
        endpoints.room_inventory = url;
    }
    if let Some(url) = args.reservation_service {
        endpoints.reservation_ledger = url;
    }
    info!(
        guest = %endpoints.guest_directory,
        room = %endpoints.room_inventory,
        reservation = %endpoints.reservation_ledger,
        "Connecting to backing services"
    );

    let app_state: AppState = AppState {
        guests: Arc::new(HttpGuestDirectory::new(&endpoints.guest_directory)),
        rooms: Arc::new(HttpRoomInventory::new(&endpoints.room_inventory)),
        reservations: Arc::new(HttpReservationLedger::new(&endpoints.reservation_ledger)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use front_desk_domain::{ReservationInput, ReservationPatch};
    use std::sync::Mutex;
    use time::macros::date;
    use tower::ServiceExt;

    /// In-memory Guest Directory.
    #[derive(Clone, Default)]
    struct FakeDirectory {
        guests: Arc<Mutex<Vec<Guest>>>,
    }

    #[async_trait]
    impl GuestDirectory for FakeDirectory {
        async fn list_guests(&self) -> Result<Vec<Guest>, ClientError> {
            Ok(self.guests.lock().unwrap().clone())
        }

        async fn create_guest(&self, input: GuestInput) -> Result<Guest, ClientError> {
            let mut stored = self.guests.lock().unwrap();
            let id: i64 = i64::try_from(stored.len()).unwrap() + 1;
            let guest: Guest =
                Guest::with_id(id, input.full_name, input.email, input.phone, input.address);
            stored.push(guest.clone());
            Ok(guest)
        }

        async fn update_guest(
            &self,
            guest_id: i64,
            input: GuestInput,
        ) -> Result<Guest, ClientError> {
            let mut stored = self.guests.lock().unwrap();
            let guest = stored
                .iter_mut()
                .find(|guest| guest.guest_id == Some(guest_id))
                .ok_or(ClientError::Status(404))?;
            guest.full_name = input.full_name;
            guest.email = input.email;
            guest.phone = input.phone;
            guest.address = input.address;
            Ok(guest.clone())
        }

        async fn delete_guest(&self, guest_id: i64) -> Result<bool, ClientError> {
            let mut stored = self.guests.lock().unwrap();
            let before: usize = stored.len();
            stored.retain(|guest| guest.guest_id != Some(guest_id));
            Ok(stored.len() < before)
        }
    }

    /// In-memory Room Inventory; every room it holds is bookable.
    #[derive(Clone, Default)]
    struct FakeInventory {
        rooms: Arc<Mutex<Vec<Room>>>,
        fail_reads: Arc<Mutex<bool>>,
    }

    #[async_trait]
    impl RoomInventory for FakeInventory {
        async fn list_rooms(&self) -> Result<Vec<Room>, ClientError> {
            if *self.fail_reads.lock().unwrap() {
                return Err(ClientError::Status(503));
            }
            Ok(self.rooms.lock().unwrap().clone())
        }

        async fn list_available_rooms(&self, _stay: StayDates) -> Result<Vec<Room>, ClientError> {
            self.list_rooms().await
        }

        async fn create_room(&self, input: RoomInput) -> Result<Room, ClientError> {
            let mut stored = self.rooms.lock().unwrap();
            let id: i64 = i64::try_from(stored.len()).unwrap() + 1;
            let room: Room = Room::with_id(
                id,
                input.room_number,
                input.room_type,
                input.price_per_night,
                input.status,
            );
            stored.push(room.clone());
            Ok(room)
        }

        async fn update_room(&self, room_id: i64, input: RoomInput) -> Result<Room, ClientError> {
            let mut stored = self.rooms.lock().unwrap();
            let room = stored
                .iter_mut()
                .find(|room| room.room_id == Some(room_id))
                .ok_or(ClientError::Status(404))?;
            room.room_number = input.room_number;
            room.room_type = input.room_type;
            room.price_per_night = input.price_per_night;
            room.status = input.status;
            Ok(room.clone())
        }

        async fn delete_room(&self, room_id: i64) -> Result<bool, ClientError> {
            let mut stored = self.rooms.lock().unwrap();
            let before: usize = stored.len();
            stored.retain(|room| room.room_id != Some(room_id));
            Ok(stored.len() < before)
        }
    }

    /// In-memory Reservation Ledger.
    #[derive(Clone, Default)]
    struct FakeLedger {
        reservations: Arc<Mutex<Vec<Reservation>>>,
        last_patch: Arc<Mutex<Option<(i64, ReservationPatch)>>>,
    }

    #[async_trait]
    impl ReservationLedger for FakeLedger {
        async fn list_reservations(&self) -> Result<Vec<Reservation>, ClientError> {
            Ok(self.reservations.lock().unwrap().clone())
        }

        async fn create_reservation(
            &self,
            input: ReservationInput,
        ) -> Result<Reservation, ClientError> {
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
            let check_in =
                patch.check_in.unwrap_or_else(|| reservation.stay.check_in());
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

    struct TestBackends {
        directory: FakeDirectory,
        inventory: FakeInventory,
        ledger: FakeLedger,
    }

    fn create_test_backends() -> (AppState, TestBackends) {
        let directory: FakeDirectory = FakeDirectory::default();
        let inventory: FakeInventory = FakeInventory::default();
        let ledger: FakeLedger = FakeLedger::default();
        let state: AppState = AppState {
            guests: Arc::new(directory.clone()),
            rooms: Arc::new(inventory.clone()),
            reservations: Arc::new(ledger.clone()),
        };
        (
            state,
            TestBackends {
                directory,
                inventory,
                ledger,
            },
        )
    }

    fn seed_guest(backends: &TestBackends) {
        backends.directory.guests.lock().unwrap().push(Guest::with_id(
            1,
            String::from("Ada Lovelace"),
            String::from("ada@example.com"),
            None,
            None,
        ));
    }

    fn seed_room(backends: &TestBackends) {
        backends.inventory.rooms.lock().unwrap().push(Room::with_id(
            1,
            String::from("204"),
            RoomType::Standard,
            100.0,
            RoomStatus::Available,
        ));
    }

    async fn send_json(
        app: Router,
        method: &str,
        uri: &str,
        body: serde_json::Value,
    ) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn send_get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_reservation_round_trips_through_listing() {
        let (state, backends) = create_test_backends();
        seed_guest(&backends);
        seed_room(&backends);
        let app: Router = build_router(state);

        let response = send_json(
            app.clone(),
            "POST",
            "/reservations",
            serde_json::json!({
                "guest_id": 1,
                "room_id": 1,
                "check_in_date": "2024-01-01",
                "check_out_date": "2024-01-04",
                "status": "CONFIRMED",
            }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let row: ReservationRow = read_json(response).await;
        assert_eq!(row.guest_id, 1);
        assert_eq!(row.room_id, 1);
        assert_eq!(row.status, "CONFIRMED");
        // 3 nights at 100.0
        assert_eq!(row.total_price, 300.0);

        let listing = send_get(app, "/reservations").await;
        assert_eq!(listing.status(), HttpStatusCode::OK);
        let rows: Vec<ReservationRow> = read_json(listing).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, row.id);
        assert_eq!(rows[0].status, "CONFIRMED");
    }

    #[tokio::test]
    async fn test_create_reservation_rejects_unavailable_room() {
        let (state, backends) = create_test_backends();
        seed_guest(&backends);
        // The inventory has no rooms at all.
        let app: Router = build_router(state);

        let response = send_json(
            app,
            "POST",
            "/reservations",
            serde_json::json!({
                "guest_id": 1,
                "room_id": 99,
                "check_in_date": "2024-01-01",
                "check_out_date": "2024-01-04",
            }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        assert!(backends.ledger.reservations.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_reservation_rejects_unknown_guest() {
        let (state, backends) = create_test_backends();
        seed_room(&backends);
        let app: Router = build_router(state);

        let response = send_json(
            app,
            "POST",
            "/reservations",
            serde_json::json!({
                "guest_id": 42,
                "room_id": 1,
                "check_in_date": "2024-01-01",
                "check_out_date": "2024-01-04",
            }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_reservation_rejects_inverted_dates() {
        let (state, backends) = create_test_backends();
        seed_guest(&backends);
        seed_room(&backends);
        let app: Router = build_router(state);

        let response = send_json(
            app,
            "POST",
            "/reservations",
            serde_json::json!({
                "guest_id": 1,
                "room_id": 1,
                "check_in_date": "2024-01-04",
                "check_out_date": "2024-01-01",
            }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        assert!(backends.ledger.reservations.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_reservation_pins_original_guest_and_room() {
        let (state, backends) = create_test_backends();
        backends.ledger.reservations.lock().unwrap().push(Reservation {
            reservation_id: Some(7),
            guest_id: 3,
            room_id: 12,
            stay: StayDates::new(date!(2024 - 05 - 01), date!(2024 - 05 - 04)).unwrap(),
            status: ReservationStatus::Confirmed,
            guest: None,
            room: None,
        });
        let app: Router = build_router(state);

        let response = send_json(
            app,
            "PUT",
            "/reservations/7",
            serde_json::json!({ "status": "CHECKED_IN" }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let row: ReservationRow = read_json(response).await;
        assert_eq!(row.status, "CHECKED_IN");

        let (patched_id, patch) = backends.ledger.last_patch.lock().unwrap().clone().unwrap();
        assert_eq!(patched_id, 7);
        assert_eq!(patch.guest_id, Some(3));
        assert_eq!(patch.room_id, Some(12));
    }

    #[tokio::test]
    async fn test_update_missing_reservation_is_not_found() {
        let (state, _backends) = create_test_backends();
        let app: Router = build_router(state);

        let response = send_json(
            app,
            "PUT",
            "/reservations/99",
            serde_json::json!({ "status": "CANCELLED" }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_reservation_reports_missing_as_not_found() {
        let (state, backends) = create_test_backends();
        backends.ledger.reservations.lock().unwrap().push(Reservation {
            reservation_id: Some(1),
            guest_id: 1,
            room_id: 1,
            stay: StayDates::new(date!(2024 - 05 - 01), date!(2024 - 05 - 02)).unwrap(),
            status: ReservationStatus::Pending,
            guest: None,
            room: None,
        });
        let app: Router = build_router(state);

        let deleted = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/reservations/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(deleted.status(), HttpStatusCode::OK);

        let missing = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/reservations/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(missing.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_guest_validates_fields_locally() {
        let (state, backends) = create_test_backends();
        let app: Router = build_router(state);

        let response = send_json(
            app,
            "POST",
            "/guests",
            serde_json::json!({
                "full_name": "",
                "email": "ada@example.com",
            }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        assert!(backends.directory.guests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_guest_crud_round_trip() {
        let (state, _backends) = create_test_backends();
        let app: Router = build_router(state);

        let created = send_json(
            app.clone(),
            "POST",
            "/guests",
            serde_json::json!({
                "full_name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "555-0100",
            }),
        )
        .await;
        assert_eq!(created.status(), HttpStatusCode::OK);
        let row: GuestRow = read_json(created).await;
        assert_eq!(row.id, 1);

        let updated = send_json(
            app.clone(),
            "PUT",
            "/guests/1",
            serde_json::json!({
                "full_name": "Ada King",
                "email": "ada@example.com",
            }),
        )
        .await;
        assert_eq!(updated.status(), HttpStatusCode::OK);
        let row: GuestRow = read_json(updated).await;
        assert_eq!(row.full_name, "Ada King");

        let listing = send_get(app, "/guests").await;
        let rows: Vec<GuestRow> = read_json(listing).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].full_name, "Ada King");
    }

    #[tokio::test]
    async fn test_available_rooms_requires_a_valid_range() {
        let (state, backends) = create_test_backends();
        seed_room(&backends);
        let app: Router = build_router(state);

        let bad_date = send_get(
            app.clone(),
            "/rooms/available?check_in=nonsense&check_out=2024-01-04",
        )
        .await;
        assert_eq!(bad_date.status(), HttpStatusCode::BAD_REQUEST);

        let inverted = send_get(
            app.clone(),
            "/rooms/available?check_in=2024-01-04&check_out=2024-01-01",
        )
        .await;
        assert_eq!(inverted.status(), HttpStatusCode::BAD_REQUEST);

        let valid = send_get(
            app,
            "/rooms/available?check_in=2024-01-01&check_out=2024-01-04",
        )
        .await;
        assert_eq!(valid.status(), HttpStatusCode::OK);
        let rows: Vec<RoomRow> = read_json(valid).await;
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_failing_service_maps_to_bad_gateway() {
        let (state, backends) = create_test_backends();
        *backends.inventory.fail_reads.lock().unwrap() = true;
        let app: Router = build_router(state);

        let response = send_get(
            app,
            "/rooms/available?check_in=2024-01-01&check_out=2024-01-04",
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_one_failing_service_does_not_break_other_sections() {
        let (state, backends) = create_test_backends();
        seed_guest(&backends);
        *backends.inventory.fail_reads.lock().unwrap() = true;
        let app: Router = build_router(state);

        // Rooms are down...
        let rooms = send_get(app.clone(), "/rooms").await;
        assert_eq!(rooms.status(), HttpStatusCode::BAD_GATEWAY);

        // ...but the guests section still answers.
        let guests = send_get(app, "/guests").await;
        assert_eq!(guests.status(), HttpStatusCode::OK);
        let rows: Vec<GuestRow> = read_json(guests).await;
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_dashboard_stats_compute_from_live_services() {
        let (state, backends) = create_test_backends();
        seed_guest(&backends);
        seed_room(&backends);
        backends.ledger.reservations.lock().unwrap().push(Reservation {
            reservation_id: Some(1),
            guest_id: 1,
            room_id: 1,
            stay: StayDates::new(date!(2024 - 05 - 01), date!(2024 - 05 - 04)).unwrap(),
            status: ReservationStatus::Pending,
            guest: None,
            room: None,
        });
        let app: Router = build_router(state);

        let response = send_get(app, "/dashboard/stats").await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let stats: DashboardStats = read_json(response).await;
        assert_eq!(stats.total_guests, 1);
        assert_eq!(stats.available_rooms, 1);
        assert_eq!(stats.active_reservations, 1);
        assert_eq!(stats.pending_reservations, 1);
    }

    #[tokio::test]
    async fn test_room_create_rejects_unknown_type() {
        let (state, _backends) = create_test_backends();
        let app: Router = build_router(state);

        let response = send_json(
            app,
            "POST",
            "/rooms",
            serde_json::json!({
                "room_number": "204",
                "room_type": "penthouse",
                "price_per_night": 500.0,
            }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }
}
