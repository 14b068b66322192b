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
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, Time};
use tokio::sync::Mutex;
use tracing::info;
use vesta_api::{
    ApiError, AssignSpotRequest, BookingResponse, CreateFacilityRequest, CreateSpotRequest,
    DeclineBookingRequest, FacilityResponse, FloorOccupancyResponse, GuestVisitResponse,
    OccupantResponse, ParkingSpotResponse, RegisterVehicleRequest, RegisterVisitRequest,
    RequestBookingRequest, UpdateFacilityStatusRequest, WeekGridResponse, translate_domain_error,
};
use vesta_domain::{HourRange, parse_date, parse_time};
use vesta_persistence::Persistence;

/// Vesta Server - HTTP server for the residential site reservation and
/// occupancy core
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the reservation and occupancy store.
    persistence: Arc<Mutex<Persistence>>,
}

/// API request for creating a facility.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateFacilityApiRequest {
    /// The facility's display name.
    name: String,
    /// The maximum number of simultaneous users.
    capacity: u32,
    /// Whether use requires a booking.
    requires_booking: bool,
    /// Daily opening time ("HH:MM").
    open_from: String,
    /// Daily closing time ("HH:MM").
    open_until: String,
    /// The operational status (open, closed, maintenance).
    status: String,
    /// Price per booked hour, in cents.
    hourly_price_cents: i64,
}

/// API request for updating a facility's status.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateFacilityStatusApiRequest {
    /// The new status (open, closed, maintenance).
    status: String,
}

/// API request for filing a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RequestBookingApiRequest {
    /// The requesting resident.
    booker_id: i64,
    /// The requested date ("YYYY-MM-DD").
    date: String,
    /// Slot start, inclusive ("HH:MM").
    start_time: String,
    /// Slot end, exclusive ("HH:MM").
    end_time: String,
    /// Free-form note for the approver.
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

/// API request for declining a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct DeclineBookingApiRequest {
    /// The reason shown to the requester. Required.
    reason: String,
}

/// Query parameters for listing a facility's bookings.
#[derive(Debug, Clone, Deserialize)]
struct ListBookingsQuery {
    /// Range start ("YYYY-MM-DD"), inclusive.
    from: String,
    /// Range end ("YYYY-MM-DD"), inclusive.
    to: String,
}

/// Query parameters for the weekly calendar.
#[derive(Debug, Clone, Deserialize)]
struct CalendarQuery {
    /// Any date within the requested week ("YYYY-MM-DD"). Defaults to
    /// today.
    week: Option<String>,
}

/// API request for creating a parking spot.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateSpotApiRequest {
    /// The building the spot belongs to.
    building_id: i64,
    /// The floor (negative for basement levels).
    floor: i32,
    /// The spot's display name, unique per building and floor.
    name: String,
}

/// API request for assigning a spot to an occupant.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AssignSpotApiRequest {
    /// The occupant taking the spot.
    occupant_id: i64,
}

/// API request for registering a resident vehicle.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RegisterVehicleApiRequest {
    /// The vehicle's license plate.
    plate: String,
    /// The vehicle model, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    /// The owning resident.
    owner_id: i64,
}

/// API request for registering a guest visit.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RegisterVisitApiRequest {
    /// The guest vehicle's license plate.
    plate: String,
    /// The guest's name.
    guest_name: String,
    /// The hosting resident, if registered through a resident account.
    #[serde(skip_serializing_if = "Option::is_none")]
    host_resident_id: Option<i64>,
    /// The unit being visited.
    host_unit_id: i64,
    /// The expected arrival date ("YYYY-MM-DD").
    expected_date: String,
    /// The expected stay length in days, at least one.
    duration_days: u16,
    /// How the visit was registered (app, manual, phone).
    source: String,
    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

/// API request for assigning parking to a guest visit.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AssignVisitParkingApiRequest {
    /// The spot to assign.
    spot_id: i64,
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
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidState { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Parses a "YYYY-MM-DD" request field.
fn parse_date_field(value: &str) -> Result<Date, HttpError> {
    parse_date(value)
        .map_err(translate_domain_error)
        .map_err(Into::into)
}

/// Parses an "HH:MM" request field.
fn parse_time_field(value: &str) -> Result<Time, HttpError> {
    parse_time(value)
        .map_err(translate_domain_error)
        .map_err(Into::into)
}

/// Handler for POST `/facilities` endpoint.
///
/// Creates a facility.
async fn handle_create_facility(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateFacilityApiRequest>,
) -> Result<(StatusCode, Json<FacilityResponse>), HttpError> {
    info!(name = %req.name, "Handling create_facility request");

    let open_from: Time = parse_time_field(&req.open_from)?;
    let open_until: Time = parse_time_field(&req.open_until)?;

    let request: CreateFacilityRequest = CreateFacilityRequest {
        name: req.name,
        capacity: req.capacity,
        requires_booking: req.requires_booking,
        open_from,
        open_until,
        status: req.status,
        hourly_price_cents: req.hourly_price_cents,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: FacilityResponse = vesta_api::create_facility(&mut persistence, &request)?;
    drop(persistence);

    info!(facility_id = response.facility_id, "Created facility");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/facilities` endpoint.
///
/// Lists all facilities.
async fn handle_list_facilities(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<FacilityResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<FacilityResponse> = vesta_api::list_facilities(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/facilities/{facility_id}` endpoint.
async fn handle_get_facility(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<i64>,
) -> Result<Json<FacilityResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: FacilityResponse = vesta_api::get_facility(&mut persistence, facility_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/facilities/{facility_id}/status` endpoint.
///
/// Updates a facility's operational status.
async fn handle_update_facility_status(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<i64>,
    Json(req): Json<UpdateFacilityStatusApiRequest>,
) -> Result<Json<FacilityResponse>, HttpError> {
    info!(facility_id, status = %req.status, "Handling update_facility_status request");

    let request: UpdateFacilityStatusRequest = UpdateFacilityStatusRequest { status: req.status };

    let mut persistence = app_state.persistence.lock().await;
    let response: FacilityResponse =
        vesta_api::update_facility_status(&mut persistence, facility_id, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/facilities/{facility_id}/bookings` endpoint.
///
/// Files a booking request for a facility.
async fn handle_request_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<i64>,
    Json(req): Json<RequestBookingApiRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), HttpError> {
    info!(
        facility_id,
        booker_id = req.booker_id,
        date = %req.date,
        "Handling request_booking request"
    );

    let request: RequestBookingRequest = RequestBookingRequest {
        booker_id: req.booker_id,
        date: parse_date_field(&req.date)?,
        start_time: parse_time_field(&req.start_time)?,
        end_time: parse_time_field(&req.end_time)?,
        note: req.note,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse =
        vesta_api::request_booking(&mut persistence, facility_id, request)?;
    drop(persistence);

    info!(booking_id = response.booking_id, "Admitted pending booking");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/facilities/{facility_id}/bookings` endpoint.
///
/// Lists a facility's bookings in an inclusive date range.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<i64>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, HttpError> {
    let from: Date = parse_date_field(&query.from)?;
    let to: Date = parse_date_field(&query.to)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<BookingResponse> =
        vesta_api::list_bookings(&mut persistence, facility_id, from, to)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/facilities/{facility_id}/calendar` endpoint.
///
/// Projects the facility's bookings onto the weekly grid for the week
/// containing the `week` query date (today when omitted).
async fn handle_week_calendar(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<i64>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<WeekGridResponse>, HttpError> {
    let anchor: Date = match query.week {
        Some(ref value) => parse_date_field(value)?,
        None => time::OffsetDateTime::now_utc().date(),
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: WeekGridResponse =
        vesta_api::week_calendar(&mut persistence, facility_id, anchor, HourRange::default())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/bookings/{booking_id}` endpoint.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse = vesta_api::get_booking(&mut persistence, booking_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/approve` endpoint.
async fn handle_approve_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(booking_id, "Handling approve_booking request");

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse = vesta_api::approve_booking(&mut persistence, booking_id)?;
    drop(persistence);

    info!(booking_id, "Confirmed booking");
    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/decline` endpoint.
async fn handle_decline_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<DeclineBookingApiRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(booking_id, "Handling decline_booking request");

    let request: DeclineBookingRequest = DeclineBookingRequest { reason: req.reason };

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse =
        vesta_api::decline_booking(&mut persistence, booking_id, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/cancel` endpoint.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(booking_id, "Handling cancel_booking request");

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse = vesta_api::cancel_booking(&mut persistence, booking_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/parking-spots` endpoint.
///
/// Creates a parking spot.
async fn handle_create_spot(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateSpotApiRequest>,
) -> Result<(StatusCode, Json<ParkingSpotResponse>), HttpError> {
    info!(
        building_id = req.building_id,
        floor = req.floor,
        name = %req.name,
        "Handling create_spot request"
    );

    let request: CreateSpotRequest = CreateSpotRequest {
        building_id: req.building_id,
        floor: req.floor,
        name: req.name,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: ParkingSpotResponse = vesta_api::create_spot(&mut persistence, &request)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/parking-spots/{spot_id}/assign` endpoint.
///
/// Assigns the spot to an occupant.
async fn handle_assign_spot(
    AxumState(app_state): AxumState<AppState>,
    Path(spot_id): Path<i64>,
    Json(req): Json<AssignSpotApiRequest>,
) -> Result<StatusCode, HttpError> {
    info!(spot_id, occupant_id = req.occupant_id, "Handling assign_spot request");

    let request: AssignSpotRequest = AssignSpotRequest {
        occupant_id: req.occupant_id,
    };

    let mut persistence = app_state.persistence.lock().await;
    vesta_api::assign_spot(&mut persistence, spot_id, &request)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/parking-spots/{spot_id}/occupant` endpoint.
///
/// Returns the active occupant of the spot, if any.
async fn handle_occupant_of(
    AxumState(app_state): AxumState<AppState>,
    Path(spot_id): Path<i64>,
) -> Result<Json<Option<OccupantResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Option<OccupantResponse> = vesta_api::occupant_of(&mut persistence, spot_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/occupants/{occupant_id}/release` endpoint.
///
/// Releases whatever spot the occupant holds.
async fn handle_release_occupant(
    AxumState(app_state): AxumState<AppState>,
    Path(occupant_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    info!(occupant_id, "Handling release_occupant request");

    let mut persistence = app_state.persistence.lock().await;
    vesta_api::release_occupant(&mut persistence, occupant_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/occupants/{occupant_id}/spot` endpoint.
///
/// Returns the spot the occupant actively holds, if any.
async fn handle_spot_of(
    AxumState(app_state): AxumState<AppState>,
    Path(occupant_id): Path<i64>,
) -> Result<Json<Option<ParkingSpotResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Option<ParkingSpotResponse> =
        vesta_api::spot_of(&mut persistence, occupant_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/buildings/{building_id}/floors/{floor}/occupancy`
/// endpoint.
///
/// Returns the occupancy snapshot for one floor of one building.
async fn handle_floor_occupancy(
    AxumState(app_state): AxumState<AppState>,
    Path((building_id, floor)): Path<(i64, i32)>,
) -> Result<Json<FloorOccupancyResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: FloorOccupancyResponse =
        vesta_api::floor_occupancy(&mut persistence, building_id, floor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/vehicles` endpoint.
///
/// Registers a resident vehicle as an occupant.
async fn handle_register_vehicle(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterVehicleApiRequest>,
) -> Result<(StatusCode, Json<OccupantResponse>), HttpError> {
    info!(plate = %req.plate, owner_id = req.owner_id, "Handling register_vehicle request");

    let request: RegisterVehicleRequest = RegisterVehicleRequest {
        plate: req.plate,
        model: req.model,
        owner_id: req.owner_id,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: OccupantResponse = vesta_api::register_vehicle(&mut persistence, request)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/guest-visits` endpoint.
///
/// Registers a guest visit.
async fn handle_register_visit(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterVisitApiRequest>,
) -> Result<(StatusCode, Json<GuestVisitResponse>), HttpError> {
    info!(
        plate = %req.plate,
        host_unit_id = req.host_unit_id,
        source = %req.source,
        "Handling register_visit request"
    );

    let request: RegisterVisitRequest = RegisterVisitRequest {
        plate: req.plate,
        guest_name: req.guest_name,
        host_resident_id: req.host_resident_id,
        host_unit_id: req.host_unit_id,
        expected_date: parse_date_field(&req.expected_date)?,
        duration_days: req.duration_days,
        source: req.source,
        note: req.note,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: GuestVisitResponse = vesta_api::register_visit(&mut persistence, request)?;
    drop(persistence);

    info!(visit_id = response.visit_id, "Registered guest visit");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/guest-visits/{visit_id}` endpoint.
async fn handle_get_visit(
    AxumState(app_state): AxumState<AppState>,
    Path(visit_id): Path<i64>,
) -> Result<Json<GuestVisitResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: GuestVisitResponse = vesta_api::get_visit(&mut persistence, visit_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/guest-visits/{visit_id}/check-in` endpoint.
async fn handle_check_in_visit(
    AxumState(app_state): AxumState<AppState>,
    Path(visit_id): Path<i64>,
) -> Result<Json<GuestVisitResponse>, HttpError> {
    info!(visit_id, "Handling check_in request");

    let mut persistence = app_state.persistence.lock().await;
    let response: GuestVisitResponse = vesta_api::check_in(&mut persistence, visit_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/guest-visits/{visit_id}/check-out` endpoint.
async fn handle_check_out_visit(
    AxumState(app_state): AxumState<AppState>,
    Path(visit_id): Path<i64>,
) -> Result<Json<GuestVisitResponse>, HttpError> {
    info!(visit_id, "Handling check_out request");

    let mut persistence = app_state.persistence.lock().await;
    let response: GuestVisitResponse = vesta_api::check_out(&mut persistence, visit_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/guest-visits/{visit_id}/assign-parking` endpoint.
async fn handle_assign_visit_parking(
    AxumState(app_state): AxumState<AppState>,
    Path(visit_id): Path<i64>,
    Json(req): Json<AssignVisitParkingApiRequest>,
) -> Result<Json<GuestVisitResponse>, HttpError> {
    info!(visit_id, spot_id = req.spot_id, "Handling assign_parking request");

    let mut persistence = app_state.persistence.lock().await;
    let response: GuestVisitResponse =
        vesta_api::assign_parking(&mut persistence, visit_id, req.spot_id)?;
    drop(persistence);

    Ok(Json(response))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/facilities", post(handle_create_facility))
        .route("/facilities", get(handle_list_facilities))
        .route("/facilities/{facility_id}", get(handle_get_facility))
        .route(
            "/facilities/{facility_id}/status",
            post(handle_update_facility_status),
        )
        .route(
            "/facilities/{facility_id}/bookings",
            post(handle_request_booking),
        )
        .route(
            "/facilities/{facility_id}/bookings",
            get(handle_list_bookings),
        )
        .route(
            "/facilities/{facility_id}/calendar",
            get(handle_week_calendar),
        )
        .route("/bookings/{booking_id}", get(handle_get_booking))
        .route("/bookings/{booking_id}/approve", post(handle_approve_booking))
        .route("/bookings/{booking_id}/decline", post(handle_decline_booking))
        .route("/bookings/{booking_id}/cancel", post(handle_cancel_booking))
        .route("/parking-spots", post(handle_create_spot))
        .route("/parking-spots/{spot_id}/assign", post(handle_assign_spot))
        .route("/parking-spots/{spot_id}/occupant", get(handle_occupant_of))
        .route(
            "/occupants/{occupant_id}/release",
            post(handle_release_occupant),
        )
        .route("/occupants/{occupant_id}/spot", get(handle_spot_of))
        .route(
            "/buildings/{building_id}/floors/{floor}/occupancy",
            get(handle_floor_occupancy),
        )
        .route("/vehicles", post(handle_register_vehicle))
        .route("/guest-visits", post(handle_register_visit))
        .route("/guest-visits/{visit_id}", get(handle_get_visit))
        .route(
            "/guest-visits/{visit_id}/check-in",
            post(handle_check_in_visit),
        )
        .route(
            "/guest-visits/{visit_id}/check-out",
            post(handle_check_out_visit),
        )
        .route(
            "/guest-visits/{visit_id}/assign-parking",
            post(handle_assign_visit_parking),
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

    info!("Initializing Vesta Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
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
