// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy registry operations: spots, resident vehicles,
//! assignments and the floor snapshot.

use tracing::debug;
use vesta_domain::{OccupantKind, validate_vehicle_fields};
use vesta_persistence::Persistence;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AssignSpotRequest, CreateSpotRequest, FloorOccupancyResponse, OccupantResponse,
    ParkingSpotResponse, RegisterVehicleRequest, SpotOccupancyInfo,
};

/// Creates a parking spot.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty name and `Conflict` if the name
/// is taken on that floor of that building.
pub fn create_spot(
    persistence: &mut Persistence,
    request: &CreateSpotRequest,
) -> Result<ParkingSpotResponse, ApiError> {
    debug!(building_id = request.building_id, floor = request.floor, name = %request.name, "Creating parking spot");
    let spot = persistence.create_parking_spot(request.building_id, request.floor, &request.name)?;
    Ok(spot.into())
}

/// Registers a resident vehicle as an occupant.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty plate and `Internal` if the
/// store insert fails.
pub fn register_vehicle(
    persistence: &mut Persistence,
    request: RegisterVehicleRequest,
) -> Result<OccupantResponse, ApiError> {
    debug!(plate = %request.plate, owner_id = request.owner_id, "Registering resident vehicle");
    validate_vehicle_fields(&request.plate).map_err(translate_domain_error)?;

    let occupant = persistence.register_occupant(
        OccupantKind::Resident,
        &request.plate,
        request.model,
        Some(request.owner_id),
        None,
        None,
    )?;
    Ok(occupant.into())
}

/// Assigns a spot to an occupant. Idempotent for the holder; a move
/// when the occupant holds a different spot.
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown ids and `Conflict` if
/// another occupant holds the spot.
pub fn assign_spot(
    persistence: &mut Persistence,
    spot_id: i64,
    request: &AssignSpotRequest,
) -> Result<(), ApiError> {
    debug!(spot_id, occupant_id = request.occupant_id, "Assigning parking spot");
    persistence.assign_spot(request.occupant_id, spot_id)?;
    Ok(())
}

/// Releases whatever spot the occupant holds; a no-op for a holder of
/// nothing.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown occupant.
pub fn release_occupant(persistence: &mut Persistence, occupant_id: i64) -> Result<(), ApiError> {
    debug!(occupant_id, "Releasing occupant");
    persistence.release_occupant(occupant_id)?;
    Ok(())
}

/// Returns the active occupant of a spot, if any.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown spot.
pub fn occupant_of(
    persistence: &mut Persistence,
    spot_id: i64,
) -> Result<Option<OccupantResponse>, ApiError> {
    let occupant = persistence.occupant_of(spot_id)?;
    Ok(occupant.map(Into::into))
}

/// Returns the spot an occupant actively holds, if any.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown occupant.
pub fn spot_of(
    persistence: &mut Persistence,
    occupant_id: i64,
) -> Result<Option<ParkingSpotResponse>, ApiError> {
    let spot = persistence.spot_of(occupant_id)?;
    Ok(spot.map(Into::into))
}

/// Occupancy snapshot for one floor of one building, spots in name
/// order.
///
/// # Errors
///
/// Returns `Internal` if a store query fails.
pub fn floor_occupancy(
    persistence: &mut Persistence,
    building_id: i64,
    floor: i32,
) -> Result<FloorOccupancyResponse, ApiError> {
    let rows = persistence.floor_occupancy(building_id, floor)?;
    Ok(FloorOccupancyResponse {
        building_id,
        floor,
        spots: rows
            .into_iter()
            .map(|(spot, occupant)| SpotOccupancyInfo {
                spot: spot.into(),
                occupant: occupant.map(Into::into),
            })
            .collect(),
    })
}
