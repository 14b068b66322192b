// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Facility catalog operations.

use std::str::FromStr;

use tracing::debug;
use vesta_domain::FacilityStatus;
use vesta_persistence::Persistence;

use crate::error::ApiError;
use crate::request_response::{
    CreateFacilityRequest, FacilityResponse, UpdateFacilityStatusRequest,
};

/// Creates a facility.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown status, an empty name, or an
/// inverted operating-hours window.
pub fn create_facility(
    persistence: &mut Persistence,
    request: &CreateFacilityRequest,
) -> Result<FacilityResponse, ApiError> {
    debug!(name = %request.name, "Creating facility");
    let status: FacilityStatus = parse_status(&request.status)?;

    let facility = persistence.create_facility(
        &request.name,
        request.capacity,
        request.requires_booking,
        request.open_from,
        request.open_until,
        status,
        request.hourly_price_cents,
    )?;
    Ok(facility.into())
}

/// Retrieves a facility.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown facility.
pub fn get_facility(
    persistence: &mut Persistence,
    facility_id: i64,
) -> Result<FacilityResponse, ApiError> {
    let facility = persistence.get_facility(facility_id)?;
    Ok(facility.into())
}

/// Lists all facilities, ordered by name.
///
/// # Errors
///
/// Returns `Internal` if the store query fails.
pub fn list_facilities(persistence: &mut Persistence) -> Result<Vec<FacilityResponse>, ApiError> {
    let facilities = persistence.list_facilities()?;
    Ok(facilities.into_iter().map(Into::into).collect())
}

/// Updates a facility's operational status.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown status and `ResourceNotFound`
/// for an unknown facility.
pub fn update_facility_status(
    persistence: &mut Persistence,
    facility_id: i64,
    request: &UpdateFacilityStatusRequest,
) -> Result<FacilityResponse, ApiError> {
    debug!(facility_id, status = %request.status, "Updating facility status");
    let status: FacilityStatus = parse_status(&request.status)?;
    let facility = persistence.update_facility_status(facility_id, status)?;
    Ok(facility.into())
}

fn parse_status(value: &str) -> Result<FacilityStatus, ApiError> {
    FacilityStatus::from_str(value).map_err(|_| ApiError::InvalidInput {
        field: String::from("status"),
        message: format!("Unknown facility status '{value}'"),
    })
}
