// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest visit lifecycle operations.

use std::str::FromStr;

use tracing::debug;
use vesta_domain::VisitSource;
use vesta_persistence::Persistence;

use crate::error::ApiError;
use crate::request_response::{GuestVisitResponse, RegisterVisitRequest};

/// Registers a guest visit. App and phone registrations start pending;
/// manual gate registrations start active with the entry time stamped.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown source, a blank plate or
/// guest name, or a zero-day duration.
pub fn register_visit(
    persistence: &mut Persistence,
    request: RegisterVisitRequest,
) -> Result<GuestVisitResponse, ApiError> {
    debug!(host_unit_id = request.host_unit_id, source = %request.source, "Registering guest visit");
    let source: VisitSource =
        VisitSource::from_str(&request.source).map_err(|_| ApiError::InvalidInput {
            field: String::from("source"),
            message: format!("Unknown visit source '{}'", request.source),
        })?;

    let visit = persistence.register_visit(
        &request.plate,
        &request.guest_name,
        request.host_resident_id,
        request.host_unit_id,
        request.expected_date,
        request.duration_days,
        source,
        request.note,
    )?;
    Ok(visit.into())
}

/// Retrieves a guest visit.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown visit.
pub fn get_visit(
    persistence: &mut Persistence,
    visit_id: i64,
) -> Result<GuestVisitResponse, ApiError> {
    let visit = persistence.get_visit(visit_id)?;
    Ok(visit.into())
}

/// Checks a pending visit in.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown visit and `InvalidState`
/// if the visit is not pending.
pub fn check_in(
    persistence: &mut Persistence,
    visit_id: i64,
) -> Result<GuestVisitResponse, ApiError> {
    debug!(visit_id, "Checking visit in");
    let visit = persistence.check_in_visit(visit_id)?;
    Ok(visit.into())
}

/// Checks an active visit out, releasing any held parking spot.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown visit and `InvalidState`
/// if the visit is not active.
pub fn check_out(
    persistence: &mut Persistence,
    visit_id: i64,
) -> Result<GuestVisitResponse, ApiError> {
    debug!(visit_id, "Checking visit out");
    let visit = persistence.check_out_visit(visit_id)?;
    Ok(visit.into())
}

/// Assigns a parking spot to an active visit.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown visit or spot,
/// `InvalidState` if the visit is not active, and `Conflict` if the
/// spot is occupied.
pub fn assign_parking(
    persistence: &mut Persistence,
    visit_id: i64,
    spot_id: i64,
) -> Result<GuestVisitResponse, ApiError> {
    debug!(visit_id, spot_id, "Assigning visit parking");
    let visit = persistence.assign_visit_parking(visit_id, spot_id)?;
    Ok(visit.into())
}
