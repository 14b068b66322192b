// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parking spot and occupancy queries.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use vesta_domain::{Occupant, ParkingSpot};

use crate::data_models::{OccupantRow, ParkingSpotRow, SpotAssignmentRow};
use crate::diesel_schema::{occupants, parking_spots, spot_assignments};
use crate::error::PersistenceError;

/// Retrieves a parking spot by id.
///
/// # Errors
///
/// Returns `SpotNotFound` for an unknown id.
pub fn get_spot(conn: &mut SqliteConnection, spot_id: i64) -> Result<ParkingSpot, PersistenceError> {
    Ok(parking_spots::table
        .filter(parking_spots::spot_id.eq(spot_id))
        .first::<ParkingSpotRow>(conn)
        .optional()?
        .ok_or(PersistenceError::SpotNotFound(spot_id))?
        .into_domain())
}

/// Retrieves an occupant by id.
///
/// # Errors
///
/// Returns `OccupantNotFound` for an unknown id.
pub fn get_occupant(
    conn: &mut SqliteConnection,
    occupant_id: i64,
) -> Result<Occupant, PersistenceError> {
    occupants::table
        .filter(occupants::occupant_id.eq(occupant_id))
        .first::<OccupantRow>(conn)
        .optional()?
        .ok_or(PersistenceError::OccupantNotFound(occupant_id))?
        .into_domain()
}

/// Returns the active occupant of a spot, or `None` if the spot is
/// free.
///
/// # Errors
///
/// Returns `SpotNotFound` for an unknown spot.
pub fn occupant_of(
    conn: &mut SqliteConnection,
    spot_id: i64,
) -> Result<Option<Occupant>, PersistenceError> {
    let _ = get_spot(conn, spot_id)?;

    let active: Option<SpotAssignmentRow> = spot_assignments::table
        .filter(spot_assignments::spot_id.eq(spot_id))
        .filter(spot_assignments::released_at.is_null())
        .first::<SpotAssignmentRow>(conn)
        .optional()?;

    match active {
        Some(assignment) => Ok(Some(get_occupant(conn, assignment.occupant_id)?)),
        None => Ok(None),
    }
}

/// Returns the spot an occupant actively holds, or `None`.
///
/// # Errors
///
/// Returns `OccupantNotFound` for an unknown occupant.
pub fn spot_of(
    conn: &mut SqliteConnection,
    occupant_id: i64,
) -> Result<Option<ParkingSpot>, PersistenceError> {
    let _ = get_occupant(conn, occupant_id)?;

    let active: Option<SpotAssignmentRow> = spot_assignments::table
        .filter(spot_assignments::occupant_id.eq(occupant_id))
        .filter(spot_assignments::released_at.is_null())
        .first::<SpotAssignmentRow>(conn)
        .optional()?;

    match active {
        Some(assignment) => Ok(Some(get_spot(conn, assignment.spot_id)?)),
        None => Ok(None),
    }
}

/// Full occupancy snapshot for one floor of one building, for the
/// visual map. Spots with no active occupant are returned with `None`.
///
/// Assembled from two queries and merged in Rust rather than a
/// filtered join; the floor's spot count is small.
///
/// # Errors
///
/// Returns an error if a query fails.
pub fn floor_occupancy(
    conn: &mut SqliteConnection,
    building_id: i64,
    floor: i32,
) -> Result<Vec<(ParkingSpot, Option<Occupant>)>, PersistenceError> {
    let spots: Vec<ParkingSpotRow> = parking_spots::table
        .filter(parking_spots::building_id.eq(building_id))
        .filter(parking_spots::floor.eq(floor))
        .order(parking_spots::name.asc())
        .load::<ParkingSpotRow>(conn)?;

    let spot_ids: Vec<i64> = spots.iter().map(|s| s.spot_id).collect();
    let active: Vec<(SpotAssignmentRow, OccupantRow)> = spot_assignments::table
        .inner_join(occupants::table)
        .filter(spot_assignments::spot_id.eq_any(&spot_ids))
        .filter(spot_assignments::released_at.is_null())
        .load::<(SpotAssignmentRow, OccupantRow)>(conn)?;

    let mut by_spot: HashMap<i64, OccupantRow> = active
        .into_iter()
        .map(|(assignment, occupant)| (assignment.spot_id, occupant))
        .collect();

    spots
        .into_iter()
        .map(|spot_row| {
            let occupant: Option<Occupant> = by_spot
                .remove(&spot_row.spot_id)
                .map(OccupantRow::into_domain)
                .transpose()?;
            Ok((spot_row.into_domain(), occupant))
        })
        .collect()
}
