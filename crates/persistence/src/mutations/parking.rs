// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parking spot and occupancy mutations.
//!
//! The occupancy registry invariant: a spot is held by at most one
//! active occupant, and an occupant holds at most one active spot.
//! `assign_spot` enforces it transactionally, with partial unique
//! indexes on active assignments as a store-level backstop.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use tracing::{debug, info};
use vesta_domain::{Occupant, OccupantKind, ParkingSpot, validate_spot_fields};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{NewOccupant, NewParkingSpot, NewSpotAssignment, SpotAssignmentRow};
use crate::diesel_schema::spot_assignments;
use crate::error::PersistenceError;
use crate::queries;

/// Inserts a new parking spot.
///
/// # Errors
///
/// Returns a domain error for an empty name and `DuplicateSpotName` if
/// the name is already taken on that floor of that building.
pub fn insert_spot(
    conn: &mut SqliteConnection,
    building_id: i64,
    floor: i32,
    name: &str,
) -> Result<ParkingSpot, PersistenceError> {
    validate_spot_fields(name)?;

    let record = NewParkingSpot {
        building_id,
        floor,
        name: name.to_string(),
    };

    diesel::insert_into(crate::diesel_schema::parking_spots::table)
        .values(&record)
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                PersistenceError::DuplicateSpotName {
                    building_id,
                    floor,
                    name: name.to_string(),
                }
            }
            other => other.into(),
        })?;
    let spot_id: i64 = get_last_insert_rowid(conn)?;

    info!(spot_id, building_id, floor, name, "Created parking spot");
    queries::get_spot(conn, spot_id)
}

/// Inserts a new occupant (a resident or guest vehicle).
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_occupant(
    conn: &mut SqliteConnection,
    kind: OccupantKind,
    plate: &str,
    model: Option<String>,
    owner_id: Option<i64>,
    guest_name: Option<String>,
    host_resident_id: Option<i64>,
) -> Result<Occupant, PersistenceError> {
    let record = NewOccupant {
        kind: kind.as_str().to_string(),
        plate: plate.to_string(),
        model,
        owner_id,
        guest_name,
        host_resident_id,
    };

    diesel::insert_into(crate::diesel_schema::occupants::table)
        .values(&record)
        .execute(conn)?;
    let occupant_id: i64 = get_last_insert_rowid(conn)?;

    info!(occupant_id, kind = kind.as_str(), "Registered occupant");
    queries::get_occupant(conn, occupant_id)
}

/// Assigns an occupant to a parking spot.
///
/// Re-assigning the same occupant to the spot it already holds is a
/// no-op. Assigning an occupant that holds a different spot releases
/// that spot in the same transaction (a move).
///
/// # Errors
///
/// Returns `SpotNotFound` or `OccupantNotFound` for unknown ids, and
/// `SpotOccupied` if another active occupant already holds the spot.
pub fn assign_spot(
    conn: &mut SqliteConnection,
    occupant_id: i64,
    spot_id: i64,
    assigned_at: &str,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        assign_spot_in_tx(conn, occupant_id, spot_id, assigned_at)
    })
}

/// The assignment body, for callers that already hold a transaction.
pub(crate) fn assign_spot_in_tx(
    conn: &mut SqliteConnection,
    occupant_id: i64,
    spot_id: i64,
    assigned_at: &str,
) -> Result<(), PersistenceError> {
    let _: ParkingSpot = queries::get_spot(conn, spot_id)?;
    let _: Occupant = queries::get_occupant(conn, occupant_id)?;

    let current: Option<SpotAssignmentRow> = spot_assignments::table
        .filter(spot_assignments::spot_id.eq(spot_id))
        .filter(spot_assignments::released_at.is_null())
        .first::<SpotAssignmentRow>(conn)
        .optional()?;

    if let Some(assignment) = current {
        if assignment.occupant_id == occupant_id {
            debug!(occupant_id, spot_id, "Occupant already holds this spot");
            return Ok(());
        }
        return Err(PersistenceError::SpotOccupied { spot_id });
    }

    // A move: release whatever the occupant held before taking the new
    // spot, inside the same transaction.
    let released: usize = diesel::update(
        spot_assignments::table
            .filter(spot_assignments::occupant_id.eq(occupant_id))
            .filter(spot_assignments::released_at.is_null()),
    )
    .set(spot_assignments::released_at.eq(Some(assigned_at.to_string())))
    .execute(conn)?;
    if released > 0 {
        debug!(occupant_id, "Released previously held spot before move");
    }

    let record = NewSpotAssignment {
        spot_id,
        occupant_id,
        assigned_at: assigned_at.to_string(),
    };
    diesel::insert_into(spot_assignments::table)
        .values(&record)
        .execute(conn)?;

    info!(occupant_id, spot_id, "Assigned parking spot");
    Ok(())
}

/// Releases whatever spot the occupant currently holds.
///
/// A no-op when the occupant holds nothing.
///
/// # Errors
///
/// Returns `OccupantNotFound` for an unknown occupant.
pub fn release_occupant(
    conn: &mut SqliteConnection,
    occupant_id: i64,
    released_at: &str,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        let _: Occupant = queries::get_occupant(conn, occupant_id)?;
        release_occupant_in_tx(conn, occupant_id, released_at)
    })
}

/// The release body, for callers that already hold a transaction.
pub(crate) fn release_occupant_in_tx(
    conn: &mut SqliteConnection,
    occupant_id: i64,
    released_at: &str,
) -> Result<(), PersistenceError> {
    let released: usize = diesel::update(
        spot_assignments::table
            .filter(spot_assignments::occupant_id.eq(occupant_id))
            .filter(spot_assignments::released_at.is_null()),
    )
    .set(spot_assignments::released_at.eq(Some(released_at.to_string())))
    .execute(conn)?;

    if released > 0 {
        info!(occupant_id, "Released parking spot");
    } else {
        debug!(occupant_id, "Release was a no-op: nothing held");
    }
    Ok(())
}
