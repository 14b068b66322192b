// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Facility catalog queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use vesta_domain::Facility;

use crate::data_models::FacilityRow;
use crate::diesel_schema::facilities;
use crate::error::PersistenceError;

/// Retrieves a facility by id.
///
/// # Errors
///
/// Returns `FacilityNotFound` for an unknown id.
pub fn get_facility(
    conn: &mut SqliteConnection,
    facility_id: i64,
) -> Result<Facility, PersistenceError> {
    facilities::table
        .filter(facilities::facility_id.eq(facility_id))
        .first::<FacilityRow>(conn)
        .optional()?
        .ok_or(PersistenceError::FacilityNotFound(facility_id))?
        .into_domain()
}

/// Lists all facilities, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_facilities(conn: &mut SqliteConnection) -> Result<Vec<Facility>, PersistenceError> {
    let rows: Vec<FacilityRow> = facilities::table
        .order(facilities::name.asc())
        .load::<FacilityRow>(conn)?;

    rows.into_iter().map(FacilityRow::into_domain).collect()
}
