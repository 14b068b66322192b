// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Facility catalog mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::Time;
use tracing::info;
use vesta_domain::{Facility, FacilityStatus, format_time, validate_facility_fields};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::NewFacility;
use crate::diesel_schema::facilities;
use crate::error::PersistenceError;
use crate::queries;

/// Inserts a new facility.
///
/// # Errors
///
/// Returns a domain error if the name is empty or the operating hours
/// window is invalid.
#[allow(clippy::too_many_arguments)]
pub fn insert_facility(
    conn: &mut SqliteConnection,
    name: &str,
    capacity: u32,
    requires_booking: bool,
    open_from: Time,
    open_until: Time,
    status: FacilityStatus,
    hourly_price_cents: i64,
    created_at: &str,
) -> Result<Facility, PersistenceError> {
    validate_facility_fields(name, open_from, open_until)?;

    let record = NewFacility {
        name: name.to_string(),
        capacity: i32::try_from(capacity)
            .map_err(|_| PersistenceError::Other(format!("Capacity out of range: {capacity}")))?,
        requires_booking: i32::from(requires_booking),
        open_from: format_time(open_from),
        open_until: format_time(open_until),
        status: status.as_str().to_string(),
        hourly_price_cents,
        created_at: created_at.to_string(),
    };

    diesel::insert_into(facilities::table)
        .values(&record)
        .execute(conn)?;
    let facility_id: i64 = get_last_insert_rowid(conn)?;

    info!(facility_id, name, "Created facility");
    queries::get_facility(conn, facility_id)
}

/// Updates a facility's operational status.
///
/// Facilities are never hard-deleted; retiring one is a status change
/// to `closed`.
///
/// # Errors
///
/// Returns `FacilityNotFound` for an unknown facility.
pub fn update_facility_status(
    conn: &mut SqliteConnection,
    facility_id: i64,
    status: FacilityStatus,
) -> Result<Facility, PersistenceError> {
    conn.transaction::<Facility, PersistenceError, _>(|conn| {
        // Existence check up front so an unknown id is a typed error,
        // not a zero-row update.
        let _: Facility = queries::get_facility(conn, facility_id)?;

        diesel::update(facilities::table.filter(facilities::facility_id.eq(facility_id)))
            .set(facilities::status.eq(status.as_str()))
            .execute(conn)?;

        info!(facility_id, status = %status, "Updated facility status");
        queries::get_facility(conn, facility_id)
    })
}
