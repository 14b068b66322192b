// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest visit lifecycle mutations.
//!
//! Registration creates both the occupant record for the guest vehicle
//! and the visit itself in one transaction; check-out stamps the exit
//! time and releases any held parking spot in one transaction.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::Date;
use tracing::info;
use vesta_domain::{
    DomainError, GuestVisit, OccupantKind, VisitSource, VisitStatus, validate_guest_registration,
};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{NewGuestVisit, NewOccupant};
use crate::diesel_schema::guest_visits;
use crate::error::PersistenceError;
use crate::mutations::parking::{assign_spot_in_tx, release_occupant_in_tx};
use crate::queries;

/// Registers a guest visit.
///
/// App- and phone-sourced visits start `pending`. Manual registration
/// models a walk-in already at the gate: the visit starts directly
/// `active` with the entry time stamped immediately.
///
/// # Errors
///
/// Returns a domain error if the plate or guest name is empty or the
/// duration is shorter than one day.
#[allow(clippy::too_many_arguments)]
pub fn insert_visit(
    conn: &mut SqliteConnection,
    plate: &str,
    guest_name: &str,
    host_resident_id: Option<i64>,
    host_unit_id: i64,
    expected_date: Date,
    duration_days: u16,
    source: VisitSource,
    note: Option<String>,
    now: &str,
) -> Result<GuestVisit, PersistenceError> {
    validate_guest_registration(plate, guest_name, i64::from(duration_days))?;

    conn.transaction::<GuestVisit, PersistenceError, _>(|conn| {
        let occupant = NewOccupant {
            kind: OccupantKind::Guest.as_str().to_string(),
            plate: plate.to_string(),
            model: None,
            owner_id: None,
            guest_name: Some(guest_name.to_string()),
            host_resident_id,
        };
        diesel::insert_into(crate::diesel_schema::occupants::table)
            .values(&occupant)
            .execute(conn)?;
        let occupant_id: i64 = get_last_insert_rowid(conn)?;

        let initial_status: VisitStatus = source.initial_status();
        let record = NewGuestVisit {
            occupant_id,
            plate: plate.to_string(),
            guest_name: guest_name.to_string(),
            host_resident_id,
            host_unit_id,
            status: initial_status.as_str().to_string(),
            source: source.as_str().to_string(),
            expected_date: expected_date.to_string(),
            duration_days: i32::from(duration_days),
            entry_time: (initial_status == VisitStatus::Active).then(|| now.to_string()),
            note,
            created_at: now.to_string(),
        };
        diesel::insert_into(guest_visits::table)
            .values(&record)
            .execute(conn)?;
        let visit_id: i64 = get_last_insert_rowid(conn)?;

        info!(
            visit_id,
            source = source.as_str(),
            status = initial_status.as_str(),
            "Registered guest visit"
        );
        queries::get_visit(conn, visit_id)
    })
}

/// Checks a pending visit in, stamping its entry time.
///
/// # Errors
///
/// Returns `VisitNotFound` or an invalid-transition domain error if the
/// visit is not pending.
pub fn check_in_visit(
    conn: &mut SqliteConnection,
    visit_id: i64,
    now: &str,
) -> Result<GuestVisit, PersistenceError> {
    conn.transaction::<GuestVisit, PersistenceError, _>(|conn| {
        let visit: GuestVisit = queries::get_visit(conn, visit_id)?;
        visit.status.validate_transition(VisitStatus::Active)?;

        diesel::update(guest_visits::table.filter(guest_visits::visit_id.eq(visit_id)))
            .set((
                guest_visits::status.eq(VisitStatus::Active.as_str()),
                guest_visits::entry_time.eq(Some(now.to_string())),
            ))
            .execute(conn)?;

        info!(visit_id, "Guest checked in");
        queries::get_visit(conn, visit_id)
    })
}

/// Checks an active visit out, stamping its exit time and releasing
/// any parking spot the visit held.
///
/// # Errors
///
/// Returns `VisitNotFound` or an invalid-transition domain error if the
/// visit is not active (a completed visit cannot be checked out again).
pub fn check_out_visit(
    conn: &mut SqliteConnection,
    visit_id: i64,
    now: &str,
) -> Result<GuestVisit, PersistenceError> {
    conn.transaction::<GuestVisit, PersistenceError, _>(|conn| {
        let visit: GuestVisit = queries::get_visit(conn, visit_id)?;
        visit.status.validate_transition(VisitStatus::Completed)?;

        diesel::update(guest_visits::table.filter(guest_visits::visit_id.eq(visit_id)))
            .set((
                guest_visits::status.eq(VisitStatus::Completed.as_str()),
                guest_visits::exit_time.eq(Some(now.to_string())),
            ))
            .execute(conn)?;

        // The spot goes back to the registry in the same transaction;
        // the visit keeps assigned_spot_id as a historical record.
        release_occupant_in_tx(conn, visit.occupant_id, now)?;

        info!(visit_id, "Guest checked out");
        queries::get_visit(conn, visit_id)
    })
}

/// Assigns a parking spot to an active visit.
///
/// # Errors
///
/// Returns `VisitNotFound`, a domain error if the visit is not active,
/// and `SpotNotFound`/`SpotOccupied` from the occupancy registry.
pub fn assign_visit_parking(
    conn: &mut SqliteConnection,
    visit_id: i64,
    spot_id: i64,
    now: &str,
) -> Result<GuestVisit, PersistenceError> {
    conn.transaction::<GuestVisit, PersistenceError, _>(|conn| {
        let visit: GuestVisit = queries::get_visit(conn, visit_id)?;
        if visit.status != VisitStatus::Active {
            return Err(PersistenceError::Domain(DomainError::VisitNotActive {
                status: visit.status.as_str().to_string(),
            }));
        }

        assign_spot_in_tx(conn, visit.occupant_id, spot_id, now)?;

        diesel::update(guest_visits::table.filter(guest_visits::visit_id.eq(visit_id)))
            .set(guest_visits::assigned_spot_id.eq(Some(spot_id)))
            .execute(conn)?;

        info!(visit_id, spot_id, "Assigned parking to guest visit");
        queries::get_visit(conn, visit_id)
    })
}
