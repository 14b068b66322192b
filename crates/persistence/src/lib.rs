// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Vesta residential site core.
//!
//! This crate provides the durable store for facilities, bookings,
//! parking spots, occupants and guest visits. It is built on Diesel
//! with a `SQLite` backend: in-memory databases for development and
//! tests, file-based databases (with WAL) for deployment.
//!
//! The two scheduling invariants of the system are enforced here,
//! inside store transactions:
//!
//! - **No-overlap**: for a `(facility, date)` pair, no two pending or
//!   confirmed bookings overlap under half-open interval semantics. The
//!   conflict query and the insert (or the approval status flip) are
//!   one transaction.
//! - **Occupancy uniqueness**: a parking spot has at most one active
//!   occupant, and an occupant holds at most one active spot. The
//!   check-current-holder-then-assign sequence is one transaction,
//!   backed by partial unique indexes on active assignments.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use vesta_domain::{
    Booking, Facility, FacilityStatus, GuestVisit, Occupant, OccupantKind, ParkingSpot, TimeSlot,
    VisitSource,
};

static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Persistence adapter for the reservation and occupancy store.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via atomic
    /// counter, ensuring deterministic test isolation without
    /// time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_vesta_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or
    /// initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // WAL for better read concurrency on file databases
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Facility catalog
    // ========================================================================

    /// Creates a facility.
    ///
    /// # Errors
    ///
    /// Returns a domain error for an empty name or an invalid
    /// operating-hours window.
    #[allow(clippy::too_many_arguments)]
    pub fn create_facility(
        &mut self,
        name: &str,
        capacity: u32,
        requires_booking: bool,
        open_from: time::Time,
        open_until: time::Time,
        status: FacilityStatus,
        hourly_price_cents: i64,
    ) -> Result<Facility, PersistenceError> {
        let now: String = now_utc_string()?;
        mutations::insert_facility(
            &mut self.conn,
            name,
            capacity,
            requires_booking,
            open_from,
            open_until,
            status,
            hourly_price_cents,
            &now,
        )
    }

    /// Retrieves a facility by id.
    ///
    /// # Errors
    ///
    /// Returns `FacilityNotFound` for an unknown id.
    pub fn get_facility(&mut self, facility_id: i64) -> Result<Facility, PersistenceError> {
        queries::get_facility(&mut self.conn, facility_id)
    }

    /// Lists all facilities, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_facilities(&mut self) -> Result<Vec<Facility>, PersistenceError> {
        queries::list_facilities(&mut self.conn)
    }

    /// Updates a facility's operational status.
    ///
    /// # Errors
    ///
    /// Returns `FacilityNotFound` for an unknown id.
    pub fn update_facility_status(
        &mut self,
        facility_id: i64,
        status: FacilityStatus,
    ) -> Result<Facility, PersistenceError> {
        mutations::update_facility_status(&mut self.conn, facility_id, status)
    }

    // ========================================================================
    // Booking ledger
    // ========================================================================

    /// Admits a booking request as a new pending booking, enforcing
    /// the no-overlap invariant.
    ///
    /// # Errors
    ///
    /// Returns `FacilityNotFound`, a precondition domain error, or
    /// `BookingConflict` if the slot overlaps an existing pending or
    /// confirmed booking.
    pub fn request_booking(
        &mut self,
        facility_id: i64,
        booker_id: i64,
        date: time::Date,
        slot: TimeSlot,
        note: Option<String>,
    ) -> Result<Booking, PersistenceError> {
        let now: String = now_utc_string()?;
        mutations::insert_booking_checked(
            &mut self.conn,
            facility_id,
            booker_id,
            date,
            slot,
            note,
            &now,
        )
    }

    /// Approves a pending booking, re-validating the no-overlap
    /// invariant. On a late conflict the booking stays pending.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound`, an invalid-transition domain error,
    /// or `BookingConflict`.
    pub fn approve_booking(&mut self, booking_id: i64) -> Result<Booking, PersistenceError> {
        mutations::approve_booking(&mut self.conn, booking_id)
    }

    /// Declines a pending booking with a required reason.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound`, `EmptyDeclineReason`, or an
    /// invalid-transition domain error.
    pub fn decline_booking(
        &mut self,
        booking_id: i64,
        reason: &str,
    ) -> Result<Booking, PersistenceError> {
        mutations::decline_booking(&mut self.conn, booking_id, reason)
    }

    /// Cancels a pending or confirmed booking at the resident's
    /// request.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` or an invalid-transition domain error.
    pub fn cancel_booking(&mut self, booking_id: i64) -> Result<Booking, PersistenceError> {
        mutations::cancel_booking(&mut self.conn, booking_id)
    }

    /// Retrieves a booking by id.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` for an unknown id.
    pub fn get_booking(&mut self, booking_id: i64) -> Result<Booking, PersistenceError> {
        queries::get_booking(&mut self.conn, booking_id)
    }

    /// Lists a facility's bookings in an inclusive date range, ordered
    /// by date then start time.
    ///
    /// # Errors
    ///
    /// Returns `FacilityNotFound` for an unknown facility.
    pub fn list_bookings_for_facility(
        &mut self,
        facility_id: i64,
        from: time::Date,
        to: time::Date,
    ) -> Result<Vec<Booking>, PersistenceError> {
        queries::list_bookings_for_facility(&mut self.conn, facility_id, from, to)
    }

    // ========================================================================
    // Parking & occupancy registry
    // ========================================================================

    /// Creates a parking spot.
    ///
    /// # Errors
    ///
    /// Returns a domain error for an empty name or `DuplicateSpotName`
    /// if the name is taken on that floor of that building.
    pub fn create_parking_spot(
        &mut self,
        building_id: i64,
        floor: i32,
        name: &str,
    ) -> Result<ParkingSpot, PersistenceError> {
        mutations::insert_spot(&mut self.conn, building_id, floor, name)
    }

    /// Retrieves a parking spot by id.
    ///
    /// # Errors
    ///
    /// Returns `SpotNotFound` for an unknown id.
    pub fn get_spot(&mut self, spot_id: i64) -> Result<ParkingSpot, PersistenceError> {
        queries::get_spot(&mut self.conn, spot_id)
    }

    /// Registers an occupant (resident or guest vehicle).
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn register_occupant(
        &mut self,
        kind: OccupantKind,
        plate: &str,
        model: Option<String>,
        owner_id: Option<i64>,
        guest_name: Option<String>,
        host_resident_id: Option<i64>,
    ) -> Result<Occupant, PersistenceError> {
        mutations::insert_occupant(
            &mut self.conn,
            kind,
            plate,
            model,
            owner_id,
            guest_name,
            host_resident_id,
        )
    }

    /// Retrieves an occupant by id.
    ///
    /// # Errors
    ///
    /// Returns `OccupantNotFound` for an unknown id.
    pub fn get_occupant(&mut self, occupant_id: i64) -> Result<Occupant, PersistenceError> {
        queries::get_occupant(&mut self.conn, occupant_id)
    }

    /// Assigns an occupant to a spot. Idempotent for the same
    /// occupant/spot pair; a different spot is a move.
    ///
    /// # Errors
    ///
    /// Returns `SpotNotFound`, `OccupantNotFound`, or `SpotOccupied`.
    pub fn assign_spot(
        &mut self,
        occupant_id: i64,
        spot_id: i64,
    ) -> Result<(), PersistenceError> {
        let now: String = now_utc_string()?;
        mutations::assign_spot(&mut self.conn, occupant_id, spot_id, &now)
    }

    /// Releases whatever spot the occupant holds; no-op when nothing
    /// is held.
    ///
    /// # Errors
    ///
    /// Returns `OccupantNotFound` for an unknown occupant.
    pub fn release_occupant(&mut self, occupant_id: i64) -> Result<(), PersistenceError> {
        let now: String = now_utc_string()?;
        mutations::release_occupant(&mut self.conn, occupant_id, &now)
    }

    /// Returns the active occupant of a spot, if any.
    ///
    /// # Errors
    ///
    /// Returns `SpotNotFound` for an unknown spot.
    pub fn occupant_of(&mut self, spot_id: i64) -> Result<Option<Occupant>, PersistenceError> {
        queries::occupant_of(&mut self.conn, spot_id)
    }

    /// Returns the spot an occupant actively holds, if any.
    ///
    /// # Errors
    ///
    /// Returns `OccupantNotFound` for an unknown occupant.
    pub fn spot_of(&mut self, occupant_id: i64) -> Result<Option<ParkingSpot>, PersistenceError> {
        queries::spot_of(&mut self.conn, occupant_id)
    }

    /// Occupancy snapshot for one floor of one building.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn floor_occupancy(
        &mut self,
        building_id: i64,
        floor: i32,
    ) -> Result<Vec<(ParkingSpot, Option<Occupant>)>, PersistenceError> {
        queries::floor_occupancy(&mut self.conn, building_id, floor)
    }

    // ========================================================================
    // Guest visit lifecycle
    // ========================================================================

    /// Registers a guest visit (and the occupant record backing its
    /// vehicle). Manual-source visits start active with a stamped
    /// entry time.
    ///
    /// # Errors
    ///
    /// Returns a domain error for invalid registration input.
    #[allow(clippy::too_many_arguments)]
    pub fn register_visit(
        &mut self,
        plate: &str,
        guest_name: &str,
        host_resident_id: Option<i64>,
        host_unit_id: i64,
        expected_date: time::Date,
        duration_days: u16,
        source: VisitSource,
        note: Option<String>,
    ) -> Result<GuestVisit, PersistenceError> {
        let now: String = now_utc_string()?;
        mutations::insert_visit(
            &mut self.conn,
            plate,
            guest_name,
            host_resident_id,
            host_unit_id,
            expected_date,
            duration_days,
            source,
            note,
            &now,
        )
    }

    /// Retrieves a guest visit by id.
    ///
    /// # Errors
    ///
    /// Returns `VisitNotFound` for an unknown id.
    pub fn get_visit(&mut self, visit_id: i64) -> Result<GuestVisit, PersistenceError> {
        queries::get_visit(&mut self.conn, visit_id)
    }

    /// Checks a pending visit in, stamping its entry time.
    ///
    /// # Errors
    ///
    /// Returns `VisitNotFound` or an invalid-transition domain error.
    pub fn check_in_visit(&mut self, visit_id: i64) -> Result<GuestVisit, PersistenceError> {
        let now: String = now_utc_string()?;
        mutations::check_in_visit(&mut self.conn, visit_id, &now)
    }

    /// Checks an active visit out, stamping its exit time and
    /// releasing any held parking spot.
    ///
    /// # Errors
    ///
    /// Returns `VisitNotFound` or an invalid-transition domain error.
    pub fn check_out_visit(&mut self, visit_id: i64) -> Result<GuestVisit, PersistenceError> {
        let now: String = now_utc_string()?;
        mutations::check_out_visit(&mut self.conn, visit_id, &now)
    }

    /// Assigns a parking spot to an active visit.
    ///
    /// # Errors
    ///
    /// Returns `VisitNotFound`, a domain error if the visit is not
    /// active, or `SpotNotFound`/`SpotOccupied` from the registry.
    pub fn assign_visit_parking(
        &mut self,
        visit_id: i64,
        spot_id: i64,
    ) -> Result<GuestVisit, PersistenceError> {
        let now: String = now_utc_string()?;
        mutations::assign_visit_parking(&mut self.conn, visit_id, spot_id, &now)
    }
}

/// Current UTC time as an RFC 3339 string.
fn now_utc_string() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}
