// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row and insert models for the Diesel tables, plus conversions into
//! the domain types. Statuses, dates and times are stored as their
//! canonical string forms and parsed back through the domain's closed
//! enum types, so an unknown status in the database surfaces as an
//! error instead of leaking through.

use diesel::prelude::*;

use vesta_domain::{
    Booking, BookingStatus, Facility, FacilityStatus, GuestVisit, Occupant, OccupantKind,
    ParkingSpot, TimeSlot, VisitSource, VisitStatus, parse_date, parse_time,
};

use crate::diesel_schema::{
    bookings, facilities, guest_visits, occupants, parking_spots, spot_assignments,
};
use crate::error::PersistenceError;

/// A row of the `facilities` table.
#[derive(Debug, Clone, Queryable)]
pub struct FacilityRow {
    pub facility_id: i64,
    pub name: String,
    pub capacity: i32,
    pub requires_booking: i32,
    pub open_from: String,
    pub open_until: String,
    pub status: String,
    pub hourly_price_cents: i64,
    pub created_at: String,
}

impl FacilityRow {
    /// Converts the row into the domain `Facility`.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored status or time string is invalid.
    pub fn into_domain(self) -> Result<Facility, PersistenceError> {
        let capacity: u32 = u32::try_from(self.capacity).map_err(|_| {
            PersistenceError::Other(format!(
                "Facility {} has invalid capacity {}",
                self.facility_id, self.capacity
            ))
        })?;
        Ok(Facility {
            facility_id: self.facility_id,
            name: self.name,
            capacity,
            requires_booking: self.requires_booking != 0,
            open_from: parse_time(&self.open_from)?,
            open_until: parse_time(&self.open_until)?,
            status: self.status.parse::<FacilityStatus>()?,
            hourly_price_cents: self.hourly_price_cents,
        })
    }
}

/// Insert model for the `facilities` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = facilities)]
pub struct NewFacility {
    pub name: String,
    pub capacity: i32,
    pub requires_booking: i32,
    pub open_from: String,
    pub open_until: String,
    pub status: String,
    pub hourly_price_cents: i64,
    pub created_at: String,
}

/// A row of the `bookings` table.
#[derive(Debug, Clone, Queryable)]
pub struct BookingRow {
    pub booking_id: i64,
    pub facility_id: i64,
    pub booker_id: i64,
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub note: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: String,
}

impl BookingRow {
    /// Converts the row into the domain `Booking`.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored status, date or time string is
    /// invalid.
    pub fn into_domain(self) -> Result<Booking, PersistenceError> {
        let slot: TimeSlot = TimeSlot::new(parse_time(&self.start_time)?, parse_time(&self.end_time)?)?;
        Ok(Booking {
            booking_id: self.booking_id,
            facility_id: self.facility_id,
            booker_id: self.booker_id,
            date: parse_date(&self.booking_date)?,
            slot,
            status: self.status.parse::<BookingStatus>()?,
            note: self.note,
            rejection_reason: self.rejection_reason,
            created_at: self.created_at,
        })
    }
}

/// Insert model for the `bookings` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub facility_id: i64,
    pub booker_id: i64,
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub note: Option<String>,
    pub created_at: String,
}

/// A row of the `parking_spots` table.
#[derive(Debug, Clone, Queryable)]
pub struct ParkingSpotRow {
    pub spot_id: i64,
    pub building_id: i64,
    pub floor: i32,
    pub name: String,
}

impl ParkingSpotRow {
    /// Converts the row into the domain `ParkingSpot`.
    #[must_use]
    pub fn into_domain(self) -> ParkingSpot {
        ParkingSpot {
            spot_id: self.spot_id,
            building_id: self.building_id,
            floor: self.floor,
            name: self.name,
        }
    }
}

/// Insert model for the `parking_spots` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = parking_spots)]
pub struct NewParkingSpot {
    pub building_id: i64,
    pub floor: i32,
    pub name: String,
}

/// A row of the `occupants` table.
#[derive(Debug, Clone, Queryable)]
pub struct OccupantRow {
    pub occupant_id: i64,
    pub kind: String,
    pub plate: String,
    pub model: Option<String>,
    pub owner_id: Option<i64>,
    pub guest_name: Option<String>,
    pub host_resident_id: Option<i64>,
}

impl OccupantRow {
    /// Converts the row into the domain `Occupant`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored occupant kind is invalid.
    pub fn into_domain(self) -> Result<Occupant, PersistenceError> {
        Ok(Occupant {
            occupant_id: self.occupant_id,
            kind: self.kind.parse::<OccupantKind>()?,
            plate: self.plate,
            model: self.model,
            owner_id: self.owner_id,
            guest_name: self.guest_name,
            host_resident_id: self.host_resident_id,
        })
    }
}

/// Insert model for the `occupants` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = occupants)]
pub struct NewOccupant {
    pub kind: String,
    pub plate: String,
    pub model: Option<String>,
    pub owner_id: Option<i64>,
    pub guest_name: Option<String>,
    pub host_resident_id: Option<i64>,
}

/// A row of the `spot_assignments` table.
#[derive(Debug, Clone, Queryable)]
pub struct SpotAssignmentRow {
    pub assignment_id: i64,
    pub spot_id: i64,
    pub occupant_id: i64,
    pub assigned_at: String,
    pub released_at: Option<String>,
}

/// Insert model for the `spot_assignments` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = spot_assignments)]
pub struct NewSpotAssignment {
    pub spot_id: i64,
    pub occupant_id: i64,
    pub assigned_at: String,
}

/// A row of the `guest_visits` table.
#[derive(Debug, Clone, Queryable)]
pub struct GuestVisitRow {
    pub visit_id: i64,
    pub occupant_id: i64,
    pub plate: String,
    pub guest_name: String,
    pub host_resident_id: Option<i64>,
    pub host_unit_id: i64,
    pub status: String,
    pub source: String,
    pub expected_date: String,
    pub duration_days: i32,
    pub entry_time: Option<String>,
    pub exit_time: Option<String>,
    pub assigned_spot_id: Option<i64>,
    pub note: Option<String>,
    pub created_at: String,
}

impl GuestVisitRow {
    /// Converts the row into the domain `GuestVisit`.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored status, source or date string is
    /// invalid.
    pub fn into_domain(self) -> Result<GuestVisit, PersistenceError> {
        let duration_days: u16 = u16::try_from(self.duration_days).map_err(|_| {
            PersistenceError::Other(format!(
                "Guest visit {} has invalid duration {}",
                self.visit_id, self.duration_days
            ))
        })?;
        Ok(GuestVisit {
            visit_id: self.visit_id,
            occupant_id: self.occupant_id,
            plate: self.plate,
            guest_name: self.guest_name,
            host_resident_id: self.host_resident_id,
            host_unit_id: self.host_unit_id,
            status: self.status.parse::<VisitStatus>()?,
            source: self.source.parse::<VisitSource>()?,
            expected_date: parse_date(&self.expected_date)?,
            duration_days,
            entry_time: self.entry_time,
            exit_time: self.exit_time,
            assigned_spot_id: self.assigned_spot_id,
            note: self.note,
        })
    }
}

/// Insert model for the `guest_visits` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = guest_visits)]
pub struct NewGuestVisit {
    pub occupant_id: i64,
    pub plate: String,
    pub guest_name: String,
    pub host_resident_id: Option<i64>,
    pub host_unit_id: i64,
    pub status: String,
    pub source: String,
    pub expected_date: String,
    pub duration_days: i32,
    pub entry_time: Option<String>,
    pub note: Option<String>,
    pub created_at: String,
}
