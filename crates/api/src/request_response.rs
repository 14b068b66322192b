// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry already-parsed dates and times; the server layer owns
//! the string edge. Enumerated fields (statuses, sources) stay strings
//! in both directions and are parsed inside the handlers, so an unknown
//! value surfaces as an input error rather than a deserialization
//! failure.

use time::{Date, Time};
use vesta_domain::{
    Booking, CalendarEntry, DayColumn, Facility, GuestVisit, HourSlot, Occupant, ParkingSpot,
    WeekGrid, format_time,
};

/// API request to create a new facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFacilityRequest {
    /// The facility's display name.
    pub name: String,
    /// The maximum number of simultaneous users.
    pub capacity: u32,
    /// Whether use requires a booking.
    pub requires_booking: bool,
    /// Daily opening time.
    pub open_from: Time,
    /// Daily closing time.
    pub open_until: Time,
    /// The operational status (open, closed, maintenance).
    pub status: String,
    /// Price per booked hour, in cents.
    pub hourly_price_cents: i64,
}

/// API response describing a facility.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FacilityResponse {
    /// The canonical facility identifier.
    pub facility_id: i64,
    /// The facility's display name.
    pub name: String,
    /// The maximum number of simultaneous users.
    pub capacity: u32,
    /// Whether use requires a booking.
    pub requires_booking: bool,
    /// Daily opening time, "HH:MM".
    pub open_from: String,
    /// Daily closing time, "HH:MM".
    pub open_until: String,
    /// The operational status.
    pub status: String,
    /// Price per booked hour, in cents.
    pub hourly_price_cents: i64,
}

impl From<Facility> for FacilityResponse {
    fn from(facility: Facility) -> Self {
        Self {
            facility_id: facility.facility_id,
            name: facility.name,
            capacity: facility.capacity,
            requires_booking: facility.requires_booking,
            open_from: format_time(facility.open_from),
            open_until: format_time(facility.open_until),
            status: facility.status.as_str().to_string(),
            hourly_price_cents: facility.hourly_price_cents,
        }
    }
}

/// API request to update a facility's operational status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFacilityStatusRequest {
    /// The new status (open, closed, maintenance).
    pub status: String,
}

/// API request to file a booking for a facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBookingRequest {
    /// The requesting resident.
    pub booker_id: i64,
    /// The requested date.
    pub date: Date,
    /// Slot start, inclusive.
    pub start_time: Time,
    /// Slot end, exclusive.
    pub end_time: Time,
    /// Free-form note for the approver.
    pub note: Option<String>,
}

/// API response describing a booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingResponse {
    /// The canonical booking identifier.
    pub booking_id: i64,
    /// The booked facility.
    pub facility_id: i64,
    /// The requesting resident.
    pub booker_id: i64,
    /// The booked date, "YYYY-MM-DD".
    pub date: String,
    /// Slot start, "HH:MM", inclusive.
    pub start_time: String,
    /// Slot end, "HH:MM", exclusive.
    pub end_time: String,
    /// The workflow status (pending, confirmed, cancelled).
    pub status: String,
    /// Free-form note from the requester.
    pub note: Option<String>,
    /// The reason recorded when the booking was declined.
    pub rejection_reason: Option<String>,
    /// When the request was filed, RFC 3339.
    pub created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.booking_id,
            facility_id: booking.facility_id,
            booker_id: booking.booker_id,
            date: booking.date.to_string(),
            start_time: format_time(booking.slot.start()),
            end_time: format_time(booking.slot.end()),
            status: booking.status.as_str().to_string(),
            note: booking.note,
            rejection_reason: booking.rejection_reason,
            created_at: booking.created_at,
        }
    }
}

/// API request to decline a pending booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclineBookingRequest {
    /// The reason shown to the requester. Required.
    pub reason: String,
}

/// One booking's presence in a calendar cell.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CalendarEntryInfo {
    /// The booking this cell belongs to.
    pub booking_id: i64,
    /// The requesting resident.
    pub booker_id: i64,
    /// Slot start, "HH:MM".
    pub start_time: String,
    /// Slot end, "HH:MM".
    pub end_time: String,
    /// How many hour rows the booking covers from its starting cell.
    pub span_hours: u8,
    /// The booking's workflow status.
    pub status: String,
}

impl From<CalendarEntry> for CalendarEntryInfo {
    fn from(entry: CalendarEntry) -> Self {
        Self {
            booking_id: entry.booking_id,
            booker_id: entry.booker_id,
            start_time: entry.start_time,
            end_time: entry.end_time,
            span_hours: entry.span_hours,
            status: entry.status.as_str().to_string(),
        }
    }
}

/// One hour row within a calendar day column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HourSlotInfo {
    /// The hour of day this row represents.
    pub hour: u8,
    /// Bookings starting in this hour.
    pub entries: Vec<CalendarEntryInfo>,
}

impl From<HourSlot> for HourSlotInfo {
    fn from(slot: HourSlot) -> Self {
        Self {
            hour: slot.hour,
            entries: slot.entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// One day column of the weekly calendar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DayColumnInfo {
    /// The day's date, "YYYY-MM-DD".
    pub date: String,
    /// The day's hour rows, in ascending hour order.
    pub hours: Vec<HourSlotInfo>,
}

impl From<DayColumn> for DayColumnInfo {
    fn from(day: DayColumn) -> Self {
        Self {
            date: day.date.to_string(),
            hours: day.hours.into_iter().map(Into::into).collect(),
        }
    }
}

/// API response for a facility's weekly calendar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WeekGridResponse {
    /// The facility the grid belongs to.
    pub facility_id: i64,
    /// The Monday the displayed week starts on, "YYYY-MM-DD".
    pub monday: String,
    /// Seven day columns, Monday through Sunday.
    pub days: Vec<DayColumnInfo>,
}

impl WeekGridResponse {
    #[must_use]
    pub fn from_grid(facility_id: i64, grid: WeekGrid) -> Self {
        Self {
            facility_id,
            monday: grid.monday.to_string(),
            days: grid.days.into_iter().map(Into::into).collect(),
        }
    }
}

/// API request to create a parking spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSpotRequest {
    /// The building the spot belongs to.
    pub building_id: i64,
    /// The floor (negative for basement levels).
    pub floor: i32,
    /// The spot's display name, unique per building and floor.
    pub name: String,
}

/// API response describing a parking spot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParkingSpotResponse {
    /// The canonical spot identifier.
    pub spot_id: i64,
    /// The building the spot belongs to.
    pub building_id: i64,
    /// The floor.
    pub floor: i32,
    /// The spot's display name.
    pub name: String,
}

impl From<ParkingSpot> for ParkingSpotResponse {
    fn from(spot: ParkingSpot) -> Self {
        Self {
            spot_id: spot.spot_id,
            building_id: spot.building_id,
            floor: spot.floor,
            name: spot.name,
        }
    }
}

/// API request to assign a spot to an occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignSpotRequest {
    /// The occupant taking the spot.
    pub occupant_id: i64,
}

/// API request to register a resident vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterVehicleRequest {
    /// The vehicle's license plate.
    pub plate: String,
    /// The vehicle model, if known.
    pub model: Option<String>,
    /// The owning resident.
    pub owner_id: i64,
}

/// API response describing an occupant (a resident or guest vehicle).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OccupantResponse {
    /// The canonical occupant identifier.
    pub occupant_id: i64,
    /// The occupant kind (resident, guest).
    pub kind: String,
    /// The vehicle's license plate.
    pub plate: String,
    /// The vehicle model, if known.
    pub model: Option<String>,
    /// The owning resident, for resident vehicles.
    pub owner_id: Option<i64>,
    /// The guest's name, for guest vehicles.
    pub guest_name: Option<String>,
    /// The hosting resident, for guest vehicles.
    pub host_resident_id: Option<i64>,
}

impl From<Occupant> for OccupantResponse {
    fn from(occupant: Occupant) -> Self {
        Self {
            occupant_id: occupant.occupant_id,
            kind: occupant.kind.as_str().to_string(),
            plate: occupant.plate,
            model: occupant.model,
            owner_id: occupant.owner_id,
            guest_name: occupant.guest_name,
            host_resident_id: occupant.host_resident_id,
        }
    }
}

/// One spot's occupancy in a floor snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpotOccupancyInfo {
    /// The spot.
    pub spot: ParkingSpotResponse,
    /// The active occupant, if any.
    pub occupant: Option<OccupantResponse>,
}

/// API response for a floor occupancy snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FloorOccupancyResponse {
    /// The building.
    pub building_id: i64,
    /// The floor.
    pub floor: i32,
    /// The floor's spots in name order, with their occupants.
    pub spots: Vec<SpotOccupancyInfo>,
}

/// API request to register a guest visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterVisitRequest {
    /// The guest vehicle's license plate.
    pub plate: String,
    /// The guest's name.
    pub guest_name: String,
    /// The hosting resident, if registered through a resident account.
    pub host_resident_id: Option<i64>,
    /// The unit being visited.
    pub host_unit_id: i64,
    /// The expected arrival date.
    pub expected_date: Date,
    /// The expected stay length in days, at least one.
    pub duration_days: u16,
    /// How the visit was registered (app, manual, phone).
    pub source: String,
    /// Free-form note.
    pub note: Option<String>,
}

/// API response describing a guest visit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GuestVisitResponse {
    /// The canonical visit identifier.
    pub visit_id: i64,
    /// The guest occupant backing the visit's vehicle.
    pub occupant_id: i64,
    /// The guest vehicle's license plate.
    pub plate: String,
    /// The guest's name.
    pub guest_name: String,
    /// The hosting resident, if any.
    pub host_resident_id: Option<i64>,
    /// The unit being visited.
    pub host_unit_id: i64,
    /// The lifecycle status (pending, active, completed).
    pub status: String,
    /// How the visit was registered.
    pub source: String,
    /// The expected arrival date, "YYYY-MM-DD".
    pub expected_date: String,
    /// The expected stay length in days.
    pub duration_days: u16,
    /// When the guest checked in, RFC 3339.
    pub entry_time: Option<String>,
    /// When the guest checked out, RFC 3339.
    pub exit_time: Option<String>,
    /// The parking spot assigned to the visit, kept as history after
    /// check-out.
    pub assigned_spot_id: Option<i64>,
    /// Free-form note.
    pub note: Option<String>,
}

impl From<GuestVisit> for GuestVisitResponse {
    fn from(visit: GuestVisit) -> Self {
        Self {
            visit_id: visit.visit_id,
            occupant_id: visit.occupant_id,
            plate: visit.plate,
            guest_name: visit.guest_name,
            host_resident_id: visit.host_resident_id,
            host_unit_id: visit.host_unit_id,
            status: visit.status.as_str().to_string(),
            source: visit.source.as_str().to_string(),
            expected_date: visit.expected_date.to_string(),
            duration_days: visit.duration_days,
            entry_time: visit.entry_time,
            exit_time: visit.exit_time,
            assigned_spot_id: visit.assigned_spot_id,
            note: visit.note,
        }
    }
}
