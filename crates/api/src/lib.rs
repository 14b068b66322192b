// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Vesta residential site core.
//!
//! Handlers in this crate take typed requests, run the corresponding
//! store operation, and return typed responses. All domain and
//! persistence errors are translated into [`ApiError`], the contract
//! the HTTP server maps onto status codes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod bookings;
mod calendar;
mod error;
mod facilities;
mod guest_visits;
mod occupancy;
mod request_response;

#[cfg(test)]
mod tests;

pub use bookings::{
    approve_booking, cancel_booking, decline_booking, get_booking, list_bookings, request_booking,
};
pub use calendar::week_calendar;
pub use error::{ApiError, translate_domain_error};
pub use facilities::{create_facility, get_facility, list_facilities, update_facility_status};
pub use guest_visits::{assign_parking, check_in, check_out, get_visit, register_visit};
pub use occupancy::{
    assign_spot, create_spot, floor_occupancy, occupant_of, register_vehicle, release_occupant,
    spot_of,
};
pub use request_response::{
    AssignSpotRequest, BookingResponse, CalendarEntryInfo, CreateFacilityRequest,
    CreateSpotRequest, DayColumnInfo, DeclineBookingRequest, FacilityResponse,
    FloorOccupancyResponse, GuestVisitResponse, HourSlotInfo, OccupantResponse,
    ParkingSpotResponse, RegisterVehicleRequest, RegisterVisitRequest, RequestBookingRequest,
    SpotOccupancyInfo, UpdateFacilityStatusRequest, WeekGridResponse,
};
