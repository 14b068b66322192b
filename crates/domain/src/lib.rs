// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking;
mod calendar;
mod error;
mod facility;
mod guest_visit;
mod parking;
mod time_slot;
mod validation;

pub use booking::{Booking, BookingStatus};
pub use calendar::{
    CalendarEntry, DayColumn, HourRange, HourSlot, WeekGrid, project_week, week_monday,
};
pub use error::DomainError;
pub use facility::{Facility, FacilityStatus};
pub use guest_visit::{GuestVisit, VisitSource, VisitStatus};
pub use parking::{Occupant, OccupantKind, ParkingSpot};
pub use time_slot::TimeSlot;
pub use validation::{
    format_time, parse_date, parse_time, validate_decline_reason, validate_facility_fields,
    validate_guest_registration, validate_spot_fields, validate_vehicle_fields,
};
