// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod facility_tests;
mod occupancy_tests;

use time::{Date, Month, Time};
use vesta_domain::{Facility, FacilityStatus, Occupant, OccupantKind, ParkingSpot, TimeSlot};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Creates a bookable facility open 08:00 to 22:00.
pub fn create_test_facility(persistence: &mut Persistence) -> Facility {
    persistence
        .create_facility(
            "Party Room",
            20,
            true,
            time_hm(8, 0),
            time_hm(22, 0),
            FacilityStatus::Open,
            2_500,
        )
        .expect("Failed to create test facility")
}

pub fn create_test_spot(persistence: &mut Persistence, name: &str) -> ParkingSpot {
    persistence
        .create_parking_spot(1, -1, name)
        .expect("Failed to create test spot")
}

pub fn create_test_resident_vehicle(persistence: &mut Persistence, plate: &str) -> Occupant {
    persistence
        .register_occupant(
            OccupantKind::Resident,
            plate,
            Some(String::from("Volvo V60")),
            Some(7),
            None,
            None,
        )
        .expect("Failed to register test occupant")
}

pub fn time_hm(hour: u8, minute: u8) -> Time {
    Time::from_hms(hour, minute, 0).expect("Valid time")
}

pub fn slot(start_hour: u8, start_minute: u8, end_hour: u8, end_minute: u8) -> TimeSlot {
    TimeSlot::new(time_hm(start_hour, start_minute), time_hm(end_hour, end_minute))
        .expect("Valid slot")
}

/// June 10, 2024 (a Monday), the date used across booking scenarios.
pub fn test_date() -> Date {
    Date::from_calendar_date(2024, Month::June, 10).expect("Valid test date")
}
