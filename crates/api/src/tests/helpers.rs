// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for API handler tests.

use time::{Date, Month, Time};
use vesta_persistence::Persistence;

use crate::request_response::{
    CreateFacilityRequest, FacilityResponse, RegisterVisitRequest, RequestBookingRequest,
};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn time_hm(hour: u8, minute: u8) -> Time {
    Time::from_hms(hour, minute, 0).expect("Valid time")
}

/// June 10, 2024, a Monday.
pub fn test_date() -> Date {
    Date::from_calendar_date(2024, Month::June, 10).expect("Valid test date")
}

/// Creates a bookable facility open 08:00 to 22:00 through the API.
pub fn create_test_facility(persistence: &mut Persistence) -> FacilityResponse {
    crate::create_facility(
        persistence,
        &CreateFacilityRequest {
            name: String::from("Party Room"),
            capacity: 20,
            requires_booking: true,
            open_from: time_hm(8, 0),
            open_until: time_hm(22, 0),
            status: String::from("open"),
            hourly_price_cents: 2_500,
        },
    )
    .expect("Failed to create test facility")
}

pub fn booking_request(
    booker_id: i64,
    start_hour: u8,
    end_hour: u8,
) -> RequestBookingRequest {
    RequestBookingRequest {
        booker_id,
        date: test_date(),
        start_time: time_hm(start_hour, 0),
        end_time: time_hm(end_hour, 0),
        note: None,
    }
}

pub fn visit_request(plate: &str, source: &str) -> RegisterVisitRequest {
    RegisterVisitRequest {
        plate: String::from(plate),
        guest_name: String::from("Alex Visitor"),
        host_resident_id: Some(7),
        host_unit_id: 12,
        expected_date: test_date(),
        duration_days: 2,
        source: String::from(source),
        note: None,
    }
}
