// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly calendar projection tests at the API boundary.

use time::{Date, Month};
use vesta_domain::HourRange;

use crate::error::ApiError;
use crate::tests::helpers::{
    booking_request, create_test_facility, create_test_persistence, test_date,
};

#[test]
fn test_week_grid_shape() {
    let mut persistence = create_test_persistence();
    let facility = create_test_facility(&mut persistence);

    let grid = crate::week_calendar(
        &mut persistence,
        facility.facility_id,
        test_date(),
        HourRange::default(),
    )
    .expect("Projection should succeed");

    assert_eq!(grid.facility_id, facility.facility_id);
    assert_eq!(grid.monday, "2024-06-10");
    assert_eq!(grid.days.len(), 7);
    // Default hour range is 08:00 through 22:00 inclusive.
    assert_eq!(grid.days[0].hours.len(), 15);
    assert_eq!(grid.days[0].hours[0].hour, 8);
    assert_eq!(grid.days[0].hours[14].hour, 22);
    assert_eq!(grid.days[6].date, "2024-06-16");
}

#[test]
fn test_any_anchor_in_week_yields_same_grid() {
    let mut persistence = create_test_persistence();
    let facility = create_test_facility(&mut persistence);

    crate::request_booking(
        &mut persistence,
        facility.facility_id,
        booking_request(1, 14, 15),
    )
    .expect("Request should be admitted");

    // Thursday of the same week.
    let thursday = Date::from_calendar_date(2024, Month::June, 13).expect("Valid date");
    let from_monday = crate::week_calendar(
        &mut persistence,
        facility.facility_id,
        test_date(),
        HourRange::default(),
    )
    .expect("Projection should succeed");
    let from_thursday = crate::week_calendar(
        &mut persistence,
        facility.facility_id,
        thursday,
        HourRange::default(),
    )
    .expect("Projection should succeed");

    assert_eq!(from_monday, from_thursday);
}

#[test]
fn test_booking_lands_in_start_hour_cell() {
    let mut persistence = create_test_persistence();
    let facility = create_test_facility(&mut persistence);

    let booking = crate::request_booking(
        &mut persistence,
        facility.facility_id,
        booking_request(1, 14, 17),
    )
    .expect("Request should be admitted");

    let grid = crate::week_calendar(
        &mut persistence,
        facility.facility_id,
        test_date(),
        HourRange::default(),
    )
    .expect("Projection should succeed");

    // Monday column, 14:00 row.
    let monday = &grid.days[0];
    let row = monday
        .hours
        .iter()
        .find(|slot| slot.hour == 14)
        .expect("14:00 row should exist");
    assert_eq!(row.entries.len(), 1);
    assert_eq!(row.entries[0].booking_id, booking.booking_id);
    assert_eq!(row.entries[0].span_hours, 3);

    // The booking occupies only its starting cell.
    let occupied_rows: usize = monday
        .hours
        .iter()
        .filter(|slot| !slot.entries.is_empty())
        .count();
    assert_eq!(occupied_rows, 1);
}

#[test]
fn test_cancelled_booking_not_projected() {
    let mut persistence = create_test_persistence();
    let facility = create_test_facility(&mut persistence);

    let booking = crate::request_booking(
        &mut persistence,
        facility.facility_id,
        booking_request(1, 14, 15),
    )
    .expect("Request should be admitted");
    crate::cancel_booking(&mut persistence, booking.booking_id)
        .expect("Cancellation should succeed");

    let grid = crate::week_calendar(
        &mut persistence,
        facility.facility_id,
        test_date(),
        HourRange::default(),
    )
    .expect("Projection should succeed");

    assert!(
        grid.days
            .iter()
            .flat_map(|day| day.hours.iter())
            .all(|slot| slot.entries.is_empty())
    );
}

#[test]
fn test_unknown_facility_is_not_found() {
    let mut persistence = create_test_persistence();
    let result =
        crate::week_calendar(&mut persistence, 999, test_date(), HourRange::default());
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
