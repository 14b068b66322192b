// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest visit lifecycle tests at the API boundary.

use crate::error::ApiError;
use crate::request_response::CreateSpotRequest;
use crate::tests::helpers::{create_test_persistence, visit_request};

#[test]
fn test_app_visit_lifecycle() {
    let mut persistence = create_test_persistence();

    let visit = crate::register_visit(&mut persistence, visit_request("GST-001", "app"))
        .expect("Registration should succeed");
    assert_eq!(visit.status, "pending");
    assert_eq!(visit.source, "app");
    assert!(visit.entry_time.is_none());

    let active = crate::check_in(&mut persistence, visit.visit_id)
        .expect("Check-in should succeed");
    assert_eq!(active.status, "active");
    assert!(active.entry_time.is_some());

    let completed = crate::check_out(&mut persistence, visit.visit_id)
        .expect("Check-out should succeed");
    assert_eq!(completed.status, "completed");
    assert!(completed.exit_time.is_some());
}

#[test]
fn test_manual_visit_starts_active() {
    let mut persistence = create_test_persistence();

    let visit = crate::register_visit(&mut persistence, visit_request("GST-002", "manual"))
        .expect("Registration should succeed");
    assert_eq!(visit.status, "active");
    assert!(visit.entry_time.is_some());
}

#[test]
fn test_unknown_source_is_invalid_input() {
    let mut persistence = create_test_persistence();

    let result = crate::register_visit(&mut persistence, visit_request("GST-001", "carrier-pigeon"));
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_check_out_pending_visit_is_invalid_state() {
    let mut persistence = create_test_persistence();

    let visit = crate::register_visit(&mut persistence, visit_request("GST-001", "app"))
        .expect("Registration should succeed");
    let result = crate::check_out(&mut persistence, visit.visit_id);
    assert!(matches!(result, Err(ApiError::InvalidState { .. })));
}

#[test]
fn test_assign_parking_and_release_on_check_out() {
    let mut persistence = create_test_persistence();

    let spot = crate::create_spot(
        &mut persistence,
        &CreateSpotRequest {
            building_id: 1,
            floor: -1,
            name: String::from("V-01"),
        },
    )
    .expect("Spot creation should succeed");

    let visit = crate::register_visit(&mut persistence, visit_request("GST-001", "manual"))
        .expect("Registration should succeed");

    let updated = crate::assign_parking(&mut persistence, visit.visit_id, spot.spot_id)
        .expect("Parking assignment should succeed");
    assert_eq!(updated.assigned_spot_id, Some(spot.spot_id));

    let completed = crate::check_out(&mut persistence, visit.visit_id)
        .expect("Check-out should succeed");
    assert_eq!(completed.assigned_spot_id, Some(spot.spot_id));
    assert!(
        crate::occupant_of(&mut persistence, spot.spot_id)
            .expect("Lookup should succeed")
            .is_none()
    );
}

#[test]
fn test_assign_parking_to_pending_visit_is_invalid_state() {
    let mut persistence = create_test_persistence();

    let spot = crate::create_spot(
        &mut persistence,
        &CreateSpotRequest {
            building_id: 1,
            floor: -1,
            name: String::from("V-01"),
        },
    )
    .expect("Spot creation should succeed");
    let visit = crate::register_visit(&mut persistence, visit_request("GST-001", "app"))
        .expect("Registration should succeed");

    let result = crate::assign_parking(&mut persistence, visit.visit_id, spot.spot_id);
    assert!(matches!(result, Err(ApiError::InvalidState { .. })));
}

#[test]
fn test_get_visit_round_trip() {
    let mut persistence = create_test_persistence();

    let visit = crate::register_visit(&mut persistence, visit_request("GST-001", "app"))
        .expect("Registration should succeed");
    let reloaded = crate::get_visit(&mut persistence, visit.visit_id)
        .expect("Visit should exist");
    assert_eq!(reloaded, visit);

    let result = crate::get_visit(&mut persistence, 404);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
