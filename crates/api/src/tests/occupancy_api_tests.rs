// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy registry tests at the API boundary.

use crate::error::ApiError;
use crate::request_response::{
    AssignSpotRequest, CreateSpotRequest, RegisterVehicleRequest,
};
use crate::tests::helpers::create_test_persistence;

#[test]
fn test_spot_assignment_round_trip() {
    let mut persistence = create_test_persistence();

    let spot = crate::create_spot(
        &mut persistence,
        &CreateSpotRequest {
            building_id: 1,
            floor: -1,
            name: String::from("P-101"),
        },
    )
    .expect("Spot creation should succeed");

    let vehicle = crate::register_vehicle(
        &mut persistence,
        RegisterVehicleRequest {
            plate: String::from("ABC-123"),
            model: Some(String::from("Volvo V60")),
            owner_id: 7,
        },
    )
    .expect("Vehicle registration should succeed");
    assert_eq!(vehicle.kind, "resident");

    crate::assign_spot(
        &mut persistence,
        spot.spot_id,
        &AssignSpotRequest {
            occupant_id: vehicle.occupant_id,
        },
    )
    .expect("Assignment should succeed");

    let holder = crate::occupant_of(&mut persistence, spot.spot_id)
        .expect("Lookup should succeed")
        .expect("Spot should be occupied");
    assert_eq!(holder.occupant_id, vehicle.occupant_id);

    let held = crate::spot_of(&mut persistence, vehicle.occupant_id)
        .expect("Lookup should succeed")
        .expect("Occupant should hold a spot");
    assert_eq!(held.spot_id, spot.spot_id);

    crate::release_occupant(&mut persistence, vehicle.occupant_id)
        .expect("Release should succeed");
    assert!(
        crate::occupant_of(&mut persistence, spot.spot_id)
            .expect("Lookup should succeed")
            .is_none()
    );
}

#[test]
fn test_register_vehicle_rejects_blank_plate() {
    let mut persistence = create_test_persistence();

    let result = crate::register_vehicle(
        &mut persistence,
        RegisterVehicleRequest {
            plate: String::from("   "),
            model: None,
            owner_id: 7,
        },
    );
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_duplicate_spot_name_is_conflict() {
    let mut persistence = create_test_persistence();
    let request = CreateSpotRequest {
        building_id: 1,
        floor: -1,
        name: String::from("P-101"),
    };

    crate::create_spot(&mut persistence, &request).expect("First creation should succeed");
    let result = crate::create_spot(&mut persistence, &request);
    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_occupied_spot_is_conflict() {
    let mut persistence = create_test_persistence();

    let spot = crate::create_spot(
        &mut persistence,
        &CreateSpotRequest {
            building_id: 1,
            floor: -1,
            name: String::from("P-101"),
        },
    )
    .expect("Spot creation should succeed");

    let first = crate::register_vehicle(
        &mut persistence,
        RegisterVehicleRequest {
            plate: String::from("ABC-123"),
            model: None,
            owner_id: 7,
        },
    )
    .expect("Vehicle registration should succeed");
    let second = crate::register_vehicle(
        &mut persistence,
        RegisterVehicleRequest {
            plate: String::from("XYZ-789"),
            model: None,
            owner_id: 8,
        },
    )
    .expect("Vehicle registration should succeed");

    crate::assign_spot(
        &mut persistence,
        spot.spot_id,
        &AssignSpotRequest {
            occupant_id: first.occupant_id,
        },
    )
    .expect("First assignment should succeed");

    let result = crate::assign_spot(
        &mut persistence,
        spot.spot_id,
        &AssignSpotRequest {
            occupant_id: second.occupant_id,
        },
    );
    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_floor_occupancy_snapshot() {
    let mut persistence = create_test_persistence();

    for name in ["P-101", "P-102"] {
        crate::create_spot(
            &mut persistence,
            &CreateSpotRequest {
                building_id: 1,
                floor: -1,
                name: String::from(name),
            },
        )
        .expect("Spot creation should succeed");
    }
    let vehicle = crate::register_vehicle(
        &mut persistence,
        RegisterVehicleRequest {
            plate: String::from("ABC-123"),
            model: None,
            owner_id: 7,
        },
    )
    .expect("Vehicle registration should succeed");

    let snapshot = crate::floor_occupancy(&mut persistence, 1, -1)
        .expect("Snapshot should succeed");
    let first_spot_id = snapshot.spots[0].spot.spot_id;

    crate::assign_spot(
        &mut persistence,
        first_spot_id,
        &AssignSpotRequest {
            occupant_id: vehicle.occupant_id,
        },
    )
    .expect("Assignment should succeed");

    let snapshot = crate::floor_occupancy(&mut persistence, 1, -1)
        .expect("Snapshot should succeed");
    assert_eq!(snapshot.building_id, 1);
    assert_eq!(snapshot.floor, -1);
    assert_eq!(snapshot.spots.len(), 2);
    assert_eq!(snapshot.spots[0].spot.name, "P-101");
    assert!(snapshot.spots[0].occupant.is_some());
    assert!(snapshot.spots[1].occupant.is_none());
}
