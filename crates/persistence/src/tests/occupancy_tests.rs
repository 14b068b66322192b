// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy registry tests: spot uniqueness, idempotent assignment,
//! moves, releases, and the floor snapshot.

use crate::PersistenceError;
use crate::tests::{create_test_persistence, create_test_resident_vehicle, create_test_spot};

#[test]
fn test_assign_and_lookup() {
    let mut persistence = create_test_persistence();
    let spot = create_test_spot(&mut persistence, "P-101");
    let occupant = create_test_resident_vehicle(&mut persistence, "ABC-123");

    persistence
        .assign_spot(occupant.occupant_id, spot.spot_id)
        .expect("Assignment should succeed");

    let holder = persistence
        .occupant_of(spot.spot_id)
        .expect("Lookup should succeed")
        .expect("Spot should be occupied");
    assert_eq!(holder.occupant_id, occupant.occupant_id);

    let held = persistence
        .spot_of(occupant.occupant_id)
        .expect("Lookup should succeed")
        .expect("Occupant should hold a spot");
    assert_eq!(held.spot_id, spot.spot_id);
}

#[test]
fn test_occupied_spot_rejects_other_occupant() {
    let mut persistence = create_test_persistence();
    let spot = create_test_spot(&mut persistence, "P-101");
    let first = create_test_resident_vehicle(&mut persistence, "ABC-123");
    let second = create_test_resident_vehicle(&mut persistence, "XYZ-789");

    persistence
        .assign_spot(first.occupant_id, spot.spot_id)
        .expect("First assignment should succeed");

    let result = persistence.assign_spot(second.occupant_id, spot.spot_id);
    assert!(matches!(result, Err(PersistenceError::SpotOccupied { .. })));

    // The failed assignment must not have touched the holder.
    let holder = persistence
        .occupant_of(spot.spot_id)
        .expect("Lookup should succeed")
        .expect("Spot should still be occupied");
    assert_eq!(holder.occupant_id, first.occupant_id);
}

#[test]
fn test_reassign_same_pair_is_noop() {
    let mut persistence = create_test_persistence();
    let spot = create_test_spot(&mut persistence, "P-101");
    let occupant = create_test_resident_vehicle(&mut persistence, "ABC-123");

    persistence
        .assign_spot(occupant.occupant_id, spot.spot_id)
        .expect("First assignment should succeed");
    persistence
        .assign_spot(occupant.occupant_id, spot.spot_id)
        .expect("Re-assigning the held spot should be a no-op");

    let held = persistence
        .spot_of(occupant.occupant_id)
        .expect("Lookup should succeed")
        .expect("Occupant should hold a spot");
    assert_eq!(held.spot_id, spot.spot_id);
}

#[test]
fn test_assign_while_holding_is_a_move() {
    let mut persistence = create_test_persistence();
    let old_spot = create_test_spot(&mut persistence, "P-101");
    let new_spot = create_test_spot(&mut persistence, "P-102");
    let occupant = create_test_resident_vehicle(&mut persistence, "ABC-123");

    persistence
        .assign_spot(occupant.occupant_id, old_spot.spot_id)
        .expect("First assignment should succeed");
    persistence
        .assign_spot(occupant.occupant_id, new_spot.spot_id)
        .expect("Move should succeed");

    // The old spot is free again and the occupant holds only the new
    // one.
    assert!(
        persistence
            .occupant_of(old_spot.spot_id)
            .expect("Lookup should succeed")
            .is_none()
    );
    let held = persistence
        .spot_of(occupant.occupant_id)
        .expect("Lookup should succeed")
        .expect("Occupant should hold a spot");
    assert_eq!(held.spot_id, new_spot.spot_id);
}

#[test]
fn test_release_frees_spot() {
    let mut persistence = create_test_persistence();
    let spot = create_test_spot(&mut persistence, "P-101");
    let occupant = create_test_resident_vehicle(&mut persistence, "ABC-123");

    persistence
        .assign_spot(occupant.occupant_id, spot.spot_id)
        .expect("Assignment should succeed");
    persistence
        .release_occupant(occupant.occupant_id)
        .expect("Release should succeed");

    assert!(
        persistence
            .occupant_of(spot.spot_id)
            .expect("Lookup should succeed")
            .is_none()
    );
    assert!(
        persistence
            .spot_of(occupant.occupant_id)
            .expect("Lookup should succeed")
            .is_none()
    );

    // The freed spot can be taken by someone else.
    let other = create_test_resident_vehicle(&mut persistence, "XYZ-789");
    persistence
        .assign_spot(other.occupant_id, spot.spot_id)
        .expect("Freed spot should be assignable");
}

#[test]
fn test_release_without_assignment_is_noop() {
    let mut persistence = create_test_persistence();
    let occupant = create_test_resident_vehicle(&mut persistence, "ABC-123");

    persistence
        .release_occupant(occupant.occupant_id)
        .expect("Releasing a holder of nothing should be a no-op");
}

#[test]
fn test_assign_unknown_spot_or_occupant() {
    let mut persistence = create_test_persistence();
    let spot = create_test_spot(&mut persistence, "P-101");
    let occupant = create_test_resident_vehicle(&mut persistence, "ABC-123");

    assert!(matches!(
        persistence.assign_spot(occupant.occupant_id, 999),
        Err(PersistenceError::SpotNotFound(999))
    ));
    assert!(matches!(
        persistence.assign_spot(999, spot.spot_id),
        Err(PersistenceError::OccupantNotFound(999))
    ));
    assert!(matches!(
        persistence.release_occupant(999),
        Err(PersistenceError::OccupantNotFound(999))
    ));
}

#[test]
fn test_duplicate_spot_name_on_floor_rejected() {
    let mut persistence = create_test_persistence();
    create_test_spot(&mut persistence, "P-101");

    let result = persistence.create_parking_spot(1, -1, "P-101");
    assert!(matches!(
        result,
        Err(PersistenceError::DuplicateSpotName { .. })
    ));

    // Same name on another floor or in another building is fine.
    persistence
        .create_parking_spot(1, -2, "P-101")
        .expect("Same name on another floor should succeed");
    persistence
        .create_parking_spot(2, -1, "P-101")
        .expect("Same name in another building should succeed");
}

#[test]
fn test_floor_occupancy_snapshot() {
    let mut persistence = create_test_persistence();
    let spot_a = create_test_spot(&mut persistence, "P-101");
    let _spot_b = create_test_spot(&mut persistence, "P-102");
    let elsewhere = persistence
        .create_parking_spot(1, -2, "P-201")
        .expect("Failed to create spot on other floor");
    let occupant = create_test_resident_vehicle(&mut persistence, "ABC-123");

    persistence
        .assign_spot(occupant.occupant_id, spot_a.spot_id)
        .expect("Assignment should succeed");

    let snapshot = persistence
        .floor_occupancy(1, -1)
        .expect("Snapshot should succeed");

    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.iter().all(|(spot, _)| spot.spot_id != elsewhere.spot_id));

    let (occupied, free): (Vec<_>, Vec<_>) =
        snapshot.iter().partition(|(_, holder)| holder.is_some());
    assert_eq!(occupied.len(), 1);
    assert_eq!(occupied[0].0.name, "P-101");
    assert_eq!(free.len(), 1);
    assert_eq!(free[0].0.name, "P-102");
}
