// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Facility catalog tests.

use vesta_domain::{DomainError, FacilityStatus};

use crate::PersistenceError;
use crate::tests::{create_test_facility, create_test_persistence, time_hm};

#[test]
fn test_create_and_get_facility() {
    let mut persistence = create_test_persistence();
    let facility = create_test_facility(&mut persistence);

    let reloaded = persistence
        .get_facility(facility.facility_id)
        .expect("Facility should exist");
    assert_eq!(reloaded.name, "Party Room");
    assert_eq!(reloaded.capacity, 20);
    assert!(reloaded.requires_booking);
    assert_eq!(reloaded.open_from, time_hm(8, 0));
    assert_eq!(reloaded.open_until, time_hm(22, 0));
    assert_eq!(reloaded.status, FacilityStatus::Open);
    assert_eq!(reloaded.hourly_price_cents, 2_500);
}

#[test]
fn test_create_facility_rejects_empty_name() {
    let mut persistence = create_test_persistence();
    let result = persistence.create_facility(
        "   ",
        10,
        true,
        time_hm(8, 0),
        time_hm(22, 0),
        FacilityStatus::Open,
        0,
    );
    assert!(matches!(
        result,
        Err(PersistenceError::Domain(DomainError::InvalidName(_)))
    ));
}

#[test]
fn test_create_facility_rejects_inverted_hours() {
    let mut persistence = create_test_persistence();
    let result = persistence.create_facility(
        "Gym",
        10,
        true,
        time_hm(22, 0),
        time_hm(8, 0),
        FacilityStatus::Open,
        0,
    );
    assert!(matches!(
        result,
        Err(PersistenceError::Domain(
            DomainError::InvalidOperatingHours { .. }
        ))
    ));
}

#[test]
fn test_list_facilities_ordered_by_name() {
    let mut persistence = create_test_persistence();
    create_test_facility(&mut persistence);
    persistence
        .create_facility(
            "Gym",
            15,
            false,
            time_hm(6, 0),
            time_hm(23, 0),
            FacilityStatus::Open,
            0,
        )
        .expect("Failed to create facility");

    let facilities = persistence.list_facilities().expect("Listing should succeed");
    assert_eq!(facilities.len(), 2);
    assert_eq!(facilities[0].name, "Gym");
    assert_eq!(facilities[1].name, "Party Room");
}

#[test]
fn test_update_facility_status() {
    let mut persistence = create_test_persistence();
    let facility = create_test_facility(&mut persistence);

    let updated = persistence
        .update_facility_status(facility.facility_id, FacilityStatus::Maintenance)
        .expect("Status update should succeed");
    assert_eq!(updated.status, FacilityStatus::Maintenance);

    let result = persistence.update_facility_status(999, FacilityStatus::Closed);
    assert!(matches!(
        result,
        Err(PersistenceError::FacilityNotFound(999))
    ));
}
