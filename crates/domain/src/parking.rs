// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parking spots and the vehicles that can occupy them.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A uniquely named, floor-scoped physical parking location.
///
/// Floor 0 is ground level; negative floors are basement levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSpot {
    /// Canonical numeric identifier assigned by the store.
    pub spot_id: i64,
    /// The owning building (external reference).
    pub building_id: i64,
    /// Signed floor number.
    pub floor: i32,
    /// Spot name, unique within `(building, floor)`.
    pub name: String,
}

/// Which kind of vehicle an occupant record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupantKind {
    /// A resident's own vehicle.
    Resident,
    /// A guest vehicle on a visit.
    Guest,
}

impl OccupantKind {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::Guest => "guest",
        }
    }
}

impl FromStr for OccupantKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resident" => Ok(Self::Resident),
            "guest" => Ok(Self::Guest),
            _ => Err(DomainError::InvalidOccupantKind(s.to_string())),
        }
    }
}

/// A vehicle eligible to hold a parking assignment.
///
/// Resident vehicles carry an `owner_id`; guest vehicles carry the
/// guest's name and the hosting resident. Each occupant holds at most
/// one active spot assignment at any instant; that invariant is
/// enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    /// Canonical numeric identifier assigned by the store.
    pub occupant_id: i64,
    /// Resident or guest vehicle.
    pub kind: OccupantKind,
    /// License plate.
    pub plate: String,
    /// Vehicle model, if recorded.
    pub model: Option<String>,
    /// Owning resident, for resident vehicles.
    pub owner_id: Option<i64>,
    /// Guest name, for guest vehicles.
    pub guest_name: Option<String>,
    /// Hosting resident, for guest vehicles.
    pub host_resident_id: Option<i64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [OccupantKind::Resident, OccupantKind::Guest] {
            assert_eq!(kind.as_str().parse::<OccupantKind>().unwrap(), kind);
        }
        assert!("visitor".parse::<OccupantKind>().is_err());
    }
}
