// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bookable facilities (pools, courts, halls) and their status lifecycle.

use crate::error::DomainError;
use crate::time_slot::TimeSlot;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Time;

/// Operational status of a facility.
///
/// Status is set by an administrator; the system never changes it on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityStatus {
    /// Facility is open for use and, if applicable, bookings.
    Open,
    /// Facility is closed; no new bookings are accepted.
    Closed,
    /// Facility is under maintenance. Existing bookings remain; new
    /// requests are still admitted so residents can book ahead.
    Maintenance,
}

impl FacilityStatus {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Maintenance => "maintenance",
        }
    }
}

impl FromStr for FacilityStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(DomainError::InvalidFacilityStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for FacilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shared, schedulable amenity owned by the site.
///
/// Facilities are created and edited by administrators and are never
/// hard-deleted; a facility that goes away is set to `Closed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Canonical numeric identifier assigned by the store.
    pub facility_id: i64,
    /// Display name, unique per site by convention.
    pub name: String,
    /// Maximum simultaneous users.
    pub capacity: u32,
    /// Whether use of the facility requires a booking.
    pub requires_booking: bool,
    /// Opening time of the daily operating window.
    pub open_from: Time,
    /// Closing time of the daily operating window.
    pub open_until: Time,
    /// Operational status.
    pub status: FacilityStatus,
    /// Hourly price in minor currency units.
    pub hourly_price_cents: i64,
}

impl Facility {
    /// Checks that this facility can accept a booking request for `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the facility is closed, does not take
    /// bookings, or the slot falls outside its operating hours.
    pub fn check_booking_preconditions(&self, slot: &TimeSlot) -> Result<(), DomainError> {
        if self.status == FacilityStatus::Closed {
            return Err(DomainError::FacilityClosed {
                facility: self.name.clone(),
            });
        }
        if !self.requires_booking {
            return Err(DomainError::FacilityNotBookable {
                facility: self.name.clone(),
            });
        }
        if !slot.within(self.open_from, self.open_until) {
            return Err(DomainError::OutsideOperatingHours {
                start: slot.start(),
                end: slot.end(),
                open_from: self.open_from,
                open_until: self.open_until,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::time;

    fn pool(status: FacilityStatus, requires_booking: bool) -> Facility {
        Facility {
            facility_id: 1,
            name: String::from("Pool"),
            capacity: 20,
            requires_booking,
            open_from: time!(08:00),
            open_until: time!(22:00),
            status,
            hourly_price_cents: 1500,
        }
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            FacilityStatus::Open,
            FacilityStatus::Closed,
            FacilityStatus::Maintenance,
        ] {
            assert_eq!(status.as_str().parse::<FacilityStatus>().unwrap(), status);
        }
        assert!("demolished".parse::<FacilityStatus>().is_err());
    }

    #[test]
    fn test_open_facility_accepts_in_hours_slot() {
        let facility = pool(FacilityStatus::Open, true);
        let slot = TimeSlot::new(time!(14:00), time!(15:00)).unwrap();
        assert!(facility.check_booking_preconditions(&slot).is_ok());
    }

    #[test]
    fn test_closed_facility_rejects_bookings() {
        let facility = pool(FacilityStatus::Closed, true);
        let slot = TimeSlot::new(time!(14:00), time!(15:00)).unwrap();
        assert!(matches!(
            facility.check_booking_preconditions(&slot),
            Err(DomainError::FacilityClosed { .. })
        ));
    }

    #[test]
    fn test_maintenance_facility_still_accepts_bookings() {
        let facility = pool(FacilityStatus::Maintenance, true);
        let slot = TimeSlot::new(time!(14:00), time!(15:00)).unwrap();
        assert!(facility.check_booking_preconditions(&slot).is_ok());
    }

    #[test]
    fn test_unbookable_facility_rejects_bookings() {
        let facility = pool(FacilityStatus::Open, false);
        let slot = TimeSlot::new(time!(14:00), time!(15:00)).unwrap();
        assert!(matches!(
            facility.check_booking_preconditions(&slot),
            Err(DomainError::FacilityNotBookable { .. })
        ));
    }

    #[test]
    fn test_slot_outside_operating_hours_rejected() {
        let facility = pool(FacilityStatus::Open, true);
        let early = TimeSlot::new(time!(06:00), time!(09:00)).unwrap();
        assert!(matches!(
            facility.check_booking_preconditions(&early),
            Err(DomainError::OutsideOperatingHours { .. })
        ));
    }
}
