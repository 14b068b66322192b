// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Facility bookings and their approval workflow.
//!
//! A booking enters the system as `pending` and only ever moves through
//! the approval workflow: `pending → confirmed` (approve),
//! `pending → cancelled` (decline or resident cancel), and
//! `confirmed → cancelled` (resident cancel). Terminal statuses have no
//! outgoing transitions; the store never mutates a terminal booking
//! except to attach the rejection reason at the moment of decline.

use crate::error::DomainError;
use crate::time_slot::TimeSlot;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Booking status states for the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Requested by a resident, awaiting administrator review.
    Pending,
    /// Approved by an administrator.
    Confirmed,
    /// Declined by an administrator or withdrawn by the resident.
    Cancelled,
}

impl BookingStatus {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns true if this status has no outgoing transitions.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns true if a booking in this status occupies its time slot
    /// for conflict purposes.
    #[must_use]
    pub const fn blocks_slot(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Validates a transition from this status to another.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingTransition` if the transition
    /// is not permitted by the approval workflow.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        let valid: bool = match self {
            Self::Pending => matches!(new_status, Self::Confirmed | Self::Cancelled),
            Self::Confirmed => matches!(new_status, Self::Cancelled),
            Self::Cancelled => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidBookingTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: if self.is_terminal() {
                    String::from("cannot transition from terminal state")
                } else {
                    String::from("transition not permitted by approval workflow")
                },
            })
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reservation of a facility for a date and time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Canonical numeric identifier assigned by the store.
    pub booking_id: i64,
    /// The booked facility.
    pub facility_id: i64,
    /// The requesting resident (external reference).
    pub booker_id: i64,
    /// The booked calendar date.
    pub date: Date,
    /// The booked half-open time slot.
    pub slot: TimeSlot,
    /// Workflow status.
    pub status: BookingStatus,
    /// Optional note from the requester.
    pub note: Option<String>,
    /// Reason given when the booking was declined. Set exactly once at
    /// decline time; `None` for every other path to `cancelled`.
    pub rejection_reason: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl Booking {
    /// Returns true if this booking blocks `slot` on `date` for the same
    /// facility under half-open interval semantics.
    #[must_use]
    pub fn conflicts_with(&self, facility_id: i64, date: Date, slot: &TimeSlot) -> bool {
        self.facility_id == facility_id
            && self.date == date
            && self.status.blocks_slot()
            && self.slot.overlaps(slot)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    fn booking(status: BookingStatus, start: time::Time, end: time::Time) -> Booking {
        Booking {
            booking_id: 1,
            facility_id: 7,
            booker_id: 42,
            date: date!(2024 - 06 - 10),
            slot: TimeSlot::new(start, end).unwrap(),
            status,
            note: None,
            rejection_reason: None,
            created_at: String::from("2024-06-01T09:00:00Z"),
        }
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
        assert!("approved".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_pending_transitions() {
        assert!(
            BookingStatus::Pending
                .validate_transition(BookingStatus::Confirmed)
                .is_ok()
        );
        assert!(
            BookingStatus::Pending
                .validate_transition(BookingStatus::Cancelled)
                .is_ok()
        );
    }

    #[test]
    fn test_confirmed_can_only_cancel() {
        assert!(
            BookingStatus::Confirmed
                .validate_transition(BookingStatus::Cancelled)
                .is_ok()
        );
        assert!(
            BookingStatus::Confirmed
                .validate_transition(BookingStatus::Pending)
                .is_err()
        );
    }

    #[test]
    fn test_cancelled_is_terminal() {
        assert!(BookingStatus::Cancelled.is_terminal());
        for to in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert!(BookingStatus::Cancelled.validate_transition(to).is_err());
        }
    }

    #[test]
    fn test_only_pending_and_confirmed_block_slots() {
        assert!(BookingStatus::Pending.blocks_slot());
        assert!(BookingStatus::Confirmed.blocks_slot());
        assert!(!BookingStatus::Cancelled.blocks_slot());
    }

    #[test]
    fn test_cancelled_booking_never_conflicts() {
        let cancelled = booking(BookingStatus::Cancelled, time!(14:00), time!(15:00));
        let slot = TimeSlot::new(time!(14:30), time!(15:30)).unwrap();
        assert!(!cancelled.conflicts_with(7, date!(2024 - 06 - 10), &slot));
    }

    #[test]
    fn test_conflict_scoped_to_facility_and_date() {
        let confirmed = booking(BookingStatus::Confirmed, time!(14:00), time!(15:00));
        let slot = TimeSlot::new(time!(14:30), time!(15:30)).unwrap();

        assert!(confirmed.conflicts_with(7, date!(2024 - 06 - 10), &slot));
        // Other facility, other date: no conflict.
        assert!(!confirmed.conflicts_with(8, date!(2024 - 06 - 10), &slot));
        assert!(!confirmed.conflicts_with(7, date!(2024 - 06 - 11), &slot));
    }

    #[test]
    fn test_touching_boundary_is_not_a_conflict() {
        let confirmed = booking(BookingStatus::Confirmed, time!(14:00), time!(15:00));
        let next = TimeSlot::new(time!(15:00), time!(16:00)).unwrap();
        assert!(!confirmed.conflicts_with(7, date!(2024 - 06 - 10), &next));
    }
}
