// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest vehicle visits and their gate lifecycle.
//!
//! A visit moves strictly `pending → active → completed`. Check-in
//! stamps the entry time; check-out stamps the exit time and releases
//! any parking spot the visit held. No state may be skipped and
//! `completed` is terminal.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Lifecycle states of a guest visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    /// Announced but not yet at the gate.
    Pending,
    /// Checked in; the guest is on site.
    Active,
    /// Checked out.
    Completed,
}

impl VisitStatus {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns true if this status has no outgoing transitions.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Validates a transition from this status to another.
    ///
    /// Only the two forward steps are permitted; in particular a
    /// pending visit cannot jump straight to completed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVisitTransition` otherwise.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        let valid: bool = matches!(
            (self, new_status),
            (Self::Pending, Self::Active) | (Self::Active, Self::Completed)
        );

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidVisitTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
            })
        }
    }
}

impl FromStr for VisitStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidVisitStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a visit was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitSource {
    /// Registered ahead of time through the resident app.
    App,
    /// Entered by front-desk staff for a walk-in already at the gate.
    Manual,
    /// Phoned in to the front desk.
    Phone,
}

impl VisitSource {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Manual => "manual",
            Self::Phone => "phone",
        }
    }

    /// The lifecycle state a freshly registered visit starts in.
    ///
    /// Manual registration models a walk-in already at the gate, so it
    /// starts directly `active` with the entry time stamped at
    /// registration. Every other source starts `pending`.
    #[must_use]
    pub const fn initial_status(&self) -> VisitStatus {
        match self {
            Self::Manual => VisitStatus::Active,
            Self::App | Self::Phone => VisitStatus::Pending,
        }
    }
}

impl FromStr for VisitSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "app" => Ok(Self::App),
            "manual" => Ok(Self::Manual),
            "phone" => Ok(Self::Phone),
            _ => Err(DomainError::InvalidVisitSource(s.to_string())),
        }
    }
}

/// The record of a guest vehicle's expected or actual presence on site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestVisit {
    /// Canonical numeric identifier assigned by the store.
    pub visit_id: i64,
    /// The occupant record backing this visit's vehicle.
    pub occupant_id: i64,
    /// License plate of the guest vehicle.
    pub plate: String,
    /// The guest's name.
    pub guest_name: String,
    /// Hosting resident, when known.
    pub host_resident_id: Option<i64>,
    /// The hosting unit (external reference).
    pub host_unit_id: i64,
    /// Lifecycle status.
    pub status: VisitStatus,
    /// Registration channel.
    pub source: VisitSource,
    /// The date the guest is expected.
    pub expected_date: Date,
    /// Announced length of stay in days.
    pub duration_days: u16,
    /// RFC 3339 timestamp stamped at check-in.
    pub entry_time: Option<String>,
    /// RFC 3339 timestamp stamped at check-out.
    pub exit_time: Option<String>,
    /// Parking spot assigned to this visit, if any. Kept after
    /// check-out as a historical record; live occupancy is tracked by
    /// the occupancy registry.
    pub assigned_spot_id: Option<i64>,
    /// Optional front-desk note.
    pub note: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            VisitStatus::Pending,
            VisitStatus::Active,
            VisitStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<VisitStatus>().unwrap(), status);
        }
        assert!("departed".parse::<VisitStatus>().is_err());
    }

    #[test]
    fn test_forward_transitions_only() {
        assert!(
            VisitStatus::Pending
                .validate_transition(VisitStatus::Active)
                .is_ok()
        );
        assert!(
            VisitStatus::Active
                .validate_transition(VisitStatus::Completed)
                .is_ok()
        );
    }

    #[test]
    fn test_pending_cannot_skip_to_completed() {
        assert!(
            VisitStatus::Pending
                .validate_transition(VisitStatus::Completed)
                .is_err()
        );
    }

    #[test]
    fn test_completed_is_terminal() {
        assert!(VisitStatus::Completed.is_terminal());
        for to in [
            VisitStatus::Pending,
            VisitStatus::Active,
            VisitStatus::Completed,
        ] {
            assert!(VisitStatus::Completed.validate_transition(to).is_err());
        }
    }

    #[test]
    fn test_no_backward_transitions() {
        assert!(
            VisitStatus::Active
                .validate_transition(VisitStatus::Pending)
                .is_err()
        );
    }

    #[test]
    fn test_manual_source_starts_active() {
        assert_eq!(VisitSource::Manual.initial_status(), VisitStatus::Active);
        assert_eq!(VisitSource::App.initial_status(), VisitStatus::Pending);
        assert_eq!(VisitSource::Phone.initial_status(), VisitStatus::Pending);
    }

    #[test]
    fn test_source_round_trip() {
        for source in [VisitSource::App, VisitSource::Manual, VisitSource::Phone] {
            assert_eq!(source.as_str().parse::<VisitSource>().unwrap(), source);
        }
        assert!("fax".parse::<VisitSource>().is_err());
    }
}
