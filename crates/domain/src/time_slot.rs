// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Half-open time intervals for facility scheduling.
//!
//! A slot covers `[start, end)`: the end instant itself is free, so
//! back-to-back bookings that touch at an endpoint do not conflict.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Time;

/// A half-open `[start, end)` interval within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    start: Time,
    end: Time,
}

impl TimeSlot {
    /// Creates a slot, requiring `start < end`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeRange` if the interval is empty
    /// or inverted.
    pub fn new(start: Time, end: Time) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The interval start.
    #[must_use]
    pub const fn start(&self) -> Time {
        self.start
    }

    /// The interval end (exclusive).
    #[must_use]
    pub const fn end(&self) -> Time {
        self.end
    }

    /// Returns true if the two half-open intervals share any instant.
    ///
    /// Touching endpoints (one slot ending exactly where the other
    /// starts) do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns true if this slot lies entirely within `[open_from, open_until]`.
    #[must_use]
    pub fn within(&self, open_from: Time, open_until: Time) -> bool {
        self.start >= open_from && self.end <= open_until
    }

    /// Number of hour rows the slot spans on the calendar grid.
    ///
    /// Display hint only: a slot shorter than an hour still occupies
    /// one row.
    #[must_use]
    pub const fn span_hours(&self) -> u8 {
        let start_hour: u8 = self.start.hour();
        let end_hour: u8 = self.end.hour();
        if end_hour > start_hour {
            end_hour - start_hour
        } else {
            1
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::time;

    #[test]
    fn test_rejects_inverted_and_empty_ranges() {
        assert!(TimeSlot::new(time!(11:00), time!(10:00)).is_err());
        assert!(TimeSlot::new(time!(10:00), time!(10:00)).is_err());
        assert!(TimeSlot::new(time!(10:00), time!(11:00)).is_ok());
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let morning = TimeSlot::new(time!(10:00), time!(11:00)).unwrap();
        let next = TimeSlot::new(time!(11:00), time!(12:00)).unwrap();
        assert!(!morning.overlaps(&next));
        assert!(!next.overlaps(&morning));
    }

    #[test]
    fn test_partial_overlap_detected() {
        let first = TimeSlot::new(time!(14:00), time!(15:00)).unwrap();
        let second = TimeSlot::new(time!(14:30), time!(15:30)).unwrap();
        assert!(first.overlaps(&second));
        assert!(second.overlaps(&first));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = TimeSlot::new(time!(09:00), time!(17:00)).unwrap();
        let inner = TimeSlot::new(time!(12:00), time!(13:00)).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_within_operating_hours() {
        let slot = TimeSlot::new(time!(08:00), time!(10:00)).unwrap();
        assert!(slot.within(time!(08:00), time!(22:00)));
        assert!(!slot.within(time!(09:00), time!(22:00)));
        assert!(!slot.within(time!(08:00), time!(09:00)));
    }

    #[test]
    fn test_span_hours() {
        let one = TimeSlot::new(time!(14:00), time!(15:00)).unwrap();
        assert_eq!(one.span_hours(), 1);

        let three = TimeSlot::new(time!(14:00), time!(17:00)).unwrap();
        assert_eq!(three.span_hours(), 3);

        // Sub-hour slots still occupy a single grid row.
        let short = TimeSlot::new(time!(14:15), time!(14:45)).unwrap();
        assert_eq!(short.span_hours(), 1);
    }
}
