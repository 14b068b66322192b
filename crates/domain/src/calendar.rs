// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly calendar projection for facility bookings.
//!
//! `project_week` is the read side of the booking ledger: it takes a
//! snapshot of bookings and an anchor date and produces a Monday-first
//! day×hour grid for display. It holds no state, never mutates its
//! input, and calling it twice with the same input yields the same
//! grid, so any number of readers may project concurrently.

use crate::booking::{Booking, BookingStatus};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Duration};

/// Visible hour rows of the grid, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    /// First visible hour.
    pub start_hour: u8,
    /// Last visible hour (inclusive).
    pub end_hour: u8,
}

impl HourRange {
    /// Creates a validated hour range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHourRange` if the range is inverted
    /// or extends past hour 23.
    pub const fn new(start_hour: u8, end_hour: u8) -> Result<Self, DomainError> {
        if start_hour > end_hour || end_hour > 23 {
            return Err(DomainError::InvalidHourRange {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }
}

impl Default for HourRange {
    /// The default visible range, 08:00 through 22:00 inclusive.
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 22,
        }
    }
}

/// One booking placed on the grid.
///
/// `span_hours` is a display hint for layout; it is computed from the
/// slot and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// The projected booking.
    pub booking_id: i64,
    /// The requesting resident.
    pub booker_id: i64,
    /// Slot start, `HH:MM`.
    pub start_time: String,
    /// Slot end (exclusive), `HH:MM`.
    pub end_time: String,
    /// Number of hour rows the booking spans, at least 1.
    pub span_hours: u8,
    /// Workflow status (`pending` or `confirmed`; cancelled bookings
    /// are never projected).
    pub status: BookingStatus,
}

/// One hour row of one day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSlot {
    /// The hour of day this row represents.
    pub hour: u8,
    /// Bookings starting within this hour.
    pub entries: Vec<CalendarEntry>,
}

/// One day column, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayColumn {
    /// The calendar date of this column.
    pub date: Date,
    /// The visible hour rows.
    pub hours: Vec<HourSlot>,
}

/// A projected week: exactly seven consecutive dates starting Monday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekGrid {
    /// The Monday of the projected week.
    pub monday: Date,
    /// The seven day columns, Monday first.
    pub days: Vec<DayColumn>,
}

/// Computes the Monday of the ISO week containing `anchor`.
///
/// Any of the seven dates of a week anchors the same Monday; a Sunday
/// anchor resolves six days back.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the date underflows
/// the calendar range.
pub fn week_monday(anchor: Date) -> Result<Date, DomainError> {
    let days_back: i64 = i64::from(anchor.weekday().number_days_from_monday());
    anchor
        .checked_sub(Duration::days(days_back))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: String::from("computing the Monday of the anchor week"),
        })
}

/// Projects a snapshot of bookings onto the week containing `anchor`.
///
/// Cancelled bookings are excluded. A booking appears in the hour row
/// matching its start hour on its date's column; bookings outside the
/// visible hour range or outside the week simply do not appear.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if week date
/// arithmetic leaves the calendar range.
pub fn project_week(
    bookings: &[Booking],
    anchor: Date,
    hours: HourRange,
) -> Result<WeekGrid, DomainError> {
    let monday: Date = week_monday(anchor)?;

    let mut days: Vec<DayColumn> = Vec::with_capacity(7);
    for offset in 0..7_i64 {
        let date: Date = monday.checked_add(Duration::days(offset)).ok_or_else(|| {
            DomainError::DateArithmeticOverflow {
                operation: String::from("advancing through the projected week"),
            }
        })?;

        let hour_rows: Vec<HourSlot> = (hours.start_hour..=hours.end_hour)
            .map(|hour| HourSlot {
                hour,
                entries: entries_for(bookings, date, hour),
            })
            .collect();

        days.push(DayColumn {
            date,
            hours: hour_rows,
        });
    }

    Ok(WeekGrid { monday, days })
}

/// Collects the grid entries for one day/hour cell.
fn entries_for(bookings: &[Booking], date: Date, hour: u8) -> Vec<CalendarEntry> {
    bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .filter(|b| b.date == date && b.slot.start().hour() == hour)
        .map(|b| CalendarEntry {
            booking_id: b.booking_id,
            booker_id: b.booker_id,
            start_time: crate::validation::format_time(b.slot.start()),
            end_time: crate::validation::format_time(b.slot.end()),
            span_hours: b.slot.span_hours(),
            status: b.status,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::time_slot::TimeSlot;
    use time::macros::{date, time};

    fn booking(id: i64, date: Date, start: time::Time, end: time::Time) -> Booking {
        Booking {
            booking_id: id,
            facility_id: 1,
            booker_id: 10,
            date,
            slot: TimeSlot::new(start, end).unwrap(),
            status: BookingStatus::Confirmed,
            note: None,
            rejection_reason: None,
            created_at: String::from("2024-06-01T09:00:00Z"),
        }
    }

    #[test]
    fn test_monday_anchor_is_its_own_monday() {
        // 2024-06-10 is a Monday.
        assert_eq!(
            week_monday(date!(2024 - 06 - 10)).unwrap(),
            date!(2024 - 06 - 10)
        );
    }

    #[test]
    fn test_sunday_anchor_resolves_six_days_back() {
        // 2024-06-16 is a Sunday.
        assert_eq!(
            week_monday(date!(2024 - 06 - 16)).unwrap(),
            date!(2024 - 06 - 10)
        );
    }

    #[test]
    fn test_monday_computation_rolls_over_month_boundary() {
        // 2024-07-03 is a Wednesday; its Monday falls in the same week
        // but computing it from 2024-07-01 and 2024-06-30 crosses months.
        assert_eq!(
            week_monday(date!(2024 - 07 - 03)).unwrap(),
            date!(2024 - 07 - 01)
        );
        assert_eq!(
            week_monday(date!(2024 - 06 - 30)).unwrap(),
            date!(2024 - 06 - 24)
        );
    }

    #[test]
    fn test_every_anchor_of_a_week_yields_the_same_grid() {
        let bookings = vec![booking(1, date!(2024 - 06 - 12), time!(14:00), time!(15:00))];
        let reference = project_week(&bookings, date!(2024 - 06 - 10), HourRange::default())
            .unwrap();

        for offset in 0..7 {
            let anchor = date!(2024 - 06 - 10)
                .checked_add(Duration::days(offset))
                .unwrap();
            let grid = project_week(&bookings, anchor, HourRange::default()).unwrap();
            assert_eq!(grid, reference);
        }
    }

    #[test]
    fn test_projection_is_idempotent() {
        let bookings = vec![
            booking(1, date!(2024 - 06 - 10), time!(08:00), time!(09:00)),
            booking(2, date!(2024 - 06 - 13), time!(19:00), time!(22:00)),
        ];
        let first = project_week(&bookings, date!(2024 - 06 - 11), HourRange::default()).unwrap();
        let second = project_week(&bookings, date!(2024 - 06 - 11), HourRange::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_grid_has_seven_monday_first_days() {
        let grid = project_week(&[], date!(2024 - 06 - 13), HourRange::default()).unwrap();
        assert_eq!(grid.days.len(), 7);
        assert_eq!(grid.days[0].date, date!(2024 - 06 - 10));
        assert_eq!(grid.days[6].date, date!(2024 - 06 - 16));
    }

    #[test]
    fn test_default_range_covers_8_through_22() {
        let grid = project_week(&[], date!(2024 - 06 - 10), HourRange::default()).unwrap();
        let hours: Vec<u8> = grid.days[0].hours.iter().map(|h| h.hour).collect();
        assert_eq!(hours.first(), Some(&8));
        assert_eq!(hours.last(), Some(&22));
        assert_eq!(hours.len(), 15);
    }

    #[test]
    fn test_booking_lands_in_its_start_hour_cell() {
        let bookings = vec![booking(5, date!(2024 - 06 - 12), time!(14:00), time!(17:00))];
        let grid = project_week(&bookings, date!(2024 - 06 - 12), HourRange::default()).unwrap();

        // Wednesday column, 14:00 row.
        let wednesday = &grid.days[2];
        let row = wednesday.hours.iter().find(|h| h.hour == 14).unwrap();
        assert_eq!(row.entries.len(), 1);
        assert_eq!(row.entries[0].booking_id, 5);
        assert_eq!(row.entries[0].span_hours, 3);
        assert_eq!(row.entries[0].start_time, "14:00");
        assert_eq!(row.entries[0].end_time, "17:00");

        // It occupies only its start row; later rows stay empty.
        let later = wednesday.hours.iter().find(|h| h.hour == 15).unwrap();
        assert!(later.entries.is_empty());
    }

    #[test]
    fn test_cancelled_bookings_are_excluded() {
        let mut cancelled = booking(9, date!(2024 - 06 - 10), time!(10:00), time!(11:00));
        cancelled.status = BookingStatus::Cancelled;
        let grid =
            project_week(&[cancelled], date!(2024 - 06 - 10), HourRange::default()).unwrap();
        assert!(grid.days.iter().all(|d| d.hours.iter().all(|h| h.entries.is_empty())));
    }

    #[test]
    fn test_invalid_hour_range_rejected() {
        assert!(HourRange::new(10, 9).is_err());
        assert!(HourRange::new(8, 24).is_err());
        assert!(HourRange::new(0, 23).is_ok());
    }
}
