// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Time;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A name field is empty or invalid.
    InvalidName(String),
    /// Operating hours window is inverted or empty.
    InvalidOperatingHours {
        /// Opening time of the window.
        open_from: Time,
        /// Closing time of the window.
        open_until: Time,
    },
    /// A time interval does not satisfy `start < end`.
    InvalidTimeRange {
        /// The interval start.
        start: Time,
        /// The interval end.
        end: Time,
    },
    /// A requested interval falls outside a facility's operating hours.
    OutsideOperatingHours {
        /// The requested interval start.
        start: Time,
        /// The requested interval end.
        end: Time,
        /// Opening time of the facility.
        open_from: Time,
        /// Closing time of the facility.
        open_until: Time,
    },
    /// The facility is closed and cannot accept bookings.
    FacilityClosed {
        /// The facility name.
        facility: String,
    },
    /// The facility does not take bookings.
    FacilityNotBookable {
        /// The facility name.
        facility: String,
    },
    /// Facility status string is not a known status.
    InvalidFacilityStatus(String),
    /// Declining a booking requires a non-empty reason.
    EmptyDeclineReason,
    /// Booking status string is not a known status.
    InvalidBookingStatus(String),
    /// A booking status transition is not permitted.
    InvalidBookingTransition {
        /// The current status.
        from: String,
        /// The attempted status.
        to: String,
        /// Why the transition is rejected.
        reason: String,
    },
    /// Guest visit status string is not a known status.
    InvalidVisitStatus(String),
    /// Guest visit source string is not a known source.
    InvalidVisitSource(String),
    /// A guest visit status transition is not permitted.
    InvalidVisitTransition {
        /// The current status.
        from: String,
        /// The attempted status.
        to: String,
    },
    /// Parking can only be assigned to an active visit.
    VisitNotActive {
        /// The current visit status.
        status: String,
    },
    /// License plate is empty or invalid.
    InvalidPlate(String),
    /// Guest name is empty or invalid.
    InvalidGuestName(String),
    /// Visit duration must be at least one day.
    InvalidDurationDays {
        /// The invalid duration value.
        days: i64,
    },
    /// Occupant kind string is not a known kind.
    InvalidOccupantKind(String),
    /// Visible hour range is inverted or out of a day's bounds.
    InvalidHourRange {
        /// First visible hour.
        start_hour: u8,
        /// Last visible hour (inclusive).
        end_hour: u8,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a time of day from a string.
    TimeParseError {
        /// The invalid time string.
        value: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidOperatingHours {
                open_from,
                open_until,
            } => {
                write!(
                    f,
                    "Invalid operating hours: opens {open_from} but closes {open_until}"
                )
            }
            Self::InvalidTimeRange { start, end } => {
                write!(f, "Invalid time range: start {start} must be before end {end}")
            }
            Self::OutsideOperatingHours {
                start,
                end,
                open_from,
                open_until,
            } => {
                write!(
                    f,
                    "Interval {start}-{end} falls outside operating hours {open_from}-{open_until}"
                )
            }
            Self::FacilityClosed { facility } => {
                write!(f, "Facility '{facility}' is closed")
            }
            Self::FacilityNotBookable { facility } => {
                write!(f, "Facility '{facility}' does not take bookings")
            }
            Self::InvalidFacilityStatus(s) => write!(f, "Invalid facility status: {s}"),
            Self::EmptyDeclineReason => {
                write!(f, "Declining a booking requires a non-empty reason")
            }
            Self::InvalidBookingStatus(s) => write!(f, "Invalid booking status: {s}"),
            Self::InvalidBookingTransition { from, to, reason } => {
                write!(f, "Cannot move booking from '{from}' to '{to}': {reason}")
            }
            Self::InvalidVisitStatus(s) => write!(f, "Invalid guest visit status: {s}"),
            Self::InvalidVisitSource(s) => write!(f, "Invalid guest visit source: {s}"),
            Self::InvalidVisitTransition { from, to } => {
                write!(f, "Cannot move guest visit from '{from}' to '{to}'")
            }
            Self::VisitNotActive { status } => {
                write!(
                    f,
                    "Parking can only be assigned while the visit is active, not '{status}'"
                )
            }
            Self::InvalidPlate(msg) => write!(f, "Invalid plate: {msg}"),
            Self::InvalidGuestName(msg) => write!(f, "Invalid guest name: {msg}"),
            Self::InvalidDurationDays { days } => {
                write!(f, "Invalid visit duration: {days} days. Must be at least 1")
            }
            Self::InvalidOccupantKind(s) => write!(f, "Invalid occupant kind: {s}"),
            Self::InvalidHourRange {
                start_hour,
                end_hour,
            } => {
                write!(
                    f,
                    "Invalid visible hour range: {start_hour}..={end_hour}. Must be ascending and within 0..=23"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { value, error } => {
                write!(f, "Failed to parse date '{value}': {error}")
            }
            Self::TimeParseError { value, error } => {
                write!(f, "Failed to parse time '{value}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
