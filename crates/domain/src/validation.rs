// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validation and the string forms shared with storage and the API.
//!
//! Dates travel as ISO `YYYY-MM-DD`, times of day as zero-padded
//! `HH:MM`. Both orderings match lexicographic string order, which the
//! store's conflict queries rely on.

use crate::error::DomainError;
use time::macros::format_description;
use time::{Date, Time};

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]");

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is malformed.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses a zero-padded `HH:MM` time of day.
///
/// # Errors
///
/// Returns `DomainError::TimeParseError` if the string is malformed.
pub fn parse_time(value: &str) -> Result<Time, DomainError> {
    Time::parse(value, TIME_FORMAT).map_err(|e| DomainError::TimeParseError {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a time of day as zero-padded `HH:MM`.
#[must_use]
pub fn format_time(value: Time) -> String {
    format!("{:02}:{:02}", value.hour(), value.minute())
}

/// Validates administrator-supplied facility fields.
///
/// # Errors
///
/// Returns an error if the name is empty or the operating hours window
/// is inverted or empty.
pub fn validate_facility_fields(
    name: &str,
    open_from: Time,
    open_until: Time,
) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Facility name cannot be empty",
        )));
    }
    if open_from >= open_until {
        return Err(DomainError::InvalidOperatingHours {
            open_from,
            open_until,
        });
    }
    Ok(())
}

/// Validates administrator-supplied parking spot fields.
///
/// Uniqueness within `(building, floor)` is a store constraint and is
/// not checked here.
///
/// # Errors
///
/// Returns an error if the spot name is empty.
pub fn validate_spot_fields(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Parking spot name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates resident vehicle registration input.
///
/// # Errors
///
/// Returns `DomainError::InvalidPlate` if the plate is empty.
pub fn validate_vehicle_fields(plate: &str) -> Result<(), DomainError> {
    if plate.trim().is_empty() {
        return Err(DomainError::InvalidPlate(String::from(
            "Plate cannot be empty",
        )));
    }
    Ok(())
}

/// Validates guest visit registration input.
///
/// # Errors
///
/// Returns an error if the plate or guest name is empty, or the
/// announced duration is shorter than one day.
pub fn validate_guest_registration(
    plate: &str,
    guest_name: &str,
    duration_days: i64,
) -> Result<(), DomainError> {
    if plate.trim().is_empty() {
        return Err(DomainError::InvalidPlate(String::from(
            "Plate cannot be empty",
        )));
    }
    if guest_name.trim().is_empty() {
        return Err(DomainError::InvalidGuestName(String::from(
            "Guest name cannot be empty",
        )));
    }
    if duration_days < 1 {
        return Err(DomainError::InvalidDurationDays {
            days: duration_days,
        });
    }
    Ok(())
}

/// Validates the reason given when declining a booking.
///
/// # Errors
///
/// Returns `DomainError::EmptyDeclineReason` if the reason is empty or
/// whitespace.
pub fn validate_decline_reason(reason: &str) -> Result<(), DomainError> {
    if reason.trim().is_empty() {
        return Err(DomainError::EmptyDeclineReason);
    }
    Ok(())
}
