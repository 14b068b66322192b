// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking queries.
//!
//! Dates and times are stored as zero-padded ISO strings, so the
//! range and overlap filters below compare strings and get temporal
//! order for free.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::Date;
use vesta_domain::{Booking, BookingStatus, TimeSlot, format_time};

use crate::data_models::BookingRow;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Statuses that occupy their slot for conflict purposes.
const BLOCKING_STATUSES: [&str; 2] = [
    BookingStatus::Pending.as_str(),
    BookingStatus::Confirmed.as_str(),
];

/// Retrieves a booking by id.
///
/// # Errors
///
/// Returns `BookingNotFound` for an unknown id.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Booking, PersistenceError> {
    bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .first::<BookingRow>(conn)
        .optional()?
        .ok_or(PersistenceError::BookingNotFound(booking_id))?
        .into_domain()
}

/// Lists bookings for a facility within an inclusive date range,
/// ordered by date then start time.
///
/// # Errors
///
/// Returns `FacilityNotFound` for an unknown facility.
pub fn list_bookings_for_facility(
    conn: &mut SqliteConnection,
    facility_id: i64,
    from: Date,
    to: Date,
) -> Result<Vec<Booking>, PersistenceError> {
    let _ = super::facilities::get_facility(conn, facility_id)?;

    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::facility_id.eq(facility_id))
        .filter(bookings::booking_date.ge(from.to_string()))
        .filter(bookings::booking_date.le(to.to_string()))
        .order((bookings::booking_date.asc(), bookings::start_time.asc()))
        .load::<BookingRow>(conn)?;

    rows.into_iter().map(BookingRow::into_domain).collect()
}

/// Counts pending/confirmed bookings for `(facility_id, date)` whose
/// half-open interval overlaps `slot`, optionally excluding one booking
/// (the approval re-check excludes the booking being approved).
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_blocking_overlaps(
    conn: &mut SqliteConnection,
    facility_id: i64,
    date: &str,
    slot: &TimeSlot,
    exclude_booking_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    let start: String = format_time(slot.start());
    let end: String = format_time(slot.end());

    let mut query = bookings::table
        .filter(bookings::facility_id.eq(facility_id))
        .filter(bookings::booking_date.eq(date))
        .filter(bookings::status.eq_any(BLOCKING_STATUSES))
        // Half-open overlap: existing.start < new.end AND existing.end > new.start.
        .filter(bookings::start_time.lt(end))
        .filter(bookings::end_time.gt(start))
        .into_boxed();

    if let Some(id) = exclude_booking_id {
        query = query.filter(bookings::booking_id.ne(id));
    }

    Ok(query.count().get_result::<i64>(conn)?)
}
