// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking ledger mutations.
//!
//! The no-overlap invariant lives here: for a given facility and date,
//! no two bookings with status pending or confirmed may overlap under
//! half-open interval semantics. Both the admission path and the
//! approval re-check query overlaps and mutate within one transaction.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::Date;
use tracing::{debug, info};
use vesta_domain::{
    Booking, BookingStatus, DomainError, Facility, TimeSlot, format_time,
    validate_decline_reason,
};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::NewBooking;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use crate::queries;

/// Admits a new booking request after checking facility preconditions
/// and the no-overlap invariant.
///
/// The precondition checks, conflict query and insert execute as one
/// transaction scoped to `(facility_id, date)`.
///
/// # Errors
///
/// Returns `FacilityNotFound` for an unknown facility, a domain error
/// if the facility is closed, unbookable or the slot is out of hours,
/// and `BookingConflict` if the slot overlaps an existing pending or
/// confirmed booking.
pub fn insert_booking_checked(
    conn: &mut SqliteConnection,
    facility_id: i64,
    booker_id: i64,
    date: Date,
    slot: TimeSlot,
    note: Option<String>,
    created_at: &str,
) -> Result<Booking, PersistenceError> {
    conn.transaction::<Booking, PersistenceError, _>(|conn| {
        let facility: Facility = queries::get_facility(conn, facility_id)?;
        facility.check_booking_preconditions(&slot)?;

        let date_str: String = date.to_string();
        let overlaps: i64 =
            queries::count_blocking_overlaps(conn, facility_id, &date_str, &slot, None)?;
        if overlaps > 0 {
            debug!(
                facility_id,
                date = %date_str,
                "Rejecting booking request: slot overlaps an existing booking"
            );
            return Err(PersistenceError::BookingConflict {
                facility_id,
                date: date_str,
            });
        }

        let record = NewBooking {
            facility_id,
            booker_id,
            booking_date: date_str,
            start_time: format_time(slot.start()),
            end_time: format_time(slot.end()),
            status: BookingStatus::Pending.as_str().to_string(),
            note,
            created_at: created_at.to_string(),
        };
        diesel::insert_into(bookings::table)
            .values(&record)
            .execute(conn)?;
        let booking_id: i64 = get_last_insert_rowid(conn)?;

        info!(booking_id, facility_id, "Admitted pending booking");
        queries::get_booking(conn, booking_id)
    })
}

/// Approves a pending booking.
///
/// The no-overlap invariant is re-validated at approval time: a second
/// pending request may have been admitted since this one was filed. On
/// a late conflict the booking is left pending for manual resolution
/// and `BookingConflict` is returned.
///
/// # Errors
///
/// Returns `BookingNotFound`, an invalid-transition domain error if the
/// booking is not pending, or `BookingConflict` on a late conflict.
pub fn approve_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Booking, PersistenceError> {
    conn.transaction::<Booking, PersistenceError, _>(|conn| {
        let booking: Booking = queries::get_booking(conn, booking_id)?;
        booking.status.validate_transition(BookingStatus::Confirmed)?;

        let date_str: String = booking.date.to_string();
        let overlaps: i64 = queries::count_blocking_overlaps(
            conn,
            booking.facility_id,
            &date_str,
            &booking.slot,
            Some(booking_id),
        )?;
        if overlaps > 0 {
            // Leave the booking pending; an administrator has to pick
            // which of the contenders survives.
            debug!(booking_id, "Late conflict at approval time");
            return Err(PersistenceError::BookingConflict {
                facility_id: booking.facility_id,
                date: date_str,
            });
        }

        diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
            .set(bookings::status.eq(BookingStatus::Confirmed.as_str()))
            .execute(conn)?;

        info!(booking_id, "Approved booking");
        queries::get_booking(conn, booking_id)
    })
}

/// Declines a pending booking, storing the required reason.
///
/// # Errors
///
/// Returns `BookingNotFound`, `EmptyDeclineReason` if the reason is
/// blank, or an invalid-transition domain error if the booking is not
/// pending.
pub fn decline_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
    reason: &str,
) -> Result<Booking, PersistenceError> {
    validate_decline_reason(reason)?;

    conn.transaction::<Booking, PersistenceError, _>(|conn| {
        let booking: Booking = queries::get_booking(conn, booking_id)?;
        // Decline is an administrator verdict on a request; a confirmed
        // booking can only be cancelled, not declined.
        if booking.status != BookingStatus::Pending {
            return Err(PersistenceError::Domain(
                DomainError::InvalidBookingTransition {
                    from: booking.status.as_str().to_string(),
                    to: BookingStatus::Cancelled.as_str().to_string(),
                    reason: String::from("only pending bookings can be declined"),
                },
            ));
        }

        diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
            .set((
                bookings::status.eq(BookingStatus::Cancelled.as_str()),
                bookings::rejection_reason.eq(Some(reason.to_string())),
            ))
            .execute(conn)?;

        info!(booking_id, "Declined booking");
        queries::get_booking(conn, booking_id)
    })
}

/// Cancels a booking at the resident's request.
///
/// Valid from pending or confirmed; no reason is recorded.
///
/// # Errors
///
/// Returns `BookingNotFound` or an invalid-transition domain error if
/// the booking is already cancelled.
pub fn cancel_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Booking, PersistenceError> {
    conn.transaction::<Booking, PersistenceError, _>(|conn| {
        let booking: Booking = queries::get_booking(conn, booking_id)?;
        booking.status.validate_transition(BookingStatus::Cancelled)?;

        diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
            .set(bookings::status.eq(BookingStatus::Cancelled.as_str()))
            .execute(conn)?;

        info!(booking_id, "Cancelled booking");
        queries::get_booking(conn, booking_id)
    })
}
