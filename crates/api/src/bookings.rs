// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking ledger operations: request admission and the
//! approve/decline/cancel workflow.

use time::Date;
use tracing::debug;
use vesta_domain::TimeSlot;
use vesta_persistence::Persistence;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{BookingResponse, DeclineBookingRequest, RequestBookingRequest};

/// Files a booking request for a facility. The booking is admitted as
/// pending; confirmation is a separate approval step.
///
/// # Errors
///
/// Returns `InvalidInput` for a degenerate or out-of-hours slot,
/// `ResourceNotFound` for an unknown facility, `InvalidState` if the
/// facility is closed or unbookable, and `Conflict` if the slot
/// overlaps an existing pending or confirmed booking.
pub fn request_booking(
    persistence: &mut Persistence,
    facility_id: i64,
    request: RequestBookingRequest,
) -> Result<BookingResponse, ApiError> {
    debug!(facility_id, booker_id = request.booker_id, date = %request.date, "Requesting booking");

    let slot: TimeSlot =
        TimeSlot::new(request.start_time, request.end_time).map_err(translate_domain_error)?;

    let booking = persistence.request_booking(
        facility_id,
        request.booker_id,
        request.date,
        slot,
        request.note,
    )?;
    Ok(booking.into())
}

/// Approves a pending booking.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown booking, `InvalidState`
/// if it is not pending, and `Conflict` on a late overlap (the booking
/// stays pending).
pub fn approve_booking(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<BookingResponse, ApiError> {
    debug!(booking_id, "Approving booking");
    let booking = persistence.approve_booking(booking_id)?;
    Ok(booking.into())
}

/// Declines a pending booking with a required reason.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank reason, `ResourceNotFound` for
/// an unknown booking, and `InvalidState` if it is not pending.
pub fn decline_booking(
    persistence: &mut Persistence,
    booking_id: i64,
    request: &DeclineBookingRequest,
) -> Result<BookingResponse, ApiError> {
    debug!(booking_id, "Declining booking");
    let booking = persistence.decline_booking(booking_id, &request.reason)?;
    Ok(booking.into())
}

/// Cancels a pending or confirmed booking at the resident's request.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown booking and
/// `InvalidState` if it is already cancelled.
pub fn cancel_booking(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<BookingResponse, ApiError> {
    debug!(booking_id, "Cancelling booking");
    let booking = persistence.cancel_booking(booking_id)?;
    Ok(booking.into())
}

/// Retrieves a booking.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown booking.
pub fn get_booking(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<BookingResponse, ApiError> {
    let booking = persistence.get_booking(booking_id)?;
    Ok(booking.into())
}

/// Lists a facility's bookings in an inclusive date range.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown facility.
pub fn list_bookings(
    persistence: &mut Persistence,
    facility_id: i64,
    from: Date,
    to: Date,
) -> Result<Vec<BookingResponse>, ApiError> {
    let bookings = persistence.list_bookings_for_facility(facility_id, from, to)?;
    Ok(bookings.into_iter().map(Into::into).collect())
}
