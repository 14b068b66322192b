// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly calendar projection for a facility.

use time::{Date, Duration};
use tracing::debug;
use vesta_domain::{Booking, HourRange, WeekGrid, project_week, week_monday};
use vesta_persistence::Persistence;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::WeekGridResponse;

/// Projects a facility's bookings onto the week grid for the week
/// containing `anchor`.
///
/// Any date within the week may be the anchor; the projection always
/// starts on that week's Monday and covers seven days.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown facility, `InvalidInput`
/// for a degenerate hour range, and `Internal` if the week cannot be
/// computed.
pub fn week_calendar(
    persistence: &mut Persistence,
    facility_id: i64,
    anchor: Date,
    hours: HourRange,
) -> Result<WeekGridResponse, ApiError> {
    debug!(facility_id, anchor = %anchor, "Projecting week calendar");
    let monday: Date = week_monday(anchor).map_err(translate_domain_error)?;
    let sunday: Date = monday
        .checked_add(Duration::days(6))
        .ok_or_else(|| ApiError::Internal {
            message: format!("Week starting {monday} exceeds the supported date range"),
        })?;

    let bookings: Vec<Booking> =
        persistence.list_bookings_for_facility(facility_id, monday, sunday)?;

    let grid: WeekGrid = project_week(&bookings, anchor, hours).map_err(translate_domain_error)?;
    Ok(WeekGridResponse::from_grid(facility_id, grid))
}
