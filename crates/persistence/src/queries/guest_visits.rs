// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest visit queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use vesta_domain::GuestVisit;

use crate::data_models::GuestVisitRow;
use crate::diesel_schema::guest_visits;
use crate::error::PersistenceError;

/// Retrieves a guest visit by id.
///
/// # Errors
///
/// Returns `VisitNotFound` for an unknown id.
pub fn get_visit(
    conn: &mut SqliteConnection,
    visit_id: i64,
) -> Result<GuestVisit, PersistenceError> {
    guest_visits::table
        .filter(guest_visits::visit_id.eq(visit_id))
        .first::<GuestVisitRow>(conn)
        .optional()?
        .ok_or(PersistenceError::VisitNotFound(visit_id))?
        .into_domain()
}
