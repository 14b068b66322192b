// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation operations.
//!
//! Every check-then-act sequence here runs inside a single `SQLite`
//! transaction: the booking conflict check and insert, the approve-time
//! re-check, the spot occupancy check and assignment, and the
//! check-out that releases a held spot. Two callers racing on the same
//! facility/date or spot serialize at the store and exactly one of
//! them wins.

mod bookings;
mod facilities;
mod guest_visits;
mod parking;

pub use bookings::{approve_booking, cancel_booking, decline_booking, insert_booking_checked};
pub use facilities::{insert_facility, update_facility_status};
pub use guest_visits::{assign_visit_parking, check_in_visit, check_out_visit, insert_visit};
pub use parking::{assign_spot, insert_occupant, insert_spot, release_occupant};
