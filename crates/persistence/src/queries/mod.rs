// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only query operations.

mod bookings;
mod facilities;
mod guest_visits;
mod parking;

pub use bookings::{count_blocking_overlaps, get_booking, list_bookings_for_facility};
pub use facilities::{get_facility, list_facilities};
pub use guest_visits::get_visit;
pub use parking::{floor_occupancy, get_occupant, get_spot, occupant_of, spot_of};
