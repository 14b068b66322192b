// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    facilities (facility_id) {
        facility_id -> BigInt,
        name -> Text,
        capacity -> Integer,
        requires_booking -> Integer,
        open_from -> Text,
        open_until -> Text,
        status -> Text,
        hourly_price_cents -> BigInt,
        created_at -> Text,
    }
}

diesel::table! {
    bookings (booking_id) {
        booking_id -> BigInt,
        facility_id -> BigInt,
        booker_id -> BigInt,
        booking_date -> Text,
        start_time -> Text,
        end_time -> Text,
        status -> Text,
        note -> Nullable<Text>,
        rejection_reason -> Nullable<Text>,
        created_at -> Text,
    }
}

diesel::table! {
    parking_spots (spot_id) {
        spot_id -> BigInt,
        building_id -> BigInt,
        floor -> Integer,
        name -> Text,
    }
}

diesel::table! {
    occupants (occupant_id) {
        occupant_id -> BigInt,
        kind -> Text,
        plate -> Text,
        model -> Nullable<Text>,
        owner_id -> Nullable<BigInt>,
        guest_name -> Nullable<Text>,
        host_resident_id -> Nullable<BigInt>,
    }
}

diesel::table! {
    spot_assignments (assignment_id) {
        assignment_id -> BigInt,
        spot_id -> BigInt,
        occupant_id -> BigInt,
        assigned_at -> Text,
        released_at -> Nullable<Text>,
    }
}

diesel::table! {
    guest_visits (visit_id) {
        visit_id -> BigInt,
        occupant_id -> BigInt,
        plate -> Text,
        guest_name -> Text,
        host_resident_id -> Nullable<BigInt>,
        host_unit_id -> BigInt,
        status -> Text,
        source -> Text,
        expected_date -> Text,
        duration_days -> Integer,
        entry_time -> Nullable<Text>,
        exit_time -> Nullable<Text>,
        assigned_spot_id -> Nullable<BigInt>,
        note -> Nullable<Text>,
        created_at -> Text,
    }
}

diesel::joinable!(bookings -> facilities (facility_id));
diesel::joinable!(spot_assignments -> parking_spots (spot_id));
diesel::joinable!(spot_assignments -> occupants (occupant_id));
diesel::joinable!(guest_visits -> occupants (occupant_id));

diesel::allow_tables_to_appear_in_same_query!(
    facilities,
    bookings,
    parking_spots,
    occupants,
    spot_assignments,
    guest_visits,
);
