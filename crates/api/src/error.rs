// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use vesta_domain::DomainError;
use vesta_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the
/// API contract: the server layer maps each variant to an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The operation is not valid in the resource's current state.
    InvalidState {
        /// A human-readable description of the violation.
        message: String,
    },
    /// The operation conflicts with existing state (an overlapping
    /// booking, an occupied spot, a duplicate name).
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidState { message } => {
                write!(f, "Invalid state: {message}")
            }
            Self::Conflict { message } => {
                write!(f, "Conflict: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(_) => ApiError::InvalidInput {
            field: String::from("name"),
            message: err.to_string(),
        },
        DomainError::InvalidOperatingHours { .. } => ApiError::InvalidInput {
            field: String::from("open_from"),
            message: err.to_string(),
        },
        DomainError::InvalidTimeRange { .. } | DomainError::OutsideOperatingHours { .. } => {
            ApiError::InvalidInput {
                field: String::from("start_time"),
                message: err.to_string(),
            }
        }
        DomainError::InvalidPlate(_) => ApiError::InvalidInput {
            field: String::from("plate"),
            message: err.to_string(),
        },
        DomainError::InvalidGuestName(_) => ApiError::InvalidInput {
            field: String::from("guest_name"),
            message: err.to_string(),
        },
        DomainError::InvalidDurationDays { .. } => ApiError::InvalidInput {
            field: String::from("duration_days"),
            message: err.to_string(),
        },
        DomainError::EmptyDeclineReason => ApiError::InvalidInput {
            field: String::from("reason"),
            message: String::from("A decline reason is required"),
        },
        DomainError::InvalidHourRange { .. } => ApiError::InvalidInput {
            field: String::from("hours"),
            message: err.to_string(),
        },
        DomainError::InvalidFacilityStatus(_)
        | DomainError::InvalidBookingStatus(_)
        | DomainError::InvalidVisitStatus(_)
        | DomainError::InvalidVisitSource(_)
        | DomainError::InvalidOccupantKind(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
        DomainError::DateParseError { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message: err.to_string(),
        },
        DomainError::TimeParseError { .. } => ApiError::InvalidInput {
            field: String::from("time"),
            message: err.to_string(),
        },
        DomainError::FacilityClosed { .. }
        | DomainError::FacilityNotBookable { .. }
        | DomainError::InvalidBookingTransition { .. }
        | DomainError::InvalidVisitTransition { .. }
        | DomainError::VisitNotActive { .. } => ApiError::InvalidState {
            message: err.to_string(),
        },
        DomainError::DateArithmeticOverflow { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::Domain(domain_err) => translate_domain_error(domain_err),
            PersistenceError::FacilityNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Facility"),
                message: format!("Facility {id} does not exist"),
            },
            PersistenceError::BookingNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Booking"),
                message: format!("Booking {id} does not exist"),
            },
            PersistenceError::SpotNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Parking spot"),
                message: format!("Parking spot {id} does not exist"),
            },
            PersistenceError::OccupantNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Occupant"),
                message: format!("Occupant {id} does not exist"),
            },
            PersistenceError::VisitNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Guest visit"),
                message: format!("Guest visit {id} does not exist"),
            },
            PersistenceError::NotFound(message) => Self::ResourceNotFound {
                resource_type: String::from("Resource"),
                message,
            },
            PersistenceError::BookingConflict { facility_id, date } => Self::Conflict {
                message: format!(
                    "The requested slot overlaps an existing booking for facility {facility_id} on {date}"
                ),
            },
            PersistenceError::SpotOccupied { spot_id } => Self::Conflict {
                message: format!("Parking spot {spot_id} is already occupied"),
            },
            PersistenceError::DuplicateSpotName {
                building_id,
                floor,
                name,
            } => Self::Conflict {
                message: format!(
                    "A spot named '{name}' already exists on floor {floor} of building {building_id}"
                ),
            },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}
