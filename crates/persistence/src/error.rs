// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vesta_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested facility was not found.
    FacilityNotFound(i64),
    /// The requested booking was not found.
    BookingNotFound(i64),
    /// The requested parking spot was not found.
    SpotNotFound(i64),
    /// The requested occupant was not found.
    OccupantNotFound(i64),
    /// The requested guest visit was not found.
    VisitNotFound(i64),
    /// A spot with this name already exists on the same floor of the
    /// same building.
    DuplicateSpotName {
        building_id: i64,
        floor: i32,
        name: String,
    },
    /// The requested slot overlaps an existing pending or confirmed
    /// booking for the same facility and date.
    BookingConflict { facility_id: i64, date: String },
    /// Another occupant already holds this parking spot.
    SpotOccupied { spot_id: i64 },
    /// A domain rule was violated while applying a mutation.
    Domain(DomainError),
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::FacilityNotFound(id) => write!(f, "Facility not found: {id}"),
            Self::BookingNotFound(id) => write!(f, "Booking not found: {id}"),
            Self::SpotNotFound(id) => write!(f, "Parking spot not found: {id}"),
            Self::OccupantNotFound(id) => write!(f, "Occupant not found: {id}"),
            Self::VisitNotFound(id) => write!(f, "Guest visit not found: {id}"),
            Self::DuplicateSpotName {
                building_id,
                floor,
                name,
            } => {
                write!(
                    f,
                    "Spot '{name}' already exists on floor {floor} of building {building_id}"
                )
            }
            Self::BookingConflict { facility_id, date } => {
                write!(
                    f,
                    "Requested slot overlaps an existing booking for facility {facility_id} on {date}"
                )
            }
            Self::SpotOccupied { spot_id } => {
                write!(f, "Parking spot {spot_id} is already occupied")
            }
            Self::Domain(err) => write!(f, "{err}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}
