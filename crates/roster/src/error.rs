//! Error types for the cake-roster crate.

use cake_projection::ProjectionError;

/// Error type for all fallible operations in the cake-roster crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    /// Returned when a record's birth date cannot be parsed or projected.
    #[error("record {id}: {source}")]
    Record {
        /// Id of the offending record.
        id: String,
        /// Underlying projection failure.
        source: ProjectionError,
    },
}
