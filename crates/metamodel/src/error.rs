//! Registration errors.

use thiserror::Error;

pub type MetamodelResult<T> = Result<T, MetamodelError>;

/// Configuration error raised while registering audited types.
///
/// These surface at setup time, never while diffing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetamodelError {
    #[error("type name must not be empty")]
    InvalidTypeName,

    #[error("persistence location for type '{0}' must not be empty")]
    EmptyLocation(String),

    #[error("type '{type_name}' already persisted to '{existing}', cannot move to '{requested}'")]
    ConflictingLocation {
        type_name: String,
        existing: String,
        requested: String,
    },

    #[error("type '{0}' has no registered persistence location")]
    NotRegistered(String),

    #[error("invalid persistence table: {0}")]
    InvalidTable(String),
}
