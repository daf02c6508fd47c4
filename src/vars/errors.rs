use thiserror::Error;

use super::types::VarType;

/// Errors that can arise while manipulating world variables.
#[derive(Debug, Error)]
pub enum VarError {
    /// Returned when looking up a variable that is not present.
    #[error("variable not found: {0}")]
    NotFound(String),

    /// Returned when creating a variable whose name is already taken.
    #[error("variable name already exists: {0}")]
    DuplicateName(String),

    /// Returned when a raw value fails validation for its declared type,
    /// or when a stored value is corrupt for a requested numeric operation.
    #[error("value '{value}' is not a valid {var_type}")]
    InvalidFormat { var_type: VarType, value: String },

    /// Returned when coercing a value to a type that has no defined conversion.
    #[error("{var_type} values cannot be read as {wanted}")]
    UnsupportedConversion {
        var_type: VarType,
        wanted: &'static str,
    },

    /// Returned when arithmetic is attempted on a non-numeric variable.
    #[error("{0} variables do not support arithmetic")]
    UnsupportedOperation(VarType),

    /// Wrapper around IO errors (directory creation, file reads).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around serde_json serialization and deserialization errors.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
