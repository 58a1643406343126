//! Error types for value operations.
//!
//! Lookups never fail: absent paths resolve to `None` or a caller-supplied
//! default. The errors here cover the remaining type-constraint violations,
//! where an operation is handed a scalar in place of a container or a
//! container in place of a key.

use thiserror::Error;

use super::Key;

/// Structured error types for operations on [`Value`](super::Value).
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A scalar was supplied where a list or map is required
    #[error("{operation} requires a list or map, found {found}")]
    NotAContainer {
        operation: &'static str,
        found: &'static str,
    },

    /// A list or map was used as a key
    #[error("Illegal key type: {found}")]
    IllegalKey { found: &'static str },

    /// A row of a column sort has no value in the sort column
    #[error("Row {row} has no sort column {column:?}")]
    MissingColumn { row: Key, column: String },
}

impl ValueError {
    /// Check if this error is a container/scalar mismatch
    pub fn is_not_a_container(&self) -> bool {
        matches!(self, ValueError::NotAContainer { .. })
    }

    /// Check if this error is an unusable key
    pub fn is_illegal_key(&self) -> bool {
        matches!(self, ValueError::IllegalKey { .. })
    }

    /// Check if this error is a sort row without the sort column
    pub fn is_missing_column(&self) -> bool {
        matches!(self, ValueError::MissingColumn { .. })
    }

    /// Get the operation name if this error names one
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            ValueError::NotAContainer { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

// Conversion from ValueError to the main Error type
impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
