//! Error types for the diff crate.

use objcmp_compare::CompareError;
use objcmp_types::TypeError;

/// Errors that can occur during diff operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiffError {
    /// The inputs are absent or not of the same runtime type.
    #[error("objects must be present and of the same type: {left} vs {right}")]
    InvalidComparison {
        left: &'static str,
        right: &'static str,
    },

    /// A declared field could not be read from one of the objects.
    #[error("field access failed: {0}")]
    FieldAccess(#[from] TypeError),

    /// The parent id passed to a diff call is not in the change list.
    #[error("parent record {parent} not in change list of length {len}")]
    UnknownParent { parent: usize, len: usize },

    /// Nesting went deeper than the configured limit.
    #[error("maximum diff depth {limit} exceeded at {path}")]
    DepthExceeded { limit: usize, path: String },

    /// A property comparison failed.
    #[error("compare error: {0}")]
    Compare(#[from] CompareError),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
