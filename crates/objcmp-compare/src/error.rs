//! Error types for the compare crate.

/// Errors that can occur while comparing objects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// The two objects are not of the same runtime type.
    #[error("objects must be of the same type: {left} vs {right}")]
    InvalidComparison {
        left: &'static str,
        right: &'static str,
    },

    /// The object has no bean property with this name.
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// The two values differ but have no natural ordering.
    #[error("property {property} has no ordering between {left} and {right}")]
    Incomparable {
        property: String,
        left: &'static str,
        right: &'static str,
    },
}

/// Convenience alias for compare results.
pub type CompareResult<T> = Result<T, CompareError>;
