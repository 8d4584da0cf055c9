//! Error types for the difference model.

/// Errors that can occur when building or projecting differences.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// The declaration name was empty.
    #[error("difference name must be non-empty")]
    EmptyName,

    /// The source path was empty.
    #[error("difference path must be non-empty")]
    EmptyPath,

    /// A modification difference was requested with no modification entries.
    #[error("modification difference {name:?} has no modification entries")]
    EmptyModifications { name: String },

    /// Serialization error while writing a report.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for difference-model results.
pub type DiffResult<T> = Result<T, DiffError>;
