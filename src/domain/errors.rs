use thiserror::Error;

/// Failure reported by a repository implementation
///
/// Variants describe what went wrong from the caller's point of view,
/// independent of the backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The addressed record does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// A uniqueness constraint rejected the write
    #[error("{0}")]
    UniqueViolation(String),

    /// The write references a user or post that does not exist
    #[error("{0}")]
    MissingReference(String),

    /// The store rejected a value in the request, e.g. text it cannot encode
    #[error("{0}")]
    InvalidInput(String),

    /// The delete was rejected because other records still reference the row
    #[error("{0}")]
    StillReferenced(String),

    /// Any other store failure
    #[error("database error: {0}")]
    Database(String),
}
