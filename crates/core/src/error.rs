use crate::types::EntityId;

/// Failures raised by an [`EntityStore`](crate::store::EntityStore) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write (primary key or one-per-employee index).
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    /// The record targeted by a remove does not exist.
    #[error("Record missing: {0}")]
    Missing(String),

    /// Stored data references a record that cannot be resolved.
    #[error("Store inconsistency: {0}")]
    Inconsistent(String),

    /// The backend is unreachable or failed unexpectedly.
    #[error("Store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id:?}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("{entity} already exists for employee {id}")]
    AlreadyExists { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Employee {id} is reached more than once (shared or cyclic report)")]
    EmployeeRevisited { id: EntityId },

    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: impl Into<EntityId>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}
