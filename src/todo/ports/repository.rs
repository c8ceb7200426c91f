//! Repository port for todo persistence and lookup.

use crate::todo::domain::{Todo, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Implementations decide how identifiers are allocated; callers observe
/// only that [`save`](TodoRepository::save) returns the record with an
/// identifier populated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns every stored record in ascending identifier order.
    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when no record carries the identifier.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Persists a record and returns it with its identifier populated.
    ///
    /// A record without an identifier is stored as new and assigned a fresh
    /// one; a record carrying an identifier overwrites the record stored
    /// under it.
    async fn save(&self, todo: Todo) -> TodoRepositoryResult<Todo>;

    /// Removes a previously fetched record from storage.
    ///
    /// Removing a record that is no longer present is a no-op.
    async fn delete(&self, todo: &Todo) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
