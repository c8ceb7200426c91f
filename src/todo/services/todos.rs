//! Service layer for todo management.
//!
//! Provides [`TodoService`] which coordinates listing, lookup, creation,
//! update, and deletion of todo records against a repository port.

use crate::todo::{
    domain::{Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// No record carries the requested identifier.
    #[error("Todo with id: {0} not found")]
    NotFound(TodoId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo orchestration service.
#[derive(Clone)]
pub struct TodoService<R>
where
    R: TodoRepository,
{
    repository: Arc<R>,
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Creates a new todo service over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every stored record in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_todos(&self) -> TodoServiceResult<Vec<Todo>> {
        Ok(self.repository.find_all().await?)
    }

    /// Returns the record carrying the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no record carries the
    /// identifier, or [`TodoServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn todo_by_id(&self, id: TodoId) -> TodoServiceResult<Todo> {
        self.find_by_id_or_error(id).await
    }

    /// Stores a new record and returns it with its assigned identifier.
    ///
    /// Any identifier carried by the input is discarded; the backing store
    /// assigns the persisted one.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when persistence fails.
    pub async fn create_todo(&self, todo: Todo) -> TodoServiceResult<Todo> {
        let draft = Todo { id: None, ..todo };
        Ok(self.repository.save(draft).await?)
    }

    /// Replaces the title and description of an existing record and returns
    /// the stored result.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no record carries the
    /// identifier, or [`TodoServiceError::Repository`] when persistence
    /// fails.
    pub async fn update_todo(&self, id: TodoId, details: Todo) -> TodoServiceResult<Todo> {
        let mut todo = self.find_by_id_or_error(id).await?;
        todo.title = details.title;
        todo.description = details.description;
        Ok(self.repository.save(todo).await?)
    }

    /// Removes the record carrying the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no record carries the
    /// identifier, or [`TodoServiceError::Repository`] when persistence
    /// fails.
    pub async fn delete_todo(&self, id: TodoId) -> TodoServiceResult<()> {
        let todo = self.find_by_id_or_error(id).await?;
        Ok(self.repository.delete(&todo).await?)
    }

    async fn find_by_id_or_error(&self, id: TodoId) -> TodoServiceResult<Todo> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TodoServiceError::NotFound(id))
    }
}
