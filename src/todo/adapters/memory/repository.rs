//! In-memory repository for todo records.

use crate::todo::{
    domain::{Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory todo repository.
///
/// Identifiers are allocated from a monotonically increasing counter
/// starting at 1, matching the allocation order of the SQLite adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug)]
struct InMemoryTodoState {
    todos: BTreeMap<TodoId, Todo>,
    next_id: i64,
}

impl Default for InMemoryTodoState {
    fn default() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.todos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn save(&self, todo: Todo) -> TodoRepositoryResult<Todo> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let id = todo.id.unwrap_or_else(|| TodoId::new(state.next_id));
        // Keep later allocations unique after an explicit-id save.
        state.next_id = state.next_id.max(id.into_inner().saturating_add(1));
        let persisted = todo.with_id(id);
        state.todos.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn delete(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if let Some(id) = todo.id {
            state.todos.remove(&id);
        }
        Ok(())
    }
}
