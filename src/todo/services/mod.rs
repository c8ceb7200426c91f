//! Application services for todo management.

mod todos;

pub use todos::{TodoService, TodoServiceError, TodoServiceResult};
