//! In-memory todo storage adapter.

mod repository;

pub use repository::InMemoryTodoRepository;
