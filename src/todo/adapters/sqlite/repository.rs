//! SQLite repository implementation for todo records.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use std::path::Path;

/// Migrations bundled into the binary at compile time.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// SQLite connection pool type for todo adapters.
pub type TodoSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// SQLite-backed repository for todo records.
///
/// Each operation checks a connection out of the pool for the duration of
/// the call and runs its query on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: TodoSqlitePool,
}

impl SqliteTodoRepository {
    /// Creates a repository from an existing SQLite pool.
    #[must_use]
    pub const fn new(pool: TodoSqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database file at `database_path`, creating it and its
    /// parent directory as needed, applies pending migrations, and returns
    /// a pooled repository.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the directory
    /// cannot be created, the database cannot be opened, or a migration
    /// fails to apply.
    pub async fn connect(database_path: &str) -> TodoRepositoryResult<Self> {
        ensure_parent_dir(database_path)?;
        run_migrations(database_path).await?;

        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let pool = Pool::builder()
            .build(manager)
            .map_err(TodoRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, operation: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            operation(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .order(todos::id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_todo).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .filter(todos::id.eq(id.into_inner()))
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row.map(row_to_todo))
        })
        .await
    }

    async fn save(&self, todo: Todo) -> TodoRepositoryResult<Todo> {
        match todo.id {
            Some(id) => {
                let row = TodoRow {
                    id: id.into_inner(),
                    title: todo.title,
                    description: todo.description,
                };
                self.run_blocking(move |connection| {
                    diesel::replace_into(todos::table)
                        .values(&row)
                        .execute(connection)
                        .map_err(TodoRepositoryError::persistence)?;
                    Ok(row_to_todo(row))
                })
                .await
            }
            None => {
                let new_row = NewTodoRow {
                    title: todo.title,
                    description: todo.description,
                };
                self.run_blocking(move |connection| {
                    let row = diesel::insert_into(todos::table)
                        .values(&new_row)
                        .returning(TodoRow::as_returning())
                        .get_result::<TodoRow>(connection)
                        .map_err(TodoRepositoryError::persistence)?;
                    Ok(row_to_todo(row))
                })
                .await
            }
        }
    }

    async fn delete(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let Some(id) = todo.id else {
            // Nothing was ever persisted under this record.
            return Ok(());
        };
        self.run_blocking(move |connection| {
            diesel::delete(todos::table.filter(todos::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn row_to_todo(row: TodoRow) -> Todo {
    Todo {
        id: Some(TodoId::new(row.id)),
        title: row.title,
        description: row.description,
    }
}

fn ensure_parent_dir(path: &str) -> TodoRepositoryResult<()> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(TodoRepositoryError::persistence)?;
    }
    Ok(())
}

async fn run_migrations(database_path: &str) -> TodoRepositoryResult<()> {
    let database_url = database_path.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut connection = SqliteConnection::establish(&database_url)
            .map_err(TodoRepositoryError::persistence)?;
        connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| {
                TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
            })?;
        Ok(())
    })
    .await
    .map_err(TodoRepositoryError::persistence)?
}
