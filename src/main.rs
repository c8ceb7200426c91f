//! Todo service daemon.
//!
//! Serves the todo REST API from either the SQLite-backed store (the
//! default) or a process-local in-memory store.

use clap::Parser;
use std::sync::Arc;
use todo_service::http;
use todo_service::todo::adapters::memory::InMemoryTodoRepository;
use todo_service::todo::adapters::sqlite::SqliteTodoRepository;
use todo_service::todo::services::TodoService;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser, Debug)]
#[command(name = "todo-service")]
#[command(about = "REST service for managing todo records")]
struct Cli {
    /// Interface the HTTP listener binds to.
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port the HTTP listener binds to.
    #[arg(long, env = "TODO_PORT", default_value_t = 8080)]
    port: u16,

    /// Path of the SQLite database file.
    #[arg(long, env = "TODO_DB", default_value = "./data/todos.db")]
    db: String,

    /// Serve from a process-local in-memory store instead of SQLite.
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let cli = Cli::parse();

    let app = if cli.in_memory {
        tracing::info!("serving todos from the in-memory store");
        http::build_router(TodoService::new(Arc::new(InMemoryTodoRepository::new())))
    } else {
        tracing::info!(path = %cli.db, "serving todos from the SQLite store");
        let repository = SqliteTodoRepository::connect(&cli.db).await?;
        http::build_router(TodoService::new(Arc::new(repository)))
    };

    let addr = format!("{}:{}", cli.host, cli.port);
    http::serve(&addr, app).await?;
    Ok(())
}
