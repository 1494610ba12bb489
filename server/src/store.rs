//! SQLite-backed store for the `todos` table.
//!
//! # Design
//! `TodoStore` wraps a `SqlitePool`; cloning it shares the pool, so one
//! store is built at startup and handed to every handler. Each operation
//! issues exactly one SQL statement. A missing row is `Ok(None)`, never an
//! error; handlers decide what absence means for their route.
//!
//! Rows decode through the private `TodoRow` before becoming domain
//! values; a stored id or priority that no longer parses surfaces as
//! `StoreError::Malformed` instead of panicking mid-request.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use todo_core::{NewTodo, Priority, Todo, TodoPatch};
use uuid::Uuid;

/// Errors surfaced by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// A persisted row no longer maps onto the domain types.
    #[error("todo row {id} is malformed: {reason}")]
    Malformed { id: String, reason: String },
}

/// Raw column values as stored; converted into `Todo` after fetching.
#[derive(FromRow)]
struct TodoRow {
    id: String,
    title: String,
    done: bool,
    priority: String,
}

impl TodoRow {
    fn into_todo(self) -> Result<Todo, StoreError> {
        let id = Uuid::parse_str(&self.id).map_err(|e| StoreError::Malformed {
            id: self.id.clone(),
            reason: e.to_string(),
        })?;
        let priority = self
            .priority
            .parse::<Priority>()
            .map_err(|e| StoreError::Malformed {
                id: self.id.clone(),
                reason: e.to_string(),
            })?;
        Ok(Todo {
            id,
            title: self.title,
            done: self.done,
            priority,
        })
    }
}

/// Row-level CRUD over the `todos` table.
#[derive(Debug, Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    /// Open (and create if missing) the database at `url`.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self { pool })
    }

    /// A fresh in-memory database. The pool is pinned to a single
    /// connection so the database outlives individual acquisitions.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Run the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    /// All todos in insertion order.
    pub async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let rows: Vec<TodoRow> =
            sqlx::query_as("SELECT id, title, done, priority FROM todos ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(TodoRow::into_todo).collect()
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        let row: Option<TodoRow> =
            sqlx::query_as("SELECT id, title, done, priority FROM todos WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;
        row.map(TodoRow::into_todo).transpose()
    }

    /// The priority column alone; the rotate route needs nothing else.
    pub async fn priority(&self, id: Uuid) -> Result<Option<Priority>, StoreError> {
        let value: Option<String> = sqlx::query_scalar("SELECT priority FROM todos WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        match value {
            Some(raw) => raw
                .parse::<Priority>()
                .map(Some)
                .map_err(|e| StoreError::Malformed {
                    id: id.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Insert a new row with a server-assigned id. New todos start open
    /// at normal priority.
    pub async fn insert(&self, input: NewTodo) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: Uuid::new_v4(),
            title: input.title,
            done: false,
            priority: Priority::default(),
        };
        sqlx::query("INSERT INTO todos (id, title, done, priority) VALUES (?, ?, ?, ?)")
            .bind(todo.id.to_string())
            .bind(&todo.title)
            .bind(todo.done)
            .bind(todo.priority.as_str())
            .execute(&self.pool)
            .await?;
        Ok(todo)
    }

    /// Apply a partial update; `None` fields keep their stored values.
    pub async fn update(&self, id: Uuid, patch: TodoPatch) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE todos SET \
                title = COALESCE(?, title), \
                done = COALESCE(?, done), \
                priority = COALESCE(?, priority) \
             WHERE id = ?",
        )
        .bind(patch.title)
        .bind(patch.done)
        .bind(patch.priority.map(Priority::as_str))
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
