//! Server-rendered to-do list manager.
//!
//! # Overview
//! An HTTP front end over a SQLite `todos` table. Each route parses its
//! request input, performs at most one logical store action, and answers
//! with a rendered page or a redirect.
//!
//! # Design
//! - The store is constructed once at startup and cloned into handlers
//!   through axum state; there is no global connection handle.
//! - Views are Tera templates compiled into the binary; the 404 and 500
//!   pages are fixed.
//! - Unmatched paths fall through to the static file service, then to
//!   the 404 page. Errors render the 500 page, except the rotate route
//!   which answers JSON.

pub mod config;
pub mod error;
pub mod routes;
pub mod store;
pub mod views;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::app;
pub use store::{StoreError, TodoStore};

use std::path::PathBuf;

use tokio::net::TcpListener;

/// Serve the application until ctrl-c.
pub async fn run(
    listener: TcpListener,
    store: TodoStore,
    public_dir: PathBuf,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store, public_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
    }
    tracing::info!("shutting down");
}
