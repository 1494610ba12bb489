//! Application error type and the fixed fallback pages.
//!
//! # Design
//! `NotFound` gets a dedicated variant because every by-id route turns a
//! missing row into the 404 page. Everything else is an internal failure:
//! logged, then answered with the fixed 500 page. The rotate route
//! overrides this with its own JSON error body in the handler.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::store::StoreError;
use crate::views;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested todo does not exist.
    #[error("no such todo")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("template rendering failed: {0}")]
    Render(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, Html(views::NOT_FOUND_PAGE)).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::ERROR_PAGE)).into_response()
            }
        }
    }
}
