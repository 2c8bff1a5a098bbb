//! Error types shared across the application
//!
//! Store and renderer failures are typed; handlers wrap them in an
//! [`ApiError`] carrying a generic per-operation message. The underlying
//! cause is logged server-side and never leaked to the client.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors raised by the CSV store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised by the PDF renderer.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("pdf render error: {0}")]
    Render(#[from] printpdf::Error),
}

/// A handler-level failure: a generic message for the client plus the
/// underlying cause for the server log.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    message: &'static str,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl ApiError {
    pub fn new(
        message: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message,
            source: Box::new(source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{}: {}", self.message, self.source);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.message })),
        )
            .into_response()
    }
}
