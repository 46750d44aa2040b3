//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for every failure a handler can hit and implements Axum's
//! `IntoResponse` so errors become plain-text responses carrying the raw
//! underlying message.
//!
//! Error mappings:
//! - `BadRequest` → 400
//! - `Multipart` → status reported by the multipart parser (4xx for malformed bodies)
//! - `Fs`, `Walk`, `Render`, `Internal` → 500

use std::io;
use std::path::Path;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{op} {path}: {source}")]
    Fs {
        op: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Walk(#[from] walkdir::Error),

    #[error("{0}")]
    Multipart(#[from] MultipartError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Wraps an I/O error with the operation and path it failed on.
    pub fn fs(op: &'static str, path: &Path, source: io::Error) -> Self {
        AppError::Fs {
            op,
            path: path.display().to_string(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Multipart(e) => e.status(),
            AppError::Fs { .. }
            | AppError::Walk(_)
            | AppError::Render(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::warn!(%status, error = %message, "request failed");
        } else {
            tracing::debug!(%status, error = %message, "request rejected");
        }

        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
