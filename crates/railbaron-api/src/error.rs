//! Rail Baron helper — API error types.

use std::path::PathBuf;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use railbaron_core::error::{DomainError, LookupError, ParseError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A data file could not be opened.
    #[error("cannot open data file {}: {source}", .path.display())]
    DataFile {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A data file is malformed.
    #[error("cannot load data file {}: {source}", .path.display())]
    Data {
        /// The file that failed to parse.
        path: PathBuf,
        /// The parse failure.
        source: ParseError,
    },

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DomainError::Lookup(LookupError::MissingRoll { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "incomplete_table")
            }
            DomainError::Lookup(LookupError::UnknownRegion(_)) => {
                (StatusCode::NOT_FOUND, "unknown_region")
            }
            DomainError::Lookup(
                LookupError::UnknownSourceCity(_) | LookupError::UnknownDestinationCity { .. },
            ) => (StatusCode::NOT_FOUND, "unknown_city"),
            DomainError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
        };

        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
