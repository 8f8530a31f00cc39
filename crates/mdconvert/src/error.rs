//! Error types for the conversion service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Conversion service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Converter failed to initialize at startup; permanent for the process
    #[error("MarkItDown converter is not initialized.")]
    ConverterUnavailable,

    /// Per-request failure from the external converter
    #[error("Error converting file: {0}")]
    Conversion(String),

    /// Malformed multipart request
    #[error("Invalid multipart request: {0}")]
    Multipart(String),

    /// Required `file` field missing from the upload
    #[error("Missing required multipart field 'file'")]
    MissingFile,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a conversion error
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Multipart(_) | Error::MissingFile => StatusCode::BAD_REQUEST,
            Error::Config(_)
            | Error::ConverterUnavailable
            | Error::Conversion(_)
            | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "detail": self.to_string() }));

        (status, body).into_response()
    }
}
