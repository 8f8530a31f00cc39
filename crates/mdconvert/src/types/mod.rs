//! Request and response types for the conversion API

use serde::{Deserialize, Serialize};

/// Response from a successful conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// Original uploaded filename, echoed back verbatim (null when the
    /// upload carried no filename)
    pub filename: Option<String>,
    /// Markdown produced by the converter
    pub markdown_content: String,
}

/// Response from the health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process is serving requests
    pub status: String,
    /// Whether the converter singleton initialized successfully at startup
    pub converter_initialized: bool,
}
