//! Configuration for the conversion service

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Converter configuration
    pub converter: ConverterConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 100MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            enable_cors: true,
            max_upload_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// How uploaded bytes are handed to the external converter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    /// Pipe bytes over stdin with an extension hint
    #[default]
    Stream,
    /// Write a transient on-disk copy under a unique name carrying the
    /// original extension
    TempFile,
}

/// External converter configuration, fixed at process construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Converter binary name or path
    pub binary: String,
    /// Delivery mode for uploaded bytes
    pub mode: DeliveryMode,
    /// Enable converter plugins
    pub enable_plugins: bool,
    /// Preserve embedded images as data URIs when the request does not say
    /// otherwise
    pub keep_data_uris: bool,
    /// Optional remote document-intelligence endpoint
    pub docintel_endpoint: Option<String>,
    /// Timeout for a single conversion in seconds
    pub timeout_secs: u64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            binary: "markitdown".to_string(),
            mode: DeliveryMode::Stream,
            enable_plugins: true,
            keep_data_uris: true,
            docintel_endpoint: None,
            timeout_secs: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.converter.binary, "markitdown");
        assert_eq!(config.converter.mode, DeliveryMode::Stream);
        assert!(config.converter.enable_plugins);
        assert!(config.converter.keep_data_uris);
        assert!(config.converter.docintel_endpoint.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9000
            max_upload_size = 1048576

            [converter]
            mode = "temp-file"
            enable_plugins = false
            docintel_endpoint = "https://docintel.example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.max_upload_size, 1048576);
        assert_eq!(config.converter.mode, DeliveryMode::TempFile);
        assert!(!config.converter.enable_plugins);
        assert_eq!(
            config.converter.docintel_endpoint.as_deref(),
            Some("https://docintel.example.com")
        );
        // Unspecified fields keep their defaults
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.converter.keep_data_uris);
    }
}
