//! Application state for the conversion server

use std::sync::Arc;

use crate::config::AppConfig;
use crate::converter::{Converter, MarkItDownCli};
use crate::error::{Error, Result};

/// Shared application state.
///
/// The converter is constructed once at startup and handed to every request
/// handler through this state object; there is no process-wide singleton.
/// When construction fails the converter is recorded as absent and every
/// conversion request fails fast.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration, fixed at startup
    config: AppConfig,
    /// Converter instance, absent when startup construction failed
    converter: Option<Arc<dyn Converter>>,
}

impl AppState {
    /// Create application state, constructing the external converter
    pub fn new(config: AppConfig) -> Self {
        let converter = match MarkItDownCli::new(config.converter.clone()) {
            Ok(cli) => {
                tracing::info!(
                    "Converter initialized (binary: {}, mode: {:?}, plugins: {})",
                    config.converter.binary,
                    config.converter.mode,
                    config.converter.enable_plugins
                );
                Some(Arc::new(cli) as Arc<dyn Converter>)
            }
            Err(e) => {
                tracing::error!("Error initializing converter: {}", e);
                None
            }
        };

        Self::with_converter(config, converter)
    }

    /// Create state with an explicit converter (or none), used by tests to
    /// inject stubs
    pub fn with_converter(config: AppConfig, converter: Option<Arc<dyn Converter>>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, converter }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the converter, failing fast when startup construction failed
    pub fn converter(&self) -> Result<&Arc<dyn Converter>> {
        self.inner
            .converter
            .as_ref()
            .ok_or(Error::ConverterUnavailable)
    }

    /// Whether the converter initialized successfully at startup
    pub fn converter_initialized(&self) -> bool {
        self.inner.converter.is_some()
    }
}
