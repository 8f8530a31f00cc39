//! mdconvert: HTTP service that converts uploaded documents to Markdown
//!
//! The service accepts a multipart file upload and hands the bytes to the
//! external `markitdown` converter, either over stdin or through a transient
//! on-disk copy. All parsing and Markdown generation happens inside the
//! external tool; this crate is the HTTP boundary around it.

pub mod config;
pub mod converter;
pub mod error;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use converter::{ConversionResult, Converter, SourceFile};
pub use error::{Error, Result};
pub use server::Server;
