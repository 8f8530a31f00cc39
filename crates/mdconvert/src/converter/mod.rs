//! Document-to-Markdown conversion via the external converter

pub mod markitdown;

pub use markitdown::MarkItDownCli;

use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;

use crate::error::Result;

/// An uploaded file handed to the converter; request-scoped
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Original filename, possibly absent
    pub filename: Option<String>,
    /// Raw file content
    pub content: Bytes,
}

impl SourceFile {
    /// Create a source file from a filename and its bytes
    pub fn new(filename: Option<String>, content: Bytes) -> Self {
        Self { filename, content }
    }

    /// File extension hint including the leading dot (e.g. ".pdf").
    ///
    /// Absent when there is no filename or the filename has no extension;
    /// the converter then falls back to content sniffing.
    pub fn extension_hint(&self) -> Option<String> {
        let name = self.filename.as_deref()?;
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
    }
}

/// Markdown produced by the external converter; returned verbatim
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Markdown text
    pub markdown: String,
}

/// Conversion capability shared read-only across all requests.
///
/// Constructed once at startup and never mutated afterwards. The trait is
/// the seam for injecting a failing converter in tests.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Convert an uploaded file to Markdown
    async fn convert(&self, file: &SourceFile, keep_data_uris: bool) -> Result<ConversionResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(filename: Option<&str>) -> SourceFile {
        SourceFile::new(filename.map(String::from), Bytes::from_static(b"content"))
    }

    #[test]
    fn test_extension_hint() {
        assert_eq!(source(Some("report.pdf")).extension_hint().as_deref(), Some(".pdf"));
        assert_eq!(source(Some("archive.tar.gz")).extension_hint().as_deref(), Some(".gz"));
    }

    #[test]
    fn test_extension_hint_absent() {
        assert_eq!(source(Some("README")).extension_hint(), None);
        assert_eq!(source(None).extension_hint(), None);
    }
}
