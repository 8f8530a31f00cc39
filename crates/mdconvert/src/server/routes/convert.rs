//! File conversion endpoint

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::Deserialize;

use crate::config::DeliveryMode;
use crate::converter::SourceFile;
use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::ConvertResponse;

/// Query parameters for conversion
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Preserve embedded images as data URIs (default: true)
    pub keep_data_uris: Option<bool>,
}

/// POST /convert/ - Convert an uploaded file to Markdown
pub async fn convert_file(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
    mut multipart: Multipart,
) -> Result<Json<ConvertResponse>> {
    // Fail fast before draining the upload when startup construction failed
    let converter = state.converter()?.clone();

    let mut file: Option<SourceFile> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Multipart(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().map(|s| s.to_string());
            let content = field
                .bytes()
                .await
                .map_err(|e| Error::Multipart(format!("Failed to read file: {}", e)))?;
            file = Some(SourceFile::new(filename, content));
        }
    }
    let file = file.ok_or(Error::MissingFile)?;

    // The flag is only exposed by the streaming variant; the temp-file
    // variant always uses the configured default
    let defaults = &state.config().converter;
    let keep_data_uris = match defaults.mode {
        DeliveryMode::Stream => query.keep_data_uris.unwrap_or(defaults.keep_data_uris),
        DeliveryMode::TempFile => defaults.keep_data_uris,
    };

    tracing::info!(
        "Converting file: {} ({} bytes)",
        file.filename.as_deref().unwrap_or("<unnamed>"),
        file.content.len()
    );

    let result = converter.convert(&file, keep_data_uris).await?;

    Ok(Json(ConvertResponse {
        filename: file.filename,
        markdown_content: result.markdown,
    }))
}
