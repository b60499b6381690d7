//! Extraction dispatcher
//!
//! Picks the strategy for an upload from its filename and runs it.

use crate::formats;
use crate::storage::AssetStore;

use super::error::{ExtractionError, Result};
use super::types::{ExtractionResult, NoteFormat, UploadedDocument};

/// Default PDF render resolution
pub const DEFAULT_PDF_DPI: u32 = 200;

/// Tunables for the extraction strategies
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Resolution used to rasterize PDF pages
    pub pdf_dpi: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            pdf_dpi: DEFAULT_PDF_DPI,
        }
    }
}

/// Resolve the format of an upload, failing for unrecognized extensions
pub fn detect_format(file_name: &str) -> Result<NoteFormat> {
    NoteFormat::from_filename(file_name)
        .ok_or_else(|| ExtractionError::UnsupportedFormat(file_name.to_string()))
}

/// Run the strategy for `format` over `data`
pub fn extract_format(
    format: NoteFormat,
    data: &[u8],
    assets: &AssetStore,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    match format {
        NoteFormat::Pdf => formats::extract_pdf(data, assets, options.pdf_dpi),
        NoteFormat::Text => formats::extract_text(data),
        NoteFormat::SlideDeck => formats::extract_slides(data),
        NoteFormat::Image => formats::extract_image(data, assets),
    }
}

/// Detect the format of `document` and extract it
///
/// Unsupported extensions fail before any asset is written. Blocking.
pub fn extract(
    document: &UploadedDocument,
    assets: &AssetStore,
    options: &ExtractOptions,
) -> Result<(NoteFormat, ExtractionResult)> {
    let format = detect_format(&document.file_name)?;

    tracing::debug!(
        file_name = %document.file_name,
        format = %format,
        size = document.data.len(),
        "Dispatching extraction"
    );

    let result = extract_format(format, &document.data, assets, options)?;
    Ok((format, result))
}

/// Run `extract` on the blocking thread pool
pub async fn extract_blocking(
    document: UploadedDocument,
    assets: AssetStore,
    options: ExtractOptions,
) -> Result<(NoteFormat, ExtractionResult)> {
    tokio::task::spawn_blocking(move || extract(&document, &assets, &options))
        .await
        .map_err(|e| ExtractionError::Task(format!("Task join error: {}", e)))?
}

// ============================================================================
// Tests
// ============================================================================
