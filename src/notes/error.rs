//! Extraction error types
//!
//! Errors raised while turning an uploaded file into note pages.

use thiserror::Error;

/// Error raised by the extraction dispatcher and its strategies
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Filename extension is not one of the recognized note formats
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// PDF could not be opened, rendered or read
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Plain text upload was not valid UTF-8
    #[error("Invalid UTF-8 text: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),

    /// Slide deck archive or slide XML is malformed
    #[error("Slide deck error: {0}")]
    SlideDeck(String),

    /// Image could not be decoded or re-encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Writing a generated asset failed
    #[error("Asset storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Blocking extraction task panicked or was cancelled
    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

impl From<mupdf::Error> for ExtractionError {
    fn from(err: mupdf::Error) -> Self {
        ExtractionError::Pdf(err.to_string())
    }
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        ExtractionError::SlideDeck(err.to_string())
    }
}

impl From<quick_xml::Error> for ExtractionError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractionError::SlideDeck(format!("XML: {}", err))
    }
}
