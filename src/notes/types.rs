//! Note extraction types

use serde::{Deserialize, Serialize};

// ============================================================================
// Formats
// ============================================================================

/// Closed set of upload formats the dispatcher understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteFormat {
    /// PDF document: rendered pages plus per-page text
    Pdf,
    /// Plain UTF-8 text: one block per line
    Text,
    /// PowerPoint (.pptx) deck: one block per slide
    SlideDeck,
    /// PNG or JPEG image: re-encoded as a single PNG page
    Image,
}

impl NoteFormat {
    /// Recognized suffixes, checked in order
    const SUFFIXES: &'static [(&'static str, NoteFormat)] = &[
        (".pdf", NoteFormat::Pdf),
        (".txt", NoteFormat::Text),
        (".pptx", NoteFormat::SlideDeck),
        (".png", NoteFormat::Image),
        (".jpg", NoteFormat::Image),
        (".jpeg", NoteFormat::Image),
    ];

    /// Detect format from a filename extension (case-insensitive)
    pub fn from_filename(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        Self::SUFFIXES
            .iter()
            .find(|(suffix, _)| lower.ends_with(suffix))
            .map(|(_, format)| *format)
    }
}

impl std::fmt::Display for NoteFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pdf => "pdf",
            Self::Text => "text",
            Self::SlideDeck => "pptx",
            Self::Image => "image",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Upload / Result
// ============================================================================

/// A file received from the client, alive for one upload request
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// Declared filename from the multipart part
    pub file_name: String,

    /// Raw file content
    pub data: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }
}

/// Normalized output of one upload
///
/// `texts` and `images` are ordered independently. A PDF fills both
/// (one image per page, one text block per non-blank page), text and
/// slide decks fill only `texts`, a bare image fills only `images`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Text blocks (pages, lines or slides depending on format)
    pub texts: Vec<String>,

    /// Filenames of stored PNG assets
    pub images: Vec<String>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.images.is_empty()
    }

    pub fn from_texts(texts: Vec<String>) -> Self {
        Self {
            texts,
            images: Vec::new(),
        }
    }
}
