//! Note ingestion
//!
//! Turns one uploaded file into the uniform (texts, images) representation
//! served to the notes viewer, and holds the latest result.
//!
//! # Flow
//!
//! ```text
//! UploadedDocument ──► detect_format ──► NoteFormat
//!                                            │
//!        ┌───────────────┬───────────────────┼──────────────┐
//!        ▼               ▼                   ▼              ▼
//!   extract_pdf     extract_text      extract_slides   extract_image
//!        │               │                   │              │
//!        └───────────────┴─────────┬─────────┴──────────────┘
//!                                  ▼
//!                          ExtractionResult ──► NotesSession::replace
//! ```
//!
//! The result is assembled completely before it is installed in the
//! session, so a failed upload leaves the previous notes untouched.

mod dispatch;
mod error;
mod session;
mod types;

pub use dispatch::{
    detect_format, extract, extract_blocking, extract_format, ExtractOptions, DEFAULT_PDF_DPI,
};
pub use error::{ExtractionError, Result};
pub use session::NotesSession;
pub use types::{ExtractionResult, NoteFormat, UploadedDocument};
