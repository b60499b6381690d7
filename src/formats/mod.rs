//! Format-specific extraction strategies
//!
//! One module per supported upload format. Each strategy turns raw file
//! bytes into an `ExtractionResult`, writing PNG pages to the asset store
//! when the format has a visual form.
//!
//! | Format     | Texts                         | Images              |
//! |------------|-------------------------------|---------------------|
//! | PDF        | one per page with text        | one per page        |
//! | Plain text | one per line                  | none                |
//! | PPTX       | one per slide with shape text | none                |
//! | PNG / JPEG | none                          | the re-encoded file |
//!
//! All strategies are blocking and are run on the blocking thread pool.

pub mod pdf;
pub mod pptx;
pub mod raster;
pub mod text;

pub use pdf::extract_pdf;
pub use pptx::extract_slides;
pub use raster::extract_image;
pub use text::extract_text;
