//! PDF notes
//!
//! Renders every page to a PNG asset and extracts each page's plain text
//! with MuPDF. Page images and text blocks are produced independently:
//! every page yields an image, only pages with visible text yield a block.

use mupdf::{Colorspace, Document, Matrix};

use crate::notes::{ExtractionResult, Result};
use crate::storage::AssetStore;

use super::raster::encode_rgb_png;

/// PDF user space unit (1/72 inch)
const POINTS_PER_INCH: f32 = 72.0;

/// Lowest accepted render resolution
pub const MIN_RENDER_DPI: u32 = 72;

/// Highest accepted render resolution
pub const MAX_RENDER_DPI: u32 = 400;

/// Render and extract every page of a PDF
///
/// Pages whose trimmed text is empty are left out of `texts`; the stored
/// block is the trimmed page text. Blocking and CPU-bound.
pub fn extract_pdf(data: &[u8], assets: &AssetStore, dpi: u32) -> Result<ExtractionResult> {
    let doc = Document::from_bytes(data, "application/pdf")?;
    let page_count = doc.page_count()?.max(0) as usize;

    let scale = dpi.clamp(MIN_RENDER_DPI, MAX_RENDER_DPI) as f32 / POINTS_PER_INCH;
    let matrix = Matrix::new_scale(scale, scale);
    let colorspace = Colorspace::device_rgb();

    let mut result = ExtractionResult {
        texts: Vec::new(),
        images: Vec::with_capacity(page_count),
    };

    for index in 0..page_count {
        let page = doc.load_page(index as i32)?;

        let pixmap = page.to_pixmap(&matrix, &colorspace, false, true)?;
        let png = encode_pixmap(&pixmap)?;
        result.images.push(assets.store_png(Some(index), &png)?);

        let text = page.to_text()?;
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!(page = index, "Page has no text, skipping text block");
        } else {
            result.texts.push(text.to_string());
        }
    }

    tracing::debug!(
        pages = page_count,
        text_pages = result.texts.len(),
        dpi = dpi,
        "Extracted PDF"
    );

    Ok(result)
}

/// Convert a MuPDF pixmap into PNG bytes
fn encode_pixmap(pixmap: &mupdf::Pixmap) -> Result<Vec<u8>> {
    let width = pixmap.width() as u32;
    let height = pixmap.height() as u32;
    let rgb = samples_to_rgb(width, height, pixmap.n() as usize, pixmap.samples());

    encode_rgb_png(width, height, rgb)
}

/// Repack `n`-channel samples as RGB, widening single-channel pixels to gray
fn samples_to_rgb(width: u32, height: u32, n: usize, samples: &[u8]) -> Vec<u8> {
    let pixels = width as usize * height as usize;
    let mut rgb = Vec::with_capacity(pixels * 3);
    for pixel in 0..pixels {
        let offset = pixel * n;
        let r = samples.get(offset).copied().unwrap_or(0);
        let g = samples.get(offset + 1).copied().unwrap_or(r);
        let b = samples.get(offset + 2).copied().unwrap_or(r);
        rgb.extend_from_slice(&[r, g, b]);
    }
    rgb
}
