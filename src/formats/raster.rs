//! Raster image notes (PNG, JPEG)
//!
//! A single uploaded image becomes a single PNG page.

use std::io::Cursor;

use image::ImageFormat;

use crate::notes::{ExtractionResult, Result};
use crate::storage::AssetStore;

/// Decode an image (PNG or JPEG) and store it re-encoded as PNG
pub fn extract_image(data: &[u8], assets: &AssetStore) -> Result<ExtractionResult> {
    let img = image::load_from_memory(data)?;

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    let name = assets.store_png(None, &png)?;

    tracing::debug!(
        asset = %name,
        width = img.width(),
        height = img.height(),
        "Re-encoded uploaded image"
    );

    Ok(ExtractionResult {
        texts: Vec::new(),
        images: vec![name],
    })
}

/// Encode raw RGB samples as PNG bytes
pub(crate) fn encode_rgb_png(width: u32, height: u32, samples: Vec<u8>) -> Result<Vec<u8>> {
    let img = image::RgbImage::from_raw(width, height, samples).ok_or_else(|| {
        image::ImageError::Parameter(image::error::ParameterError::from_kind(
            image::error::ParameterErrorKind::DimensionMismatch,
        ))
    })?;

    let mut png = Vec::new();
    image::DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}
