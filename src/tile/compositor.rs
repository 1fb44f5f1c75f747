use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::RectPx;
use crate::foundation::error::{CoverwallError, CoverwallResult};
use crate::render::surface::Canvas;

/// Centered square crop rectangle for a `width` x `height` source.
///
/// `side = min(width, height)`; the offsets use floor division so the crop
/// window sits one half-pixel toward the top-left on odd remainders.
pub fn center_square(width: u32, height: u32) -> RectPx {
    let side = width.min(height);
    RectPx {
        x: (width - side) / 2,
        y: (height - side) / 2,
        w: side,
        h: side,
    }
}

/// Center-crop `src` to a square and resample it to `target` pixels per side.
///
/// Resampling uses Lanczos3; tile quality at arbitrary source aspect ratios
/// is a correctness requirement here, not a cosmetic choice.
pub fn square_thumbnail(src: &PreparedImage, target: u32) -> CoverwallResult<PreparedImage> {
    let rect = center_square(src.width, src.height);

    let full = image::RgbaImage::from_raw(src.width, src.height, src.rgba8_premul.as_ref().clone())
        .ok_or_else(|| CoverwallError::render("source byte length does not match dimensions"))?;
    let cropped = image::imageops::crop_imm(&full, rect.x, rect.y, rect.w, rect.h).to_image();
    let scaled = image::imageops::resize(
        &cropped,
        target,
        target,
        image::imageops::FilterType::Lanczos3,
    );

    Ok(PreparedImage {
        width: target,
        height: target,
        rgba8_premul: Arc::new(scaled.into_raw()),
    })
}

/// Crop, scale, and paste `src` into the cell at `(x, y)` on `dst`.
///
/// The scaled square lands in the cell's padded interior; pixels of the cell
/// outside it keep whatever background the caller pre-filled. Callers must
/// guarantee `2 * padding < cell_size` (the document layer validates this);
/// the drawable side is computed as `cell_size - 2 * padding` with no
/// internal guard.
pub fn composite_tile(
    src: &PreparedImage,
    dst: &mut Canvas,
    x: u32,
    y: u32,
    cell_size: u32,
    padding: u32,
) -> CoverwallResult<()> {
    let inner = cell_size - 2 * padding;
    let tile = square_thumbnail(src, inner)?;
    dst.paste(&tile, x + padding, y + padding)
}

#[cfg(test)]
#[path = "../../tests/unit/tile/compositor.rs"]
mod tests;
