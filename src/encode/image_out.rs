use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use image::ImageEncoder;

use crate::foundation::error::{CoverwallError, CoverwallResult};
use crate::render::surface::Canvas;

/// Write `canvas` to `path`, choosing the format from the extension.
///
/// `.jpg`/`.jpeg` encode as JPEG at quality 95; everything else encodes as
/// lossless PNG. Encoding is a presentation concern kept entirely outside
/// the layout engine.
pub fn save_canvas(canvas: &Canvas, path: &Path) -> CoverwallResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if ext == "jpg" || ext == "jpeg" {
        let rgb = unpremultiplied_rgb(canvas);
        let file = File::create(path)
            .with_context(|| format!("create jpeg '{}'", path.display()))?;
        image::codecs::jpeg::JpegEncoder::new_with_quality(BufWriter::new(file), 95)
            .write_image(
                &rgb,
                canvas.width,
                canvas.height,
                image::ExtendedColorType::Rgb8,
            )
            .with_context(|| format!("write jpeg '{}'", path.display()))?;
    } else {
        let mut straight = canvas.data.clone();
        unpremultiply_in_place(&mut straight);
        image::save_buffer_with_format(
            path,
            &straight,
            canvas.width,
            canvas.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
    }
    Ok(())
}

/// Lanczos-downscaled copy of `canvas` for preview surfaces.
///
/// Dimensions are clamped to at least one pixel. Scaling the composed canvas
/// (rather than re-composing at a smaller size) keeps previews visually
/// consistent with full-resolution exports.
pub fn scale_canvas(canvas: &Canvas, factor: f64) -> CoverwallResult<Canvas> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(CoverwallError::validation(
            "scale factor must be finite and > 0",
        ));
    }

    let pw = (((canvas.width as f64) * factor) as u32).max(1);
    let ph = (((canvas.height as f64) * factor) as u32).max(1);

    let full = image::RgbaImage::from_raw(canvas.width, canvas.height, canvas.data.clone())
        .ok_or_else(|| CoverwallError::render("canvas byte length does not match dimensions"))?;
    let scaled = image::imageops::resize(&full, pw, ph, image::imageops::FilterType::Lanczos3);

    Ok(Canvas {
        width: pw,
        height: ph,
        data: scaled.into_raw(),
    })
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((u16::from(px[0]) * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((u16::from(px[1]) * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((u16::from(px[2]) * 255 + a / 2) / a).min(255) as u8;
    }
}

fn unpremultiplied_rgb(canvas: &Canvas) -> Vec<u8> {
    let mut straight = canvas.data.clone();
    unpremultiply_in_place(&mut straight);
    let mut rgb = Vec::with_capacity((canvas.width as usize) * (canvas.height as usize) * 3);
    for px in straight.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}
