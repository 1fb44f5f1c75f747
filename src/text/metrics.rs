use std::borrow::Cow;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{CoverwallError, CoverwallResult};

/// Shapes, measures, and lays out label text with one registered font face.
///
/// Measurement and drawing both go through the same parley layout, so
/// measure-time and draw-time metrics always agree: a line that measured as
/// fitting a width budget cannot overflow it when rasterized.
pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family_name: String,
    font_data: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for TextShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextShaper")
            .field("family_name", &self.family_name)
            .finish()
    }
}

impl TextShaper {
    /// Register a font face from raw TTF/OTF bytes.
    pub fn from_font_bytes(font_bytes: &[u8]) -> CoverwallResult<Self> {
        let mut font_ctx = parley::FontContext::default();

        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| CoverwallError::font("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CoverwallError::font("registered font family has no name"))?
            .to_string();

        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        );

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font_data,
        })
    }

    /// Primary family name resolved from the registered font data.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub(crate) fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font_data
    }

    /// Shape `text` as a single unbroken line.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: Rgba8,
    ) -> parley::Layout<Rgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Exact pixel bounding size of `text` rendered at `size_px`.
    ///
    /// Width is the maximum line advance, height the summed line heights
    /// (ascent + descent + leading).
    pub fn measure(&mut self, text: &str, size_px: f32) -> (f64, f64) {
        let layout = self.layout_line(text, size_px, Rgba8::default());
        let mut w = 0.0f64;
        let mut h = 0.0f64;
        for line in layout.lines() {
            let m = line.metrics();
            w = w.max(f64::from(m.advance));
            h += f64::from(m.ascent + m.descent + m.leading);
        }
        (w, h)
    }

    /// Height of one text line at `size_px`, measured from a reference
    /// ascender/descender sample.
    pub fn line_height(&mut self, size_px: f32) -> f64 {
        self.measure("Ag", size_px).1
    }

    /// Greedy pixel-width wrap of `text` at `size_px` into lines no wider
    /// than `max_width` (single words wider than the budget occupy a line
    /// alone). Never returns an empty sequence.
    pub fn wrap(&mut self, text: &str, size_px: f32, max_width: f64) -> Vec<String> {
        wrap_words(|s| self.measure(s, size_px).0, text, max_width)
    }
}

/// Greedy word wrap driven by an arbitrary width-measuring function.
///
/// Words are whitespace-separated; candidates accumulate onto the current
/// line with a single joining space and are accepted while the measured
/// candidate fits `max_width`. A word that does not fit flushes the current
/// line and starts the next one, even if that word alone exceeds the budget
/// (no mid-word breaking). The result is never empty: empty input yields one
/// empty line.
///
/// Pure in `(text, max_width)` for a deterministic measurer, which is what
/// lets preview and export renders wrap identically.
pub fn wrap_words<F>(mut measure_width: F, text: &str, max_width: f64) -> Vec<String>
where
    F: FnMut(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut cur = String::new();

    for word in text.split_whitespace() {
        let candidate = if cur.is_empty() {
            word.to_string()
        } else {
            format!("{cur} {word}")
        };
        if measure_width(&candidate) <= max_width {
            cur = candidate;
        } else {
            if !cur.is_empty() {
                lines.push(std::mem::take(&mut cur));
            }
            cur = word.to_string();
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
