use crate::assets::decode::PreparedImage;
use crate::entries::parse::LabelPair;
use crate::foundation::core::{CollageConfig, Point, Rgba8, StyleConfig};
use crate::foundation::error::{CoverwallError, CoverwallResult};
use crate::layout::grid::{self, MarginLine, TilePlacement};
use crate::render::surface::Canvas;
use crate::text::metrics::TextShaper;
use crate::tile::compositor;

/// Glyph substituted when a cell's label is empty, so every cell produces
/// visible margin text.
pub const PLACEHOLDER_GLYPH: &str = "\u{2014}";

/// Result of one collage build: the composed raster plus the pixel-accurate
/// placement of every tile and every wrapped margin line.
#[derive(Clone, Debug)]
pub struct ComposedCollage {
    /// The composed output raster.
    pub canvas: Canvas,
    /// Row-major tile placements, one per grid cell.
    pub tiles: Vec<TilePlacement>,
    /// Every margin text line in draw order.
    pub margin_lines: Vec<MarginLine>,
}

/// Compose a collage from label pairs and their resolved cover images.
///
/// `pairs` and `images` are aligned by index. Grid shape always wins over
/// input length: entries beyond `cols * rows` are silently dropped and
/// missing entries are synthesized as blank (placeholder tile, placeholder
/// glyph). The build is a pure function of its inputs, performs no IO, and
/// is atomic from the caller's perspective: no partial canvas is ever
/// exposed.
///
/// `cfg` must already be validated by the hosting surface
/// ([`CollageConfig::validate`]); the engine assumes a valid config.
#[tracing::instrument(skip(pairs, images, shaper), fields(cols = cfg.cols, rows = cfg.rows))]
pub fn build_collage(
    pairs: &[LabelPair],
    images: &[PreparedImage],
    shaper: &mut TextShaper,
    cfg: &CollageConfig,
    style: &StyleConfig,
) -> CoverwallResult<ComposedCollage> {
    let (width, height) = grid::canvas_size(cfg);
    let mut canvas = Canvas::filled(width, height, style.background);

    let blank = PreparedImage::solid(
        style.placeholder_size,
        style.placeholder_size,
        style.blank_fill,
    );

    let placements = grid::tile_placements(cfg);
    for placement in &placements {
        let idx = (placement.row * cfg.cols + placement.col) as usize;
        let img = images.get(idx).unwrap_or(&blank);
        compositor::composite_tile(
            img,
            &mut canvas,
            placement.cell.x,
            placement.cell.y,
            cfg.cell_size,
            cfg.padding,
        )?;
    }

    let margin_lines = draw_margin_text(&mut canvas, pairs, shaper, cfg, style)?;
    tracing::debug!(
        tiles = placements.len(),
        lines = margin_lines.len(),
        "collage composed"
    );

    Ok(ComposedCollage {
        canvas,
        tiles: placements,
        margin_lines,
    })
}

/// Flow the margin labels row by row.
///
/// Each cell in a row contributes its own label block, wrapped to the margin
/// text width and stacked downward from the row's top inset; the blocks of a
/// row share one running y cursor. Text is rasterized into a transparent
/// intermediate surface and source-over composited onto the canvas.
fn draw_margin_text(
    canvas: &mut Canvas,
    pairs: &[LabelPair],
    shaper: &mut TextShaper,
    cfg: &CollageConfig,
    style: &StyleConfig,
) -> CoverwallResult<Vec<MarginLine>> {
    let width_u16: u16 = canvas
        .width
        .try_into()
        .map_err(|_| CoverwallError::render("canvas width exceeds u16"))?;
    let height_u16: u16 = canvas
        .height
        .try_into()
        .map_err(|_| CoverwallError::render("canvas height exceeds u16"))?;

    let font_size = cfg.font_size as f32;
    let line_h = shaper.line_height(font_size) + f64::from(cfg.line_spacing);
    let inset = f64::from(style.text_inset);
    let text_x = f64::from(grid::margin_x(cfg)) + inset;
    let wrap_width = f64::from(cfg.margin_width) - 2.0 * inset;

    let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
    let mut lines_out = Vec::new();

    for row in 0..cfg.rows {
        let mut y_ptr = f64::from(row * cfg.cell_size) + inset;
        for col in 0..cfg.cols {
            let idx = (row * cfg.cols + col) as usize;
            let label = pairs
                .get(idx)
                .map(LabelPair::display_label)
                .unwrap_or_default();
            let label = if label.is_empty() {
                PLACEHOLDER_GLYPH.to_string()
            } else {
                label
            };

            for text in shaper.wrap(&label, font_size, wrap_width) {
                let layout = shaper.layout_line(&text, font_size, style.text_color);
                let line_width = layout
                    .lines()
                    .next()
                    .map(|l| f64::from(l.metrics().advance))
                    .unwrap_or(0.0);
                draw_layout_at(&mut ctx, shaper.font_data(), &layout, text_x, y_ptr);
                lines_out.push(MarginLine {
                    row,
                    text,
                    origin: Point::new(text_x, y_ptr),
                    width: line_width,
                });
                y_ptr += line_h;
            }
        }
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
    clear_pixmap_to_transparent(&mut pixmap);
    ctx.render_to_pixmap(&mut pixmap);
    canvas.overlay_premul(pixmap.data_as_u8_slice())?;

    Ok(lines_out)
}

fn draw_layout_at(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<Rgba8>,
    x: f64,
    y: f64,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    for b in pixmap.data_as_u8_slice_mut() {
        *b = 0;
    }
}
