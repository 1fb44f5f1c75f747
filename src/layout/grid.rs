use crate::foundation::core::{CollageConfig, Point, RectPx};

/// Pixel-accurate placement of one grid tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TilePlacement {
    /// Grid row, counted from the top.
    pub row: u32,
    /// Grid column, counted from the left.
    pub col: u32,
    /// Full cell rectangle.
    pub cell: RectPx,
    /// Padded interior that receives the scaled tile.
    pub inner: RectPx,
}

/// One rendered margin text line and where it was drawn.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarginLine {
    /// Grid row whose label block this line belongs to.
    pub row: u32,
    /// Line content after wrapping.
    pub text: String,
    /// Top-left draw origin of the line box.
    pub origin: Point,
    /// Measured advance width in pixels.
    pub width: f64,
}

/// Output canvas dimensions: `(cols*cell_size + margin_width, rows*cell_size)`.
pub fn canvas_size(cfg: &CollageConfig) -> (u32, u32) {
    (
        cfg.cols * cfg.cell_size + cfg.margin_width,
        cfg.rows * cfg.cell_size,
    )
}

/// Top-left corner of the cell at `(row, col)`.
pub fn cell_origin(cfg: &CollageConfig, row: u32, col: u32) -> (u32, u32) {
    (col * cfg.cell_size, row * cfg.cell_size)
}

/// Left edge of the label margin.
pub fn margin_x(cfg: &CollageConfig) -> u32 {
    cfg.cols * cfg.cell_size
}

/// Placements for every cell in row-major order (`index = row*cols + col`).
pub fn tile_placements(cfg: &CollageConfig) -> Vec<TilePlacement> {
    let inner_side = cfg.cell_size - 2 * cfg.padding;
    let mut out = Vec::with_capacity(cfg.total_cells());
    for row in 0..cfg.rows {
        for col in 0..cfg.cols {
            let (x, y) = cell_origin(cfg, row, col);
            out.push(TilePlacement {
                row,
                col,
                cell: RectPx {
                    x,
                    y,
                    w: cfg.cell_size,
                    h: cfg.cell_size,
                },
                inner: RectPx {
                    x: x + cfg.padding,
                    y: y + cfg.padding,
                    w: inner_side,
                    h: inner_side,
                },
            });
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
