use crate::foundation::error::{CoverwallError, CoverwallResult};

pub use kurbo::{Point, Rect};

/// Straight (non-premultiplied) RGBA8 color.
///
/// Also serves as the parley text brush so that measured and drawn text share
/// one color type.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiplied byte quadruple (r,g,b multiplied by a).
    pub fn premultiplied(self) -> [u8; 4] {
        let a = u16::from(self.a);
        let premul = |c: u8| -> u8 { (((u16::from(c) * a) + 127) / 255) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }
}

/// Integer pixel rectangle in canvas space.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RectPx {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

/// Grid and geometry parameters for one collage build.
///
/// All downstream geometry derives from this value. The hosting surface is
/// responsible for clamping/validating before the engine runs (see
/// [`CollageConfig::validate`] and [`CollageConfig::clamped`]); the engine
/// assumes a valid config. In particular `2 * padding < cell_size` must hold
/// for a non-degenerate drawable tile area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CollageConfig {
    /// Grid column count.
    #[serde(default = "default_grid_dim")]
    pub cols: u32,
    /// Grid row count.
    #[serde(default = "default_grid_dim")]
    pub rows: u32,
    /// Square cell side length in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    /// Width of the label margin to the right of the grid.
    #[serde(default = "default_margin_width")]
    pub margin_width: u32,
    /// Inset between cell edge and tile on each side.
    #[serde(default)]
    pub padding: u32,
    /// Label font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Extra vertical spacing between wrapped label lines.
    #[serde(default = "default_line_spacing")]
    pub line_spacing: u32,
}

fn default_grid_dim() -> u32 {
    4
}

fn default_cell_size() -> u32 {
    300
}

fn default_margin_width() -> u32 {
    320
}

fn default_font_size() -> u32 {
    20
}

fn default_line_spacing() -> u32 {
    4
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            cols: default_grid_dim(),
            rows: default_grid_dim(),
            cell_size: default_cell_size(),
            margin_width: default_margin_width(),
            padding: 0,
            font_size: default_font_size(),
            line_spacing: default_line_spacing(),
        }
    }
}

impl CollageConfig {
    /// Total number of grid cells.
    pub fn total_cells(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// Reject configs below the hosting-surface minimums or with a degenerate
    /// drawable tile area.
    pub fn validate(&self) -> CoverwallResult<()> {
        if self.cols < 1 || self.rows < 1 {
            return Err(CoverwallError::validation("cols and rows must be >= 1"));
        }
        if self.cell_size < 80 {
            return Err(CoverwallError::validation("cell_size must be >= 80"));
        }
        if self.margin_width < 120 {
            return Err(CoverwallError::validation("margin_width must be >= 120"));
        }
        if self.font_size < 10 {
            return Err(CoverwallError::validation("font_size must be >= 10"));
        }
        if self.padding * 2 >= self.cell_size {
            return Err(CoverwallError::validation(
                "padding * 2 must be < cell_size",
            ));
        }
        Ok(())
    }

    /// Copy with the hosting-surface minimums applied.
    pub fn clamped(self) -> Self {
        Self {
            cols: self.cols.max(1),
            rows: self.rows.max(1),
            cell_size: self.cell_size.max(80),
            margin_width: self.margin_width.max(120),
            padding: self.padding,
            font_size: self.font_size.max(10),
            line_spacing: self.line_spacing,
        }
    }
}

/// Colors and fixed insets used during composition.
///
/// These were implicit process-wide defaults in earlier renderers of this
/// kind; here every fallback is an explicit, documented field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StyleConfig {
    /// Canvas background color.
    #[serde(default = "default_background")]
    pub background: Rgba8,
    /// Margin label text color.
    #[serde(default = "default_text_color")]
    pub text_color: Rgba8,
    /// Fill for tiles synthesized for blank entries.
    #[serde(default = "default_blank_fill")]
    pub blank_fill: Rgba8,
    /// Fill for tiles substituted when cover resolution fails.
    #[serde(default = "default_missing_fill")]
    pub missing_fill: Rgba8,
    /// Side length of synthesized placeholder tiles.
    #[serde(default = "default_placeholder_size")]
    pub placeholder_size: u32,
    /// Horizontal/vertical inset around margin text.
    #[serde(default = "default_text_inset")]
    pub text_inset: u32,
}

fn default_background() -> Rgba8 {
    Rgba8::opaque(0, 0, 0)
}

fn default_text_color() -> Rgba8 {
    Rgba8::opaque(255, 255, 255)
}

fn default_blank_fill() -> Rgba8 {
    Rgba8::opaque(20, 20, 20)
}

fn default_missing_fill() -> Rgba8 {
    Rgba8::opaque(25, 25, 25)
}

fn default_placeholder_size() -> u32 {
    600
}

fn default_text_inset() -> u32 {
    10
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            text_color: default_text_color(),
            blank_fill: default_blank_fill(),
            missing_fill: default_missing_fill(),
            placeholder_size: default_placeholder_size(),
            text_inset: default_text_inset(),
        }
    }
}
