//! Coverwall assembles a rectangular grid of square cover images into one
//! large raster, annotating each grid row with wrapped text labels in a
//! dedicated side margin.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: raw label text -> ordered [`LabelPair`] sequence
//! 2. **Resolve**: label pairs -> decoded cover rasters via a [`CoverProvider`]
//! 3. **Build**: `build_collage(pairs, images, shaper, config, style) -> ComposedCollage`
//! 4. **Encode** (optional): write the composed canvas as PNG or JPEG
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: [`build_collage`] is a pure function of its
//!   inputs; identical inputs yield byte-identical canvases.
//! - **No IO in the engine**: cover resolution and font loading are
//!   front-loaded; encoding is back-loaded. The build itself never touches
//!   the filesystem.
//! - **Premultiplied RGBA8** end-to-end: the canvas and all prepared images
//!   carry premultiplied pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composition;
mod encode;
mod entries;
mod foundation;
mod layout;
mod render;
mod text;
mod tile;

pub use assets::covers::{CoverProvider, DirectoryCovers, PlaceholderCovers, resolve_covers};
pub use assets::decode::{PreparedImage, decode_image};
pub use composition::model::CollageJob;
pub use encode::image_out::{save_canvas, scale_canvas};
pub use entries::parse::{LabelPair, parse_entries};
pub use foundation::core::{CollageConfig, Point, Rect, RectPx, Rgba8, StyleConfig};
pub use foundation::error::{CoverwallError, CoverwallResult};
pub use layout::grid::{
    MarginLine, TilePlacement, canvas_size, cell_origin, margin_x, tile_placements,
};
pub use render::engine::{ComposedCollage, PLACEHOLDER_GLYPH, build_collage};
pub use render::surface::Canvas;
pub use text::fonts::{load_font_bytes, locate_system_font};
pub use text::metrics::{TextShaper, wrap_words};
pub use tile::compositor::{center_square, composite_tile, square_thumbnail};
