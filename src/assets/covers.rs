use std::path::PathBuf;

use crate::assets::decode::{PreparedImage, decode_image};
use crate::entries::parse::LabelPair;
use crate::foundation::core::{Rgba8, StyleConfig};

/// Resolves one grid entry to a guaranteed-valid cover raster.
///
/// Implementations must never fail: when a cover cannot be found or decoded
/// they substitute a placeholder raster instead, so the layout engine never
/// observes a missing image.
pub trait CoverProvider {
    /// Resolve `pair` to a decoded raster, substituting a placeholder when
    /// the real cover is unavailable.
    fn resolve(&self, pair: &LabelPair) -> PreparedImage;
}

/// Provider that always yields the blank-entry placeholder tile.
#[derive(Clone, Debug)]
pub struct PlaceholderCovers {
    fill: Rgba8,
    size: u32,
}

impl PlaceholderCovers {
    /// Build from the style's blank-entry fill and placeholder size.
    pub fn new(style: &StyleConfig) -> Self {
        Self {
            fill: style.blank_fill,
            size: style.placeholder_size,
        }
    }
}

impl CoverProvider for PlaceholderCovers {
    fn resolve(&self, _pair: &LabelPair) -> PreparedImage {
        PreparedImage::solid(self.size, self.size, self.fill)
    }
}

/// Provider that looks up cover files in a directory.
///
/// Candidate file stems are tried in order: `"{primary} - {secondary}"`,
/// then `"{secondary}"`, then `"{primary}"`, each against the supported
/// raster extensions. Blank entries resolve to the blank-entry placeholder;
/// lookup misses and decode failures resolve to the missing-cover
/// placeholder. Each substitution point is explicit, there is no blanket
/// error suppression.
#[derive(Clone, Debug)]
pub struct DirectoryCovers {
    root: PathBuf,
    style: StyleConfig,
}

const COVER_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

impl DirectoryCovers {
    /// Build a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, style: &StyleConfig) -> Self {
        Self {
            root: root.into(),
            style: *style,
        }
    }

    fn candidate_stems(pair: &LabelPair) -> Vec<String> {
        let mut stems = Vec::new();
        let joined = pair.display_label();
        if !joined.is_empty() {
            stems.push(joined);
        }
        if !pair.secondary.is_empty() {
            stems.push(pair.secondary.clone());
        }
        if !pair.primary.is_empty() {
            stems.push(pair.primary.clone());
        }
        stems.dedup();
        stems
    }

    fn find_cover_file(&self, pair: &LabelPair) -> Option<PathBuf> {
        for stem in Self::candidate_stems(pair) {
            for ext in COVER_EXTENSIONS {
                let path = self.root.join(format!("{stem}.{ext}"));
                if path.is_file() {
                    return Some(path);
                }
            }
        }
        None
    }

    fn placeholder(&self, fill: Rgba8) -> PreparedImage {
        PreparedImage::solid(self.style.placeholder_size, self.style.placeholder_size, fill)
    }
}

impl CoverProvider for DirectoryCovers {
    fn resolve(&self, pair: &LabelPair) -> PreparedImage {
        if pair.is_blank() {
            return self.placeholder(self.style.blank_fill);
        }

        let Some(path) = self.find_cover_file(pair) else {
            tracing::debug!(label = %pair.display_label(), "no cover file found, substituting placeholder");
            return self.placeholder(self.style.missing_fill);
        };

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "cover unreadable, substituting placeholder");
                return self.placeholder(self.style.missing_fill);
            }
        };
        match decode_image(&bytes) {
            Ok(img) => img,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "cover undecodable, substituting placeholder");
                self.placeholder(self.style.missing_fill)
            }
        }
    }
}

/// Front-load resolution of every entry's cover, in input order.
///
/// This keeps all IO ahead of the build so the engine itself stays pure.
#[tracing::instrument(skip(provider, pairs), fields(entries = pairs.len()))]
pub fn resolve_covers(provider: &dyn CoverProvider, pairs: &[LabelPair]) -> Vec<PreparedImage> {
    pairs.iter().map(|p| provider.resolve(p)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/covers.rs"]
mod tests;
