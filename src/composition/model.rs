use crate::foundation::core::{CollageConfig, StyleConfig};
use crate::foundation::error::CoverwallResult;

/// A complete collage job document.
///
/// A job is a pure data model that can be built programmatically or
/// serialized/deserialized via Serde (JSON); the CLI consumes job files and
/// drives the parse -> resolve -> build -> encode pipeline from them. Paths
/// are interpreted relative to the job file's directory.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CollageJob {
    /// Grid and geometry parameters.
    #[serde(default)]
    pub config: CollageConfig,
    /// Colors and insets.
    #[serde(default)]
    pub style: StyleConfig,
    /// Path to a TTF/OTF font file. When absent the hosting surface decides
    /// how to obtain a font (the CLI falls back to system font discovery).
    #[serde(default)]
    pub font_source: Option<String>,
    /// Directory of cover image files. When absent every entry resolves to a
    /// placeholder tile.
    #[serde(default)]
    pub covers_dir: Option<String>,
    /// Raw newline-delimited `"Primary - Secondary"` entry text.
    pub entries: String,
}

impl CollageJob {
    /// Validate the document before rendering.
    pub fn validate(&self) -> CoverwallResult<()> {
        self.config.validate()
    }
}
