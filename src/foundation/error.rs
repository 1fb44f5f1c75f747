/// Convenience result type used across Coverwall.
pub type CoverwallResult<T> = Result<T, CoverwallError>;

/// Top-level error taxonomy used by crate APIs.
///
/// The layout/compositing engine itself is total over structurally valid
/// inputs; these variants surface only at the collaborator boundaries
/// (document validation, font registration, image decode, file IO).
#[derive(thiserror::Error, Debug)]
pub enum CoverwallError {
    /// Invalid user-provided configuration or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors registering or shaping with a font.
    #[error("font error: {0}")]
    Font(String),

    /// Errors preparing or compositing raster surfaces.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoverwallError {
    /// Build a [`CoverwallError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CoverwallError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`CoverwallError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
