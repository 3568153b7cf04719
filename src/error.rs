use thiserror::Error;

/// Errors raised while building scene objects
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("unsupported shape type: {0:?}")]
    UnsupportedShapeType(String),

    #[error("scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    #[error("object position must be finite, got ({x}, {y}, {z})")]
    InvalidPosition { x: f64, y: f64, z: f64 },
}

/// Errors raised while drawing a scene
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("plotting backend error: {0}")]
    Backend(String),

    #[error("unsupported output format: {0:?} (expected .png or .svg)")]
    UnsupportedFormat(String),

    #[error("invalid image size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

impl RenderError {
    pub(crate) fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}
