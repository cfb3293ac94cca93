// File: crates/splot-core/src/error.rs
// Summary: Error type shared by meshing, assembly, rendering and output.

use thiserror::Error;

/// Result alias for splot operations.
pub type Result<T> = std::result::Result<T, SplotError>;

#[derive(Debug, Error)]
pub enum SplotError {
    /// Range bounds are not finite or not strictly increasing.
    #[error("invalid range: min ({min}) must be finite and below max ({max})")]
    InvalidRange { min: f64, max: f64 },

    /// A mesh needs at least one bin.
    #[error("bin count must be greater than zero")]
    ZeroBins,

    /// Axis selection string was not one of left/y/right/y2.
    #[error("invalid yaxis choice '{0}'. Try \"right\" or \"left\"")]
    InvalidAxis(String),

    /// A parameter could not be interpreted.
    #[error("invalid parameter '{key}': {reason}")]
    InvalidParam { key: String, reason: String },

    /// Nothing to plot.
    #[error("no functions to plot")]
    EmptyInput,

    /// The drawing backend failed.
    #[error("render failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SplotError {
    pub fn invalid_param(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParam { key: key.into(), reason: reason.into() }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
