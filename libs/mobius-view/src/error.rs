//! # View Errors
//!
//! Error types for scene, animation and document generation.

use thiserror::Error;

/// Errors that can occur while presenting a mesh.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Animation or camera settings are out of range
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    /// Colormap name not recognized
    #[error("Unknown colormap '{name}' (expected one of: {expected})")]
    UnknownColormap { name: String, expected: String },

    /// Document serialization failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ViewError {
    /// Creates an invalid settings error.
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }
}

/// Result type alias for view operations.
pub type ViewResult<T> = Result<T, ViewError>;
