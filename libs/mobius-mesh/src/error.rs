//! # Mesh Errors
//!
//! Error types for Möbius mesh construction. Invalid input is a caller bug,
//! so errors are surfaced directly and never retried.

use std::fmt;

use thiserror::Error;

/// The strip parameter an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Distance from the center to the strip midline.
    Radius,
    /// Width of the strip across the transverse coordinate.
    Width,
    /// Number of samples per parameter axis.
    Resolution,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::Radius => "radius",
            Parameter::Width => "width",
            Parameter::Resolution => "resolution",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during mesh construction.
///
/// ## Example
///
/// ```rust
/// use mobius_mesh::{construct, MeshError, Parameter};
///
/// match construct(0.0, 0.3, 10) {
///     Err(MeshError::InvalidParameter { parameter, .. }) => {
///         assert_eq!(parameter, Parameter::Radius);
///     }
///     Ok(_) => unreachable!("zero radius is rejected"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A strip parameter is outside its valid range.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        /// Which parameter was rejected
        parameter: Parameter,
        /// Why it was rejected
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(parameter: Parameter, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }

    /// Returns the parameter this error refers to.
    pub fn parameter(&self) -> Parameter {
        match self {
            Self::InvalidParameter { parameter, .. } => *parameter,
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
