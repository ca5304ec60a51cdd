//! # Strip Parameters
//!
//! Validated `(radius, width, resolution)` triple that fully determines a
//! Möbius strip mesh.

use config::constants::{
    DEFAULT_RADIUS, DEFAULT_RESOLUTION, DEFAULT_WIDTH, MAX_RESOLUTION, MIN_RESOLUTION,
};

use crate::error::{MeshError, MeshResult, Parameter};

/// Validated strip parameters.
///
/// Fields are private so every instance has passed validation.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::ParameterSet;
///
/// let params = ParameterSet::new(1.0, 0.3, 150).unwrap();
/// assert_eq!(params.resolution(), 150);
/// assert!(ParameterSet::new(1.0, 0.3, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    radius: f64,
    width: f64,
    resolution: usize,
}

impl ParameterSet {
    /// Creates a parameter set, rejecting values that cannot define a strip.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] when `radius` or `width` is not
    /// a positive finite number, or when `resolution` is below
    /// `MIN_RESOLUTION` or above `MAX_RESOLUTION`.
    pub fn new(radius: f64, width: f64, resolution: usize) -> MeshResult<Self> {
        validate_length(Parameter::Radius, radius)?;
        validate_length(Parameter::Width, width)?;
        validate_resolution(resolution)?;

        Ok(Self {
            radius,
            width,
            resolution,
        })
    }

    /// Distance from the center to the strip midline.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Width of the strip.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Samples per parameter axis.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Returns a copy with a different radius.
    ///
    /// # Errors
    ///
    /// Same as [`ParameterSet::new`].
    pub fn with_radius(self, radius: f64) -> MeshResult<Self> {
        Self::new(radius, self.width, self.resolution)
    }

    /// Returns a copy with a different width.
    ///
    /// # Errors
    ///
    /// Same as [`ParameterSet::new`].
    pub fn with_width(self, width: f64) -> MeshResult<Self> {
        Self::new(self.radius, width, self.resolution)
    }

    /// Returns a copy with a different resolution.
    ///
    /// # Errors
    ///
    /// Same as [`ParameterSet::new`].
    pub fn with_resolution(self, resolution: usize) -> MeshResult<Self> {
        Self::new(self.radius, self.width, resolution)
    }
}

impl Default for ParameterSet {
    /// `{radius: 1.0, width: 0.2, resolution: 100}`.
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            width: DEFAULT_WIDTH,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

fn validate_length(parameter: Parameter, value: f64) -> MeshResult<()> {
    if !value.is_finite() {
        return Err(MeshError::invalid_parameter(
            parameter,
            format!("must be finite, got {}", value),
        ));
    }
    if value <= 0.0 {
        return Err(MeshError::invalid_parameter(
            parameter,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

fn validate_resolution(resolution: usize) -> MeshResult<()> {
    if resolution < MIN_RESOLUTION {
        return Err(MeshError::invalid_parameter(
            Parameter::Resolution,
            format!(
                "must be at least {} samples per axis, got {}",
                MIN_RESOLUTION, resolution
            ),
        ));
    }
    if resolution > MAX_RESOLUTION {
        return Err(MeshError::invalid_parameter(
            Parameter::Resolution,
            format!(
                "must be at most {} samples per axis, got {}",
                MAX_RESOLUTION, resolution
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        let params = ParameterSet::new(2.0, 0.5, 10).unwrap();
        assert_eq!(params.radius(), 2.0);
        assert_eq!(params.width(), 0.5);
        assert_eq!(params.resolution(), 10);
    }

    #[test]
    fn test_zero_radius_rejected() {
        let err = ParameterSet::new(0.0, 0.3, 10).unwrap_err();
        assert_eq!(err.parameter(), Parameter::Radius);
    }

    #[test]
    fn test_negative_width_rejected() {
        let err = ParameterSet::new(1.0, -0.1, 10).unwrap_err();
        assert_eq!(err.parameter(), Parameter::Width);
    }

    #[test]
    fn test_single_sample_rejected() {
        let err = ParameterSet::new(1.0, 0.3, 1).unwrap_err();
        assert_eq!(err.parameter(), Parameter::Resolution);
        assert!(ParameterSet::new(1.0, 0.3, 0).is_err());
    }

    #[test]
    fn test_minimum_resolution_accepted() {
        assert!(ParameterSet::new(1.0, 0.3, 2).is_ok());
    }

    #[test]
    fn test_oversized_resolution_rejected() {
        let err = ParameterSet::new(1.0, 0.3, MAX_RESOLUTION + 1).unwrap_err();
        assert_eq!(err.parameter(), Parameter::Resolution);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(ParameterSet::new(f64::NAN, 0.3, 10).is_err());
        assert!(ParameterSet::new(1.0, f64::INFINITY, 10).is_err());
        assert!(ParameterSet::new(f64::NEG_INFINITY, 0.3, 10).is_err());
    }

    #[test]
    fn test_radius_checked_before_width() {
        let err = ParameterSet::new(-1.0, -1.0, 0).unwrap_err();
        assert_eq!(err.parameter(), Parameter::Radius);
    }

    #[test]
    fn test_default_matches_constants() {
        let params = ParameterSet::default();
        assert_eq!(params.radius(), 1.0);
        assert_eq!(params.width(), 0.2);
        assert_eq!(params.resolution(), 100);
        assert_eq!(
            ParameterSet::new(params.radius(), params.width(), params.resolution()).unwrap(),
            params
        );
    }

    #[test]
    fn test_with_methods_revalidate() {
        let params = ParameterSet::default();
        assert_eq!(params.with_radius(3.0).unwrap().radius(), 3.0);
        assert_eq!(params.with_width(0.4).unwrap().width(), 0.4);
        assert_eq!(params.with_resolution(7).unwrap().resolution(), 7);
        assert!(params.with_width(0.0).is_err());
        assert!(params.with_resolution(1).is_err());
    }
}
