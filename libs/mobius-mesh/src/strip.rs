//! # Möbius Strip
//!
//! Owner of one parameter set, its sample grid and the mesh they determine.
//! The samples are taken at construction; the mesh is built on first access
//! and cached for the lifetime of the strip.

use std::sync::OnceLock;

use crate::builder::MeshBuilder;
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::parametric::MobiusMapper;
use crate::params::ParameterSet;
use crate::sampling::SampleGrid;

/// A strip instance with a lazily built, never mutated mesh.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::MobiusStrip;
///
/// let strip = MobiusStrip::new(1.0, 0.3, 20).unwrap();
/// let first = strip.mesh() as *const _;
/// let second = strip.mesh() as *const _;
/// assert_eq!(first, second);
/// ```
#[derive(Debug)]
pub struct MobiusStrip {
    params: ParameterSet,
    samples: SampleGrid,
    mesh: OnceLock<Mesh>,
}

impl MobiusStrip {
    /// Validates the parameters and creates a strip.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MeshError::InvalidParameter`] per [`ParameterSet::new`].
    pub fn new(radius: f64, width: f64, resolution: usize) -> MeshResult<Self> {
        ParameterSet::new(radius, width, resolution).map(Self::from_parameters)
    }

    /// Creates a strip from already validated parameters.
    pub fn from_parameters(params: ParameterSet) -> Self {
        Self {
            samples: SampleGrid::new(&params),
            params,
            mesh: OnceLock::new(),
        }
    }

    /// Strip parameters.
    #[inline]
    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Parameter samples the mesh is evaluated at.
    #[inline]
    pub fn samples(&self) -> &SampleGrid {
        &self.samples
    }

    fn builder(params: ParameterSet, samples: SampleGrid) -> MeshBuilder {
        MeshBuilder::new(params, samples, MobiusMapper::new(params.radius()))
    }

    /// Returns the mesh, building it on first call.
    pub fn mesh(&self) -> &Mesh {
        self.mesh
            .get_or_init(|| Self::builder(self.params, self.samples.clone()).build())
    }

    /// True once the mesh has been built.
    pub fn is_built(&self) -> bool {
        self.mesh.get().is_some()
    }

    /// Consumes the strip and returns its mesh.
    pub fn into_mesh(self) -> Mesh {
        match self.mesh.into_inner() {
            Some(mesh) => mesh,
            None => Self::builder(self.params, self.samples).build(),
        }
    }
}

impl Default for MobiusStrip {
    fn default() -> Self {
        Self::from_parameters(ParameterSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_mesh_built_lazily() {
        let strip = MobiusStrip::new(1.0, 0.2, 10).unwrap();
        assert!(!strip.is_built());
        let _ = strip.mesh();
        assert!(strip.is_built());
    }

    #[test]
    fn test_mesh_cached() {
        let strip = MobiusStrip::new(1.0, 0.2, 10).unwrap();
        assert!(std::ptr::eq(strip.mesh(), strip.mesh()));
    }

    #[test]
    fn test_samples_available_before_build() {
        let strip = MobiusStrip::new(1.0, 0.2, 12).unwrap();
        assert_eq!(strip.samples().len(), 12);
        assert!(!strip.is_built());
        assert_eq!(strip.mesh().samples(), strip.samples());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(MobiusStrip::new(1.0, 0.0, 10).is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let strip = Arc::new(MobiusStrip::new(1.0, 0.2, 16).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let strip = Arc::clone(&strip);
                thread::spawn(move || strip.mesh().x()[(3, 5)])
            })
            .collect();
        let values: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_into_mesh_matches_cached() {
        let strip = MobiusStrip::default();
        let cached = strip.mesh().clone();
        assert_eq!(strip.into_mesh(), cached);
        let fresh = MobiusStrip::default().into_mesh();
        assert_eq!(fresh, cached);
        assert_eq!(fresh.resolution(), 100);
    }
}
