//! # Möbius Mesh
//!
//! Discretized Möbius strip surfaces from closed-form parametric equations.
//!
//! ## Architecture
//!
//! ```text
//! ParameterSet → SampleGrid → MobiusMapper (per cell) → MeshBuilder → Mesh
//! ```
//!
//! The pipeline is a pure one-shot transformation. Rendering, animation and
//! display live in downstream crates that take a [`Mesh`] by reference.
//!
//! ## Usage
//!
//! ```rust
//! use mobius_mesh::construct;
//!
//! let mesh = construct(1.0, 0.2, 4)?;
//! let (x, y, z) = mesh.coordinates();
//! assert_eq!(x.shape(), (4, 4));
//! assert_eq!(y.shape(), z.shape());
//! # Ok::<(), mobius_mesh::MeshError>(())
//! ```

pub mod builder;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod parametric;
pub mod params;
pub mod sampling;
pub mod strip;

pub use builder::{Evaluation, MeshBuilder};
pub use error::{MeshError, MeshResult, Parameter};
pub use grid::Grid;
pub use mesh::{Mesh, SeamReport};
pub use parametric::MobiusMapper;
pub use params::ParameterSet;
pub use sampling::SampleGrid;
pub use strip::MobiusStrip;

/// Validates the parameters and builds the strip mesh.
///
/// This is the main entry point for mesh generation. It has no side effects.
///
/// # Arguments
///
/// * `radius` - Distance from the center to the strip midline (> 0)
/// * `width` - Width of the strip (> 0)
/// * `resolution` - Samples per parameter axis (≥ 2)
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] when any argument is out of range.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::construct;
///
/// assert!(construct(1.0, 0.3, 2).is_ok());
/// assert!(construct(1.0, 0.3, 1).is_err());
/// ```
pub fn construct(radius: f64, width: f64, resolution: usize) -> MeshResult<Mesh> {
    let params = ParameterSet::new(radius, width, resolution)?;
    Ok(MeshBuilder::from_parameters(params).build())
}
