//! # Mesh Data Structure
//!
//! Three aligned coordinate grids sampled from the strip surface.

use config::constants::approx_zero;
use glam::DVec3;

use crate::grid::Grid;
use crate::params::ParameterSet;
use crate::sampling::SampleGrid;

/// Sampled Möbius strip surface.
///
/// `x[(i, j)], y[(i, j)], z[(i, j)]` is the point at transverse parameter
/// `v[i]` and circumferential parameter `u[j]`. All three grids are
/// `resolution × resolution`. A mesh is immutable once built.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::construct;
///
/// let mesh = construct(1.0, 0.2, 4).unwrap();
/// let (x, y, z) = mesh.coordinates();
/// assert_eq!(x.shape(), (4, 4));
/// assert!((x[(0, 0)] - 0.9).abs() < 1e-12);
/// assert_eq!(y[(0, 0)], 0.0);
/// assert_eq!(z[(0, 0)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    params: ParameterSet,
    samples: SampleGrid,
    x: Grid,
    y: Grid,
    z: Grid,
}

/// How the `u = 0` and `u = 2π` columns of a mesh meet.
///
/// The half-twist maps `(0, v)` and `(2π, -v)` onto the same point, so the
/// last column repeats the first with its rows reversed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeamReport {
    /// Largest distance between `P[i][0]` and `P[n-1-i][n-1]`.
    pub reversed_gap: f64,
    /// Largest distance between `P[i][0]` and `P[i][n-1]`.
    pub aligned_gap: f64,
}

impl SeamReport {
    /// True when the closing column duplicates the opening one (reversed)
    /// within `tolerance`.
    pub fn is_duplicated(&self, tolerance: f64) -> bool {
        self.reversed_gap <= tolerance
    }

    /// True when the reversed seam gap is rounding noise (below
    /// [`config::constants::EPSILON`]).
    pub fn is_closed(&self) -> bool {
        approx_zero(self.reversed_gap)
    }
}

impl Mesh {
    pub(crate) fn from_parts(
        params: ParameterSet,
        samples: SampleGrid,
        x: Grid,
        y: Grid,
        z: Grid,
    ) -> Self {
        debug_assert_eq!(x.shape(), y.shape());
        debug_assert_eq!(x.shape(), z.shape());
        Self {
            params,
            samples,
            x,
            y,
            z,
        }
    }

    /// Returns the `(X, Y, Z)` grids.
    #[inline]
    pub fn coordinates(&self) -> (&Grid, &Grid, &Grid) {
        (&self.x, &self.y, &self.z)
    }

    /// X coordinate grid.
    #[inline]
    pub fn x(&self) -> &Grid {
        &self.x
    }

    /// Y coordinate grid.
    #[inline]
    pub fn y(&self) -> &Grid {
        &self.y
    }

    /// Z coordinate grid.
    #[inline]
    pub fn z(&self) -> &Grid {
        &self.z
    }

    /// Parameters the mesh was built from.
    #[inline]
    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Parameter samples indexing rows (`v`) and columns (`u`).
    #[inline]
    pub fn samples(&self) -> &SampleGrid {
        &self.samples
    }

    /// Samples per axis.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.x.rows()
    }

    /// Number of sampled points (`resolution²`).
    #[inline]
    pub fn point_count(&self) -> usize {
        self.x.as_slice().len()
    }

    /// The point at row `row` (`v`) and column `col` (`u`).
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn point(&self, row: usize, col: usize) -> DVec3 {
        DVec3::new(self.x[(row, col)], self.y[(row, col)], self.z[(row, col)])
    }

    /// Iterates over all points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.x
            .as_slice()
            .iter()
            .zip(self.y.as_slice())
            .zip(self.z.as_slice())
            .map(|((x, y), z)| DVec3::new(*x, *y, *z))
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut points = self.points();
        let Some(first) = points.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
    }

    /// Measures how the first and last columns meet.
    pub fn seam(&self) -> SeamReport {
        let n = self.resolution();
        let last = n - 1;
        let mut reversed_gap: f64 = 0.0;
        let mut aligned_gap: f64 = 0.0;
        for i in 0..n {
            let opening = self.point(i, 0);
            reversed_gap = reversed_gap.max(opening.distance(self.point(last - i, last)));
            aligned_gap = aligned_gap.max(opening.distance(self.point(i, last)));
        }
        SeamReport {
            reversed_gap,
            aligned_gap,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::construct;
    use approx::assert_relative_eq;
    use glam::DVec3;

    #[test]
    fn test_coordinates_aligned() {
        let mesh = construct(1.0, 0.3, 6).unwrap();
        let (x, y, z) = mesh.coordinates();
        assert_eq!(x.shape(), y.shape());
        assert_eq!(y.shape(), z.shape());
        assert_eq!(mesh.resolution(), 6);
        assert_eq!(mesh.point_count(), 36);
    }

    #[test]
    fn test_point_matches_grids() {
        let mesh = construct(1.0, 0.3, 5).unwrap();
        let p = mesh.point(3, 2);
        assert_eq!(p, DVec3::new(mesh.x()[(3, 2)], mesh.y()[(3, 2)], mesh.z()[(3, 2)]));
    }

    #[test]
    fn test_points_row_major() {
        let mesh = construct(1.0, 0.3, 3).unwrap();
        let points: Vec<DVec3> = mesh.points().collect();
        assert_eq!(points.len(), 9);
        assert_eq!(points[5], mesh.point(1, 2));
    }

    #[test]
    fn test_bounding_box() {
        let mesh = construct(1.0, 0.2, 41).unwrap();
        let (min, max) = mesh.bounding_box();
        assert!(max.x <= 1.1 + 1e-12);
        assert!(min.x >= -1.1 - 1e-12);
        assert!(max.z <= 0.1 + 1e-12);
        assert!(min.z >= -0.1 - 1e-12);
        assert_relative_eq!(max.x, 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_seam_duplicates_reversed_column() {
        let mesh = construct(1.0, 0.3, 9).unwrap();
        let seam = mesh.seam();
        assert!(seam.is_closed());
        // Same-row gap is the full strip width at the outer rows
        assert_relative_eq!(seam.aligned_gap, 0.3, epsilon = 1e-12);
    }
}
