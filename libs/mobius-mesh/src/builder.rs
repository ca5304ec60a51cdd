//! # Mesh Builder
//!
//! Evaluates the parametric mapping over the full Cartesian product of the
//! sampled axes. Cells are independent, so large meshes are filled row by
//! row in parallel with rayon; the result is identical to the sequential fill.

use config::constants::PARALLEL_ROW_THRESHOLD;
use rayon::prelude::*;

use crate::grid::Grid;
use crate::mesh::Mesh;
use crate::parametric::MobiusMapper;
use crate::params::ParameterSet;
use crate::sampling::SampleGrid;

/// How mesh rows are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluation {
    /// Parallel from `PARALLEL_ROW_THRESHOLD` rows upward.
    #[default]
    Auto,
    /// Always on the calling thread.
    Sequential,
    /// Always on the rayon pool.
    Parallel,
}

/// Combines a [`SampleGrid`] with a [`MobiusMapper`] into a [`Mesh`].
///
/// # Example
///
/// ```rust
/// use mobius_mesh::{MeshBuilder, MobiusMapper, ParameterSet, SampleGrid};
///
/// let params = ParameterSet::new(1.0, 0.2, 8).unwrap();
/// let samples = SampleGrid::new(&params);
/// let mesh = MeshBuilder::new(params, samples, MobiusMapper::new(params.radius())).build();
/// assert_eq!(mesh.resolution(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    params: ParameterSet,
    samples: SampleGrid,
    mapper: MobiusMapper,
    evaluation: Evaluation,
}

impl MeshBuilder {
    /// Creates a builder for the given axes and mapping.
    pub fn new(params: ParameterSet, samples: SampleGrid, mapper: MobiusMapper) -> Self {
        Self {
            params,
            samples,
            mapper,
            evaluation: Evaluation::Auto,
        }
    }

    /// Creates a builder from parameters alone.
    pub fn from_parameters(params: ParameterSet) -> Self {
        let samples = SampleGrid::new(&params);
        Self::new(params, samples, MobiusMapper::new(params.radius()))
    }

    /// Overrides row scheduling.
    pub fn evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Evaluates every cell and returns the finished mesh.
    pub fn build(self) -> Mesh {
        let rows = self.samples.v().len();
        let cols = self.samples.u().len();
        let parallel = match self.evaluation {
            Evaluation::Auto => rows >= PARALLEL_ROW_THRESHOLD,
            Evaluation::Sequential => false,
            Evaluation::Parallel => true,
        };

        log::debug!(
            "Building Möbius mesh: {}x{} cells (R={}, w={}, {})",
            rows,
            cols,
            self.params.radius(),
            self.params.width(),
            if parallel { "parallel" } else { "sequential" }
        );

        let mut x = vec![0.0; rows * cols];
        let mut y = vec![0.0; rows * cols];
        let mut z = vec![0.0; rows * cols];

        if cols > 0 {
            if parallel {
                x.par_chunks_mut(cols)
                    .zip(y.par_chunks_mut(cols))
                    .zip(z.par_chunks_mut(cols))
                    .enumerate()
                    .for_each(|(i, ((xr, yr), zr))| self.fill_row(i, xr, yr, zr));
            } else {
                x.chunks_mut(cols)
                    .zip(y.chunks_mut(cols))
                    .zip(z.chunks_mut(cols))
                    .enumerate()
                    .for_each(|(i, ((xr, yr), zr))| self.fill_row(i, xr, yr, zr));
            }
        }

        Mesh::from_parts(
            self.params,
            self.samples,
            Grid::from_parts(rows, cols, x),
            Grid::from_parts(rows, cols, y),
            Grid::from_parts(rows, cols, z),
        )
    }

    /// Fills row `i` (transverse sample `v[i]`) across every `u`.
    fn fill_row(&self, i: usize, xr: &mut [f64], yr: &mut [f64], zr: &mut [f64]) {
        let v = self.samples.v()[i];
        for (j, &u) in self.samples.u().iter().enumerate() {
            let p = self.mapper.map(u, v);
            xr[j] = p.x;
            yr[j] = p.y;
            zr[j] = p.z;
        }
    }
}
