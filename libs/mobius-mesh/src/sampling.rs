//! # Parameter Sampling
//!
//! Evenly spaced samples of the circumferential (`u`) and transverse (`v`)
//! parameter axes.

use std::f64::consts::TAU;

use crate::params::ParameterSet;

/// Returns `count` evenly spaced values over `[start, end]`, both inclusive.
///
/// Values are `start + i * step` with `step = (end - start) / (count - 1)`.
/// The last value is pinned to `end` so accumulated rounding never moves the
/// interval boundary. `count` of 0 or 1 yields `[]` or `[start]`.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::sampling::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Sampled parameter axes of a strip.
///
/// `u` runs over `[0, 2π]` and indexes mesh columns; `v` runs over
/// `[-width / 2, width / 2]` and indexes mesh rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    u: Vec<f64>,
    v: Vec<f64>,
}

impl SampleGrid {
    /// Samples both axes at the parameter set's resolution.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mobius_mesh::{ParameterSet, SampleGrid};
    ///
    /// let params = ParameterSet::new(1.0, 0.2, 3).unwrap();
    /// let samples = SampleGrid::new(&params);
    /// assert_eq!(samples.v(), &[-0.1, 0.0, 0.1]);
    /// ```
    pub fn new(params: &ParameterSet) -> Self {
        let n = params.resolution();
        let half_width = params.width() / 2.0;
        Self {
            u: linspace(0.0, TAU, n),
            v: linspace(-half_width, half_width, n),
        }
    }

    /// Circumferential samples (column axis).
    #[inline]
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Transverse samples (row axis).
    #[inline]
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Samples per axis.
    #[inline]
    pub fn len(&self) -> usize {
        self.u.len()
    }

    /// True when no samples are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    /// Row whose `v` sample is closest to the strip centerline `v = 0`.
    ///
    /// For odd resolutions this is the exact middle row.
    pub fn centerline_row(&self) -> usize {
        self.v
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.abs().total_cmp(&b.abs()))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
