//! # Coordinate Grid
//!
//! Dense row-major two-dimensional array of `f64`, one per spatial axis.

use std::ops::Index;

/// A `rows × cols` grid of scalars stored row-major.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::Grid;
///
/// let grid = Grid::from_fn(2, 3, |i, j| (i * 10 + j) as f64);
/// assert_eq!(grid.shape(), (2, 3));
/// assert_eq!(grid[(1, 2)], 12.0);
/// assert_eq!(grid.row(1), &[10.0, 11.0, 12.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Builds a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Wraps row-major data. Returns `None` if the length does not match.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns one row as a slice.
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterates over rows.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Copies one column out of the grid.
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vec<f64> {
        assert!(col < self.cols, "column {} out of bounds ({})", col, self.cols);
        (0..self.rows).map(|i| self.data[i * self.cols + col]).collect()
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Smallest and largest cell values, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), value| (lo.min(value), hi.max(value))))
    }

    /// Copies the grid into nested rows (`grid[i][j]` indexing).
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.rows_iter().map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_row_major() {
        let grid = Grid::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
        assert_eq!(grid.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_get_bounds() {
        let grid = Grid::from_fn(2, 3, |_, _| 1.0);
        assert_eq!(grid.get(1, 2), Some(1.0));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_column() {
        let grid = Grid::from_fn(3, 2, |i, j| (i * 10 + j) as f64);
        assert_eq!(grid.column(1), vec![1.0, 11.0, 21.0]);
    }

    #[test]
    fn test_from_row_major_checks_length() {
        assert!(Grid::from_row_major(2, 2, vec![0.0; 4]).is_some());
        assert!(Grid::from_row_major(2, 2, vec![0.0; 3]).is_none());
    }

    #[test]
    fn test_min_max() {
        let grid = Grid::from_fn(2, 2, |i, j| i as f64 - j as f64);
        assert_eq!(grid.min_max(), Some((-1.0, 1.0)));
        let empty = Grid::from_fn(0, 0, |_, _| 0.0);
        assert_eq!(empty.min_max(), None);
    }

    #[test]
    fn test_to_nested() {
        let grid = Grid::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
        assert_eq!(grid.to_nested(), vec![vec![0.0, 1.0], vec![2.0, 3.0]]);
    }

    #[test]
    fn test_zero_width_rows_kept() {
        let grid = Grid::from_row_major(3, 0, vec![]).unwrap();
        assert_eq!(grid.rows_iter().count(), 3);
        assert_eq!(grid.to_nested(), vec![Vec::<f64>::new(); 3]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let grid = Grid::from_fn(2, 2, |_, _| 0.0);
        let _ = grid[(0, 2)];
    }
}
