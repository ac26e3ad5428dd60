//! # Grid Storage
//!
//! Row-major 2D array of `f64` samples shared by the parameter grid and the
//! surface coordinates.

use serde::Serialize;

/// A dense `rows × cols` array stored row-major.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::Grid2;
///
/// let grid = Grid2::from_fn(2, 3, |i, j| (i * 10 + j) as f64);
/// assert_eq!(grid.shape(), (2, 3));
/// assert_eq!(grid.get(1, 2), 12.0);
/// assert_eq!(grid.row(1), &[10.0, 11.0, 12.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid2 {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid2 {
    /// Builds a grid by evaluating `f(i, j)` at every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Wraps row-major data. `data.len()` must equal `rows * cols`.
    pub(crate) fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
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

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the value at row `i`, column `j`.
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.row(i)[j]
    }

    /// Returns the value at row `i`, column `j`, or `None` out of bounds.
    pub fn try_get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            self.data.get(i * self.cols + j).copied()
        } else {
            None
        }
    }

    /// Returns row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterates the values of column `j` from the first row to the last.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().skip(j).step_by(self.cols.max(1)).copied()
    }

    /// Row-major view of all values.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns true if every value is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}
