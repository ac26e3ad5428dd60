//! # Parameter Sampling
//!
//! Evenly spaced 1D sequences and the `(u, v)` mesh product built from them.
//!
//! Row index `i` walks across the strip (`v`), column index `j` walks around
//! it (`u`): `u[i][j] = U[j]`, `v[i][j] = V[i]`.

use std::f64::consts::TAU;

use crate::error::{check_width, MobiusResult};
use crate::grid::Grid2;
use crate::params::check_resolution;

/// Returns `count` evenly spaced values over `[start, end]`, both inclusive.
///
/// The first value is exactly `start` and the last exactly `end`.
/// `count == 1` yields `[start]`; `count == 0` yields an empty vector.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::sampling::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|k| start + k as f64 * step).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Angular samples over the closed range `[0, 2π]`.
pub fn angular_samples(count: usize) -> Vec<f64> {
    linspace(0.0, TAU, count)
}

/// Lateral samples over `[-width/2, width/2]`.
pub fn lateral_samples(width: f64, count: usize) -> Vec<f64> {
    linspace(-width / 2.0, width / 2.0, count)
}

/// The `(u, v)` parameter grid, both arrays `resolution × resolution`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    u: Grid2,
    v: Grid2,
}

impl ParameterGrid {
    /// Builds the mesh product of the angular and lateral samples.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mobius_mesh::sampling::ParameterGrid;
    ///
    /// let grid = ParameterGrid::new(0.4, 3).unwrap();
    /// // columns sweep u, rows sweep v
    /// assert_eq!(grid.u().row(0), grid.u().row(2));
    /// assert_eq!(grid.v().get(0, 0), -0.2);
    /// assert_eq!(grid.v().get(2, 1), 0.2);
    /// ```
    pub fn new(width: f64, resolution: usize) -> MobiusResult<Self> {
        check_width(width)?;
        check_resolution(resolution)?;
        Ok(Self::build(width, resolution))
    }

    pub(crate) fn build(width: f64, resolution: usize) -> Self {
        let us = angular_samples(resolution);
        let vs = lateral_samples(width, resolution);
        let u = Grid2::from_fn(resolution, resolution, |_, j| us[j]);
        let v = Grid2::from_fn(resolution, resolution, |i, _| vs[i]);
        Self { u, v }
    }

    /// Angular position around the strip.
    #[inline]
    pub fn u(&self) -> &Grid2 {
        &self.u
    }

    /// Lateral offset across the strip.
    #[inline]
    pub fn v(&self) -> &Grid2 {
        &self.v
    }

    /// Shared shape of both arrays.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.u.shape()
    }
}
