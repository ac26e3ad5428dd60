//! # Surface Generator
//!
//! Samples the `(u, v)` grid and maps every sample onto the strip.
//!
//! ## Layout
//!
//! ```text
//!            j → u ∈ [0, 2π]
//!        ┌───────────────────┐
//!  i → v │ x[i][j] y[i][j]   │   resolution × resolution
//!  ∈ ±w/2│ z[i][j]           │
//!        └───────────────────┘
//! ```

use config::constants::{DEFAULT_BOUNDARY_SAMPLES, PARALLEL_ROW_THRESHOLD};
use glam::DVec3;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::boundary::{boundary_curves, BoundaryCurve};
use crate::error::MobiusResult;
use crate::grid::Grid2;
use crate::mesh::Mesh;
use crate::metrics::DerivedMetrics;
use crate::parametrization::mobius_point;
use crate::params::StripParams;
use crate::sampling::ParameterGrid;
use crate::tessellate::tessellate;

/// The three coordinate arrays of a sampled strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfacePoints {
    x: Grid2,
    y: Grid2,
    z: Grid2,
}

impl SurfacePoints {
    /// X coordinates.
    #[inline]
    pub fn x(&self) -> &Grid2 {
        &self.x
    }

    /// Y coordinates.
    #[inline]
    pub fn y(&self) -> &Grid2 {
        &self.y
    }

    /// Z coordinates.
    #[inline]
    pub fn z(&self) -> &Grid2 {
        &self.z
    }

    /// `(rows, cols)` shared by all three arrays.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// The sample at row `i`, column `j` as a point.
    #[inline]
    pub fn point(&self, i: usize, j: usize) -> DVec3 {
        DVec3::new(self.x.get(i, j), self.y.get(i, j), self.z.get(i, j))
    }

    /// Row-major iterator over all sample points.
    pub fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.x
            .as_slice()
            .iter()
            .zip(self.y.as_slice())
            .zip(self.z.as_slice())
            .map(|((&x, &y), &z)| DVec3::new(x, y, z))
    }

    /// Largest distance between the first column and the last column with
    /// rows reversed.
    ///
    /// The half-twist maps `(u = 0, v)` onto `(u = 2π, -v)`, and the lateral
    /// samples are symmetric, so row `i` of column 0 meets row `n-1-i` of the
    /// last column. A value near zero confirms the strip closes.
    pub fn seam_gap(&self) -> f64 {
        let (rows, cols) = self.shape();
        (0..rows)
            .map(|i| self.point(i, 0).distance(self.point(rows - 1 - i, cols - 1)))
            .fold(0.0, f64::max)
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut points = self.points();
        let Some(first) = points.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
    }

    /// Returns true if no coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Samples the strip and computes its derived metrics.
///
/// # Arguments
///
/// * `radius` - Centerline radius, positive and finite
/// * `width` - Strip width, positive and finite
/// * `resolution` - Samples per grid axis, at least 2
///
/// # Example
///
/// ```rust
/// use mobius_mesh::generate;
///
/// let (points, metrics) = generate(1.0, 0.3, 50).unwrap();
/// assert_eq!(points.shape(), (50, 50));
/// assert!((metrics.edge_length - 4.0 * std::f64::consts::PI).abs() < 1e-12);
///
/// assert!(generate(1.0, 0.3, 1).is_err());
/// ```
pub fn generate(
    radius: f64,
    width: f64,
    resolution: usize,
) -> MobiusResult<(SurfacePoints, DerivedMetrics)> {
    let params = StripParams::new(radius, width, resolution)?;
    let grid = ParameterGrid::build(params.width(), params.resolution());
    Ok((
        sample_surface(params.radius(), &grid),
        DerivedMetrics::from_params(&params),
    ))
}

/// Maps every `(u, v)` cell of `grid` through the parametrization.
fn sample_surface(radius: f64, grid: &ParameterGrid) -> SurfacePoints {
    let (rows, cols) = grid.shape();
    let parallel = rows >= PARALLEL_ROW_THRESHOLD;

    debug!(resolution = rows, parallel, "sampling Möbius surface");

    let sample_row = |i: usize| -> Vec<DVec3> {
        grid.u()
            .row(i)
            .iter()
            .zip(grid.v().row(i))
            .map(|(&u, &v)| mobius_point(radius, u, v))
            .collect()
    };
    let sampled: Vec<Vec<DVec3>> = if parallel {
        (0..rows).into_par_iter().map(sample_row).collect()
    } else {
        (0..rows).map(sample_row).collect()
    };

    let mut x = Vec::with_capacity(rows * cols);
    let mut y = Vec::with_capacity(rows * cols);
    let mut z = Vec::with_capacity(rows * cols);
    for p in sampled.iter().flatten() {
        x.push(p.x);
        y.push(p.y);
        z.push(p.z);
    }

    SurfacePoints {
        x: Grid2::from_row_major(rows, cols, x),
        y: Grid2::from_row_major(rows, cols, y),
        z: Grid2::from_row_major(rows, cols, z),
    }
}

/// A fully sampled strip: parameters, parameter grid, surface points and
/// metrics, all computed at construction and never mutated.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::{MobiusSurface, StripParams};
///
/// let strip = MobiusSurface::new(StripParams::new(1.5, 0.4, 100).unwrap());
/// assert_eq!(strip.metrics().summary(), "Properties: Edge=18.85, Area=7.54");
///
/// let (top, bottom) = strip.boundary_curves(100).unwrap();
/// assert_eq!(top.len(), 100);
/// assert_eq!(bottom.len(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct MobiusSurface {
    params: StripParams,
    grid: ParameterGrid,
    points: SurfacePoints,
    metrics: DerivedMetrics,
}

impl MobiusSurface {
    /// Samples the strip described by `params`.
    pub fn new(params: StripParams) -> Self {
        let grid = ParameterGrid::build(params.width(), params.resolution());
        let points = sample_surface(params.radius(), &grid);
        let metrics = DerivedMetrics::from_params(&params);
        Self {
            params,
            grid,
            points,
            metrics,
        }
    }

    /// Validates the inputs and samples the strip.
    pub fn try_new(radius: f64, width: f64, resolution: usize) -> MobiusResult<Self> {
        StripParams::new(radius, width, resolution).map(Self::new)
    }

    /// The configuration this strip was built from.
    #[inline]
    pub fn params(&self) -> &StripParams {
        &self.params
    }

    /// The `(u, v)` grid the points were sampled on.
    #[inline]
    pub fn grid(&self) -> &ParameterGrid {
        &self.grid
    }

    /// The sampled coordinates.
    #[inline]
    pub fn points(&self) -> &SurfacePoints {
        &self.points
    }

    /// Both derived estimates.
    #[inline]
    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }

    /// `4π·radius`
    #[inline]
    pub fn edge_length(&self) -> f64 {
        self.metrics.edge_length
    }

    /// `4π·radius·width`
    #[inline]
    pub fn surface_area(&self) -> f64 {
        self.metrics.surface_area
    }

    /// Traces both edges with `samples` points each, independently of the
    /// surface resolution.
    pub fn boundary_curves(&self, samples: usize) -> MobiusResult<(BoundaryCurve, BoundaryCurve)> {
        boundary_curves(self.params.radius(), self.params.width(), samples)
    }

    /// Traces both edges with the default sample count.
    pub fn default_boundary_curves(&self) -> MobiusResult<(BoundaryCurve, BoundaryCurve)> {
        self.boundary_curves(DEFAULT_BOUNDARY_SAMPLES)
    }

    /// Triangulates the sampled grid.
    pub fn to_mesh(&self) -> Mesh {
        tessellate(&self.points)
    }
}

impl Default for MobiusSurface {
    fn default() -> Self {
        Self::new(StripParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::{angular_samples, lateral_samples};
    use approx::assert_abs_diff_eq;
    use config::constants::CLOSURE_TOLERANCE;
    use std::f64::consts::PI;

    #[test]
    fn test_generate_shape() {
        for n in [2, 3, 10, 64] {
            let (points, _) = generate(1.0, 0.3, n).unwrap();
            assert_eq!(points.shape(), (n, n));
            assert_eq!(points.y().shape(), (n, n));
            assert_eq!(points.z().shape(), (n, n));
        }
    }

    #[test]
    fn test_generate_matches_parameter_grid() {
        let strip = MobiusSurface::try_new(1.2, 0.5, 9).unwrap();
        let grid = strip.grid();
        for i in 0..9 {
            for j in 0..9 {
                let expected = mobius_point(1.2, grid.u().get(i, j), grid.v().get(i, j));
                assert_eq!(strip.points().point(i, j), expected);
            }
        }
    }

    #[test]
    fn test_deserialized_params_stay_validated() {
        let parsed = serde_json::from_str::<StripParams>(
            r#"{"radius":-1.0,"width":0.3,"resolution":1}"#,
        );
        assert!(parsed.is_err());

        let params: StripParams =
            serde_json::from_str(r#"{"radius":1.0,"width":0.3,"resolution":4}"#).unwrap();
        let strip = MobiusSurface::new(params);
        assert_eq!(strip.points().shape(), (4, 4));
        assert_eq!(strip.edge_length(), 4.0 * PI);
    }

    #[test]
    fn test_points_sampled_from_stored_grid_parallel() {
        let n = PARALLEL_ROW_THRESHOLD;
        let strip = MobiusSurface::try_new(1.0, 0.3, n).unwrap();
        let grid = strip.grid();
        for &(i, j) in &[(0, 0), (1, n - 1), (n / 2, 3), (n - 1, n - 1)] {
            let expected = mobius_point(1.0, grid.u().get(i, j), grid.v().get(i, j));
            assert_eq!(strip.points().point(i, j), expected);
        }
    }

    #[test]
    fn test_generate_origin_sample() {
        // Odd resolution puts v = 0 on the middle row
        let (points, _) = generate(1.0, 0.3, 51).unwrap();
        let p = points.point(25, 0);
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_generate_first_column_spans_width() {
        let (points, _) = generate(1.0, 0.3, 50).unwrap();
        // u = 0: x = R + v, y = z = 0
        assert_abs_diff_eq!(points.point(0, 0).x, 0.85, epsilon = 1e-12);
        assert_abs_diff_eq!(points.point(49, 0).x, 1.15, epsilon = 1e-12);
    }

    #[test]
    fn test_seam_closes() {
        let (points, _) = generate(1.5, 0.4, 100).unwrap();
        assert!(points.seam_gap() < CLOSURE_TOLERANCE);
    }

    #[test]
    fn test_resolution_two_is_finite() {
        let (points, metrics) = generate(1.0, 0.3, 2).unwrap();
        assert_eq!(points.shape(), (2, 2));
        assert!(points.is_finite());
        assert!(metrics.edge_length.is_finite());
    }

    #[test]
    fn test_metrics_independent_of_resolution() {
        let (_, coarse) = generate(1.5, 0.4, 2).unwrap();
        let (_, fine) = generate(1.5, 0.4, 300).unwrap();
        assert_eq!(coarse, fine);
        assert_eq!(fine.edge_length, 4.0 * PI * 1.5);
        assert_eq!(fine.surface_area, 4.0 * PI * 1.5 * 0.4);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let n = PARALLEL_ROW_THRESHOLD;
        let (points, _) = generate(1.0, 0.3, n).unwrap();
        let us = angular_samples(n);
        let vs = lateral_samples(0.3, n);
        for &(i, j) in &[(0, 0), (n / 2, 7), (n - 1, n - 1)] {
            assert_eq!(points.point(i, j), mobius_point(1.0, us[j], vs[i]));
        }
    }

    #[test]
    fn test_bounding_box() {
        let (points, _) = generate(1.0, 0.3, 60).unwrap();
        let (min, max) = points.bounding_box();
        assert!(max.x <= 1.15 + 1e-12);
        assert!(min.x >= -1.15 - 1e-12);
        assert!(max.z <= 0.15 + 1e-12);
        assert!(min.z >= -0.15 - 1e-12);
    }

    #[test]
    fn test_generate_rejects_invalid() {
        assert!(generate(0.0, 0.3, 50).is_err());
        assert!(generate(1.0, 0.0, 50).is_err());
        assert!(generate(1.0, 0.3, 1).is_err());
        assert!(generate(f64::NAN, 0.3, 50).is_err());
    }

    #[test]
    fn test_default_surface() {
        let strip = MobiusSurface::default();
        assert_eq!(strip.params().resolution(), 50);
        assert_eq!(strip.points().shape(), (50, 50));
        assert_eq!(strip.edge_length(), 4.0 * PI);
    }
}
