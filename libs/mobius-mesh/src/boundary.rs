//! # Boundary Extractor
//!
//! Traces the two strip edges at lateral offsets `+width/2` and `-width/2`.
//!
//! Each curve runs once around the strip. Because of the half-twist the end
//! of one curve lands on the start of the other, so the pair traces the
//! strip's single boundary loop.

use config::constants::MIN_BOUNDARY_SAMPLES;
use glam::DVec3;
use serde::Serialize;
use tracing::debug;

use crate::error::{check_dimensions, MobiusError, MobiusResult};
use crate::parametrization::mobius_point;
use crate::sampling::angular_samples;

/// An ordered sequence of points along one strip edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryCurve {
    offset: f64,
    points: Vec<DVec3>,
}

impl BoundaryCurve {
    /// Lateral offset `v` the curve was traced at.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Points in order of increasing angle.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for curves produced by [`boundary_curves`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at angle `0`.
    #[inline]
    pub fn start(&self) -> DVec3 {
        self.points[0]
    }

    /// Point at angle `2π`.
    #[inline]
    pub fn end(&self) -> DVec3 {
        self.points[self.points.len() - 1]
    }

    /// Sum of chord lengths between consecutive samples.
    ///
    /// A discrete diagnostic only; it tends to the true edge length as the
    /// sample count grows and is not used for the reported metrics.
    pub fn polyline_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    /// Returns true if this curve ends where `next` starts, within `tolerance`.
    pub fn connects_to(&self, next: &BoundaryCurve, tolerance: f64) -> bool {
        match (self.points.last(), next.points.first()) {
            (Some(end), Some(start)) => end.distance(*start) <= tolerance,
            _ => false,
        }
    }
}

/// Traces both strip edges with `samples` points each.
///
/// Returns `(top, bottom)`: `top` at `v = +width/2`, `bottom` at
/// `v = -width/2`.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::boundary_curves;
/// use config::constants::CLOSURE_TOLERANCE;
///
/// let (top, bottom) = boundary_curves(1.0, 0.3, 100).unwrap();
/// assert_eq!(top.len(), 100);
/// assert!(top.connects_to(&bottom, CLOSURE_TOLERANCE));
/// assert!(bottom.connects_to(&top, CLOSURE_TOLERANCE));
/// ```
pub fn boundary_curves(
    radius: f64,
    width: f64,
    samples: usize,
) -> MobiusResult<(BoundaryCurve, BoundaryCurve)> {
    check_dimensions(radius, width)?;
    if samples < MIN_BOUNDARY_SAMPLES {
        return Err(MobiusError::InvalidBoundarySamples(samples));
    }

    debug!(samples, "tracing boundary curves");

    let us = angular_samples(samples);
    let half = width / 2.0;
    Ok((trace(radius, half, &us), trace(radius, -half, &us)))
}

fn trace(radius: f64, offset: f64, us: &[f64]) -> BoundaryCurve {
    BoundaryCurve {
        offset,
        points: us.iter().map(|&u| mobius_point(radius, u, offset)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use config::constants::CLOSURE_TOLERANCE;
    use std::f64::consts::PI;

    #[test]
    fn test_curves_have_requested_length() {
        let (top, bottom) = boundary_curves(1.0, 0.3, 37).unwrap();
        assert_eq!(top.len(), 37);
        assert_eq!(bottom.len(), 37);
        assert!(!top.is_empty());
    }

    #[test]
    fn test_curve_offsets() {
        let (top, bottom) = boundary_curves(1.0, 0.3, 10).unwrap();
        assert_eq!(top.offset(), 0.15);
        assert_eq!(bottom.offset(), -0.15);
    }

    #[test]
    fn test_curve_endpoints() {
        let (top, bottom) = boundary_curves(1.0, 0.3, 100).unwrap();
        assert_abs_diff_eq!(top.start().x, 1.15, epsilon = 1e-12);
        assert_abs_diff_eq!(bottom.start().x, 0.85, epsilon = 1e-12);
        // cos(π) = -1 swaps the edges after a full turn
        assert_abs_diff_eq!(top.end().x, 0.85, epsilon = 1e-12);
        assert_abs_diff_eq!(bottom.end().x, 1.15, epsilon = 1e-12);
    }

    #[test]
    fn test_curves_join_into_one_loop() {
        let (top, bottom) = boundary_curves(1.5, 0.4, 100).unwrap();
        assert!(top.connects_to(&bottom, CLOSURE_TOLERANCE));
        assert!(bottom.connects_to(&top, CLOSURE_TOLERANCE));
        assert!(!top.connects_to(&top, CLOSURE_TOLERANCE));
    }

    #[test]
    fn test_curves_lie_on_surface_edges() {
        let (top, _) = boundary_curves(1.0, 0.3, 50).unwrap();
        let (points, _) = crate::surface::generate(1.0, 0.3, 50).unwrap();
        // Same angular samples, so the last grid row is the top edge
        for j in 0..50 {
            assert_eq!(top.points()[j], points.point(49, j));
        }
    }

    #[test]
    fn test_polyline_length_approaches_edge_estimate() {
        // Each edge sweeps roughly one circumference of radius R
        let (top, bottom) = boundary_curves(1.0, 0.05, 2000).unwrap();
        let loop_length = top.polyline_length() + bottom.polyline_length();
        assert!((loop_length - 4.0 * PI).abs() / (4.0 * PI) < 0.01);
    }

    #[test]
    fn test_two_samples() {
        let (top, bottom) = boundary_curves(1.0, 0.3, 2).unwrap();
        assert_eq!(top.len(), 2);
        assert!(top.points().iter().all(|p| p.is_finite()));
        assert!(bottom.points().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            boundary_curves(1.0, 0.3, 1),
            Err(MobiusError::InvalidBoundarySamples(1))
        ));
        assert!(matches!(
            boundary_curves(1.0, 0.3, 0),
            Err(MobiusError::InvalidBoundarySamples(0))
        ));
        assert!(matches!(
            boundary_curves(-1.0, 0.3, 100),
            Err(MobiusError::InvalidRadius(_))
        ));
        assert!(matches!(
            boundary_curves(1.0, 0.0, 100),
            Err(MobiusError::InvalidWidth(_))
        ));
    }
}
