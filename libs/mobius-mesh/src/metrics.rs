//! # Derived Metrics
//!
//! Closed-form edge-length and surface-area estimates.
//!
//! These are fixed approximations, not arc-length or area integrals of the
//! parametrization. They depend on radius and width only.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{check_dimensions, MobiusResult};
use crate::params::StripParams;

/// Edge-length and surface-area estimates for a strip.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::DerivedMetrics;
///
/// let metrics = DerivedMetrics::from_dimensions(1.5, 0.4).unwrap();
/// assert_eq!(metrics.summary(), "Properties: Edge=18.85, Area=7.54");
///
/// assert!(DerivedMetrics::from_dimensions(-1.0, 0.4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// `4π·radius`
    pub edge_length: f64,
    /// `4π·radius·width`
    pub surface_area: f64,
}

impl DerivedMetrics {
    /// Computes both estimates, rejecting non-positive or non-finite
    /// dimensions.
    pub fn from_dimensions(radius: f64, width: f64) -> MobiusResult<Self> {
        check_dimensions(radius, width)?;
        Ok(Self::closed_form(radius, width))
    }

    pub(crate) fn from_params(params: &StripParams) -> Self {
        Self::closed_form(params.radius(), params.width())
    }

    fn closed_form(radius: f64, width: f64) -> Self {
        Self {
            edge_length: 4.0 * PI * radius,
            surface_area: 4.0 * PI * radius * width,
        }
    }

    /// One-line report with both values to two decimal places.
    pub fn summary(&self) -> String {
        format!("Properties: {self}")
    }
}

impl fmt::Display for DerivedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge={:.2}, Area={:.2}",
            self.edge_length, self.surface_area
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_formulas() {
        let metrics = DerivedMetrics::from_dimensions(2.0, 0.5).unwrap();
        assert_eq!(metrics.edge_length, 4.0 * PI * 2.0);
        assert_eq!(metrics.surface_area, 4.0 * PI * 2.0 * 0.5);
    }

    #[test]
    fn test_metrics_display() {
        let metrics = DerivedMetrics::from_dimensions(1.0, 0.3).unwrap();
        // 4π = 12.566..., 4π·0.3 = 3.7699...
        assert_eq!(metrics.to_string(), "Edge=12.57, Area=3.77");
    }

    #[test]
    fn test_metrics_reference_summary() {
        let metrics = DerivedMetrics::from_dimensions(1.5, 0.4).unwrap();
        assert_eq!(metrics.summary(), "Properties: Edge=18.85, Area=7.54");
    }

    #[test]
    fn test_metrics_reject_invalid_dimensions() {
        use crate::error::MobiusError;

        assert!(matches!(
            DerivedMetrics::from_dimensions(-1.0, 0.3),
            Err(MobiusError::InvalidRadius(_))
        ));
        assert!(matches!(
            DerivedMetrics::from_dimensions(1.0, f64::NAN),
            Err(MobiusError::InvalidWidth(_))
        ));
    }

    #[test]
    fn test_metrics_from_params_matches_dimensions() {
        let params = StripParams::new(1.5, 0.4, 10).unwrap();
        assert_eq!(
            DerivedMetrics::from_params(&params),
            DerivedMetrics::from_dimensions(1.5, 0.4).unwrap()
        );
    }
}
