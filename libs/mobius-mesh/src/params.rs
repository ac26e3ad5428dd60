//! # Strip Parameters
//!
//! Validated radius, width and resolution for a strip.

use config::constants::{DEFAULT_RADIUS, DEFAULT_RESOLUTION, DEFAULT_WIDTH, MIN_RESOLUTION};
use serde::{Deserialize, Serialize};

use crate::error::{check_dimensions, MobiusError, MobiusResult};

/// Immutable strip configuration.
///
/// Fully determines the parameter grid, the surface points and the derived
/// metrics of a strip.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::StripParams;
///
/// let params = StripParams::new(1.5, 0.4, 100).unwrap();
/// assert_eq!(params.resolution(), 100);
///
/// assert!(StripParams::new(0.0, 0.4, 100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStripParams")]
pub struct StripParams {
    radius: f64,
    width: f64,
    resolution: usize,
}

impl StripParams {
    /// Creates a configuration, rejecting non-positive or non-finite
    /// dimensions and resolutions below two.
    pub fn new(radius: f64, width: f64, resolution: usize) -> MobiusResult<Self> {
        check_dimensions(radius, width)?;
        check_resolution(resolution)?;
        Ok(Self {
            radius,
            width,
            resolution,
        })
    }

    /// Centerline radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Strip width across the centerline.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Samples along each grid axis.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Half the width: the lateral offset of each boundary edge.
    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }
}

impl Default for StripParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            width: DEFAULT_WIDTH,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Unchecked wire form. Deserialized values pass through
/// [`StripParams::new`] before use.
#[derive(Deserialize)]
struct RawStripParams {
    radius: f64,
    width: f64,
    resolution: usize,
}

impl TryFrom<RawStripParams> for StripParams {
    type Error = MobiusError;

    fn try_from(raw: RawStripParams) -> MobiusResult<Self> {
        Self::new(raw.radius, raw.width, raw.resolution)
    }
}

pub(crate) fn check_resolution(resolution: usize) -> MobiusResult<()> {
    if resolution < MIN_RESOLUTION {
        return Err(MobiusError::InvalidResolution(resolution));
    }
    Ok(())
}
