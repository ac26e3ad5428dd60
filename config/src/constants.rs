//! # Configuration Constants
//!
//! Centralized constants for the Möbius strip pipeline. Strip defaults,
//! sampling limits, precision values and renderer hints are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Strip Defaults**: Radius, width and sample counts
//! - **Limits**: Minimum sample counts and parallelism thresholds
//! - **Display**: Hints handed to renderer collaborators

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used when checking that sampled curves and grid seams close.
///
/// Trigonometric evaluation at `2π` does not land exactly on the values at
/// `0`, so closure checks use this looser bound.
///
/// # Example
///
/// ```rust
/// use config::constants::{CLOSURE_TOLERANCE, EPSILON};
///
/// assert!(CLOSURE_TOLERANCE > EPSILON);
/// ```
pub const CLOSURE_TOLERANCE: f64 = 1e-9;

// =============================================================================
// STRIP DEFAULTS
// =============================================================================

/// Default centerline radius of the strip.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default width of the strip, measured across the centerline.
pub const DEFAULT_WIDTH: f64 = 0.3;

/// Default number of samples along each axis of the parameter grid.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_RESOLUTION, MIN_RESOLUTION};
///
/// assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
/// ```
pub const DEFAULT_RESOLUTION: usize = 50;

/// Default number of angular samples on each boundary curve.
///
/// Independent of the surface resolution.
pub const DEFAULT_BOUNDARY_SAMPLES: usize = 100;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Smallest grid resolution that still produces a non-degenerate grid.
pub const MIN_RESOLUTION: usize = 2;

/// Smallest boundary sample count that still traces a curve.
pub const MIN_BOUNDARY_SAMPLES: usize = 2;

/// Grid resolution at which surface rows are evaluated in parallel.
///
/// Below this the rayon task overhead outweighs the work per row.
///
/// # Example
///
/// ```rust
/// use config::constants::PARALLEL_ROW_THRESHOLD;
///
/// let resolution = 512;
/// assert!(resolution >= PARALLEL_ROW_THRESHOLD);
/// ```
pub const PARALLEL_ROW_THRESHOLD: usize = 256;

// =============================================================================
// DISPLAY CONSTANTS
// =============================================================================

/// Default camera elevation in degrees.
pub const DEFAULT_ELEVATION_DEG: f64 = 30.0;

/// Default camera azimuth in degrees.
pub const DEFAULT_AZIMUTH_DEG: f64 = -60.0;

/// Default box aspect ratio (x, y, z) for the plot volume.
pub const DEFAULT_BOX_ASPECT: [f64; 3] = [1.0, 1.0, 0.5];

/// Default surface fill color name.
pub const DEFAULT_SURFACE_COLOR: &str = "lightblue";

/// Default color of the surface wireframe.
pub const DEFAULT_SURFACE_EDGE_COLOR: &str = "navy";

/// Default surface opacity in range [0.0, 1.0].
pub const DEFAULT_SURFACE_ALPHA: f64 = 0.8;

/// Default color for boundary curves.
pub const DEFAULT_BOUNDARY_COLOR: &str = "red";

/// Default line width for boundary curves.
pub const DEFAULT_BOUNDARY_LINE_WIDTH: f64 = 2.0;

// =============================================================================
// SAMPLING CONFIGURATION
// =============================================================================

/// Validated pair of sample counts used by the surface and boundary
/// generators.
///
/// # Examples
/// ```
/// use config::constants::SamplingLimits;
/// let limits = SamplingLimits::default();
/// assert_eq!(limits.resolution, 50);
/// assert_eq!(limits.boundary_samples, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingLimits {
    /// Samples along each axis of the surface grid.
    pub resolution: usize,
    /// Samples along each boundary curve.
    pub boundary_samples: usize,
}

impl SamplingLimits {
    /// Builds sampling limits, rejecting counts too small to sample a curve.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, SamplingLimits};
    /// let limits = SamplingLimits::new(100, 200).expect("valid limits");
    /// assert_eq!(limits.resolution, 100);
    /// assert_eq!(
    ///     SamplingLimits::new(1, 200).unwrap_err(),
    ///     ConfigError::InvalidResolution(1)
    /// );
    /// ```
    pub fn new(resolution: usize, boundary_samples: usize) -> Result<Self, ConfigError> {
        if resolution < MIN_RESOLUTION {
            return Err(ConfigError::InvalidResolution(resolution));
        }
        if boundary_samples < MIN_BOUNDARY_SAMPLES {
            return Err(ConfigError::InvalidBoundarySamples(boundary_samples));
        }
        Ok(Self {
            resolution,
            boundary_samples,
        })
    }
}

impl Default for SamplingLimits {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            boundary_samples: DEFAULT_BOUNDARY_SAMPLES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the grid resolution is below [`MIN_RESOLUTION`].
    InvalidResolution(usize),
    /// Raised when the boundary sample count is below [`MIN_BOUNDARY_SAMPLES`].
    InvalidBoundarySamples(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidResolution(value) => {
                write!(f, "resolution must be >= {MIN_RESOLUTION}: {value}")
            }
            ConfigError::InvalidBoundarySamples(value) => {
                write!(
                    f,
                    "boundary_samples must be >= {MIN_BOUNDARY_SAMPLES}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
