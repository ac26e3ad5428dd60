//! # Mobius Errors
//!
//! Error types for strip generation.
//!
//! ## Error Policy
//!
//! - Invalid parameters fail immediately, naming the parameter
//! - No clamping and no partial results
//! - Geometry itself has no failure modes; only renderer I/O can fail

use config::constants::{MIN_BOUNDARY_SAMPLES, MIN_RESOLUTION};
use thiserror::Error;

/// Errors that can occur while generating or exporting a strip.
#[derive(Debug, Error)]
pub enum MobiusError {
    /// Radius is zero, negative or not finite
    #[error("Invalid radius: {0} (must be a positive finite number)")]
    InvalidRadius(f64),

    /// Width is zero, negative or not finite
    #[error("Invalid width: {0} (must be a positive finite number)")]
    InvalidWidth(f64),

    /// Grid resolution too small to span both parameter ranges
    #[error("Invalid resolution: {0} (must be at least {min})", min = MIN_RESOLUTION)]
    InvalidResolution(usize),

    /// Boundary sample count too small to trace a curve
    #[error(
        "Invalid boundary sample count: {0} (must be at least {min})",
        min = MIN_BOUNDARY_SAMPLES
    )]
    InvalidBoundarySamples(usize),

    /// Writing renderer output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for strip operations.
pub type MobiusResult<T> = Result<T, MobiusError>;

/// Checks the strip dimensions shared by the surface and boundary generators.
pub(crate) fn check_dimensions(radius: f64, width: f64) -> MobiusResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MobiusError::InvalidRadius(radius));
    }
    check_width(width)
}

pub(crate) fn check_width(width: f64) -> MobiusResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(MobiusError::InvalidWidth(width));
    }
    Ok(())
}
