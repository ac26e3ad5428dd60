//! # Config Crate
//!
//! Centralized configuration constants for the Möbius strip pipeline.
//! Default strip dimensions, sampling limits, tolerances and renderer hints
//! are defined here so the geometry and CLI crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RADIUS, DEFAULT_RESOLUTION, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Fall back to the default sampling when the caller gives none
//! let requested: Option<usize> = None;
//! assert_eq!(requested.unwrap_or(DEFAULT_RESOLUTION), 50);
//! assert_eq!(DEFAULT_RADIUS, 1.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain `std` only
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
