//! # Mobius Mesh
//!
//! Discretized Möbius strip geometry: a sampled surface grid, the two
//! boundary curves, and closed-form edge-length and surface-area estimates.
//!
//! ## Architecture
//!
//! ```text
//! StripParams → sampling (u, v grid) → parametrization → SurfacePoints
//!                                                      ↘ DerivedMetrics
//! (radius, width, samples) → boundary → (top, bottom) BoundaryCurve
//! SurfacePoints + curves → Scene → Renderer (e.g. ObjRenderer)
//! ```
//!
//! Everything is a pure function of its inputs. Rendering is a separate
//! collaborator reached only through the [`render::Renderer`] trait.
//!
//! ## Usage
//!
//! ```rust
//! use mobius_mesh::{boundary_curves, generate};
//!
//! let (points, metrics) = generate(1.5, 0.4, 100)?;
//! assert_eq!(points.shape(), (100, 100));
//! assert_eq!(metrics.summary(), "Properties: Edge=18.85, Area=7.54");
//!
//! let (top, bottom) = boundary_curves(1.5, 0.4, 100)?;
//! assert_eq!(top.len() + bottom.len(), 200);
//! # Ok::<(), mobius_mesh::MobiusError>(())
//! ```

pub mod boundary;
pub mod error;
pub mod export;
pub mod grid;
pub mod mesh;
pub mod metrics;
pub mod parametrization;
pub mod params;
pub mod render;
pub mod sampling;
pub mod surface;
pub mod tessellate;

pub use boundary::{boundary_curves, BoundaryCurve};
pub use error::{MobiusError, MobiusResult};
pub use grid::Grid2;
pub use mesh::Mesh;
pub use metrics::DerivedMetrics;
pub use params::StripParams;
pub use surface::{generate, MobiusSurface, SurfacePoints};
pub use tessellate::tessellate;
