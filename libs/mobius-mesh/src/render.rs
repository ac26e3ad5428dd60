//! # Renderer Interface
//!
//! Geometry never depends on a graphics backend. A renderer receives a
//! [`Scene`] holding the sampled surface, both boundary curves and display
//! hints, and produces whatever artifact it renders to.
//!
//! ```text
//! MobiusSurface ─┐
//!                ├─→ Scene ─→ Renderer::render ─→ Output
//! BoundaryCurve ─┘
//! ```

use config::constants::{
    DEFAULT_AZIMUTH_DEG, DEFAULT_BOUNDARY_COLOR, DEFAULT_BOUNDARY_LINE_WIDTH,
    DEFAULT_BOX_ASPECT, DEFAULT_ELEVATION_DEG, DEFAULT_SURFACE_ALPHA, DEFAULT_SURFACE_COLOR,
    DEFAULT_SURFACE_EDGE_COLOR,
};
use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryCurve;
use crate::error::MobiusResult;
use crate::surface::{MobiusSurface, SurfacePoints};

/// Camera and styling hints for a renderer. Geometry code never reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Camera elevation in degrees.
    pub elevation_deg: f64,
    /// Camera azimuth in degrees.
    pub azimuth_deg: f64,
    /// Plot box aspect ratio (x, y, z).
    pub box_aspect: [f64; 3],
    /// Surface fill color.
    pub surface_color: String,
    /// Surface wireframe color.
    pub surface_edge_color: String,
    /// Surface opacity.
    pub surface_alpha: f64,
    /// Boundary curve color.
    pub boundary_color: String,
    /// Boundary curve line width.
    pub boundary_line_width: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            elevation_deg: DEFAULT_ELEVATION_DEG,
            azimuth_deg: DEFAULT_AZIMUTH_DEG,
            box_aspect: DEFAULT_BOX_ASPECT,
            surface_color: DEFAULT_SURFACE_COLOR.to_string(),
            surface_edge_color: DEFAULT_SURFACE_EDGE_COLOR.to_string(),
            surface_alpha: DEFAULT_SURFACE_ALPHA,
            boundary_color: DEFAULT_BOUNDARY_COLOR.to_string(),
            boundary_line_width: DEFAULT_BOUNDARY_LINE_WIDTH,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    /// Sampled surface coordinates.
    pub surface: &'a SurfacePoints,
    /// `(top, bottom)` boundary curves.
    pub boundaries: (&'a BoundaryCurve, &'a BoundaryCurve),
    /// Camera and styling hints.
    pub display: &'a DisplayConfig,
    /// Plot title.
    pub title: String,
}

impl<'a> Scene<'a> {
    /// Assembles a scene for `strip` with the standard title.
    pub fn new(
        strip: &'a MobiusSurface,
        boundaries: (&'a BoundaryCurve, &'a BoundaryCurve),
        display: &'a DisplayConfig,
    ) -> Self {
        let params = strip.params();
        Self {
            surface: strip.points(),
            boundaries,
            display,
            title: Self::title_for(params.radius(), params.width()),
        }
    }

    /// Plot title for a strip of the given dimensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mobius_mesh::render::Scene;
    ///
    /// assert_eq!(Scene::title_for(1.5, 0.4), "Möbius Strip (R=1.5, w=0.4)");
    /// assert_eq!(Scene::title_for(1.0, 0.3), "Möbius Strip (R=1.0, w=0.3)");
    /// ```
    pub fn title_for(radius: f64, width: f64) -> String {
        format!("Möbius Strip (R={radius:?}, w={width:?})")
    }
}

/// A consumer of strip geometry.
///
/// Implementations may draw, export or record the scene; they must not feed
/// anything back into geometry.
pub trait Renderer {
    /// What a successful render produces.
    type Output;

    /// Renders one scene.
    fn render(&mut self, scene: &Scene<'_>) -> MobiusResult<Self::Output>;
}
