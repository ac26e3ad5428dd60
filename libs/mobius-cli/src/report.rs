//! Strip report and optional OBJ export.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use config::constants::SamplingLimits;
use mobius_mesh::export::{ObjRenderer, ObjStats};
use mobius_mesh::render::{DisplayConfig, Renderer, Scene};
use mobius_mesh::{MobiusSurface, StripParams};
use serde::Serialize;
use tracing::info;

use crate::{Cli, OutputFormat};

#[derive(Debug, Serialize)]
struct StripReport {
    radius: f64,
    width: f64,
    resolution: usize,
    edge_length: f64,
    surface_area: f64,
    grid_shape: [usize; 2],
    bounds: BoundsInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    obj: Option<String>,
}

#[derive(Debug, Serialize)]
struct BoundsInfo {
    min: [f64; 3],
    max: [f64; 3],
}

impl StripReport {
    fn new(strip: &MobiusSurface) -> Self {
        let params = strip.params();
        let (rows, cols) = strip.points().shape();
        let (min, max) = strip.points().bounding_box();
        Self {
            radius: params.radius(),
            width: params.width(),
            resolution: params.resolution(),
            edge_length: strip.edge_length(),
            surface_area: strip.surface_area(),
            grid_shape: [rows, cols],
            bounds: BoundsInfo {
                min: min.to_array(),
                max: max.to_array(),
            },
            obj: None,
        }
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let limits = SamplingLimits::new(cli.resolution, cli.boundary_samples)
        .context("Invalid sample counts")?;
    let params = StripParams::new(cli.radius, cli.width, limits.resolution)
        .context("Invalid strip parameters")?;
    let strip = MobiusSurface::new(params);
    let mut report = StripReport::new(&strip);

    if let Some(path) = &cli.obj {
        let stats = write_obj(&strip, limits.boundary_samples, path)?;
        info!(path = %path.display(), vertices = stats.vertices, "scene exported");
        report.obj = Some(path.display().to_string());
    }

    if cli.quiet {
        return Ok(());
    }

    match cli.format {
        OutputFormat::Text => {
            println!("{}", strip.metrics().summary());
            if let Some(path) = &report.obj {
                println!("Scene written to {path}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn write_obj(strip: &MobiusSurface, boundary_samples: usize, path: &Path) -> Result<ObjStats> {
    let (top, bottom) = strip
        .boundary_curves(boundary_samples)
        .context("Invalid boundary sample count")?;
    let display = DisplayConfig::default();
    let scene = Scene::new(strip, (&top, &bottom), &display);

    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut renderer = ObjRenderer::new(BufWriter::new(file));
    renderer
        .render(&scene)
        .with_context(|| format!("Failed to write OBJ scene to {:?}", path))
}
