//! # OBJ Scene Export
//!
//! A file-based [`Renderer`] that writes the scene as Wavefront OBJ text so
//! it can be opened in any external viewer.
//!
//! The surface becomes a triangle object with per-vertex normals; each
//! boundary curve becomes a polyline object. Display hints travel as header comments since OBJ has no
//! camera or material fields of its own.

use std::io::Write;

use tracing::{debug, info};

use crate::boundary::BoundaryCurve;
use crate::error::MobiusResult;
use crate::render::{Renderer, Scene};
use crate::tessellate::tessellate;

/// Counts of records written for one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjStats {
    /// `v` records
    pub vertices: usize,
    /// `vn` records
    pub normals: usize,
    /// `f` records
    pub faces: usize,
    /// `l` records
    pub lines: usize,
}

/// Writes scenes as Wavefront OBJ.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::export::ObjRenderer;
/// use mobius_mesh::render::{DisplayConfig, Renderer, Scene};
/// use mobius_mesh::MobiusSurface;
///
/// let strip = MobiusSurface::try_new(1.0, 0.3, 4).unwrap();
/// let (top, bottom) = strip.boundary_curves(8).unwrap();
/// let display = DisplayConfig::default();
/// let scene = Scene::new(&strip, (&top, &bottom), &display);
///
/// let mut renderer = ObjRenderer::new(Vec::new());
/// let stats = renderer.render(&scene).unwrap();
/// assert_eq!(stats.vertices, 16 + 8 + 8);
///
/// let text = String::from_utf8(renderer.into_inner()).unwrap();
/// assert!(text.contains("o boundary_top"));
/// ```
#[derive(Debug)]
pub struct ObjRenderer<W: Write> {
    writer: W,
}

impl<W: Write> ObjRenderer<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self, scene: &Scene<'_>) -> MobiusResult<()> {
        let d = scene.display;
        writeln!(self.writer, "# {}", scene.title)?;
        writeln!(
            self.writer,
            "# camera elevation={} azimuth={}",
            d.elevation_deg, d.azimuth_deg
        )?;
        writeln!(
            self.writer,
            "# box_aspect {} {} {}",
            d.box_aspect[0], d.box_aspect[1], d.box_aspect[2]
        )?;
        writeln!(
            self.writer,
            "# surface color={} edge={} alpha={}",
            d.surface_color, d.surface_edge_color, d.surface_alpha
        )?;
        writeln!(
            self.writer,
            "# boundary color={} width={}",
            d.boundary_color, d.boundary_line_width
        )?;
        Ok(())
    }

    /// Writes one boundary polyline. `base` is the count of vertices already
    /// written, since OBJ indices are global and 1-based.
    fn write_curve(&mut self, name: &str, curve: &BoundaryCurve, base: usize) -> MobiusResult<()> {
        writeln!(self.writer, "o {name}")?;
        for p in curve.points() {
            writeln!(self.writer, "v {} {} {}", p.x, p.y, p.z)?;
        }
        write!(self.writer, "l")?;
        for k in 1..=curve.len() {
            write!(self.writer, " {}", base + k)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> Renderer for ObjRenderer<W> {
    type Output = ObjStats;

    fn render(&mut self, scene: &Scene<'_>) -> MobiusResult<ObjStats> {
        let mut mesh = tessellate(scene.surface);
        mesh.compute_normals();
        let normals = mesh.normals().unwrap_or_default();
        let (top, bottom) = scene.boundaries;

        self.write_header(scene)?;

        writeln!(self.writer, "o surface")?;
        for v in mesh.vertices() {
            writeln!(self.writer, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for n in normals {
            writeln!(self.writer, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        // Surface vertex k carries normal k
        for &[a, b, c] in mesh.triangles() {
            let (a, b, c) = (a + 1, b + 1, c + 1);
            writeln!(self.writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
        }
        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "wrote surface object"
        );

        let mut written = mesh.vertex_count();
        self.write_curve("boundary_top", top, written)?;
        written += top.len();
        self.write_curve("boundary_bottom", bottom, written)?;
        written += bottom.len();

        self.writer.flush()?;

        let stats = ObjStats {
            vertices: written,
            normals: normals.len(),
            faces: mesh.triangle_count(),
            lines: 2,
        };
        info!(
            title = %scene.title,
            vertices = stats.vertices,
            faces = stats.faces,
            "wrote OBJ scene"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MobiusError;
    use crate::render::DisplayConfig;
    use crate::surface::MobiusSurface;
    use std::io;

    fn render_to_string(resolution: usize, samples: usize) -> (ObjStats, String) {
        let strip = MobiusSurface::try_new(1.5, 0.4, resolution).unwrap();
        let (top, bottom) = strip.boundary_curves(samples).unwrap();
        let display = DisplayConfig::default();
        let scene = Scene::new(&strip, (&top, &bottom), &display);

        let mut renderer = ObjRenderer::new(Vec::new());
        let stats = renderer.render(&scene).unwrap();
        (stats, String::from_utf8(renderer.into_inner()).unwrap())
    }

    #[test]
    fn test_obj_record_counts() {
        let (stats, text) = render_to_string(5, 10);
        let count = |prefix: &str| text.lines().filter(|l| l.starts_with(prefix)).count();

        assert_eq!(stats.vertices, 25 + 20);
        assert_eq!(stats.normals, 25);
        assert_eq!(stats.faces, 4 * 4 * 2);
        assert_eq!(count("v "), stats.vertices);
        assert_eq!(count("vn "), stats.normals);
        assert_eq!(count("f "), stats.faces);
        assert_eq!(count("l "), 2);
        assert_eq!(count("o "), 3);
    }

    #[test]
    fn test_obj_header_carries_display_hints() {
        let (_, text) = render_to_string(3, 4);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("# Möbius Strip (R=1.5, w=0.4)"));
        assert_eq!(lines.next(), Some("# camera elevation=30 azimuth=-60"));
        assert!(text.contains("# surface color=lightblue edge=navy alpha=0.8"));
    }

    #[test]
    fn test_obj_polyline_indices_follow_surface() {
        let (_, text) = render_to_string(3, 4);
        let polylines: Vec<&str> = text.lines().filter(|l| l.starts_with("l ")).collect();
        assert_eq!(polylines, vec!["l 10 11 12 13", "l 14 15 16 17"]);
    }

    #[test]
    fn test_obj_face_indices_are_one_based() {
        let (_, text) = render_to_string(2, 2);
        let first_face = text.lines().find(|l| l.starts_with("f ")).unwrap();
        assert_eq!(first_face, "f 1//1 2//2 4//4");
    }

    #[test]
    fn test_obj_surface_normals_are_unit_length() {
        let (_, text) = render_to_string(6, 4);
        let normals: Vec<Vec<f64>> = text
            .lines()
            .filter_map(|l| l.strip_prefix("vn "))
            .map(|rest| rest.split(' ').map(|c| c.parse().unwrap()).collect())
            .collect();
        assert_eq!(normals.len(), 36);
        for n in normals {
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((length - 1.0).abs() < 1e-9, "normal length {length}");
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_obj_io_error_propagates() {
        let strip = MobiusSurface::try_new(1.0, 0.3, 3).unwrap();
        let (top, bottom) = strip.boundary_curves(3).unwrap();
        let display = DisplayConfig::default();
        let scene = Scene::new(&strip, (&top, &bottom), &display);

        let result = ObjRenderer::new(FailingWriter).render(&scene);
        assert!(matches!(result, Err(MobiusError::Io(_))));
    }
}
