//! # Tessellation
//!
//! Turns a sampled grid into a triangle mesh: one vertex per sample, two
//! triangles per grid cell.
//!
//! The seam between the first and last column is left open. Those columns
//! coincide in space but with `v` reversed, so stitching them would need a
//! twisted quad strip rather than the regular cell pattern.

use crate::mesh::Mesh;
use crate::surface::SurfacePoints;

/// Triangulates `points` row-major.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::{generate, tessellate};
///
/// let (points, _) = generate(1.0, 0.3, 10).unwrap();
/// let mesh = tessellate(&points);
/// assert_eq!(mesh.vertex_count(), 100);
/// assert_eq!(mesh.triangle_count(), 9 * 9 * 2);
/// ```
pub fn tessellate(points: &SurfacePoints) -> Mesh {
    let (rows, cols) = points.shape();
    let cells = rows.saturating_sub(1) * cols.saturating_sub(1);
    let mut mesh = Mesh::with_capacity(rows * cols, cells * 2);

    for p in points.points() {
        mesh.add_vertex(p);
    }

    let index = |i: usize, j: usize| (i * cols + j) as u32;
    for i in 0..rows.saturating_sub(1) {
        for j in 0..cols.saturating_sub(1) {
            let a = index(i, j);
            let b = index(i, j + 1);
            let c = index(i + 1, j);
            let d = index(i + 1, j + 1);

            // Two triangles per quad
            mesh.add_triangle(a, b, d);
            mesh.add_triangle(a, d, c);
        }
    }

    mesh
}
