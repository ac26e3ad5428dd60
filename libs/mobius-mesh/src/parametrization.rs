//! # Möbius Parametrization
//!
//! The map from `(u, v)` to a point on the strip:
//!
//! ```text
//! x = (R + v·cos(u/2))·cos(u)
//! y = (R + v·cos(u/2))·sin(u)
//! z = v·sin(u/2)
//! ```
//!
//! As `u` sweeps `0 → 2π` the half angle `u/2` sweeps only `0 → π`, so the
//! lateral direction ends up reversed. That half-twist is what makes the
//! surface one-sided.

use glam::DVec3;

/// Maps `(u, v)` onto a strip with centerline radius `radius`.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::parametrization::mobius_point;
/// use glam::DVec3;
///
/// assert_eq!(mobius_point(1.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0));
/// ```
#[inline]
pub fn mobius_point(radius: f64, u: f64, v: f64) -> DVec3 {
    let (sin_half, cos_half) = (u / 2.0).sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let ring = radius + v * cos_half;
    DVec3::new(ring * cos_u, ring * sin_u, v * sin_half)
}

/// Unit direction across the strip at angle `u` (the partial derivative
/// with respect to `v`).
///
/// Independent of `v` and of the radius. At `u = 2π` it is the negation of
/// its value at `u = 0`.
#[inline]
pub fn lateral_direction(u: f64) -> DVec3 {
    let (sin_half, cos_half) = (u / 2.0).sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    DVec3::new(cos_half * cos_u, cos_half * sin_u, sin_half)
}

/// Tangent along the strip at `(u, v)` (the partial derivative with
/// respect to `u`).
#[inline]
pub fn angular_tangent(radius: f64, u: f64, v: f64) -> DVec3 {
    let (sin_half, cos_half) = (u / 2.0).sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let ring = radius + v * cos_half;
    let d_ring = -0.5 * v * sin_half;
    DVec3::new(
        d_ring * cos_u - ring * sin_u,
        d_ring * sin_u + ring * cos_u,
        0.5 * v * cos_half,
    )
}

/// Unit surface normal at `(u, v)`.
///
/// Returns `DVec3::ZERO` where the tangents are parallel, which cannot
/// happen while `|v| < radius`.
pub fn surface_normal(radius: f64, u: f64, v: f64) -> DVec3 {
    angular_tangent(radius, u, v)
        .cross(lateral_direction(u))
        .normalize_or_zero()
}
