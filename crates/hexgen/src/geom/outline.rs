use nalgebra::Vector2;

use super::sampler::sector_basis;
use super::types::Sector;

const SQRT3: f64 = 1.732_050_807_568_877_2;

/// Closed outline of the lattice region `sample` draws from in `sector`:
/// corners `(0,1), (0,size-1), (size-1,size-1), (size-1,1)` mapped through the
/// sector basis, first corner repeated at the end.
pub fn trimmed_rhombus(center: Vector2<f64>, size: f64, sector: Sector) -> [Vector2<f64>; 5] {
    let m = sector_basis(sector);
    let hi = size - 1.0;
    let corners = [(0.0, 1.0), (0.0, hi), (hi, hi), (hi, 1.0), (0.0, 1.0)];
    corners.map(|(x, y)| center + m * Vector2::new(x, y))
}

/// Closed pointy-top hexagon outline with circumradius `size`, starting at the
/// bottom vertex and running clockwise.
pub fn hexagon_outline(center: Vector2<f64>, size: f64) -> [Vector2<f64>; 7] {
    let mut out = [center; 7];
    for (k, p) in out.iter_mut().enumerate().take(6) {
        let th = (-90.0 - 60.0 * k as f64).to_radians();
        *p = center + Vector2::new(th.cos(), th.sin()) * size;
    }
    out[6] = out[0];
    out
}

/// Closed-hexagon membership with slack `eps`.
#[inline]
pub fn hexagon_contains(center: Vector2<f64>, size: f64, p: Vector2<f64>, eps: f64) -> bool {
    let d = p - center;
    let (ax, ay) = (d.x.abs(), d.y.abs());
    ax <= 0.5 * SQRT3 * size + eps && ay + ax / SQRT3 <= size + eps
}
