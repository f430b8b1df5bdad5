use nalgebra::{Matrix2, Vector2};
use rand::Rng;

use super::types::{LimitMode, Sector};

const HALF_SQRT3: f64 = 0.866_025_403_784_438_6;

/// Unit basis vectors at 120°: `v0=(0,-1)`, `v1=(-√3/2, 1/2)`, `v2=(√3/2, 1/2)`.
const BASIS: [[f64; 2]; 3] = [[0.0, -1.0], [-HALF_SQRT3, 0.5], [HALF_SQRT3, 0.5]];

#[inline]
pub fn basis_vector(sector: Sector) -> Vector2<f64> {
    let [x, y] = BASIS[sector.index()];
    Vector2::new(x, y)
}

/// Columns `v_t`, `v_(t+1) mod 3` of sector `t`.
#[inline]
pub fn sector_basis(sector: Sector) -> Matrix2<f64> {
    Matrix2::from_columns(&[basis_vector(sector), basis_vector(sector.next())])
}

/// Draw one station point inside `sector` of the hexagon at `center`.
///
/// Draws `x ∈ [0, size)` and `y ∈ [1, size)` as integers and maps `(x, y)`
/// through the sector basis. For sector 1 the x offset is folded onto the side
/// selected by `limit`; other sectors ignore it.
///
/// Pre: `size >= 2` (otherwise the `y` range is empty and the draw panics).
pub fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    center: Vector2<f64>,
    size: u32,
    sector: Sector,
    limit: LimitMode,
) -> Vector2<f64> {
    debug_assert!(size >= 2, "hexagon size must be >= 2, got {size}");
    let x = rng.gen_range(0..size);
    let y = rng.gen_range(1..size);
    let mut offset = sector_basis(sector) * Vector2::new(f64::from(x), f64::from(y));
    if sector == Sector::One {
        offset.x = limit.apply(offset.x);
    }
    center + offset
}
