use crate::error::LayoutError;
use crate::geom::LimitMode;

const SQRT3: f64 = 1.732_050_807_568_877_2;

/// Tiling parameters. Lengths are in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilingParams {
    /// Hexagon size (rhombus side length). Must be a whole number `>= 2`.
    pub radius: f64,
    pub xaxis: f64,
    pub yaxis: f64,
    pub stations_per_gateway: usize,
    /// Sector-1 restriction passed to every sampler call.
    pub limit: LimitMode,
}

impl Default for TilingParams {
    fn default() -> Self {
        Self {
            radius: 100.0,
            xaxis: 1000.0,
            yaxis: 1000.0,
            stations_per_gateway: 6,
            limit: LimitMode::Unrestricted,
        }
    }
}

impl TilingParams {
    /// Check the configuration and return the integer hexagon size used by the
    /// sampler's lattice draw.
    pub fn validate(&self) -> Result<u32, LayoutError> {
        let r = self.radius;
        if !r.is_finite() {
            return Err(LayoutError::invalid("radius must be finite"));
        }
        if r < 2.0 {
            return Err(LayoutError::invalid(format!(
                "radius must be >= 2 (got {r}); the station draw needs a non-empty [1, radius) range"
            )));
        }
        if r.fract() != 0.0 || r > f64::from(u32::MAX) {
            return Err(LayoutError::invalid(format!(
                "radius must be a whole number of meters (got {r})"
            )));
        }
        if !(self.xaxis.is_finite() && self.yaxis.is_finite()) {
            return Err(LayoutError::invalid("axis sizes must be finite"));
        }
        let (min_x, min_y) = min_area(r);
        if self.xaxis < min_x {
            return Err(LayoutError::invalid(format!(
                "xaxis {} is smaller than the first gateway column at r√3 = {min_x:.3}",
                self.xaxis
            )));
        }
        if self.yaxis < min_y {
            return Err(LayoutError::invalid(format!(
                "yaxis {} is smaller than the first gateway row at 2r = {min_y}",
                self.yaxis
            )));
        }
        Ok(r as u32)
    }
}

/// Smallest area that still holds the first lattice anchor `(r√3, 2r)`.
#[inline]
fn min_area(r: f64) -> (f64, f64) {
    (r * SQRT3, 2.0 * r)
}
