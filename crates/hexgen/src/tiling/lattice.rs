use nalgebra::Vector2;

use crate::geom::Sector;

const SQRT3: f64 = 1.732_050_807_568_877_2;

/// Gateway centers covering `[0, xaxis] × [0, yaxis]` for hexagon size `r`.
///
/// Order: lattice anchored at `(r√3, 2r)` first, then the one at `(0, 5r)`;
/// within a lattice rows (step `6r`) outer, columns (step `2r√3`) inner. Both
/// ends are inclusive. Coordinates are `anchor + k·step` so long rows do not
/// accumulate rounding. A non-positive or non-finite `r` yields no centers.
pub fn gateway_centers(r: f64, xaxis: f64, yaxis: f64) -> Vec<Vector2<f64>> {
    if !(r.is_finite() && r > 0.0) {
        return Vec::new();
    }
    let step_x = 2.0 * r * SQRT3;
    let step_y = 6.0 * r;
    let anchors = [Vector2::new(r * SQRT3, 2.0 * r), Vector2::new(0.0, 5.0 * r)];
    let mut out = Vec::new();
    for anchor in anchors {
        for y in axis_positions(anchor.y, step_y, yaxis) {
            out.extend(axis_positions(anchor.x, step_x, xaxis).map(|x| Vector2::new(x, y)));
        }
    }
    out
}

/// Upper bound on the lattice positions `start + k·step` (`k >= 0`) inside
/// `[start, end]`. One spare step covers a quotient that rounds just below a
/// whole number; `axis_positions` trims the overshoot. Saturates at `u64::MAX`.
fn axis_steps(start: f64, step: f64, end: f64) -> u64 {
    if !(end >= start && step > 0.0) {
        return 0;
    }
    // float-to-int casts saturate
    (((end - start) / step).floor() as u64).saturating_add(2)
}

/// Positions along one axis, ends inclusive.
fn axis_positions(start: f64, step: f64, end: f64) -> impl Iterator<Item = f64> {
    (0..axis_steps(start, step, end))
        .map(move |k| start + k as f64 * step)
        .take_while(move |&v| v <= end)
}

/// Sector assignment for `w` stations: `[0, 1, 2]` repeated `w / 3` times,
/// then one extra station in each of sectors `0..w % 3`.
pub fn sector_quota(w: usize) -> Vec<Sector> {
    let per_zone = w / 3;
    let remainder = w % 3;
    let mut quota = Vec::with_capacity(w);
    for _ in 0..per_zone {
        quota.extend_from_slice(&Sector::ALL);
    }
    quota.extend_from_slice(&Sector::ALL[..remainder]);
    quota
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_steps_bounds_without_overflow() {
        assert_eq!(axis_steps(0.0, 1.0, -1.0), 0);
        assert_eq!(axis_steps(0.0, 0.0, 10.0), 0);
        assert_eq!(axis_steps(0.0, 1.0, f64::NAN), 0);
        assert_eq!(axis_steps(20.0, 60.0, 20.0), 2);
        assert_eq!(axis_steps(0.0, 1.0, 1e300), u64::MAX);
        assert_eq!(axis_steps(0.0, 1.0, f64::MAX), u64::MAX);
    }

    #[test]
    fn axis_positions_are_end_inclusive() {
        let xs: Vec<f64> = axis_positions(20.0, 60.0, 20.0).collect();
        assert_eq!(xs, vec![20.0]);
        let xs: Vec<f64> = axis_positions(0.0, 0.5, 2.0).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(axis_positions(5.0, 1.0, 4.0).count(), 0);
    }

    #[test]
    fn huge_axis_extent_counts_past_u32() {
        // A row spanning far past u32::MAX steps must neither overflow nor be
        // materialised up front.
        let first: Vec<f64> = axis_positions(0.0, 1.0, 1e12).take(3).collect();
        assert_eq!(first, vec![0.0, 1.0, 2.0]);
        assert_eq!(axis_steps(0.0, 1.0, 1e12), 1_000_000_000_002);
        assert!(axis_steps(0.0, 1.0, 1e12) > u64::from(u32::MAX));
    }
}
