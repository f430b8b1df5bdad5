use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn basis_vectors_are_unit_and_120_degrees_apart() {
    for s in Sector::ALL {
        let a = basis_vector(s);
        let b = basis_vector(s.next());
        assert!((a.norm() - 1.0).abs() < 1e-12);
        // cos 120° = -1/2
        assert!((a.dot(&b) + 0.5).abs() < 1e-12);
    }
    let sum = Sector::ALL
        .iter()
        .fold(Vector2::zeros(), |acc, &s| acc + basis_vector(s));
    assert!(sum.norm() < 1e-12);
}

#[test]
fn sector_index_roundtrip_and_next() {
    for (i, s) in Sector::ALL.iter().enumerate() {
        assert_eq!(s.index(), i);
        assert_eq!(Sector::from_index(i), Some(*s));
    }
    assert_eq!(Sector::from_index(3), None);
    assert_eq!(Sector::Two.next(), Sector::Zero);
}

#[test]
fn limit_mode_codes() {
    for code in 0..3u8 {
        assert_eq!(LimitMode::from_code(code).unwrap().code(), code);
    }
    assert!(LimitMode::from_code(3).is_none());
    assert_eq!(LimitMode::default(), LimitMode::Unrestricted);
    assert_eq!(LimitMode::Negative.apply(2.5), -2.5);
    assert_eq!(LimitMode::Negative.apply(-2.5), -2.5);
    assert_eq!(LimitMode::NonNegative.apply(-2.5), 2.5);
    assert_eq!(LimitMode::Unrestricted.apply(-2.5), -2.5);
}

#[test]
fn sample_is_reproducible_for_fixed_seed() {
    let c = vector![10.0, -4.0];
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    for s in Sector::ALL {
        let p = sample(&mut a, c, 50, s, LimitMode::Unrestricted);
        let q = sample(&mut b, c, 50, s, LimitMode::Unrestricted);
        assert_eq!(p, q);
    }
}

#[test]
fn sample_hits_lattice_points_of_the_sector() {
    // Solve back through the sector basis: coefficients must be integers in range.
    let mut rng = StdRng::seed_from_u64(11);
    let c = vector![3.0, 4.0];
    for s in Sector::ALL {
        let inv = sector_basis(s).try_inverse().unwrap();
        for _ in 0..200 {
            let p = sample(&mut rng, c, 9, s, LimitMode::Unrestricted);
            let xy = inv * (p - c);
            assert!((xy.x - xy.x.round()).abs() < 1e-9);
            assert!((xy.y - xy.y.round()).abs() < 1e-9);
            assert!(xy.x.round() >= 0.0 && xy.x.round() <= 8.0);
            assert!(xy.y.round() >= 1.0 && xy.y.round() <= 8.0);
        }
    }
}

#[test]
fn unrestricted_sector_one_lands_on_both_sides() {
    let mut rng = StdRng::seed_from_u64(3);
    let c = Vector2::zeros();
    let (mut neg, mut pos) = (false, false);
    for _ in 0..500 {
        let p = sample(&mut rng, c, 20, Sector::One, LimitMode::Unrestricted);
        neg |= p.x < 0.0;
        pos |= p.x > 0.0;
    }
    assert!(neg && pos, "unrestricted sector 1 should land on both sides");
}

#[test]
fn trimmed_rhombus_is_closed_and_inside_hexagon() {
    let c = vector![100.0, 200.0];
    let cfg = GeomCfg::default();
    for s in Sector::ALL {
        let r = trimmed_rhombus(c, 10.0, s);
        assert_eq!(r[0], r[4]);
        for p in r {
            assert!(hexagon_contains(c, 10.0, p, cfg.eps_contain));
        }
    }
    // Sector 0 corner (size-1, size-1) lies along v0 + v1.
    let r0 = trimmed_rhombus(Vector2::zeros(), 10.0, Sector::Zero);
    let expected = (basis_vector(Sector::Zero) + basis_vector(Sector::One)) * 9.0;
    assert!((r0[2] - expected).norm() < 1e-12);
}

#[test]
fn hexagon_outline_vertices_are_on_the_boundary() {
    let c = vector![1.0, 2.0];
    let hex = hexagon_outline(c, 5.0);
    assert_eq!(hex[0], hex[6]);
    assert!((hex[0] - vector![1.0, -3.0]).norm() < 1e-12);
    for p in &hex[..6] {
        assert!(((p - c).norm() - 5.0).abs() < 1e-12);
        assert!(hexagon_contains(c, 5.0, *p, 1e-9));
        assert!(!hexagon_contains(c, 5.0, c + (p - c) * 1.01, 1e-9));
    }
}

#[test]
fn hexagon_contains_rejects_outside_points() {
    let c = Vector2::zeros();
    assert!(hexagon_contains(c, 1.0, c, 0.0));
    assert!(!hexagon_contains(c, 1.0, vector![0.0, 1.01], 1e-9));
    assert!(!hexagon_contains(c, 1.0, vector![0.9, 0.0], 1e-9));
    assert!(hexagon_contains(c, 1.0, vector![0.86, 0.0], 1e-9));
}

fn sector_strategy() -> impl Strategy<Value = Sector> {
    (0usize..3).prop_map(|i| Sector::from_index(i).unwrap())
}

proptest! {
    #[test]
    fn samples_stay_inside_the_hexagon(
        seed in any::<u64>(),
        size in 2u32..500,
        cx in -1e4f64..1e4,
        cy in -1e4f64..1e4,
        sector in sector_strategy(),
        code in 0u8..3,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let c = vector![cx, cy];
        let limit = LimitMode::from_code(code).unwrap();
        let p = sample(&mut rng, c, size, sector, limit);
        prop_assert!(hexagon_contains(c, f64::from(size), p, 1e-6));
    }

    #[test]
    fn sector_one_limits_select_a_half_plane(
        seed in any::<u64>(),
        size in 2u32..200,
        cx in -1e3f64..1e3,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let c = vector![cx, 0.0];
        for _ in 0..16 {
            let neg = sample(&mut rng, c, size, Sector::One, LimitMode::Negative);
            prop_assert!(neg.x - c.x <= 0.0);
            let pos = sample(&mut rng, c, size, Sector::One, LimitMode::NonNegative);
            prop_assert!(pos.x - c.x >= 0.0);
        }
    }
}

#[test]
fn sample_accepts_dyn_rng() {
    use rand::RngCore;
    let mut concrete = StdRng::seed_from_u64(21);
    let mut inner = StdRng::seed_from_u64(21);
    let dynamic: &mut dyn RngCore = &mut inner;
    let c = vector![0.0, 0.0];
    for s in Sector::ALL {
        let a = sample(&mut concrete, c, 30, s, LimitMode::Unrestricted);
        let b = sample(dynamic, c, 30, s, LimitMode::Unrestricted);
        assert_eq!(a, b);
    }
}
