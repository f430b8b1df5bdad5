use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::lattice::{gateway_centers, sector_quota};
use super::params::TilingParams;
use crate::error::LayoutError;
use crate::geom::{sample, LimitMode, Sector};

/// Gateways plus their stations, grouped by gateway in generation order.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub xaxis: f64,
    pub yaxis: f64,
    pub stations_per_gateway: usize,
    pub gateways: Vec<Vector2<f64>>,
    pub stations: Vec<Vector2<f64>>,
}

impl Layout {
    /// Stations belonging to gateway `index`.
    pub fn stations_of(&self, index: usize) -> Option<&[Vector2<f64>]> {
        if index >= self.gateways.len() {
            return None;
        }
        let w = self.stations_per_gateway;
        self.stations.get(index * w..(index + 1) * w)
    }

    /// Iterate `(gateway, stations)` pairs. Stops at the first gateway whose
    /// stations are missing from an inconsistent hand-built layout.
    pub fn cells(&self) -> impl Iterator<Item = (Vector2<f64>, &[Vector2<f64>])> + '_ {
        self.gateways
            .iter()
            .enumerate()
            .map_while(move |(i, g)| Some((*g, self.stations_of(i)?)))
    }
}

/// Replay token `(seed, gateway index)` that seeds one gateway's RNG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer; neighbouring indices get unrelated streams.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn populate<R: Rng + ?Sized>(
    rng: &mut R,
    center: Vector2<f64>,
    side: u32,
    quota: &[Sector],
    limit: LimitMode,
    out: &mut Vec<Vector2<f64>>,
) {
    out.extend(
        quota
            .iter()
            .map(|&sector| sample(rng, center, side, sector, limit)),
    );
}

type Prepared = (u32, Vec<Vector2<f64>>, Vec<Sector>);

fn prepare(params: &TilingParams) -> Result<Prepared, LayoutError> {
    let side = params.validate()?;
    let gateways = gateway_centers(params.radius, params.xaxis, params.yaxis);
    let quota = sector_quota(params.stations_per_gateway);
    Ok((side, gateways, quota))
}

fn assemble(
    params: &TilingParams,
    gateways: Vec<Vector2<f64>>,
    stations: Vec<Vector2<f64>>,
) -> Layout {
    debug_assert_eq!(stations.len(), gateways.len() * params.stations_per_gateway);
    Layout {
        xaxis: params.xaxis,
        yaxis: params.yaxis,
        stations_per_gateway: params.stations_per_gateway,
        gateways,
        stations,
    }
}

/// Generate a layout drawing every station from the injected `rng`, gateway by
/// gateway.
pub fn generate_with_rng<R: Rng + ?Sized>(
    params: &TilingParams,
    rng: &mut R,
) -> Result<Layout, LayoutError> {
    let (side, gateways, quota) = prepare(params)?;
    let mut stations = Vec::with_capacity(gateways.len() * quota.len());
    for &center in &gateways {
        populate(rng, center, side, &quota, params.limit, &mut stations);
    }
    Ok(assemble(params, gateways, stations))
}

/// Generate a layout with one replay-token RNG per gateway.
pub fn generate(params: &TilingParams, seed: u64) -> Result<Layout, LayoutError> {
    let (side, gateways, quota) = prepare(params)?;
    let mut stations = Vec::with_capacity(gateways.len() * quota.len());
    for (i, &center) in gateways.iter().enumerate() {
        let mut rng = ReplayToken {
            seed,
            index: i as u64,
        }
        .to_std_rng();
        populate(&mut rng, center, side, &quota, params.limit, &mut stations);
    }
    Ok(assemble(params, gateways, stations))
}

/// Same result as [`generate`], with gateways sampled in parallel.
pub fn generate_par(params: &TilingParams, seed: u64) -> Result<Layout, LayoutError> {
    let (side, gateways, quota) = prepare(params)?;
    let per_gateway: Vec<Vec<Vector2<f64>>> = gateways
        .par_iter()
        .enumerate()
        .map(|(i, &center)| {
            let mut rng = ReplayToken {
                seed,
                index: i as u64,
            }
            .to_std_rng();
            let mut local = Vec::with_capacity(quota.len());
            populate(&mut rng, center, side, &quota, params.limit, &mut local);
            local
        })
        .collect();
    Ok(assemble(params, gateways, per_gateway.concat()))
}

/// Replay the stations of gateway `index` from a [`generate`] run with `seed`.
pub fn regenerate_gateway(
    params: &TilingParams,
    seed: u64,
    index: usize,
) -> Result<Vec<Vector2<f64>>, LayoutError> {
    let (side, gateways, quota) = prepare(params)?;
    let center = *gateways.get(index).ok_or_else(|| {
        LayoutError::invalid(format!(
            "gateway index {index} out of range (layout has {})",
            gateways.len()
        ))
    })?;
    let mut rng = ReplayToken {
        seed,
        index: index as u64,
    }
    .to_std_rng();
    let mut out = Vec::with_capacity(quota.len());
    populate(&mut rng, center, side, &quota, params.limit, &mut out);
    Ok(out)
}
