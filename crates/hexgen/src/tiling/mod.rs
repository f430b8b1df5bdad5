//! Hexagonal tiling of a rectangular area and station population.
//!
//! Model
//! - Gateways sit on two interleaved rectangular lattices anchored at
//!   `(r√3, 2r)` and `(0, 5r)`, with row step `6r` and column step `2r√3`.
//!   Together they form the offset (brick) pattern of a hexagonal tiling.
//! - Each gateway gets `w` stations. The sector quota spreads them evenly over
//!   the three rhombi, with the `w mod 3` leftovers going to sectors `0..`.
//!
//! Determinism
//! - `generate_with_rng` threads one injected RNG through all gateways.
//! - `generate` / `generate_par` seed one RNG per gateway from a replay token
//!   `(seed, gateway index)`, so both produce the same layout and any single
//!   gateway can be replayed with `regenerate_gateway`.
//!
//! Code cross-refs: `geom::sample`, `layout_file::write_layout`

mod generate;
mod lattice;
mod params;

pub use generate::{
    generate, generate_par, generate_with_rng, regenerate_gateway, Layout, ReplayToken,
};
pub use lattice::{gateway_centers, sector_quota};
pub use params::TilingParams;
