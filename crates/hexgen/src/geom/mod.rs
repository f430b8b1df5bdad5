//! Hexagon geometry: the three-rhombus decomposition and its sampler.
//!
//! Model
//! - A pointy-top hexagon of circumradius `size` is the union of three rhombi.
//!   Rhombus (sector) `t` is spanned by the unit basis vectors `v_t` and
//!   `v_(t+1) mod 3`, which sit at 120° to each other.
//! - Sampling a sector maps an integer lattice pair through the sector basis,
//!   so draws are uniform over the lattice points of the rhombus.
//!
//! Code cross-refs: `sample`, `sector_basis`, `trimmed_rhombus`, `hexagon_contains`

mod outline;
mod sampler;
mod types;

pub use outline::{hexagon_contains, hexagon_outline, trimmed_rhombus};
pub use sampler::{basis_vector, sample, sector_basis};
pub use types::{GeomCfg, LimitMode, Sector};

#[cfg(test)]
mod tests;
