//! Hexagonal wireless topology generator.
//!
//! Tiles a rectangular area with hexagonal cells, puts a gateway at every cell
//! center and scatters station points inside each cell by sampling one of the
//! three rhombi that make up the hexagon.
//!
//! Layout
//! - `geom`: per-hexagon sampler, sector basis, outlines and containment.
//! - `tiling`: gateway lattice, sector quotas and whole-layout generation.
//! - `layout_file`: the plain-text position file read by the ns-3 scenarios.

pub mod error;
pub mod geom;
pub mod layout_file;
pub mod tiling;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::LayoutError;
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::LayoutError;
    pub use crate::geom::{
        hexagon_contains, hexagon_outline, sample, sector_basis, trimmed_rhombus, GeomCfg,
        LimitMode, Sector,
    };
    pub use crate::layout_file::{read_layout, write_layout, Delimiter};
    pub use crate::tiling::{
        gateway_centers, generate, generate_par, generate_with_rng, regenerate_gateway,
        sector_quota, Layout, ReplayToken, TilingParams,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
