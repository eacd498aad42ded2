//! Convex decomposition of simple polygons.
//!
//! A near-minimum-diagonal convex partition, computed by a dynamic program
//! over reflex-vertex visibility pairs (see `dp`) plus a reconstruction
//! pass that walks the chosen diagonals into convex pieces (`assemble`).
//!
//! Module map, leaves first: `geometry` -> `simplify`, `visibility` ->
//! `polygon` -> `catalog` -> `subproblem` -> `dp` -> `recovery` ->
//! `collect` -> `assemble` -> `engine`.

pub mod assemble;
pub mod catalog;
pub mod collect;
pub mod dp;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod polygon;
pub mod recovery;
pub mod simplify;
pub mod subproblem;
pub mod visibility;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use engine::Engine;
pub use error::DecompError;
pub use geometry::DecompCfg;
pub use simplify::InputVertex;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::Engine;
    pub use crate::error::DecompError;
    pub use crate::geometry::DecompCfg;
    pub use crate::simplify::InputVertex;
}
