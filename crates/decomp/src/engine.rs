//! Top-level engine: ties preprocessing, the DP, recovery, collection and
//! assembly together behind the `Engine` API of spec.md §6.
//!
//! Why this design
//! - Single-shot, owned object: one `Engine` borrows a polygon and
//!   produces a result in one `decompose()` call, with all intermediate
//!   state (catalog, subproblem store, diagonal list) local to that call
//!   and dropped when it returns (spec.md §5: no shared mutable state, no
//!   suspension points).
//! - The short-circuit for "no reflex vertex" happens twice: once right
//!   after preprocessing (cheap: `pre.any_reflex`), and again after seeding
//!   if the catalog/base-case seeding somehow produced no subproblems at
//!   all — this is the spec's "subs empty -> return the input as one
//!   piece" design note (§9), kept as a second guard rather than an
//!   assertion so a pathological near-degenerate input degrades gracefully
//!   instead of panicking.
//!
//! References
//! - Code cross-refs: `polygon::build`, `catalog::Catalog`,
//!   `subproblem::seed_base_cases`, `dp::run`, `recovery::recover`,
//!   `collect::collect`, `assemble::assemble`, `simplify::simple_restore`.

use crate::catalog::Catalog;
use crate::collect::{self, DiagList};
use crate::dp;
use crate::error::DecompError;
use crate::geometry::{signed_area, DecompCfg, Point};
use crate::polygon;
use crate::recovery;
use crate::simplify::{self, InputVertex};
use crate::subproblem;

/// Owns a caller-supplied polygon and produces its convex decomposition.
pub struct Engine {
    input: Vec<InputVertex>,
    cfg: DecompCfg,
}

impl Engine {
    /// Validate preconditions and construct an engine for `input`.
    ///
    /// Preconditions (spec.md §7): at least 3 vertices, ids `0..N-1` in
    /// input order, and counter-clockwise orientation (signed area > 0).
    pub fn new(input: Vec<InputVertex>, cfg: DecompCfg) -> Result<Self, DecompError> {
        validate_preconditions(&input)?;
        Ok(Self { input, cfg })
    }

    /// Construct an engine using [`DecompCfg::default`].
    pub fn with_default_cfg(input: Vec<InputVertex>) -> Result<Self, DecompError> {
        Self::new(input, DecompCfg::default())
    }

    /// `Decompose()` of spec.md §6: one id-list per convex piece, ids
    /// referring back to the original input polygon.
    pub fn decompose(&self) -> Result<Vec<Vec<usize>>, DecompError> {
        let pre = polygon::build(&self.input, &self.cfg);

        if !pre.any_reflex {
            log::debug!("no reflex vertex found; returning input as a single piece");
            return Ok(vec![self.input.iter().map(|v| v.id).collect()]);
        }

        let catalog = Catalog::build(&pre.verts);
        let mut subs = subproblem::seed_base_cases(&pre.verts);
        if subs.is_empty() {
            log::debug!("no candidate base-case subproblems seeded; returning input as a single piece");
            return Ok(vec![self.input.iter().map(|v| v.id).collect()]);
        }
        log::debug!(
            "seeded {} base-case subproblems, catalog has {} candidate chords",
            subs.len(),
            catalog.len()
        );

        dp::run(&pre.verts, &catalog, &mut subs, &self.cfg);

        let n = pre.verts.len();
        recovery::recover(&mut subs, &pre.verts, 0, n - 1)?;

        let mut diags: DiagList = Vec::new();
        collect::collect(&subs, &pre.verts, 0, n - 1, &mut diags)?;
        log::debug!("collected {} diagonal(s)", diags.len());

        let pieces_rotated = crate::assemble::assemble(n, diags);

        let pieces = pieces_rotated
            .into_iter()
            .map(|piece| {
                let simplified_piece: Vec<usize> = piece.iter().map(|&idx| pre.verts[idx].id).collect();
                simplify::simple_restore(&simplified_piece, &pre.simplified, &pre.saved)
            })
            .collect();

        Ok(pieces)
    }
}

fn validate_preconditions(input: &[InputVertex]) -> Result<(), DecompError> {
    if input.len() < 3 {
        return Err(DecompError::TooFewVertices { found: input.len() });
    }
    for (position, v) in input.iter().enumerate() {
        if v.id != position {
            return Err(DecompError::NonContiguousIds {
                position,
                expected: position,
                found: v.id,
            });
        }
    }
    let points: Vec<Point> = input.iter().map(|v| Point::new(v.x, v.y)).collect();
    let area = signed_area(&points);
    if area <= 0.0 {
        return Err(DecompError::NotCounterClockwise { area });
    }
    Ok(())
}
