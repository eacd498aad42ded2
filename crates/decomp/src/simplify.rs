//! Polygon simplification (the `Simplify`/`SimpleRestore` external
//! collaborator of spec.md §6, made concrete).
//!
//! Purpose
//! - Drop near-duplicate and collinear vertices before the engine runs its
//!   reflex/visibility analysis, and remember enough to splice them back
//!   into whichever convex piece ends up owning that boundary segment.
//!
//! Why this design
//! - `simplify` renumbers the surviving vertices contiguously (0..m), the
//!   space the whole engine operates in (`polygon::Vertex::id`).
//! - `SavedPoints` is keyed by the *simplified* edge `(a, b)` it was
//!   dropped from; diagonals introduced later by the DP never match a key
//!   here, so `simple_restore` only ever reinserts points on genuine
//!   boundary segments.
//!
//! References
//! - Code cross-refs: `geometry::{is_near, cross, DecompCfg}`, `engine::Engine`.

use std::collections::HashMap;

use crate::geometry::{cross, is_near, DecompCfg, Point};

/// A vertex of the caller-supplied polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputVertex {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

/// A vertex of the simplified polygon: a contiguous `new_id` plus a pointer
/// back to the original vertex it came from.
#[derive(Clone, Copy, Debug)]
pub struct SimplifiedVertex {
    pub new_id: usize,
    pub original_id: usize,
    pub x: f64,
    pub y: f64,
}

/// Dropped vertices, indexed by the simplified edge they sit on.
#[derive(Clone, Debug, Default)]
pub struct SavedPoints {
    by_edge: HashMap<(usize, usize), Vec<InputVertex>>,
}

impl SavedPoints {
    fn get(&self, a: usize, b: usize) -> Option<&[InputVertex]> {
        self.by_edge.get(&(a, b)).map(Vec::as_slice)
    }
}

/// Remove near-duplicate and collinear vertices from `input`, returning the
/// simplified ring (contiguous `new_id`s, CCW order preserved) and the
/// mapping needed to restore dropped points later.
///
/// Runs to a fixed point: a vertex freed up by a neighbor's removal is
/// re-examined on the next pass. Stops once 3 vertices remain (a triangle
/// has no collinear or duplicate vertex to drop).
pub fn simplify(input: &[InputVertex], cfg: &DecompCfg) -> (Vec<SimplifiedVertex>, SavedPoints) {
    let n = input.len();
    let mut kept: Vec<usize> = (0..n).collect();

    loop {
        let m = kept.len();
        if m <= 3 {
            break;
        }
        let mut next: Vec<usize> = Vec::with_capacity(m);
        let mut changed = false;
        for i in 0..m {
            let cur = kept[i];
            let prev = kept[(i + m - 1) % m];
            let nxt = kept[(i + 1) % m];
            let pc = Point::new(input[prev].x, input[prev].y);
            let cc = Point::new(input[cur].x, input[cur].y);
            let nc = Point::new(input[nxt].x, input[nxt].y);
            let drop = is_near(cc, pc, cfg) || cross(pc, cc, nc).abs() <= cfg.near_eps;
            if drop {
                changed = true;
            } else {
                next.push(cur);
            }
        }
        if !changed {
            break;
        }
        if next.len() < 3 {
            // A pathological chain of collinear points would otherwise
            // collapse the ring below a triangle; keep the last valid ring.
            break;
        }
        kept = next;
    }

    let m = kept.len();
    let mut new_id_of = vec![usize::MAX; n];
    for (new_id, &orig) in kept.iter().enumerate() {
        new_id_of[orig] = new_id;
    }

    let simplified: Vec<SimplifiedVertex> = kept
        .iter()
        .enumerate()
        .map(|(new_id, &orig)| SimplifiedVertex {
            new_id,
            original_id: input[orig].id,
            x: input[orig].x,
            y: input[orig].y,
        })
        .collect();

    let mut by_edge = HashMap::new();
    for i in 0..m {
        let a = kept[i];
        let b = kept[(i + 1) % m];
        let mut dropped = Vec::new();
        let mut j = (a + 1) % n;
        while j != b {
            dropped.push(input[j]);
            j = (j + 1) % n;
        }
        if !dropped.is_empty() {
            by_edge.insert((new_id_of[a], new_id_of[b]), dropped);
        }
    }

    (simplified, SavedPoints { by_edge })
}

/// Expand a piece (given as simplified `new_id`s in boundary order) back to
/// original ids, reinserting any vertex `simplify` dropped from one of its
/// boundary segments. Diagonal edges never carry saved points, so only
/// genuine polygon-boundary segments are affected.
pub fn simple_restore(
    piece: &[usize],
    simplified: &[SimplifiedVertex],
    saved: &SavedPoints,
) -> Vec<usize> {
    let mut out = Vec::with_capacity(piece.len());
    let m = piece.len();
    for i in 0..m {
        let a = piece[i];
        let b = piece[(i + 1) % m];
        out.push(simplified[a].original_id);
        if let Some(extra) = saved.get(a, b) {
            out.extend(extra.iter().map(|v| v.id));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(id: usize, x: f64, y: f64) -> InputVertex {
        InputVertex { id, x, y }
    }

    #[test]
    fn square_is_unchanged() {
        let cfg = DecompCfg::default();
        let square = [iv(0, 0.0, 0.0), iv(1, 1.0, 0.0), iv(2, 1.0, 1.0), iv(3, 0.0, 1.0)];
        let (simplified, saved) = simplify(&square, &cfg);
        assert_eq!(simplified.len(), 4);
        for (i, v) in simplified.iter().enumerate() {
            assert_eq!(v.new_id, i);
            assert_eq!(v.original_id, i);
        }
        let piece: Vec<usize> = (0..4).collect();
        let restored = simple_restore(&piece, &simplified, &saved);
        assert_eq!(restored, vec![0, 1, 2, 3]);
    }

    #[test]
    fn collinear_midpoint_is_dropped_and_restored() {
        let cfg = DecompCfg::default();
        // Square with an extra collinear point on the bottom edge.
        let poly = [
            iv(0, 0.0, 0.0),
            iv(1, 0.5, 0.0), // collinear, will be dropped
            iv(2, 1.0, 0.0),
            iv(3, 1.0, 1.0),
            iv(4, 0.0, 1.0),
        ];
        let (simplified, saved) = simplify(&poly, &cfg);
        assert_eq!(simplified.len(), 4);
        let original_ids: Vec<usize> = simplified.iter().map(|v| v.original_id).collect();
        assert_eq!(original_ids, vec![0, 2, 3, 4]);

        let piece: Vec<usize> = (0..4).collect();
        let restored = simple_restore(&piece, &simplified, &saved);
        assert_eq!(restored, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn duplicate_vertex_is_dropped() {
        let cfg = DecompCfg::default();
        let poly = [
            iv(0, 0.0, 0.0),
            iv(1, 1e-12, 1e-12), // near-duplicate of vertex 0
            iv(2, 1.0, 0.0),
            iv(3, 1.0, 1.0),
            iv(4, 0.0, 1.0),
        ];
        let (simplified, _saved) = simplify(&poly, &cfg);
        assert_eq!(simplified.len(), 4);
    }
}
