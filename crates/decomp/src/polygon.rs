//! The preprocessed, rotated vertex sequence the engine's DP runs over.
//!
//! Purpose
//! - `Vertex`: `{ id, x, y, refl }` as defined in spec.md §3. `id` is fixed
//!   once, before rotation, and never touched again; `refl` likewise.
//! - `build`: drives the `_Scale` -> `Simplify` -> reflex-labeling ->
//!   rotate-to-first-reflex pipeline of spec.md §2/§4.1/§4.3.
//!
//! References
//! - Code cross-refs: `geometry::{is_refl, signed_area, DecompCfg}`,
//!   `simplify::{simplify, InputVertex, SimplifiedVertex, SavedPoints}`.

use crate::geometry::{is_refl, signed_area, DecompCfg, Point};
use crate::simplify::{simplify, InputVertex, SavedPoints, SimplifiedVertex};

/// A vertex of the preprocessed, possibly-rotated working polygon.
///
/// `id` is this vertex's position in the simplified sequence *before*
/// rotation (used to remap results back through `simplify`/`simple_restore`).
/// `refl` is set once, right after the reflex labeling pass, and never
/// mutated again.
#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub refl: bool,
}

/// Result of preprocessing: the rotated vertex sequence plus what's needed
/// to map ids back to the caller's original ids.
pub struct Preprocessed {
    pub verts: Vec<Vertex>,
    pub simplified: Vec<SimplifiedVertex>,
    pub saved: SavedPoints,
    pub any_reflex: bool,
}

/// Run the `_Scale` -> `Simplify` -> reflex-label -> rotate pipeline of
/// spec.md §2.
pub fn build(input: &[InputVertex], cfg: &DecompCfg) -> Preprocessed {
    let scaled = scale_guard(input, cfg);
    let (simplified, saved) = simplify(&scaled, cfg);

    let n = simplified.len();
    let mut verts: Vec<Vertex> = simplified
        .iter()
        .map(|v| Vertex {
            id: v.new_id,
            x: v.x,
            y: v.y,
            refl: false,
        })
        .collect();

    for i in 0..n {
        let next = (i + 1) % n;
        let prev = (i + n - 1) % n;
        verts[i].refl = is_refl(
            Point::new(verts[next].x, verts[next].y),
            Point::new(verts[i].x, verts[i].y),
            Point::new(verts[prev].x, verts[prev].y),
            cfg,
        );
    }

    let first_reflex = verts.iter().position(|v| v.refl);
    let any_reflex = first_reflex.is_some();
    if let Some(k) = first_reflex {
        verts.rotate_left(k);
    }

    Preprocessed {
        verts,
        simplified,
        saved,
        any_reflex,
    }
}

/// Scale guard of spec.md §4.1: if `|area| < cfg.scale_area_floor`, scale
/// all coordinates by `cfg.scale_area_floor / |area|`.
fn scale_guard(input: &[InputVertex], cfg: &DecompCfg) -> Vec<InputVertex> {
    let points: Vec<Point> = input.iter().map(|v| Point::new(v.x, v.y)).collect();
    let area = signed_area(&points).abs();
    if area >= cfg.scale_area_floor || area == 0.0 {
        return input.to_vec();
    }
    let f = cfg.scale_area_floor / area;
    input
        .iter()
        .map(|v| InputVertex {
            id: v.id,
            x: v.x * f,
            y: v.y * f,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(id: usize, x: f64, y: f64) -> InputVertex {
        InputVertex { id, x, y }
    }

    #[test]
    fn square_has_no_reflex_vertex_and_is_not_rotated() {
        let cfg = DecompCfg::default();
        let square = [iv(0, 0.0, 0.0), iv(1, 1.0, 0.0), iv(2, 1.0, 1.0), iv(3, 0.0, 1.0)];
        let pre = build(&square, &cfg);
        assert!(!pre.any_reflex);
        assert!(pre.verts.iter().all(|v| !v.refl));
        let ids: Vec<usize> = pre.verts.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn l_shape_rotates_reflex_vertex_to_front() {
        let cfg = DecompCfg::default();
        let l = [
            iv(0, 0.0, 0.0),
            iv(1, 2.0, 0.0),
            iv(2, 2.0, 1.0),
            iv(3, 1.0, 1.0),
            iv(4, 1.0, 2.0),
            iv(5, 0.0, 2.0),
        ];
        let pre = build(&l, &cfg);
        assert!(pre.any_reflex);
        assert!(pre.verts[0].refl);
        assert_eq!(pre.verts[0].id, 3);
    }

    #[test]
    fn thin_triangle_triggers_scale_guard_without_crashing() {
        let cfg = DecompCfg::default();
        let tri = [iv(0, 0.0, 0.0), iv(1, 1000.0, 0.0), iv(2, 500.0, 1e-4)];
        let pre = build(&tri, &cfg);
        assert_eq!(pre.verts.len(), 3);
        assert!(!pre.any_reflex);
    }
}
