//! DP driver: `Forw`/`Backw` relaxations and the chain-length fill loop
//! (spec.md §4.4).
//!
//! Why this design
//! - The driver never looks at a subproblem that isn't in the catalog or
//!   hasn't been reached yet; `forw`/`backw` return early in that case,
//!   mirroring the source's "no-op if not applicable" control flow rather
//!   than asserting reachability (unreachable states are normal: most
//!   `(i, k)` pairs simply aren't candidate chords).
//! - The peeling loops borrow the child `SubP` mutably only for the
//!   duration of the peel; the parent interval is always distinct from the
//!   child interval, so this never double-borrows the same map entry.
//!
//! References
//! - Code cross-refs: `subproblem::{SubProblems, Pair}`, `catalog::Catalog`,
//!   `geometry::is_refl`, `polygon::Vertex`.

use crate::catalog::Catalog;
use crate::geometry::{is_refl, DecompCfg, Point};
use crate::polygon::Vertex;
use crate::subproblem::{Pair, SubProblems};

fn pos(verts: &[Vertex], i: usize) -> Point {
    Point::new(verts[i].x, verts[i].y)
}

/// Fill `subs` by increasing chain length, per spec.md §4.4.
pub fn run(verts: &[Vertex], catalog: &Catalog, subs: &mut SubProblems, cfg: &DecompCfg) {
    let n = verts.len();
    for l in 3..n {
        // Forward pass.
        for i in 0..n {
            let k = i + l;
            if k >= n {
                continue;
            }
            if !verts[i].refl || !catalog.contains(i, k) {
                continue;
            }
            if verts[k].refl {
                for j in (i + 1)..k {
                    forw(verts, catalog, subs, i, j, k, cfg);
                }
            } else {
                for j in (i + 1)..(k - 1) {
                    if verts[j].refl {
                        forw(verts, catalog, subs, i, j, k, cfg);
                    }
                }
                forw(verts, catalog, subs, i, k - 1, k, cfg);
            }
        }
        // Backward pass.
        for k in 0..n {
            if k < l {
                continue;
            }
            let i = k - l;
            if !verts[k].refl || !catalog.contains(i, k) {
                continue;
            }
            if verts[i].refl {
                continue;
            }
            backw(verts, catalog, subs, i, i + 1, k, cfg);
            for j in (i + 2)..k {
                if verts[j].refl {
                    backw(verts, catalog, subs, i, j, k, cfg);
                }
            }
        }
    }
}

/// `Forw(i, j, k)` of spec.md §4.4.
fn forw(
    verts: &[Vertex],
    catalog: &Catalog,
    subs: &mut SubProblems,
    i: usize,
    j: usize,
    k: usize,
    cfg: &DecompCfg,
) {
    if !catalog.contains(i, j) {
        return;
    }
    let mut w = match subs.weight(i, j) {
        Some(w) if w < i64::MAX => w,
        _ => return,
    };
    let mut a = j;

    if k - j > 1 {
        if !catalog.contains(j, k) {
            return;
        }
        let w_jk = match subs.weight(j, k) {
            Some(w) if w < i64::MAX => w,
            _ => return,
        };
        w += w_jk + 1;
    }

    if j - i > 1 {
        let last = subs.get(i, j).and_then(|s| s.s.back().copied());
        match last {
            Some(last_pair) if !is_refl(pos(verts, j), pos(verts, k), pos(verts, last_pair.g), cfg) => {
                let sub_ij = subs.get_mut(i, j).expect("just read above");
                loop {
                    let len = sub_ij.s.len();
                    if len <= 1 {
                        break;
                    }
                    let second_last = sub_ij.s[len - 2];
                    if is_refl(pos(verts, j), pos(verts, k), pos(verts, second_last.g), cfg) {
                        break;
                    }
                    let popped = sub_ij.s.pop_back().expect("len > 1 checked above");
                    sub_ij.s_tail.push_back(popped);
                }
                let back_now = sub_ij.s.back().copied();
                match back_now {
                    Some(bn) if !is_refl(pos(verts, i), pos(verts, bn.f), pos(verts, k), cfg) => {
                        a = bn.f;
                    }
                    _ => w += 1,
                }
            }
            _ => w += 1,
        }
    }

    subs.add_pair(i, k, Pair { f: a, g: j }, w);
}

/// `Backw(i, j, k)` of spec.md §4.4: the mirror of `forw`, working on
/// `S.front()`/`S_head` of the *right* child `subs[(j,k)]`.
fn backw(
    verts: &[Vertex],
    catalog: &Catalog,
    subs: &mut SubProblems,
    i: usize,
    j: usize,
    k: usize,
    cfg: &DecompCfg,
) {
    if !catalog.contains(j, k) {
        return;
    }
    let mut w = match subs.weight(j, k) {
        Some(w) if w < i64::MAX => w,
        _ => return,
    };
    let mut a = j;

    if j - i > 1 {
        if !catalog.contains(i, j) {
            return;
        }
        let w_ij = match subs.weight(i, j) {
            Some(w) if w < i64::MAX => w,
            _ => return,
        };
        w += w_ij + 1;
    }

    if k - j > 1 {
        let first = subs.get(j, k).and_then(|s| s.s.front().copied());
        match first {
            Some(first_pair) if !is_refl(pos(verts, j), pos(verts, first_pair.f), pos(verts, i), cfg) => {
                let sub_jk = subs.get_mut(j, k).expect("just read above");
                loop {
                    let len = sub_jk.s.len();
                    if len <= 1 {
                        break;
                    }
                    let second_first = sub_jk.s[1];
                    if is_refl(pos(verts, j), pos(verts, second_first.f), pos(verts, i), cfg) {
                        break;
                    }
                    let popped = sub_jk.s.pop_front().expect("len > 1 checked above");
                    sub_jk.s_head.push_back(popped);
                }
                let front_now = sub_jk.s.front().copied();
                match front_now {
                    Some(fr) if !is_refl(pos(verts, k), pos(verts, i), pos(verts, fr.g), cfg) => {
                        a = fr.g;
                    }
                    _ => w += 1,
                }
            }
            _ => w += 1,
        }
    }

    subs.add_pair(i, k, Pair { f: j, g: a }, w);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::build as build_polygon;
    use crate::simplify::InputVertex;

    fn iv(id: usize, x: f64, y: f64) -> InputVertex {
        InputVertex { id, x, y }
    }

    #[test]
    fn l_shape_dp_finds_a_single_diagonal_weight() {
        let cfg = DecompCfg::default();
        let l = [
            iv(0, 0.0, 0.0),
            iv(1, 2.0, 0.0),
            iv(2, 2.0, 1.0),
            iv(3, 1.0, 1.0),
            iv(4, 1.0, 2.0),
            iv(5, 0.0, 2.0),
        ];
        let pre = build_polygon(&l, &cfg);
        assert!(pre.any_reflex);
        let catalog = Catalog::build(&pre.verts);

        let mut subs = crate::subproblem::seed_base_cases(&pre.verts);
        run(&pre.verts, &catalog, &mut subs, &cfg);

        let n = pre.verts.len();
        let whole = subs.weight(0, n - 1);
        assert!(whole.is_some());
        assert_eq!(whole.unwrap(), 1);
    }
}
