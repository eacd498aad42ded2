//! Recovery pass: `Recover(i, k)` of spec.md §4.6.
//!
//! Purpose
//! - Before the diagonal collector runs, walk the optimal subproblem tree
//!   top-down and splice each child's `S` back into the shape it had when
//!   the parent chose it, undoing whatever speculative peeling `Forw`/
//!   `Backw` did while probing other candidate splits.
//!
//! Why this design
//! - The splice only has work to do when the child's binding junction
//!   moved (`back.f != back.g`, i.e. the parent adopted a grandchild's
//!   junction instead of introducing its own diagonal): `restore_s` undoes
//!   the peel, then the pop loop re-applies just enough of it to land back
//!   on the state consistent with the parent's choice.
//!
//! References
//! - Code cross-refs: `subproblem::{SubProblems, SubP::restore_s}`, `dp::run`.

use crate::error::DecompError;
use crate::polygon::Vertex;
use crate::subproblem::SubProblems;

/// `Recover(i, k)`, called initially as `Recover(0, N-1)`.
pub fn recover(
    subs: &mut SubProblems,
    verts: &[Vertex],
    i: usize,
    k: usize,
) -> Result<(), DecompError> {
    if k - i < 2 {
        return Ok(());
    }

    let i_is_reflex = verts[i].refl;
    let (f, g) = {
        let sa = subs
            .get(i, k)
            .ok_or(DecompError::InfeasibleSubproblem { i, k })?;
        if sa.s.is_empty() {
            return Err(DecompError::InfeasibleSubproblem { i, k });
        }
        let p = if i_is_reflex {
            *sa.s.back().expect("checked non-empty above")
        } else {
            *sa.s.front().expect("checked non-empty above")
        };
        (p.f, p.g)
    };

    if i_is_reflex {
        let j = g;
        recover(subs, verts, j, k)?;
        if j - i > 1 && f != g {
            if let Some(sub_ij) = subs.get_mut(i, j) {
                sub_ij.restore_s();
            }
            loop {
                let stop = match subs.get(i, j) {
                    Some(s) => match s.s.back() {
                        Some(b) => b.f == f,
                        None => true,
                    },
                    None => true,
                };
                if stop {
                    break;
                }
                if let Some(sub_ij) = subs.get_mut(i, j) {
                    sub_ij.s.pop_back();
                }
            }
        }
        recover(subs, verts, i, j)?;
    } else {
        let j = f;
        recover(subs, verts, i, j)?;
        if k - j > 1 && f != g {
            if let Some(sub_jk) = subs.get_mut(j, k) {
                sub_jk.restore_s();
            }
            loop {
                let stop = match subs.get(j, k) {
                    Some(s) => match s.s.front() {
                        Some(fr) => fr.g == g,
                        None => true,
                    },
                    None => true,
                };
                if stop {
                    break;
                }
                if let Some(sub_jk) = subs.get_mut(j, k) {
                    sub_jk.s.pop_front();
                }
            }
        }
        recover(subs, verts, j, k)?;
    }

    Ok(())
}
