//! Diagonal collector: `Collect(i, k)` of spec.md §4.7.
//!
//! Purpose
//! - Walk the recovered subproblem tree and emit the final, deduplicated
//!   diagonal list: a diagonal that a child inherited unchanged from its
//!   own child (`a`/`b` false) is not re-emitted at this level.
//!
//! References
//! - Code cross-refs: `recovery::recover` (must run first), `assemble::assemble`.

use crate::error::DecompError;
use crate::polygon::Vertex;
use crate::subproblem::SubProblems;

/// The final diagonal list: each entry `(i, j)` with `i < j`.
pub type DiagList = Vec<(usize, usize)>;

/// `Collect(i, k)`, called initially as `Collect(0, N-1)` after `recover`.
pub fn collect(
    subs: &SubProblems,
    verts: &[Vertex],
    i: usize,
    k: usize,
    diags: &mut DiagList,
) -> Result<(), DecompError> {
    if k - i < 2 {
        return Ok(());
    }

    let sa = subs
        .get(i, k)
        .ok_or(DecompError::InfeasibleSubproblem { i, k })?;
    if sa.s.is_empty() {
        return Err(DecompError::InfeasibleSubproblem { i, k });
    }

    let (j, a, b) = if verts[i].refl {
        let back = *sa.s.back().expect("checked non-empty above");
        let j = back.g;
        (j, j == back.f, true)
    } else {
        let front = *sa.s.front().expect("checked non-empty above");
        let j = front.f;
        (j, true, j == front.g)
    };

    if a && j - i > 1 {
        diags.push((i, j));
    }
    if b && k - j > 1 {
        diags.push((j, k));
    }

    collect(subs, verts, i, j, diags)?;
    collect(subs, verts, j, k, diags)?;
    Ok(())
}
