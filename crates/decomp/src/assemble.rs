//! Piece assembler: spec.md §4.8.
//!
//! Purpose
//! - Walk the vertex ring once, using the sorted diagonal list to open and
//!   close convex pieces, and emit each piece as a list of vertex indices
//!   into the rotated, simplified sequence.
//!
//! Why this design
//! - Diagonals sort by `(f asc, g desc)` so that of two diagonals sharing
//!   an opening vertex, the one spanning further opens (and is pushed
//!   onto `rs`/`ps`) first — this is what keeps `rs` well-formed as a
//!   stack of properly-nested openings (spec.md §9).
//! - Each opened diagonal gets exactly one new piece, and the piece index
//!   assigned to it is the (post-increment) diagonal cursor `q`: the
//!   source's "set `p = ++q`" is reproduced directly by indexing a
//!   preallocated `Vec` of `diags.len() + 1` pieces instead of growing the
//!   piece list lazily.
//!
//! References
//! - Code cross-refs: `collect::DiagList`.

use crate::collect::DiagList;

/// Sort `diags` by `(f asc, g desc)` and walk the ring `0..n`, emitting one
/// vertex-index list per convex piece.
pub fn assemble(n: usize, mut diags: DiagList) -> Vec<Vec<usize>> {
    diags.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut pieces: Vec<Vec<usize>> = vec![Vec::new(); diags.len() + 1];
    let mut p = 0usize;
    let mut q = 0usize;
    let mut rs: Vec<usize> = Vec::new();
    let mut ps: Vec<usize> = Vec::new();

    let mut i = 0usize;
    while i < n {
        if pieces[p].last().copied() != Some(i) {
            pieces[p].push(i);
        }

        if let Some(&top) = rs.last() {
            if i == diags[top].1 {
                if pieces[p].first().copied() != Some(diags[top].0) {
                    pieces[p].push(diags[top].0);
                }
                rs.pop();
                p = ps.pop().expect("rs/ps stacks stay balanced");
                continue;
            }
        }

        if q < diags.len() && i == diags[q].0 {
            let diag = diags[q];
            if pieces[p].first().copied() != Some(diag.1) {
                pieces[p].push(diag.1);
            }
            rs.push(q);
            ps.push(p);
            q += 1;
            p = q;
            continue;
        }

        i += 1;
    }

    pieces.retain(|piece| !piece.is_empty());
    pieces
}
