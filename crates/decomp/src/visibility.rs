//! Visibility polygon oracle (the `GetVisPoly` external collaborator of
//! spec.md §6, made concrete).
//!
//! Purpose
//! - For a reflex vertex `i`, return every vertex visible from `i` inside
//!   the polygon: the catalog (§4.2) only ever considers pairs this oracle
//!   names.
//!
//! Why this design
//! - A diagonal `i -> j` lies in a simple polygon's interior iff it crosses
//!   no other edge and its midpoint is inside the polygon; this is the
//!   standard test for simple (possibly non-convex) polygons and needs
//!   nothing the polygon doesn't already give us (no triangulation, no
//!   trapezoidal map).
//! - Adjacent vertices are visible by construction (they're already a
//!   polygon edge) and are special-cased to avoid boundary-touching
//!   degeneracies in the general segment test.
//!
//! References
//! - Code cross-refs: `geometry::cross`, `polygon::Vertex`, `catalog::Catalog::build`.

use crate::geometry::{cross, Point};
use crate::polygon::Vertex;

/// One entry of a visibility-polygon result. Only `Vertex` is ever produced
/// by this implementation; `Steiner` exists so the contract matches
/// spec.md's `NO_USE` sentinel for a future oracle that synthesizes points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisPoint {
    Vertex(usize),
    Steiner,
}

/// Visibility polygon from `verts[i]`: `[0]` is the source vertex itself,
/// the rest are the other vertices of `verts` visible from it.
pub fn vis_poly(verts: &[Vertex], i: usize) -> Vec<VisPoint> {
    let n = verts.len();
    let mut out = Vec::with_capacity(n);
    out.push(VisPoint::Vertex(i));
    for j in 0..n {
        if j == i {
            continue;
        }
        if is_visible(verts, i, j) {
            out.push(VisPoint::Vertex(j));
        }
    }
    out
}

fn is_visible(verts: &[Vertex], i: usize, j: usize) -> bool {
    let n = verts.len();
    if (i + 1) % n == j || (j + 1) % n == i {
        // Adjacent vertices: the segment is a polygon edge.
        return true;
    }
    let p_i = Point::new(verts[i].x, verts[i].y);
    let p_j = Point::new(verts[j].x, verts[j].y);

    for e in 0..n {
        let a = e;
        let b = (e + 1) % n;
        if a == i || a == j || b == i || b == j {
            continue;
        }
        let p_a = Point::new(verts[a].x, verts[a].y);
        let p_b = Point::new(verts[b].x, verts[b].y);
        if segments_properly_intersect(p_i, p_j, p_a, p_b) {
            return false;
        }
    }

    let mid = Point::new((p_i.x + p_j.x) * 0.5, (p_i.y + p_j.y) * 0.5);
    point_in_polygon(verts, mid)
}

/// True iff open segments `(p1, p2)` and `(p3, p4)` cross properly (not
/// merely touching at a shared endpoint).
fn segments_properly_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = cross(p3, p4, p1);
    let d2 = cross(p3, p4, p2);
    let d3 = cross(p1, p2, p3);
    let d4 = cross(p1, p2, p4);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// Ray-casting point-in-polygon test (even-odd rule), for the strict
/// interior membership of a diagonal's midpoint.
fn point_in_polygon(verts: &[Vertex], p: Point) -> bool {
    let n = verts.len();
    let mut inside = false;
    let mut j = n - 1;
    for k in 0..n {
        let vk = Point::new(verts[k].x, verts[k].y);
        let vj = Point::new(verts[j].x, verts[j].y);
        if (vk.y > p.y) != (vj.y > p.y) {
            let x_cross = vk.x + (p.y - vk.y) / (vj.y - vk.y) * (vj.x - vk.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = k;
    }
    inside
}
