//! Basic 2D predicates used by the decomposition engine.
//!
//! Purpose
//! - Provide the handful of scale/angle predicates the DP and the
//!   preprocessor need: signed area, the scale guard, the reflex test
//!   `is_refl`, and coordinate near-equality `is_near`.
//!
//! Why this design
//! - `is_refl` is intentionally a 3-argument free function, not a symmetric
//!   "is this angle reflex" helper: the normal is computed from `b -> c`
//!   and the distance from `a`, so swapping `b`/`c` changes the answer.
//!   Callers in `dp` and `recovery` rely on this asymmetry (see `DecompCfg`
//!   and the module docs on `dp`).
//!
//! References
//! - Code cross-refs: `DecompCfg`, `polygon::Vertex`, `dp::{forw, backw}`,
//!   `geom2::util::cross`.

use nalgebra::Vector2;

/// A 2D point, same representation `geom2` uses for every point/vector in
/// this pack: `Vector2<f64>` rather than a pair of fields, so `.dot()`,
/// `.norm()` and vector subtraction come from `nalgebra` instead of being
/// hand-rolled here.
pub type Point = Vector2<f64>;

/// Tolerances used throughout the engine.
///
/// Grounded on the `GeomCfg` pattern: a small `Copy` struct of named
/// epsilons with a `Default` impl, rather than scattering magic numbers.
#[derive(Clone, Copy, Debug)]
pub struct DecompCfg {
    /// Coordinate-wise tolerance for `is_near`.
    pub near_eps: f64,
    /// Area floor below which the scale guard kicks in (the "10" of the
    /// scaler: `if |area| < scale_area_floor { scale by scale_area_floor/|area| }`).
    pub scale_area_floor: f64,
}

impl Default for DecompCfg {
    fn default() -> Self {
        Self {
            near_eps: 1e-9,
            scale_area_floor: 10.0,
        }
    }
}

/// The reflex-test distance tolerance is a fixed constant, not a caller
/// knob: it is only meaningful after the scale guard has run, and changing
/// it without revisiting the scaler would silently break the invariant.
pub const REFL_EPS: f64 = 1e-3;

/// Signed area (shoelace sum) of a vertex ring. Positive for
/// counter-clockwise orientation.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let p0 = points[i];
        let p1 = points[(i + 1) % n];
        sum += p0.x * p1.y - p1.x * p0.y;
    }
    sum * 0.5
}

/// Coordinate-wise near-equality.
#[inline]
pub fn is_near(a: Point, b: Point, cfg: &DecompCfg) -> bool {
    (a.x - b.x).abs() <= cfg.near_eps && (a.y - b.y).abs() <= cfg.near_eps
}

/// Reflex predicate: `b` is the query vertex, `a`/`c` its neighbors.
///
/// Computes the unit normal of `b -> c` as `(b.y - c.y, c.x - b.x)`, then
/// `d = n . (a - b)`. Returns true if `b` and `c` are near-coincident, or
/// `d > REFL_EPS`.
pub fn is_refl(a: Point, b: Point, c: Point, cfg: &DecompCfg) -> bool {
    if is_near(b, c, cfg) {
        return true;
    }
    let mut n = Vector2::new(b.y - c.y, c.x - b.x);
    let len = n.norm();
    if len > 0.0 {
        n /= len;
    }
    let d = n.dot(&(a - b));
    d > REFL_EPS
}

/// Cross product of `(b - a) x (c - a)`, used by the visibility oracle and
/// the simplifier's collinearity test.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn area_of_ccw_square_is_positive() {
        let sq = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area(&sq) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn area_of_cw_square_is_negative() {
        let sq = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!(signed_area(&sq) < 0.0);
    }

    #[test]
    fn convex_vertex_of_ccw_square_is_not_reflex() {
        let cfg = DecompCfg::default();
        // square (0,0),(1,0),(1,1),(0,1); query b=(1,0), a=next=(1,1), c=prev=(0,0).
        assert!(!is_refl(p(1.0, 1.0), p(1.0, 0.0), p(0.0, 0.0), &cfg));
    }

    #[test]
    fn reflex_vertex_of_l_shape_is_reflex() {
        let cfg = DecompCfg::default();
        // L-shape (0,0),(2,0),(2,1),(1,1),(1,2),(0,2); vertex id 3 = (1,1) is reflex.
        // query b=(1,1), a=next=(1,2), c=prev=(2,1).
        let a = p(1.0, 2.0);
        let b = p(1.0, 1.0);
        let c = p(2.0, 1.0);
        assert!(is_refl(a, b, c, &cfg));
    }

    #[test]
    fn is_refl_is_argument_order_sensitive() {
        let cfg = DecompCfg::default();
        let prev = p(2.0, 1.0);
        let b = p(1.0, 1.0);
        let next = p(1.0, 2.0);
        // Swapping a/c swaps which edge the normal is taken from, and need
        // not give the same answer.
        let correct = is_refl(next, b, prev, &cfg);
        let swapped = is_refl(prev, b, next, &cfg);
        assert!(correct);
        assert!(!swapped);
    }
}
