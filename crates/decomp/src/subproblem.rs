//! Subproblem store: the `SubP` state of spec.md §3/§4.4 and the
//! `AddPair`/`RestoreS` operations of §4.4/§4.6.
//!
//! Why this design
//! - Subproblems reference each other only by `(i, k)` interval key, never
//!   by pointer, so a single `HashMap` owns all of them and there is no
//!   ownership cycle to worry about (see spec.md §9's cyclic-reference
//!   design note).
//! - `S_head`/`S_tail` are explicit save-stash deques, not closures over
//!   mutable state: `AddPair` and `RestoreS` are the only two places that
//!   touch them, matching the "explicit save/restore" design note.
//!
//! References
//! - Code cross-refs: `dp::{forw, backw}`, `recovery::recover`, `collect::collect`.

use std::collections::{HashMap, VecDeque};

use crate::polygon::Vertex;

/// A junction pair. `f`/`g` are NOT ordered by value (unlike catalog
/// pairs); their meaning depends on which end of `S` they sit at and
/// whether the owning subproblem is consulted in its forward or backward
/// flavor (spec.md §4.5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pair {
    pub f: usize,
    pub g: usize,
}

/// Best-known partial solution for a subproblem interval.
///
/// `w = i64::MAX` marks "not yet reached by `AddPair`" (infeasible so
/// far); every other value is a genuine diagonal count.
#[derive(Clone, Debug)]
pub struct SubP {
    pub w: i64,
    pub s: VecDeque<Pair>,
    pub s_head: VecDeque<Pair>,
    pub s_tail: VecDeque<Pair>,
}

impl SubP {
    fn unseen() -> Self {
        SubP {
            w: i64::MAX,
            s: VecDeque::new(),
            s_head: VecDeque::new(),
            s_tail: VecDeque::new(),
        }
    }

    fn base_case(w: i64, s: VecDeque<Pair>) -> Self {
        SubP {
            w,
            s,
            s_head: VecDeque::new(),
            s_tail: VecDeque::new(),
        }
    }

    /// `AddPair(p, w)` of spec.md §4.4.
    pub fn add_pair(&mut self, p: Pair, w: i64) {
        if w > self.w {
            return;
        }
        if w < self.w {
            self.s.clear();
            self.s_tail.clear();
            self.w = w;
        }
        if let Some(front) = self.s.front() {
            if p.f > front.f {
                while let Some(front) = self.s.front() {
                    if front.g >= p.g {
                        self.s.pop_front();
                    } else {
                        break;
                    }
                }
            }
        }
        self.s.push_front(p);
        self.s_head.clear();
    }

    /// `RestoreS()` of spec.md §4.6: prepend `S_head` to `S`, append
    /// reverse of `S_tail` to `S`, then clear both stashes.
    pub fn restore_s(&mut self) {
        let mut head: Vec<Pair> = self.s_head.drain(..).collect();
        head.reverse();
        for p in head {
            self.s.push_front(p);
        }
        let mut tail: Vec<Pair> = self.s_tail.drain(..).collect();
        tail.reverse();
        for p in tail {
            self.s.push_back(p);
        }
    }
}

/// The map of all subproblems, keyed by `(i, k)` with `i < k`.
#[derive(Clone, Debug, Default)]
pub struct SubProblems {
    map: HashMap<(usize, usize), SubP>,
}

impl SubProblems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, i: usize, k: usize) -> Option<&SubP> {
        self.map.get(&(i, k))
    }

    pub fn get_mut(&mut self, i: usize, k: usize) -> Option<&mut SubP> {
        self.map.get_mut(&(i, k))
    }

    pub fn weight(&self, i: usize, k: usize) -> Option<i64> {
        self.map.get(&(i, k)).map(|s| s.w)
    }

    pub fn contains(&self, i: usize, k: usize) -> bool {
        self.map.contains_key(&(i, k))
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Seed a base-case wedge or edge (spec.md §4.3) with a fixed `w = 0`.
    pub fn seed(&mut self, i: usize, k: usize, s: VecDeque<Pair>) {
        self.map.entry((i, k)).or_insert_with(|| SubP::base_case(0, s));
    }

    /// `subs[(i,k)].AddPair(p, w)`, lazily creating the entry if absent.
    pub fn add_pair(&mut self, i: usize, k: usize, p: Pair, w: i64) {
        self.map.entry((i, k)).or_insert_with(SubP::unseen).add_pair(p, w);
    }
}

/// Base-case seeding of spec.md §4.3: for each reflex vertex `i` and each
/// offset in `{-2,-1,1,2}` landing strictly inside the polygon, seed a
/// `w = 0` edge (adjacent offsets) or wedge (offset `2`, with the lone
/// interior vertex as its own junction).
pub fn seed_base_cases(verts: &[Vertex]) -> SubProblems {
    let mut subs = SubProblems::new();
    let n = verts.len();
    for i in 0..n {
        if !verts[i].refl {
            continue;
        }
        for delta in [-2i64, -1, 1, 2] {
            let other = i as i64 + delta;
            if other <= 0 || other as usize >= n {
                continue;
            }
            let other = other as usize;
            let (a, b) = if i < other { (i, other) } else { (other, i) };
            let s = if b - a == 2 {
                let mut d = VecDeque::new();
                d.push_back(Pair { f: a + 1, g: a + 1 });
                d
            } else {
                VecDeque::new()
            };
            subs.seed(a, b, s);
        }
    }
    subs
}
