//! The backtracking 3-coloring solver.
//!
//! A zero-field struct with a `solve(&graph) -> ColoringResult` entry
//! point. Backtracking uses a trail: a flat undo log of domain removals,
//! pushed on every propagation step and popped back to a saved length on
//! backtrack, rather than cloning the whole domain table per branch.

use crate::topology::{ThreeColorGraph, VertexId};
use crate::tri::Tri;
use std::collections::BTreeMap;

/// The outcome of a coloring attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringResult {
    pub satisfiable: bool,
    /// Vertex id -> color index (0, 1, or 2). Empty when unsatisfiable.
    pub coloring: BTreeMap<VertexId, u8>,
}

impl ColoringResult {
    fn unsatisfiable() -> ColoringResult {
        ColoringResult { satisfiable: false, coloring: BTreeMap::new() }
    }

    /// Reads a vertex's assigned color back as a [`Tri`], by comparing it
    /// against the colors assigned to the three anchors. `None` if the
    /// vertex wasn't colored (unsatisfiable result) or doesn't exist.
    pub fn tri_of(&self, v: VertexId) -> Option<Tri> {
        let color = *self.coloring.get(&v)?;
        Tri::ALL.into_iter().find(|&t| self.coloring.get(&ThreeColorGraph::anchor(t)) == Some(&color))
    }
}

/// A 3-element bitset over color indices `{0, 1, 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColorSet(u8);

impl ColorSet {
    const FULL: ColorSet = ColorSet(0b111);

    fn contains(self, c: u8) -> bool {
        self.0 & (1 << c) != 0
    }

    fn remove(&mut self, c: u8) {
        self.0 &= !(1 << c);
    }

    fn insert(&mut self, c: u8) {
        self.0 |= 1 << c;
    }

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn iter(self) -> impl Iterator<Item = u8> {
        (0u8..3).filter(move |&c| self.contains(c))
    }
}

/// The backtracking 3-coloring solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct Solver;

impl Solver {
    pub fn new() -> Solver {
        Solver
    }

    /// Attempts to 3-color `g`, returning the lowest lexicographic coloring
    /// by (ascending vertex id, ascending color) when one exists.
    pub fn solve(&self, g: &ThreeColorGraph) -> ColoringResult {
        let n = g.num_vertices();
        if n == 0 {
            return ColoringResult { satisfiable: true, coloring: BTreeMap::new() };
        }
        if n <= 3 {
            let coloring = (0..n).map(|v| (v, v as u8)).collect();
            return ColoringResult { satisfiable: true, coloring };
        }
        if has_k4(g) {
            return ColoringResult::unsatisfiable();
        }

        let adjacency: Vec<Vec<VertexId>> = (0..n).map(|v| g.neighbors(v)).collect();
        let mut domains = vec![ColorSet::FULL; n];
        // Anchors are pinned to their own id as color, matching the
        // trivial-case convention and giving `tri_of` a fixed reference.
        for t in Tri::ALL {
            let id = ThreeColorGraph::anchor(t);
            domains[id] = ColorSet(1 << (id as u8));
        }
        let mut coloring: Vec<Option<u8>> = vec![None; n];
        let mut trail: Vec<(VertexId, u8)> = Vec::new();

        let order: Vec<VertexId> = (0..n).collect();
        if backtrack(&adjacency, &order, 0, &mut domains, &mut coloring, &mut trail) {
            let coloring = (0..n).map(|v| (v, coloring[v].expect("every vertex colored on success"))).collect();
            ColoringResult { satisfiable: true, coloring }
        } else {
            ColoringResult::unsatisfiable()
        }
    }
}

fn backtrack(
    adjacency: &[Vec<VertexId>],
    order: &[VertexId],
    idx: usize,
    domains: &mut [ColorSet],
    coloring: &mut [Option<u8>],
    trail: &mut Vec<(VertexId, u8)>,
) -> bool {
    if idx == order.len() {
        return true;
    }
    let v = order[idx];
    if coloring[v].is_some() {
        return backtrack(adjacency, order, idx + 1, domains, coloring, trail);
    }

    for color in domains[v].iter().collect::<Vec<_>>() {
        coloring[v] = Some(color);
        let mark = trail.len();
        let mut conflict = false;

        for &nb in &adjacency[v] {
            if coloring[nb].is_none() && domains[nb].contains(color) {
                domains[nb].remove(color);
                trail.push((nb, color));
                if domains[nb].is_empty() {
                    conflict = true;
                    break;
                }
            }
        }

        if !conflict && backtrack(adjacency, order, idx + 1, domains, coloring, trail) {
            return true;
        }

        while trail.len() > mark {
            let (nb, c) = trail.pop().expect("trail length checked above");
            domains[nb].insert(c);
        }
        coloring[v] = None;
    }

    false
}

/// Scans for any 4-clique, a cheap infeasibility witness: a clique on 4
/// vertices can never be 3-colored. Implemented via neighbor-set
/// intersection rather than a literal quadruple loop, which is equivalent
/// but avoids needless re-scanning of disconnected regions.
fn has_k4(g: &ThreeColorGraph) -> bool {
    use std::collections::HashSet;

    let n = g.num_vertices();
    let neighbor_sets: Vec<HashSet<VertexId>> = (0..n).map(|v| g.neighbors(v).into_iter().collect()).collect();

    for (u, v) in g.edges() {
        let common: Vec<VertexId> = neighbor_sets[u].intersection(&neighbor_sets[v]).copied().collect();
        for i in 0..common.len() {
            for j in (i + 1)..common.len() {
                let (w, x) = (common[i], common[j]);
                if g.has_edge(w, x) {
                    return true;
                }
            }
        }
    }
    false
}
