//! The graph builder and tri-state anchors.
//!
//! Wraps a `petgraph::graph::UnGraph` in a thin newtype that exposes only
//! the operations this domain needs rather than the full petgraph API.

use crate::error::{GraphError, Result};
use crate::tri::{Domain, Tri};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// A vertex identifier. Dense, 0-origin, assigned in creation order.
pub type VertexId = usize;

/// The graph-encoded computation.
///
/// Every instance starts with exactly the three anchor vertices `0, 1, 2`
/// (`ZERO`, `ONE`, `X`) wired as a triangle. Construction is monotonic:
/// vertices and edges are only ever added, never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreeColorGraph {
    inner: UnGraph<(), ()>,
    domains: Vec<Domain>,
}

impl ThreeColorGraph {
    /// Creates a graph containing exactly the three anchor vertices and the
    /// three edges of their triangle.
    pub fn new() -> Self {
        let mut inner = UnGraph::new_undirected();
        for _ in 0..3 {
            inner.add_node(());
        }
        for t in Tri::ALL {
            for u in Tri::ALL {
                if t < u {
                    inner.add_edge(NodeIndex::new(t.anchor_id()), NodeIndex::new(u.anchor_id()), ());
                }
            }
        }
        Self {
            inner,
            domains: vec![Domain::single(Tri::Zero), Domain::single(Tri::One), Domain::single(Tri::X)],
        }
    }

    /// The fixed anchor vertex id for a tri-value.
    pub const fn anchor(t: Tri) -> VertexId {
        t.anchor_id()
    }

    /// Allocates a new vertex, wiring it to every anchor *not* in `allow`.
    /// Returns the new vertex's id.
    pub fn add_vertex(&mut self, allow: Domain) -> VertexId {
        let id = self.inner.add_node(()).index();
        self.domains.push(allow);
        for forbidden in allow.forbidden() {
            self.inner.add_edge(NodeIndex::new(id), NodeIndex::new(Self::anchor(forbidden)), ());
        }
        id
    }

    /// Allocates a vertex with the full domain (no anchor edges).
    pub fn add_free_vertex(&mut self) -> VertexId {
        self.add_vertex(Domain::FULL)
    }

    /// Inserts an undirected edge between two existing vertices. Idempotent
    /// if the edge already exists; rejects self-loops.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        let n = self.num_vertices();
        if u >= n {
            return Err(GraphError::UnknownVertex(u, n));
        }
        if v >= n {
            return Err(GraphError::UnknownVertex(v, n));
        }
        let (a, b) = (NodeIndex::new(u), NodeIndex::new(v));
        if self.inner.find_edge(a, b).is_none() {
            self.inner.add_edge(a, b, ());
        }
        Ok(())
    }

    /// The declared domain of a vertex, as recorded at `add_vertex` time.
    pub fn domain(&self, v: VertexId) -> Domain {
        self.domains[v]
    }

    pub fn num_vertices(&self) -> usize {
        self.inner.node_count()
    }

    pub fn num_edges(&self) -> usize {
        self.inner.edge_count()
    }

    /// All edges as `(u, v)` pairs with `u < v`, in insertion order.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        self.inner
            .edge_references()
            .map(|e| {
                let (a, b) = (e.source().index(), e.target().index());
                if a < b {
                    (a, b)
                } else {
                    (b, a)
                }
            })
            .collect()
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.inner
            .find_edge(NodeIndex::new(u), NodeIndex::new(v))
            .is_some()
    }

    pub fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        self.inner
            .neighbors(NodeIndex::new(v))
            .map(|n| n.index())
            .collect()
    }
}

impl Default for ThreeColorGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ThreeColorGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() || self.num_edges() != other.num_edges() {
            return false;
        }
        let mut a = self.edges();
        let mut b = other.edges();
        a.sort();
        b.sort();
        a == b
    }
}

impl Eq for ThreeColorGraph {}
