//! # npcompute
//!
//! Encodes Boolean computation as instances of graph 3-coloring.
//!
//! A [`topology::ThreeColorGraph`] starts life as three "anchor" vertices,
//! `ZERO`, `ONE`, and `X`, wired into a triangle, so that any valid
//! 3-coloring assigns each of them a distinct color. Every other vertex is
//! wired to whichever anchors it must *not* match, which restricts it to a
//! [`tri::Domain`] of two or three tri-values. [`gates`] builds Boolean
//! logic out of these vertices: NOT, SWAP, and a keystone AND gate that
//! the rest (NAND, NOR, OR, XOR, XNOR) are derived from. [`registers`]
//! and [`arithmetic`] build `MEM` registers and a ripple adder on top.
//! [`solver`] answers whether a constructed graph is 3-colorable (and, if
//! so, produces a coloring you can read Boolean values back out of), and
//! [`dimacs`] exports a graph to the standard `.col` format so external
//! SAT/coloring solvers can answer the same question.
//!
//! ## Example
//!
//! ```rust
//! use npcompute::prelude::*;
//!
//! let mut g = ThreeColorGraph::new();
//! let a = Const::new(&mut g, 1, 1).unwrap();
//! let b = Const::new(&mut g, 1, 1).unwrap();
//! let out = and_gate(&mut g, a.bits()[0], b.bits()[0]);
//!
//! let result = Solver::new().solve(&g);
//! assert!(result.satisfiable);
//! assert_eq!(result.tri_of(out), Some(Tri::One));
//! ```

pub mod arithmetic;
pub mod dimacs;
pub mod error;
pub mod gates;
pub mod io;
pub mod registers;
pub mod solver;
pub mod topology;
pub mod tri;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::arithmetic::add;
    pub use crate::dimacs::{emit_dimacs, write_dimacs};
    pub use crate::error::{GraphError, Result};
    pub use crate::gates::{
        and_gate, break_gate, if_layer, nand_gate, nor_gate, not_between, not_gate, or_gate, swap, xnor_gate, xor_gate,
    };
    pub use crate::registers::{Const, Mem, Var};
    pub use crate::solver::{ColoringResult, Solver};
    pub use crate::topology::{ThreeColorGraph, VertexId};
    pub use crate::tri::{Domain, Tri};
}

// Re-export commonly used items at crate root
pub use error::{GraphError, Result};
pub use solver::{ColoringResult, Solver};
pub use topology::{ThreeColorGraph, VertexId};
pub use tri::{Domain, Tri};
