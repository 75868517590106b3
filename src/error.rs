//! Error types for the npcompute library.

use thiserror::Error;

/// Errors that can occur while building or exporting a [`crate::topology::ThreeColorGraph`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Attempted to add an edge from a vertex to itself.
    #[error("self-loop is not allowed: vertex {0}")]
    SelfLoop(usize),

    /// Vertex id does not exist in the graph.
    #[error("vertex {0} does not exist (graph has {1} vertices)")]
    UnknownVertex(usize, usize),

    /// `CONST` was asked to pin a value outside `0..2^n`.
    #[error("const value {value} out of range for {n}-bit register (0..{max})")]
    ConstValueOutOfRange { value: u64, n: usize, max: u64 },

    /// `ADD` (or another combinator requiring equal-width operands) was given
    /// operands of different widths.
    #[error("operand width mismatch: {a} bits vs {b} bits")]
    WidthMismatch { a: usize, b: usize },

    /// `SWAP` was given `from`/`to` domain pairs that violate its
    /// precondition: `|from| = |to| = 2`, `from[0] != to[0]`,
    /// `from[1] != to[1]`, `from[1] == to[0]`.
    #[error("invalid SWAP domains: from={from:?} to={to:?}")]
    InvalidSwapDomains {
        from: [crate::tri::Tri; 2],
        to: [crate::tri::Tri; 2],
    },

    /// `NOT`'s `between` argument did not name exactly two tri-values.
    #[error("NOT requires a 2-element between-domain, got {0} values")]
    InvalidNotDomain(u32),

    /// An I/O failure while reading or writing a DIMACS or JSON file.
    #[error("I/O error: {0}")]
    Io(String),

    /// A DIMACS file did not parse as valid `.col` format.
    #[error("invalid DIMACS input: {0}")]
    InvalidDimacs(String),
}

/// Result type alias for npcompute operations.
pub type Result<T> = std::result::Result<T, GraphError>;
