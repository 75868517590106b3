//! Register types: `MEM` is a bit-ordered list of vertices; `CONST` and
//! `VAR` are the two ways to allocate one.

use crate::error::{GraphError, Result};
use crate::topology::{ThreeColorGraph, VertexId};
use crate::tri::{Domain, Tri};

/// An ordered list of bit vertices, LSB first.
///
/// `Mem` does not own a graph; it is a thin, cheaply-cloned view over
/// vertex ids already allocated in some [`ThreeColorGraph`]. Splitting and
/// merging never touch the graph: they only rearrange which ids a `Mem`
/// refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mem {
    bits: Vec<VertexId>,
}

impl Mem {
    /// Wraps an existing list of bit vertices, LSB first.
    pub fn new(bits: Vec<VertexId>) -> Mem {
        Mem { bits }
    }

    pub fn bits(&self) -> &[VertexId] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The low `len/2` bits (rounding down), LSB first.
    pub fn lower_half(&self) -> Mem {
        Mem::new(self.bits[..self.len() / 2].to_vec())
    }

    /// The high `len - len/2` bits, LSB first within the half.
    pub fn upper_half(&self) -> Mem {
        Mem::new(self.bits[self.len() / 2..].to_vec())
    }

    /// Concatenates `self`'s bits followed by `other`'s bits.
    pub fn merge(&self, other: &Mem) -> Mem {
        let mut bits = self.bits.clone();
        bits.extend_from_slice(&other.bits);
        Mem::new(bits)
    }
}

/// Allocates a `MEM` whose bits are pinned to the binary expansion of
/// `value`, LSB first.
pub struct Const;

impl Const {
    /// # Errors
    /// Returns [`GraphError::ConstValueOutOfRange`] if `value >= 2^n`.
    pub fn new(g: &mut ThreeColorGraph, value: u64, n: usize) -> Result<Mem> {
        let max = 1u64.checked_shl(n as u32).unwrap_or(0);
        if max != 0 && value >= max {
            return Err(GraphError::ConstValueOutOfRange { value, n, max });
        }
        let bits = (0..n)
            .map(|i| {
                let bit_set = (value >> i) & 1 == 1;
                g.add_vertex(Domain::single(Tri::from_bool(bit_set)))
            })
            .collect();
        Ok(Mem::new(bits))
    }
}

/// Allocates a `MEM` of `n` free bit vertices, each ranging over
/// `{Zero, One}`.
pub struct Var;

impl Var {
    pub fn new(g: &mut ThreeColorGraph, n: usize) -> Mem {
        let bits = (0..n).map(|_| g.add_vertex(Domain::BIT)).collect();
        Mem::new(bits)
    }
}
