//! The recursive adder.

use crate::error::{GraphError, Result};
use crate::gates::{and_gate, or_gate, xor_gate};
use crate::registers::Mem;
use crate::topology::{ThreeColorGraph, VertexId};

/// `ADD(a, b, carry_in)`: adds two equal-width registers, returning the
/// sum register (same width as the operands) and the final carry-out.
///
/// # Errors
/// Returns [`GraphError::WidthMismatch`] if `a.len() != b.len()`.
///
/// # Design note
/// The base case (`n == 1`) is a textbook half/full adder. The recursive
/// case splits both operands into lower/upper halves, adds the lower
/// halves first, then threads the resulting carry into the addition of
/// the upper halves at every recursion level, regardless of `n`, before
/// merging the two partial sums lower-half-first so the result stays
/// LSB-first. This ripple-carry threading is what makes the joint
/// (sum, carry-out) reading equal `a + b mod 2^(n+1)` at every width.
pub fn add(g: &mut ThreeColorGraph, a: &Mem, b: &Mem, carry_in: Option<VertexId>) -> Result<(Mem, VertexId)> {
    if a.len() != b.len() {
        return Err(GraphError::WidthMismatch { a: a.len(), b: b.len() });
    }
    Ok(add_rec(g, a, b, carry_in))
}

fn add_rec(g: &mut ThreeColorGraph, a: &Mem, b: &Mem, carry_in: Option<VertexId>) -> (Mem, VertexId) {
    let n = a.len();
    debug_assert_eq!(n, b.len());

    if n == 1 {
        let a0 = a.bits()[0];
        let b0 = b.bits()[0];
        return match carry_in {
            None => {
                let sum = xor_gate(g, a0, b0);
                let carry = and_gate(g, a0, b0);
                (Mem::new(vec![sum]), carry)
            }
            Some(c) => {
                let a_xor_b = xor_gate(g, a0, b0);
                let sum = xor_gate(g, a_xor_b, c);
                let a_and_b = and_gate(g, a0, b0);
                let a_and_c = and_gate(g, a0, c);
                let c_and_b = and_gate(g, c, b0);
                let carry = or_gate(g, or_gate(g, a_and_b, a_and_c), c_and_b);
                (Mem::new(vec![sum]), carry)
            }
        };
    }

    let (a_lower, a_upper) = (a.lower_half(), a.upper_half());
    let (b_lower, b_upper) = (b.lower_half(), b.upper_half());

    let (sum_lower, carry_mid) = add_rec(g, &a_lower, &b_lower, carry_in);
    let (sum_upper, carry_out) = add_rec(g, &a_upper, &b_upper, Some(carry_mid));

    (sum_lower.merge(&sum_upper), carry_out)
}
