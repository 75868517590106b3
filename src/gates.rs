//! Gate combinators: pure extensions of a [`ThreeColorGraph`] that encode
//! NOT, SWAP, AND and its derived gates, the IF-mask, and BREAK.
//!
//! Every combinator is a free function taking `&mut ThreeColorGraph` plus
//! the identifiers of its inputs, and returning the identifier(s) of its
//! outputs, rather than a method on a god object. No combinator inspects
//! whether the graph is currently colorable; construction only ever adds
//! vertices and edges.

use crate::error::{GraphError, Result};
use crate::topology::{ThreeColorGraph, VertexId};
use crate::tri::{Domain, Tri};

/// Connects two already-allocated, distinct vertices.
///
/// Every call site in this module passes fresh vertices it just allocated,
/// so this can never fail; `add_edge`'s `Result` exists for the public API
/// (which may be handed stale or attacker-controlled ids), not for gates
/// wiring their own internal scratch vertices.
fn connect(g: &mut ThreeColorGraph, u: VertexId, v: VertexId) {
    g.add_edge(u, v)
        .expect("gate combinators only ever connect distinct, freshly allocated vertices");
}

fn not_core(g: &mut ThreeColorGraph, x: VertexId, between: Domain) -> VertexId {
    let out = g.add_vertex(between);
    connect(g, x, out);
    out
}

/// `NOT(x)`: Boolean negation. Output domain is `{Zero, One}`.
pub fn not_gate(g: &mut ThreeColorGraph, x: VertexId) -> VertexId {
    not_core(g, x, Domain::BIT)
}

/// `NOT(x; between)`: negation generalized to translate between any
/// two-element tri-value set. Used internally by SWAP/AND/IF to realize
/// logic-level translation (e.g. `ONE <-> X`).
///
/// This is the only form of NOT this crate exposes; the fixed-domain
/// `not_gate` above is a thin convenience wrapper over it.
pub fn not_between(g: &mut ThreeColorGraph, x: VertexId, between: Domain) -> Result<VertexId> {
    if between.len() != 2 {
        return Err(GraphError::InvalidNotDomain(between.len()));
    }
    Ok(not_core(g, x, between))
}

fn validate_swap(from: [Tri; 2], to: [Tri; 2]) -> Result<()> {
    if from[0] == to[0] || from[1] == to[1] || from[1] != to[0] {
        return Err(GraphError::InvalidSwapDomains { from, to });
    }
    Ok(())
}

fn swap_core(g: &mut ThreeColorGraph, x: VertexId, from: [Tri; 2], to: [Tri; 2]) -> VertexId {
    let removed = from[0];
    let kept = from[1];
    let added = to[1];

    let output = g.add_vertex(Domain::pair(kept, added));

    let top = g.add_vertex(Domain::pair(removed, added));
    connect(g, x, top);
    connect(g, top, output);

    let bottom1 = g.add_vertex(Domain::pair(kept, added));
    let bottom2 = g.add_vertex(Domain::pair(kept, added));
    connect(g, x, bottom1);
    connect(g, bottom1, bottom2);
    connect(g, bottom2, output);

    output
}

/// `SWAP(x; from, to)`: translates a bit from tri-value set `from` to a
/// disjoint set `to`, mapping `from[0] -> to[0]` and `from[1] -> to[1]`.
/// Used at the logic-gate level to change which pair of tri-values a
/// vertex's two live states occupy.
///
/// # Errors
/// Returns [`GraphError::InvalidSwapDomains`] unless `from[0] != to[0]`,
/// `from[1] != to[1]`, and `from[1] == to[0]`.
pub fn swap(g: &mut ThreeColorGraph, x: VertexId, from: [Tri; 2], to: [Tri; 2]) -> Result<VertexId> {
    validate_swap(from, to)?;
    Ok(swap_core(g, x, from, to))
}

/// `AND(x, y)`: the keystone 2-input gate. All other 2-input gates below
/// are built from `AND` and `NOT`.
///
/// Builds three filter subgraphs (forbid-0-unless-both-1,
/// forbid-1-when-not-both-1, forbid-X-when-both-1), merges them into a
/// single filter input, then projects that input through a two-stage
/// flipper that collapses the encoding to a canonical `{Zero, One}` output.
pub fn and_gate(g: &mut ThreeColorGraph, x: VertexId, y: VertexId) -> VertexId {
    // R1: forbid output 0 unless both inputs are 1.
    let x_not = not_core(g, x, Domain::BIT);
    let x_1t_2f = swap_core(g, x_not, [Tri::Zero, Tri::One], [Tri::One, Tri::X]);
    let y_not = not_core(g, y, Domain::BIT);
    let y_1t_2f = swap_core(g, y_not, [Tri::Zero, Tri::One], [Tri::One, Tri::X]);
    let r1 = g.add_vertex(Domain::pair(Tri::Zero, Tri::X));
    connect(g, x_1t_2f, r1);
    connect(g, y_1t_2f, r1);

    // R2: forbid output 1 when both inputs are 1.
    let x_swapped = swap_core(g, x, [Tri::One, Tri::Zero], [Tri::Zero, Tri::X]);
    let x_2t_0f = not_core(g, x_swapped, Domain::pair(Tri::Zero, Tri::X));
    let y_swapped = swap_core(g, y, [Tri::One, Tri::Zero], [Tri::Zero, Tri::X]);
    let y_2t_0f = not_core(g, y_swapped, Domain::pair(Tri::Zero, Tri::X));
    let r2 = g.add_vertex(Domain::pair(Tri::One, Tri::X));
    connect(g, x_2t_0f, r2);
    connect(g, y_2t_0f, r2);

    // R3: forbid output X when both inputs are 1.
    let y_not2 = not_core(g, y, Domain::BIT);
    let r3 = g.add_free_vertex();
    connect(g, x, r3);
    connect(g, y_not2, r3);

    let filter_input = g.add_free_vertex();
    connect(g, r1, filter_input);
    connect(g, r2, filter_input);
    connect(g, r3, filter_input);

    let temp_flipper = g.add_vertex(Domain::pair(Tri::One, Tri::X));
    let output = g.add_vertex(Domain::BIT);
    connect(g, filter_input, temp_flipper);
    connect(g, temp_flipper, output);
    connect(g, filter_input, output);

    output
}

/// `NAND(x, y) = NOT(AND(x, y))`.
pub fn nand_gate(g: &mut ThreeColorGraph, x: VertexId, y: VertexId) -> VertexId {
    let a = and_gate(g, x, y);
    not_gate(g, a)
}

/// `NOR(x, y) = AND(NOT x, NOT y)`.
pub fn nor_gate(g: &mut ThreeColorGraph, x: VertexId, y: VertexId) -> VertexId {
    let nx = not_gate(g, x);
    let ny = not_gate(g, y);
    and_gate(g, nx, ny)
}

/// `OR(x, y) = NAND(NOT x, NOT y)`.
pub fn or_gate(g: &mut ThreeColorGraph, x: VertexId, y: VertexId) -> VertexId {
    let nx = not_gate(g, x);
    let ny = not_gate(g, y);
    nand_gate(g, nx, ny)
}

/// `XNOR(x, y) = NAND(OR(x, y), NAND(x, y))`.
pub fn xnor_gate(g: &mut ThreeColorGraph, x: VertexId, y: VertexId) -> VertexId {
    let or_xy = or_gate(g, x, y);
    let nand_xy = nand_gate(g, x, y);
    nand_gate(g, or_xy, nand_xy)
}

/// `XOR(x, y) = NOT(XNOR(x, y))`.
pub fn xor_gate(g: &mut ThreeColorGraph, x: VertexId, y: VertexId) -> VertexId {
    let x_xnor_y = xnor_gate(g, x, y);
    not_gate(g, x_xnor_y)
}

/// Gates a batch of vertices on a single `toggle`.
///
/// When `toggle = ONE`, each output mirrors its corresponding input (via
/// negation); when `toggle = ZERO`, outputs are decoupled from inputs and
/// may take any color, neutralising any downstream [`break_gate`]
/// constraints. `nodes` only determines how many outputs are produced:
/// inputs are not wired to outputs directly, the coupling is mediated
/// entirely by the two branch vertices derived from `toggle`.
pub fn if_layer(g: &mut ThreeColorGraph, nodes: &[VertexId], toggle: VertexId) -> Vec<VertexId> {
    let toggle_not = not_core(g, toggle, Domain::BIT);
    let toggle_not_swapped = swap_core(g, toggle_not, [Tri::Zero, Tri::One], [Tri::One, Tri::X]);
    let branch1 = not_core(g, toggle_not_swapped, Domain::pair(Tri::One, Tri::X));

    let toggle_swapped = swap_core(g, toggle, [Tri::One, Tri::Zero], [Tri::Zero, Tri::X]);
    let branch2 = not_core(g, toggle_swapped, Domain::pair(Tri::Zero, Tri::X));

    nodes
        .iter()
        .map(|_| {
            let out = g.add_free_vertex();
            connect(g, out, branch1);
            connect(g, out, branch2);
            out
        })
        .collect()
}

/// `BREAK(x)`: injects an unsatisfiability trap. If `x` is forced to
/// `ONE`, the graph becomes non-3-colorable; otherwise satisfiability is
/// unaffected. The sole mechanism by which a client rejects an assignment.
pub fn break_gate(g: &mut ThreeColorGraph, x: VertexId) {
    let trap = g.add_vertex(Domain::single(Tri::One));
    connect(g, x, trap);
}
