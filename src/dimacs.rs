//! DIMACS `.col` export.
//!
//! Internal vertex ids are 0-origin throughout this crate; DIMACS `.col`
//! is conventionally 1-origin, so renumbering happens only here, at the
//! point of emission.

use crate::error::{GraphError, Result};
use crate::topology::ThreeColorGraph;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Renders `g` as a DIMACS `.col` document.
///
/// `name`, if given, is written as a leading comment line (`c ...`).
pub fn emit_dimacs(g: &ThreeColorGraph, name: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(name) = name {
        let _ = writeln!(out, "c {name}");
    }
    let _ = writeln!(out, "p edge {} {}", g.num_vertices(), g.num_edges());
    for (u, v) in g.edges() {
        let _ = writeln!(out, "e {} {}", u + 1, v + 1);
    }
    out
}

/// Renders and writes `g` to `path` as a DIMACS `.col` file.
///
/// # Errors
/// Returns [`GraphError::Io`] if the file cannot be written.
pub fn write_dimacs(g: &ThreeColorGraph, path: impl AsRef<Path>, name: Option<&str>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GraphError::Io(format!("{}: {e}", parent.display())))?;
    }
    fs::write(path, emit_dimacs(g, name)).map_err(|e| GraphError::Io(format!("{}: {e}", path.display())))
}

/// Parses a DIMACS `.col` document back into a vertex count and a set of
/// 0-origin edges. Not part of the library's public export surface;
/// exists to make the emitter's round trip testable without hand-decoding
/// DIMACS text in every test.
///
/// # Errors
/// Returns [`GraphError::InvalidDimacs`] if the `p edge V E` header is
/// missing or malformed, or an `e` line references a vertex outside
/// `1..=V`.
pub fn parse_dimacs(input: &str) -> Result<(usize, Vec<(usize, usize)>)> {
    let mut num_vertices = None;
    let mut edges = Vec::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("p") => {
                let kind = fields.next();
                let v: usize = fields
                    .next()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| GraphError::InvalidDimacs(format!("bad p line: {line}")))?;
                if kind != Some("edge") {
                    return Err(GraphError::InvalidDimacs(format!("unsupported problem type in: {line}")));
                }
                num_vertices = Some(v);
            }
            Some("e") => {
                let u: usize = fields
                    .next()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| GraphError::InvalidDimacs(format!("bad e line: {line}")))?;
                let v: usize = fields
                    .next()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| GraphError::InvalidDimacs(format!("bad e line: {line}")))?;
                let n = num_vertices.ok_or_else(|| GraphError::InvalidDimacs("e line before p line".to_string()))?;
                if u == 0 || v == 0 || u > n || v > n {
                    return Err(GraphError::InvalidDimacs(format!("edge references out-of-range vertex: {line}")));
                }
                edges.push((u - 1, v - 1));
            }
            _ => return Err(GraphError::InvalidDimacs(format!("unrecognized line: {line}"))),
        }
    }

    let n = num_vertices.ok_or_else(|| GraphError::InvalidDimacs("missing p edge header".to_string()))?;
    Ok((n, edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_has_correct_header_and_edge_count() {
        let mut g = ThreeColorGraph::new();
        let (a, b) = (g.add_free_vertex(), g.add_free_vertex());
        g.add_edge(a, b).unwrap();
        let text = emit_dimacs(&g, Some("test graph"));
        assert!(text.starts_with("c test graph\n"));
        assert!(text.contains("p edge 5 4\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with('e')).count(), 4);
    }

    #[test]
    fn emit_uses_1_origin_vertex_ids() {
        let g = ThreeColorGraph::new();
        let text = emit_dimacs(&g, None);
        for line in text.lines().filter(|l| l.starts_with('e')) {
            for tok in line.split_whitespace().skip(1) {
                let id: usize = tok.parse().unwrap();
                assert!(id >= 1);
            }
        }
    }

    #[test]
    fn parse_roundtrips_vertex_and_edge_counts() {
        let mut g = ThreeColorGraph::new();
        let (a, b) = (g.add_free_vertex(), g.add_free_vertex());
        g.add_edge(a, b).unwrap();
        g.add_edge(a, 0).unwrap();

        let text = emit_dimacs(&g, Some("roundtrip"));
        let (n, mut edges) = parse_dimacs(&text).unwrap();
        assert_eq!(n, g.num_vertices());

        let mut expected = g.edges();
        expected.sort();
        edges.sort();
        assert_eq!(edges, expected);
    }

    #[test]
    fn parse_rejects_missing_header() {
        assert!(parse_dimacs("e 1 2\n").is_err());
    }

    #[test]
    fn parse_rejects_out_of_range_edge() {
        assert!(parse_dimacs("p edge 2 1\ne 1 3\n").is_err());
    }
}
