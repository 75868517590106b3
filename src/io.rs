//! File I/O utilities for graph serialization.
//!
//! This module provides functions for reading and writing
//! [`ThreeColorGraph`]s to JSON via a `FileFormat`-dispatched read/write
//! pair.

use crate::error::{GraphError, Result};
use crate::topology::ThreeColorGraph;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// JSON format (human-readable).
    Json,
    /// Compact JSON format (no pretty-printing).
    JsonCompact,
}

impl FileFormat {
    /// Detect file format from file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(FileFormat::Json),
            _ => None,
        }
    }
}

/// Write a graph to a file.
///
/// # Example
///
/// ```no_run
/// use npcompute::io::{write_graph, FileFormat};
/// use npcompute::topology::ThreeColorGraph;
///
/// let graph = ThreeColorGraph::new();
/// write_graph(&graph, "graph.json", FileFormat::Json).unwrap();
/// ```
pub fn write_graph<P: AsRef<Path>>(graph: &ThreeColorGraph, path: P, format: FileFormat) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| GraphError::Io(format!("failed to create file: {e}")))?;
    let writer = BufWriter::new(file);

    match format {
        FileFormat::Json => serde_json::to_writer_pretty(writer, graph).map_err(|e| GraphError::Io(format!("failed to write JSON: {e}"))),
        FileFormat::JsonCompact => serde_json::to_writer(writer, graph).map_err(|e| GraphError::Io(format!("failed to write JSON: {e}"))),
    }
}

/// Read a graph from a file.
pub fn read_graph<P: AsRef<Path>>(path: P, _format: FileFormat) -> Result<ThreeColorGraph> {
    let file = File::open(path.as_ref()).map_err(|e| GraphError::Io(format!("failed to open file: {e}")))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| GraphError::Io(format!("failed to parse JSON: {e}")))
}

/// Serialize a graph to a pretty-printed JSON string.
pub fn to_json(graph: &ThreeColorGraph) -> Result<String> {
    serde_json::to_string_pretty(graph).map_err(|e| GraphError::Io(format!("failed to serialize: {e}")))
}

/// Deserialize a graph from a JSON string.
pub fn from_json(json: &str) -> Result<ThreeColorGraph> {
    serde_json::from_str(json).map_err(|e| GraphError::Io(format!("failed to parse JSON: {e}")))
}

/// Read a file to a string.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut file = File::open(path.as_ref()).map_err(|e| GraphError::Io(format!("failed to open file: {e}")))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| GraphError::Io(format!("failed to read file: {e}")))?;
    Ok(contents)
}

/// Write a string to a file.
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let mut file = File::create(path.as_ref()).map_err(|e| GraphError::Io(format!("failed to create file: {e}")))?;
    file.write_all(contents.as_bytes()).map_err(|e| GraphError::Io(format!("failed to write file: {e}")))?;
    Ok(())
}
