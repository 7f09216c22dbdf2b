pub mod dfs;
pub mod kahn;
pub mod sample;

use anyhow::{Context, Result};
use cyclegraph::DiGraph;
use std::io::Read;
use std::path::Path;

/// Loads an adjacency matrix from a file, or from stdin when the path is "-".
/// Malformed input is rejected here, before any algorithm runs.
pub(crate) fn load_graph(path: &Path) -> Result<DiGraph> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading adjacency matrix from stdin")?;
        Ok(cyclegraph::parse_matrix(&text)?)
    } else {
        let graph = cyclegraph::load_matrix(path)
            .with_context(|| format!("loading adjacency matrix from {}", path.display()))?;
        Ok(graph)
    }
}
