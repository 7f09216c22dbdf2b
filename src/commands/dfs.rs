use anyhow::Result;
use cyclegraph::{DfsOutcome, dfs};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct DfsJsonOutput {
    algorithm: &'static str,
    cyclic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edges: Option<usize>,
}

pub fn run(file: &Path, iterative: bool, json: bool) -> Result<()> {
    let graph = super::load_graph(file)?;
    log::info!(
        "running DFS detector on {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    let outcome = if iterative {
        dfs::detect_iterative(&graph)
    } else {
        dfs::detect(&graph)
    };

    match outcome {
        DfsOutcome::Cyclic { path } => {
            if json {
                let output = DfsJsonOutput {
                    algorithm: "dfs",
                    cyclic: true,
                    path: Some(path.vertices().to_vec()),
                    edges: Some(path.edge_count()),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("Graph is cyclic.");
                println!("Cycle: {path}");
                println!("Cycle length: {} edges", path.edge_count());
            }
        }
        DfsOutcome::Acyclic => {
            if json {
                let output = DfsJsonOutput {
                    algorithm: "dfs",
                    cyclic: false,
                    path: None,
                    edges: None,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("Graph is acyclic (no cycle found).");
            }
        }
    }
    Ok(())
}
