pub mod dfs;
pub mod graph;
pub mod kahn;
pub mod parser;
pub mod witness;

pub use dfs::DfsOutcome;
pub use graph::{DiGraph, GraphError};
pub use kahn::KahnOutcome;
pub use parser::{ParseError, load_matrix, parse_matrix};
pub use witness::CyclePath;
