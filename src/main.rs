use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "cyg",
    version,
    about = "Detect cycles in directed graphs given as adjacency matrices"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Depth-first search with back-edge detection
    Dfs {
        /// Matrix file: vertex count, then an n x n 0/1 matrix ("-" for stdin)
        file: PathBuf,
        /// Use the explicit-stack traversal instead of recursion
        #[arg(long)]
        iterative: bool,
        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// Kahn's algorithm: topological peeling plus cycle refinement
    Kahn {
        /// Matrix file: vertex count, then an n x n 0/1 matrix ("-" for stdin)
        file: PathBuf,
        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// Run both detectors on the built-in sample graph 0 -> 1 -> 2 -> 0
    Sample {
        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Dfs {
            file,
            iterative,
            json,
        } => commands::dfs::run(&file, iterative, json),
        Command::Kahn { file, json } => commands::kahn::run(&file, json),
        Command::Sample { json } => commands::sample::run(json),
    }
}
