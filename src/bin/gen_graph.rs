//! Random graph generator: writes a weighted edge list in the text format
//! the other binaries read.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wavefront::format::write_graph;
use wavefront::gen::{random_edges, GenOptions};

#[derive(Parser)]
#[command(name = "gen_graph")]
#[command(about = "Generate a random weighted graph file", long_about = None)]
struct Cli {
    /// Number of vertices
    nodes: usize,

    /// Number of undirected edges (no duplicates or self loops)
    edges: usize,

    /// Largest edge weight; weights are uniform in 1..=max_weight
    max_weight: u32,

    /// Output file path
    output: PathBuf,

    /// Seed for reproducible output; drawn from entropy if omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let opts = GenOptions {
        nodes: cli.nodes,
        edges: cli.edges,
        max_weight: cli.max_weight,
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let edges = random_edges(&opts, &mut rng)?;

    let file =
        File::create(&cli.output).with_context(|| format!("creating `{}`", cli.output.display()))?;
    write_graph(BufWriter::new(file), cli.nodes, &edges)
        .with_context(|| format!("writing `{}`", cli.output.display()))?;

    println!(
        "Weighted graph with {} nodes and {} edges generated in {}.",
        cli.nodes,
        cli.edges,
        cli.output.display()
    );
    Ok(())
}
