//! Reports whether a graph file describes a fully connected graph.

use std::env;

use anyhow::{bail, Context, Result};

use wavefront::format;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        bail!(
            "usage: {} <input_file>",
            args.first().map_or("connectivity", String::as_str)
        );
    }

    let graph = format::read_graph_file(&args[1])
        .with_context(|| format!("loading graph from `{}`", args[1]))?;

    if graph.is_connected() {
        println!("The graph is fully connected.");
    } else {
        println!("The graph is not fully connected.");
    }
    Ok(())
}
