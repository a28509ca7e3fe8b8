//! Verification harness: runs both solvers on the same graph and source,
//! diffs their outputs, and reports timings.
//!
//! Usage: `compare <input_file> <source_node>`. Exits 1 on usage or input
//! errors; a solver mismatch is reported on stdout, not a failure exit.

use std::env;
use std::time::Instant;

use anyhow::{bail, Context, Result};

use wavefront::{
    default_thread_count, format, shortest_paths, shortest_paths_parallel, INFINITY,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        bail!(
            "usage: {} <input_file> <source_node>",
            args.first().map_or("compare", String::as_str)
        );
    }

    let graph = format::read_graph_file(&args[1])
        .with_context(|| format!("loading graph from `{}`", args[1]))?;
    let source: usize = args[2]
        .parse()
        .with_context(|| format!("source node `{}` is not a vertex id", args[2]))?;
    if source >= graph.node_count() {
        bail!(
            "source node {source} out of range for {} nodes",
            graph.node_count()
        );
    }

    let threads = default_thread_count();
    println!(
        "Graph loaded: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    println!("Using {threads} threads for parallel execution");

    let start = Instant::now();
    let sequential = shortest_paths(&graph, source);
    let sequential_time = start.elapsed();

    let start = Instant::now();
    let parallel = shortest_paths_parallel(&graph, source, threads);
    let parallel_time = start.elapsed();

    println!();
    println!(
        "Sequential execution time: {:.6} seconds",
        sequential_time.as_secs_f64()
    );
    println!(
        "Parallel execution time: {:.6} seconds",
        parallel_time.as_secs_f64()
    );
    println!(
        "Speedup: {:.2}x",
        sequential_time.as_secs_f64() / parallel_time.as_secs_f64()
    );

    let mut verified = true;
    for v in 0..graph.node_count() {
        if sequential[v] != parallel[v] {
            println!(
                "Mismatch at node {v}: sequential={}, parallel={}",
                sequential[v], parallel[v]
            );
            verified = false;
        }
    }
    println!(
        "Results verification: {}",
        if verified { "PASSED" } else { "FAILED" }
    );

    if graph.node_count() <= 20 {
        println!();
        println!("Shortest distances from node {source}:");
        for (v, &d) in parallel.iter().enumerate() {
            if d == INFINITY {
                println!("Node {v}: INF");
            } else {
                println!("Node {v}: {d}");
            }
        }
    }

    Ok(())
}
