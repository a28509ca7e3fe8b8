//! # `wavefront` - Parallel single-source shortest paths
//!
//! Computes single-source shortest path distances on a weighted undirected
//! graph, twice: with a sequential array-based Dijkstra baseline and with a
//! shared-memory parallel engine. The two are required to agree element-wise
//! for every graph, source, and thread count; the `compare` binary diffs them
//! and reports timings.
//!
//! ## Architecture
//!
//! - [`graph`]: an immutable compressed-sparse-row (CSR) representation built
//!   once from an edge list. Three parallel arrays (offsets, targets, weights)
//!   keep adjacency contiguous and index-addressed, which is what makes both
//!   solver phases cheap to partition across worker threads.
//! - [`solve`]: the two solvers. The parallel engine runs a fixed pool of
//!   scoped OS threads in lockstep: a partitioned minimum search merged under
//!   a single lock with a `(distance, index)` total order, then a dynamically
//!   chunked relaxation of the chosen vertex's adjacency using a
//!   compare-exchange lowering loop on each distance slot.
//! - [`format`]: the `nodes edges` / `src dst weight` text file format.
//! - [`gen`]: a random graph generator for producing test inputs.
//!
//! ## Determinism
//!
//! Ties during the minimum search are broken toward the lowest vertex index,
//! both in each worker's local scan and in the merge, so the parallel engine
//! finalizes vertices in exactly the order the sequential scan would. Distance
//! slots are only ever lowered through a compare-exchange retry loop, so no
//! interleaving of relaxation writes can lose an update.
//!
//! ## Example
//!
//! ```rust
//! use wavefront::{shortest_paths, shortest_paths_parallel, Edge, Graph};
//!
//! let edges = [
//!     Edge { u: 0, v: 1, weight: 2 },
//!     Edge { u: 1, v: 2, weight: 2 },
//!     Edge { u: 2, v: 3, weight: 2 },
//!     Edge { u: 0, v: 3, weight: 9 },
//! ];
//! let graph = Graph::from_edges(4, &edges).unwrap();
//!
//! let sequential = shortest_paths(&graph, 0);
//! let parallel = shortest_paths_parallel(&graph, 0, 4);
//!
//! assert_eq!(sequential, vec![0, 2, 4, 6]);
//! assert_eq!(sequential, parallel);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod format;
pub mod gen;
pub mod graph;
pub mod solve;

pub use graph::{Edge, Graph, GraphError, MAX_WEIGHT};
pub use solve::{default_thread_count, shortest_paths, shortest_paths_parallel, MAX_THREADS};

/// Sentinel distance for unreachable vertices.
///
/// A large finite constant rather than `u32::MAX`: adding any valid edge
/// weight to a finite distance must not wrap (see the layout assertions
/// below), so relaxation can use plain integer addition.
pub const INFINITY: u32 = 1_000_000_000;

// Compile-time arithmetic-safety claims.
const _: () = {
    // A finite distance is strictly below `INFINITY` and weights are capped at
    // `MAX_WEIGHT`, so every relaxation candidate fits in `u32` without wrapping.
    assert!((INFINITY as u64) + (MAX_WEIGHT as u64) <= u32::MAX as u64);
    assert!(MAX_WEIGHT < INFINITY);
    assert!(MAX_WEIGHT > 0);
};
