//! Single-source shortest path solvers.
//!
//! Two implementations of the same contract over an immutable [`Graph`]:
//! the sequential array-based Dijkstra in [`sequential`] is the ground truth,
//! and the fork-join engine in [`parallel`] must reproduce its output exactly
//! for every graph, source, and thread count.
//!
//! Both return one `u32` distance per vertex; vertices with no path to the
//! source keep [`crate::INFINITY`].
//!
//! [`Graph`]: crate::graph::Graph

mod parallel;
mod sequential;

pub use parallel::{default_thread_count, shortest_paths_parallel, MAX_THREADS};
pub use sequential::shortest_paths;
