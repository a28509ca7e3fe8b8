//! A compact CSR (compressed sparse row) weighted undirected graph.
//!
//! The graph is immutable after construction and safe to share by reference
//! across any number of solver threads. Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets, monotone)
//! - `targets`: contiguous `u32` neighbor ids, one per directed slot
//! - `weights`: `u32` weights aligned index-for-index with `targets`
//!
//! Every undirected input edge `(u, v, w)` owns exactly two directed slots:
//! one for `v` inside `u`'s row with weight `w`, and one for `u` inside `v`'s
//! row with the same weight.

use core::fmt;
use core::ops::Range;

/// Largest accepted edge weight.
///
/// Kept below the solvers' unreachable sentinel so that a finite distance
/// plus any weight stays inside `u32` (asserted at compile time in the crate
/// root).
pub const MAX_WEIGHT: u32 = crate::INFINITY - 1;

/// An undirected input edge with a positive weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// One endpoint.
    pub u: usize,
    /// The other endpoint.
    pub v: usize,
    /// Edge weight, in `1..=MAX_WEIGHT`.
    pub weight: u32,
}

/// Rejected edge-list input.
///
/// Construction is all-or-nothing: any bad triple fails the whole build and
/// no partial graph is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not a valid vertex id.
    NodeOutOfRange {
        /// The offending vertex id.
        node: usize,
        /// Number of vertices in the graph under construction.
        nodes: usize,
    },
    /// An edge weight is zero or above [`MAX_WEIGHT`].
    BadWeight {
        /// The offending weight.
        weight: u32,
    },
    /// The vertex count does not fit the `u32` id space used for storage.
    TooManyNodes {
        /// The requested vertex count.
        nodes: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GraphError::NodeOutOfRange { node, nodes } => {
                write!(f, "vertex {node} out of range for {nodes} nodes")
            }
            GraphError::BadWeight { weight } => {
                write!(f, "edge weight {weight} outside 1..={MAX_WEIGHT}")
            }
            GraphError::TooManyNodes { nodes } => {
                write!(f, "{nodes} nodes exceeds the u32 vertex id space")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// An immutable CSR graph over `0..node_count()` vertex ids.
#[derive(Debug)]
pub struct Graph {
    offsets: Vec<usize>,
    targets: Vec<u32>,
    weights: Vec<u32>,
}

impl Graph {
    /// Builds a graph from an undirected edge list.
    ///
    /// Two passes: the first counts the directed slots each vertex owns (one
    /// per incident edge end), the second turns the counts into a prefix-sum
    /// offset table and places both directed entries of every edge through
    /// per-vertex placement cursors. Construction is sequential; it runs once
    /// and both solvers share the result read-only.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range endpoints, zero or oversized weights, and vertex
    /// counts that do not fit `u32` ids. No partial graph is returned.
    pub fn from_edges(nodes: usize, edges: &[Edge]) -> Result<Self, GraphError> {
        if nodes > u32::MAX as usize {
            return Err(GraphError::TooManyNodes { nodes });
        }

        let mut counts = vec![0usize; nodes];
        for e in edges {
            if e.u >= nodes {
                return Err(GraphError::NodeOutOfRange { node: e.u, nodes });
            }
            if e.v >= nodes {
                return Err(GraphError::NodeOutOfRange { node: e.v, nodes });
            }
            if e.weight == 0 || e.weight > MAX_WEIGHT {
                return Err(GraphError::BadWeight { weight: e.weight });
            }
            counts[e.u] += 1;
            counts[e.v] += 1;
        }

        let mut offsets = Vec::with_capacity(nodes + 1);
        offsets.push(0);
        let mut total = 0usize;
        for c in &mut counts {
            total += *c;
            offsets.push(total);
            // Reused as the per-vertex placement cursor in the second pass.
            *c = 0;
        }

        let mut targets = vec![0u32; total];
        let mut weights = vec![0u32; total];
        for e in edges {
            let slot = offsets[e.u] + counts[e.u];
            targets[slot] = e.v as u32;
            weights[slot] = e.weight;
            counts[e.u] += 1;

            let slot = offsets[e.v] + counts[e.v];
            targets[slot] = e.u as u32;
            weights[slot] = e.weight;
            counts[e.v] += 1;
        }

        Ok(Self {
            offsets,
            targets,
            weights,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn node_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len() - 1
    }

    /// Number of undirected edges as given in the input.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Number of directed adjacency slots (`2 * edge_count()`).
    #[inline]
    pub fn directed_edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Degree of `node` (directed slots it owns).
    pub fn degree(&self, node: usize) -> usize {
        let r = self.adjacency_range(node);
        r.end - r.start
    }

    /// The slot range holding `node`'s adjacency.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of bounds.
    #[inline]
    pub fn adjacency_range(&self, node: usize) -> Range<usize> {
        assert!(node < self.node_count(), "node {node} out of bounds");
        self.offsets[node]..self.offsets[node + 1]
    }

    /// Neighbor vertex stored in a directed slot.
    #[inline]
    pub fn target(&self, slot: usize) -> usize {
        self.targets[slot] as usize
    }

    /// Weight stored in a directed slot.
    #[inline]
    pub fn weight(&self, slot: usize) -> u32 {
        self.weights[slot]
    }

    /// Returns the neighbors of `node` as `(target, weight)` pairs.
    ///
    /// This returns a borrowing iterator to avoid allocating a `Vec`.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.adjacency_range(node)
            .map(move |slot| (self.target(slot), self.weight(slot)))
    }

    /// Checks whether a directed slot `from -> to` exists.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        assert!(to < self.node_count(), "node {to} out of bounds");
        self.neighbors(from).any(|(t, _)| t == to)
    }
}

#[cfg(test)]
mod tests;
mod traversal;
