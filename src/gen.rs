//! Random weighted graph generation for test inputs.
//!
//! Produces simple graphs: no self loops, no duplicate edges. Deterministic
//! under a seeded RNG, which the equivalence tests rely on.

use core::fmt;
use std::collections::HashSet;

use rand::Rng;

use crate::graph::{Edge, MAX_WEIGHT};

/// Shape of the graph to generate.
#[derive(Debug, Clone, Copy)]
pub struct GenOptions {
    /// Number of vertices.
    pub nodes: usize,
    /// Number of undirected edges.
    pub edges: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: u32,
}

/// Rejected generator options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    /// More edges requested than a simple graph on `nodes` vertices can hold.
    TooManyEdges {
        /// Requested edge count.
        requested: usize,
        /// `nodes * (nodes - 1) / 2`.
        max: usize,
    },
    /// `max_weight` is zero or above [`MAX_WEIGHT`].
    BadMaxWeight {
        /// The offending bound.
        max_weight: u32,
    },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GenError::TooManyEdges { requested, max } => {
                write!(f, "{requested} edges requested, a simple graph holds at most {max}")
            }
            GenError::BadMaxWeight { max_weight } => {
                write!(f, "max weight {max_weight} outside 1..={MAX_WEIGHT}")
            }
        }
    }
}

impl std::error::Error for GenError {}

/// Generates a random simple edge list.
///
/// Rejection-samples vertex pairs until the requested count is reached,
/// skipping self loops and already-present pairs (tracked as normalized
/// unordered pairs). Weights are uniform in `1..=max_weight`.
///
/// # Errors
///
/// Fails if the requested edge count exceeds the simple-graph maximum or the
/// weight bound is out of range.
pub fn random_edges<R: Rng>(opts: &GenOptions, rng: &mut R) -> Result<Vec<Edge>, GenError> {
    let max = opts.nodes.saturating_mul(opts.nodes.saturating_sub(1)) / 2;
    if opts.edges > max {
        return Err(GenError::TooManyEdges {
            requested: opts.edges,
            max,
        });
    }
    if opts.max_weight == 0 || opts.max_weight > MAX_WEIGHT {
        return Err(GenError::BadMaxWeight {
            max_weight: opts.max_weight,
        });
    }

    let mut seen = HashSet::with_capacity(opts.edges);
    let mut edges = Vec::with_capacity(opts.edges);
    while edges.len() < opts.edges {
        let u = rng.gen_range(0..opts.nodes);
        let v = rng.gen_range(0..opts.nodes);
        if u == v {
            continue;
        }
        if !seen.insert((u.min(v), u.max(v))) {
            continue;
        }
        let weight = rng.gen_range(1..=opts.max_weight);
        edges.push(Edge { u, v, weight });
    }

    Ok(edges)
}
