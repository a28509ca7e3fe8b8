//! Sequential array-based Dijkstra, the correctness oracle.

use crate::graph::Graph;
use crate::INFINITY;

/// Computes shortest path distances from `source` to every vertex.
///
/// Classic O(V² + E) Dijkstra without a priority queue: each round linearly
/// scans the unvisited vertices for the smallest tentative distance, finalizes
/// it, and relaxes its neighbors. The scan uses strict `<`, so among vertices
/// with equal minimum distance the lowest index is finalized first; the
/// parallel solver reproduces exactly this order.
///
/// Unreachable vertices keep [`INFINITY`].
///
/// # Panics
///
/// Panics if `source` is out of bounds.
pub fn shortest_paths(graph: &Graph, source: usize) -> Vec<u32> {
    let n = graph.node_count();
    assert!(source < n, "source {source} out of bounds for {n} nodes");

    let mut dist = vec![INFINITY; n];
    let mut visited = vec![false; n];
    dist[source] = 0;

    for _ in 0..n {
        let mut best = INFINITY;
        let mut chosen = None;
        for v in 0..n {
            if !visited[v] && dist[v] < best {
                best = dist[v];
                chosen = Some(v);
            }
        }

        // Every remaining vertex is unreachable.
        let Some(u) = chosen else { break };
        visited[u] = true;

        for slot in graph.adjacency_range(u) {
            let v = graph.target(slot);
            if visited[v] {
                continue;
            }
            // Cannot wrap: `best < INFINITY` and weights are capped (see the
            // compile-time assertions in the crate root).
            let candidate = best + graph.weight(slot);
            if candidate < dist[v] {
                dist[v] = candidate;
            }
        }
    }

    dist
}
