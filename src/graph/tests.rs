//! Tests for CSR construction and traversal.

use super::*;

fn edge(u: usize, v: usize, weight: u32) -> Edge {
    Edge { u, v, weight }
}

#[test]
fn test_csr_layout_counts() {
    // 0 - 1 (2)
    // 1 - 2 (3)
    // 0 - 2 (7)
    let edges = [edge(0, 1, 2), edge(1, 2, 3), edge(0, 2, 7)];
    let graph = Graph::from_edges(3, &edges).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.directed_edge_count(), 6);

    assert_eq!(graph.degree(0), 2);
    assert_eq!(graph.degree(1), 2);
    assert_eq!(graph.degree(2), 2);

    assert_eq!(graph.adjacency_range(0), 0..2);
    assert_eq!(graph.adjacency_range(1), 2..4);
    assert_eq!(graph.adjacency_range(2), 4..6);
}

#[test]
fn test_reciprocal_entries_share_weight() {
    let edges = [edge(0, 3, 9), edge(1, 3, 4)];
    let graph = Graph::from_edges(4, &edges).unwrap();

    // Each input edge appears once in each endpoint's row, same weight.
    let n0: Vec<_> = graph.neighbors(0).collect();
    assert_eq!(n0, vec![(3, 9)]);
    let n3: Vec<_> = graph.neighbors(3).collect();
    assert_eq!(n3, vec![(0, 9), (1, 4)]);

    assert!(graph.has_edge(3, 1));
    assert!(graph.has_edge(1, 3));
    assert!(!graph.has_edge(0, 1));
}

#[test]
fn test_construction_order_preserved() {
    // Rows keep the order edges were listed in; no sort is applied.
    let edges = [edge(0, 2, 5), edge(0, 1, 6)];
    let graph = Graph::from_edges(3, &edges).unwrap();

    let n0: Vec<_> = graph.neighbors(0).collect();
    assert_eq!(n0, vec![(2, 5), (1, 6)]);
}

#[test]
fn test_empty_graph() {
    let graph = Graph::from_edges(0, &[]).unwrap();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_connected());
}

#[test]
fn test_isolated_vertices() {
    let graph = Graph::from_edges(5, &[]).unwrap();
    assert_eq!(graph.node_count(), 5);
    for v in 0..5 {
        assert_eq!(graph.degree(v), 0);
        assert_eq!(graph.neighbors(v).count(), 0);
    }
    assert!(!graph.is_connected());
}

#[test]
fn test_self_loop_accepted() {
    // A self loop owns both of its directed slots on the same row.
    let graph = Graph::from_edges(2, &[edge(0, 0, 3)]).unwrap();
    assert_eq!(graph.degree(0), 2);
    let n0: Vec<_> = graph.neighbors(0).collect();
    assert_eq!(n0, vec![(0, 3), (0, 3)]);
}

#[test]
fn test_rejects_out_of_range_endpoint() {
    let err = Graph::from_edges(3, &[edge(0, 3, 1)]).unwrap_err();
    assert_eq!(err, GraphError::NodeOutOfRange { node: 3, nodes: 3 });

    let err = Graph::from_edges(3, &[edge(7, 0, 1)]).unwrap_err();
    assert_eq!(err, GraphError::NodeOutOfRange { node: 7, nodes: 3 });
}

#[test]
fn test_rejects_bad_weights() {
    let err = Graph::from_edges(2, &[edge(0, 1, 0)]).unwrap_err();
    assert_eq!(err, GraphError::BadWeight { weight: 0 });

    let err = Graph::from_edges(2, &[edge(0, 1, MAX_WEIGHT + 1)]).unwrap_err();
    assert_eq!(err, GraphError::BadWeight { weight: MAX_WEIGHT + 1 });

    assert!(Graph::from_edges(2, &[edge(0, 1, MAX_WEIGHT)]).is_ok());
}

#[test]
fn test_reachable_count() {
    // 0 - 1 - 2    3 - 4
    let edges = [edge(0, 1, 1), edge(1, 2, 1), edge(3, 4, 1)];
    let graph = Graph::from_edges(5, &edges).unwrap();

    assert_eq!(graph.reachable_count(0), 3);
    assert_eq!(graph.reachable_count(2), 3);
    assert_eq!(graph.reachable_count(3), 2);
    assert!(!graph.is_connected());
}

#[test]
fn test_connected_cycle() {
    let edges = [edge(0, 1, 1), edge(1, 2, 1), edge(2, 0, 1)];
    let graph = Graph::from_edges(3, &edges).unwrap();
    assert!(graph.is_connected());
}
