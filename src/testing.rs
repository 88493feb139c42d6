//! Crate-internal test support: deterministic graph builders over `u32` node
//! payloads and a consistency checker asserting the store's structural
//! invariants through its public surface.

use rand::Rng;

use crate::store::HashGraph;

/// Store used by most tests: `u32` nodes numbered in creation order, edges
/// carrying their endpoint pair in connect-argument order.
pub(crate) type TestGraph = HashGraph<u32, (u32, u32)>;

pub(crate) fn counter_graph() -> TestGraph {
    let mut next = 0_u32;
    HashGraph::new(
        move || {
            let node = next;
            next += 1;
            node
        },
        |&a, &b| (a, b),
    )
}

/// Path graph over nodes `0..n` with edges `(0,1), (1,2), ...`.
pub(crate) fn path_graph(n: u32) -> (TestGraph, Vec<u32>) {
    let mut graph = counter_graph();
    let nodes: Vec<u32> = (0..n).map(|_| graph.create_node()).collect();
    for window in nodes.windows(2) {
        graph.connect(&window[0], &window[1]).unwrap();
    }
    (graph, nodes)
}

/// Random graph over `n` nodes built from `attempts` uniformly sampled connect
/// attempts; self-pairs and already-connected pairs are skipped.
pub(crate) fn random_graph<R: Rng>(
    rng: &mut R,
    n: u32,
    attempts: usize,
) -> (TestGraph, Vec<u32>) {
    let mut graph = counter_graph();
    let nodes: Vec<u32> = (0..n).map(|_| graph.create_node()).collect();
    for _ in 0..attempts {
        let a = nodes[rng.random_range(0..nodes.len())];
        let b = nodes[rng.random_range(0..nodes.len())];
        graph.try_connect(&a, &b);
    }
    (graph, nodes)
}

/// Asserts the structural invariants of an undirected simple graph:
/// symmetric connectivity, no self-loops, adjacency/edge agreement in both
/// directions and endpoint presence for every edge.
pub(crate) fn assert_consistent(graph: &TestGraph) {
    let nodes: Vec<u32> = graph.nodes().copied().collect();
    assert_eq!(nodes.len(), graph.number_of_nodes());

    let mut degree_sum = 0;
    for node in &nodes {
        for (edge, neighbor) in graph.edges_with_neighbors_of(node) {
            assert_ne!(node, neighbor);
            assert!(graph.contains_node(neighbor));
            assert!(graph.are_connected(node, neighbor));
            assert!(graph.are_connected(neighbor, node));
            assert_eq!(graph.edge_between(node, neighbor), Some(edge));
            assert_eq!(graph.edge_between(neighbor, node), Some(edge));
            assert_eq!(graph.other_endpoint(edge, node), Ok(neighbor));
        }
        degree_sum += graph.degree_of(node);
    }
    assert_eq!(degree_sum, 2 * graph.number_of_edges());

    for edge in graph.edges() {
        let (a, b) = graph.endpoints_of(edge).unwrap();
        assert!(graph.contains_node(a));
        assert!(graph.contains_node(b));
        assert_eq!(graph.edge_between(a, b), Some(edge));
    }
}
