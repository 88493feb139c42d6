//! Single-step set growth and fixed-point flood fill.
//!
//! Both come in two flavors that differ only in what the spread predicate
//! inspects: the *candidate node* about to be included, or the *edge* being
//! traversed to reach it.

use std::hash::Hash;

use fxhash::FxHashSet;

use super::GraphOps;
use crate::store::HashGraph;

impl<N> GraphOps<N>
where
    N: Clone + Eq + Hash,
{
    /// One expansion step: every seed node, plus every neighbor of a seed node
    /// for which `include` holds.
    ///
    /// Growth is **not** idempotent — applying it to its own output can keep
    /// adding a new ring of frontier nodes. Use [`GraphOps::flood_fill`] for
    /// the fixed point.
    /// ** Panics if a seed node is not in the graph **
    pub fn grow<E, P>(
        &self,
        graph: &HashGraph<N, E>,
        seed: &FxHashSet<N>,
        mut include: P,
    ) -> FxHashSet<N>
    where
        E: Clone + Eq + Hash,
        P: FnMut(&N) -> bool,
    {
        let mut result = FxHashSet::default();
        for node in seed {
            result.insert(node.clone());
            for neighbor in graph.neighbors_of(node) {
                if include(neighbor) {
                    result.insert(neighbor.clone());
                }
            }
        }
        result
    }

    /// One expansion step over edges: every seed node, plus every neighbor
    /// reached via an incident edge for which `spread` holds.
    /// ** Panics if a seed node is not in the graph **
    pub fn grow_by_edges<E, P>(
        &self,
        graph: &HashGraph<N, E>,
        seed: &FxHashSet<N>,
        mut spread: P,
    ) -> FxHashSet<N>
    where
        E: Clone + Eq + Hash,
        P: FnMut(&E) -> bool,
    {
        let mut result = FxHashSet::default();
        for node in seed {
            result.insert(node.clone());
            for (edge, neighbor) in graph.edges_with_neighbors_of(node) {
                if spread(edge) {
                    result.insert(neighbor.clone());
                }
            }
        }
        result
    }

    /// The predicate-connected closure of `seed`: grows the set until its size
    /// stops increasing.
    ///
    /// The result contains every node reachable from a seed node by repeatedly
    /// hopping to neighbors satisfying `include` — and the seed nodes
    /// themselves, whether or not the predicate holds for them. Running
    /// `flood_fill` on its own output with the same predicate returns the same
    /// set. Terminates because the node set is finite and growth is monotone.
    /// ** Panics if a seed node is not in the graph **
    pub fn flood_fill<E, P>(
        &self,
        graph: &HashGraph<N, E>,
        seed: impl IntoIterator<Item = N>,
        mut include: P,
    ) -> FxHashSet<N>
    where
        E: Clone + Eq + Hash,
        P: FnMut(&N) -> bool,
    {
        let mut result: FxHashSet<N> = seed.into_iter().collect();
        loop {
            let grown = self.grow(graph, &result, &mut include);
            if grown.len() == result.len() {
                return grown;
            }
            result = grown;
        }
    }

    /// The edge-predicate-connected closure of `seed`; see
    /// [`GraphOps::flood_fill`].
    /// ** Panics if a seed node is not in the graph **
    pub fn flood_fill_by_edges<E, P>(
        &self,
        graph: &HashGraph<N, E>,
        seed: impl IntoIterator<Item = N>,
        mut spread: P,
    ) -> FxHashSet<N>
    where
        E: Clone + Eq + Hash,
        P: FnMut(&E) -> bool,
    {
        let mut result: FxHashSet<N> = seed.into_iter().collect();
        loop {
            let grown = self.grow_by_edges(graph, &result, &mut spread);
            if grown.len() == result.len() {
                return grown;
            }
            result = grown;
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::path_graph;

    fn set_of(nodes: &[u32]) -> FxHashSet<u32> {
        nodes.iter().copied().collect()
    }

    #[test]
    fn grow_adds_one_ring() {
        let (graph, nodes) = path_graph(5);
        let ops = GraphOps::new();

        let step1 = ops.grow(&graph, &set_of(&nodes[..1]), |_| true);
        assert_eq!(step1, set_of(&[0, 1]));

        let step2 = ops.grow(&graph, &step1, |_| true);
        assert_eq!(step2, set_of(&[0, 1, 2]));
    }

    #[test]
    fn grow_respects_node_predicate() {
        let (graph, nodes) = path_graph(5);
        let ops = GraphOps::new();

        // 2 refuses the predicate, so growth from 1 only reaches 0.
        let grown = ops.grow(&graph, &set_of(&nodes[1..2]), |&n| n != 2);
        assert_eq!(grown, set_of(&[0, 1]));
    }

    #[test]
    fn flood_fill_reaches_the_closure() {
        let (mut graph, nodes) = path_graph(6);
        let ops = GraphOps::new();

        let all = ops.flood_fill(&graph, [nodes[2]], |_| true);
        assert_eq!(all, set_of(&nodes));

        // Cutting the path splits the closure.
        graph.disconnect(&nodes[2], &nodes[3]).unwrap();
        let left = ops.flood_fill(&graph, [nodes[0]], |_| true);
        assert_eq!(left, set_of(&nodes[..3]));
    }

    #[test]
    fn flood_fill_is_idempotent() {
        let (graph, nodes) = path_graph(7);
        let ops = GraphOps::new();

        let filled = ops.flood_fill(&graph, [nodes[0]], |&n| n < 4);
        let refilled = ops.flood_fill(&graph, filled.iter().copied(), |&n| n < 4);
        assert_eq!(filled, refilled);
    }

    #[test]
    fn seeds_are_kept_even_if_excluded() {
        let (graph, nodes) = path_graph(4);
        let ops = GraphOps::new();

        let filled = ops.flood_fill(&graph, [nodes[1]], |_| false);
        assert_eq!(filled, set_of(&nodes[1..2]));
    }

    #[test]
    fn flood_fill_by_edges_uses_edge_payloads() {
        // Path 0-1-2-3 with edge payloads (0,1), (1,2), (2,3): refusing the
        // middle edge splits the flood at exactly that edge.
        let (graph, nodes) = path_graph(4);
        let ops = GraphOps::new();

        let filled = ops.flood_fill_by_edges(&graph, [nodes[0]], |&e| e != (1, 2));
        assert_eq!(filled, set_of(&[0, 1]));

        let all = ops.flood_fill_by_edges(&graph, [nodes[0]], |_| true);
        assert_eq!(all.iter().sorted().collect_vec(), nodes.iter().collect_vec());
    }

    #[test]
    fn multi_seed_flood() {
        let (mut graph, nodes) = path_graph(6);
        graph.disconnect(&nodes[1], &nodes[2]).unwrap();
        graph.disconnect(&nodes[3], &nodes[4]).unwrap();
        let ops = GraphOps::new();

        // Components {0,1}, {2,3}, {4,5}; seeds in the outer two.
        let filled = ops.flood_fill(&graph, [nodes[0], nodes[5]], |_| true);
        assert_eq!(filled, set_of(&[0, 1, 4, 5]));
    }
}
