//! Partitioning of the node set into masses.
//!
//! A **mass** (or region) is a maximal set of nodes mutually reachable over
//! edges satisfying a spread predicate. Partitioning floods one region at a
//! time from a representative **kernel** node and labels every member with a
//! fresh region id.

use std::hash::Hash;

use fxhash::FxHashSet;

use super::{GraphOps, RegionId};
use crate::store::HashGraph;

impl<N> GraphOps<N>
where
    N: Clone + Eq + Hash,
{
    /// Partitions **all** nodes of `graph` into maximal `spread`-connected
    /// regions.
    ///
    /// Every node ends up in exactly one returned set: the sets are pairwise
    /// disjoint (even if `spread` is not a pure function) and their union is
    /// the whole node set. An empty graph yields an empty list. Each member's
    /// metadata receives the region id of its set; ids count up from `1` in
    /// discovery order.
    ///
    /// Kernels are picked in arbitrary order; use [`GraphOps::masses_by`] to
    /// bias which node a region is flooded from.
    pub fn masses<E, P>(&mut self, graph: &HashGraph<N, E>, spread: P) -> Vec<FxHashSet<N>>
    where
        E: Clone + Eq + Hash,
        P: FnMut(&E) -> bool,
    {
        self.masses_with(graph, spread, |remaining| {
            remaining
                .iter()
                .next()
                .expect("kernel is picked from a non-empty set")
                .clone()
        })
    }

    /// Like [`GraphOps::masses`], but floods each region from the remaining
    /// node with the minimum `kernel_key`. Ties are broken arbitrarily.
    pub fn masses_by<E, P, K, F>(
        &mut self,
        graph: &HashGraph<N, E>,
        spread: P,
        mut kernel_key: F,
    ) -> Vec<FxHashSet<N>>
    where
        E: Clone + Eq + Hash,
        P: FnMut(&E) -> bool,
        K: Ord,
        F: FnMut(&N) -> K,
    {
        self.masses_with(graph, spread, move |remaining| {
            remaining
                .iter()
                .min_by_key(|&node| kernel_key(node))
                .expect("kernel is picked from a non-empty set")
                .clone()
        })
    }

    fn masses_with<E, P, F>(
        &mut self,
        graph: &HashGraph<N, E>,
        mut spread: P,
        mut pick_kernel: F,
    ) -> Vec<FxHashSet<N>>
    where
        E: Clone + Eq + Hash,
        P: FnMut(&E) -> bool,
        F: FnMut(&FxHashSet<N>) -> N,
    {
        let mut remaining: FxHashSet<N> = graph.nodes().cloned().collect();
        let mut result = Vec::new();
        let mut region: RegionId = 0;

        while !remaining.is_empty() {
            region += 1;
            let kernel = pick_kernel(&remaining);
            let flooded = self.flood_fill_by_edges(graph, [kernel], &mut spread);

            // Restricting to `remaining` keeps the result a partition even for
            // impure predicates that would flood into an earlier region.
            let mass: FxHashSet<N> = flooded
                .into_iter()
                .filter(|node| remaining.contains(node))
                .collect();

            for node in &mass {
                self.meta_mut(node).region = region;
                remaining.remove(node);
            }
            result.push(mass);
        }

        result
    }
}
