//! Multi-source BFS distance labeling.
//!
//! Labels every node with its hop distance to the nearest origin, a parent
//! pointer towards it, and a visitation status. This is plain unweighted
//! breadth-first labeling — there are no edge weights anywhere in this crate,
//! so no priority queue is needed: each generation of the frontier is closed
//! at once with the current generation number as its distance.

use std::hash::Hash;

use fxhash::FxHashSet;

use super::{GraphOps, NumHops, VisitStatus};
use crate::store::HashGraph;

/// Generation cap applied by [`GraphOps::bfs_distances`].
pub const DEFAULT_MAX_DISTANCE: NumHops = 999;

impl<N> GraphOps<N>
where
    N: Clone + Eq + Hash,
{
    /// Multi-source BFS labeling from `origins`, capped at
    /// [`DEFAULT_MAX_DISTANCE`] hops.
    ///
    /// Resets **all** metadata first (including region ids). Origins get
    /// distance `0` and status `Closed`; every node reachable within the cap
    /// gets its hop distance to the nearest origin, a parent pointing one hop
    /// towards it, and status `Closed`. Unreached nodes keep distance `None`
    /// and status `Unvisited`.
    ///
    /// When a node is discovered by several closed neighbors in the same
    /// generation, the first one encountered becomes its parent; which one
    /// that is depends on iteration order and is not specified. Origins that
    /// are not in the graph are ignored.
    pub fn bfs_distances<E>(&mut self, graph: &HashGraph<N, E>, origins: &FxHashSet<N>)
    where
        E: Clone + Eq + Hash,
    {
        self.bfs_distances_within(graph, origins, DEFAULT_MAX_DISTANCE);
    }

    /// Like [`GraphOps::bfs_distances`] with origins selected by a predicate
    /// over all nodes instead of an explicit set.
    pub fn bfs_distances_from<E, P>(&mut self, graph: &HashGraph<N, E>, mut is_origin: P)
    where
        E: Clone + Eq + Hash,
        P: FnMut(&N) -> bool,
    {
        let origins: FxHashSet<N> =
            graph.nodes().filter(|&node| is_origin(node)).cloned().collect();
        self.bfs_distances(graph, &origins);
    }

    /// Like [`GraphOps::bfs_distances`] with an explicit generation cap: no
    /// node is labelled with a distance greater than `max_distance`.
    pub fn bfs_distances_within<E>(
        &mut self,
        graph: &HashGraph<N, E>,
        origins: &FxHashSet<N>,
        max_distance: NumHops,
    ) where
        E: Clone + Eq + Hash,
    {
        self.reset_metadata(graph);

        // Nodes closed in the previous generation. Neighbors of nodes closed
        // earlier are already closed themselves, so scanning only the newest
        // generation visits every edge at most twice.
        let mut current: Vec<N> = Vec::new();
        for origin in origins {
            if !graph.contains_node(origin) {
                continue;
            }
            let meta = self.meta_mut(origin);
            meta.status = VisitStatus::Closed;
            meta.distance = Some(0);
            current.push(origin.clone());
        }

        let mut frontier: Vec<N> = Vec::new();
        let mut generation: NumHops = 0;

        while !current.is_empty() && generation < max_distance {
            generation += 1;
            frontier.clear();

            for node in &current {
                for neighbor in graph.neighbors_of(node) {
                    let meta = self.meta_mut(neighbor);
                    if meta.status == VisitStatus::Unvisited {
                        meta.status = VisitStatus::Open;
                        meta.parent = Some(node.clone());
                        frontier.push(neighbor.clone());
                    }
                }
            }

            for node in &frontier {
                let meta = self.meta_mut(node);
                meta.status = VisitStatus::Closed;
                meta.distance = Some(generation);
            }

            std::mem::swap(&mut current, &mut frontier);
        }
    }

    /// The path from `node` back to the nearest origin of the last labeling
    /// pass, following parent pointers; starts with `node` and ends with the
    /// origin. Returns `None` if `node` was not reached by the pass.
    pub fn path_to_origin(&self, node: &N) -> Option<Vec<N>> {
        let meta = self.meta_of(node)?;
        meta.distance?;

        let mut path = vec![node.clone()];
        let mut current = meta;
        while let Some(parent) = &current.parent {
            path.push(parent.clone());
            current = self.meta_of(parent)?;
        }
        Some(path)
    }
}
