/*!
# Graph Operations

This module provides the traversal and partitioning layer on top of a
[`HashGraph`]: single-step growth and fixed-point flood fill, exhaustive
partitioning of the node set into predicate-connected regions ("masses"), and
multi-source BFS distance labeling with parent pointers.

All of it lives on [`GraphOps`], a stateful companion object that owns
- a public `selection` scratch set for callers to accumulate node sets across
  calls, and
- a per-node metadata side map ([`NodeMeta`]) holding the labels written by the
  partitioning and distance passes.

The companion never mutates the graph; every operation takes the graph as a
shared reference, so the borrow checker rules out structural mutation while an
operation is running.
*/

use std::hash::Hash;

use fxhash::{FxHashMap, FxHashSet};

use crate::store::HashGraph;

mod distances;
mod flood;
mod masses;

pub use distances::DEFAULT_MAX_DISTANCE;

/// Hop count in BFS distance labeling.
pub type NumHops = u32;

/// Identifier of a region (mass) assigned by [`GraphOps::masses`].
/// `0` means "not assigned to any region"; real ids start at `1`.
pub type RegionId = u32;

/// Visitation state of a node during and after a BFS labeling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitStatus {
    /// Never reached by the pass.
    #[default]
    Unvisited,
    /// Sitting in the frontier of the current generation, not yet labelled.
    Open,
    /// Labelled with a final distance.
    Closed,
}

/// Per-node labels written by the operations layer.
///
/// Entries are materialized lazily and reset by every full-graph pass; the
/// store itself knows nothing about them.
#[derive(Debug, Clone)]
pub struct NodeMeta<N> {
    /// Visitation state of the last BFS labeling pass.
    pub status: VisitStatus,
    /// Neighbor over which this node was first discovered; `None` for origins
    /// and unreached nodes. Follows a shortest path towards the nearest origin.
    pub parent: Option<N>,
    /// Hop distance to the nearest origin; `None` if unreached.
    pub distance: Option<NumHops>,
    /// Region id assigned by the last [`GraphOps::masses`] pass.
    pub region: RegionId,
}

impl<N> Default for NodeMeta<N> {
    fn default() -> Self {
        Self {
            status: VisitStatus::default(),
            parent: None,
            distance: None,
            region: RegionId::default(),
        }
    }
}

/// Stateful companion of one [`HashGraph`]: flood fill, region partitioning and
/// multi-source BFS distance labeling.
///
/// The companion is bound to a graph by convention, not by borrow: each
/// operation takes the graph as an argument, and the metadata is keyed by node
/// payload. Labels for nodes that have since been removed from the graph are
/// swept out by the next full-graph pass.
pub struct GraphOps<N> {
    /// Scratch working set. The operations never touch it; callers use it to
    /// accumulate results across calls and clear it on demand.
    pub selection: FxHashSet<N>,
    meta: FxHashMap<N, NodeMeta<N>>,
}

impl<N> Default for GraphOps<N> {
    fn default() -> Self {
        Self {
            selection: FxHashSet::default(),
            meta: FxHashMap::default(),
        }
    }
}

impl<N> GraphOps<N>
where
    N: Clone + Eq + Hash,
{
    /// Creates a companion with an empty selection and no metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the `selection` scratch set.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Returns the metadata of `node`, if any pass has materialized it.
    pub fn meta_of(&self, node: &N) -> Option<&NodeMeta<N>> {
        self.meta.get(node)
    }

    /// Returns the hop distance of `node` to the nearest origin of the last
    /// labeling pass, or `None` if it was not reached.
    pub fn distance_of(&self, node: &N) -> Option<NumHops> {
        self.meta.get(node)?.distance
    }

    /// Returns the parent of `node` in the shortest-path forest of the last
    /// labeling pass, if any.
    pub fn parent_of(&self, node: &N) -> Option<&N> {
        self.meta.get(node)?.parent.as_ref()
    }

    /// Returns the region id of `node` assigned by the last [`GraphOps::masses`]
    /// pass, or `0` if it has none.
    pub fn region_of(&self, node: &N) -> RegionId {
        self.meta.get(node).map_or(0, |meta| meta.region)
    }

    /// Returns the visitation status of `node` after the last labeling pass.
    pub fn status_of(&self, node: &N) -> VisitStatus {
        self.meta.get(node).map_or(VisitStatus::Unvisited, |meta| meta.status)
    }

    /// Resets the metadata of every node currently in `graph` to its pristine
    /// state and drops entries for nodes that are no longer in the graph.
    ///
    /// Runs implicitly at the start of every BFS labeling pass.
    pub fn reset_metadata<E>(&mut self, graph: &HashGraph<N, E>)
    where
        E: Clone + Eq + Hash,
    {
        self.meta.clear();
        self.meta.reserve(graph.number_of_nodes());
        for node in graph.nodes() {
            self.meta.insert(node.clone(), NodeMeta::default());
        }
    }

    /// Metadata slot of `node`, materialized on first access.
    pub(crate) fn meta_mut(&mut self, node: &N) -> &mut NodeMeta<N> {
        if !self.meta.contains_key(node) {
            self.meta.insert(node.clone(), NodeMeta::default());
        }
        self.meta.get_mut(node).expect("metadata entry was just ensured")
    }
}
