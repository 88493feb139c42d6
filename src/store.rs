/*!
# The Graph Store

[`HashGraph<N, E>`] owns node and edge existence for an undirected **simple**
graph over caller-supplied payload types: no self-loops, at most one edge per
unordered node pair.

Every index in the store is a hash container keyed by payload values or by
[`PairKey`]s of them:
- the adjacency map doubles as the node collection (a node is in the graph iff
  it has an adjacency entry, possibly empty),
- the pair map doubles as the global edge collection and the `O(1)`
  connectivity set,
- a reverse index from edge payload to its pair supports endpoint queries.

All operations are amortized `O(1)` except [`HashGraph::remove_node`]
(`O(degree)`) and the enumeration methods (linear in what they enumerate).
There are no ordered node/edge lists: enumeration order is arbitrary and may
change after any mutation.
*/

use std::{collections::hash_map::Entry, hash::Hash};

use fxhash::{FxHashMap, FxHashSet};

use crate::{
    error::{GraphError, GraphResult},
    pair::PairKey,
};

/// An undirected simple graph with payload-carrying nodes and edges.
///
/// `N` and `E` are the caller's node and edge payload types; the store needs
/// `Clone + Eq + Hash` of both and treats them as pure identities. Payloads
/// should be cheap to clone (copyable ids, small values, reference-counted
/// handles): the store clones them into its indices and clones query arguments
/// into lookup keys.
///
/// New payloads come from the two constructors passed at creation time: a node
/// constructor `FnMut() -> N` and an edge constructor `FnMut(&N, &N) -> E`
/// invoked with the two endpoints being connected.
pub struct HashGraph<N, E> {
    /// Node collection and per-node incident-pair index in one.
    adjacency: FxHashMap<N, FxHashSet<PairKey<N>>>,
    /// Global edge collection, keyed by canonical pair: the connectivity set.
    edge_of_pair: FxHashMap<PairKey<N>, E>,
    /// Reverse index from edge payload to its endpoints.
    pair_of_edge: FxHashMap<E, PairKey<N>>,

    node_ctor: Box<dyn FnMut() -> N>,
    edge_ctor: Box<dyn FnMut(&N, &N) -> E>,
}

impl<N, E> HashGraph<N, E>
where
    N: Clone + Eq + Hash,
    E: Clone + Eq + Hash,
{
    /// Creates an empty graph with the given node and edge constructors.
    pub fn new(
        node_ctor: impl FnMut() -> N + 'static,
        edge_ctor: impl FnMut(&N, &N) -> E + 'static,
    ) -> Self {
        Self {
            adjacency: FxHashMap::default(),
            edge_of_pair: FxHashMap::default(),
            pair_of_edge: FxHashMap::default(),
            node_ctor: Box::new(node_ctor),
            edge_ctor: Box::new(edge_ctor),
        }
    }

    /// Invokes the node constructor, registers the new node with an empty
    /// neighborhood and returns its payload.
    ///
    /// ** Panics if the constructor yields a payload that is already in the graph **
    pub fn create_node(&mut self) -> N {
        let node = (self.node_ctor)();
        assert!(
            self.insert_node(node.clone()),
            "node constructor produced a payload that is already in the graph"
        );
        node
    }

    /// Registers an externally constructed node payload.
    /// Returns *true* exactly if the node was not present before; an already
    /// present node is left untouched.
    pub fn insert_node(&mut self, node: N) -> bool {
        match self.adjacency.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(FxHashSet::default());
                true
            }
        }
    }

    /// Returns *true* if `node` is in the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Connects `a` and `b`, invoking the edge constructor, and returns the new
    /// edge payload.
    ///
    /// Fails with [`GraphError::SelfLoop`] if `a == b`,
    /// [`GraphError::NodeNotFound`] if either node is absent and
    /// [`GraphError::AlreadyConnected`] if the pair already has an edge.
    /// The graph is unchanged on failure; the edge constructor only runs on
    /// success.
    pub fn connect(&mut self, a: &N, b: &N) -> GraphResult<E> {
        if a == b {
            return Err(GraphError::SelfLoop);
        }
        if !self.contains_node(a) || !self.contains_node(b) {
            return Err(GraphError::NodeNotFound);
        }
        if self.are_connected(a, b) {
            return Err(GraphError::AlreadyConnected);
        }
        Ok(self.register_edge(a, b))
    }

    /// Soft variant of [`HashGraph::connect`]: returns the new edge payload, or
    /// `None` under any of the `connect` failure conditions.
    pub fn try_connect(&mut self, a: &N, b: &N) -> Option<E> {
        self.connect(a, b).ok()
    }

    /// Removes the edge between `a` and `b` and returns its payload.
    ///
    /// Fails with [`GraphError::SelfLoop`] if `a == b`,
    /// [`GraphError::NodeNotFound`] if either node is absent and
    /// [`GraphError::NotConnected`] if the pair has no edge.
    pub fn disconnect(&mut self, a: &N, b: &N) -> GraphResult<E> {
        if a == b {
            return Err(GraphError::SelfLoop);
        }
        if !self.contains_node(a) || !self.contains_node(b) {
            return Err(GraphError::NodeNotFound);
        }
        self.unregister_edge(&PairKey::new(a.clone(), b.clone()))
            .ok_or(GraphError::NotConnected)
    }

    /// Soft variant of [`HashGraph::disconnect`]: returns *true* exactly if an
    /// edge was removed.
    pub fn try_disconnect(&mut self, a: &N, b: &N) -> bool {
        self.disconnect(a, b).is_ok()
    }

    /// Removes `node` and every edge incident to it.
    /// Returns *false* if the node was not in the graph.
    ///
    /// `O(degree)`; the removal is complete by the time this returns, there is
    /// no observable intermediate state.
    pub fn remove_node(&mut self, node: &N) -> bool {
        let incident = match self.adjacency.remove(node) {
            Some(pairs) => pairs,
            None => return false,
        };

        for pair in incident {
            let edge = self
                .edge_of_pair
                .remove(&pair)
                .expect("incident pair is registered as an edge");
            self.pair_of_edge.remove(&edge);
            self.adjacency
                .get_mut(pair.other(node))
                .expect("edge endpoint is in the graph")
                .remove(&pair);
        }
        true
    }

    /// Returns *true* if there is an edge between `a` and `b`, in either
    /// argument order. Pure query: absent nodes simply yield *false*.
    pub fn are_connected(&self, a: &N, b: &N) -> bool {
        a != b
            && self
                .edge_of_pair
                .contains_key(&PairKey::new(a.clone(), b.clone()))
    }

    /// Returns the payload of the edge between `a` and `b`, if any.
    /// Argument order does not matter.
    pub fn edge_between(&self, a: &N, b: &N) -> Option<&E> {
        if a == b {
            return None;
        }
        self.edge_of_pair.get(&PairKey::new(a.clone(), b.clone()))
    }

    /// Returns an iterator over the neighbors of `node`.
    /// ** Panics if `node` is not in the graph **
    pub fn neighbors_of<'a>(&'a self, node: &'a N) -> impl Iterator<Item = &'a N> + 'a {
        self.incident_pairs(node).iter().map(move |pair| pair.other(node))
    }

    /// Returns an iterator over the payloads of the edges incident to `node`.
    /// ** Panics if `node` is not in the graph **
    pub fn edges_of<'a>(&'a self, node: &'a N) -> impl Iterator<Item = &'a E> + 'a {
        self.incident_pairs(node)
            .iter()
            .map(move |pair| &self.edge_of_pair[pair])
    }

    /// Returns an iterator over `(edge, neighbor)` for every edge incident to
    /// `node`, where `neighbor` is the endpoint reached over that edge.
    /// ** Panics if `node` is not in the graph **
    pub fn edges_with_neighbors_of<'a>(
        &'a self,
        node: &'a N,
    ) -> impl Iterator<Item = (&'a E, &'a N)> + 'a {
        self.incident_pairs(node)
            .iter()
            .map(move |pair| (&self.edge_of_pair[pair], pair.other(node)))
    }

    /// Returns the endpoint of `edge` that is not `node`.
    ///
    /// Fails with [`GraphError::EdgeNotFound`] if `edge` is not in the graph
    /// and [`GraphError::NotAnEndpoint`] if `node` is neither of its endpoints.
    pub fn other_endpoint<'a>(&'a self, edge: &E, node: &N) -> GraphResult<&'a N> {
        let pair = self.pair_of_edge.get(edge).ok_or(GraphError::EdgeNotFound)?;
        pair.try_other(node).ok_or(GraphError::NotAnEndpoint)
    }

    /// Returns both endpoints of `edge` (in the pair's canonical order), or
    /// [`GraphError::EdgeNotFound`] if `edge` is not in the graph.
    pub fn endpoints_of(&self, edge: &E) -> GraphResult<(&N, &N)> {
        self.pair_of_edge
            .get(edge)
            .map(|pair| (pair.first(), pair.second()))
            .ok_or(GraphError::EdgeNotFound)
    }

    /// Returns an iterator over all node payloads, in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Returns an iterator over all edge payloads, in arbitrary order.
    pub fn edges(&self) -> impl Iterator<Item = &E> + '_ {
        self.edge_of_pair.values()
    }

    /// Returns the number of nodes in the graph.
    pub fn number_of_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges in the graph.
    pub fn number_of_edges(&self) -> usize {
        self.edge_of_pair.len()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges).
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the number of neighbors of `node`.
    /// ** Panics if `node` is not in the graph **
    pub fn degree_of(&self, node: &N) -> usize {
        self.incident_pairs(node).len()
    }

    /// Removes all nodes and edges. The constructors are kept.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edge_of_pair.clear();
        self.pair_of_edge.clear();
    }

    /// Removes every node with no incident edges and returns how many were
    /// removed.
    pub fn prune(&mut self) -> usize {
        let before = self.adjacency.len();
        self.adjacency.retain(|_, pairs| !pairs.is_empty());
        before - self.adjacency.len()
    }

    fn incident_pairs(&self, node: &N) -> &FxHashSet<PairKey<N>> {
        self.adjacency.get(node).expect("node is not in the graph")
    }

    /// Registers the edge for two present, unconnected, distinct nodes.
    /// ** Panics if the edge constructor yields a payload that is already in the graph **
    fn register_edge(&mut self, a: &N, b: &N) -> E {
        let edge = (self.edge_ctor)(a, b);
        let pair = PairKey::new(a.clone(), b.clone());

        assert!(
            !self.pair_of_edge.contains_key(&edge),
            "edge constructor produced a payload that is already in the graph"
        );
        self.pair_of_edge.insert(edge.clone(), pair.clone());

        self.adjacency
            .get_mut(a)
            .expect("endpoint was checked to be present")
            .insert(pair.clone());
        self.adjacency
            .get_mut(b)
            .expect("endpoint was checked to be present")
            .insert(pair.clone());
        self.edge_of_pair.insert(pair, edge.clone());
        edge
    }

    fn unregister_edge(&mut self, pair: &PairKey<N>) -> Option<E> {
        let edge = self.edge_of_pair.remove(pair)?;
        self.pair_of_edge.remove(&edge);
        for endpoint in [pair.first(), pair.second()] {
            self.adjacency
                .get_mut(endpoint)
                .expect("edge endpoint is in the graph")
                .remove(pair);
        }
        Some(edge)
    }
}
