/*!
`hgraphs` is a graph data structure & algorithms library designed for graphs that are
- **h**eavy : Nodes and edges carry caller-supplied payload values
- **h**ash-indexed : Connectivity queries are amortized `O(1)` hash lookups
- **h**op-labelled : This one is **optional** (but the operations layer will happily
  label every node with its hop distance to the nearest origin)

# Representation

We represent a graph as [`HashGraph<N, E>`](crate::store::HashGraph): an undirected
**simple** graph (no self-loops, at most one edge per unordered node pair) whose nodes
and edges are opaque payload values chosen by the caller. The store only requires
`Clone + Eq + Hash` of them; it never interprets payload content beyond identity.

A connection between `a` and `b` is keyed by a [`PairKey`](crate::pair::PairKey):
a canonical, order-independent representation of the unordered pair `{a, b}`.
`PairKey::new(a, b)` and `PairKey::new(b, a)` are equal and hash equally, which is
what makes `are_connected` and `edge_between` single hash lookups instead of
adjacency scans.

### Nodes and edges

Nodes enter the graph either through a caller-supplied node constructor
(`create_node`) or as ready-made payloads (`insert_node`). Edges are always built
by the caller-supplied edge constructor when two nodes are connected; the store
enforces the single-edge-per-pair rule *before* constructing.

# Design

The crate is split into two layers, in dependency order:

- the **store** ([`store`]) owns node/edge existence, canonical edge identity and
  adjacency, and offers strict ([`GraphResult`](crate::error::GraphResult)-returning)
  and soft (`try_*`) mutation surfaces;
- the **operations layer** ([`algo`]) is a stateful companion
  ([`GraphOps`](crate::algo::GraphOps)) over one store, providing single-step
  [`grow`](crate::algo::GraphOps::grow), fixed-point
  [`flood_fill`](crate::algo::GraphOps::flood_fill), exhaustive region partitioning
  ([`masses`](crate::algo::GraphOps::masses)) and multi-source BFS distance
  labeling ([`bfs_distances`](crate::algo::GraphOps::bfs_distances)). It reads
  adjacency only and keeps all of its per-node labels in a side map, so the store
  stays algorithm-agnostic.

All of this is single-threaded and synchronous. Iterators returned by the store
borrow it immutably, so the usual "do not mutate while iterating" rule is enforced
at compile time.

# Usage

```rust
use hgraphs::{algo::GraphOps, prelude::*};

let mut ids = 0_u32;
let mut g: HashGraph<u32, (u32, u32)> = HashGraph::new(
    move || {
        ids += 1;
        ids
    },
    |&a, &b| (a.min(b), a.max(b)),
);

let a = g.create_node();
let b = g.create_node();
let c = g.create_node();
g.connect(&a, &b).unwrap();
g.connect(&b, &c).unwrap();

assert!(g.are_connected(&b, &a));

let mut ops = GraphOps::new();
ops.bfs_distances(&g, &std::iter::once(a).collect());
assert_eq!(ops.distance_of(&c), Some(2));
```

# When to use

You should only use this library if the following apply:
- Your node and edge values are their own identity (hashable payloads), and you
  do not want to manage a separate index space yourself
- Your graphs are undirected, unweighted and simple
- You need cheap connectivity queries plus flood-fill / region / hop-distance
  style analyses

If your graphs are large and your nodes are dense integer ids, an index-based
representation will beat this one; check out
[petgraph](https://crates.io/crates/petgraph) for a more extensive general-purpose
graph library.
*/

pub mod algo;
pub mod error;
pub mod pair;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

/// `hgraphs::prelude` includes the store, the canonical pair key and the error types.
pub mod prelude {
    pub use super::{error::*, pair::*, store::*};
}
