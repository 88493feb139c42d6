/*!
# Canonical Pair Keys

A [`PairKey`] is the identity of an undirected edge: the **unordered** pair of its
two endpoint nodes. Keys built from `(a, b)` and `(b, a)` are equal and hash
equally, so a single hash map keyed by `PairKey` answers "are these connected?"
and "which edge connects them?" in one amortized `O(1)` lookup.
*/

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use fxhash::FxHasher;

/// Hash value of a single endpoint, used to pick the canonical endpoint order.
fn endpoint_hash<N: Hash>(node: &N) -> u64 {
    let mut hasher = FxHasher::default();
    node.hash(&mut hasher);
    hasher.finish()
}

/// A canonical, order-independent key for the unordered node pair `{a, b}`.
///
/// Endpoints are stored ordered by their hash value, so the two constructions
/// of the same pair normally compare equal field by field. Equality and `Hash`
/// are nevertheless defined order-independently, so the key stays canonical
/// even when two distinct endpoints collide on hash value.
#[derive(Clone)]
pub struct PairKey<N> {
    a: N,
    b: N,
}

impl<N: Eq + Hash> PairKey<N> {
    /// Creates the canonical key for the unordered pair `{a, b}`.
    ///
    /// `PairKey::new(a, b) == PairKey::new(b, a)` always holds.
    /// ** Panics if `a == b` ** (the pair of an edge has two distinct endpoints)
    pub fn new(a: N, b: N) -> Self {
        assert!(a != b, "a pair key needs two distinct nodes");
        if endpoint_hash(&a) <= endpoint_hash(&b) {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Returns *true* if `node` is one of the two endpoints.
    pub fn has(&self, node: &N) -> bool {
        self.a == *node || self.b == *node
    }

    /// Returns the endpoint that is not `node`, or `None` if `node` is not an
    /// endpoint of this pair.
    pub fn try_other(&self, node: &N) -> Option<&N> {
        if self.a == *node {
            Some(&self.b)
        } else if self.b == *node {
            Some(&self.a)
        } else {
            None
        }
    }

    /// Returns the endpoint that is not `node`.
    /// ** Panics if `node` is not an endpoint **
    pub fn other(&self, node: &N) -> &N {
        self.try_other(node)
            .expect("node is not an endpoint of this pair")
    }

    /// Returns the first endpoint in canonical order.
    pub fn first(&self) -> &N {
        &self.a
    }

    /// Returns the second endpoint in canonical order.
    pub fn second(&self) -> &N {
        &self.b
    }
}

impl<N: Eq> PartialEq for PairKey<N> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<N: Eq> Eq for PairKey<N> {}

impl<N: Hash> Hash for PairKey<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (ha, hb) = (endpoint_hash(&self.a), endpoint_hash(&self.b));
        state.write_u64(ha.min(hb));
        state.write_u64(ha.max(hb));
    }
}

impl<N: Display> Display for PairKey<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{},{}}}", self.a, self.b)
    }
}

impl<N: Debug> Debug for PairKey<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{:?},{:?}}}", self.a, self.b)
    }
}
