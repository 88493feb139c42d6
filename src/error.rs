//! Error types for the strict store operations.
//!
//! Every structural mutation exists in two flavors: a strict one returning
//! [`GraphResult`] and a soft `try_*` one returning a flag/`Option` that never
//! errors for the same precondition violations. Queries never error; asking
//! whether two absent nodes are connected is simply `false`.

use thiserror::Error;

/// Errors that can occur in store operations.
///
/// The error carries no payload: node and edge values are opaque to the store
/// and need not be printable. Callers know which arguments they passed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a node that is not in the graph.
    #[error("node not found in graph")]
    NodeNotFound,

    /// `connect` was called on a pair of nodes that is already connected.
    #[error("nodes are already connected")]
    AlreadyConnected,

    /// `disconnect` was called on a pair of nodes with no edge between them.
    #[error("nodes are not connected")]
    NotConnected,

    /// An operation referenced an edge payload that is not in the graph.
    #[error("edge not found in graph")]
    EdgeNotFound,

    /// A node was passed as an endpoint of an edge it does not belong to.
    #[error("node is not an endpoint of the edge")]
    NotAnEndpoint,

    /// `connect`/`disconnect` was called with the same node on both sides.
    /// The graph is simple: self-loops are unrepresentable.
    #[error("self-loops are not allowed")]
    SelfLoop,
}

/// Result type for store operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert!(GraphError::NodeNotFound.to_string().contains("not found"));
        assert!(GraphError::AlreadyConnected.to_string().contains("already"));
        assert!(GraphError::NotConnected.to_string().contains("not connected"));
        assert!(GraphError::SelfLoop.to_string().contains("elf-loop"));
    }
}
