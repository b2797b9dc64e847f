//! The edge-lookup strategy seam.
//!
//! A node delegates every edge lookup and mutation to an `EdgeStore`. Two
//! strategies ship with the crate: [`IndexedEdges`](crate::IndexedEdges),
//! keyed by the leading symbol of each label, and
//! [`LinearEdges`](crate::LinearEdges), a plain scanned vector. Both must
//! leave a trie in exactly the same shape for the same sequence of
//! operations; only the cost of a lookup differs.

use crate::node::Node;
use crate::Error;

/// Iterator over the `(label, child)` pairs of a single node.
pub type EdgeIter<'a, S> = Box<dyn Iterator<Item = (&'a str, &'a Node<S>)> + 'a>;

/// Storage for the outgoing edges of a node.
///
/// Implementations may assume that callers never attach a label that shares
/// a leading symbol with an existing one; [`attach`](EdgeStore::attach) must
/// nevertheless reject such labels with [`Error::InvariantViolation`].
pub trait EdgeStore: Default + Sized {
    /// Returns the edge whose label is a prefix of `word`.
    fn matches_edge(&self, word: &str) -> Option<(&str, &Node<Self>)>;

    /// Mutable counterpart of [`matches_edge`](EdgeStore::matches_edge).
    fn matches_edge_mut(&mut self, word: &str) -> Option<(&str, &mut Node<Self>)>;

    /// Returns the edge sharing a non-empty leading substring with `word`,
    /// along with the byte length of that shared substring.
    fn overlaps_edge(&self, word: &str) -> Option<(&str, usize)>;

    /// Attaches `node` under `label`, returning a reference to it in place.
    fn attach(&mut self, label: String, node: Node<Self>) -> Result<&mut Node<Self>, Error>;

    /// Detaches the edge stored under exactly `label`.
    fn remove_edge(&mut self, label: &str) -> Option<(String, Node<Self>)>;

    /// Detaches an arbitrary edge, or returns `None` if there are none.
    fn pop_edge(&mut self) -> Option<(String, Node<Self>)>;

    /// Number of outgoing edges.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all edges in no particular order.
    fn iter(&self) -> EdgeIter<'_, Self>;
}

/// Builds the error returned when `label` cannot be attached next to `existing`.
pub(crate) fn conflict(label: &str, existing: &str) -> Error {
    Error::InvariantViolation(format!(
        "label {:?} shares a prefix with sibling {:?}",
        label, existing
    ))
}

/// Builds the error returned for an attempt to attach an empty label.
pub(crate) fn empty_label() -> Error {
    Error::InvariantViolation("edge labels must not be empty".to_string())
}
