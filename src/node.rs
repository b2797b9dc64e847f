//! Node implementation for the compressed trie.
//!
//! A `Node` is a terminal flag plus an edge store. All edge lookups and
//! mutations go through the store chosen by the `S` type parameter, so the
//! same node logic works on top of either lookup strategy.

use crate::store::{EdgeIter, EdgeStore};
use crate::Error;

/// A node of the compressed trie.
///
/// Each node exclusively owns its children; there are no parent pointers.
/// The implied prefix of a node is the concatenation of the edge labels on
/// the path from the root, and the node is *terminal* when that prefix is
/// itself a stored key.
#[derive(Debug, Clone, Default)]
pub struct Node<S> {
    /// Whether the implied prefix of this node is a stored key
    pub(crate) terminal: bool,

    /// Outgoing edges, each labeled by a non-empty substring
    pub(crate) edges: S,
}

impl<S: EdgeStore> Node<S> {
    /// Creates a node with no children.
    pub fn new(terminal: bool) -> Self {
        Node {
            terminal,
            edges: S::default(),
        }
    }

    /// Returns whether this node marks the end of a stored key.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the number of outgoing edges.
    pub fn fan_out(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether this node has no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the outgoing `(label, child)` pairs.
    pub fn edges(&self) -> EdgeIter<'_, S> {
        self.edges.iter()
    }

    /// Returns the edge whose label is an exact prefix of `word`.
    ///
    /// At most one edge can match because sibling labels never share a
    /// leading symbol.
    pub fn matches_edge(&self, word: &str) -> Option<(&str, &Node<S>)> {
        self.edges.matches_edge(word)
    }

    pub(crate) fn matches_edge_mut(&mut self, word: &str) -> Option<(&str, &mut Node<S>)> {
        self.edges.matches_edge_mut(word)
    }

    /// Returns the edge sharing a non-empty leading substring with `word`,
    /// along with the byte length of the shared part.
    pub fn overlaps_edge(&self, word: &str) -> Option<(&str, usize)> {
        self.edges.overlaps_edge(word)
    }

    /// Returns the child stored under exactly `label`.
    pub fn child(&self, label: &str) -> Option<&Node<S>> {
        match self.edges.matches_edge(label) {
            Some((found, child)) if found == label => Some(child),
            _ => None,
        }
    }

    pub(crate) fn child_mut(&mut self, label: &str) -> Option<&mut Node<S>> {
        match self.edges.matches_edge_mut(label) {
            Some((found, child)) if found == label => Some(child),
            _ => None,
        }
    }

    /// Creates a fresh child under `label` and returns it.
    pub fn add_child(
        &mut self,
        label: impl Into<String>,
        terminal: bool,
    ) -> Result<&mut Node<S>, Error> {
        self.edges.attach(label.into(), Node::new(terminal))
    }

    /// Attaches an existing subtree under `label` and returns it.
    pub fn add_child_node(
        &mut self,
        label: impl Into<String>,
        node: Node<S>,
    ) -> Result<&mut Node<S>, Error> {
        self.edges.attach(label.into(), node)
    }

    /// Detaches and returns the subtree stored under exactly `label`.
    pub fn remove_edge(&mut self, label: &str) -> Option<Node<S>> {
        self.edges.remove_edge(label).map(|(_, node)| node)
    }

    /// Moves `node` from `old_label` to `new_label`, discarding whatever was
    /// stored under `old_label`.
    pub fn replace_edge(
        &mut self,
        old_label: &str,
        new_label: impl Into<String>,
        node: Node<S>,
    ) -> Result<&mut Node<S>, Error> {
        self.remove_edge(old_label);
        self.add_child_node(new_label, node)
    }

    /// Number of outgoing edges, plus one if this node is terminal.
    pub fn count_children(&self) -> usize {
        self.edges.len() + usize::from(self.terminal)
    }

    /// Returns the single outgoing edge of a non-terminal node with exactly
    /// one child, or `None` for any other node.
    pub fn get_only_child(&self) -> Option<(&str, &Node<S>)> {
        if self.terminal || self.edges.len() != 1 {
            return None;
        }
        self.edges.iter().next()
    }

    /// Detaches the single outgoing edge under the same precondition as
    /// [`get_only_child`](Node::get_only_child).
    pub fn take_only_child(&mut self) -> Option<(String, Node<S>)> {
        if self.terminal || self.edges.len() != 1 {
            return None;
        }
        self.edges.pop_edge()
    }

    /// Returns the number of stored keys in this subtree.
    pub fn subtree_size(&self) -> usize {
        let mut count = usize::from(self.terminal);

        for (_, child) in self.edges() {
            count += child.subtree_size();
        }

        count
    }
}

/// Structural equality: same terminal flags and the same labeled edges,
/// regardless of the order edges were inserted in or the strategy storing
/// them.
impl<S: EdgeStore, T: EdgeStore> PartialEq<Node<T>> for Node<S> {
    fn eq(&self, other: &Node<T>) -> bool {
        self.terminal == other.terminal
            && self.fan_out() == other.fan_out()
            && self
                .edges()
                .all(|(label, child)| other.child(label).map_or(false, |theirs| child == theirs))
    }
}

impl<S: EdgeStore> Eq for Node<S> {}
