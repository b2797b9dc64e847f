//! Key iteration over a trie or one of its prefixes.

use std::fmt;

use crate::node::Node;
use crate::store::EdgeStore;

/// An iterator over stored keys.
///
/// This iterator performs a depth-first traversal and rebuilds every key by
/// concatenating the labels on its path. The order in which keys are yielded
/// depends on the edge store and is not specified.
pub struct Keys<'a, S> {
    /// Nodes still to visit, with the prefix their path spells out
    stack: Vec<(&'a Node<S>, String)>,
}

impl<'a, S: EdgeStore> Keys<'a, S> {
    /// Starts a traversal at `node`, whose implied prefix is `prefix`.
    pub(crate) fn new(node: &'a Node<S>, prefix: String) -> Self {
        Keys {
            stack: vec![(node, prefix)],
        }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Keys { stack: Vec::new() }
    }
}

impl<'a, S: EdgeStore> Iterator for Keys<'a, S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, prefix)) = self.stack.pop() {
            for (label, child) in node.edges() {
                let mut key = String::with_capacity(prefix.len() + label.len());
                key.push_str(&prefix);
                key.push_str(label);
                self.stack.push((child, key));
            }

            if node.is_terminal() {
                return Some(prefix);
            }
        }

        None
    }
}

impl<S> fmt::Debug for Keys<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys")
            .field("pending", &self.stack.len())
            .finish()
    }
}
