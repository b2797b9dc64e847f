//! The main trie implementation.
//!
//! This module contains the `Trie` type, which owns the root node and
//! provides the primary API for working with the compressed trie. All
//! structural work is delegated to [`Node`] operations.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::iter::FromIterator;

use crate::indexed::IndexedEdges;
use crate::iter::Keys;
use crate::linear::LinearEdges;
use crate::node::Node;
use crate::observer::{LogObserver, TrieEvent, TrieObserver};
use crate::store::EdgeStore;
use crate::util::prefix_match;
use crate::Error;

/// A compressed trie of string keys.
///
/// Chains of single-child, non-terminal nodes are always collapsed into one
/// edge with a longer label, so the tree has at most one internal node per
/// branching point. The edge-lookup strategy is chosen with the `S` type
/// parameter; see [`IndexedTrie`] and [`LinearTrie`].
///
/// Nodes have no parent pointers. Operations that need ancestor context
/// re-derive it with a fresh walk from the root.
pub struct Trie<S = IndexedEdges> {
    /// The root node, never compressed away
    pub(crate) root: Node<S>,

    /// The number of keys stored in the trie
    size: usize,

    observer: Box<dyn TrieObserver + Send>,
}

/// A trie whose nodes index their edges by leading symbol.
pub type IndexedTrie = Trie<IndexedEdges>;

/// A trie whose nodes scan their edges linearly.
pub type LinearTrie = Trie<LinearEdges>;

impl<S: EdgeStore> Trie<S> {
    /// Creates a new, empty trie that reports events to the `log` facade.
    ///
    /// # Examples
    ///
    /// ```
    /// use compressed_trie::IndexedTrie;
    ///
    /// let trie = IndexedTrie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_observer(LogObserver)
    }

    /// Creates a new, empty trie that reports events to `observer`.
    pub fn with_observer(observer: impl TrieObserver + Send + 'static) -> Self {
        Trie {
            root: Node::new(false),
            size: 0,
            observer: Box::new(observer),
        }
    }

    /// Replaces the observer receiving structural events.
    pub fn set_observer(&mut self, observer: impl TrieObserver + Send + 'static) {
        self.observer = Box::new(observer);
    }

    /// Returns the number of keys stored in the trie.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Returns `true` if `key` is stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use compressed_trie::IndexedTrie;
    ///
    /// let mut trie = IndexedTrie::new();
    /// trie.insert("artifact");
    ///
    /// assert!(trie.search("artifact"));
    /// assert!(!trie.search("art"));
    /// ```
    pub fn search(&self, key: &str) -> bool {
        let (node, rest, _) = self.descend(key);
        rest.is_empty() && node.is_terminal()
    }

    /// Inserts `key`, splitting an existing edge if the key partially
    /// overlaps it.
    ///
    /// Returns `true` if the key was not already stored. Inserting a key
    /// twice leaves the trie unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use compressed_trie::IndexedTrie;
    ///
    /// let mut trie = IndexedTrie::new();
    /// assert!(trie.insert("julie"));
    /// assert!(trie.insert("july"));
    /// assert!(!trie.insert("july"));
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn insert(&mut self, key: &str) -> bool {
        match self.insert_key(key) {
            Ok(inserted) => inserted,
            Err(err) => panic!("compressed trie corrupted while inserting {:?}: {}", key, err),
        }
    }

    /// Deletes `key`, compressing any node the deletion leaves redundant.
    ///
    /// Returns [`Error::NotFound`] without touching the trie if `key` is not
    /// stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use compressed_trie::{Error, IndexedTrie};
    ///
    /// let mut trie = IndexedTrie::new();
    /// trie.insert("julie");
    /// trie.insert("july");
    ///
    /// trie.delete("julie").unwrap();
    /// assert!(!trie.search("julie"));
    /// assert!(trie.search("july"));
    ///
    /// assert_eq!(trie.delete("julie"), Err(Error::NotFound("julie".to_string())));
    /// ```
    pub fn delete(&mut self, key: &str) -> Result<(), Error> {
        match self.delete_key(key) {
            Err(Error::InvariantViolation(msg)) => panic!(
                "compressed trie corrupted while deleting {:?}: {}",
                key, msg
            ),
            other => other,
        }
    }

    /// Returns the set of all stored keys.
    pub fn traverse(&self) -> HashSet<String> {
        self.iter().collect()
    }

    /// Returns an iterator over all stored keys in unspecified order.
    pub fn iter(&self) -> Keys<'_, S> {
        Keys::new(&self.root, String::new())
    }

    /// Returns an iterator over the stored keys that start with `prefix`.
    ///
    /// `prefix` may end in the middle of an edge label.
    ///
    /// # Examples
    ///
    /// ```
    /// use compressed_trie::IndexedTrie;
    ///
    /// let trie: IndexedTrie = ["hello", "help", "world"].iter().collect();
    ///
    /// let mut keys: Vec<String> = trie.keys_with_prefix("hel").collect();
    /// keys.sort();
    /// assert_eq!(keys, vec!["hello", "help"]);
    /// ```
    pub fn keys_with_prefix(&self, prefix: &str) -> Keys<'_, S> {
        let (node, rest, _) = self.descend(prefix);
        if rest.is_empty() {
            return Keys::new(node, prefix.to_string());
        }

        // The prefix ends inside the label of the only edge that overlaps it
        let consumed = &prefix[..prefix.len() - rest.len()];
        match node.overlaps_edge(rest) {
            Some((label, overlap)) if overlap == rest.len() => match node.child(label) {
                Some(child) => Keys::new(child, format!("{}{}", consumed, label)),
                None => Keys::empty(),
            },
            _ => Keys::empty(),
        }
    }

    /// Returns the edge labels found at each depth, root edges first.
    ///
    /// Intended for inspecting the shape of small tries.
    pub fn depth_labels(&self) -> Vec<BTreeSet<String>> {
        let mut levels = Vec::new();
        let mut frontier = vec![&self.root];

        while !frontier.is_empty() {
            let mut labels = BTreeSet::new();
            let mut next = Vec::new();
            for node in frontier {
                for (label, child) in node.edges() {
                    labels.insert(label.to_string());
                    next.push(child);
                }
            }
            if labels.is_empty() {
                break;
            }
            levels.push(labels);
            frontier = next;
        }

        levels
    }

    /// Verifies the structural invariants of the whole tree.
    ///
    /// Checks that labels are non-empty, sibling labels share no leading
    /// symbol, no non-root node is a non-terminal with fewer than two
    /// children, and the stored-key counter matches the terminal nodes.
    pub fn check_invariants(&self) -> Result<(), Error> {
        let mut stack = vec![(&self.root, String::new())];
        let mut terminals = 0;

        while let Some((node, path)) = stack.pop() {
            terminals += usize::from(node.is_terminal());

            if !path.is_empty() && !node.is_terminal() && node.fan_out() < 2 {
                return Err(Error::InvariantViolation(format!(
                    "non-terminal node at {:?} has {} children",
                    path,
                    node.fan_out()
                )));
            }

            let labels: Vec<&str> = node.edges().map(|(label, _)| label).collect();
            for (i, label) in labels.iter().enumerate() {
                if label.is_empty() {
                    return Err(Error::InvariantViolation(format!(
                        "empty label below {:?}",
                        path
                    )));
                }
                if let Some(sibling) = labels[i + 1..]
                    .iter()
                    .find(|sibling| prefix_match(label, sibling) > 0)
                {
                    return Err(Error::InvariantViolation(format!(
                        "sibling labels {:?} and {:?} below {:?} share a prefix",
                        label, sibling, path
                    )));
                }
            }

            for (label, child) in node.edges() {
                stack.push((child, format!("{}{}", path, label)));
            }
        }

        if terminals != self.size {
            return Err(Error::InvariantViolation(format!(
                "{} terminal nodes but {} keys counted",
                terminals, self.size
            )));
        }
        Ok(())
    }

    /// Walks down from the root consuming matching labels.
    ///
    /// Returns the deepest node reached, the unconsumed remainder of `key`
    /// and the byte length of the last label consumed (zero at the root).
    fn descend<'k>(&self, key: &'k str) -> (&Node<S>, &'k str, usize) {
        let mut node = &self.root;
        let mut rest = key;
        let mut last_label = 0;

        while let Some((label, child)) = node.matches_edge(rest) {
            last_label = label.len();
            rest = &rest[last_label..];
            node = child;
        }

        (node, rest, last_label)
    }

    /// Returns the node whose implied prefix is exactly `path`.
    fn node_at_mut(&mut self, path: &str) -> Result<&mut Node<S>, Error> {
        let mut node = &mut self.root;
        let mut rest = path;

        while !rest.is_empty() {
            let (label, child) = node
                .matches_edge_mut(rest)
                .ok_or_else(|| missing_path(path))?;
            rest = &rest[label.len()..];
            node = child;
        }

        Ok(node)
    }

    fn insert_key(&mut self, key: &str) -> Result<bool, Error> {
        let (_, rest, _) = self.descend(key);
        let (path, remainder) = key.split_at(key.len() - rest.len());
        let node = self.node_at_mut(path)?;

        if remainder.is_empty() {
            if node.terminal {
                return Ok(false);
            }
            node.terminal = true;
            self.size += 1;
            self.observer.on_event(&TrieEvent::Marked { key });
            return Ok(true);
        }

        let overlap = node
            .overlaps_edge(remainder)
            .map(|(label, len)| (label.to_string(), len));

        match overlap {
            None => {
                node.add_child(remainder, true)?;
                self.size += 1;
                self.observer.on_event(&TrieEvent::Branched {
                    key,
                    label: remainder,
                });
            }
            Some((existing, len)) => {
                // The descent stopped here, so `existing` is not a prefix of
                // `remainder` and its tail below is never empty
                let child = node
                    .remove_edge(&existing)
                    .ok_or_else(|| missing_path(key))?;
                let (shared, tail) = remainder.split_at(len);

                let mut middle = Node::new(tail.is_empty());
                middle.add_child_node(&existing[len..], child)?;
                if !tail.is_empty() {
                    middle.add_child(tail, true)?;
                }
                node.add_child_node(shared, middle)?;

                self.size += 1;
                self.observer.on_event(&TrieEvent::Split {
                    key,
                    shared,
                    existing: &existing,
                });
            }
        }

        Ok(true)
    }

    fn delete_key(&mut self, key: &str) -> Result<(), Error> {
        let (node, rest, label_len) = self.descend(key);
        if !rest.is_empty() || !node.is_terminal() {
            return Err(Error::NotFound(key.to_string()));
        }

        if key.is_empty() {
            self.root.terminal = false;
            self.size -= 1;
            self.observer.on_event(&TrieEvent::Unmarked { key });
            return Ok(());
        }

        let (parent_path, label) = key.split_at(key.len() - label_len);
        let parent = self.node_at_mut(parent_path)?;
        let node = parent.child_mut(label).ok_or_else(|| missing_path(key))?;
        node.terminal = false;

        match node.count_children() {
            0 => {
                parent.remove_edge(label);
                let redundant = !parent_path.is_empty()
                    && !parent.terminal
                    && parent.count_children() == 1;
                self.size -= 1;
                self.observer.on_event(&TrieEvent::Removed { key, label });

                if redundant {
                    self.merge_into_grandparent(key, parent_path)?;
                }
            }
            1 => {
                let (child_label, child) = node.take_only_child().ok_or_else(|| {
                    Error::InvariantViolation(format!("node at {:?} lost its only child", key))
                })?;
                let merged = format!("{}{}", label, child_label);
                parent.replace_edge(label, merged.as_str(), child)?;
                self.size -= 1;
                self.observer.on_event(&TrieEvent::Merged {
                    key,
                    label: &merged,
                });
            }
            _ => {
                self.size -= 1;
                self.observer.on_event(&TrieEvent::Unmarked { key });
            }
        }

        Ok(())
    }

    /// Splices the redundant node at `parent_path` out of the tree.
    ///
    /// `parent_path` is the deleted key with the removed edge's label trimmed
    /// off the end. Because sibling labels never share a prefix, that
    /// trimmed key leads from the root exactly to the parent, and one more
    /// label trimmed off leads to the grandparent.
    fn merge_into_grandparent(&mut self, key: &str, parent_path: &str) -> Result<(), Error> {
        let (_, rest, parent_label_len) = self.descend(parent_path);
        if !rest.is_empty() {
            return Err(missing_path(parent_path));
        }

        let (grandparent_path, parent_label) =
            parent_path.split_at(parent_path.len() - parent_label_len);
        let grandparent = self.node_at_mut(grandparent_path)?;
        let parent = grandparent
            .child_mut(parent_label)
            .ok_or_else(|| missing_path(parent_path))?;
        let (sibling_label, sibling) = parent.take_only_child().ok_or_else(|| {
            Error::InvariantViolation(format!(
                "node at {:?} is not a redundant chain",
                parent_path
            ))
        })?;

        let merged = format!("{}{}", parent_label, sibling_label);
        grandparent.replace_edge(parent_label, merged.as_str(), sibling)?;
        self.observer.on_event(&TrieEvent::Cascaded {
            key,
            label: &merged,
        });

        Ok(())
    }
}

fn missing_path(path: &str) -> Error {
    Error::InvariantViolation(format!("no node at {:?}", path))
}

impl<S: EdgeStore> Default for Trie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EdgeStore + fmt::Debug> fmt::Debug for Trie<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("root", &self.root)
            .field("size", &self.size)
            .finish()
    }
}

// Two tries are equal when their shapes are identical
impl<S: EdgeStore, T: EdgeStore> PartialEq<Trie<T>> for Trie<S> {
    fn eq(&self, other: &Trie<T>) -> bool {
        self.size == other.size && self.root == other.root
    }
}

impl<S: EdgeStore> Eq for Trie<S> {}

impl<K: AsRef<str>, S: EdgeStore> Extend<K> for Trie<S> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key.as_ref());
        }
    }
}

impl<K: AsRef<str>, S: EdgeStore> FromIterator<K> for Trie<S> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, S: EdgeStore> IntoIterator for &'a Trie<S> {
    type Item = String;
    type IntoIter = Keys<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
