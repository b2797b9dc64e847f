//! Edge storage indexed by the leading symbol of each label.

use std::collections::HashMap;

use crate::node::Node;
use crate::store::{conflict, empty_label, EdgeIter, EdgeStore};
use crate::util::{leading_symbol, prefix_match};
use crate::Error;

/// Edges indexed by their first `char`.
///
/// Prefix-freedom guarantees that no two sibling labels start with the same
/// symbol, so the leading symbol of a lookup word selects the only candidate
/// edge. Lookups cost time proportional to the key length, independent of
/// fan-out.
#[derive(Debug, Clone, Default)]
pub struct IndexedEdges {
    edges: HashMap<char, (String, Node<IndexedEdges>)>,
}

impl EdgeStore for IndexedEdges {
    fn matches_edge(&self, word: &str) -> Option<(&str, &Node<Self>)> {
        let (label, child) = self.edges.get(&leading_symbol(word)?)?;
        if word.starts_with(label.as_str()) {
            Some((label.as_str(), child))
        } else {
            None
        }
    }

    fn matches_edge_mut(&mut self, word: &str) -> Option<(&str, &mut Node<Self>)> {
        let (label, child) = self.edges.get_mut(&leading_symbol(word)?)?;
        if word.starts_with(label.as_str()) {
            Some((label.as_str(), child))
        } else {
            None
        }
    }

    fn overlaps_edge(&self, word: &str) -> Option<(&str, usize)> {
        let (label, _) = self.edges.get(&leading_symbol(word)?)?;
        Some((label.as_str(), prefix_match(word, label)))
    }

    fn attach(&mut self, label: String, node: Node<Self>) -> Result<&mut Node<Self>, Error> {
        let symbol = leading_symbol(&label).ok_or_else(empty_label)?;
        if let Some((existing, _)) = self.edges.get(&symbol) {
            return Err(conflict(&label, existing));
        }
        let (_, child) = self.edges.entry(symbol).or_insert((label, node));
        Ok(child)
    }

    fn remove_edge(&mut self, label: &str) -> Option<(String, Node<Self>)> {
        let symbol = leading_symbol(label)?;
        match self.edges.get(&symbol) {
            Some((existing, _)) if existing == label => self.edges.remove(&symbol),
            _ => None,
        }
    }

    fn pop_edge(&mut self) -> Option<(String, Node<Self>)> {
        let symbol = *self.edges.keys().next()?;
        self.edges.remove(&symbol)
    }

    fn len(&self) -> usize {
        self.edges.len()
    }

    fn iter(&self) -> EdgeIter<'_, Self> {
        Box::new(
            self.edges
                .values()
                .map(|(label, child)| (label.as_str(), child)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> Node<IndexedEdges> {
        Node::new(true)
    }

    #[test]
    fn test_matches_by_leading_symbol() {
        let mut edges = IndexedEdges::default();
        edges.attach("art".to_string(), leaf()).unwrap();
        edges.attach("zoo".to_string(), leaf()).unwrap();

        assert_eq!(edges.matches_edge("artful").map(|(l, _)| l), Some("art"));
        assert_eq!(edges.matches_edge("art").map(|(l, _)| l), Some("art"));
        // Same leading symbol, but the label is not a prefix of the word
        assert!(edges.matches_edge("ar").is_none());
        assert!(edges.matches_edge("axe").is_none());
        assert!(edges.matches_edge("").is_none());
    }

    #[test]
    fn test_overlaps() {
        let mut edges = IndexedEdges::default();
        edges.attach("julie".to_string(), leaf()).unwrap();

        assert_eq!(edges.overlaps_edge("july"), Some(("julie", 3)));
        assert_eq!(edges.overlaps_edge("j"), Some(("julie", 1)));
        assert_eq!(edges.overlaps_edge("kate"), None);
    }

    #[test]
    fn test_attach_rejects_conflicts() {
        let mut edges = IndexedEdges::default();
        edges.attach("abc".to_string(), leaf()).unwrap();

        assert!(matches!(
            edges.attach("abd".to_string(), leaf()),
            Err(Error::InvariantViolation(_))
        ));
        assert!(matches!(
            edges.attach(String::new(), leaf()),
            Err(Error::InvariantViolation(_))
        ));
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn test_remove_requires_exact_label() {
        let mut edges = IndexedEdges::default();
        edges.attach("abc".to_string(), leaf()).unwrap();

        assert!(edges.remove_edge("ab").is_none());
        assert!(edges.remove_edge("abcd").is_none());
        let (label, node) = edges.remove_edge("abc").unwrap();
        assert_eq!(label, "abc");
        assert!(node.is_terminal());
        assert!(edges.is_empty());
    }

    #[test]
    fn test_pop_edge() {
        let mut edges = IndexedEdges::default();
        assert!(edges.pop_edge().is_none());
        edges.attach("x".to_string(), leaf()).unwrap();
        assert_eq!(edges.pop_edge().map(|(l, _)| l), Some("x".to_string()));
        assert!(edges.is_empty());
    }
}
