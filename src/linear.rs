//! Edge storage scanned linearly.

use crate::node::Node;
use crate::store::{conflict, empty_label, EdgeIter, EdgeStore};
use crate::util::prefix_match;
use crate::Error;

/// Edges kept in an unordered vector.
///
/// Every lookup compares the word against each label in turn, so it costs
/// time proportional to fan-out times key length. Useful as a baseline and
/// for nodes that are known to stay narrow.
#[derive(Debug, Clone, Default)]
pub struct LinearEdges {
    edges: Vec<(String, Node<LinearEdges>)>,
}

impl LinearEdges {
    fn position(&self, label: &str) -> Option<usize> {
        self.edges.iter().position(|(existing, _)| existing == label)
    }
}

impl EdgeStore for LinearEdges {
    fn matches_edge(&self, word: &str) -> Option<(&str, &Node<Self>)> {
        self.edges
            .iter()
            .find(|(label, _)| word.starts_with(label.as_str()))
            .map(|(label, child)| (label.as_str(), child))
    }

    fn matches_edge_mut(&mut self, word: &str) -> Option<(&str, &mut Node<Self>)> {
        self.edges
            .iter_mut()
            .find(|(label, _)| word.starts_with(label.as_str()))
            .map(|(label, child)| (label.as_str(), child))
    }

    fn overlaps_edge(&self, word: &str) -> Option<(&str, usize)> {
        self.edges
            .iter()
            .map(|(label, _)| (label.as_str(), prefix_match(word, label)))
            .find(|&(_, overlap)| overlap > 0)
    }

    fn attach(&mut self, label: String, node: Node<Self>) -> Result<&mut Node<Self>, Error> {
        if label.is_empty() {
            return Err(empty_label());
        }
        if let Some((existing, _)) = self
            .edges
            .iter()
            .find(|(existing, _)| prefix_match(&label, existing) > 0)
        {
            return Err(conflict(&label, existing));
        }
        self.edges.push((label, node));
        let (_, child) = self
            .edges
            .last_mut()
            .ok_or_else(|| Error::Other("edge vanished after push".to_string()))?;
        Ok(child)
    }

    fn remove_edge(&mut self, label: &str) -> Option<(String, Node<Self>)> {
        let idx = self.position(label)?;
        Some(self.edges.swap_remove(idx))
    }

    fn pop_edge(&mut self) -> Option<(String, Node<Self>)> {
        self.edges.pop()
    }

    fn len(&self) -> usize {
        self.edges.len()
    }

    fn iter(&self) -> EdgeIter<'_, Self> {
        Box::new(self.edges.iter().map(|(label, child)| (label.as_str(), child)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> Node<LinearEdges> {
        Node::new(true)
    }

    #[test]
    fn test_matches_scans_all_edges() {
        let mut edges = LinearEdges::default();
        edges.attach("b".to_string(), leaf()).unwrap();
        edges.attach("art".to_string(), leaf()).unwrap();
        edges.attach("cat".to_string(), leaf()).unwrap();

        assert_eq!(edges.matches_edge("artful").map(|(l, _)| l), Some("art"));
        assert_eq!(edges.matches_edge("cat").map(|(l, _)| l), Some("cat"));
        assert!(edges.matches_edge("ca").is_none());
    }

    #[test]
    fn test_overlaps() {
        let mut edges = LinearEdges::default();
        edges.attach("zebra".to_string(), leaf()).unwrap();
        edges.attach("julie".to_string(), leaf()).unwrap();

        assert_eq!(edges.overlaps_edge("july"), Some(("julie", 3)));
        assert_eq!(edges.overlaps_edge("zeal"), Some(("zebra", 2)));
        assert_eq!(edges.overlaps_edge("kate"), None);
    }

    #[test]
    fn test_attach_rejects_conflicts() {
        let mut edges = LinearEdges::default();
        edges.attach("abc".to_string(), leaf()).unwrap();

        assert!(matches!(
            edges.attach("a".to_string(), leaf()),
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
        let mut edges = LinearEdges::default();
        edges.attach("abc".to_string(), leaf()).unwrap();
        edges.attach("xyz".to_string(), leaf()).unwrap();

        assert!(edges.remove_edge("ab").is_none());
        assert_eq!(edges.remove_edge("abc").map(|(l, _)| l), Some("abc".to_string()));
        assert_eq!(edges.len(), 1);
        assert!(edges.matches_edge("xyz").is_some());
    }
}
