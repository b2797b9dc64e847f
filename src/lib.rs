//! # Compressed Trie
//!
//! A mutable compressed prefix tree (also known as a compact trie or radix
//! tree) over string keys.
//!
//! Every chain of single-child, non-terminal nodes is collapsed into one edge
//! labeled with the whole substring, so the tree only has internal nodes
//! where keys actually branch. Insertion splits an edge when a new key
//! partially overlaps it; deletion merges nodes it leaves redundant back into
//! their parent or grandparent.
//!
//! ## Features
//!
//! - **Pluggable edge lookup**: nodes store their edges through an
//!   [`EdgeStore`] strategy, either indexed by leading symbol
//!   ([`IndexedEdges`]) or scanned linearly ([`LinearEdges`])
//! - **Strict ownership**: each node owns its children, with no parent
//!   pointers or shared references
//! - **Observable structure**: every split and merge is reported to an
//!   injected [`TrieObserver`], by default through the `log` facade
//!
//! ## Example
//!
//! ```rust
//! use compressed_trie::IndexedTrie;
//!
//! let mut trie = IndexedTrie::new();
//! trie.insert("artifact");
//! trie.insert("artifice");
//! trie.insert("art");
//!
//! assert!(trie.search("art"));
//! assert!(!trie.search("arti"));
//!
//! trie.delete("art").unwrap();
//! assert_eq!(trie.len(), 2);
//! ```

mod indexed;
mod iter;
mod linear;
pub mod node;
pub mod observer;
mod store;
mod trie;
mod util;

// Re-export public types
pub use crate::indexed::IndexedEdges;
pub use crate::iter::Keys;
pub use crate::linear::LinearEdges;
pub use crate::node::Node;
pub use crate::observer::{
    EventKind, LogObserver, NoopObserver, RecordingObserver, TrieEvent, TrieObserver,
};
pub use crate::store::{EdgeIter, EdgeStore};
pub use crate::trie::{IndexedTrie, LinearTrie, Trie};

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key is not stored in the trie
    NotFound(String),
    /// The tree would violate, or already violates, one of its structural
    /// invariants
    InvariantViolation(String),
    /// Other error with description
    Other(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(key) => write!(f, "Key {:?} is not stored in the trie", key),
            Error::InvariantViolation(msg) => write!(f, "Trie invariant violated: {}", msg),
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}
