//! Structural events emitted while the trie mutates.
//!
//! The trie never prints. Every structural case it takes during `insert` and
//! `delete` is reported to an injected [`TrieObserver`]; the default
//! [`LogObserver`] forwards them to the `log` facade.

use std::fmt;
use std::sync::{Arc, Mutex};

use log::{debug, trace};

/// A structural step taken by the trie.
///
/// Events borrow the key and labels involved; observers that need to keep
/// them around should convert them with [`TrieEvent::kind`] or `to_string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieEvent<'a> {
    /// An existing node became terminal for `key`
    Marked { key: &'a str },
    /// A fresh leaf was attached under `label`
    Branched { key: &'a str, label: &'a str },
    /// Edge `existing` was split at its common prefix `shared` with the new key
    Split {
        key: &'a str,
        shared: &'a str,
        existing: &'a str,
    },
    /// `key` was unmarked and its node still branches
    Unmarked { key: &'a str },
    /// The node of `key` was spliced into its parent under `label`
    Merged { key: &'a str, label: &'a str },
    /// The childless node of `key` was removed along with edge `label`
    Removed { key: &'a str, label: &'a str },
    /// The parent left redundant by a removal was merged into the grandparent
    /// under `label`
    Cascaded { key: &'a str, label: &'a str },
}

/// Owned discriminant of a [`TrieEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Marked,
    Branched,
    Split,
    Unmarked,
    Merged,
    Removed,
    Cascaded,
}

impl<'a> TrieEvent<'a> {
    /// Returns the discriminant of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            TrieEvent::Marked { .. } => EventKind::Marked,
            TrieEvent::Branched { .. } => EventKind::Branched,
            TrieEvent::Split { .. } => EventKind::Split,
            TrieEvent::Unmarked { .. } => EventKind::Unmarked,
            TrieEvent::Merged { .. } => EventKind::Merged,
            TrieEvent::Removed { .. } => EventKind::Removed,
            TrieEvent::Cascaded { .. } => EventKind::Cascaded,
        }
    }

    /// Returns the key whose insertion or deletion caused this event.
    pub fn key(&self) -> &'a str {
        match *self {
            TrieEvent::Marked { key }
            | TrieEvent::Branched { key, .. }
            | TrieEvent::Split { key, .. }
            | TrieEvent::Unmarked { key }
            | TrieEvent::Merged { key, .. }
            | TrieEvent::Removed { key, .. }
            | TrieEvent::Cascaded { key, .. } => key,
        }
    }

    /// Returns whether this event changed the shape of the tree, as opposed
    /// to only flipping a terminal flag or growing a leaf.
    pub fn is_structural(&self) -> bool {
        !matches!(
            self,
            TrieEvent::Marked { .. } | TrieEvent::Branched { .. } | TrieEvent::Unmarked { .. }
        )
    }
}

impl fmt::Display for TrieEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieEvent::Marked { key } => write!(f, "marked {:?} terminal", key),
            TrieEvent::Branched { key, label } => {
                write!(f, "inserted {:?} as new branch {:?}", key, label)
            }
            TrieEvent::Split {
                key,
                shared,
                existing,
            } => write!(
                f,
                "inserted {:?} by splitting {:?} at {:?}",
                key, existing, shared
            ),
            TrieEvent::Unmarked { key } => {
                write!(f, "deleted {:?}, node still branches", key)
            }
            TrieEvent::Merged { key, label } => {
                write!(f, "deleted {:?}, merged only child into {:?}", key, label)
            }
            TrieEvent::Removed { key, label } => {
                write!(f, "deleted {:?}, removed leaf edge {:?}", key, label)
            }
            TrieEvent::Cascaded { key, label } => write!(
                f,
                "deleted {:?}, merged redundant parent into {:?}",
                key, label
            ),
        }
    }
}

/// Receives the structural events of a trie.
pub trait TrieObserver {
    fn on_event(&mut self, event: &TrieEvent<'_>);
}

/// Forwards events to the `log` facade.
///
/// Shape changes are logged at `debug`, everything else at `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl TrieObserver for LogObserver {
    fn on_event(&mut self, event: &TrieEvent<'_>) {
        if event.is_structural() {
            debug!("{}", event);
        } else {
            trace!("{}", event);
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TrieObserver for NoopObserver {
    fn on_event(&mut self, _event: &TrieEvent<'_>) {}
}

/// Records the kind of every event into a shared buffer.
///
/// Clones share the same buffer, so a clone can be handed to a trie while
/// the original is kept to inspect what happened.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<EventKind>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the kinds recorded so far, oldest first.
    pub fn events(&self) -> Vec<EventKind> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns the recorded kinds and empties the buffer.
    pub fn drain(&self) -> Vec<EventKind> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl TrieObserver for RecordingObserver {
    fn on_event(&mut self, event: &TrieEvent<'_>) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.kind());
        }
    }
}
