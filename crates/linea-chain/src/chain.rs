//! The append-only chain and its traversal.

use std::fmt;

use digest::Digest;
use linea_hash::Value;
use sha2::Sha256;

use crate::node::{Node, NodeRef};
use crate::verify::{verify_chain, VerificationError};

/// An append-only, tamper-evident sequence of values.
///
/// Every appended value is folded into a rolling hash that also covers every
/// value before it, so the tail's digest summarizes the whole history. The
/// chain only ever grows; links are never removed or reordered.
///
/// Nodes live in an arena indexed by append position, each storing the index
/// of its predecessor. The single generic parameter selects the hash
/// algorithm; it defaults to SHA-256 and accepts any fixed-output algorithm
/// whose accumulator can be snapshotted (`Digest + Clone`).
///
/// A `Chain` is a plain owned value: `append` takes `&mut self`, reads take
/// `&self`, so concurrent readers are fine but a writer excludes everything
/// else. Callers that need multiple writers must wrap the chain in their own
/// lock.
pub struct Chain<D: Digest + Clone = Sha256> {
    pub(crate) nodes: Vec<Node<D>>,
}

impl<D: Digest + Clone> Chain<D> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a value to the chain.
    ///
    /// The new link's accumulator is a snapshot of the current tail's (or
    /// the empty-input state when the chain is empty), updated with the
    /// value's digest. The previous tail is untouched and stays reachable
    /// through the new tail's predecessor link. Cannot fail.
    pub fn append(&mut self, value: Value) {
        let mut state = match self.nodes.last() {
            Some(tail) => tail.state.clone(),
            None => D::new(),
        };
        state.update(value.digest::<D>());
        let predecessor = self.nodes.len().checked_sub(1);
        self.nodes.push(Node {
            value,
            predecessor,
            state,
        });
    }

    /// Number of links in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The most recently appended node, or `None` for an empty chain.
    pub fn tail(&self) -> Option<NodeRef<'_, D>> {
        self.nodes.len().checked_sub(1).map(|index| NodeRef {
            chain: self,
            index,
        })
    }

    /// The node at an append position (0 is the earliest).
    pub fn get(&self, position: usize) -> Option<NodeRef<'_, D>> {
        (position < self.nodes.len()).then(|| NodeRef {
            chain: self,
            index: position,
        })
    }

    /// Mutable access to the value at an append position.
    ///
    /// Mutating through this handle does not update any link's stored
    /// accumulator — cumulative digests are captured once at append time.
    /// A subsequent [`Chain::verify`] recomputes from the live contents and
    /// reports the divergence. This asymmetry is the integrity check, not an
    /// oversight.
    pub fn value_mut(&mut self, position: usize) -> Option<&mut Value> {
        self.nodes.get_mut(position).map(|node| &mut node.value)
    }

    /// Walk the chain from the tail back to the earliest link.
    ///
    /// Lazy and restartable: each call starts fresh from the current tail.
    /// This tail-to-earliest order is also the `Display` order.
    pub fn iter(&self) -> Ancestors<'_, D> {
        Ancestors { next: self.tail() }
    }

    /// Recompute the full cumulative digest from the live value contents and
    /// compare it against the tail's stored digest.
    ///
    /// See [`verify_chain`]. The empty chain verifies vacuously.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::DigestMismatch`] if any value was
    /// mutated after it was appended.
    pub fn verify(&self) -> Result<(), VerificationError> {
        verify_chain(self)
    }
}

impl<D: Digest + Clone> Default for Chain<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest + Clone> Extend<Value> for Chain<D> {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, values: I) {
        for value in values {
            self.append(value);
        }
    }
}

/// Build a chain by appending each value in iteration order. Plain repeated
/// appends, no batching.
impl<D: Digest + Clone> FromIterator<Value> for Chain<D> {
    fn from_iter<I: IntoIterator<Item = Value>>(values: I) -> Self {
        let mut chain = Self::new();
        chain.extend(values);
        chain
    }
}

/// Renders nodes tail-to-earliest, space-separated, each as
/// `"<value-repr>(<hex-digest>)"`.
impl<D: Digest + Clone> fmt::Display for Chain<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Iterator over nodes from the tail back to the first link.
pub struct Ancestors<'a, D: Digest + Clone> {
    next: Option<NodeRef<'a, D>>,
}

impl<'a, D: Digest + Clone> Iterator for Ancestors<'a, D> {
    type Item = NodeRef<'a, D>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.predecessor();
        Some(current)
    }
}
