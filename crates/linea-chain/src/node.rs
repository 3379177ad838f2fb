//! Chain links and the borrowed view used to inspect them.

use std::fmt;

use digest::{Digest, Output};
use linea_hash::Value;

use crate::chain::Chain;

/// One link in the chain.
///
/// `state` is the rolling hash accumulator as of this link: a clone of the
/// predecessor's state (or the empty-input state for the first link),
/// updated with this value's digest. It is captured once at append time and
/// never touched again, even if the held value is later mutated in place —
/// that divergence is exactly what [`crate::verify_chain`] detects.
#[derive(Debug, Clone)]
pub(crate) struct Node<D> {
    pub(crate) value: Value,
    pub(crate) predecessor: Option<usize>,
    pub(crate) state: D,
}

/// Borrowed view of a single node.
///
/// Nodes are stored in the chain's arena and addressed by append position;
/// this view resolves those positions so callers can walk predecessor links
/// without touching indices themselves.
pub struct NodeRef<'a, D: Digest + Clone> {
    pub(crate) chain: &'a Chain<D>,
    pub(crate) index: usize,
}

impl<'a, D: Digest + Clone> NodeRef<'a, D> {
    fn node(&self) -> &'a Node<D> {
        &self.chain.nodes[self.index]
    }

    /// The value held at this position, read-only.
    pub fn value(&self) -> &'a Value {
        &self.node().value
    }

    /// The cumulative digest of the chain as of and including this value.
    pub fn digest(&self) -> Output<D> {
        self.node().state.clone().finalize()
    }

    /// [`NodeRef::digest`] rendered as lowercase hex.
    pub fn hash(&self) -> String {
        hex::encode(self.digest())
    }

    /// The previous link, absent for the first one.
    pub fn predecessor(&self) -> Option<NodeRef<'a, D>> {
        self.node().predecessor.map(|index| NodeRef {
            chain: self.chain,
            index,
        })
    }

    /// Append position of this node: 0 is the earliest.
    pub fn position(&self) -> usize {
        self.index
    }
}

impl<D: Digest + Clone> Clone for NodeRef<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Digest + Clone> Copy for NodeRef<'_, D> {}

impl<D: Digest + Clone> fmt::Display for NodeRef<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.value(), self.hash())
    }
}

#[cfg(test)]
mod tests {
    use linea_hash::Value;

    use crate::Chain;

    #[test]
    fn hash_is_hex_of_digest() {
        let chain: Chain = [Value::scalar("x")].into_iter().collect();
        let tail = chain.tail().unwrap();
        assert_eq!(tail.hash(), hex::encode(tail.digest()));
        assert_eq!(tail.hash().len(), 64);
    }

    #[test]
    fn display_renders_value_then_hash() {
        let chain: Chain = [Value::scalar("x")].into_iter().collect();
        let tail = chain.tail().unwrap();
        assert_eq!(tail.to_string(), format!("\"x\"({})", tail.hash()));
    }

    #[test]
    fn reading_a_node_does_not_disturb_its_stored_state() {
        let chain: Chain = [Value::scalar("x")].into_iter().collect();
        let tail = chain.tail().unwrap();
        // Finalizing for `.hash()` works on a clone of the accumulator.
        let first = tail.hash();
        let second = tail.hash();
        assert_eq!(first, second);
    }
}
