//! Append-only, tamper-evident hash chain.
//!
//! Each appended value is folded into a cumulative digest that also covers
//! every value before it, so the tail's digest summarizes the entire
//! history. Cumulative digests are captured once, when a value is appended;
//! [`Chain::verify`] re-derives the digest from the live value contents and
//! flags any out-of-band mutation as a [`VerificationError`].
//!
//! This is a strictly linear chain — a flat fold over value digests — not a
//! Merkle tree: there is no branching and there are no inclusion proofs.
//!
//! The hash algorithm is a type parameter (any [`digest::Digest`] with a
//! clonable accumulator) and defaults to SHA-256.
//!
//! # Example
//!
//! ```rust
//! use linea_chain::Chain;
//! use linea_hash::{Scalar, Value};
//!
//! let mut chain: Chain = [
//!     Value::scalar("foo"),
//!     Value::composite([Scalar::new("bar"), Scalar::new("baz")]),
//! ]
//! .into_iter()
//! .collect();
//! chain.verify().unwrap();
//!
//! // Mutating an embedded value leaves the cached digest untouched,
//! // so a later verify sees the divergence.
//! let composite = chain.value_mut(1).unwrap().as_composite_mut().unwrap();
//! *composite.get_mut(0).unwrap() = Scalar::new("quux");
//! assert!(chain.verify().is_err());
//! ```

mod chain;
mod node;
mod verify;

pub use chain::{Ancestors, Chain};
pub use node::NodeRef;
pub use verify::{verify_chain, VerificationError};
