//! Digest provider for linea values.
//!
//! This crate defines the value model the chain links over and computes
//! fixed-size cryptographic digests for it. Values come in two shapes:
//! [`Scalar`] (UTF-8 text, digested over its byte encoding) and
//! [`Composite`] (an ordered sequence of scalars, digested as a flat fold of
//! the element digests through a single running hasher).
//!
//! Digest computation is generic over any [`digest::Digest`] algorithm, so
//! the same value model works with SHA-256, SHA3-256, or any other
//! fixed-output hash from the RustCrypto family.
//!
//! ## Seeding convention
//!
//! A composite digest starts from a freshly created hasher with no input fed
//! yet — the algorithm's own empty-input state, not a block of zero bytes.
//! The chain layer relies on the same convention for its first link, so the
//! two crates stay digest-compatible.
//!
//! ## Example
//!
//! ```rust
//! use linea_hash::{Composite, Scalar};
//! use sha2::Sha256;
//!
//! let pair = Composite::new([Scalar::new("bar"), Scalar::new("baz")]);
//! let digest = pair.digest::<Sha256>();
//! assert_eq!(digest.len(), 32);
//! ```

use std::fmt;
use std::string::FromUtf8Error;

use digest::{Digest, Output};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing a value from raw bytes.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("scalar content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// A leaf value: an opaque piece of UTF-8 text.
///
/// The digest is computed over the raw byte encoding of the content, so
/// identical logical content always yields identical digest bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scalar(String);

impl Scalar {
    /// Create a scalar from text. Infallible: native strings are already
    /// valid UTF-8.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Create a scalar from raw bytes, validating the encoding.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::InvalidUtf8`] if the bytes are not valid
    /// UTF-8. Invalid content is rejected here, never coerced.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, EncodingError> {
        Ok(Self(String::from_utf8(bytes)?))
    }

    /// The text content.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digest of the content's byte encoding.
    pub fn digest<D: Digest>(&self) -> Output<D> {
        let mut hasher = D::new();
        hasher.update(self.0.as_bytes());
        hasher.finalize()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// An ordered sequence of scalars.
///
/// Elements stay mutable after construction; the digest is recomputed from
/// the current contents on every call, so it always reflects what the
/// composite holds right now.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composite(Vec<Scalar>);

impl Composite {
    pub fn new(items: impl IntoIterator<Item = Scalar>) -> Self {
        Self(items.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Scalar> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Scalar> {
        self.0.get_mut(index)
    }

    pub fn push(&mut self, item: Scalar) {
        self.0.push(item);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Scalar> {
        self.0.iter_mut()
    }

    /// Digest of the sequence: each element digest is fed, in order, into
    /// one running hasher seeded with the empty-input state, then finalized.
    ///
    /// This is a flat fold over element digests, not a Merkle tree — there
    /// is no pairwise branching, and the result depends on element order.
    pub fn digest<D: Digest>(&self) -> Output<D> {
        let mut hasher = D::new();
        for item in &self.0 {
            hasher.update(item.digest::<D>());
        }
        hasher.finalize()
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

/// A chainable value: either a single scalar or a composite of scalars.
///
/// Closed sum type so digest computation stays exhaustive and total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Scalar(Scalar),
    Composite(Composite),
}

impl Value {
    /// Shorthand for a scalar value.
    pub fn scalar(text: impl Into<String>) -> Self {
        Self::Scalar(Scalar::new(text))
    }

    /// Shorthand for a composite value.
    pub fn composite(items: impl IntoIterator<Item = Scalar>) -> Self {
        Self::Composite(Composite::new(items))
    }

    /// Digest of the value's current contents. Pure: no hidden state, and
    /// two calls on the same contents yield identical bytes.
    pub fn digest<D: Digest>(&self) -> Output<D> {
        match self {
            Self::Scalar(scalar) => scalar.digest::<D>(),
            Self::Composite(composite) => composite.digest::<D>(),
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Self::Scalar(_) => None,
            Self::Composite(composite) => Some(composite),
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut Composite> {
        match self {
            Self::Scalar(_) => None,
            Self::Composite(composite) => Some(composite),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Composite> for Value {
    fn from(composite: Composite) -> Self {
        Self::Composite(composite)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => scalar.fmt(f),
            Self::Composite(composite) => composite.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Sha256;
    use sha3::Sha3_256;

    // SHA-256 of the empty input.
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn scalar_digest_is_deterministic() {
        let value = Scalar::new("foo");
        assert_eq!(value.digest::<Sha256>(), value.digest::<Sha256>());
    }

    #[test]
    fn scalar_digest_matches_sha256_of_bytes() {
        let value = Scalar::new("foo");
        assert_eq!(
            hex::encode(value.digest::<Sha256>()),
            "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae"
        );
    }

    #[test]
    fn empty_scalar_digest_is_the_empty_input_digest() {
        assert_eq!(hex::encode(Scalar::new("").digest::<Sha256>()), EMPTY_SHA256);
    }

    #[test]
    fn empty_composite_digest_is_the_empty_input_digest() {
        // The empty-input seed with nothing folded in.
        let composite = Composite::default();
        assert_eq!(hex::encode(composite.digest::<Sha256>()), EMPTY_SHA256);
    }

    #[test]
    fn composite_digest_is_a_flat_fold_of_element_digests() {
        let composite = Composite::new([Scalar::new("bar"), Scalar::new("baz")]);
        // sha256(sha256("bar") || sha256("baz")), computed independently.
        assert_eq!(
            hex::encode(composite.digest::<Sha256>()),
            "76a857d9109b835d24a723f449467a064f82eb08684739bd87951093f6eb6191"
        );
    }

    #[test]
    fn composite_digest_depends_on_element_order() {
        let ab = Composite::new([Scalar::new("a"), Scalar::new("b")]);
        let ba = Composite::new([Scalar::new("b"), Scalar::new("a")]);
        assert_ne!(ab.digest::<Sha256>(), ba.digest::<Sha256>());
    }

    #[test]
    fn composite_digest_tracks_in_place_mutation() {
        let mut composite = Composite::new([Scalar::new("bar"), Scalar::new("baz")]);
        let before = composite.digest::<Sha256>();
        *composite.get_mut(0).unwrap() = Scalar::new("quux");
        assert_ne!(before, composite.digest::<Sha256>());
    }

    #[test]
    fn from_utf8_accepts_valid_bytes() {
        let value = Scalar::from_utf8(b"hello".to_vec()).unwrap();
        assert_eq!(value.as_str(), "hello");
    }

    #[test]
    fn from_utf8_rejects_invalid_bytes() {
        let result = Scalar::from_utf8(vec![0xff, 0xfe]);
        assert!(matches!(result, Err(EncodingError::InvalidUtf8(_))));
    }

    #[test]
    fn algorithms_produce_distinct_digests() {
        let value = Value::scalar("foo");
        assert_ne!(
            value.digest::<Sha256>().as_slice(),
            value.digest::<Sha3_256>().as_slice()
        );
    }

    #[test]
    fn display_renders_scalars_quoted_and_composites_bracketed() {
        assert_eq!(Value::scalar("foo").to_string(), "\"foo\"");
        let composite = Value::composite([Scalar::new("bar"), Scalar::new("baz")]);
        assert_eq!(composite.to_string(), "[\"bar\", \"baz\"]");
    }

    #[test]
    fn value_round_trips_through_json() {
        let value = Value::composite([Scalar::new("bar"), Scalar::new("baz")]);
        let json = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }
}
