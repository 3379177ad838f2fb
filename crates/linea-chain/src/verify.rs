//! Chain integrity verification.

use digest::Digest;
use thiserror::Error;

use crate::chain::Chain;

/// Errors that can occur during chain verification.
///
/// An integrity violation is an expected, reportable outcome — callers
/// branch on it (log, refuse the data, alert) rather than crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("chain digest mismatch: tail claims {stored}, contents hash to {computed}")]
    DigestMismatch { stored: String, computed: String },
}

/// Verify a chain by re-deriving its cumulative digest from scratch.
///
/// Walks predecessor links from the tail to the first node, then folds the
/// value digests, oldest first, into a fresh accumulator. No node's cached
/// state is trusted; the only comparison is against the tail's stored
/// digest, byte for byte. An empty chain has nothing to check and verifies
/// vacuously.
///
/// Read-only and idempotent: repeated calls without intervening mutation
/// return the same outcome.
///
/// # Errors
///
/// Returns [`VerificationError::DigestMismatch`] when the recomputed digest
/// diverges from the stored one, i.e. some value's contents were changed
/// after it was appended.
pub fn verify_chain<D: Digest + Clone>(chain: &Chain<D>) -> Result<(), VerificationError> {
    let Some(tail) = chain.tail() else {
        return Ok(());
    };

    let mut ancestors: Vec<_> = chain.iter().collect();
    ancestors.reverse();

    let mut hasher = D::new();
    for node in &ancestors {
        hasher.update(node.value().digest::<D>());
    }
    let computed = hasher.finalize();

    let stored = tail.digest();
    if computed == stored {
        Ok(())
    } else {
        Err(VerificationError::DigestMismatch {
            stored: hex::encode(stored),
            computed: hex::encode(computed),
        })
    }
}
