//! Core primitives and identity types for the veyra chain.

use std::fmt;

/// Account address of a delegator or a validator owner (20 bytes).
pub type OwnerAddress = [u8; 20];

/// Height of a block in the canonical chain.
pub type BlockHeight = u64;

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Consensus public key identifying a validator.
///
/// This is the canonical validator identity in the staking layer: the
/// absence tracker, the candidate registry, and punishment history are all
/// keyed by it. The owner's [`OwnerAddress`] is a separate identity used
/// for address-based registry lookups.
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ValidatorPubKey(pub [u8; 32]);

impl ValidatorPubKey {
    /// Create a public key from raw bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        ValidatorPubKey(bytes)
    }

    /// Get the raw key bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ValidatorPubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ValidatorPubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValidatorPubKey({})", self)
    }
}
