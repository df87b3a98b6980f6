//! Validator, delegation, and punishment-history state types.

use crate::amount::{ShareAmount, SlashRatio};
use crate::primitives::{OwnerAddress, Timestamp, ValidatorPubKey};

/// Lifecycle status of a validator candidate.
///
/// `Active` is the implicit initial state for any validator with positive
/// shares. Within the slashing core `Inactive` is terminal: byzantine
/// evidence, a bad proposal, or reaching the absence window all end here,
/// and reactivation (if any) is a registry concern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ValidatorStatus {
    Inactive = 0,
    Active = 1,
}

/// On-chain record of a validator candidate.
///
/// The slashing core reads and decrements `shares`, may flip `status` to
/// [`ValidatorStatus::Inactive`], and refreshes `updated_at` on every
/// write. It does not own validator creation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidatorRecord {
    pub pub_key: ValidatorPubKey,
    pub owner_address: OwnerAddress,
    pub status: ValidatorStatus,
    /// Total stake-weighted voting power backing this validator, the sum
    /// of all its delegations' shares (self-delegation included).
    pub shares: ShareAmount,
    pub updated_at: Timestamp,
}

impl ValidatorRecord {
    pub fn is_active(&self) -> bool {
        self.status == ValidatorStatus::Active
    }

    /// Whether the validator has stake left to slash.
    pub fn has_stake(&self) -> bool {
        self.shares > 0
    }
}

/// A delegator's stake bound to one validator.
///
/// The validator's own self-delegation is an ordinary record among these.
/// The slashing core decrements `shares` proportionally and accumulates
/// the lifetime total into `slashed_amount`; it does not own delegation
/// creation or removal.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DelegationRecord {
    pub delegator_address: OwnerAddress,
    pub validator_pub_key: ValidatorPubKey,
    pub shares: ShareAmount,
    /// Lifetime total slashed from this delegation across all events.
    pub slashed_amount: ShareAmount,
    pub updated_at: Timestamp,
}

/// Immutable audit record of one slashing or deactivation event.
///
/// Appended exactly once per event (removal-only events carry a zero
/// ratio and zero amount) and never mutated or deleted afterwards.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PunishHistory {
    pub validator_pub_key: ValidatorPubKey,
    pub slashing_ratio: SlashRatio,
    /// Sum of all per-delegation deductions applied by the event.
    pub slash_amount: ShareAmount,
    pub reason: String,
    pub created_at: Timestamp,
}
