//! Rolling absence tracking for validators that miss blocks.
//!
//! The block-production loop records a miss for every validator that
//! failed to participate at the current height, then calls
//! [`AbsentValidators::clear`] once so that only validators marked absent
//! this round survive into the next. When a validator's accumulated count
//! reaches the configured absence window, the slashing engine removes it
//! (see [`crate::engine::SlashingEngine::slash_absent_validator`]).
//!
//! The tracker is an explicit object owned by the block-processing
//! context, with a lifecycle tied to the validator-set epoch. It has no
//! internal locking; callers serialize all mutating calls per block.

use std::collections::HashMap;

use veyra_types::{BlockHeight, ValidatorPubKey};

/// Per-validator rolling miss counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Absence {
    count: u32,
    last_seen_height: BlockHeight,
}

impl Absence {
    /// Record one more miss: the count and the stored height advance
    /// together by exactly one step. The caller's height is only read
    /// when a fresh entry is created.
    fn accumulate(&mut self) {
        self.count += 1;
        self.last_seen_height += 1;
    }

    /// Accumulated miss count, compared against the absence window.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Height of the most recent recorded miss.
    pub fn last_seen_height(&self) -> BlockHeight {
        self.last_seen_height
    }
}

#[cfg(test)]
impl Absence {
    /// Build an absence at an arbitrary count (for engine tests).
    pub fn at_count(count: u32, last_seen_height: BlockHeight) -> Self {
        Absence {
            count,
            last_seen_height,
        }
    }
}

/// Tracker mapping each absent validator's public key to its [`Absence`].
///
/// Invariant: a key exists only for validators currently accumulating
/// misses; presence at the current height removes the entry (via
/// [`AbsentValidators::remove`] or [`AbsentValidators::clear`]).
#[derive(Debug, Default)]
pub struct AbsentValidators {
    validators: HashMap<ValidatorPubKey, Absence>,
}

impl AbsentValidators {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a miss for `pub_key` at `height`.
    ///
    /// A fresh entry starts at count 1 with the passed height; an
    /// existing entry accumulates, advancing its stored height by one
    /// regardless of the height argument.
    pub fn add(&mut self, pub_key: ValidatorPubKey, height: BlockHeight) {
        match self.validators.get_mut(&pub_key) {
            Some(absence) => absence.accumulate(),
            None => {
                self.validators.insert(
                    pub_key,
                    Absence {
                        count: 1,
                        last_seen_height: height,
                    },
                );
            }
        }
    }

    /// Drop the entry for `pub_key`, if any.
    pub fn remove(&mut self, pub_key: &ValidatorPubKey) {
        self.validators.remove(pub_key);
    }

    /// Retain exactly the validators marked absent at `current_height`.
    ///
    /// Called once per height after all [`AbsentValidators::add`] calls
    /// for that height: entries whose stored height lags the current one
    /// belong to validators that were present this round.
    pub fn clear(&mut self, current_height: BlockHeight) {
        self.validators
            .retain(|_, absence| absence.last_seen_height == current_height);
    }

    /// Whether `pub_key` is currently tracked as absent.
    pub fn contains(&self, pub_key: &ValidatorPubKey) -> bool {
        self.validators.contains_key(pub_key)
    }

    /// Read access to a tracked absence, for threshold comparisons and
    /// for passing to the slashing engine.
    pub fn get(&self, pub_key: &ValidatorPubKey) -> Option<&Absence> {
        self.validators.get(pub_key)
    }

    /// Number of validators currently tracked as absent.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
