//! Store traits abstracting the validator registry, the delegation
//! ledger, and the punishment audit log.
//!
//! The slashing engine borrows validator and delegation state for the
//! duration of one slashing transaction and writes back through these
//! traits; it owns none of it. Lookups return `Option` and persists are
//! infallible: a persistent implementation is expected to stage writes
//! inside the enclosing block-processing transaction and surface storage
//! failures when that transaction commits.
//!
//! [`InMemoryStakeStore`] implements all three traits for unit tests and
//! integration harnesses.

use std::collections::HashMap;

use veyra_types::{
    DelegationRecord, OwnerAddress, PunishHistory, ShareAmount, ValidatorPubKey, ValidatorRecord,
};

/// Validator candidate registry.
pub trait CandidateRegistry {
    /// Resolve a validator by consensus public key.
    fn validator_by_pub_key(&self, pub_key: &ValidatorPubKey) -> Option<ValidatorRecord>;

    /// Resolve a validator by its owner's address.
    fn validator_by_address(&self, address: &OwnerAddress) -> Option<ValidatorRecord>;

    /// Persist an updated validator record.
    fn update_validator(&mut self, validator: &ValidatorRecord);
}

/// Delegation ledger.
pub trait DelegationLedger {
    /// All delegations bound to a validator, the validator's
    /// self-delegation included as an ordinary entry.
    fn delegations_by_pub_key(&self, pub_key: &ValidatorPubKey) -> Vec<DelegationRecord>;

    /// Persist an updated delegation record.
    fn update_delegation(&mut self, delegation: &DelegationRecord);
}

/// Append-only punishment audit log.
pub trait PunishmentStore {
    /// Append one punishment record. Records are never mutated or
    /// deleted afterwards.
    fn append_punish_history(&mut self, record: PunishHistory);

    /// All punishment records for a validator, in append order.
    fn punish_history_by_pub_key(&self, pub_key: &ValidatorPubKey) -> Vec<PunishHistory>;

    /// All punishment records in the log, in append order.
    fn all_punish_history(&self) -> Vec<PunishHistory>;
}

/// In-memory stake store for tests and harnesses.
#[derive(Debug, Default)]
pub struct InMemoryStakeStore {
    validators: HashMap<ValidatorPubKey, ValidatorRecord>,
    delegations: HashMap<ValidatorPubKey, Vec<DelegationRecord>>,
    punish_history: Vec<PunishHistory>,
}

impl InMemoryStakeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with validator records.
    pub fn with_validators(validators: impl IntoIterator<Item = ValidatorRecord>) -> Self {
        let validators: HashMap<_, _> = validators
            .into_iter()
            .map(|v| (v.pub_key, v))
            .collect();
        Self {
            validators,
            delegations: HashMap::new(),
            punish_history: Vec::new(),
        }
    }

    /// Register a delegation under its validator's public key.
    pub fn add_delegation(&mut self, delegation: DelegationRecord) {
        self.delegations
            .entry(delegation.validator_pub_key)
            .or_default()
            .push(delegation);
    }

    /// Overwrite a validator's total shares (for testing).
    pub fn set_shares(&mut self, pub_key: &ValidatorPubKey, shares: ShareAmount) {
        if let Some(validator) = self.validators.get_mut(pub_key) {
            validator.shares = shares;
        }
    }

    /// Number of registered validators.
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Sum of total shares across all registered validators.
    pub fn total_shares(&self) -> ShareAmount {
        self.validators.values().map(|v| v.shares).sum()
    }

    /// Look up a single delegation (for testing).
    pub fn delegation(
        &self,
        pub_key: &ValidatorPubKey,
        delegator_address: &OwnerAddress,
    ) -> Option<&DelegationRecord> {
        self.delegations
            .get(pub_key)?
            .iter()
            .find(|d| d.delegator_address == *delegator_address)
    }
}

impl CandidateRegistry for InMemoryStakeStore {
    fn validator_by_pub_key(&self, pub_key: &ValidatorPubKey) -> Option<ValidatorRecord> {
        self.validators.get(pub_key).cloned()
    }

    fn validator_by_address(&self, address: &OwnerAddress) -> Option<ValidatorRecord> {
        self.validators
            .values()
            .find(|v| v.owner_address == *address)
            .cloned()
    }

    fn update_validator(&mut self, validator: &ValidatorRecord) {
        self.validators
            .insert(validator.pub_key, validator.clone());
    }
}

impl DelegationLedger for InMemoryStakeStore {
    fn delegations_by_pub_key(&self, pub_key: &ValidatorPubKey) -> Vec<DelegationRecord> {
        self.delegations.get(pub_key).cloned().unwrap_or_default()
    }

    fn update_delegation(&mut self, delegation: &DelegationRecord) {
        let entries = self
            .delegations
            .entry(delegation.validator_pub_key)
            .or_default();
        match entries
            .iter_mut()
            .find(|d| d.delegator_address == delegation.delegator_address)
        {
            Some(existing) => *existing = delegation.clone(),
            None => entries.push(delegation.clone()),
        }
    }
}

impl PunishmentStore for InMemoryStakeStore {
    fn append_punish_history(&mut self, record: PunishHistory) {
        self.punish_history.push(record);
    }

    fn punish_history_by_pub_key(&self, pub_key: &ValidatorPubKey) -> Vec<PunishHistory> {
        self.punish_history
            .iter()
            .filter(|r| r.validator_pub_key == *pub_key)
            .cloned()
            .collect()
    }

    fn all_punish_history(&self) -> Vec<PunishHistory> {
        self.punish_history.clone()
    }
}
