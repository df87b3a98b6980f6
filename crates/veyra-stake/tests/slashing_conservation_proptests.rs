//! Slashing Conservation Property-Based Tests
//!
//! Property-based tests over the proportional deduction path, validating
//! the stake-conservation invariants:
//!
//! - The sum of per-delegation deductions always equals the recorded
//!   slash amount, and equals the total decrement applied to the
//!   validator's shares
//! - Validators with non-positive total shares are never mutated and
//!   produce no punishment record
//! - Removal never changes any share balance

use proptest::prelude::*;

use veyra_stake::{
    CandidateRegistry, DelegationLedger, FixedClock, FixedParamSource, InMemoryStakeStore,
    PunishmentStore, SlashingEngine,
};
use veyra_types::{
    DelegationRecord, ShareAmount, SlashRatio, StakeParams, ValidatorPubKey, ValidatorRecord,
    ValidatorStatus,
};

// ============================================================================
// Test configuration constants
// ============================================================================

/// Maximum number of delegations in generated scenarios.
const MAX_DELEGATIONS: usize = 12;

/// Maximum shares per generated delegation.
const MAX_DELEGATION_SHARES: i128 = 1_000_000_000;

/// Maximum base ratio in generated scenarios (100%).
const MAX_RATIO_BPS: u64 = 10_000;

/// Maximum absence window in generated scenarios.
const MAX_ABSENCE_BLOCKS: u32 = 64;

// ============================================================================
// Helpers and strategies
// ============================================================================

fn pk(tag: u8) -> ValidatorPubKey {
    ValidatorPubKey::new([tag; 32])
}

fn store_for(delegation_shares: &[ShareAmount]) -> InMemoryStakeStore {
    let total: ShareAmount = delegation_shares.iter().sum();
    let mut store = InMemoryStakeStore::with_validators(vec![ValidatorRecord {
        pub_key: pk(1),
        owner_address: [1u8; 20],
        status: ValidatorStatus::Active,
        shares: total,
        updated_at: 0,
    }]);
    for (i, shares) in delegation_shares.iter().enumerate() {
        store.add_delegation(DelegationRecord {
            delegator_address: [i as u8; 20],
            validator_pub_key: pk(1),
            shares: *shares,
            slashed_amount: 0,
            updated_at: 0,
        });
    }
    store
}

fn engine_for(
    delegation_shares: &[ShareAmount],
    ratio_bps: u64,
    max_absence_blocks: u32,
) -> SlashingEngine<InMemoryStakeStore, FixedParamSource, FixedClock> {
    let params = StakeParams {
        slashing_ratio: SlashRatio::from_bps(ratio_bps),
        max_absence_blocks,
    };
    SlashingEngine::new(
        store_for(delegation_shares),
        FixedParamSource::new(params),
        FixedClock(1_700_000_000),
    )
}

fn delegation_shares_strategy() -> impl Strategy<Value = Vec<ShareAmount>> {
    prop::collection::vec(1..MAX_DELEGATION_SHARES, 1..MAX_DELEGATIONS)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_deductions_conserve_stake(
        shares in delegation_shares_strategy(),
        ratio_bps in 0..=MAX_RATIO_BPS,
    ) {
        let total_before: ShareAmount = shares.iter().sum();
        let mut engine = engine_for(&shares, ratio_bps, 12);

        engine.slash_byzantine_validator(pk(1)).unwrap();

        let store = engine.store();
        let validator = store.validator_by_pub_key(&pk(1)).unwrap();
        let records = store.punish_history_by_pub_key(&pk(1));
        prop_assert_eq!(records.len(), 1);

        let delegations = store.delegations_by_pub_key(&pk(1));
        let deducted: ShareAmount = delegations.iter().map(|d| d.slashed_amount).sum();
        let remaining: ShareAmount = delegations.iter().map(|d| d.shares).sum();

        // Sum of deductions == recorded amount == validator decrement.
        prop_assert_eq!(deducted, records[0].slash_amount);
        prop_assert_eq!(total_before - validator.shares, records[0].slash_amount);
        // Nothing lost or fabricated inside the delegation set either.
        prop_assert_eq!(remaining + deducted, total_before);
        // A ratio in [0, 100%] never deducts more than one whole unit.
        prop_assert!(deducted <= total_before);
        prop_assert!(validator.shares >= 0);
    }

    #[test]
    fn prop_amplified_ratio_still_conserves(
        shares in delegation_shares_strategy(),
        ratio_bps in 1..=MAX_RATIO_BPS,
        window in 1..=MAX_ABSENCE_BLOCKS,
    ) {
        let total_before: ShareAmount = shares.iter().sum();
        let mut engine = engine_for(&shares, ratio_bps, window);

        engine.slash_bad_proposer(pk(1)).unwrap();

        let store = engine.store();
        let validator = store.validator_by_pub_key(&pk(1)).unwrap();
        let records = store.punish_history_by_pub_key(&pk(1));
        // One amplified slash record plus one deactivation record.
        prop_assert_eq!(records.len(), 2);
        prop_assert_eq!(
            records[0].slashing_ratio,
            SlashRatio::from_bps(ratio_bps).scale(u64::from(window))
        );

        let deducted: ShareAmount = store
            .delegations_by_pub_key(&pk(1))
            .iter()
            .map(|d| d.slashed_amount)
            .sum();
        prop_assert_eq!(deducted, records[0].slash_amount);
        prop_assert_eq!(total_before - validator.shares, records[0].slash_amount);
        prop_assert_eq!(validator.status, ValidatorStatus::Inactive);
    }

    #[test]
    fn prop_non_positive_stake_never_mutated(
        shares in delegation_shares_strategy(),
        ratio_bps in 0..=MAX_RATIO_BPS,
        total in -1_000_000i128..=0,
    ) {
        let mut engine = engine_for(&shares, ratio_bps, 12);
        engine.store_mut().set_shares(&pk(1), total);

        engine.slash_byzantine_validator(pk(1)).unwrap();

        let store = engine.store();
        prop_assert!(store.all_punish_history().is_empty());
        prop_assert_eq!(store.validator_by_pub_key(&pk(1)).unwrap().shares, total);
        for (i, original) in shares.iter().enumerate() {
            let d = store.delegation(&pk(1), &[i as u8; 20]).unwrap();
            prop_assert_eq!(d.shares, *original);
            prop_assert_eq!(d.slashed_amount, 0);
        }
    }

    #[test]
    fn prop_removal_changes_no_balance(
        shares in delegation_shares_strategy(),
    ) {
        let total_before: ShareAmount = shares.iter().sum();
        let mut engine = engine_for(&shares, 1_000, 12);

        engine.remove_validator(pk(1)).unwrap();

        let store = engine.store();
        let validator = store.validator_by_pub_key(&pk(1)).unwrap();
        prop_assert_eq!(validator.status, ValidatorStatus::Inactive);
        prop_assert_eq!(validator.shares, total_before);
        let remaining: ShareAmount = store
            .delegations_by_pub_key(&pk(1))
            .iter()
            .map(|d| d.shares)
            .sum();
        prop_assert_eq!(remaining, total_before);
    }
}
