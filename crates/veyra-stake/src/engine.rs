//! The slashing engine: trigger dispatch, proportional deduction, and
//! the validator-removal transition.
//!
//! Three entry points cover the misbehavior classes adjudicated by the
//! consensus driver:
//!
//! - [`SlashingEngine::slash_byzantine_validator`]: confirmed
//!   double-signing or equivalent equivocation evidence
//! - [`SlashingEngine::slash_absent_validator`]: accumulated block
//!   absence, with removal at the absence window boundary
//! - [`SlashingEngine::slash_bad_proposer`]: an invalid block proposal,
//!   penalized as a full run of maximum absences and always removed
//!
//! Every monetary penalty runs through one shared path: resolve the
//! validator, deduct `shares * ratio` from each of its delegations
//! (self-delegation included, not special-cased), mirror each deduction
//! on the validator's total shares, and append one [`PunishHistory`]
//! record for the event.

use std::fmt;

use veyra_types::{
    DelegationRecord, OwnerAddress, PunishHistory, ShareAmount, SlashRatio, Timestamp,
    ValidatorPubKey, ValidatorStatus,
};

use crate::absence::Absence;
use crate::metrics::SlashingMetrics;
use crate::params::{Clock, ParamSource};
use crate::store::{CandidateRegistry, DelegationLedger, PunishmentStore};

/// Reason recorded for a byzantine-evidence slash.
pub const REASON_BYZANTINE: &str = "Byzantine validator";
/// Reason recorded for an accumulated-absence slash.
pub const REASON_ABSENT: &str = "Absent validator";
/// Reason recorded for a bad-proposal slash.
pub const REASON_BAD_PROPOSER: &str = "Bad block proposer";
/// Reason recorded for the removal transition itself.
pub const REASON_DEACTIVATED: &str = "Validator deactivated";

/// Error type for slashing operations.
///
/// Resolution failure is the only error condition; everything else
/// ("nothing to do" states such as an already-spent validator or an
/// absence count short of the window) is a silent no-op, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlashError {
    /// The public key does not resolve to a known validator.
    ValidatorNotFound(ValidatorPubKey),
}

impl fmt::Display for SlashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlashError::ValidatorNotFound(pub_key) => {
                write!(f, "validator {} not found", pub_key)
            }
        }
    }
}

impl std::error::Error for SlashError {}

/// The slashing engine.
///
/// Generic over the stake store, the parameter source, and the clock so
/// nodes can wire persistent implementations while tests run against
/// [`crate::store::InMemoryStakeStore`] with a fixed clock. The engine
/// holds no penalty state of its own: it reads parameters per event,
/// writes through the store, and leaves the punishment log as the
/// authoritative record.
pub struct SlashingEngine<S, P, C> {
    store: S,
    params: P,
    clock: C,
    metrics: SlashingMetrics,
}

impl<S, P, C> SlashingEngine<S, P, C>
where
    S: CandidateRegistry + DelegationLedger + PunishmentStore,
    P: ParamSource,
    C: Clock,
{
    /// Create an engine over the given collaborators.
    pub fn new(store: S, params: P, clock: C) -> Self {
        Self {
            store,
            params,
            clock,
            metrics: SlashingMetrics::new(),
        }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a mutable reference to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Engine metrics.
    pub fn metrics(&self) -> &SlashingMetrics {
        &self.metrics
    }

    /// Slash a validator for confirmed byzantine behavior at the base
    /// ratio.
    pub fn slash_byzantine_validator(
        &mut self,
        pub_key: ValidatorPubKey,
    ) -> Result<(), SlashError> {
        let ratio = self.params.current_params().slashing_ratio;
        self.slash(pub_key, REASON_BYZANTINE, ratio)
    }

    /// Penalize a validator for accumulated absence.
    ///
    /// While the count is below the absence window the validator is
    /// slashed at the base ratio and stays active. At a count exactly
    /// equal to the window the validator is removed instead: removal
    /// and the final-ratio slash are mutually exclusive outcomes per
    /// call, selected by exact equality. Past the window there is
    /// nothing left to do.
    pub fn slash_absent_validator(
        &mut self,
        pub_key: ValidatorPubKey,
        absence: &Absence,
    ) -> Result<(), SlashError> {
        let params = self.params.current_params();
        if absence.count() < params.max_absence_blocks {
            return self.slash(pub_key, REASON_ABSENT, params.slashing_ratio);
        }
        if absence.count() == params.max_absence_blocks {
            return self.remove_validator(pub_key);
        }
        Ok(())
    }

    /// Slash a validator for proposing a bad block, then remove it.
    ///
    /// The ratio is the base ratio amplified by the absence window: a
    /// bad proposal costs as much as a full run of maximum absences, and
    /// may exceed 100% of the backing shares.
    pub fn slash_bad_proposer(&mut self, pub_key: ValidatorPubKey) -> Result<(), SlashError> {
        let params = self.params.current_params();
        let ratio = params
            .slashing_ratio
            .scale(u64::from(params.max_absence_blocks));
        self.slash(pub_key, REASON_BAD_PROPOSER, ratio)?;
        self.remove_validator(pub_key)
    }

    /// Mark a validator inactive and record the deactivation.
    ///
    /// Appends a punishment record with zero ratio and zero amount: the
    /// removal event itself is audited, distinct from any monetary
    /// slash. Inactive is terminal within this core.
    pub fn remove_validator(&mut self, pub_key: ValidatorPubKey) -> Result<(), SlashError> {
        let mut validator = self
            .store
            .validator_by_pub_key(&pub_key)
            .ok_or(SlashError::ValidatorNotFound(pub_key))?;

        let now = self.clock.now();
        validator.status = ValidatorStatus::Inactive;
        validator.updated_at = now;
        self.store.update_validator(&validator);

        self.store.append_punish_history(PunishHistory {
            validator_pub_key: pub_key,
            slashing_ratio: SlashRatio::ZERO,
            slash_amount: 0,
            reason: REASON_DEACTIVATED.to_string(),
            created_at: now,
        });
        self.metrics.inc_removal();
        self.metrics.inc_history_append();

        eprintln!("[SLASHING] Removed validator {}: marked inactive", pub_key);
        Ok(())
    }

    /// Apply one slashing event at `ratio` across all delegations of the
    /// validator resolved by `pub_key`.
    ///
    /// A validator with no remaining stake (total shares <= 0) cannot be
    /// slashed further: no deduction is applied and no history record is
    /// appended.
    fn slash(
        &mut self,
        pub_key: ValidatorPubKey,
        reason: &str,
        ratio: SlashRatio,
    ) -> Result<(), SlashError> {
        let validator = self
            .store
            .validator_by_pub_key(&pub_key)
            .ok_or(SlashError::ValidatorNotFound(pub_key))?;

        if !validator.has_stake() {
            return Ok(());
        }

        let now = self.clock.now();
        let delegations = self.store.delegations_by_pub_key(&pub_key);
        let mut total_deduction: ShareAmount = 0;
        for mut delegation in delegations {
            let amount = ratio.apply(delegation.shares);
            self.slash_delegation(&mut delegation, &validator.owner_address, amount, now)?;
            total_deduction += amount;
        }

        self.store.append_punish_history(PunishHistory {
            validator_pub_key: pub_key,
            slashing_ratio: ratio,
            slash_amount: total_deduction,
            reason: reason.to_string(),
            created_at: now,
        });
        self.metrics.inc_slash();
        self.metrics.add_shares_slashed(total_deduction);
        self.metrics.inc_history_append();

        eprintln!(
            "[SLASHING] Slashed validator {}: reason={}, ratio={} bps, total deduction={}",
            pub_key,
            reason,
            ratio.as_bps(),
            total_deduction
        );
        Ok(())
    }

    /// Deduct `amount` from one delegation and mirror the deduction on
    /// the validator's total shares, persisting both records.
    fn slash_delegation(
        &mut self,
        delegation: &mut DelegationRecord,
        validator_address: &OwnerAddress,
        amount: ShareAmount,
        now: Timestamp,
    ) -> Result<(), SlashError> {
        delegation.shares -= amount;
        delegation.slashed_amount += amount;
        delegation.updated_at = now;
        self.store.update_delegation(delegation);

        let mut validator = self
            .store
            .validator_by_address(validator_address)
            .ok_or(SlashError::ValidatorNotFound(delegation.validator_pub_key))?;
        validator.shares -= amount;
        validator.updated_at = now;
        self.store.update_validator(&validator);
        Ok(())
    }
}
