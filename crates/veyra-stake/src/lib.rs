//! Validator slashing core for the veyra delegated proof-of-stake chain.
//!
//! This crate penalizes validators for misbehavior by destroying a
//! fraction of the stake backing them, and permanently deactivates
//! validators who misbehave persistently. It provides:
//!
//! - [`AbsentValidators`]: per-height rolling miss counts for validators
//!   that failed to participate, owned by the block-processing context
//! - [`SlashingEngine`]: the three penalty trigger paths (byzantine
//!   evidence, accumulated absence, bad block proposal) plus the
//!   validator-removal transition
//! - Store traits ([`CandidateRegistry`], [`DelegationLedger`],
//!   [`PunishmentStore`]) abstracting the validator registry, the
//!   delegation ledger, and the punishment audit log, with
//!   [`InMemoryStakeStore`] for tests and harnesses
//! - [`ParamSource`] / [`Clock`] seams for the parameter store and the
//!   wall clock
//! - [`SlashingMetrics`]: counters over applied penalties and removals
//!
//! # Concurrency
//!
//! The engine is invoked synchronously within a single block-processing
//! step of the consensus driver; there is no internal parallelism and no
//! locking. Callers must serialize all mutating tracker calls per block,
//! and engine writes must land inside the same atomic state-transition
//! boundary as the rest of block processing so a crash mid-slash never
//! leaves delegation and validator share totals inconsistent.

pub mod absence;
pub mod engine;
pub mod metrics;
pub mod params;
pub mod store;

pub use absence::{Absence, AbsentValidators};
pub use engine::{
    SlashError, SlashingEngine, REASON_ABSENT, REASON_BAD_PROPOSER, REASON_BYZANTINE,
    REASON_DEACTIVATED,
};
pub use metrics::SlashingMetrics;
pub use params::{Clock, FixedClock, FixedParamSource, ParamSource, SystemClock};
pub use store::{CandidateRegistry, DelegationLedger, InMemoryStakeStore, PunishmentStore};
