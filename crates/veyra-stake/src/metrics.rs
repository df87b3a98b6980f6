//! Counters over applied penalties and removals.

use std::sync::atomic::{AtomicU64, Ordering};

use veyra_types::ShareAmount;

/// Metrics for the slashing engine.
///
/// Counters use relaxed ordering; they feed observability only and take
/// no part in consensus-critical accounting (the punishment log is the
/// authoritative record).
#[derive(Debug, Default)]
pub struct SlashingMetrics {
    slashes_total: AtomicU64,
    removals_total: AtomicU64,
    history_appends_total: AtomicU64,
    shares_slashed_total: AtomicU64,
}

impl SlashingMetrics {
    /// Create a metrics instance with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one applied slash (a penalty event that performed deductions).
    pub fn inc_slash(&self) {
        self.slashes_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one validator removal.
    pub fn inc_removal(&self) {
        self.removals_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one punishment-history append.
    pub fn inc_history_append(&self) {
        self.history_appends_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Accumulate slashed shares, clamped to the u64 counter range.
    pub fn add_shares_slashed(&self, amount: ShareAmount) {
        let clamped = u64::try_from(amount.max(0)).unwrap_or(u64::MAX);
        self.shares_slashed_total.fetch_add(clamped, Ordering::Relaxed);
    }

    /// Total slash events that performed deductions.
    pub fn slashes_total(&self) -> u64 {
        self.slashes_total.load(Ordering::Relaxed)
    }

    /// Total validator removals.
    pub fn removals_total(&self) -> u64 {
        self.removals_total.load(Ordering::Relaxed)
    }

    /// Total punishment-history records appended.
    pub fn history_appends_total(&self) -> u64 {
        self.history_appends_total.load(Ordering::Relaxed)
    }

    /// Total shares slashed across all events (u64 view).
    pub fn shares_slashed_total(&self) -> u64 {
        self.shares_slashed_total.load(Ordering::Relaxed)
    }
}
