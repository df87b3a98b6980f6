//! Share and slashing-ratio arithmetic for stake accounting.
//!
//! All slashing math is explicit integer fixed-point: ratios are basis
//! points, multiplication widens to 128 bits, and division truncates
//! toward zero. No floating point is involved anywhere, so repeated
//! slashes can neither lose nor fabricate stake.

/// Stake-weighted voting power ("shares") of a validator or delegation.
///
/// Signed: a ratio above 100% (see [`SlashRatio::scale`]) debits more
/// than a delegation holds, and the resulting negative balance must be
/// representable for the per-event deductions to sum exactly to the
/// recorded slash amount. Validators whose total shares are non-positive
/// cannot be slashed further, so negative balances never compound.
pub type ShareAmount = i128;

/// Basis points in one whole unit (100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Fraction of shares destroyed by a slashing event, in basis points
/// (1 bps = 0.01%).
///
/// The bad-proposer path scales the base ratio by the absence window, so
/// a ratio may legitimately exceed [`BPS_DENOMINATOR`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct SlashRatio(pub u64);

impl SlashRatio {
    /// The zero ratio, used by removal-only punishment records.
    pub const ZERO: SlashRatio = SlashRatio(0);

    /// Create a ratio from raw basis points.
    pub const fn from_bps(bps: u64) -> Self {
        SlashRatio(bps)
    }

    /// Get the raw basis-point value.
    pub const fn as_bps(&self) -> u64 {
        self.0
    }

    /// Whether this ratio deducts nothing.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Compute `shares * ratio`, truncating toward zero.
    pub fn apply(&self, shares: ShareAmount) -> ShareAmount {
        shares * self.0 as i128 / BPS_DENOMINATOR as i128
    }

    /// Scale the ratio by an integer factor, saturating on overflow.
    pub const fn scale(&self, factor: u64) -> SlashRatio {
        SlashRatio(self.0.saturating_mul(factor))
    }
}
