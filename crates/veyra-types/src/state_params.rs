//! Staking parameters supplied by the parameter store.

use std::fmt;

use crate::amount::{SlashRatio, BPS_DENOMINATOR};

/// Parameters governing the slashing engine.
///
/// These are read from the chain's parameter store once per slashing
/// event; the engine never caches them across events, so a governance
/// update takes effect at the next event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StakeParams {
    /// Base fraction of shares destroyed per slashing event.
    pub slashing_ratio: SlashRatio,
    /// Accumulated absence count at which a validator is removed. Also
    /// the amplification factor applied to the base ratio for a bad
    /// block proposal.
    pub max_absence_blocks: u32,
}

impl Default for StakeParams {
    fn default() -> Self {
        Self {
            slashing_ratio: SlashRatio::from_bps(100), // 1%
            max_absence_blocks: 12,
        }
    }
}

impl StakeParams {
    /// DevNet parameters: aggressive 10% base ratio for short test runs.
    pub fn devnet() -> Self {
        Self {
            slashing_ratio: SlashRatio::from_bps(1_000),
            ..Self::default()
        }
    }

    /// Fail-closed validation of the parameter set.
    ///
    /// The base ratio must not exceed one whole unit (the bad-proposer
    /// amplification is the only path allowed past 100%), and the absence
    /// window must be non-zero or every tracked validator would be
    /// removed on its first recorded miss.
    pub fn validate(&self) -> Result<(), StakeParamsError> {
        if self.slashing_ratio.as_bps() > BPS_DENOMINATOR {
            return Err(StakeParamsError::RatioOutOfRange(
                self.slashing_ratio.as_bps(),
            ));
        }
        if self.max_absence_blocks == 0 {
            return Err(StakeParamsError::ZeroAbsenceWindow);
        }
        Ok(())
    }
}

/// Error type for stake parameter validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StakeParamsError {
    /// Base slashing ratio exceeds 100% (10_000 bps).
    RatioOutOfRange(u64),
    /// The absence window is zero.
    ZeroAbsenceWindow,
}

impl fmt::Display for StakeParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StakeParamsError::RatioOutOfRange(bps) => {
                write!(f, "base slashing ratio {} bps exceeds 100%", bps)
            }
            StakeParamsError::ZeroAbsenceWindow => {
                write!(f, "max absence blocks must be non-zero")
            }
        }
    }
}

impl std::error::Error for StakeParamsError {}
