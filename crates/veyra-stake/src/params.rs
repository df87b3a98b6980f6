//! Parameter-store and clock seams consumed by the slashing engine.

use veyra_types::{StakeParams, Timestamp};

/// Source of the current staking parameters.
///
/// Read once per slashing event so governance updates take effect at the
/// next event without restarting the engine.
pub trait ParamSource {
    fn current_params(&self) -> StakeParams;
}

/// Parameter source returning a fixed parameter set.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedParamSource {
    params: StakeParams,
}

impl FixedParamSource {
    pub fn new(params: StakeParams) -> Self {
        Self { params }
    }
}

impl ParamSource for FixedParamSource {
    fn current_params(&self) -> StakeParams {
        self.params
    }
}

/// Source of the current wall-clock time, used to stamp punishment
/// records and state writes.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time source for production use.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Deterministic clock for tests; always returns the configured instant.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
