//! Core on-chain state types for the veyra delegated proof-of-stake chain.

pub mod amount;
pub mod primitives;
pub mod state_params;
pub mod state_stake;

pub use amount::*;
pub use primitives::*;
pub use state_params::*;
pub use state_stake::*;
