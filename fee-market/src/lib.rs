//! # Vela Fee Market
//!
//! An **adaptive, EIP-1559-style fee market** for the Vela blockchain.
//!
//! Every block, Vela adjusts a **base fee per gas unit** from the previous
//! block's utilization, and classifies that utilization into one of three
//! **burn tiers** (cool / normal / hot) that decide what fraction of each
//! collected fee is destroyed. The remainder of a fee is split between the
//! treasury and the validator pool.
//!
//! All arithmetic is integer-only: fractions are basis points (1/10 000),
//! intermediate products widen to `u128`, and every result is exact — a fee
//! split always sums back to the original fee, to the last unit.
//!
//! ## Quick start
//!
//! ```rust
//! use vela_fee_market::{calculator, BurnTier, FeeMarketParams, FeeMarketState};
//!
//! let params = FeeMarketParams::default();
//! let state = FeeMarketState::genesis(params.min_gas_price_floor);
//!
//! // The previous block was completely full.
//! let utilization = calculator::block_utilization_bps(48_000_000, 48_000_000, 0);
//! let next_fee = calculator::next_base_fee(&params, state.base_fee, utilization);
//! assert!(next_fee > state.base_fee, "base fee should rise");
//!
//! // Split a 1 000 000-unit fee at the hot tier.
//! let tier = BurnTier::classify(utilization, &params);
//! let split = calculator::split_fee(1_000_000, tier.burn_bps(&params), params.treasury_fee_bps).unwrap();
//! assert_eq!(split.burn + split.treasury + split.validator, 1_000_000);
//! ```
//!
//! See [`calculator`] for the formulas and [`config`] for tunables.

pub mod calculator;
pub mod config;
pub mod error;
pub mod state;
pub mod tier;


// Re-exports for convenience.
pub use calculator::FeeSplit;
pub use config::{FeeMarketParams, BPS_DENOMINATOR};
pub use error::FeeError;
pub use state::FeeMarketState;
pub use tier::BurnTier;
