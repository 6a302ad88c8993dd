//! # Vela Economics
//!
//! The **economic state-transition core** of a Vela chain: the per-block
//! engine that ties the adaptive fee market ([`vela_fee_market`]) and the
//! token supply engine ([`vela_tokenomics`]) to the host's consensus loop
//! and account ledger.
//!
//! The consensus layer calls the engine once per block, in a fixed order:
//! `on_block_begin` → `on_tx_fee_paid` (per fee-bearing transaction) →
//! `on_block_end`. All side effects go through the [`Ledger`] trait; all
//! mutations are applied by the single consensus execution thread; read-only
//! queries observe only committed state and never error on missing context.
//!
//! ## Quick start
//!
//! ```rust
//! use vela_economics::{EconomicsEngine, GenesisConfig, Ledger, AccountId, LedgerError};
//!
//! // A toy ledger that accepts everything.
//! struct NullLedger;
//! impl Ledger for NullLedger {
//!     fn mint(&mut self, _: &AccountId, _: u64) -> Result<(), LedgerError> { Ok(()) }
//!     fn burn(&mut self, _: &AccountId, _: u64) -> Result<(), LedgerError> { Ok(()) }
//!     fn transfer(&mut self, _: &AccountId, _: &AccountId, _: u64) -> Result<(), LedgerError> { Ok(()) }
//! }
//!
//! let genesis = GenesisConfig {
//!     genesis_supply: 1_000_000_000,
//!     ..GenesisConfig::default()
//! };
//! let mut engine = EconomicsEngine::new(genesis).unwrap();
//! let mut ledger = NullLedger;
//!
//! engine.on_block_begin(1);
//! let split = engine.on_tx_fee_paid(&mut ledger, 1_000_000).unwrap();
//! assert_eq!(split.burn + split.treasury + split.validator, 1_000_000);
//! let summary = engine.on_block_end(&mut ledger, 24_000_000, 48_000_000).unwrap();
//! assert_eq!(engine.base_fee(), summary.new_base_fee);
//! ```

pub mod constants;
pub mod crosschain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod params;

// Re-exports for convenience.
pub use constants::GenesisConfig;
pub use crosschain::{ChainAccumulator, ChainAccumulators, ChainReport, ReportOutcome};
pub use engine::{
    BlockEndSummary, BurnTierInfo, EconomicsEngine, EmissionEvent, FeeStats, SupplyInfo,
};
pub use error::EconomicsError;
pub use ledger::{AccountId, EconomicsAccounts, Ledger, LedgerError};
pub use params::Params;
