//! Vela network constants for economic model configuration.
//!
//! These are the genesis defaults; everything here except the base-unit
//! scale is governance-tunable afterwards through a validated parameter
//! update.

use crate::{
    ledger::{AccountId, EconomicsAccounts},
    params::Params,
};

/// Base units per whole VELA token.
pub const UNITS_PER_VELA: u64 = 1_000_000_000;

/// Hard cap on ever-existing supply: 1 billion VELA.
pub const TOTAL_SUPPLY_CAP: u64 = 1_000_000_000 * UNITS_PER_VELA;

/// Blocks per year at the 2-second target block time.
pub const BLOCKS_PER_YEAR: u64 = 15_768_000;

/// Starting base fee per gas unit at genesis, in base units.
pub const INITIAL_BASE_FEE: u64 = 5_000;

/// The local chain's identifier in the per-chain accumulator map.
pub const LOCAL_CHAIN_ID: &str = "vela-1";

// Well-known system account seeds. The real addresses are configured in the
// genesis config; these are the defaults used by local networks and tests.
pub const FEE_COLLECTOR_SEED: u8 = 0xF1;
pub const TREASURY_SEED: u8 = 0xF2;
pub const VALIDATOR_POOL_SEED: u8 = 0xF3;
pub const STAKING_POOL_SEED: u8 = 0xF4;
pub const CONTRIBUTION_POOL_SEED: u8 = 0xF5;
pub const SEQUENCER_POOL_SEED: u8 = 0xF6;

/// Genesis configuration for the economics engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisConfig {
    /// Initial governance parameters.
    pub params: Params,
    /// Well-known system accounts.
    pub accounts: EconomicsAccounts,
    /// Height of the genesis block; the year index counts from here.
    pub genesis_height: u64,
    /// Base units allocated at genesis, recorded as minted at height 0.
    pub genesis_supply: u64,
    /// Starting base fee; raised to the gas price floor if set below it.
    pub initial_base_fee: u64,
    /// This chain's identifier in cross-chain reporting.
    pub chain_id: String,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            params: Params::default(),
            accounts: EconomicsAccounts {
                fee_collector: AccountId::from_seed(FEE_COLLECTOR_SEED),
                treasury: AccountId::from_seed(TREASURY_SEED),
                validator_pool: AccountId::from_seed(VALIDATOR_POOL_SEED),
                staking_pool: AccountId::from_seed(STAKING_POOL_SEED),
                contribution_pool: AccountId::from_seed(CONTRIBUTION_POOL_SEED),
                sequencer_pool: AccountId::from_seed(SEQUENCER_POOL_SEED),
            },
            genesis_height: 0,
            genesis_supply: 0,
            initial_base_fee: INITIAL_BASE_FEE,
            chain_id: LOCAL_CHAIN_ID.to_string(),
        }
    }
}
