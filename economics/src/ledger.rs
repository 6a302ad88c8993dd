//! Boundary to the host chain's account ledger.
//!
//! The economics engine never holds balances itself — it drives the host's
//! bank through this trait, one call per burn / transfer / mint. Tests swap
//! in an in-memory implementation.

use {
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::fmt,
    thiserror::Error,
};

/// A 32-byte account address, rendered in base-58.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Deterministic address derived from a single seed byte. Used for
    /// well-known system accounts and in tests.
    pub const fn from_seed(seed: u8) -> Self {
        Self([seed; 32])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}

/// Errors the host ledger may return. Any of these is fatal for the
/// enclosing block-processing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The debited account cannot cover the amount.
    #[error("insufficient funds in {account}: balance {balance}, required {required}")]
    InsufficientFunds {
        account: AccountId,
        balance: u64,
        required: u64,
    },

    /// A balance would overflow its integer width.
    #[error("ledger balance overflow")]
    Overflow,
}

/// The host bank's primitives, as seen from the economics engine.
///
/// Implementations execute against block-scoped state: when the engine
/// returns an error and the host rejects the block, any writes made by
/// these calls are discarded with it (abort semantics — the engine never
/// issues compensating calls).
pub trait Ledger {
    /// Create `amount` new base units in `account`.
    fn mint(&mut self, account: &AccountId, amount: u64) -> Result<(), LedgerError>;

    /// Destroy `amount` base units held by `account`.
    fn burn(&mut self, account: &AccountId, amount: u64) -> Result<(), LedgerError>;

    /// Move `amount` base units from `from` to `to`.
    fn transfer(&mut self, from: &AccountId, to: &AccountId, amount: u64) -> Result<(), LedgerError>;
}

/// The well-known accounts the engine credits and debits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct EconomicsAccounts {
    /// Account fees accumulate in during block execution; the engine burns
    /// from and transfers out of it.
    pub fee_collector: AccountId,
    /// Protocol treasury.
    pub treasury: AccountId,
    /// Validator fee pool.
    pub validator_pool: AccountId,
    /// Staking rewards pool.
    pub staking_pool: AccountId,
    /// Contribution rewards pool.
    pub contribution_pool: AccountId,
    /// Sequencer rewards pool.
    pub sequencer_pool: AccountId,
}

impl EconomicsAccounts {
    /// Destination account for an emission category.
    pub fn emission_destination(
        &self,
        category: vela_tokenomics::EmissionCategory,
    ) -> &AccountId {
        use vela_tokenomics::EmissionCategory;
        match category {
            EmissionCategory::Staking => &self.staking_pool,
            EmissionCategory::Contribution => &self.contribution_pool,
            EmissionCategory::Sequencer => &self.sequencer_pool,
            EmissionCategory::Treasury => &self.treasury,
        }
    }
}
