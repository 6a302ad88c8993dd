use {
    crate::error::TokenomicsError,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Version byte written at the start of every persisted supply record.
pub const SUPPLY_STATE_VERSION: u8 = 1;

/// Singleton supply ledger, mutated exactly once per block.
///
/// `total_minted` and `total_burned` are monotonically non-decreasing
/// lifetime counters (`u128`, so they cannot wrap over the chain's
/// lifetime); the circulating supply is derived, never stored. Every mint
/// in the system passes through [`SupplyState::record_mint`] — the single
/// choke point at which the supply cap is enforced.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct SupplyState {
    /// Total base units ever minted, including the genesis allocation.
    pub total_minted: u128,

    /// Total base units ever burned.
    pub total_burned: u128,

    /// Remainder carried between per-block provision divisions.
    pub provision_remainder: u64,
}

impl SupplyState {
    /// Serialised size: version byte + borsh payload.
    ///
    /// Layout:
    ///   version             (1)
    ///   total_minted        (16)
    ///   total_burned        (16)
    ///   provision_remainder (8)
    ///   = 41 bytes
    pub const SERIALIZED_SIZE: usize = 1 + 16 + 16 + 8;

    /// Create the genesis supply state.
    ///
    /// The genesis allocation is recorded as minted at height 0, through the
    /// same counters every later mint uses, so the cap covers it too.
    pub fn genesis(genesis_supply: u64) -> Self {
        Self {
            total_minted: genesis_supply as u128,
            total_burned: 0,
            provision_remainder: 0,
        }
    }

    /// Circulating supply: `total_minted − total_burned`.
    ///
    /// The burn path guarantees `total_burned ≤ total_minted`, and the mint
    /// path guarantees the difference fits the cap's `u64` width.
    pub fn current_supply(&self) -> u64 {
        self.total_minted
            .saturating_sub(self.total_burned)
            .min(u64::MAX as u128) as u64
    }

    /// Base units still mintable before the cap is reached.
    pub fn remaining_mintable(&self, total_supply_cap: u64) -> u64 {
        total_supply_cap.saturating_sub(self.current_supply())
    }

    /// Clamp a block provision so the cap is never exceeded.
    ///
    /// At the cap this returns zero — a steady state, not an error.
    pub fn clamp_provision(&self, provision: u64, total_supply_cap: u64) -> u64 {
        provision.min(self.remaining_mintable(total_supply_cap))
    }

    /// Record a mint. Fails without mutating if the projected supply would
    /// exceed the cap — callers clamp first via [`Self::clamp_provision`].
    pub fn record_mint(&mut self, amount: u64, total_supply_cap: u64) -> Result<(), TokenomicsError> {
        if amount > self.remaining_mintable(total_supply_cap) {
            return Err(TokenomicsError::Overflow);
        }
        let minted = self
            .total_minted
            .checked_add(amount as u128)
            .ok_or(TokenomicsError::Overflow)?;
        self.total_minted = minted;
        Ok(())
    }

    /// Record a burn. Fails without mutating if the burn would exceed what
    /// was ever minted (the circulating supply cannot go negative).
    pub fn record_burn(&mut self, amount: u64) -> Result<(), TokenomicsError> {
        let burned = self
            .total_burned
            .checked_add(amount as u128)
            .ok_or(TokenomicsError::Overflow)?;
        if burned > self.total_minted {
            return Err(TokenomicsError::Overflow);
        }
        self.total_burned = burned;
        Ok(())
    }

    /// Deserialise from raw record data (expects the leading version byte).
    pub fn deserialize(data: &[u8]) -> Result<Self, std::io::Error> {
        if data.is_empty() || data[0] != SUPPLY_STATE_VERSION {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "missing or unsupported supply state version",
            ));
        }
        let mut cursor = &data[1..];
        BorshDeserialize::deserialize_reader(&mut cursor)
    }

    /// Serialise into raw record data (prepends the version byte).
    pub fn serialize_into(&self, data: &mut [u8]) -> Result<(), std::io::Error> {
        if data.len() < Self::SERIALIZED_SIZE {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "record buffer too small",
            ));
        }
        data[0] = SUPPLY_STATE_VERSION;
        let mut cursor = &mut data[1..];
        BorshSerialize::serialize(self, &mut cursor)
    }
}
