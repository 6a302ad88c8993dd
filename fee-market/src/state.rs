use {
    crate::{calculator::FeeSplit, error::FeeError},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Version byte written at the start of every persisted fee-market record,
/// to distinguish schema generations during migration.
pub const FEE_MARKET_STATE_VERSION: u8 = 1;

/// Singleton fee-market state, mutated exactly once per block.
///
/// The cumulative counters are audit totals and satisfy the conservation
/// law `cumulative_burned + cumulative_to_treasury + cumulative_to_validators
/// == cumulative_fees_processed` at every block boundary. They are `u128`
/// so the law cannot be broken by counter wrap-around over the chain's
/// lifetime.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct FeeMarketState {
    /// Base fee per gas unit for the next block, in base units.
    pub base_fee: u64,

    /// Utilization of the last finalized block, in bps. This is the value
    /// read-only queries observe, and the fallback when a block's gas data
    /// is unavailable.
    pub previous_utilization_bps: u32,

    /// Height of the last block this state was advanced for.
    pub height: u64,

    /// Total base units ever destroyed through fee burning.
    pub cumulative_burned: u128,

    /// Total base units ever routed to the treasury.
    pub cumulative_to_treasury: u128,

    /// Total base units ever routed to the validator pool.
    pub cumulative_to_validators: u128,

    /// Total fees ever processed; equals the sum of the other three.
    pub cumulative_fees_processed: u128,
}

impl FeeMarketState {
    /// Serialised size: version byte + borsh payload.
    ///
    /// Layout:
    ///   version                   (1)
    ///   base_fee                  (8)
    ///   previous_utilization_bps  (4)
    ///   height                    (8)
    ///   cumulative counters       (16 × 4)
    ///   = 85 bytes
    pub const SERIALIZED_SIZE: usize = 1 + 8 + 4 + 8 + 16 * 4;

    /// Create the genesis fee-market state with a given initial base fee.
    pub fn genesis(initial_base_fee: u64) -> Self {
        Self {
            base_fee: initial_base_fee,
            previous_utilization_bps: 0,
            height: 0,
            cumulative_burned: 0,
            cumulative_to_treasury: 0,
            cumulative_to_validators: 0,
            cumulative_fees_processed: 0,
        }
    }

    /// Fold one fee split into the audit counters.
    ///
    /// Fails without mutating anything if any counter would overflow, so a
    /// failed call leaves the conservation law intact.
    pub fn record_split(&mut self, split: &FeeSplit) -> Result<(), FeeError> {
        let burned = self
            .cumulative_burned
            .checked_add(split.burn as u128)
            .ok_or(FeeError::Overflow)?;
        let treasury = self
            .cumulative_to_treasury
            .checked_add(split.treasury as u128)
            .ok_or(FeeError::Overflow)?;
        let validators = self
            .cumulative_to_validators
            .checked_add(split.validator as u128)
            .ok_or(FeeError::Overflow)?;
        let processed = self
            .cumulative_fees_processed
            .checked_add(split.total() as u128)
            .ok_or(FeeError::Overflow)?;

        self.cumulative_burned = burned;
        self.cumulative_to_treasury = treasury;
        self.cumulative_to_validators = validators;
        self.cumulative_fees_processed = processed;
        Ok(())
    }

    /// Commit the end-of-block update: the base fee for the next block and
    /// the utilization just observed.
    pub fn advance_block(&mut self, next_base_fee: u64, utilization_bps: u32, height: u64) {
        self.base_fee = next_base_fee;
        self.previous_utilization_bps = utilization_bps;
        self.height = height;
    }

    /// Whether the audit counters satisfy the conservation law.
    pub fn conservation_holds(&self) -> bool {
        self.cumulative_burned
            .checked_add(self.cumulative_to_treasury)
            .and_then(|sum| sum.checked_add(self.cumulative_to_validators))
            == Some(self.cumulative_fees_processed)
    }

    /// Deserialise from raw record data (expects the leading version byte).
    pub fn deserialize(data: &[u8]) -> Result<Self, std::io::Error> {
        if data.is_empty() || data[0] != FEE_MARKET_STATE_VERSION {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "missing or unsupported fee market state version",
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
        data[0] = FEE_MARKET_STATE_VERSION;
        let mut cursor = &mut data[1..];
        BorshSerialize::serialize(self, &mut cursor)
    }
}
