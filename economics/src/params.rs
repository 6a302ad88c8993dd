use {
    crate::error::EconomicsError,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    vela_fee_market::FeeMarketParams,
    vela_tokenomics::{EmissionSplit, InflationSchedule},
};

/// Version byte written at the start of every persisted parameter record.
pub const PARAMS_VERSION: u8 = 1;

/// The complete governance-tunable parameter set.
///
/// Parameters are an immutable snapshot for the duration of a block:
/// updates queued through the engine are validated synchronously and
/// applied only at the next block boundary, never mid-block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Params {
    /// Adaptive fee market parameters.
    pub fee_market: FeeMarketParams,

    /// Step-decay inflation schedule.
    pub inflation: InflationSchedule,

    /// Per-block emission split across reward categories.
    pub emission: EmissionSplit,

    /// Hard upper bound on ever-existing supply, in base units.
    pub total_supply_cap: u64,

    /// Blocks per year, used to derive the year index and the per-block
    /// provision. Must be positive.
    pub blocks_per_year: u64,
}

impl Params {
    /// Validate the whole parameter set, atomically: a proposal that breaks
    /// any rule is rejected as a unit, nothing is clamped into place.
    pub fn validate(&self) -> Result<(), EconomicsError> {
        self.fee_market.validate()?;
        self.inflation.validate()?;
        self.emission.validate()?;
        if self.total_supply_cap == 0 {
            return Err(EconomicsError::InvalidParams {
                reason: "total_supply_cap must be positive".to_string(),
            });
        }
        if self.blocks_per_year == 0 {
            return Err(EconomicsError::InvalidParams {
                reason: "blocks_per_year must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Deserialise from raw record data (expects the leading version byte).
    pub fn deserialize(data: &[u8]) -> Result<Self, std::io::Error> {
        if data.is_empty() || data[0] != PARAMS_VERSION {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "missing or unsupported params version",
            ));
        }
        let mut cursor = &data[1..];
        BorshDeserialize::deserialize_reader(&mut cursor)
    }

    /// Serialise into a fresh versioned record.
    pub fn to_record_bytes(&self) -> Result<Vec<u8>, std::io::Error> {
        let mut data = vec![PARAMS_VERSION];
        BorshSerialize::serialize(self, &mut data)?;
        Ok(data)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            fee_market: FeeMarketParams::default(),
            inflation: InflationSchedule::default(),
            emission: EmissionSplit::default(),
            total_supply_cap: crate::constants::TOTAL_SUPPLY_CAP,
            blocks_per_year: crate::constants::BLOCKS_PER_YEAR,
        }
    }
}
