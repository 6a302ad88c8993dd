use {
    crate::{error::TokenomicsError, schedule::BPS_DENOMINATOR},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Reward categories a block provision is split across.
///
/// The order of [`EmissionCategory::ALL`] is the distribution order;
/// `Treasury` is deliberately last because it absorbs the truncation
/// remainder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub enum EmissionCategory {
    /// Staking rewards pool.
    Staking,
    /// Contribution / reputation rewards pool.
    Contribution,
    /// Sequencer rewards pool.
    Sequencer,
    /// Protocol treasury.
    Treasury,
}

impl EmissionCategory {
    /// All categories, in distribution order.
    pub const ALL: [Self; 4] = [Self::Staking, Self::Contribution, Self::Sequencer, Self::Treasury];

    /// Category name for audit events.
    pub fn name(self) -> &'static str {
        match self {
            Self::Staking => "staking",
            Self::Contribution => "contribution",
            Self::Sequencer => "sequencer",
            Self::Treasury => "treasury",
        }
    }
}

/// Governance-tunable emission split, in bps. Must sum to exactly 10 000.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct EmissionSplit {
    pub staking_bps: u32,
    pub contribution_bps: u32,
    pub sequencer_bps: u32,
    pub treasury_bps: u32,
}

impl EmissionSplit {
    /// Validate that the four fractions sum to exactly 100 %.
    pub fn validate(&self) -> Result<(), TokenomicsError> {
        let sum = self.staking_bps as u64
            + self.contribution_bps as u64
            + self.sequencer_bps as u64
            + self.treasury_bps as u64;
        if sum != BPS_DENOMINATOR {
            return Err(TokenomicsError::InvalidParams {
                reason: format!("emission split must sum to 10000 bps, got {sum}"),
            });
        }
        Ok(())
    }

    /// Split a block provision across the categories.
    ///
    /// The first three categories take `⌊provision × share⌋`; the treasury
    /// takes the exact remainder, so the parts always sum to `provision`.
    pub fn split(&self, provision: u64) -> EmissionAmounts {
        let staking = floor_mul_bps(provision, self.staking_bps);
        let contribution = floor_mul_bps(provision, self.contribution_bps);
        let sequencer = floor_mul_bps(provision, self.sequencer_bps);
        let treasury = provision
            .saturating_sub(staking)
            .saturating_sub(contribution)
            .saturating_sub(sequencer);
        EmissionAmounts {
            staking,
            contribution,
            sequencer,
            treasury,
        }
    }
}

impl Default for EmissionSplit {
    /// Genesis split: 40 % staking, 25 % contribution, 15 % sequencer,
    /// 20 % treasury.
    fn default() -> Self {
        Self {
            staking_bps: 4_000,
            contribution_bps: 2_500,
            sequencer_bps: 1_500,
            treasury_bps: 2_000,
        }
    }
}

/// Exact four-way decomposition of a block provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmissionAmounts {
    pub staking: u64,
    pub contribution: u64,
    pub sequencer: u64,
    pub treasury: u64,
}

impl EmissionAmounts {
    /// Sum of the four parts (equal to the provision that was split).
    pub fn total(&self) -> u64 {
        self.staking
            .saturating_add(self.contribution)
            .saturating_add(self.sequencer)
            .saturating_add(self.treasury)
    }

    /// The amount assigned to one category.
    pub fn for_category(&self, category: EmissionCategory) -> u64 {
        match category {
            EmissionCategory::Staking => self.staking,
            EmissionCategory::Contribution => self.contribution,
            EmissionCategory::Sequencer => self.sequencer,
            EmissionCategory::Treasury => self.treasury,
        }
    }
}

/// `⌊value × bps / 10000⌋`; never exceeds `value` for validated splits.
#[inline]
fn floor_mul_bps(value: u64, bps: u32) -> u64 {
    ((value as u128).saturating_mul(bps as u128) / BPS_DENOMINATOR as u128) as u64
}
