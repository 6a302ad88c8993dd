use {
    crate::error::FeeError,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Denominator for basis-point fractions: 10 000 bps = 100 %.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Governance-tunable parameters for the adaptive fee market.
///
/// All fractions are basis points (1/10 000). The parameter set is validated
/// as a whole by [`FeeMarketParams::validate`] — an update that violates any
/// rule is rejected before it reaches chain state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct FeeMarketParams {
    /// Absolute lower bound for the base fee, in base units per gas.
    /// Prevents the price from dropping to zero under sustained low usage.
    /// Must be at least 1.
    pub min_gas_price_floor: u64,

    /// Desired block fullness in bps (e.g. 3 300 = 33 %). The base fee is
    /// calibrated so that average blocks settle at this utilization.
    pub target_utilization_bps: u32,

    /// Hard per-block change bound in bps of the previous fee
    /// (e.g. 11 250 = at most 1.125× per block). Must exceed 10 000.
    pub elasticity_multiplier_bps: u32,

    /// Divisor for the proportional base-fee adjustment. Each block the raw
    /// update moves the fee by `deviation_from_target / denominator`, before
    /// the elasticity bound is applied. A value of 8 matches Ethereum's
    /// EIP-1559 at its reference target.
    pub base_fee_change_denominator: u64,

    /// Utilization below this is the Cool tier (bps).
    pub util_cool_threshold_bps: u32,

    /// Utilization at or above this is the Hot tier (bps). Everything
    /// between the two thresholds is Normal.
    pub util_hot_threshold_bps: u32,

    /// Fraction of each fee burned at the Cool tier (bps).
    pub burn_cool_bps: u32,

    /// Fraction of each fee burned at the Normal tier (bps).
    pub burn_normal_bps: u32,

    /// Fraction of each fee burned at the Hot tier (bps).
    pub burn_hot_bps: u32,

    /// Lower bound every tier's burn fraction must respect (bps).
    pub min_burn_bps: u32,

    /// Upper bound every tier's burn fraction must respect (bps).
    pub max_burn_bps: u32,

    /// Treasury's share of the non-burned remainder (bps).
    pub treasury_fee_bps: u32,

    /// Validator pool's share of the non-burned remainder (bps).
    /// `treasury_fee_bps + validator_fee_bps` must equal 10 000.
    pub validator_fee_bps: u32,

    /// Lower bound for an admissible transaction fee, in base units.
    pub min_submission_fee: u64,

    /// Upper bound for an admissible transaction fee, in base units.
    pub max_submission_fee: u64,
}

impl FeeMarketParams {
    /// Validate that the parameter set is internally consistent.
    ///
    /// Every rule here guards a runtime invariant: a set that passes is safe
    /// to compute with for arbitrarily many blocks.
    pub fn validate(&self) -> Result<(), FeeError> {
        if self.min_gas_price_floor == 0 {
            return Err(invalid("min_gas_price_floor must be at least 1"));
        }
        if self.target_utilization_bps == 0 || self.target_utilization_bps as u64 > BPS_DENOMINATOR {
            return Err(invalid(&format!(
                "target_utilization_bps ({}) must be in 1–10000",
                self.target_utilization_bps
            )));
        }
        if self.elasticity_multiplier_bps as u64 <= BPS_DENOMINATOR {
            return Err(invalid(&format!(
                "elasticity_multiplier_bps ({}) must exceed 10000",
                self.elasticity_multiplier_bps
            )));
        }
        if self.base_fee_change_denominator == 0 {
            return Err(invalid("base_fee_change_denominator must be > 0"));
        }
        if self.util_cool_threshold_bps > self.util_hot_threshold_bps {
            return Err(invalid(&format!(
                "util_cool_threshold_bps ({}) > util_hot_threshold_bps ({})",
                self.util_cool_threshold_bps, self.util_hot_threshold_bps
            )));
        }
        if self.util_hot_threshold_bps as u64 > BPS_DENOMINATOR {
            return Err(invalid(&format!(
                "util_hot_threshold_bps ({}) must be 0–10000",
                self.util_hot_threshold_bps
            )));
        }
        if self.min_burn_bps > self.max_burn_bps || self.max_burn_bps as u64 > BPS_DENOMINATOR {
            return Err(invalid(&format!(
                "burn bounds [{}, {}] are not an ordered sub-range of 0–10000",
                self.min_burn_bps, self.max_burn_bps
            )));
        }
        for (name, bps) in [
            ("burn_cool_bps", self.burn_cool_bps),
            ("burn_normal_bps", self.burn_normal_bps),
            ("burn_hot_bps", self.burn_hot_bps),
        ] {
            if bps < self.min_burn_bps || bps > self.max_burn_bps {
                return Err(invalid(&format!(
                    "{name} ({bps}) outside burn bounds [{}, {}]",
                    self.min_burn_bps, self.max_burn_bps
                )));
            }
        }
        let split_sum = self.treasury_fee_bps as u64 + self.validator_fee_bps as u64;
        if split_sum != BPS_DENOMINATOR {
            return Err(invalid(&format!(
                "treasury_fee_bps + validator_fee_bps must equal 10000, got {split_sum}"
            )));
        }
        if self.min_submission_fee > self.max_submission_fee {
            return Err(invalid(&format!(
                "min_submission_fee ({}) > max_submission_fee ({})",
                self.min_submission_fee, self.max_submission_fee
            )));
        }
        Ok(())
    }

    /// Whether a transaction fee falls inside the admissible submission
    /// range. Admission itself is the host's concern; fees already
    /// collected are processed regardless.
    pub fn submission_fee_in_bounds(&self, fee: u64) -> bool {
        fee >= self.min_submission_fee && fee <= self.max_submission_fee
    }
}

fn invalid(reason: &str) -> FeeError {
    FeeError::InvalidParams {
        reason: reason.to_string(),
    }
}

impl Default for FeeMarketParams {
    /// Genesis defaults for the Vela mainnet.
    fn default() -> Self {
        Self {
            min_gas_price_floor: 5_000,      // same order as legacy per-signature pricing
            target_utilization_bps: 3_300,   // 33 % target fullness
            elasticity_multiplier_bps: 11_250, // ±12.5 % max change per block
            base_fee_change_denominator: 8,
            util_cool_threshold_bps: 1_600,  // < 16 % → Cool
            util_hot_threshold_bps: 3_300,   // ≥ 33 % → Hot
            burn_cool_bps: 1_000,            // 10 % burned
            burn_normal_bps: 2_000,          // 20 % burned
            burn_hot_bps: 4_000,             // 40 % burned
            min_burn_bps: 500,
            max_burn_bps: 5_000,
            treasury_fee_bps: 3_000,         // 30 / 70 treasury / validator
            validator_fee_bps: 7_000,
            min_submission_fee: 0,
            max_submission_fee: u64::MAX,
        }
    }
}
