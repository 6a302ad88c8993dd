use {
    crate::error::TokenomicsError,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Denominator for basis-point fractions: 10 000 bps = 100 %.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// One step of the inflation decay table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct InflationStep {
    /// Year index (since genesis) at which this rate takes effect.
    pub year_index: u64,
    /// Annual inflation rate in bps.
    pub annual_rate_bps: u32,
}

/// A monotonically non-increasing step-decay inflation schedule.
///
/// `rate_bps(y)` is a pure function of the year index: the rate of the
/// latest step at or before `y`, or `inflation_floor_bps` forever once the
/// table is exhausted. The table is validated at load time so the rate can
/// never increase as the chain ages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct InflationSchedule {
    /// Steps ordered by strictly increasing `year_index`, starting at 0.
    pub steps: Vec<InflationStep>,
    /// Terminal rate in bps, in force once the table is exhausted.
    pub inflation_floor_bps: u32,
}

impl InflationSchedule {
    /// Validate the schedule. Rejected schedules never reach chain state.
    pub fn validate(&self) -> Result<(), TokenomicsError> {
        let Some(first) = self.steps.first() else {
            return Err(invalid("inflation schedule must have at least one step"));
        };
        if first.year_index != 0 {
            return Err(invalid("inflation schedule must start at year 0"));
        }
        if self.inflation_floor_bps as u64 > BPS_DENOMINATOR {
            return Err(invalid(&format!(
                "inflation_floor_bps ({}) must be 0–10000",
                self.inflation_floor_bps
            )));
        }
        let mut previous: Option<&InflationStep> = None;
        for step in &self.steps {
            if step.annual_rate_bps as u64 > BPS_DENOMINATOR {
                return Err(invalid(&format!(
                    "annual_rate_bps ({}) at year {} must be 0–10000",
                    step.annual_rate_bps, step.year_index
                )));
            }
            if step.annual_rate_bps < self.inflation_floor_bps {
                return Err(invalid(&format!(
                    "annual_rate_bps ({}) at year {} is below the floor ({})",
                    step.annual_rate_bps, step.year_index, self.inflation_floor_bps
                )));
            }
            if let Some(prev) = previous {
                if step.year_index <= prev.year_index {
                    return Err(invalid("inflation step years must strictly increase"));
                }
                if step.annual_rate_bps > prev.annual_rate_bps {
                    return Err(invalid(&format!(
                        "inflation rate rises from {} to {} at year {}",
                        prev.annual_rate_bps, step.annual_rate_bps, step.year_index
                    )));
                }
            }
            previous = Some(step);
        }
        Ok(())
    }

    /// Annual inflation rate for a year index, in bps.
    ///
    /// Beyond the last defined year the schedule is exhausted and the floor
    /// applies forever.
    pub fn rate_bps(&self, year_index: u64) -> u32 {
        match self.steps.last() {
            Some(last) if year_index <= last.year_index => self
                .steps
                .iter()
                .rev()
                .find(|step| step.year_index <= year_index)
                .map(|step| step.annual_rate_bps)
                .unwrap_or(self.inflation_floor_bps),
            _ => self.inflation_floor_bps,
        }
    }

    /// Annual provisions for a year, given the current supply.
    ///
    /// `⌊current_supply × rate / 10000⌋`; never exceeds `current_supply`.
    pub fn annual_provisions(&self, year_index: u64, current_supply: u64) -> u64 {
        let rate = self.rate_bps(year_index) as u128;
        ((current_supply as u128).saturating_mul(rate) / BPS_DENOMINATOR as u128) as u64
    }
}

/// Year index for a block height: `(height − genesis_height) / blocks_per_year`.
///
/// Heights before genesis (possible during replays of pre-genesis state)
/// count as year 0.
pub fn year_index(height: u64, genesis_height: u64, blocks_per_year: u64) -> u64 {
    if blocks_per_year == 0 {
        return 0;
    }
    height.saturating_sub(genesis_height) / blocks_per_year
}

/// A block's provision plus the division remainder to carry forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockProvision {
    /// Base units to mint this block (before the supply-cap clamp).
    pub amount: u64,
    /// Remainder to carry into the next block's division.
    pub remainder: u64,
}

/// Per-block provision with remainder carry.
///
/// ```text
/// numerator = annual_provisions + carried_remainder
/// amount    = numerator / blocks_per_year
/// remainder = numerator % blocks_per_year
/// ```
///
/// Carrying the remainder forward instead of dropping it keeps the summed
/// block provisions exactly on the annual curve: over `k` blocks at a
/// constant annual rate `A`, the total minted is exactly `⌊k·A / blocks_per_year⌋`.
pub fn block_provision(
    annual_provisions: u64,
    carried_remainder: u64,
    blocks_per_year: u64,
) -> BlockProvision {
    if blocks_per_year == 0 {
        return BlockProvision {
            amount: 0,
            remainder: carried_remainder,
        };
    }
    let numerator = (annual_provisions as u128).saturating_add(carried_remainder as u128);
    let blocks = blocks_per_year as u128;
    BlockProvision {
        amount: (numerator / blocks).min(u64::MAX as u128) as u64,
        remainder: (numerator % blocks) as u64,
    }
}

fn invalid(reason: &str) -> TokenomicsError {
    TokenomicsError::InvalidParams {
        reason: reason.to_string(),
    }
}

impl Default for InflationSchedule {
    /// Genesis schedule: 3.00 % in year 0, decaying 0.25 % per year down to
    /// 0.50 % in year 10, then the 0.50 % floor forever.
    fn default() -> Self {
        let steps = (0..=10u64)
            .map(|year| InflationStep {
                year_index: year,
                annual_rate_bps: 300 - 25 * year as u32,
            })
            .collect();
        Self {
            steps,
            inflation_floor_bps: 50,
        }
    }
}
