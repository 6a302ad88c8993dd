use {
    crate::{
        config::{FeeMarketParams, BPS_DENOMINATOR},
        error::FeeError,
    },
    serde::{Deserialize, Serialize},
};

/// Exact three-way decomposition of a collected fee.
///
/// Produced by [`split_fee`]; the three parts always sum to the original
/// fee, to the last unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeeSplit {
    /// Amount destroyed.
    pub burn: u64,
    /// Amount routed to the treasury.
    pub treasury: u64,
    /// Amount routed to the validator pool.
    pub validator: u64,
}

impl FeeSplit {
    /// Sum of the three parts (equal to the fee that was split).
    pub fn total(&self) -> u64 {
        self.burn
            .saturating_add(self.treasury)
            .saturating_add(self.validator)
    }
}

/// Utilization of the just-finalized block, in bps, clamped to [0, 10 000].
///
/// If `gas_limit` is zero — the value is unavailable, e.g. when queried
/// outside block-execution context — the previously stored utilization is
/// returned instead. This function must never panic: it is also on the
/// read-only query path.
pub fn block_utilization_bps(gas_used: u64, gas_limit: u64, previous_utilization_bps: u32) -> u32 {
    if gas_limit == 0 {
        return previous_utilization_bps;
    }
    let ratio = (gas_used as u128).saturating_mul(BPS_DENOMINATOR as u128) / gas_limit as u128;
    ratio.min(BPS_DENOMINATOR as u128) as u32
}

/// Calculate the next block's base fee from the previous block's utilization.
///
/// # Formula
///
/// ```text
/// if utilization == target:
///     next = current                                  (no change)
///
/// if utilization > target:
///     delta = current × (utilization - target) / target / denominator
///     next  = current + max(delta, 1)
///
/// if utilization < target:
///     delta = current × (target - utilization) / target / denominator
///     next  = current - delta
/// ```
///
/// The raw update is then clamped twice: upward moves may not exceed
/// `current × elasticity_multiplier_bps` (a single 100 %-full block cannot
/// raise the price past the elasticity bound, whatever the target), and the
/// result never drops below `min_gas_price_floor`.
///
/// The `max(delta, 1)` rule replicates go-ethereum: under sustained
/// congestion the fee always rises, even when the current fee is tiny.
///
/// Pure given `(current_base_fee, utilization, params)` — no hidden state.
pub fn next_base_fee(params: &FeeMarketParams, current_base_fee: u64, utilization_bps: u32) -> u64 {
    let current = current_base_fee as u128;
    let target = params.target_utilization_bps as u128;
    let util = (utilization_bps as u128).min(BPS_DENOMINATOR as u128);
    // target is validated ≥ 1 and denominator ≥ 1; the product fits u128.
    let denominator = target.saturating_mul(params.base_fee_change_denominator as u128);

    let raw = if util == target {
        current
    } else if util > target {
        let excess = util - target;
        let delta = (current.saturating_mul(excess) / denominator).max(1);
        current.saturating_add(delta)
    } else {
        let deficit = target - util;
        let delta = current.saturating_mul(deficit) / denominator;
        current.saturating_sub(delta)
    };

    // Per-block elasticity bound, rounded up so small fees can still move.
    let ceiling = current
        .saturating_mul(params.elasticity_multiplier_bps as u128)
        .div_ceil(BPS_DENOMINATOR as u128);

    raw.min(ceiling)
        .max(params.min_gas_price_floor as u128)
        .min(u64::MAX as u128) as u64
}

/// Split a collected fee into burn / treasury / validator parts.
///
/// ```text
/// burn      = ⌊total_fee × burn_bps⌋
/// remainder = total_fee - burn
/// treasury  = ⌊remainder × treasury_fee_bps⌋
/// validator = remainder - treasury        (exact remainder, no rounding loss)
/// ```
///
/// The validator share absorbs the truncation remainder — never the burn or
/// treasury share — so rounding can never drift value toward destruction.
/// The parts sum to `total_fee` exactly for every input.
pub fn split_fee(total_fee: u64, burn_bps: u32, treasury_fee_bps: u32) -> Result<FeeSplit, FeeError> {
    if burn_bps as u64 > BPS_DENOMINATOR || treasury_fee_bps as u64 > BPS_DENOMINATOR {
        return Err(FeeError::InvalidParams {
            reason: format!(
                "split fractions ({burn_bps}, {treasury_fee_bps}) exceed 10000 bps"
            ),
        });
    }
    let burn = floor_mul_bps(total_fee, burn_bps);
    let remainder = total_fee.saturating_sub(burn);
    let treasury = floor_mul_bps(remainder, treasury_fee_bps);
    let validator = remainder.saturating_sub(treasury);
    Ok(FeeSplit {
        burn,
        treasury,
        validator,
    })
}

/// `⌊value × bps / 10000⌋`, exact for the full `u64` range.
///
/// Never exceeds `value` when `bps ≤ 10000`.
#[inline]
fn floor_mul_bps(value: u64, bps: u32) -> u64 {
    ((value as u128).saturating_mul(bps as u128) / BPS_DENOMINATOR as u128) as u64
}
