//! Property-based tests for Vela fee-market invariants.
//!
//! Properties tested:
//! 1. Fee conservation: burn + treasury + validator == total fee, exactly,
//!    for every fee in [0, u64::MAX] and every valid tier
//! 2. Base fee always within [floor, previous × elasticity]
//! 3. Tier classification is total and respects exact boundaries
//! 4. Utilization is always within [0, 10 000] bps

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        vela_fee_market::{
            calculator::{block_utilization_bps, next_base_fee, split_fee},
            BurnTier, FeeMarketParams,
        },
    };

    /// A valid parameter set with arbitrary-but-consistent knobs.
    fn arb_params() -> impl Strategy<Value = FeeMarketParams> {
        (
            1u64..=1_000_000,      // min_gas_price_floor
            1u32..=10_000,         // target_utilization_bps
            10_001u32..=20_000,    // elasticity_multiplier_bps
            1u64..=256,            // base_fee_change_denominator
            (0u32..=10_000, 0u32..=10_000), // tier thresholds (sorted below)
            0u32..=10_000,         // treasury_fee_bps
            (0u32..=10_000, 0u32..=10_000, 0u32..=10_000), // burn bps per tier
        )
            .prop_map(
                |(floor, target, elasticity, denominator, (t1, t2), treasury, (b1, b2, b3))| {
                    let burns = [b1, b2, b3];
                    FeeMarketParams {
                        min_gas_price_floor: floor,
                        target_utilization_bps: target,
                        elasticity_multiplier_bps: elasticity,
                        base_fee_change_denominator: denominator,
                        util_cool_threshold_bps: t1.min(t2),
                        util_hot_threshold_bps: t1.max(t2),
                        burn_cool_bps: b1,
                        burn_normal_bps: b2,
                        burn_hot_bps: b3,
                        min_burn_bps: *burns.iter().min().unwrap(),
                        max_burn_bps: *burns.iter().max().unwrap(),
                        treasury_fee_bps: treasury,
                        validator_fee_bps: 10_000 - treasury,
                        min_submission_fee: 0,
                        max_submission_fee: u64::MAX,
                    }
                },
            )
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1. Fee conservation
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Every unit of every fee is exactly accounted for, at every tier,
        /// for the full u64 fee range.
        #[test]
        fn fee_split_conserves_total(
            params in arb_params(),
            total_fee in 0..=u64::MAX,
            utilization_bps in 0..=10_000u32,
        ) {
            prop_assert!(params.validate().is_ok());
            let tier = BurnTier::classify(utilization_bps, &params);
            let split = split_fee(total_fee, tier.burn_bps(&params), params.treasury_fee_bps)
                .expect("valid params");

            // ── INVARIANT: all units are exactly accounted for ──
            prop_assert_eq!(
                split.burn as u128 + split.treasury as u128 + split.validator as u128,
                total_fee as u128,
                "conservation violated at fee {}", total_fee
            );

            // ── INVARIANT: no component exceeds the total ──
            prop_assert!(split.burn <= total_fee);
            prop_assert!(split.treasury <= total_fee);
            prop_assert!(split.validator <= total_fee);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 2. Base fee bounds
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// One step never drops below the floor nor rises past the
        /// elasticity bound.
        #[test]
        fn base_fee_single_step_bounded(
            params in arb_params(),
            current_fee in 0..=u64::MAX / 2,
            utilization_bps in 0..=10_000u32,
        ) {
            let next = next_base_fee(&params, current_fee, utilization_bps);

            prop_assert!(
                next >= params.min_gas_price_floor,
                "fee {next} below floor {}", params.min_gas_price_floor
            );

            let elasticity_bound = ((current_fee as u128)
                * params.elasticity_multiplier_bps as u128)
                .div_ceil(10_000)
                .max(params.min_gas_price_floor as u128);
            prop_assert!(
                next as u128 <= elasticity_bound,
                "fee {next} above elasticity bound {elasticity_bound}"
            );
        }

        /// A whole block sequence stays within bounds, step by step.
        #[test]
        fn base_fee_sequence_bounded(
            params in arb_params(),
            utilizations in prop::collection::vec(0..=10_000u32, 1..100),
        ) {
            let mut fee = params.min_gas_price_floor;
            for (i, &util) in utilizations.iter().enumerate() {
                let previous = fee;
                fee = next_base_fee(&params, fee, util);
                prop_assert!(fee >= params.min_gas_price_floor, "block {i}: below floor");
                let bound = ((previous as u128) * params.elasticity_multiplier_bps as u128)
                    .div_ceil(10_000)
                    .max(params.min_gas_price_floor as u128);
                prop_assert!(fee as u128 <= bound, "block {i}: above elasticity bound");
            }
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 3. Tier totality
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Every utilization maps to exactly one tier, and the mapping
        /// respects the threshold definition (boundary inclusive to the
        /// higher tier).
        #[test]
        fn tier_classification_total(
            params in arb_params(),
            utilization_bps in 0..=10_000u32,
        ) {
            let tier = BurnTier::classify(utilization_bps, &params);
            let expected = if utilization_bps >= params.util_hot_threshold_bps {
                BurnTier::Hot
            } else if utilization_bps >= params.util_cool_threshold_bps {
                BurnTier::Normal
            } else {
                BurnTier::Cool
            };
            prop_assert_eq!(tier, expected);
        }

        /// The exact threshold values belong to the higher tier.
        #[test]
        fn tier_boundaries_inclusive_upward(params in arb_params()) {
            let p = &params;
            if p.util_cool_threshold_bps > 0 {
                prop_assert_eq!(
                    BurnTier::classify(p.util_cool_threshold_bps - 1, p),
                    BurnTier::Cool
                );
            }
            if p.util_cool_threshold_bps < p.util_hot_threshold_bps {
                prop_assert_eq!(
                    BurnTier::classify(p.util_cool_threshold_bps, p),
                    BurnTier::Normal
                );
            }
            prop_assert_eq!(
                BurnTier::classify(p.util_hot_threshold_bps, p),
                BurnTier::Hot
            );
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 4. Utilization tracker
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Utilization is clamped to [0, 10 000] bps for any gas inputs, and
        /// a missing limit falls back to the stored value.
        #[test]
        fn utilization_always_in_range(
            gas_used in 0..=u64::MAX,
            gas_limit in 0..=u64::MAX,
            previous in 0..=10_000u32,
        ) {
            let util = block_utilization_bps(gas_used, gas_limit, previous);
            prop_assert!(util <= 10_000);
            if gas_limit == 0 {
                prop_assert_eq!(util, previous);
            }
        }
    }
}
