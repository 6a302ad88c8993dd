//! Property-based tests for Vela supply-engine invariants.
//!
//! Properties tested:
//! 1. Supply cap: `current_supply ≤ total_supply_cap` for all block
//!    sequences, including the boundary block that first reaches the cap
//! 2. Inflation schedule is monotonically non-increasing with a floor
//! 3. Emission split conserves the provision exactly
//! 4. Provision remainder carry never loses or invents units

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        vela_tokenomics::{
            schedule::{block_provision, year_index},
            EmissionSplit, InflationSchedule, InflationStep, SupplyState,
        },
    };

    /// A valid monotone step table: strictly increasing years, rates built
    /// by stacking non-negative decrements on top of the floor.
    fn arb_schedule() -> impl Strategy<Value = InflationSchedule> {
        (
            0u32..=500,                                    // floor
            prop::collection::vec((1u64..=5, 0u32..=200), 1..10), // (year gap, rate drop)
        )
            .prop_map(|(floor, increments)| {
                let total_drop: u32 = increments.iter().map(|(_, drop)| drop).sum();
                let mut rate = floor + total_drop;
                let mut year = 0u64;
                let mut steps = Vec::with_capacity(increments.len());
                for (gap, drop) in increments {
                    steps.push(InflationStep {
                        year_index: year,
                        annual_rate_bps: rate,
                    });
                    year += gap;
                    rate -= drop;
                }
                InflationSchedule {
                    steps,
                    inflation_floor_bps: floor,
                }
            })
    }

    fn arb_split() -> impl Strategy<Value = EmissionSplit> {
        (0u32..=10_000, 0u32..=10_000, 0u32..=10_000).prop_map(|(a, b, c)| {
            // Normalize three draws into four shares summing to 10 000.
            let staking = a;
            let contribution = b.min(10_000 - staking);
            let sequencer = c.min(10_000 - staking - contribution);
            EmissionSplit {
                staking_bps: staking,
                contribution_bps: contribution,
                sequencer_bps: sequencer,
                treasury_bps: 10_000 - staking - contribution - sequencer,
            }
        })
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1. Supply cap invariant
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Whatever the schedule, supply, and block count, the cap is never
        /// exceeded — and once reached, stays exactly reached.
        #[test]
        fn cap_never_exceeded(
            schedule in arb_schedule(),
            cap_headroom in 0..=1_000_000u64,
            genesis_supply in 0..=1_000_000_000u64,
            blocks_per_year in 1..=1_000u64,
            num_blocks in 1..=2_000u64,
        ) {
            prop_assert!(schedule.validate().is_ok());
            let cap = genesis_supply.saturating_add(cap_headroom);
            let mut supply = SupplyState::genesis(genesis_supply);
            let mut reached_cap_at: Option<u64> = None;

            for height in 0..num_blocks {
                let year = year_index(height, 0, blocks_per_year);
                let annual = schedule.annual_provisions(year, supply.current_supply());
                let p = block_provision(annual, supply.provision_remainder, blocks_per_year);
                let minted = supply.clamp_provision(p.amount, cap);
                supply.record_mint(minted, cap).expect("clamped mint cannot fail");
                supply.provision_remainder = p.remainder;

                prop_assert!(
                    supply.current_supply() <= cap,
                    "cap breached at height {height}"
                );
                if supply.current_supply() == cap && reached_cap_at.is_none() {
                    reached_cap_at = Some(height);
                }
                if let Some(at) = reached_cap_at {
                    // Past the boundary block, minting is clamped to zero.
                    if height > at {
                        prop_assert_eq!(minted, 0, "minted after cap at height {}", height);
                    }
                    prop_assert_eq!(supply.current_supply(), cap);
                }
            }
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 2. Monotonic decay
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// `rate(y+1) ≤ rate(y)` and `rate(y) ≥ floor` for every year.
        #[test]
        fn schedule_monotone_with_floor(
            schedule in arb_schedule(),
            year in 0..=100u64,
        ) {
            prop_assert!(schedule.rate_bps(year + 1) <= schedule.rate_bps(year));
            prop_assert!(schedule.rate_bps(year) >= schedule.inflation_floor_bps);
        }

        /// Beyond the table, the floor applies forever.
        #[test]
        fn schedule_exhaustion_returns_floor(schedule in arb_schedule(), extra in 1..=1_000u64) {
            let last_year = schedule.steps.last().unwrap().year_index;
            prop_assert_eq!(
                schedule.rate_bps(last_year + extra),
                schedule.inflation_floor_bps
            );
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 3. Emission conservation
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Splitting a provision never creates or destroys units, for any
        /// valid split and any provision up to u64::MAX.
        #[test]
        fn emission_split_conserves(
            split in arb_split(),
            provision in 0..=u64::MAX,
        ) {
            prop_assert!(split.validate().is_ok());
            let amounts = split.split(provision);
            prop_assert_eq!(
                amounts.staking as u128
                    + amounts.contribution as u128
                    + amounts.sequencer as u128
                    + amounts.treasury as u128,
                provision as u128
            );
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 4. Remainder carry exactness
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Over k blocks at a constant annual provision A, the carried
        /// remainder makes the total minted exactly ⌊k·A / blocks_per_year⌋:
        /// no long-run drift below the intended curve.
        #[test]
        fn provision_carry_exact(
            annual in 0..=1_000_000_000_000u64,
            blocks_per_year in 1..=100_000u64,
            k in 1..=3_000u64,
        ) {
            let mut remainder = 0u64;
            let mut total = 0u128;
            for _ in 0..k {
                let p = block_provision(annual, remainder, blocks_per_year);
                remainder = p.remainder;
                total += p.amount as u128;
            }
            let expected = (annual as u128 * k as u128) / blocks_per_year as u128;
            prop_assert_eq!(total, expected);
        }
    }
}
