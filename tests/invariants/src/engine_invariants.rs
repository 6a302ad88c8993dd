//! Property-based tests driving the whole economics engine block by block.
//!
//! Properties tested:
//! 1. The fee conservation law holds after any sequence of blocks and fees
//! 2. The supply cap holds after any sequence of blocks
//! 3. The local chain accumulator always reconciles with the supply ledger

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        vela_economics::{
            AccountId, EconomicsEngine, GenesisConfig, Ledger, LedgerError,
        },
    };

    /// A bottomless ledger: accepts every operation. The engine's own
    /// counters are what these properties exercise.
    struct BottomlessLedger;

    impl Ledger for BottomlessLedger {
        fn mint(&mut self, _account: &AccountId, _amount: u64) -> Result<(), LedgerError> {
            Ok(())
        }
        fn burn(&mut self, _account: &AccountId, _amount: u64) -> Result<(), LedgerError> {
            Ok(())
        }
        fn transfer(
            &mut self,
            _from: &AccountId,
            _to: &AccountId,
            _amount: u64,
        ) -> Result<(), LedgerError> {
            Ok(())
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Drive arbitrary blocks (fees + gas usage) through the engine and
        /// check the global invariants after every one.
        #[test]
        fn engine_invariants_hold_across_arbitrary_blocks(
            blocks in prop::collection::vec(
                (
                    prop::collection::vec(0..=1_000_000_000u64, 0..5), // fees
                    0..=60_000_000u64,                                  // gas used
                ),
                1..40,
            ),
            blocks_per_year in 1..=10_000u64,
        ) {
            let mut genesis = GenesisConfig {
                genesis_supply: 1_000_000_000_000_000,
                ..GenesisConfig::default()
            };
            genesis.params.blocks_per_year = blocks_per_year;
            let cap = genesis.params.total_supply_cap;

            let mut engine = EconomicsEngine::new(genesis).expect("valid genesis");
            let mut ledger = BottomlessLedger;

            for (height, (fees, gas_used)) in blocks.iter().enumerate() {
                engine.on_block_begin(height as u64 + 1);
                let mut expected: u128 = 0;
                for &fee in fees {
                    let split = engine.on_tx_fee_paid(&mut ledger, fee).expect("fee split");
                    prop_assert_eq!(
                        split.burn as u128 + split.treasury as u128 + split.validator as u128,
                        fee as u128
                    );
                    expected += fee as u128;
                }
                prop_assert!(engine.fee_stats().total_fees_processed >= expected);

                engine
                    .on_block_end(&mut ledger, *gas_used, 48_000_000)
                    .expect("block end");

                // ── INVARIANT: conservation law on the audit counters ──
                let stats = engine.fee_stats();
                prop_assert_eq!(
                    stats.total_burned + stats.total_to_treasury + stats.total_to_validators,
                    stats.total_fees_processed
                );

                // ── INVARIANT: supply cap ──
                let supply = engine.supply_info();
                prop_assert!(supply.current_supply <= cap);
                prop_assert_eq!(
                    supply.remaining_mintable as u128,
                    cap as u128 - supply.current_supply as u128
                );

                // ── INVARIANT: local accumulator reconciles ──
                prop_assert!(engine.reconciles());
            }
        }
    }
}
