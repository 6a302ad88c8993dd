//! The per-block economics engine.
//!
//! The consensus layer drives one [`EconomicsEngine`] per chain, in a fixed
//! order for every block:
//!
//! 1. [`EconomicsEngine::on_block_begin`] — applies any staged parameter
//!    update and records the in-flight height.
//! 2. [`EconomicsEngine::on_tx_fee_paid`] — once per fee-bearing
//!    transaction: burns and distributes the fee at the current burn tier.
//! 3. [`EconomicsEngine::on_block_end`] — recomputes utilization and the
//!    next block's base fee, then runs the inflation → cap-clamp → emission
//!    pipeline.
//!
//! The engine runs on the single consensus-critical execution thread; it
//! holds no locks and performs no I/O. Every hook stages its state changes
//! first, then issues ledger calls, and commits only after all of them
//! succeed — an error at any point returns with the engine untouched, and
//! the host rejects the whole block.

use {
    crate::{
        constants::GenesisConfig,
        crosschain::{ChainAccumulator, ChainAccumulators, ChainReport, ReportOutcome},
        error::EconomicsError,
        ledger::{AccountId, EconomicsAccounts, Ledger},
        params::Params,
    },
    log::debug,
    serde::{Deserialize, Serialize},
    vela_fee_market::{
        calculator::{block_utilization_bps, next_base_fee, split_fee},
        BurnTier, FeeMarketState, FeeSplit,
    },
    vela_tokenomics::{
        schedule::{block_provision, year_index},
        EmissionCategory, SupplyState,
    },
};

/// One emission audit event, emitted per category per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionEvent {
    pub category: EmissionCategory,
    pub account: AccountId,
    pub amount: u64,
}

/// Result of the end-of-block pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEndSummary {
    /// Base fee in force for the next block.
    pub new_base_fee: u64,
    /// Utilization of the block just finalized, in bps.
    pub utilization_bps: u32,
    /// Year index the inflation rate was looked up for.
    pub year_index: u64,
    /// Base units actually minted (after the cap clamp; zero at the cap).
    pub minted: u64,
    /// One event per category that received a non-zero amount.
    pub emissions: Vec<EmissionEvent>,
}

/// Read-only fee audit totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeStats {
    pub total_burned: u128,
    pub total_to_treasury: u128,
    pub total_to_validators: u128,
    pub total_fees_processed: u128,
}

/// Read-only supply totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyInfo {
    pub total_minted: u128,
    pub total_burned: u128,
    pub current_supply: u64,
    pub remaining_mintable: u64,
}

/// Read-only burn-tier snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnTierInfo {
    pub tier: BurnTier,
    pub burn_bps: u32,
    pub utilization_bps: u32,
}

/// The economic state-transition core of a Vela chain.
///
/// Constructed once at chain start and passed by handle into every
/// block-processing call — never a language-level global. A test harness
/// swaps in a fresh instance plus a mock [`Ledger`].
#[derive(Debug)]
pub struct EconomicsEngine {
    params: Params,
    pending_params: Option<Params>,
    accounts: EconomicsAccounts,
    chain_id: String,
    genesis_height: u64,
    current_height: u64,
    fee_state: FeeMarketState,
    supply: SupplyState,
    chains: ChainAccumulators,
}

impl EconomicsEngine {
    /// Build the engine from a genesis configuration.
    pub fn new(genesis: GenesisConfig) -> Result<Self, EconomicsError> {
        genesis.params.validate()?;
        if genesis.genesis_supply > genesis.params.total_supply_cap {
            return Err(EconomicsError::InvalidParams {
                reason: format!(
                    "genesis_supply ({}) exceeds total_supply_cap ({})",
                    genesis.genesis_supply, genesis.params.total_supply_cap
                ),
            });
        }
        let initial_base_fee = genesis
            .initial_base_fee
            .max(genesis.params.fee_market.min_gas_price_floor);
        Ok(Self {
            fee_state: FeeMarketState::genesis(initial_base_fee),
            supply: SupplyState::genesis(genesis.genesis_supply),
            chains: ChainAccumulators::default(),
            pending_params: None,
            current_height: genesis.genesis_height,
            genesis_height: genesis.genesis_height,
            params: genesis.params,
            accounts: genesis.accounts,
            chain_id: genesis.chain_id,
        })
    }

    // ── Governance boundary ──────────────────────────────────────────────

    /// Stage a governance parameter update.
    ///
    /// Validation is synchronous and atomic: a proposal that breaks any
    /// invariant is rejected here and never reaches chain state. A valid
    /// update takes effect at the next block boundary; staging twice before
    /// the boundary replaces the earlier update (proposals execute in
    /// order, last write wins).
    pub fn queue_params_update(&mut self, params: Params) -> Result<(), EconomicsError> {
        params.validate()?;
        // The cap may move, but never below what already circulates.
        if params.total_supply_cap < self.supply.current_supply() {
            return Err(EconomicsError::InvalidParams {
                reason: format!(
                    "total_supply_cap ({}) below current supply ({})",
                    params.total_supply_cap,
                    self.supply.current_supply()
                ),
            });
        }
        self.pending_params = Some(params);
        Ok(())
    }

    // ── Per-block hooks (fixed call order) ───────────────────────────────

    /// Begin processing a block: apply any staged parameter update and
    /// record the in-flight height.
    pub fn on_block_begin(&mut self, height: u64) {
        if let Some(params) = self.pending_params.take() {
            debug!("applying staged parameter update at height {height}");
            self.params = params;
        }
        self.current_height = height;
    }

    /// Distribute one transaction's collected fee.
    ///
    /// The burn tier is classified from the last *committed* utilization
    /// (the in-flight block's own gas usage is only known at block end).
    /// Burn, treasury, and validator amounts sum to `total_fee` exactly;
    /// the three ledger calls and all counter updates apply all-or-nothing.
    pub fn on_tx_fee_paid(
        &mut self,
        ledger: &mut dyn Ledger,
        total_fee: u64,
    ) -> Result<FeeSplit, EconomicsError> {
        let fee_market = &self.params.fee_market;
        let tier = BurnTier::classify(self.fee_state.previous_utilization_bps, fee_market);
        let split = split_fee(total_fee, tier.burn_bps(fee_market), fee_market.treasury_fee_bps)?;

        // Stage every counter update before the first side effect.
        let mut fee_state = self.fee_state.clone();
        fee_state.record_split(&split)?;
        let mut supply = self.supply.clone();
        supply.record_burn(split.burn)?;
        let mut chains = self.chains.clone();
        chains.record_local_burn(&self.chain_id, split.burn)?;

        if split.burn > 0 {
            ledger.burn(&self.accounts.fee_collector, split.burn)?;
        }
        if split.treasury > 0 {
            ledger.transfer(
                &self.accounts.fee_collector,
                &self.accounts.treasury,
                split.treasury,
            )?;
        }
        if split.validator > 0 {
            ledger.transfer(
                &self.accounts.fee_collector,
                &self.accounts.validator_pool,
                split.validator,
            )?;
        }

        self.fee_state = fee_state;
        self.supply = supply;
        self.chains = chains;
        debug!(
            "fee {} distributed at {} tier: burn {}, treasury {}, validators {}",
            total_fee,
            tier.name(),
            split.burn,
            split.treasury,
            split.validator
        );
        Ok(split)
    }

    /// Finish processing a block: fee-market update plus the
    /// inflation → cap-clamp → emission pipeline.
    ///
    /// `gas_used` / `gas_limit` describe the block just finalized; the
    /// returned base fee prices the *next* block.
    pub fn on_block_end(
        &mut self,
        ledger: &mut dyn Ledger,
        gas_used: u64,
        gas_limit: u64,
    ) -> Result<BlockEndSummary, EconomicsError> {
        let params = &self.params;

        // Fee side: utilization of the finalized block, next block's price.
        let utilization_bps =
            block_utilization_bps(gas_used, gas_limit, self.fee_state.previous_utilization_bps);
        let new_base_fee = next_base_fee(&params.fee_market, self.fee_state.base_fee, utilization_bps);

        // Supply side: provision for this block, clamped at the cap.
        let year = year_index(self.current_height, self.genesis_height, params.blocks_per_year);
        let annual =
            params.inflation.annual_provisions(year, self.supply.current_supply());
        let provision =
            block_provision(annual, self.supply.provision_remainder, params.blocks_per_year);
        let minted = self.supply.clamp_provision(provision.amount, params.total_supply_cap);
        let amounts = params.emission.split(minted);

        // Stage state, then mint. Every mint in the system passes through
        // this single choke point.
        let mut supply = self.supply.clone();
        supply.record_mint(minted, params.total_supply_cap)?;
        supply.provision_remainder = provision.remainder;
        let mut chains = self.chains.clone();
        chains.record_local_rewards(&self.chain_id, minted)?;

        let mut emissions = Vec::with_capacity(EmissionCategory::ALL.len());
        for category in EmissionCategory::ALL {
            let amount = amounts.for_category(category);
            if amount == 0 {
                continue;
            }
            let account = *self.accounts.emission_destination(category);
            ledger.mint(&account, amount)?;
            emissions.push(EmissionEvent {
                category,
                account,
                amount,
            });
        }

        self.supply = supply;
        self.chains = chains;
        self.fee_state
            .advance_block(new_base_fee, utilization_bps, self.current_height);

        if provision.amount > 0 && minted < provision.amount {
            debug!(
                "supply cap clamped provision {} to {} at height {}",
                provision.amount, minted, self.current_height
            );
        }
        for event in &emissions {
            debug!(
                "emission at height {}: {} {} -> {}",
                self.current_height,
                event.category.name(),
                event.amount,
                event.account
            );
        }

        Ok(BlockEndSummary {
            new_base_fee,
            utilization_bps,
            year_index: year,
            minted,
            emissions,
        })
    }

    // ── Read-only query surface ──────────────────────────────────────────
    //
    // Queries never error on missing-context values: they read the state
    // committed at the last block boundary.

    /// Current base fee per gas unit.
    pub fn base_fee(&self) -> u64 {
        self.fee_state.base_fee
    }

    /// Current parameter snapshot.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The well-known accounts this engine credits and debits.
    pub fn accounts(&self) -> &EconomicsAccounts {
        &self.accounts
    }

    /// The staged parameter update, if any.
    pub fn pending_params(&self) -> Option<&Params> {
        self.pending_params.as_ref()
    }

    /// Utilization of the last finalized block, in bps.
    pub fn block_utilization_bps(&self) -> u32 {
        self.fee_state.previous_utilization_bps
    }

    /// The burn tier currently in force, with its rate and the utilization
    /// it was classified from.
    pub fn burn_tier(&self) -> BurnTierInfo {
        let utilization_bps = self.fee_state.previous_utilization_bps;
        let tier = BurnTier::classify(utilization_bps, &self.params.fee_market);
        BurnTierInfo {
            tier,
            burn_bps: tier.burn_bps(&self.params.fee_market),
            utilization_bps,
        }
    }

    /// Lifetime fee distribution totals.
    pub fn fee_stats(&self) -> FeeStats {
        FeeStats {
            total_burned: self.fee_state.cumulative_burned,
            total_to_treasury: self.fee_state.cumulative_to_treasury,
            total_to_validators: self.fee_state.cumulative_to_validators,
            total_fees_processed: self.fee_state.cumulative_fees_processed,
        }
    }

    /// Lifetime supply totals.
    pub fn supply_info(&self) -> SupplyInfo {
        SupplyInfo {
            total_minted: self.supply.total_minted,
            total_burned: self.supply.total_burned,
            current_supply: self.supply.current_supply(),
            remaining_mintable: self.supply.remaining_mintable(self.params.total_supply_cap),
        }
    }

    /// One chain's accumulated burn / reward totals.
    pub fn chain_accumulator(&self, chain_id: &str) -> Option<&ChainAccumulator> {
        self.chains.get(chain_id)
    }

    /// Apply an inbound cross-chain report (idempotent by sequence number).
    pub fn apply_chain_report(
        &mut self,
        report: &ChainReport,
    ) -> Result<ReportOutcome, EconomicsError> {
        self.chains.apply_report(report)
    }

    /// Whether the local chain's accumulator agrees with the supply ledger.
    pub fn reconciles(&self) -> bool {
        self.chains.reconciles_with(&self.chain_id, &self.supply)
    }

    /// Whether a fee falls inside the admissible submission range.
    pub fn submission_fee_in_bounds(&self, fee: u64) -> bool {
        self.params.fee_market.submission_fee_in_bounds(fee)
    }

    /// Height of the block currently (or last) being processed.
    pub fn height(&self) -> u64 {
        self.current_height
    }

    // ── Persistence accessors ────────────────────────────────────────────

    pub fn fee_market_state(&self) -> &FeeMarketState {
        &self.fee_state
    }

    pub fn supply_state(&self) -> &SupplyState {
        &self.supply
    }

    pub fn chain_accumulators(&self) -> &ChainAccumulators {
        &self.chains
    }
}
