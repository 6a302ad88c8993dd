//! Vela Test Harness
//!
//! Provides a lightweight deterministic environment for integration-testing
//! the economics engine: an in-memory [`Ledger`] implementation plus a
//! driver that runs whole blocks in the host's hook order.

use {
    std::collections::BTreeMap,
    vela_economics::{
        AccountId, BlockEndSummary, EconomicsEngine, EconomicsError, GenesisConfig, Ledger,
        LedgerError, Params,
    },
    vela_fee_market::FeeSplit,
};

// ─── Constants ───────────────────────────────────────────────────────────────

/// One VELA in base units.
pub const VELA: u64 = 1_000_000_000;

/// Genesis allocation used by the default harness: 100 M VELA.
pub const DEFAULT_GENESIS_SUPPLY: u64 = 100_000_000 * VELA;

/// Gas limit used for harness blocks.
pub const BLOCK_GAS_LIMIT: u64 = 48_000_000;

// ─── In-memory ledger ────────────────────────────────────────────────────────

/// A minimal bank: a map of balances with checked mint / burn / transfer.
///
/// Balances live in a `BTreeMap` so test output is deterministic.
#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    balances: BTreeMap<AccountId, u64>,
}

impl MemoryLedger {
    /// Credit an account directly (genesis funding in tests).
    pub fn credit(&mut self, account: &AccountId, amount: u64) {
        let balance = self.balances.entry(*account).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    /// Current balance of an account (zero if never seen).
    pub fn balance(&self, account: &AccountId) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Sum of all balances.
    pub fn total_held(&self) -> u128 {
        self.balances.values().map(|&b| b as u128).sum()
    }
}

impl Ledger for MemoryLedger {
    fn mint(&mut self, account: &AccountId, amount: u64) -> Result<(), LedgerError> {
        let balance = self.balances.entry(*account).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    fn burn(&mut self, account: &AccountId, amount: u64) -> Result<(), LedgerError> {
        let balance = self.balances.entry(*account).or_insert(0);
        *balance = balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds {
                account: *account,
                balance: *balance,
                required: amount,
            })?;
        Ok(())
    }

    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        self.burn(from, amount)?;
        self.mint(to, amount)
    }
}

// ─── Test harness ────────────────────────────────────────────────────────────

/// Drives the economics engine through whole blocks against a
/// [`MemoryLedger`], maintaining the height the way a consensus host would.
pub struct VelaTestHarness {
    pub engine: EconomicsEngine,
    pub ledger: MemoryLedger,
    pub height: u64,
}

impl Default for VelaTestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl VelaTestHarness {
    /// Harness with default genesis: 100 M VELA minted, fee collector left
    /// empty (fees are credited per block as they are "collected").
    pub fn new() -> Self {
        Self::with_genesis(GenesisConfig {
            genesis_supply: DEFAULT_GENESIS_SUPPLY,
            ..GenesisConfig::default()
        })
    }

    /// Harness with custom parameters on top of the default genesis.
    pub fn with_params(params: Params) -> Self {
        Self::with_genesis(GenesisConfig {
            params,
            genesis_supply: DEFAULT_GENESIS_SUPPLY,
            ..GenesisConfig::default()
        })
    }

    /// Harness from a full genesis config.
    pub fn with_genesis(genesis: GenesisConfig) -> Self {
        let engine = EconomicsEngine::new(genesis).expect("genesis config must be valid");
        Self {
            engine,
            ledger: MemoryLedger::default(),
            height: 0,
        }
    }

    /// The well-known fee collector account.
    pub fn fee_collector(&self) -> AccountId {
        self.engine.accounts().fee_collector
    }

    /// Run one block: collect the given fees, then finish the block with
    /// `gas_used` against the harness gas limit.
    pub fn run_block(
        &mut self,
        fees: &[u64],
        gas_used: u64,
    ) -> Result<(Vec<FeeSplit>, BlockEndSummary), EconomicsError> {
        self.height += 1;
        self.engine.on_block_begin(self.height);

        let collector = self.fee_collector();
        let mut splits = Vec::with_capacity(fees.len());
        for &fee in fees {
            // The host's transaction execution deposits the fee into the
            // collector before the engine distributes it.
            self.ledger.credit(&collector, fee);
            splits.push(self.engine.on_tx_fee_paid(&mut self.ledger, fee)?);
        }

        let summary = self
            .engine
            .on_block_end(&mut self.ledger, gas_used, BLOCK_GAS_LIMIT)?;
        Ok((splits, summary))
    }

    /// Run `n` fee-less blocks at the given gas usage.
    pub fn run_blocks(&mut self, n: u64, gas_used: u64) {
        for _ in 0..n {
            self.run_block(&[], gas_used)
                .expect("fee-less block cannot fail");
        }
    }

    /// Balance of one of the engine's well-known accounts by seed.
    pub fn pool_balance(&self, seed: u8) -> u64 {
        self.ledger.balance(&AccountId::from_seed(seed))
    }
}
