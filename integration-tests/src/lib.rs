//! Vela Integration Tests
//!
//! Whole-block lifecycle tests for the economics engine, driven through the
//! same hook sequence the consensus layer uses:
//! `on_block_begin` → `on_tx_fee_paid`* → `on_block_end`.
//!
//! # Subsystems tested
//!
//! 1. **Fee lifecycle** — tier selection, burn/treasury/validator routing,
//!    conservation counters, atomic rollback on ledger failure
//! 2. **Supply lifecycle** — inflation decay across years, remainder carry,
//!    cap clamping and the cap steady state, emission pool crediting
//! 3. **Governance parameters** — synchronous validation, staged updates
//!    applied only at block boundaries
//! 4. **Cross-chain accumulators** — idempotent report application and
//!    reconciliation against the supply ledger
//!
//! The harness does NOT spin up consensus; it drives the engine directly
//! against an in-memory ledger with deterministic accounts.

pub mod harness;
