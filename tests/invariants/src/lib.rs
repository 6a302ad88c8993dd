//! Vela Property-Based Invariant Tests
//!
//! Uses proptest to verify the hard numeric invariants of the economic
//! core across arbitrary inputs:
//! - Fee conservation and base-fee bounds
//! - Supply-cap enforcement and emission conservation
//! - Inflation schedule monotonicity

pub mod economic_invariants;
pub mod engine_invariants;
pub mod supply_invariants;
