//! # Vela Tokenomics
//!
//! The **token supply engine** for the Vela blockchain: a decaying inflation
//! schedule, a capped supply ledger, and per-block emission splits.
//!
//! Every block, the chain:
//! 1. looks up the annual inflation rate for the current *year index*
//!    (block-height-derived) in a monotonically non-increasing step table,
//! 2. derives this block's provision from the current supply, carrying the
//!    integer-division remainder forward so the long-run emission tracks the
//!    intended curve exactly,
//! 3. clamps the provision so the hard supply cap is never exceeded, and
//! 4. splits the minted amount across reward categories (staking,
//!    contribution, sequencer, treasury), with the last category absorbing
//!    the truncation remainder.
//!
//! All arithmetic is integer-only; rates and splits are basis points.

pub mod emission;
pub mod error;
pub mod schedule;
pub mod supply;


// Re-exports for convenience.
pub use emission::{EmissionAmounts, EmissionCategory, EmissionSplit};
pub use error::TokenomicsError;
pub use schedule::{BlockProvision, InflationSchedule, InflationStep};
pub use supply::SupplyState;
