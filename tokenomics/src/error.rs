use thiserror::Error;

/// Errors produced by the supply engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenomicsError {
    /// The inflation schedule or emission split is malformed.
    #[error("invalid tokenomics parameters: {reason}")]
    InvalidParams { reason: String },

    /// Arithmetic overflow, or a mutation that would break a supply
    /// invariant (burning more than was ever minted, minting past the cap).
    #[error("supply arithmetic overflow or invariant violation")]
    Overflow,
}
