use thiserror::Error;

/// Errors produced by the fee-market subsystem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    /// The parameter set is invalid (e.g. thresholds out of order, split
    /// ratios that do not sum to 100 %).
    #[error("invalid fee market parameters: {reason}")]
    InvalidParams { reason: String },

    /// Arithmetic overflow during fee calculation or counter update.
    #[error("fee arithmetic overflow")]
    Overflow,
}
