use {
    crate::ledger::LedgerError,
    thiserror::Error,
    vela_fee_market::FeeError,
    vela_tokenomics::TokenomicsError,
};

/// Errors surfaced by the economics engine.
///
/// The taxonomy mirrors how each class propagates:
/// - `InvalidParams` is rejected synchronously at the governance-update
///   boundary and never reaches runtime.
/// - `ArithmeticOverflow` and `Ledger` abort the enclosing block-processing
///   call entirely; partial application of an economic update is treated as
///   a security defect, not a recoverable condition.
///
/// Reaching the supply cap is *not* an error — minting is simply skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomicsError {
    /// A governance parameter update is malformed or out of bounds.
    #[error("invalid parameters: {reason}")]
    InvalidParams { reason: String },

    /// Fixed-point arithmetic overflowed; the block must be rejected.
    #[error("arithmetic overflow in block processing")]
    ArithmeticOverflow,

    /// An inbound cross-chain report arrived ahead of its expected sequence.
    #[error("out-of-order cross-chain report for {chain_id}: expected sequence {expected}, got {got}")]
    OutOfOrderReport {
        chain_id: String,
        expected: u64,
        got: u64,
    },

    /// The host ledger rejected a mint / burn / transfer; the block must be
    /// rejected.
    #[error("ledger operation failed: {0}")]
    Ledger(#[from] LedgerError),
}

impl From<FeeError> for EconomicsError {
    fn from(err: FeeError) -> Self {
        match err {
            FeeError::InvalidParams { reason } => Self::InvalidParams { reason },
            FeeError::Overflow => Self::ArithmeticOverflow,
        }
    }
}

impl From<TokenomicsError> for EconomicsError {
    fn from(err: TokenomicsError) -> Self {
        match err {
            TokenomicsError::InvalidParams { reason } => Self::InvalidParams { reason },
            TokenomicsError::Overflow => Self::ArithmeticOverflow,
        }
    }
}
