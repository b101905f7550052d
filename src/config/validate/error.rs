//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid sequence length: {0} (must be > 0)")]
    InvalidSeqLen(usize),

    #[error("Invalid max digits: {0} (must be in 1..=18)")]
    InvalidMaxDigits(usize),

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid test count: {0} (must be > 0)")]
    InvalidTestCount(usize),

    #[error("Invalid sequences per epoch: {0} (must be > 0)")]
    InvalidSequencesPerEpoch(usize),

    #[error("Invalid inner iterations: {0} (must be > 0)")]
    InvalidInnerIterations(usize),
}
