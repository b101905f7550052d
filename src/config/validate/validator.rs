//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::ArithmeticConfig;

/// Largest operand width whose sums still fit in a `u64`
pub const MAX_DIGITS_LIMIT: usize = 18;

/// Validate an arithmetic config
///
/// Checks every count is non-zero and that operands cannot overflow.
pub fn validate_config(config: &ArithmeticConfig) -> Result<(), ValidationError> {
    if config.seq_len == 0 {
        return Err(ValidationError::InvalidSeqLen(config.seq_len));
    }

    if config.max_digits == 0 || config.max_digits > MAX_DIGITS_LIMIT {
        return Err(ValidationError::InvalidMaxDigits(config.max_digits));
    }

    if config.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(config.batch_size));
    }

    if config.n_tests == 0 {
        return Err(ValidationError::InvalidTestCount(config.n_tests));
    }

    if config.train_sequences_per_epoch == 0 {
        return Err(ValidationError::InvalidSequencesPerEpoch(
            config.train_sequences_per_epoch,
        ));
    }

    if config.inner_iterations == 0 {
        return Err(ValidationError::InvalidInnerIterations(
            config.inner_iterations,
        ));
    }

    Ok(())
}
