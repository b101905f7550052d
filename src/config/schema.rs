//! YAML schema for the arithmetic experiment

use serde::{Deserialize, Serialize};

use super::validate::ValidationError;
use crate::dataset::{ArithmeticDataset, DigitDraw, ProblemGenerator};
use crate::eval::ArithmeticSampler;

/// Compute device the host framework should place the model on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Cpu,
    Cuda,
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda => write!(f, "cuda"),
        }
    }
}

/// Arithmetic dataset and evaluation settings
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticConfig {
    /// Width of every training window and the decode budget when sampling
    pub seq_len: usize,

    /// Largest operand digit count
    pub max_digits: usize,

    pub batch_size: usize,

    /// Held-out problems decoded per sampling pass
    pub n_tests: usize,

    /// Packed sequences per training epoch
    pub train_sequences_per_epoch: usize,

    /// Sampling passes per epoch requested from the training loop
    pub inner_iterations: usize,

    pub device: Device,

    pub digit_draw: DigitDraw,

    /// Base seed; a random one is drawn when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            seq_len: 512,
            max_digits: 4,
            batch_size: 16,
            n_tests: 32,
            train_sequences_per_epoch: 4096,
            inner_iterations: 4,
            device: Device::default(),
            digit_draw: DigitDraw::default(),
            seed: None,
        }
    }
}

impl ArithmeticConfig {
    pub fn generator(&self) -> Result<ProblemGenerator, ValidationError> {
        Ok(ProblemGenerator::new(self.max_digits)?.with_digit_draw(self.digit_draw))
    }

    /// Training dataset sized for one epoch
    pub fn train_dataset(&self) -> Result<ArithmeticDataset, ValidationError> {
        let dataset = ArithmeticDataset::with_generator(
            self.seq_len,
            self.generator()?,
            self.train_sequences_per_epoch,
        );
        Ok(match self.seed {
            Some(seed) => dataset.with_seed(seed),
            None => dataset,
        })
    }

    pub fn sampler(&self) -> Result<ArithmeticSampler, ValidationError> {
        Ok(ArithmeticSampler::new(
            self.seq_len,
            self.generator()?,
            self.n_tests,
        ))
    }
}
