//! Batching loader with sequence-first collation.

use ndarray::Array2;
use rayon::prelude::*;

use super::packed::{ArithmeticDataset, SequencePair};
use crate::error::Result;
use crate::tokenizer::TokenId;

/// A training batch of token windows, laid out `[seq_len, batch]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArithmeticBatch {
    pub inputs: Array2<TokenId>,
    pub targets: Array2<TokenId>,
}

impl ArithmeticBatch {
    /// Number of sequences in the batch
    pub fn size(&self) -> usize {
        self.inputs.ncols()
    }

    pub fn seq_len(&self) -> usize {
        self.inputs.nrows()
    }
}

/// Stack pairs column-wise so that time is the leading axis
pub fn transpose_batch(pairs: &[SequencePair]) -> ArithmeticBatch {
    let seq_len = pairs.first().map_or(0, |(input, _)| input.len());
    let shape = (seq_len, pairs.len());
    ArithmeticBatch {
        inputs: Array2::from_shape_fn(shape, |(t, b)| pairs[b].0[t]),
        targets: Array2::from_shape_fn(shape, |(t, b)| pairs[b].1[t]),
    }
}

/// Iterates a dataset in batches; items within a batch are built in parallel
///
/// The last batch may be smaller than `batch_size`.
#[derive(Debug, Clone)]
pub struct ArithmeticLoader {
    dataset: ArithmeticDataset,
    batch_size: usize,
    cursor: usize,
}

impl ArithmeticLoader {
    pub fn new(dataset: ArithmeticDataset, batch_size: usize) -> Self {
        Self {
            dataset,
            batch_size: batch_size.max(1),
            cursor: 0,
        }
    }

    pub fn dataset(&self) -> &ArithmeticDataset {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Batches per epoch
    pub fn n_batches(&self) -> usize {
        self.dataset.len().div_ceil(self.batch_size)
    }

    /// Rewind and switch the dataset to the next epoch's items
    pub fn next_epoch(&mut self) {
        let epoch = self.dataset.epoch() + 1;
        self.dataset.set_epoch(epoch);
        self.cursor = 0;
    }
}

impl Iterator for ArithmeticLoader {
    type Item = Result<ArithmeticBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.dataset.len();
        if self.cursor >= len {
            return None;
        }
        let end = (self.cursor + self.batch_size).min(len);
        let range = self.cursor..end;
        self.cursor = end;

        let dataset = &self.dataset;
        let pairs = range
            .into_par_iter()
            .map(|idx| dataset.get(idx))
            .collect::<Result<Vec<_>>>();
        Some(pairs.map(|pairs| transpose_batch(&pairs)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .dataset
            .len()
            .saturating_sub(self.cursor)
            .div_ceil(self.batch_size);
        (remaining, Some(remaining))
    }
}
