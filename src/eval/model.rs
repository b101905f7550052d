//! Model interface consumed by the sampler.

use ndarray::{Array3, ArrayView2, Axis};

use crate::error::{Error, Result};
use crate::tokenizer::{TokenId, VOCAB_SIZE};

/// An autoregressive model over the arithmetic vocabulary
///
/// `forward` takes token ids laid out `[steps, batch]` and returns logits
/// `[steps, batch, VOCAB_SIZE]`, one distribution per position.
pub trait SequenceModel {
    fn forward(&mut self, tokens: ArrayView2<'_, TokenId>) -> Result<Array3<f32>>;
}

impl<M: SequenceModel + ?Sized> SequenceModel for Box<M> {
    fn forward(&mut self, tokens: ArrayView2<'_, TokenId>) -> Result<Array3<f32>> {
        (**self).forward(tokens)
    }
}

impl<M: SequenceModel + ?Sized> SequenceModel for &mut M {
    fn forward(&mut self, tokens: ArrayView2<'_, TokenId>) -> Result<Array3<f32>> {
        (**self).forward(tokens)
    }
}

/// Greedy pick at the final timestep, one token per sequence
///
/// Ties go to the lowest id.
pub fn argmax_last_step(logits: &Array3<f32>, batch: usize) -> Result<Vec<TokenId>> {
    let (steps, got_batch, vocab) = logits.dim();
    if steps == 0 || got_batch != batch || vocab != VOCAB_SIZE {
        return Err(Error::ModelError(format!(
            "expected logits of shape [steps>0, {batch}, {VOCAB_SIZE}], got [{steps}, {got_batch}, {vocab}]"
        )));
    }
    let last = logits.index_axis(Axis(0), steps - 1);
    Ok(last
        .outer_iter()
        .map(|row| {
            let mut best = 0;
            for (i, &v) in row.iter().enumerate() {
                if v > row[best] {
                    best = i;
                }
            }
            best as TokenId
        })
        .collect())
}
