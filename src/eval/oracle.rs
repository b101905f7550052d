//! Reference model that always knows the answer.

use ndarray::{Array3, ArrayView2};

use super::model::SequenceModel;
use crate::dataset::Problem;
use crate::error::Result;
use crate::tokenizer::{ArithTokenizer, TokenId, NEWLINE, VOCAB_SIZE};

const SPACE: TokenId = 12;

/// Deterministic stand-in for a trained model
///
/// Reads each column's `x={a}+{b};` prefix and predicts the next character of
/// the correct completion, with or without the carry explanation. Once the
/// column diverges from that completion it predicts newline. Before the
/// question is complete it predicts a space; those positions are teacher
/// forced by the sampler anyway.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditionOracle {
    explain: bool,
}

impl AdditionOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also produce the carry explanation before the answer
    pub fn with_explanation(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    fn completion(&self, question: &str) -> Option<Vec<char>> {
        let operands = question.strip_prefix("x=")?.strip_suffix(';')?;
        let (x, y) = operands.split_once('+')?;
        let problem = Problem::new(x.parse().ok()?, y.parse().ok()?);
        problem.x.checked_add(problem.y)?;
        Some(problem.format(self.explain).chars().collect())
    }

    /// Next-token prediction for every position of one column
    fn predict_column(&self, column: &[char]) -> Vec<TokenId> {
        let Some(semi) = column.iter().position(|&c| c == ';') else {
            return vec![SPACE; column.len()];
        };
        let question: String = column[..=semi].iter().collect();
        let target = self.completion(&question).unwrap_or_default();
        let matched = column
            .iter()
            .zip(&target)
            .take_while(|(a, b)| a == b)
            .count();

        (0..column.len())
            .map(|t| {
                if t < semi {
                    SPACE
                } else if t < matched && t + 1 < target.len() {
                    ArithTokenizer::char_to_id(target[t + 1]).unwrap_or(NEWLINE)
                } else {
                    NEWLINE
                }
            })
            .collect()
    }
}

impl SequenceModel for AdditionOracle {
    fn forward(&mut self, tokens: ArrayView2<'_, TokenId>) -> Result<Array3<f32>> {
        let (steps, batch) = tokens.dim();
        let mut logits = Array3::<f32>::zeros((steps, batch, VOCAB_SIZE));
        for (b, column) in tokens.columns().into_iter().enumerate() {
            let chars: Vec<char> = column
                .iter()
                .map(|&id| ArithTokenizer::id_to_char(id).unwrap_or('\n'))
                .collect();
            for (t, next) in self.predict_column(&chars).into_iter().enumerate() {
                logits[[t, b, next as usize]] = 1.0;
            }
        }
        Ok(logits)
    }
}
