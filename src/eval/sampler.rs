//! Greedy sampling and exact-match scoring on held-out problems.

use ndarray::{Array2, ArrayView1};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::model::{argmax_last_step, SequenceModel};
use crate::dataset::ProblemGenerator;
use crate::error::{Error, Result};
use crate::monitor::{Segment, StyledSink, TextStyle};
use crate::tokenizer::{ArithTokenizer, TokenId, Tokenizer, TokenizerError, NEWLINE};
use crate::tracking::MetricSink;

/// Name of the accuracy metric
pub const SCORE_METRIC: &str = "score";

/// Marker preceding the final answer in a completion
const ANSWER_MARKER: &str = "x==";

/// Per-sequence decoding state; only ever moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeState {
    #[default]
    Generating,
    Finished,
}

impl DecodeState {
    pub fn is_finished(self) -> bool {
        self == DecodeState::Finished
    }
}

/// One decoded held-out problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleItem {
    pub prompt: String,
    pub answer: String,
    /// Decoded text up to the first newline
    pub completion: String,
    /// Text after the last `x==`, or the whole completion without one
    pub predicted: String,
    pub correct: bool,
}

/// Outcome of one sampling pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleReport {
    pub items: Vec<SampleItem>,
    pub accuracy: f64,
    /// Sequences that emitted a newline during decoding
    pub finished: usize,
}

impl SampleReport {
    pub fn correct(&self) -> usize {
        self.items.iter().filter(|item| item.correct).count()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// First completion split into question, separator, and the rest
    pub fn sample_segments(&self) -> Vec<Segment> {
        let Some(first) = self.items.first() else {
            return Vec::new();
        };
        let mut parts = first.completion.split(';');
        let head = parts.next().unwrap_or_default().to_string();
        let rest = parts.collect::<Vec<_>>().join(";");
        vec![
            (head, TextStyle::Key),
            (";".to_string(), TextStyle::Subtle),
            (rest, TextStyle::None),
        ]
    }

    /// Log the qualitative sample and record the score
    pub fn publish(&self, step: u64, log: &mut dyn StyledSink, metrics: &mut dyn MetricSink) {
        log.log(&self.sample_segments());
        metrics.log_scalar(SCORE_METRIC, self.accuracy, step);
    }
}

fn all_finished(states: &[DecodeState]) -> bool {
    states.iter().all(|s| s.is_finished())
}

/// Answer the model gave in a completion
pub fn extract_answer(completion: &str) -> &str {
    completion.rsplit(ANSWER_MARKER).next().unwrap_or(completion)
}

/// Greedy autoregressive evaluator
///
/// Decodes `seq_len - 1` steps. Prompt characters are teacher forced; the
/// model only chooses tokens past the end of the prompt.
#[derive(Debug, Clone)]
pub struct ArithmeticSampler {
    seq_len: usize,
    generator: ProblemGenerator,
    n_tests: usize,
    tokenizer: ArithTokenizer,
}

impl ArithmeticSampler {
    pub fn new(seq_len: usize, generator: ProblemGenerator, n_tests: usize) -> Self {
        Self {
            seq_len,
            generator,
            n_tests,
            tokenizer: ArithTokenizer::new(),
        }
    }

    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    pub fn n_tests(&self) -> usize {
        self.n_tests
    }

    /// Draw `n_tests` held-out problems and decode them
    pub fn sample<M, R>(&self, model: &mut M, rng: &mut R) -> Result<SampleReport>
    where
        M: SequenceModel + ?Sized,
        R: Rng + ?Sized,
    {
        let qa: Vec<(String, String)> = (0..self.n_tests)
            .map(|_| self.generator.get_qa(rng))
            .collect();
        self.evaluate(model, &qa)
    }

    /// Decode the given `(prompt, answer)` pairs and score them
    pub fn evaluate<M>(&self, model: &mut M, qa: &[(String, String)]) -> Result<SampleReport>
    where
        M: SequenceModel + ?Sized,
    {
        if qa.is_empty() {
            return Err(Error::InvalidPrompt("no prompts to sample".to_string()));
        }
        let prompts = qa
            .iter()
            .map(|(prompt, _)| self.tokenizer.encode(prompt))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if let Some(i) = prompts.iter().position(Vec::is_empty) {
            return Err(Error::InvalidPrompt(format!("prompt {i} is empty")));
        }

        let (results, finished) = self.decode(model, &prompts)?;

        let items: Vec<SampleItem> = results
            .iter()
            .zip(qa)
            .map(|(result, (prompt, answer))| {
                let completion = result
                    .split_once('\n')
                    .map_or(result.as_str(), |(line, _)| line)
                    .to_string();
                let predicted = extract_answer(&completion).to_string();
                let correct = predicted == *answer;
                SampleItem {
                    prompt: prompt.clone(),
                    answer: answer.clone(),
                    completion,
                    predicted,
                    correct,
                }
            })
            .collect();

        let correct = items.iter().filter(|item| item.correct).count();
        Ok(SampleReport {
            accuracy: correct as f64 / items.len() as f64,
            finished,
            items,
        })
    }

    /// Run the decode loop; returns raw decoded strings and the finished count
    fn decode<M>(&self, model: &mut M, prompts: &[Vec<TokenId>]) -> Result<(Vec<String>, usize)>
    where
        M: SequenceModel + ?Sized,
    {
        let batch = prompts.len();
        let first: Vec<TokenId> = prompts.iter().map(|p| p[0]).collect();
        let mut data = Array2::from_shape_vec((1, batch), first.clone())?;
        let mut states = vec![DecodeState::Generating; batch];
        let mut results = first
            .iter()
            .map(|&id| self.symbol(id).map(String::from))
            .collect::<Result<Vec<_>>>()?;

        for i in 0..self.seq_len.saturating_sub(1) {
            if all_finished(&states) {
                continue;
            }

            let logits = model.forward(data.view())?;
            let mut next = argmax_last_step(&logits, batch)?;

            for (state, &token) in states.iter_mut().zip(&next) {
                if token == NEWLINE {
                    *state = DecodeState::Finished;
                }
            }
            if all_finished(&states) {
                continue;
            }

            for (token, prompt) in next.iter_mut().zip(prompts) {
                if let Some(&forced) = prompt.get(i + 1) {
                    *token = forced;
                }
            }

            data.push_row(ArrayView1::from(next.as_slice()))?;
            for (result, &token) in results.iter_mut().zip(&next) {
                result.push(self.symbol(token)?);
            }
        }

        let finished = states.iter().filter(|s| s.is_finished()).count();
        Ok((results, finished))
    }

    fn symbol(&self, id: TokenId) -> Result<char> {
        Ok(self
            .tokenizer
            .id_to_token(id)
            .ok_or(TokenizerError::InvalidTokenId(id))?)
    }
}
