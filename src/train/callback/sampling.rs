//! Periodic greedy sampling during training

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::traits::{CallbackAction, CallbackContext, TrainerCallback};
use crate::config::ArithmeticConfig;
use crate::error::{Error, Result};
use crate::eval::{ArithmeticSampler, SampleReport, SequenceModel};
use crate::monitor::{StyledSink, TerminalSink};
use crate::tracking::MetricLog;

/// Decodes held-out problems with the model being trained and records `score`
///
/// Sampling happens `inner_iterations` times per epoch at evenly spaced step
/// boundaries. When the loop does not report `steps_per_epoch` it happens once
/// at the end of each epoch instead. The first epoch is never sampled.
///
/// A failed pass is kept in [`last_error`](Self::last_error) and the callback
/// asks the loop to stop.
///
/// # Example
///
/// ```rust
/// use sumar::config::ArithmeticConfig;
/// use sumar::eval::AdditionOracle;
/// use sumar::monitor::NullSink;
/// use sumar::train::{CallbackContext, SamplingCallback, TrainerCallback};
///
/// let config = ArithmeticConfig { seq_len: 32, n_tests: 4, seed: Some(1), ..Default::default() };
/// let mut cb = SamplingCallback::from_config(&config, AdditionOracle::new())?.with_sink(NullSink);
///
/// let ctx = CallbackContext { epoch: 1, global_step: 9, ..Default::default() };
/// cb.on_epoch_end(&ctx);
/// assert_eq!(cb.metrics().latest("score"), Some(1.0));
/// # Ok::<(), sumar::Error>(())
/// ```
pub struct SamplingCallback<M, S = TerminalSink> {
    sampler: ArithmeticSampler,
    model: M,
    rng: StdRng,
    sink: S,
    metrics: MetricLog,
    inner_iterations: usize,
    last_report: Option<SampleReport>,
    last_error: Option<Error>,
}

impl<M: SequenceModel> SamplingCallback<M> {
    /// Sampler and model with a seeded RNG, logging to the terminal
    pub fn new(sampler: ArithmeticSampler, model: M, seed: u64) -> Self {
        Self {
            sampler,
            model,
            rng: StdRng::seed_from_u64(seed),
            sink: TerminalSink::default(),
            metrics: MetricLog::new(),
            inner_iterations: 1,
            last_report: None,
            last_error: None,
        }
    }

    /// Sampler, seed and cadence taken from a config
    pub fn from_config(config: &ArithmeticConfig, model: M) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Ok(Self::new(config.sampler()?, model, seed)
            .with_inner_iterations(config.inner_iterations))
    }
}

impl<M: SequenceModel, S: StyledSink> SamplingCallback<M, S> {
    /// Send qualitative samples somewhere else
    pub fn with_sink<T: StyledSink>(self, sink: T) -> SamplingCallback<M, T> {
        SamplingCallback {
            sampler: self.sampler,
            model: self.model,
            rng: self.rng,
            sink,
            metrics: self.metrics,
            inner_iterations: self.inner_iterations,
            last_report: self.last_report,
            last_error: self.last_error,
        }
    }

    /// Sampling passes per epoch (at least one)
    pub fn with_inner_iterations(mut self, inner_iterations: usize) -> Self {
        self.inner_iterations = inner_iterations.max(1);
        self
    }

    pub fn inner_iterations(&self) -> usize {
        self.inner_iterations
    }

    pub fn metrics(&self) -> &MetricLog {
        &self.metrics
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn last_report(&self) -> Option<&SampleReport> {
        self.last_report.as_ref()
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Run one sampling pass now and publish it at `step`
    pub fn sample(&mut self, step: u64) -> Result<&SampleReport> {
        let report = self.sampler.sample(&mut self.model, &mut self.rng)?;
        report.publish(step, &mut self.sink, &mut self.metrics);
        Ok(self.last_report.insert(report))
    }

    /// Whether the step that just finished ends a sampling interval
    fn is_sampling_step(&self, ctx: &CallbackContext) -> bool {
        if ctx.epoch < 1 || ctx.steps_per_epoch == 0 {
            return false;
        }
        let interval = ctx.steps_per_epoch.div_ceil(self.inner_iterations).max(1);
        let done = ctx.step + 1;
        done % interval == 0 || done == ctx.steps_per_epoch
    }

    fn sample_or_stop(&mut self, ctx: &CallbackContext) -> CallbackAction {
        let outcome = self.sample(ctx.global_step as u64).map(|_| ());
        match outcome {
            Ok(()) => CallbackAction::Continue,
            Err(e) => {
                self.last_error = Some(e);
                CallbackAction::Stop
            }
        }
    }
}

impl<M, S> TrainerCallback for SamplingCallback<M, S>
where
    M: SequenceModel + Send,
    S: StyledSink + Send,
{
    fn on_step_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
        if self.is_sampling_step(ctx) {
            self.sample_or_stop(ctx)
        } else {
            CallbackAction::Continue
        }
    }

    fn on_epoch_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
        if ctx.epoch >= 1 && ctx.steps_per_epoch == 0 {
            self.sample_or_stop(ctx)
        } else {
            CallbackAction::Continue
        }
    }

    fn name(&self) -> &'static str {
        "SamplingCallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ProblemGenerator;
    use crate::eval::{AdditionOracle, SCORE_METRIC};
    use crate::monitor::BufferSink;
    use crate::tokenizer::{TokenId, VOCAB_SIZE};
    use approx::assert_relative_eq;
    use ndarray::{Array3, ArrayView2};

    struct WrongVocab;

    impl SequenceModel for WrongVocab {
        fn forward(&mut self, tokens: ArrayView2<'_, TokenId>) -> Result<Array3<f32>> {
            let (steps, batch) = tokens.dim();
            Ok(Array3::zeros((steps, batch, VOCAB_SIZE - 1)))
        }
    }

    fn callback(inner: usize) -> SamplingCallback<AdditionOracle, BufferSink> {
        let sampler = ArithmeticSampler::new(32, ProblemGenerator::new(3).unwrap(), 4);
        SamplingCallback::new(sampler, AdditionOracle::new(), 7)
            .with_inner_iterations(inner)
            .with_sink(BufferSink::new())
    }

    fn run_epoch<C: TrainerCallback>(cb: &mut C, epoch: usize, steps: usize) {
        for step in 0..steps {
            let ctx = CallbackContext {
                epoch,
                max_epochs: 3,
                step,
                steps_per_epoch: steps,
                global_step: epoch * steps + step,
                loss: 1.0,
            };
            assert_eq!(cb.on_step_end(&ctx), CallbackAction::Continue);
        }
    }

    #[test]
    fn test_first_epoch_is_not_sampled() {
        let mut cb = callback(4);
        run_epoch(&mut cb, 0, 10);
        let ctx = CallbackContext::default();
        assert_eq!(cb.on_epoch_end(&ctx), CallbackAction::Continue);
        assert!(cb.metrics().is_empty());
        assert!(cb.sink().lines().is_empty());
    }

    #[test]
    fn test_samples_inner_iterations_times() {
        let mut cb = callback(4);
        run_epoch(&mut cb, 1, 10);
        let steps: Vec<u64> = cb
            .metrics()
            .history(SCORE_METRIC)
            .iter()
            .map(|e| e.step)
            .collect();
        // interval of 3 steps plus the last step of the epoch
        assert_eq!(steps, vec![12, 15, 18, 19]);
        assert_eq!(cb.sink().lines().len(), 4);
        assert_relative_eq!(cb.metrics().latest(SCORE_METRIC).unwrap_or(0.0), 1.0);
    }

    #[test]
    fn test_evenly_divided_epoch() {
        let mut cb = callback(2);
        run_epoch(&mut cb, 2, 8);
        let steps: Vec<u64> = cb
            .metrics()
            .history(SCORE_METRIC)
            .iter()
            .map(|e| e.step)
            .collect();
        assert_eq!(steps, vec![19, 23]);
    }

    #[test]
    fn test_short_epoch_samples_every_step() {
        let mut cb = callback(4);
        run_epoch(&mut cb, 1, 2);
        assert_eq!(cb.metrics().history(SCORE_METRIC).len(), 2);
    }

    #[test]
    fn test_unknown_epoch_length_samples_at_epoch_end() {
        let mut cb = callback(4);
        let ctx = CallbackContext {
            epoch: 1,
            step: 3,
            global_step: 42,
            ..Default::default()
        };
        assert_eq!(cb.on_step_end(&ctx), CallbackAction::Continue);
        assert!(cb.metrics().is_empty());
        assert_eq!(cb.on_epoch_end(&ctx), CallbackAction::Continue);
        let history = cb.metrics().history(SCORE_METRIC);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].step, 42);
    }

    #[test]
    fn test_known_epoch_length_skips_epoch_end() {
        let mut cb = callback(1);
        let ctx = CallbackContext {
            epoch: 1,
            steps_per_epoch: 5,
            ..Default::default()
        };
        assert_eq!(cb.on_epoch_end(&ctx), CallbackAction::Continue);
        assert!(cb.metrics().is_empty());
    }

    #[test]
    fn test_report_and_sample_line_are_kept() {
        let mut cb = callback(1);
        let report = cb.sample(3).unwrap();
        assert_eq!(report.total(), 4);
        assert_eq!(report.correct(), 4);
        assert!(cb.last_report().is_some());
        let line = &cb.sink().plain_lines()[0];
        assert!(line.starts_with("x="), "{line}");
        assert!(line.contains("x=="), "{line}");
    }

    #[test]
    fn test_model_error_stops_training() {
        let sampler = ArithmeticSampler::new(16, ProblemGenerator::new(2).unwrap(), 2);
        let mut cb = SamplingCallback::new(sampler, WrongVocab, 1).with_sink(BufferSink::new());
        let ctx = CallbackContext {
            epoch: 1,
            ..Default::default()
        };
        assert_eq!(cb.on_epoch_end(&ctx), CallbackAction::Stop);
        assert!(matches!(cb.last_error(), Some(Error::ModelError(_))));
        assert!(cb.metrics().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = ArithmeticConfig {
            seq_len: 24,
            n_tests: 3,
            inner_iterations: 0,
            seed: Some(5),
            ..Default::default()
        };
        let cb = SamplingCallback::from_config(&config, AdditionOracle::new()).unwrap();
        assert_eq!(cb.inner_iterations(), 1);
        assert_eq!(cb.name(), "SamplingCallback");
    }

    #[test]
    fn test_from_config_rejects_bad_digits() {
        let config = ArithmeticConfig {
            max_digits: 25,
            ..Default::default()
        };
        let result = SamplingCallback::from_config(&config, AdditionOracle::new());
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_same_seed_same_samples() {
        let mut a = callback(1);
        let mut b = callback(1);
        let ra = a.sample(0).unwrap().clone();
        let rb = b.sample(0).unwrap().clone();
        assert_eq!(ra, rb);
    }
}
