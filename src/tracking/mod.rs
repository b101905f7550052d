//! Scalar metric recording
//!
//! The evaluator reports its score through the [`MetricSink`] trait so that
//! any experiment tracker can receive it. [`MetricLog`] is the in-memory
//! implementation: a per-name history of `(value, step)` points.
//!
//! # Example
//!
//! ```
//! use sumar::tracking::{MetricLog, MetricSink};
//!
//! let mut log = MetricLog::new();
//! log.log_scalar("score", 0.25, 1);
//! log.log_scalar("score", 0.5, 2);
//! assert_eq!(log.latest("score"), Some(0.5));
//! assert_eq!(log.history("score").len(), 2);
//! ```


use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Receiver of named scalar metrics
pub trait MetricSink {
    /// Record `value` for metric `name` at training `step`
    fn log_scalar(&mut self, name: &str, value: f64, step: u64);
}

/// A single metric data point
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricEntry {
    pub value: f64,
    pub step: u64,
}

/// In-memory metric history, keyed by metric name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricLog {
    metrics: BTreeMap<String, Vec<MetricEntry>>,
}

impl MetricLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All points recorded for `name`, oldest first
    pub fn history(&self, name: &str) -> &[MetricEntry] {
        self.metrics.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Most recent value of `name`
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.history(name).last().map(|e| e.value)
    }

    /// Best (highest) value of `name`
    pub fn best(&self, name: &str) -> Option<f64> {
        self.history(name)
            .iter()
            .map(|e| e.value)
            .fold(None, |best, v| match best {
                Some(b) if b >= v => Some(b),
                _ => Some(v),
            })
    }

    /// Recorded metric names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl MetricSink for MetricLog {
    fn log_scalar(&mut self, name: &str, value: f64, step: u64) {
        self.metrics
            .entry(name.to_string())
            .or_default()
            .push(MetricEntry { value, step });
    }
}
