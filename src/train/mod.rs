//! Training-loop integration
//!
//! The model, optimizer and loop live in the host framework. This module
//! gives that loop a [`SamplingCallback`] that periodically decodes
//! held-out problems and records the `score` metric.

pub mod callback;

pub use callback::{CallbackAction, CallbackContext, SamplingCallback, TrainerCallback};
