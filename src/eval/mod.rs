//! Greedy-decoding evaluation
//!
//! ## Architecture
//!
//! - `model`: the [`SequenceModel`] interface and greedy token selection
//! - `sampler`: held-out problem decoding with prompt teacher forcing and
//!   exact-match scoring
//! - `oracle`: [`AdditionOracle`], a reference model used for smoke tests
//!
//! ## Example
//!
//! ```
//! use sumar::dataset::ProblemGenerator;
//! use sumar::eval::{AdditionOracle, ArithmeticSampler};
//!
//! let sampler = ArithmeticSampler::new(32, ProblemGenerator::new(4)?, 1);
//! let qa = vec![("x=12+9;".to_string(), "21".to_string())];
//! let report = sampler.evaluate(&mut AdditionOracle::new(), &qa)?;
//! assert_eq!(report.items[0].completion, "x=12+9; x==21");
//! assert_eq!(report.correct(), 1);
//! # Ok::<(), sumar::Error>(())
//! ```

pub mod model;
pub mod oracle;
pub mod sampler;


pub use model::{argmax_last_step, SequenceModel};
pub use oracle::AdditionOracle;
pub use sampler::{
    extract_answer, ArithmeticSampler, DecodeState, SampleItem, SampleReport, SCORE_METRIC,
};
