//! Sumar: synthetic addition-reasoning data for autoregressive models
//!
//! Generates addition problems (optionally with a digit-by-digit carry
//! explanation), packs them into fixed-width next-token-prediction pairs over
//! an 18-symbol vocabulary, and scores a model by greedy decoding on held-out
//! problems.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sumar::dataset::{get_add_explanation, ProblemGenerator};
//! use sumar::eval::{AdditionOracle, ArithmeticSampler};
//!
//! assert_eq!(
//!     get_add_explanation(27, 5),
//!     "7e0+5e0+0e0==12e0 2e1+0e1+1e1==3e1"
//! );
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let sampler = ArithmeticSampler::new(64, ProblemGenerator::new(3)?, 8);
//! let report = sampler.sample(&mut AdditionOracle::new(), &mut rng)?;
//! assert!((report.accuracy - 1.0).abs() < f64::EPSILON);
//! # Ok::<(), sumar::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod eval;
pub mod monitor;
pub mod tokenizer;
pub mod tracking;
pub mod train;

pub use error::{Error, Result};
