//! Synthetic addition dataset
//!
//! - **`problem`**: random operands, carry explanations, problem text
//! - **`packed`**: problems concatenated into fixed-width next-token pairs
//! - **`loader`**: batching with `[seq_len, batch]` collation
//!
//! # Text format
//!
//! ```text
//! ?x=27+5; 7e0+5e0+0e0==12e0 2e1+0e1+1e1==3e1 x==32
//! ?x=12+9; x==21
//! ```

mod loader;
mod packed;
mod problem;

pub use loader::{transpose_batch, ArithmeticBatch, ArithmeticLoader};
pub use packed::{ArithmeticDataset, SequencePair};
pub use problem::{get_add_explanation, make_int, DigitDraw, Problem, ProblemGenerator};
