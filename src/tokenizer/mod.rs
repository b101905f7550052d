//! Fixed-vocabulary tokenization for arithmetic text
//!
//! Every generated problem is drawn from the closed alphabet
//! `"0123456789xe =\n?+;"`. The id of a symbol is its position in that string;
//! this ordering is the contract with the embedding table of any model trained
//! on the data and must not change.
//!
//! # Example
//!
//! ```
//! use sumar::tokenizer::{ArithTokenizer, Tokenizer, NEWLINE};
//!
//! let tokenizer = ArithTokenizer::new();
//! let ids = tokenizer.encode("x=1+2;\n")?;
//! assert_eq!(ids.last(), Some(&NEWLINE));
//! assert_eq!(tokenizer.decode(&ids)?, "x=1+2;\n");
//! # Ok::<(), sumar::tokenizer::TokenizerError>(())
//! ```

mod arith;
mod error;
mod traits;

pub use arith::{ArithTokenizer, NEWLINE, QUESTION, SYMBOLS, VOCAB_SIZE};
pub use error::{Result, TokenizerError};
pub use traits::{TokenId, Tokenizer};
