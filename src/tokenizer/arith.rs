//! Arithmetic vocabulary tokenizer.

use super::error::{Result, TokenizerError};
use super::traits::{TokenId, Tokenizer};

/// Vocabulary in id order
pub const SYMBOLS: [char; 18] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'x', 'e', ' ', '=', '\n', '?', '+', ';',
];

/// Number of symbols in the vocabulary
pub const VOCAB_SIZE: usize = SYMBOLS.len();

/// ID of the end-of-problem newline
pub const NEWLINE: TokenId = 14;

/// ID of the `?` that prefixes every packed problem
pub const QUESTION: TokenId = 15;

/// Tokenizer for the fixed arithmetic alphabet
///
/// Stateless: the mapping is a compile-time table, so the type is zero-sized
/// and freely copyable into dataset workers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArithTokenizer;

impl ArithTokenizer {
    /// Create the tokenizer
    pub const fn new() -> Self {
        Self
    }

    /// Look up the ID of a symbol
    pub const fn char_to_id(c: char) -> Option<TokenId> {
        let id = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'x' => 10,
            'e' => 11,
            ' ' => 12,
            '=' => 13,
            '\n' => 14,
            '?' => 15,
            '+' => 16,
            ';' => 17,
            _ => return None,
        };
        Some(id)
    }

    /// Look up the symbol of an ID
    pub fn id_to_char(id: TokenId) -> Option<char> {
        SYMBOLS.get(id as usize).copied()
    }
}

impl Tokenizer for ArithTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<TokenId>> {
        text.chars()
            .map(|c| Self::char_to_id(c).ok_or(TokenizerError::UnknownToken(c)))
            .collect()
    }

    fn decode(&self, ids: &[TokenId]) -> Result<String> {
        ids.iter()
            .map(|&id| Self::id_to_char(id).ok_or(TokenizerError::InvalidTokenId(id)))
            .collect()
    }

    fn vocab_size(&self) -> usize {
        VOCAB_SIZE
    }

    fn id_to_token(&self, id: TokenId) -> Option<char> {
        Self::id_to_char(id)
    }

    fn token_to_id(&self, token: char) -> Option<TokenId> {
        Self::char_to_id(token)
    }
}
