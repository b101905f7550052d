//! Tokenizer trait definition.

use super::error::Result;

/// Token ID type
pub type TokenId = u32;

/// Character-level tokenizer over a closed vocabulary
pub trait Tokenizer: Send + Sync {
    /// Encode text to token IDs
    fn encode(&self, text: &str) -> Result<Vec<TokenId>>;

    /// Decode token IDs to text
    fn decode(&self, ids: &[TokenId]) -> Result<String>;

    /// Get vocabulary size
    fn vocab_size(&self) -> usize;

    /// Get symbol for ID
    fn id_to_token(&self, id: TokenId) -> Option<char>;

    /// Get ID for symbol
    fn token_to_id(&self, token: char) -> Option<TokenId>;
}
