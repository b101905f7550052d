//! Packed next-token-prediction sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::problem::ProblemGenerator;
use crate::error::{Error, Result};
use crate::tokenizer::{ArithTokenizer, TokenId, Tokenizer};

/// Fixed-width `(input, target)` pair, `target` shifted one token ahead
pub type SequencePair = (Vec<TokenId>, Vec<TokenId>);

/// Dataset of packed addition problems
///
/// Items are generated on access and never cached. Each index derives its own
/// RNG from `(seed, epoch, index)`, so items are independent of each other
/// and of the order in which they are requested.
#[derive(Debug, Clone)]
pub struct ArithmeticDataset {
    generator: ProblemGenerator,
    tokenizer: ArithTokenizer,
    seq_len: usize,
    n_sequences: usize,
    seed: u64,
    epoch: u64,
}

impl ArithmeticDataset {
    /// Create a dataset with a random seed
    ///
    /// Fails with [`Error::Validation`] when `max_digits` is outside
    /// `1..=MAX_DIGITS_LIMIT`.
    ///
    /// [`Error::Validation`]: crate::Error::Validation
    pub fn new(seq_len: usize, max_digits: usize, n_sequences: usize) -> Result<Self> {
        let generator = ProblemGenerator::new(max_digits)?;
        Ok(Self::with_generator(seq_len, generator, n_sequences))
    }

    pub fn with_generator(seq_len: usize, generator: ProblemGenerator, n_sequences: usize) -> Self {
        Self {
            generator,
            tokenizer: ArithTokenizer::new(),
            seq_len,
            n_sequences,
            seed: rand::rng().random(),
            epoch: 0,
        }
    }

    /// Fix the base seed for reproducible items
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    pub fn generator(&self) -> &ProblemGenerator {
        &self.generator
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Move to fresh items for the next pass over the dataset
    pub fn set_epoch(&mut self, epoch: u64) {
        self.epoch = epoch;
    }

    pub fn len(&self) -> usize {
        self.n_sequences
    }

    pub fn is_empty(&self) -> bool {
        self.n_sequences == 0
    }

    pub fn encode(&self, s: &str) -> Result<Vec<TokenId>> {
        Ok(self.tokenizer.encode(s)?)
    }

    pub fn decode(&self, ids: &[TokenId]) -> Result<String> {
        Ok(self.tokenizer.decode(ids)?)
    }

    /// Concatenate `?`-prefixed problems until the length exceeds `seq_len`
    ///
    /// The result is longer than `seq_len`; callers cut it to width.
    pub fn get_packed_math_input<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<TokenId>> {
        let mut s_enc = Vec::with_capacity(self.seq_len + 64);
        while s_enc.len() <= self.seq_len {
            let part = self.generator.make_add_problem(rng);
            s_enc.extend(self.encode(&format!("?{part}"))?);
        }
        Ok(s_enc)
    }

    /// Input and target windows for item `idx`
    pub fn get(&self, idx: usize) -> Result<SequencePair> {
        if idx >= self.n_sequences {
            return Err(Error::IndexOutOfRange {
                index: idx,
                len: self.n_sequences,
            });
        }
        let mut rng = self.item_rng(idx);
        let s = self.get_packed_math_input(&mut rng)?;
        Ok((
            s[..self.seq_len].to_vec(),
            s[1..=self.seq_len].to_vec(),
        ))
    }

    fn item_rng(&self, idx: usize) -> StdRng {
        let mixed = self.seed
            ^ self.epoch.wrapping_mul(0x9E37_79B9_7F4A_7C15)
            ^ (idx as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        StdRng::seed_from_u64(mixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationError;
    use crate::tokenizer::{NEWLINE, QUESTION};

    #[test]
    fn test_len() {
        let dataset = ArithmeticDataset::new(32, 3, 10).unwrap();
        assert_eq!(dataset.len(), 10);
        assert!(!dataset.is_empty());
        assert!(ArithmeticDataset::new(32, 3, 0).unwrap().is_empty());
    }

    #[test]
    fn test_new_rejects_bad_max_digits() {
        for max_digits in [0, 25] {
            assert!(matches!(
                ArithmeticDataset::new(16, max_digits, 1),
                Err(Error::Validation(ValidationError::InvalidMaxDigits(d))) if d == max_digits
            ));
        }
    }

    #[test]
    fn test_packed_input_exceeds_seq_len() {
        let dataset = ArithmeticDataset::new(100, 4, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let s = dataset.get_packed_math_input(&mut rng).unwrap();
            assert!(s.len() > 100);
            assert_eq!(s[0], QUESTION);
        }
    }

    #[test]
    fn test_packed_input_is_whole_problems() {
        let dataset = ArithmeticDataset::new(200, 3, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(10);
        let s = dataset.get_packed_math_input(&mut rng).unwrap();
        assert_eq!(s.last(), Some(&NEWLINE));
        let text = dataset.decode(&s).unwrap();
        for problem in text.split('?').skip(1) {
            assert!(problem.starts_with("x="));
            assert!(problem.ends_with('\n'));
        }
    }

    #[test]
    fn test_get_pair_shape() {
        let dataset = ArithmeticDataset::new(64, 4, 3).unwrap().with_seed(1);
        let (input, target) = dataset.get(2).unwrap();
        assert_eq!(input.len(), 64);
        assert_eq!(target.len(), 64);
        assert_eq!(&input[1..], &target[..63]);
    }

    #[test]
    fn test_get_out_of_range() {
        let dataset = ArithmeticDataset::new(16, 2, 3).unwrap();
        assert!(matches!(
            dataset.get(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_get_reproducible_with_seed() {
        let a = ArithmeticDataset::new(48, 5, 4).unwrap().with_seed(77);
        let b = ArithmeticDataset::new(48, 5, 4).unwrap().with_seed(77);
        assert_eq!(a.get(1).unwrap(), b.get(1).unwrap());
        assert_ne!(a.get(0).unwrap(), a.get(1).unwrap());
    }

    #[test]
    fn test_epoch_changes_items() {
        let mut dataset = ArithmeticDataset::new(48, 5, 4).unwrap().with_seed(77);
        let first = dataset.get(0).unwrap();
        dataset.set_epoch(1);
        assert_eq!(dataset.epoch(), 1);
        assert_ne!(dataset.get(0).unwrap(), first);
    }

    #[test]
    fn test_encode_decode_inverse() {
        let dataset = ArithmeticDataset::new(8, 1, 1).unwrap();
        let text = "?x=27+5; 7e0+5e0+0e0==12e0 2e1+0e1+1e1==3e1 x==32\n";
        let ids = dataset.encode(text).unwrap();
        assert_eq!(dataset.decode(&ids).unwrap(), text);
    }
}
