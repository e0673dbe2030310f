//! Deterministic text corpora for the string benchmarks.
//!
//! A corpus is a sequence of lower-case ASCII words separated by single
//! spaces. Word lengths and letters are drawn from a `ChaCha8Rng`, so the same
//! [`CorpusConfig`] always yields the same text.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Shortest and longest generated word, inclusive.
const WORD_LEN: std::ops::RangeInclusive<usize> = 2..=10;

#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// Number of words to generate.
    pub words: usize,
    /// Random seed for deterministic generation.
    pub seed: u64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            words: 1_000,
            seed: 42,
        }
    }
}

fn push_word(rng: &mut ChaCha8Rng, out: &mut String) {
    let len = rng.gen_range(WORD_LEN);
    for _ in 0..len {
        let idx = rng.gen_range(0..ALPHABET.len());
        out.push(char::from(ALPHABET[idx]));
    }
}

/// Generates the corpus described by `config`.
pub fn generate_corpus(config: &CorpusConfig) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut out = String::with_capacity(config.words * (WORD_LEN.end() + 1));

    for i in 0..config.words {
        if i > 0 {
            out.push(' ');
        }
        push_word(&mut rng, &mut out);
    }
    out
}
