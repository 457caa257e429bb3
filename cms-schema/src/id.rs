//! Random identifier generation.
//!
//! Identifiers mark select options, rich-editor custom classes and block
//! fields. They are "probably unique": collision probability is not bounded
//! and nothing treats them as cryptographic tokens.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of a generated identifier unless the caller asks otherwise.
pub const DEFAULT_ID_LENGTH: usize = 10;

/// Generator for short alphanumeric identifiers.
///
/// The generator owns its random source so tests can seed it and builders
/// receive it as an explicit dependency instead of reaching for process-wide
/// state.
#[derive(Debug)]
pub struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    /// Create a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator from a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate an identifier of the default length.
    pub fn generate(&mut self) -> String {
        self.generate_len(DEFAULT_ID_LENGTH)
    }

    /// Generate an identifier of the given length.
    pub fn generate_len(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
