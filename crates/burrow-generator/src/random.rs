use crate::Generator;
use burrow_core::Extension;
use rand::Rng;
use std::num::NonZeroUsize;
use typed_builder::TypedBuilder;

/// Symbols a random extension is drawn from: `A-Z`, `a-z` and `0-9`.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const DEFAULT_LENGTH: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(length) => length,
    None => unreachable!(),
};

/// Generates extensions by picking each symbol independently and uniformly
/// from [`ALPHABET`].
///
/// Candidates are unordered and unguessable; they are not guaranteed to be
/// unique, so the caller must reject and regenerate on collision.
///
/// The length is non-zero: an empty extension means "none supplied" and must
/// never be stored.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RandomGenerator {
    #[builder(default = DEFAULT_LENGTH)]
    length: NonZeroUsize,
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self::builder().build()
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    type Output = Extension;

    fn generate(&self) -> Self::Output {
        let mut rng = rand::rng();
        let candidate: String = (0..self.length.get())
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Extension::new(candidate)
    }
}
