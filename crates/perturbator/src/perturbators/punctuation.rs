//! Typing errors: a dropped character or two transposed characters.

use crate::perturbator::Perturbator;
use crate::probability::Probability;
use rand::{Rng, RngCore};

/// Shortest input (in characters) the punctuation perturbator will touch.
///
/// Shorter strings have no interior position to erase or swap and pass
/// through unchanged even when the perturbator fires.
pub const MIN_PUNCTUATION_LEN: usize = 3;

/// Erases one interior character or swaps it with its right neighbour.
///
/// On firing, an index `k` is drawn uniformly from `1..=len-2` (first and last
/// characters are never erased) and a second draw `v` picks the outcome:
/// `v <= 0.5` erases the character at `k`, otherwise the characters at `k`
/// and `k + 1` are swapped. Positions count characters, not bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationPerturbator {
    probability: Probability,
}

impl PunctuationPerturbator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_probability(mut self, probability: Probability) -> Self {
        self.probability = probability;
        self
    }
}

impl Perturbator for PunctuationPerturbator {
    fn probability(&self) -> Probability {
        self.probability
    }

    fn perturb(&self, rng: &mut dyn RngCore, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        if chars.len() < MIN_PUNCTUATION_LEN {
            return value.to_string();
        }

        let k = rng.random_range(1..=chars.len() - 2);
        let v: f64 = rng.random();
        if v <= 0.5 {
            chars.remove(k);
        } else {
            chars.swap(k, k + 1);
        }
        chars.into_iter().collect()
    }
}
