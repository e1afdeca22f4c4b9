//! Appends one of a set of strings.

use super::{choose, non_empty_affixes};
use crate::error::PerturbatorError;
use crate::perturbator::Perturbator;
use crate::probability::Probability;
use rand::RngCore;

/// Appends a suffix chosen uniformly from a non-empty set.
#[derive(Debug, Clone)]
pub struct SuffixPerturbator {
    suffixes: Vec<String>,
    probability: Probability,
}

impl SuffixPerturbator {
    /// Fails with [`PerturbatorError::EmptyAffixes`] if `suffixes` is empty.
    pub fn new<I, S>(suffixes: I) -> Result<Self, PerturbatorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            suffixes: non_empty_affixes(suffixes, "Suffix")?,
            probability: Probability::default(),
        })
    }

    pub fn with_probability(mut self, probability: Probability) -> Self {
        self.probability = probability;
        self
    }
}

impl Perturbator for SuffixPerturbator {
    fn probability(&self) -> Probability {
        self.probability
    }

    fn perturb(&self, rng: &mut dyn RngCore, value: &str) -> String {
        format!("{value}{}", choose(&self.suffixes, rng))
    }
}
