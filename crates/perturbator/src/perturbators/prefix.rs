//! Prepends one of a set of strings, e.g. titles.

use super::{choose, non_empty_affixes};
use crate::error::PerturbatorError;
use crate::perturbator::Perturbator;
use crate::probability::Probability;
use rand::RngCore;

/// Prepends a prefix chosen uniformly from a non-empty set.
#[derive(Debug, Clone)]
pub struct PrefixPerturbator {
    prefixes: Vec<String>,
    probability: Probability,
}

impl PrefixPerturbator {
    /// Fails with [`PerturbatorError::EmptyAffixes`] if `prefixes` is empty.
    pub fn new<I, S>(prefixes: I) -> Result<Self, PerturbatorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            prefixes: non_empty_affixes(prefixes, "Prefix")?,
            probability: Probability::default(),
        })
    }

    pub fn with_probability(mut self, probability: Probability) -> Self {
        self.probability = probability;
        self
    }
}

impl Perturbator for PrefixPerturbator {
    fn probability(&self) -> Probability {
        self.probability
    }

    fn perturb(&self, rng: &mut dyn RngCore, value: &str) -> String {
        format!("{}{value}", choose(&self.prefixes, rng))
    }
}
