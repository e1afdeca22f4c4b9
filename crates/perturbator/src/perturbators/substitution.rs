//! Ordered find/replace rules, e.g. abbreviations and nicknames.

use crate::error::PerturbatorError;
use crate::perturbator::Perturbator;
use crate::probability::Probability;
use rand::RngCore;

/// Applies every `(find, replace)` rule in order to the evolving string.
///
/// Each rule replaces all occurrences of its literal search string. Rules see
/// the output of the rules before them, so `[("a", "b"), ("b", "c")]` turns
/// `"a"` into `"c"`.
#[derive(Debug, Clone)]
pub struct SubstitutionPerturbator {
    rules: Vec<(String, String)>,
    probability: Probability,
}

impl SubstitutionPerturbator {
    /// Create a substitution perturbator.
    ///
    /// Fails with [`PerturbatorError::EmptyPattern`] if a rule's search
    /// string is empty.
    pub fn new<I, F, R>(rules: I) -> Result<Self, PerturbatorError>
    where
        I: IntoIterator<Item = (F, R)>,
        F: Into<String>,
        R: Into<String>,
    {
        let rules: Vec<(String, String)> = rules
            .into_iter()
            .map(|(find, replace)| (find.into(), replace.into()))
            .collect();
        if let Some(index) = rules.iter().position(|(find, _)| find.is_empty()) {
            return Err(PerturbatorError::EmptyPattern { index });
        }
        Ok(Self {
            rules,
            probability: Probability::default(),
        })
    }

    pub fn with_probability(mut self, probability: Probability) -> Self {
        self.probability = probability;
        self
    }

    pub fn rules(&self) -> &[(String, String)] {
        &self.rules
    }
}

impl Perturbator for SubstitutionPerturbator {
    fn probability(&self) -> Probability {
        self.probability
    }

    fn perturb(&self, _rng: &mut dyn RngCore, value: &str) -> String {
        self.rules
            .iter()
            .fold(value.to_string(), |current, (find, replace)| {
                current.replace(find.as_str(), replace)
            })
    }
}
