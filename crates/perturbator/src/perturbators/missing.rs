//! Missing-value injection.

use crate::perturbator::Perturbator;
use crate::probability::Probability;
use rand::RngCore;

/// Replaces the whole value with a sentinel such as `"N/A"` or `"-"`.
///
/// The default sentinel is the empty string.
#[derive(Debug, Clone, Default)]
pub struct MissingDataPerturbator {
    sentinel: String,
    probability: Probability,
}

impl MissingDataPerturbator {
    pub fn new(sentinel: impl Into<String>) -> Self {
        Self {
            sentinel: sentinel.into(),
            probability: Probability::default(),
        }
    }

    pub fn with_probability(mut self, probability: Probability) -> Self {
        self.probability = probability;
        self
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }
}

impl Perturbator for MissingDataPerturbator {
    fn probability(&self) -> Probability {
        self.probability
    }

    fn perturb(&self, _rng: &mut dyn RngCore, _value: &str) -> String {
        self.sentinel.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_sentinel_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let perturbator = MissingDataPerturbator::default().with_probability(Probability::ALWAYS);
        assert_eq!(perturbator.sentinel(), "");
        assert_eq!(perturbator.apply(&mut rng, "Natural causes"), "");
    }

    #[test]
    fn test_always_yields_sentinel() {
        let mut rng = StdRng::seed_from_u64(42);
        let perturbator = MissingDataPerturbator::new("N/A").with_probability(Probability::ALWAYS);
        for input in ["Male", "Female", ""] {
            assert_eq!(perturbator.apply(&mut rng, input), "N/A");
        }
    }

    #[test]
    fn test_never_passes_through() {
        let mut rng = StdRng::seed_from_u64(42);
        let perturbator = MissingDataPerturbator::new("N/A").with_probability(Probability::NEVER);
        assert_eq!(perturbator.apply(&mut rng, "Male"), "Male");
    }
}
