//! Sequential composition of perturbators.

use crate::perturbator::Perturbator;
use crate::probability::Probability;
use rand::RngCore;

/// Applies several perturbators in order.
///
/// Each member makes its own trigger decision on the output of the one
/// before it. The chain itself always fires.
#[derive(Default)]
pub struct PerturbatorChain {
    members: Vec<Box<dyn Perturbator>>,
}

impl PerturbatorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a perturbator to the end of the chain.
    pub fn then(mut self, perturbator: impl Perturbator + 'static) -> Self {
        self.members.push(Box::new(perturbator));
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Perturbator for PerturbatorChain {
    fn probability(&self) -> Probability {
        Probability::ALWAYS
    }

    fn perturb(&self, rng: &mut dyn RngCore, value: &str) -> String {
        self.members
            .iter()
            .fold(value.to_string(), |current, member| member.apply(rng, &current))
    }
}

impl std::fmt::Debug for PerturbatorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerturbatorChain")
            .field("len", &self.members.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perturbators::missing::MissingDataPerturbator;
    use crate::perturbators::prefix::PrefixPerturbator;
    use crate::perturbators::substitution::SubstitutionPerturbator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_applies_in_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let chain = PerturbatorChain::new()
            .then(
                SubstitutionPerturbator::new([("Robert", "Bob")])
                    .unwrap()
                    .with_probability(Probability::ALWAYS),
            )
            .then(
                PrefixPerturbator::new(["Dr "])
                    .unwrap()
                    .with_probability(Probability::ALWAYS),
            );

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.apply(&mut rng, "Robert"), "Dr Bob");
    }

    #[test]
    fn test_members_keep_their_own_probability() {
        let mut rng = StdRng::seed_from_u64(42);
        let chain = PerturbatorChain::new()
            .then(MissingDataPerturbator::new("N/A").with_probability(Probability::NEVER));

        assert_eq!(chain.apply(&mut rng, "Male"), "Male");
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let chain = PerturbatorChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.apply(&mut rng, "x"), "x");
    }
}
