//! The perturbator contract.

use crate::probability::Probability;
use rand::RngCore;
use tracing::trace;

/// A configured component that probabilistically corrupts a string.
///
/// Implementors provide the corruption strategy in [`perturb`](Self::perturb);
/// [`apply`](Self::apply) wraps it in the trigger decision. Perturbators hold
/// only their configuration and keep no state between calls.
pub trait Perturbator: Send + Sync {
    /// Probability that [`apply`](Self::apply) corrupts its input.
    fn probability(&self) -> Probability;

    /// Unconditionally apply the corruption strategy.
    fn perturb(&self, rng: &mut dyn RngCore, value: &str) -> String;

    /// Corrupt `value` with this perturbator's probability, otherwise return
    /// it unchanged.
    fn apply(&self, rng: &mut dyn RngCore, value: &str) -> String {
        if !self.probability().trigger(rng) {
            return value.to_string();
        }
        let perturbed = self.perturb(rng, value);
        trace!(original = value, perturbed = %perturbed, "perturbation fired");
        perturbed
    }
}

impl<P: Perturbator + ?Sized> Perturbator for Box<P> {
    fn probability(&self) -> Probability {
        (**self).probability()
    }

    fn perturb(&self, rng: &mut dyn RngCore, value: &str) -> String {
        (**self).perturb(rng, value)
    }

    fn apply(&self, rng: &mut dyn RngCore, value: &str) -> String {
        (**self).apply(rng, value)
    }
}
