//! Trigger probability shared by all perturbators.

use crate::error::PerturbatorError;
use rand::{Rng, RngCore};
use std::fmt;

/// A probability in the closed interval `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// Never fires.
    pub const NEVER: Self = Self(0.0);
    /// Fires on every call.
    pub const ALWAYS: Self = Self(1.0);
    /// Default for every perturbator.
    pub const DEFAULT: Self = Self(0.5);

    /// Validate `p`. Fails with [`PerturbatorError::InvalidProbability`] when
    /// `p` lies outside `[0, 1]` or is NaN.
    pub fn new(p: f64) -> Result<Self, PerturbatorError> {
        if (0.0..=1.0).contains(&p) {
            Ok(Self(p))
        } else {
            Err(PerturbatorError::InvalidProbability(p))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Run one Bernoulli trial.
    ///
    /// Draws `r` uniformly from `[0, 1)` and fires unless `r` exceeds `p`.
    /// A probability of zero never fires.
    pub fn trigger(self, rng: &mut dyn RngCore) -> bool {
        if self.0 <= 0.0 {
            return false;
        }
        let draw: f64 = rng.random();
        draw <= self.0
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Probability {
    type Error = PerturbatorError;

    fn try_from(p: f64) -> Result<Self, Self::Error> {
        Self::new(p)
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
