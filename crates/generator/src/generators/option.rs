//! Uniform choice from a fixed option set.

use crate::generator::{Generator, GeneratorError};
use crate::value::{Record, Value};
use rand::{Rng, RngCore};

/// Returns one of a non-empty, ordered set of values, chosen uniformly.
#[derive(Debug, Clone)]
pub struct OptionGenerator {
    options: Vec<Value>,
}

impl OptionGenerator {
    /// Create an option generator.
    ///
    /// Fails with [`GeneratorError::EmptyOptions`] when `options` is empty.
    pub fn new<I, V>(options: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let options: Vec<Value> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(GeneratorError::EmptyOptions);
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[Value] {
        &self.options
    }

    /// Pick one option.
    pub fn choose(&self, rng: &mut dyn RngCore) -> &Value {
        // Non-empty by construction
        &self.options[rng.random_range(0..self.options.len())]
    }
}

impl Generator for OptionGenerator {
    fn generate(&self, rng: &mut dyn RngCore, _scope: &Record) -> Result<Value, GeneratorError> {
        Ok(self.choose(rng).clone())
    }
}
