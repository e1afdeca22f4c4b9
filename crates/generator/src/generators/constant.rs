//! Constant value generator.

use crate::generator::{Generator, GeneratorError};
use crate::value::{Record, Value};
use rand::RngCore;

/// Always yields the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantGenerator {
    value: Value,
}

impl ConstantGenerator {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// A generator that always yields [`Value::Null`].
    pub fn null() -> Self {
        Self { value: Value::Null }
    }
}

impl Generator for ConstantGenerator {
    fn generate(&self, _rng: &mut dyn RngCore, _scope: &Record) -> Result<Value, GeneratorError> {
        Ok(self.value.clone())
    }
}
