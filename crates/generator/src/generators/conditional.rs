//! Conditional dispatch to one of several sub-generators.

use crate::generator::{BoxedGenerator, Generator, GeneratorError};
use crate::value::{Record, Value};
use rand::RngCore;
use std::collections::HashMap;

/// Selects a sub-generator by discriminant label and delegates to it.
///
/// The discriminant is supplied explicitly through
/// [`generate_for`](Self::generate_for). Inside a bundle, a generator built
/// with [`keyed_on`](Self::keyed_on) reads it from an earlier field instead,
/// which is how a gender field steers the choice of a name.
pub struct ConditionalGenerator {
    branches: HashMap<String, BoxedGenerator>,
    discriminant_field: Option<String>,
}

impl ConditionalGenerator {
    /// Create a conditional generator from `(label, generator)` pairs.
    ///
    /// Fails with [`GeneratorError::EmptyMapping`] when no branch is given.
    pub fn new<I, K>(branches: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = (K, BoxedGenerator)>,
        K: Into<String>,
    {
        let branches: HashMap<String, BoxedGenerator> = branches
            .into_iter()
            .map(|(label, generator)| (label.into(), generator))
            .collect();
        if branches.is_empty() {
            return Err(GeneratorError::EmptyMapping);
        }
        Ok(Self {
            branches,
            discriminant_field: None,
        })
    }

    /// Read the discriminant from the named field of the enclosing bundle.
    pub fn keyed_on(mut self, field: impl Into<String>) -> Self {
        self.discriminant_field = Some(field.into());
        self
    }

    /// Labels this generator has a branch for.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.branches.keys().map(String::as_str)
    }

    /// Generate a value from the branch matching `discriminant`.
    pub fn generate_for(
        &self,
        rng: &mut dyn RngCore,
        discriminant: &str,
    ) -> Result<Value, GeneratorError> {
        self.generate_scoped(rng, discriminant, &Record::new())
    }

    fn generate_scoped(
        &self,
        rng: &mut dyn RngCore,
        discriminant: &str,
        scope: &Record,
    ) -> Result<Value, GeneratorError> {
        let branch = self
            .branches
            .get(discriminant)
            .ok_or_else(|| GeneratorError::UnmappedDiscriminant(discriminant.to_string()))?;
        branch.generate(rng, scope)
    }
}

impl Generator for ConditionalGenerator {
    fn generate(&self, rng: &mut dyn RngCore, scope: &Record) -> Result<Value, GeneratorError> {
        let field = self
            .discriminant_field
            .as_deref()
            .ok_or(GeneratorError::NoDiscriminantField)?;
        let discriminant = scope
            .get_text(field)
            .ok_or_else(|| GeneratorError::MissingField(field.to_string()))?;
        self.generate_scoped(rng, discriminant, scope)
    }
}

impl std::fmt::Debug for ConditionalGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut labels: Vec<&str> = self.labels().collect();
        labels.sort_unstable();
        f.debug_struct("ConditionalGenerator")
            .field("labels", &labels)
            .field("discriminant_field", &self.discriminant_field)
            .finish()
    }
}
