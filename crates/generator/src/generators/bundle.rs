//! Named, ordered bundles of field generators.

use crate::generator::{Field, Generator, GeneratorError};
use crate::value::{Record, Value};
use rand::RngCore;
use std::collections::HashSet;

/// Composes named generators into one record generator.
///
/// Fields are evaluated in declaration order on every call. Each field sees
/// the enclosing scope overlaid with the fields already produced in this
/// call, so a gender field declared first can steer a name field declared
/// after it. Nothing is cached between calls.
///
/// Record shapes are extended by composition: [`extend`](Self::extend)
/// merges another bundle, overriding fields that share a name and appending
/// the rest.
#[derive(Debug, Default)]
pub struct Bundle {
    fields: Vec<Field>,
}

impl Bundle {
    /// Create a bundle from fields in evaluation order.
    ///
    /// Fails with [`GeneratorError::DuplicateField`] if two fields share a name.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Result<Self, GeneratorError> {
        let fields: Vec<Field> = fields.into_iter().collect();
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(GeneratorError::DuplicateField(field.name().to_string()));
            }
        }
        Ok(Self { fields })
    }

    /// Append a field, failing if the name is already taken.
    pub fn with_field(mut self, field: Field) -> Result<Self, GeneratorError> {
        if self.contains(field.name()) {
            return Err(GeneratorError::DuplicateField(field.name().to_string()));
        }
        self.fields.push(field);
        Ok(self)
    }

    /// Merge `extension` into this bundle.
    ///
    /// A field whose name already exists replaces the original at the
    /// original's position; other fields are appended in their order.
    pub fn extend(mut self, extension: Bundle) -> Self {
        for field in extension.fields {
            match self.fields.iter().position(|f| f.name() == field.name()) {
                Some(index) => self.fields[index] = field,
                None => self.fields.push(field),
            }
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name() == name)
    }

    /// Field names in evaluation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::name)
    }

    /// Generate one record.
    pub fn generate_record(&self, rng: &mut dyn RngCore) -> Result<Record, GeneratorError> {
        self.generate_in(rng, &Record::new())
    }

    fn generate_in(&self, rng: &mut dyn RngCore, outer: &Record) -> Result<Record, GeneratorError> {
        let mut scope = outer.clone();
        let mut record = Record::new();
        for field in &self.fields {
            let value = field.generator().generate(rng, &scope)?;
            scope.insert(field.name(), value.clone());
            record.insert(field.name(), value);
        }
        Ok(record)
    }
}

impl Generator for Bundle {
    fn generate(&self, rng: &mut dyn RngCore, scope: &Record) -> Result<Value, GeneratorError> {
        Ok(Value::Record(self.generate_in(rng, scope)?))
    }
}
