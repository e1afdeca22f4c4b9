//! Concatenation of two text generators.

use crate::generator::{BoxedGenerator, Generator, GeneratorError};
use crate::value::{Record, Value};
use rand::RngCore;

/// Produces the concatenation of two generators' text outputs.
///
/// No separator is inserted unless one is configured with
/// [`with_separator`](Self::with_separator); a house number pattern ending in
/// a space followed by a street name needs none.
pub struct Concat {
    left: BoxedGenerator,
    right: BoxedGenerator,
    separator: String,
}

impl Concat {
    pub fn new(left: impl Generator + 'static, right: impl Generator + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
            separator: String::new(),
        }
    }

    /// Insert `separator` between the two outputs.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl Generator for Concat {
    fn generate(&self, rng: &mut dyn RngCore, scope: &Record) -> Result<Value, GeneratorError> {
        let left = into_text(self.left.generate(rng, scope)?)?;
        let right = into_text(self.right.generate(rng, scope)?)?;
        Ok(Value::Text(format!("{left}{}{right}", self.separator)))
    }
}

fn into_text(value: Value) -> Result<String, GeneratorError> {
    match value {
        Value::Text(s) => Ok(s),
        other => Err(GeneratorError::NotConcatenable(other.kind())),
    }
}

impl std::fmt::Debug for Concat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Concat")
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorExt;
    use crate::generators::constant::ConstantGenerator;
    use crate::generators::option::OptionGenerator;
    use crate::generators::pattern::PatternGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_address_concatenation() {
        let mut rng = StdRng::seed_from_u64(42);
        let streets = ["Acacia Avenue", "Mill Road", "High Street"];
        let address = PatternGenerator::new("[1-9][0-9]? ")
            .unwrap()
            .concat(OptionGenerator::new(streets).unwrap());

        for _ in 0..50 {
            let value = address.generate_value(&mut rng).unwrap();
            let text = value.as_text().unwrap();
            let (number, street) = text.split_once(' ').unwrap();
            assert!(number.parse::<u32>().is_ok());
            assert!(streets.contains(&street));
        }
    }

    #[test]
    fn test_no_separator_by_default() {
        let mut rng = StdRng::seed_from_u64(42);
        let joined = ConstantGenerator::new("ab").concat(ConstantGenerator::new("cd"));
        assert_eq!(joined.generate_value(&mut rng).unwrap(), Value::text("abcd"));
    }

    #[test]
    fn test_separator() {
        let mut rng = StdRng::seed_from_u64(42);
        let joined = ConstantGenerator::new("ab")
            .concat(ConstantGenerator::new("cd"))
            .with_separator("-");
        assert_eq!(joined.generate_value(&mut rng).unwrap(), Value::text("ab-cd"));
    }

    #[test]
    fn test_non_text_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let joined = ConstantGenerator::new("ab").concat(ConstantGenerator::null());
        assert_eq!(
            joined.generate_value(&mut rng).unwrap_err(),
            GeneratorError::NotConcatenable("null")
        );
    }
}
