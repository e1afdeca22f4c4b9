//! Repetition of a generator into an ordered sequence.

use crate::generator::{BoxedGenerator, Generator, GeneratorError};
use crate::value::{Record, Value};
use rand::RngCore;

/// Produces `count` independently generated values per call.
///
/// Used for event histories. The count is always supplied by the caller.
pub struct Series {
    generator: BoxedGenerator,
    count: usize,
}

impl Series {
    pub fn new(generator: impl Generator + 'static, count: usize) -> Self {
        Self {
            generator: Box::new(generator),
            count,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Generator for Series {
    fn generate(&self, rng: &mut dyn RngCore, scope: &Record) -> Result<Value, GeneratorError> {
        let items = (0..self.count)
            .map(|_| self.generator.generate(rng, scope))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::List(items))
    }
}

impl std::fmt::Debug for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Series")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorExt;
    use crate::generators::bundle::Bundle;
    use crate::generators::option::OptionGenerator;
    use crate::generators::uid::UidGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_series_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let series = OptionGenerator::new(["a", "b"]).unwrap().repeat(10);

        let value = series.generate_value(&mut rng).unwrap();
        assert_eq!(value.as_list().unwrap().len(), 10);
    }

    #[test]
    fn test_empty_series() {
        let mut rng = StdRng::seed_from_u64(42);
        let series = Series::new(UidGenerator::new(), 0);
        assert_eq!(series.generate_value(&mut rng).unwrap(), Value::List(vec![]));
    }

    #[test]
    fn test_series_of_records_are_independent() {
        let mut rng = StdRng::seed_from_u64(42);
        let event = Bundle::new([UidGenerator::new().named("EVENT_ID")]).unwrap();
        let series = event.repeat(5);

        let value = series.generate_value(&mut rng).unwrap();
        let ids: std::collections::HashSet<&str> = value
            .as_list()
            .unwrap()
            .iter()
            .map(|v| v.as_record().unwrap().get_text("EVENT_ID").unwrap())
            .collect();
        assert_eq!(ids.len(), 5);
    }
}
