//! The generator contract shared by every atomic generator and combinator.

use crate::generators::concat::Concat;
use crate::generators::series::Series;
use crate::value::{Record, Value};
use rand::RngCore;

/// Error type for generator construction and invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// Option generator configured with no options
    #[error("Option set must not be empty")]
    EmptyOptions,

    /// Conditional generator configured with no branches
    #[error("Conditional generator mapping must not be empty")]
    EmptyMapping,

    /// Conditional generator invoked with a key it has no branch for
    #[error("Unmapped discriminant: '{0}'")]
    UnmappedDiscriminant(String),

    /// Conditional generator used inside a bundle without a keyed field
    #[error("Conditional generator has no discriminant field")]
    NoDiscriminantField,

    /// A field expected in the enclosing bundle is absent or not text
    #[error("Field '{0}' is missing or not text")]
    MissingField(String),

    /// Pattern could not be parsed
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Date range whose start lies after its end
    #[error("Inverted date range: start {start} is after end {end}")]
    InvertedDateRange { start: String, end: String },

    /// A date derived from the named field falls outside the calendar
    #[error("Date derived from '{0}' is out of range")]
    DateOutOfRange(String),

    /// Concatenation over a generator that did not produce text
    #[error("Cannot concatenate a {0} value")]
    NotConcatenable(&'static str),

    /// Two fields in one bundle share a name
    #[error("Duplicate field name in bundle: '{0}'")]
    DuplicateField(String),
}

/// A configured component that produces one value per call.
///
/// `scope` holds the fields already produced by the enclosing bundle during
/// the current invocation. It is empty for top-level calls.
pub trait Generator: Send + Sync {
    /// Generate a value using the given RNG.
    fn generate(&self, rng: &mut dyn RngCore, scope: &Record) -> Result<Value, GeneratorError>;
}

/// Type-erased generator, as stored by bundles and conditional branches.
pub type BoxedGenerator = Box<dyn Generator>;

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&self, rng: &mut dyn RngCore, scope: &Record) -> Result<Value, GeneratorError> {
        (**self).generate(rng, scope)
    }
}

/// Combinator methods available on every generator.
pub trait GeneratorExt: Generator + Sized + 'static {
    /// Tag this generator with a field name for use in a bundle.
    fn named(self, name: impl Into<String>) -> Field {
        Field::new(name, self)
    }

    /// Concatenate this generator's text output with another's.
    fn concat<G: Generator + 'static>(self, other: G) -> Concat {
        Concat::new(self, other)
    }

    /// Produce `count` independent values per call.
    fn repeat(self, count: usize) -> Series {
        Series::new(self, count)
    }

    /// Erase the concrete type, e.g. for conditional branches.
    fn boxed(self) -> BoxedGenerator {
        Box::new(self)
    }

    /// Generate a value outside of any bundle.
    fn generate_value(&self, rng: &mut dyn RngCore) -> Result<Value, GeneratorError> {
        self.generate(rng, &Record::new())
    }
}

impl<G: Generator + 'static> GeneratorExt for G {}

/// A generator tagged with the name of the record field it fills.
pub struct Field {
    name: String,
    generator: BoxedGenerator,
}

impl Field {
    pub fn new(name: impl Into<String>, generator: impl Generator + 'static) -> Self {
        Self {
            name: name.into(),
            generator: Box::new(generator),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generator(&self) -> &dyn Generator {
        self.generator.as_ref()
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish_non_exhaustive()
    }
}
