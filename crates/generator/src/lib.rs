//! Composable random value generators for synthetic clinical datasets.
//!
//! A handful of atomic generators (identifiers, option sets, patterns, date
//! ranges) are combined through conditional dispatch, concatenation,
//! repetition and named bundles into record generators of arbitrary shape.
//! Every generator draws from a caller supplied RNG, so a seeded RNG gives
//! reproducible output.
//!
//! # Architecture
//!
//! ```text
//!   UidGenerator  OptionGenerator  PatternGenerator  DateRangeGenerator
//!         │              │                │                  │
//!         └──────┬───────┴───────┬────────┴──────────┬───────┘
//!                ▼               ▼                   ▼
//!        ConditionalGenerator  Concat / Series     Field (named)
//!                                                    │
//!                                                    ▼
//!                                     Bundle ──► Value::Record
//! ```
//!
//! # Example
//!
//! ```rust
//! use dgen_generator::{Bundle, ConditionalGenerator, GeneratorExt, OptionGenerator};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let gender = OptionGenerator::new(["male", "female"]).unwrap();
//! let name = ConditionalGenerator::new([
//!     ("male", OptionGenerator::new(["John", "Robert"]).unwrap().boxed()),
//!     ("female", OptionGenerator::new(["Mary", "Susan"]).unwrap().boxed()),
//! ])
//! .unwrap()
//! .keyed_on("Gender");
//!
//! let person = Bundle::new([gender.named("Gender"), name.named("Name")]).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let record = person.generate_record(&mut rng).unwrap();
//! assert_eq!(record.names().collect::<Vec<_>>(), vec!["Gender", "Name"]);
//! ```

pub mod generator;
pub mod generators;
pub mod value;

// Re-exports for convenience
pub use generator::{BoxedGenerator, Field, Generator, GeneratorError, GeneratorExt};
pub use generators::bundle::Bundle;
pub use generators::concat::Concat;
pub use generators::conditional::ConditionalGenerator;
pub use generators::constant::ConstantGenerator;
pub use generators::date_range::{parse_timestamp, DateRangeGenerator, TIMESTAMP_FORMAT};
pub use generators::option::OptionGenerator;
pub use generators::pattern::PatternGenerator;
pub use generators::series::Series;
pub use generators::uid::UidGenerator;
pub use value::{Record, Value};
