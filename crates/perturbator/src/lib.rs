//! Probabilistic data-entry error injection.
//!
//! A perturbator takes a string and, with its trigger probability `p`,
//! returns a corrupted variant; otherwise the input passes through
//! unchanged. Each call is an independent Bernoulli trial drawn from the
//! caller's RNG.
//!
//! # Perturbators
//!
//! - `punctuation` - erase one interior character or swap two adjacent ones
//! - `substitution` - ordered, chained find/replace rules
//! - `prefix` / `suffix` - prepend or append one of a fixed set of strings
//! - `missing` - replace the whole value with a sentinel
//! - `chain` - apply several perturbators in turn
//!
//! # Example
//!
//! ```rust
//! use dgen_perturbator::{MissingDataPerturbator, Perturbator, Probability};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let missing = MissingDataPerturbator::new("N/A").with_probability(Probability::ALWAYS);
//! let mut rng = StdRng::seed_from_u64(42);
//! assert_eq!(missing.apply(&mut rng, "Female"), "N/A");
//! ```

mod error;
pub mod perturbator;
pub mod perturbators;
mod probability;

pub use error::PerturbatorError;
pub use perturbator::Perturbator;
pub use perturbators::chain::PerturbatorChain;
pub use perturbators::missing::MissingDataPerturbator;
pub use perturbators::prefix::PrefixPerturbator;
pub use perturbators::punctuation::{PunctuationPerturbator, MIN_PUNCTUATION_LEN};
pub use perturbators::substitution::SubstitutionPerturbator;
pub use perturbators::suffix::SuffixPerturbator;
pub use probability::Probability;
