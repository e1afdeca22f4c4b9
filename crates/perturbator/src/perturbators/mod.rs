//! Perturbation strategies.

pub mod chain;
pub mod missing;
pub mod prefix;
pub mod punctuation;
pub mod substitution;
pub mod suffix;

use crate::error::PerturbatorError;
use rand::{Rng, RngCore};

/// Validate a prefix/suffix set.
fn non_empty_affixes<I, S>(affixes: I, kind: &'static str) -> Result<Vec<String>, PerturbatorError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let affixes: Vec<String> = affixes.into_iter().map(Into::into).collect();
    if affixes.is_empty() {
        return Err(PerturbatorError::EmptyAffixes(kind));
    }
    Ok(affixes)
}

/// Uniform choice from a set validated by [`non_empty_affixes`].
fn choose<'a>(affixes: &'a [String], rng: &mut dyn RngCore) -> &'a str {
    &affixes[rng.random_range(0..affixes.len())]
}
