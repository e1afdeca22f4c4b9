//! Unique identifier generator.

use crate::generator::{Generator, GeneratorError};
use crate::value::{Record, Value};
use rand::{Rng, RngCore};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Process-wide counter shared by every `UidGenerator`.
static NEXT_UID: AtomicU64 = AtomicU64::new(1);

/// Generates identifiers that never repeat within the process.
///
/// Each identifier is a UUID whose high 64 bits come from the RNG and whose
/// low 64 bits are taken from a process-wide atomic counter. Two identifiers
/// issued by the same process always differ in the counter half, so
/// collisions are impossible rather than merely unlikely, including across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct UidGenerator;

impl UidGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the next identifier.
    pub fn next_uid(&self, rng: &mut dyn RngCore) -> Uuid {
        let sequence = NEXT_UID.fetch_add(1, Ordering::Relaxed);
        Uuid::from_u64_pair(rng.random(), sequence)
    }
}

impl Generator for UidGenerator {
    fn generate(&self, rng: &mut dyn RngCore, _scope: &Record) -> Result<Value, GeneratorError> {
        Ok(Value::Text(self.next_uid(rng).to_string()))
    }
}
