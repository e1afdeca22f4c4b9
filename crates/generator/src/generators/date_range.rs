//! Timestamp generator over a closed date range.

use crate::generator::{Generator, GeneratorError};
use crate::value::{Record, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rand::{Rng, RngCore};

/// Rendering of generated timestamps: seconds resolution, no sub-second part.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Produces a uniformly random instant within `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeGenerator {
    start: i64,
    end: i64,
}

impl DateRangeGenerator {
    /// Create a generator over the closed interval `[start, end]`.
    ///
    /// Sub-second components are dropped from both bounds. Fails with
    /// [`GeneratorError::InvertedDateRange`] if `start > end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, GeneratorError> {
        let start_ts = start.and_utc().timestamp();
        let end_ts = end.and_utc().timestamp();

        if start_ts > end_ts {
            return Err(GeneratorError::InvertedDateRange {
                start: start.format(TIMESTAMP_FORMAT).to_string(),
                end: end.format(TIMESTAMP_FORMAT).to_string(),
            });
        }

        Ok(Self {
            start: start_ts,
            end: end_ts,
        })
    }

    /// Create a generator from midnight of `start` to the last second of `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, GeneratorError> {
        let start = start.and_hms_opt(0, 0, 0).unwrap_or_default();
        let end = end.and_hms_opt(23, 59, 59).unwrap_or_default();
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDateTime {
        from_timestamp(self.start)
    }

    pub fn end(&self) -> NaiveDateTime {
        from_timestamp(self.end)
    }

    /// Generate a random instant in the range.
    pub fn generate_datetime(&self, rng: &mut dyn RngCore) -> NaiveDateTime {
        from_timestamp(rng.random_range(self.start..=self.end))
    }
}

impl Generator for DateRangeGenerator {
    fn generate(&self, rng: &mut dyn RngCore, _scope: &Record) -> Result<Value, GeneratorError> {
        let dt = self.generate_datetime(rng);
        Ok(Value::Text(dt.format(TIMESTAMP_FORMAT).to_string()))
    }
}

/// Parse a timestamp rendered with [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

fn from_timestamp(ts: i64) -> NaiveDateTime {
    // Bounds came from valid NaiveDateTimes, so every value in between is valid
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}
