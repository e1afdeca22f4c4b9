//! CLI argument definitions for population generation.

use super::PopulationConfig;
use chrono::{NaiveDate, NaiveDateTime, SubsecRound, Utc};
use clap::Args;
use dgen_generator::parse_timestamp;

/// Population arguments shared by every subcommand.
#[derive(Args, Clone, Debug)]
pub struct PopulationArgs {
    /// Number of persons in the population
    #[arg(long, default_value = "100", env = "DGEN_PERSONS")]
    pub persons: usize,

    /// How many of the persons are cases
    #[arg(long, default_value = "50", env = "DGEN_CASES")]
    pub cases: usize,

    /// Primary care events per participant
    #[arg(long, default_value = "10", env = "DGEN_PRIMARY_EVENTS")]
    pub primary_events: usize,

    /// Secondary care events per participant
    #[arg(long, default_value = "10", env = "DGEN_SECONDARY_EVENTS")]
    pub secondary_events: usize,

    /// Expected number of deceased controls
    #[arg(long, default_value = "20", env = "DGEN_DEAD_CONTROLS")]
    pub dead_controls: usize,

    /// Expected number of deceased cases
    #[arg(long, default_value = "30", env = "DGEN_DEAD_CASES")]
    pub dead_cases: usize,

    #[arg(long, default_value = "18", env = "DGEN_MIN_AGE")]
    pub min_age: u32,

    #[arg(long, default_value = "65", env = "DGEN_MAX_AGE")]
    pub max_age: u32,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "DGEN_SEED")]
    pub seed: Option<u64>,

    /// Date treated as "now" (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`, default: current UTC time)
    #[arg(long, env = "DGEN_REFERENCE_DATE", value_parser = parse_reference_date)]
    pub reference_date: Option<NaiveDateTime>,
}

impl From<PopulationArgs> for PopulationConfig {
    fn from(args: PopulationArgs) -> Self {
        Self {
            persons: args.persons,
            cases: args.cases,
            primary_events: args.primary_events,
            secondary_events: args.secondary_events,
            dead_controls: args.dead_controls,
            dead_cases: args.dead_cases,
            min_age: args.min_age,
            max_age: args.max_age,
            reference: args.reference_date.unwrap_or_else(current_timestamp),
            seed: args.seed,
        }
    }
}

/// Current UTC time truncated to whole seconds.
pub(crate) fn current_timestamp() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}

fn parse_reference_date(s: &str) -> Result<NaiveDateTime, String> {
    if let Some(timestamp) = parse_timestamp(s) {
        return Ok(timestamp);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid reference date '{s}', expected YYYY-MM-DD[ HH:MM:SS]"))
}
