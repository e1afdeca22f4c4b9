//! Data-linking exercise: a mixed case/control population split into the
//! tables a record-linkage study would receive.
//!
//! ```text
//! PopulationConfig ─► generate_population ─► denormalise ─► perturb_death_register ─► write_tables
//!                      (controls + cases,     (GP_DEM, GP_CLIN,   (DEATHREG only)          (one CSV
//!                       shuffled)              HOSPDAT, DEATHREG)                            per table)
//! ```

pub mod args;
mod export;
mod perturb;
mod tables;

pub use args::PopulationArgs;
pub use export::{write_table, write_tables};
pub use perturb::{death_register_plan, perturb_death_register, PerturbationPlan};
pub use tables::{denormalise, Table, Tables};

use crate::epi::{participant_template, ParticipantConfig, ParticipantKind, PersonConfig};
use crate::error::PipelineError;
use chrono::NaiveDateTime;
use dgen_generator::Record;
use dgen_perturbator::Probability;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Youngest admissible participant age. Secondary care histories start six
/// and a half years after birth and must end before the earliest possible
/// death date.
pub const MIN_PARTICIPANT_AGE: u32 = 10;

/// Size and shape of a generated population.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationConfig {
    pub persons: usize,
    pub cases: usize,
    pub primary_events: usize,
    pub secondary_events: usize,
    pub dead_controls: usize,
    pub dead_cases: usize,
    pub min_age: u32,
    pub max_age: u32,
    /// The instant treated as "now"
    pub reference: NaiveDateTime,
    /// Seed for reproducible output; entropy seeded when absent
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            persons: 100,
            cases: 50,
            primary_events: 10,
            secondary_events: 10,
            dead_controls: 20,
            dead_cases: 30,
            min_age: 18,
            max_age: 65,
            reference: args::current_timestamp(),
            seed: None,
        }
    }
}

impl PopulationConfig {
    pub fn controls(&self) -> usize {
        self.persons.saturating_sub(self.cases)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.cases > self.persons {
            return Err(invalid(format!(
                "cases ({}) exceeds persons ({})",
                self.cases, self.persons
            )));
        }
        if self.dead_controls > self.controls() {
            return Err(invalid(format!(
                "dead controls ({}) exceeds controls ({})",
                self.dead_controls,
                self.controls()
            )));
        }
        if self.dead_cases > self.cases {
            return Err(invalid(format!(
                "dead cases ({}) exceeds cases ({})",
                self.dead_cases, self.cases
            )));
        }
        if self.min_age > self.max_age {
            return Err(invalid(format!(
                "minimum age ({}) exceeds maximum age ({})",
                self.min_age, self.max_age
            )));
        }
        if self.min_age < MIN_PARTICIPANT_AGE {
            return Err(invalid(format!(
                "minimum age ({}) is below {MIN_PARTICIPANT_AGE}",
                self.min_age
            )));
        }
        Ok(())
    }

    /// RNG for a run: seeded when configured, entropy seeded otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn participant(&self, kind: ParticipantKind) -> Result<ParticipantConfig, PipelineError> {
        let (dead, total) = match kind {
            ParticipantKind::Control => (self.dead_controls, self.controls()),
            ParticipantKind::Case => (self.dead_cases, self.cases),
        };
        let death_probability = if total == 0 {
            Probability::NEVER
        } else {
            Probability::new(dead as f64 / total as f64)?
        };
        Ok(ParticipantConfig {
            person: PersonConfig {
                min_age: self.min_age,
                max_age: self.max_age,
                reference: self.reference,
            },
            kind,
            death_probability,
            primary_events: self.primary_events,
            secondary_events: self.secondary_events,
        })
    }
}

fn invalid(message: String) -> PipelineError {
    PipelineError::InvalidConfig(message)
}

/// Generate `controls()` control and `cases` case participants, shuffled
/// together so that kind cannot be inferred from position.
///
/// Deaths are drawn per participant with probability dead/total of the
/// participant's kind, so death counts match the configuration on average.
pub fn generate_population(
    config: &PopulationConfig,
    rng: &mut dyn RngCore,
) -> Result<Vec<Record>, PipelineError> {
    config.validate()?;

    let control = participant_template(&config.participant(ParticipantKind::Control)?)?;
    let case = participant_template(&config.participant(ParticipantKind::Case)?)?;

    let mut population = Vec::with_capacity(config.persons);
    for _ in 0..config.controls() {
        population.push(control.generate_record(rng)?);
    }
    for _ in 0..config.cases {
        population.push(case.generate_record(rng)?);
    }
    population.shuffle(rng);

    debug!(
        controls = config.controls(),
        cases = config.cases,
        "generated population"
    );
    Ok(population)
}

/// Outcome of a [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Row count per table, in output order
    pub rows: Vec<(String, usize)>,
    /// Cells altered by perturbation
    pub perturbed_cells: usize,
    pub files: Vec<PathBuf>,
}

/// Generate, denormalise, perturb and write a full data-linking dataset.
pub fn run(config: &PopulationConfig, output_dir: &Path) -> Result<RunSummary, PipelineError> {
    config.validate()?;
    let mut rng = config.rng();

    info!(
        "Generating {} persons ({} cases) with reference date {}",
        config.persons, config.cases, config.reference
    );
    let population = generate_population(config, &mut rng)?;

    info!("Denormalising {} participants", population.len());
    let mut tables = denormalise(&population)?;
    for table in tables.iter() {
        debug!(table = table.name(), rows = table.len(), "denormalised table");
    }

    info!("Perturbing death register");
    let perturbed_cells = perturb_death_register(&mut tables, &mut rng)?;

    let files = write_tables(&tables, output_dir)?;

    Ok(RunSummary {
        rows: tables
            .iter()
            .map(|t| (t.name().to_string(), t.len()))
            .collect(),
        perturbed_cells,
        files,
    })
}
