//! dgen library
//!
//! Synthetic case-control clinical datasets for exercising record-linkage
//! and data-cleaning pipelines.
//!
//! # Features
//!
//! - Epidemiological schema: persons, case and control participants with
//!   death certificates and primary/secondary care histories
//! - Denormalisation into GP demographics, GP clinical, hospital and death
//!   register tables
//! - Realistic data-entry errors injected into the death register
//! - Reproducible output from a seed
//!
//! The generator and perturbator models live in their own crates:
//!
//! - `dgen_generator` - composable random value generators
//! - `dgen_perturbator` - probabilistic string corruption
//!
//! # CLI Usage
//!
//! ```bash
//! # Write GP_DEM.csv, GP_CLIN.csv, HOSPDAT.csv and DEATHREG.csv
//! dgen generate --output-dir out --seed 42
//!
//! # Print three participants as JSON
//! dgen preview --count 3 --reference-date 2017-04-01
//! ```

pub mod epi;
pub mod error;
pub mod linkage;

pub use error::PipelineError;
pub use linkage::{generate_population, run, PopulationArgs, PopulationConfig, RunSummary};

pub use dgen_generator as generator;
pub use dgen_perturbator as perturbator;
