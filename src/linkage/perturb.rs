//! Column-wise perturbation of denormalised tables.

use super::tables::{Table, Tables};
use crate::error::PipelineError;
use dgen_perturbator::{
    MissingDataPerturbator, Perturbator, Probability, PunctuationPerturbator,
    SubstitutionPerturbator,
};
use rand::RngCore;
use tracing::debug;

/// Address abbreviations introduced in the death register.
pub const ADDRESS_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Street", "St."),
    ("Avenue", "Avn"),
    ("Drive", "Drv"),
    ("Road", "Rd"),
];

/// An ordered list of (column, perturbator) steps applied to every row of a
/// table.
///
/// Steps run row by row in declaration order, each one an independent
/// trial.
#[derive(Default)]
pub struct PerturbationPlan {
    steps: Vec<(String, Box<dyn Perturbator>)>,
}

impl PerturbationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, perturbator: impl Perturbator + 'static) -> Self {
        self.steps.push((column.into(), Box::new(perturbator)));
        self
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|(column, _)| column.as_str())
    }

    /// Perturb `table` in place, returning the number of cells that changed.
    ///
    /// Every column is resolved before any cell is touched, so an unknown
    /// column leaves the table unmodified.
    pub fn apply(&self, table: &mut Table, rng: &mut dyn RngCore) -> Result<usize, PipelineError> {
        let indices = self
            .steps
            .iter()
            .map(|(column, _)| table.column_index(column))
            .collect::<Result<Vec<_>, _>>()?;

        let mut changed = 0;
        for row in table.rows_mut() {
            for (&index, (_, perturbator)) in indices.iter().zip(&self.steps) {
                let perturbed = perturbator.apply(rng, &row[index]);
                if perturbed != row[index] {
                    row[index] = perturbed;
                    changed += 1;
                }
            }
        }
        Ok(changed)
    }
}

/// Perturbations applied to the death register: causes go missing, PATIDs
/// get typos and street types get abbreviated.
pub fn death_register_plan() -> Result<PerturbationPlan, PipelineError> {
    Ok(PerturbationPlan::new()
        .with(
            "CAUSE",
            MissingDataPerturbator::default().with_probability(Probability::new(0.1)?),
        )
        .with(
            "PATID",
            PunctuationPerturbator::new().with_probability(Probability::new(0.8)?),
        )
        .with(
            "ADDRESS",
            SubstitutionPerturbator::new(ADDRESS_ABBREVIATIONS.iter().copied())?
                .with_probability(Probability::new(0.6)?),
        ))
}

/// Apply [`death_register_plan`] to the DEATHREG table. Other tables are
/// left untouched.
pub fn perturb_death_register(
    tables: &mut Tables,
    rng: &mut dyn RngCore,
) -> Result<usize, PipelineError> {
    let changed = death_register_plan()?.apply(&mut tables.deathreg, rng)?;
    debug!(table = tables.deathreg.name(), changed, "perturbed table");
    Ok(changed)
}
