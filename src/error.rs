//! Error types for dataset generation and export.

use dgen_generator::GeneratorError;
use dgen_perturbator::PerturbatorError;
use thiserror::Error;

/// Errors that can occur while building, generating or writing a dataset.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Configuration rejected before generation started.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Perturbator error: {0}")]
    Perturbator(#[from] PerturbatorError),

    /// A participant record lacks a field the tables need.
    #[error("Malformed participant record: {0}")]
    MalformedRecord(String),

    #[error("Table '{table}' has no column '{column}'")]
    UnknownColumn { table: String, column: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
