//! Error taxonomy
//!
//! Every failure is terminal for a run. Variants carry enough context to
//! produce a single actionable diagnostic line.

use std::io;
use std::path::PathBuf;

/// Coarse classification of a failure, one per diagnostic family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SourceUnreadable,
    NonNumericCriterion,
    StructuralMismatch,
    InvalidImpactToken,
    InvalidWeight,
    DegenerateCriterion,
    ResultUnwritable,
}

/// Errors raised while reading, validating or writing a decision table
#[derive(Debug, thiserror::Error)]
pub enum TopsisError {
    #[error("input file not found or unreadable: {}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not convert string to float: '{literal}' (line {line}, column {column})")]
    NonNumericCriterion {
        literal: String,
        line: usize,
        column: usize,
    },

    #[error("input file contains no alternatives")]
    EmptyTable,

    #[error("input file must contain at least {required} columns, found {found}")]
    TooFewColumns { found: usize, required: usize },

    #[error("line {line} has {found} columns, expected {expected}")]
    RaggedRow {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error(
        "number of weights ({weights}), impacts ({impacts}) and criteria columns ({criteria}) must be the same"
    )]
    CountMismatch {
        weights: usize,
        impacts: usize,
        criteria: usize,
    },

    #[error("invalid impact '{token}': impacts must be either '{benefit}' or '{cost}'")]
    InvalidImpactToken {
        token: String,
        benefit: String,
        cost: String,
    },

    #[error("invalid weight '{literal}': weights must be positive real numbers")]
    InvalidWeight { literal: String },

    #[error("criterion column '{label}' cannot be normalized (column norm is {norm})")]
    DegenerateCriterion {
        column: usize,
        label: String,
        norm: f64,
    },

    #[error("could not write result file {}: {source}", path.display())]
    ResultUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TopsisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TopsisError::SourceUnreadable { .. } => ErrorKind::SourceUnreadable,
            TopsisError::NonNumericCriterion { .. } => ErrorKind::NonNumericCriterion,
            TopsisError::EmptyTable
            | TopsisError::TooFewColumns { .. }
            | TopsisError::RaggedRow { .. }
            | TopsisError::CountMismatch { .. } => ErrorKind::StructuralMismatch,
            TopsisError::InvalidImpactToken { .. } => ErrorKind::InvalidImpactToken,
            TopsisError::InvalidWeight { .. } => ErrorKind::InvalidWeight,
            TopsisError::DegenerateCriterion { .. } => ErrorKind::DegenerateCriterion,
            TopsisError::ResultUnwritable { .. } => ErrorKind::ResultUnwritable,
        }
    }
}
