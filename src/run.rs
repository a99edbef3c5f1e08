//! Ranking pipeline
//!
//! Read, validate, evaluate, render, write. Any error aborts the run before
//! the result file is touched.

use std::path::PathBuf;

use crate::config::{Config, Settings};
use crate::error::TopsisError;
use crate::table::{parse_table, read_source, render, write_atomic};
use crate::topsis::{Evaluation, evaluate};
use crate::validation::{ValidatedInput, validate};

/// Validated input together with its scores and ranks
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub input: ValidatedInput,
    pub evaluation: Evaluation,
}

impl Ranking {
    /// Identifier of the alternative ranked first
    pub fn best(&self) -> Option<&str> {
        let idx = self.evaluation.best()?;
        self.input.alternatives.get(idx).map(|a| a.id.as_str())
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub alternatives: usize,
    pub criteria: usize,
    pub result_file: PathBuf,
    pub best: Option<String>,
}

/// Validate and score table text without touching the filesystem
pub fn rank_text(
    text: &str,
    weights: &str,
    impacts: &str,
    settings: &Settings,
) -> Result<Ranking, TopsisError> {
    let raw = parse_table(text, settings.delimiter);
    log::debug!(
        "parsed {} rows (header: {})",
        raw.rows.len(),
        raw.header.is_some()
    );

    let input = validate(raw, weights, impacts, settings)?;
    let evaluation = evaluate(
        &input.table,
        &input.weights,
        &input.impacts,
        settings.rank_order,
    );
    Ok(Ranking { input, evaluation })
}

/// Rank the configured input file and write the result file
pub fn run(config: &Config) -> Result<RunSummary, TopsisError> {
    let text = read_source(&config.input_file)?;
    log::debug!("read {} bytes from {}", text.len(), config.input_file.display());

    let ranking = rank_text(&text, &config.weights, &config.impacts, &config.settings)?;
    let output = render(&ranking.input, &ranking.evaluation, &config.settings);
    write_atomic(&config.result_file, &output)?;

    let summary = RunSummary {
        alternatives: ranking.input.table.alternatives(),
        criteria: ranking.input.table.criteria(),
        result_file: config.result_file.clone(),
        best: ranking.best().map(str::to_string),
    };
    log::info!(
        "ranked {} alternatives over {} criteria into {}",
        summary.alternatives,
        summary.criteria,
        summary.result_file.display()
    );
    Ok(summary)
}
