//! Validation Engine
//!
//! Checks run in a fixed order and stop at the first violation:
//! numeric coercion, table width, argument alignment, impact domain,
//! weight domain, degenerate columns. Reading the source and header
//! detection happen before, in [`crate::table::reader`].

use crate::config::Settings;
use crate::error::TopsisError;
use crate::table::{RawRow, RawTable};
use crate::topsis::{Impact, ScoreTable, column_norms};

/// Identifier column plus at least five criteria
pub const MIN_COLUMNS: usize = 6;

/// One input row as it will be echoed to the result
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub line: usize,
    pub id: String,
    /// Criterion literals exactly as read (trimmed)
    pub fields: Vec<String>,
}

/// Everything the engine and the writer need, guaranteed consistent
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub header: Option<Vec<String>>,
    pub alternatives: Vec<Alternative>,
    pub table: ScoreTable,
    pub weights: Vec<f64>,
    pub impacts: Vec<Impact>,
}

impl ValidatedInput {
    /// Display name of a criterion column (0-based criterion index)
    pub fn criterion_label(&self, j: usize) -> String {
        criterion_label(self.header.as_deref(), j)
    }
}

/// Split a weights or impacts argument into trimmed tokens
pub fn split_list(list: &str, separator: char) -> Vec<&str> {
    list.split(separator).map(str::trim).collect()
}

/// Validate a parsed table against the weight and impact arguments
pub fn validate(
    raw: RawTable,
    weights: &str,
    impacts: &str,
    settings: &Settings,
) -> Result<ValidatedInput, TopsisError> {
    let RawTable { header, rows } = raw;

    let values = coerce_rows(&rows)?;
    let columns = check_width(header.as_ref(), &rows)?;
    let header = header.map(|row| row.fields);
    let criteria = columns - 1;

    let weight_tokens = split_list(weights, settings.list_separator);
    let impact_tokens = split_list(impacts, settings.list_separator);
    if weight_tokens.len() != criteria || impact_tokens.len() != criteria {
        return Err(TopsisError::CountMismatch {
            weights: weight_tokens.len(),
            impacts: impact_tokens.len(),
            criteria,
        });
    }

    let impacts = parse_impacts(&impact_tokens, settings)?;
    let weights = parse_weights(&weight_tokens)?;

    let table = ScoreTable::new(values).ok_or(TopsisError::EmptyTable)?;
    let norms = column_norms(table.rows());
    if let Some((j, &norm)) = norms
        .iter()
        .enumerate()
        .find(|(_, norm)| **norm == 0.0 || !norm.is_finite())
    {
        return Err(TopsisError::DegenerateCriterion {
            column: j + 1,
            label: criterion_label(header.as_deref(), j),
            norm,
        });
    }

    let alternatives = rows
        .into_iter()
        .map(|row| {
            let mut fields = row.fields.into_iter();
            let id = fields.next().unwrap_or_default();
            Alternative {
                line: row.line,
                id,
                fields: fields.collect(),
            }
        })
        .collect();

    Ok(ValidatedInput {
        header,
        alternatives,
        table,
        weights,
        impacts,
    })
}

fn coerce_rows(rows: &[RawRow]) -> Result<Vec<Vec<f64>>, TopsisError> {
    rows.iter()
        .map(|row| {
            row.fields
                .iter()
                .enumerate()
                .skip(1)
                .map(|(column, literal)| {
                    literal
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| TopsisError::NonNumericCriterion {
                            literal: literal.clone(),
                            line: row.line,
                            column: column + 1,
                        })
                })
                .collect()
        })
        .collect()
}

/// Column count shared by every row, header included
fn check_width(header: Option<&RawRow>, rows: &[RawRow]) -> Result<usize, TopsisError> {
    let first = rows.first().ok_or(TopsisError::EmptyTable)?;
    let expected = first.fields.len();
    if expected < MIN_COLUMNS {
        return Err(TopsisError::TooFewColumns {
            found: expected,
            required: MIN_COLUMNS,
        });
    }

    if let Some(row) = header
        .into_iter()
        .chain(rows)
        .find(|row| row.fields.len() != expected)
    {
        return Err(TopsisError::RaggedRow {
            line: row.line,
            found: row.fields.len(),
            expected,
        });
    }
    Ok(expected)
}

fn parse_impacts(tokens: &[&str], settings: &Settings) -> Result<Vec<Impact>, TopsisError> {
    tokens
        .iter()
        .map(|token| {
            Impact::from_token(token, &settings.benefit_token, &settings.cost_token).ok_or_else(
                || TopsisError::InvalidImpactToken {
                    token: token.to_string(),
                    benefit: settings.benefit_token.clone(),
                    cost: settings.cost_token.clone(),
                },
            )
        })
        .collect()
}

fn parse_weights(tokens: &[&str]) -> Result<Vec<f64>, TopsisError> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w > 0.0)
                .ok_or_else(|| TopsisError::InvalidWeight {
                    literal: token.to_string(),
                })
        })
        .collect()
}

fn criterion_label(header: Option<&[String]>, j: usize) -> String {
    header
        .and_then(|h| h.get(j + 1))
        .cloned()
        .unwrap_or_else(|| format!("C{}", j + 1))
}
