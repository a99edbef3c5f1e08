//! Result Writer
//!
//! Renders the ranked table in memory, then replaces the destination in one
//! rename so a failed run never leaves a partial file behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::Settings;
use crate::error::TopsisError;
use crate::topsis::Evaluation;
use crate::validation::ValidatedInput;

/// Render header and rows, each row followed by its score and rank
pub fn render(input: &ValidatedInput, evaluation: &Evaluation, settings: &Settings) -> String {
    let delimiter = settings.delimiter.to_string();
    let mut out = String::new();

    let mut header: Vec<String> = match &input.header {
        Some(fields) => fields.clone(),
        None => std::iter::once(settings.identifier_label.clone())
            .chain((0..input.table.criteria()).map(|j| format!("C{}", j + 1)))
            .collect(),
    };
    header.push(settings.score_label.clone());
    header.push(settings.rank_label.clone());
    out.push_str(&header.join(&delimiter));
    out.push('\n');

    for ((alternative, score), rank) in input
        .alternatives
        .iter()
        .zip(&evaluation.scores)
        .zip(&evaluation.ranks)
    {
        let mut fields = Vec::with_capacity(alternative.fields.len() + 3);
        fields.push(alternative.id.clone());
        fields.extend(alternative.fields.iter().cloned());
        fields.push(score.to_string());
        fields.push(rank.to_string());
        out.push_str(&fields.join(&delimiter));
        out.push('\n');
    }

    out
}

/// Write `contents` to `path` through a temporary file in the same directory
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), TopsisError> {
    let unwritable = |source| TopsisError::ResultUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(unwritable)?;
    file.write_all(contents.as_bytes()).map_err(unwritable)?;
    file.flush().map_err(unwritable)?;
    file.persist(path).map_err(|e| unwritable(e.error))?;
    Ok(())
}
