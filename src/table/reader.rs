//! Table Reader
//!
//! Splits delimited text into rows of trimmed fields and decides whether the
//! first row is a header. No numeric conversion happens here.

use std::path::Path;

use crate::error::TopsisError;

/// One non-blank input line split into fields
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the source
    pub line: usize,
    pub fields: Vec<String>,
}

/// Rows of a delimited table, header separated out when detected
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    pub header: Option<RawRow>,
    pub rows: Vec<RawRow>,
}

/// Read the whole source as text
pub fn read_source(path: &Path) -> Result<String, TopsisError> {
    std::fs::read_to_string(path).map_err(|source| TopsisError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Split text into rows and detect a header.
///
/// The first row is a header when its second field is missing or does not
/// parse as a number.
pub fn parse_table(text: &str, delimiter: char) -> RawTable {
    let mut rows: Vec<RawRow> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| RawRow {
            line: idx + 1,
            fields: split_fields(line, delimiter),
        })
        .collect();

    let has_header = rows
        .first()
        .is_some_and(|first| !is_number(first.fields.get(1).map(String::as_str)));
    let header = has_header.then(|| rows.remove(0));

    RawTable { header, rows }
}

fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|field| field.trim().to_string())
        .collect()
}

fn is_number(field: Option<&str>) -> bool {
    field.is_some_and(|f| f.parse::<f64>().is_ok())
}
