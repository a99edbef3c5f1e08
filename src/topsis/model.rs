//! Engine data types

/// Preferred direction of a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// Higher values are preferred
    Benefit,
    /// Lower values are preferred
    Cost,
}

impl Impact {
    /// Map a boundary token onto a direction
    pub fn from_token(token: &str, benefit: &str, cost: &str) -> Option<Self> {
        if token == benefit {
            Some(Impact::Benefit)
        } else if token == cost {
            Some(Impact::Cost)
        } else {
            None
        }
    }
}

/// Validated numeric matrix, one row per alternative
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    rows: Vec<Vec<f64>>,
    criteria: usize,
}

impl ScoreTable {
    /// Build a table from rows of equal width.
    ///
    /// Returns `None` when rows disagree on width.
    pub fn new(rows: Vec<Vec<f64>>) -> Option<Self> {
        let criteria = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != criteria) {
            return None;
        }
        Some(Self { rows, criteria })
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn alternatives(&self) -> usize {
        self.rows.len()
    }

    pub fn criteria(&self) -> usize {
        self.criteria
    }

    /// Values of one criterion across all alternatives
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[j])
    }
}

/// Per-alternative scores and ranks, in input row order
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub scores: Vec<f64>,
    pub ranks: Vec<usize>,
}

impl Evaluation {
    /// Row index of the alternative ranked first
    pub fn best(&self) -> Option<usize> {
        self.ranks.iter().position(|&rank| rank == 1)
    }
}
