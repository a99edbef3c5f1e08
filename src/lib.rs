//! TOPSIS ranking
//!
//! Ranks alternatives scored on several weighted criteria by their distance
//! from an ideal reference vector.
//!
//! This library provides:
//! - Delimited table reading and atomic result writing
//! - Input validation with first-failure diagnostics
//! - The scoring engine (normalization, weighting, ideal vector, distances, ranks)
//! - Configuration management

pub mod config;
pub mod error;
pub mod run;
pub mod table;
pub mod topsis;
pub mod validation;

// Re-exports for clean public API
pub use config::{Config, RankOrder, Settings};
pub use error::{ErrorKind, TopsisError};
pub use run::{Ranking, RunSummary, rank_text, run};
pub use topsis::{Evaluation, Impact, ScoreTable, evaluate};
pub use validation::{ValidatedInput, validate};
