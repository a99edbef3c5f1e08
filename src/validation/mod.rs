//! Validation Engine
//!
//! Gates the scoring engine: structural and domain checks on the raw table and
//! the weight/impact arguments, first failure wins.

pub mod engine;

pub use engine::{Alternative, MIN_COLUMNS, ValidatedInput, split_list, validate};
