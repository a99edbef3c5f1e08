//! TOPSIS Engine
//!
//! Pure scoring over a validated numeric matrix. No I/O, no validation.

pub mod engine;
pub mod model;

pub use engine::{
    ZERO_EPSILON, apply_weights, column_norms, distances, evaluate, ideal_vector, normalize, rank_scores,
};
pub use model::{Evaluation, Impact, ScoreTable};
