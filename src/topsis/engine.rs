//! Scoring steps
//!
//! Each step is a plain function over row-major matrices so it can be
//! exercised on its own. [`evaluate`] chains them.
//!
//! Scores are Euclidean distances to a single ideal vector (column maximum for
//! benefit criteria, column minimum for cost criteria), not the two-reference
//! closeness coefficient of textbook TOPSIS.

use crate::config::RankOrder;

use super::model::{Evaluation, Impact, ScoreTable};

/// Stand-in for exact zeros after normalization and weighting
pub const ZERO_EPSILON: f64 = 1e-9;

fn nonzero(value: f64) -> f64 {
    if value == 0.0 { ZERO_EPSILON } else { value }
}

/// Euclidean norm of every column
pub fn column_norms(rows: &[Vec<f64>]) -> Vec<f64> {
    let criteria = rows.first().map_or(0, Vec::len);
    (0..criteria)
        .map(|j| rows.iter().map(|row| row[j] * row[j]).sum::<f64>().sqrt())
        .collect()
}

/// Divide every value by the Euclidean norm of its column.
///
/// Exact zeros in the result are replaced with [`ZERO_EPSILON`]. A column
/// whose norm is zero or not finite yields NaN or zeros; the validator
/// rejects such columns.
pub fn normalize(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let norms = column_norms(rows);

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&norms)
                .map(|(value, norm)| nonzero(value / norm))
                .collect()
        })
        .collect()
}

/// Multiply each column by its weight, replacing exact zeros again
pub fn apply_weights(normalized: &[Vec<f64>], weights: &[f64]) -> Vec<Vec<f64>> {
    normalized
        .iter()
        .map(|row| {
            row.iter()
                .zip(weights)
                .map(|(value, weight)| nonzero(value * weight))
                .collect()
        })
        .collect()
}

/// Column maximum for benefit criteria, column minimum for cost criteria
pub fn ideal_vector(weighted: &[Vec<f64>], impacts: &[Impact]) -> Vec<f64> {
    impacts
        .iter()
        .enumerate()
        .map(|(j, impact)| {
            let column = weighted.iter().map(|row| row[j]);
            match impact {
                Impact::Benefit => column.fold(f64::NEG_INFINITY, f64::max),
                Impact::Cost => column.fold(f64::INFINITY, f64::min),
            }
        })
        .collect()
}

/// Euclidean distance of each row from the ideal vector
pub fn distances(weighted: &[Vec<f64>], ideal: &[f64]) -> Vec<f64> {
    weighted
        .iter()
        .map(|row| {
            row.iter()
                .zip(ideal)
                .map(|(value, best)| (value - best).powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .collect()
}

/// Assign ranks 1..=n to scores.
///
/// Equal scores keep their input order.
pub fn rank_scores(scores: &[f64], order: RankOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    // sort_by is stable, which is what the tie-break relies on
    match order {
        RankOrder::FarthestFirst => indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a])),
        RankOrder::ClosestFirst => indices.sort_by(|&a, &b| scores[a].total_cmp(&scores[b])),
    }

    let mut ranks = vec![0; scores.len()];
    for (position, index) in indices.into_iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

/// Score and rank every alternative of a validated table
pub fn evaluate(
    table: &ScoreTable,
    weights: &[f64],
    impacts: &[Impact],
    order: RankOrder,
) -> Evaluation {
    let normalized = normalize(table.rows());
    let weighted = apply_weights(&normalized, weights);
    let ideal = ideal_vector(&weighted, impacts);
    log::debug!("ideal vector: {:?}", ideal);

    let scores = distances(&weighted, &ideal);
    let ranks = rank_scores(&scores, order);
    Evaluation { scores, ranks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "expected {e}, got {a}");
        }
    }

    fn phones() -> ScoreTable {
        ScoreTable::new(vec![
            vec![250.0, 16.0, 12.0, 5.0, 4.0],
            vec![200.0, 16.0, 8.0, 3.0, 5.0],
            vec![300.0, 32.0, 16.0, 4.0, 3.0],
            vec![275.0, 32.0, 8.0, 4.0, 4.0],
            vec![225.0, 16.0, 16.0, 2.0, 2.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_normalize_unit_columns() {
        let normalized = normalize(&[vec![3.0, 1.0], vec![4.0, 1.0]]);
        assert_close(&normalized[0], &[0.6, 1.0 / 2f64.sqrt()]);
        assert_close(&normalized[1], &[0.8, 1.0 / 2f64.sqrt()]);
    }

    #[test]
    fn test_normalize_replaces_zero_with_epsilon() {
        let normalized = normalize(&[vec![0.0, 2.0], vec![5.0, 3.0]]);
        assert_eq!(normalized[0][0], ZERO_EPSILON);
        assert_eq!(normalized[1][0], 1.0);
    }

    #[test]
    fn test_column_norms_underflow_to_zero() {
        let norms = column_norms(&[vec![3.0, 1e-200], vec![4.0, 2e-200]]);
        assert_eq!(norms, vec![5.0, 0.0]);
    }

    #[test]
    fn test_apply_weights_replaces_zero_with_epsilon() {
        let weighted = apply_weights(&[vec![0.5, 0.25]], &[2.0, 0.0]);
        assert_eq!(weighted[0][0], 1.0);
        assert_eq!(weighted[0][1], ZERO_EPSILON);
    }

    #[test]
    fn test_ideal_vector_follows_impact() {
        let weighted = vec![vec![0.1, 0.1], vec![0.4, 0.4], vec![0.2, 0.2]];
        let ideal = ideal_vector(&weighted, &[Impact::Benefit, Impact::Cost]);
        assert_eq!(ideal, vec![0.4, 0.1]);
    }

    #[test]
    fn test_distances() {
        let weighted = vec![vec![0.0, 0.0], vec![3.0, 4.0]];
        assert_close(&distances(&weighted, &[3.0, 4.0]), &[5.0, 0.0]);
    }

    #[test]
    fn test_rank_scores_farthest_first() {
        assert_eq!(
            rank_scores(&[0.2, 0.9, 0.5], RankOrder::FarthestFirst),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn test_rank_scores_closest_first() {
        assert_eq!(
            rank_scores(&[0.2, 0.9, 0.5], RankOrder::ClosestFirst),
            vec![1, 3, 2]
        );
    }

    #[test]
    fn test_rank_ties_keep_row_order() {
        assert_eq!(
            rank_scores(&[0.5, 0.7, 0.5, 0.7], RankOrder::FarthestFirst),
            vec![3, 1, 4, 2]
        );
        assert_eq!(
            rank_scores(&[0.5, 0.7, 0.5, 0.7], RankOrder::ClosestFirst),
            vec![1, 3, 2, 4]
        );
    }

    #[test]
    fn test_evaluate_reference_scores() {
        let impacts = [
            Impact::Cost,
            Impact::Benefit,
            Impact::Benefit,
            Impact::Benefit,
            Impact::Benefit,
        ];
        let evaluation = evaluate(&phones(), &[1.0; 5], &impacts, RankOrder::FarthestFirst);

        assert_close(
            &evaluation.scores,
            &[
                0.3653027589753645,
                0.47925421345374997,
                0.32062613812379565,
                0.35756277834274425,
                0.5916187390251204,
            ],
        );
        assert_eq!(evaluation.ranks, vec![3, 2, 5, 4, 1]);
    }

    #[test]
    fn test_evaluate_dominant_row_sits_on_ideal() {
        let table = ScoreTable::new(vec![
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![2.0, 3.0, 4.0, 5.0, 6.0],
            vec![3.0, 4.0, 5.0, 6.0, 7.0],
        ])
        .unwrap();
        let evaluation = evaluate(&table, &[1.0; 5], &[Impact::Benefit; 5], RankOrder::FarthestFirst);

        assert_close(
            &evaluation.scores,
            &[0.7693874241945554, 0.38469371209727765, 0.0],
        );
        assert_eq!(evaluation.ranks, vec![1, 2, 3]);
    }
}
