//! Properties of the scoring engine over generated tables
use topsis_rank::topsis::{normalize, rank_scores};
use topsis_rank::{Impact, RankOrder, ScoreTable, Settings, evaluate, rank_text};

/// Deterministic pseudo-random tables (linear congruential generator)
fn generated_table(seed: u64, alternatives: usize, criteria: usize) -> ScoreTable {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % 1000) as f64 / 10.0 + 0.5
    };
    let rows = (0..alternatives)
        .map(|_| (0..criteria).map(|_| next()).collect())
        .collect();
    ScoreTable::new(rows).expect("rectangular table")
}

fn mixed_impacts(criteria: usize) -> Vec<Impact> {
    (0..criteria)
        .map(|j| if j % 3 == 2 { Impact::Cost } else { Impact::Benefit })
        .collect()
}

#[test]
fn test_ranks_are_a_permutation() {
    for seed in 0..20 {
        let alternatives = 2 + (seed as usize % 9);
        let table = generated_table(seed, alternatives, 6);
        let weights = [1.0, 2.0, 0.5, 1.0, 3.0, 1.0];
        let evaluation = evaluate(&table, &weights, &mixed_impacts(6), RankOrder::FarthestFirst);

        let mut ranks = evaluation.ranks.clone();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=alternatives).collect::<Vec<_>>(), "seed {seed}");
    }
}

#[test]
fn test_higher_score_means_better_rank() {
    for seed in 0..20 {
        let table = generated_table(seed, 8, 5);
        let evaluation = evaluate(&table, &[1.0; 5], &mixed_impacts(5), RankOrder::FarthestFirst);
        let (scores, ranks) = (&evaluation.scores, &evaluation.ranks);

        for i in 0..scores.len() {
            for k in 0..scores.len() {
                if scores[i] > scores[k] {
                    assert!(ranks[i] < ranks[k], "seed {seed}: rows {i} and {k}");
                }
            }
        }
    }
}

#[test]
fn test_closest_first_reverses_direction() {
    let table = generated_table(7, 6, 5);
    let evaluation = evaluate(&table, &[1.0; 5], &mixed_impacts(5), RankOrder::ClosestFirst);
    for i in 0..6 {
        for k in 0..6 {
            if evaluation.scores[i] < evaluation.scores[k] {
                assert!(evaluation.ranks[i] < evaluation.ranks[k]);
            }
        }
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let table = generated_table(42, 10, 7);
    let weights = [0.3, 1.0, 2.0, 0.1, 1.5, 1.0, 0.7];
    let first = evaluate(&table, &weights, &mixed_impacts(7), RankOrder::FarthestFirst);
    for _ in 0..5 {
        let again = evaluate(&table, &weights, &mixed_impacts(7), RankOrder::FarthestFirst);
        assert_eq!(first, again);
    }
}

#[test]
fn test_normalization_is_scale_invariant() {
    let table = generated_table(3, 6, 5);
    let scaled: Vec<Vec<f64>> = table
        .rows()
        .iter()
        .map(|row| {
            let mut row = row.clone();
            row[2] *= 37.5;
            row
        })
        .collect();

    let original = normalize(table.rows());
    let rescaled = normalize(&scaled);
    for (a, b) in original.iter().zip(&rescaled) {
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-12);
        }
    }
}

#[test]
fn test_equal_scores_ranked_in_row_order() {
    assert_eq!(
        rank_scores(&[1.0, 1.0, 1.0], RankOrder::FarthestFirst),
        vec![1, 2, 3]
    );
}

#[test]
fn test_dominant_alternative_ranking() {
    let text = "Id,A,B,C,D,E\nLow,1,2,3,4,5\nMid,2,3,4,5,6\nTop,3,4,5,6,7\n";

    // default direction: farthest from the ideal ranks first
    let ranking = rank_text(text, "1,1,1,1,1", "+,+,+,+,+", &Settings::default())
        .expect("ranking");
    assert_eq!(ranking.evaluation.ranks, vec![1, 2, 3]);
    assert_eq!(ranking.best(), Some("Low"));

    // closest-first puts the row with the highest values on top
    let settings = Settings {
        rank_order: RankOrder::ClosestFirst,
        ..Settings::default()
    };
    let ranking = rank_text(text, "1,1,1,1,1", "+,+,+,+,+", &settings).expect("ranking");
    assert_eq!(ranking.best(), Some("Top"));
    assert_eq!(ranking.evaluation.scores[2], 0.0);
}
