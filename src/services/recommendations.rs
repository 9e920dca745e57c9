//! Nearest-neighbour recommendations over externally computed features.
//!
//! Both recommenders are stateless. They index directly into the data they are
//! given, so an out-of-range target index panics; callers validate it first.

/// Ranks items by their similarity to `target` in a pairwise similarity matrix
///
/// The target's row is sorted descending (ties keep index order), the target itself is
/// dropped and the first `n` indices are returned.
///
/// # Panics
///
/// Panics if `target` is not a valid row index.
pub fn recommend_by_similarity_row(matrix: &[Vec<f64>], target: usize, n: usize) -> Vec<usize> {
    let row = &matrix[target];

    let mut ranked: Vec<usize> = (0..row.len()).collect();
    ranked.sort_by(|&a, &b| row[b].total_cmp(&row[a]));

    ranked.into_iter().filter(|&i| i != target).take(n).collect()
}

/// Ranks items by absolute distance from the target's score
///
/// Closest first; ties keep index order. The target itself is never returned.
///
/// # Panics
///
/// Panics if `target` is out of bounds for `scores`.
pub fn recommend_by_score_distance(scores: &[f64], target: usize, n: usize) -> Vec<usize> {
    let target_score = scores[target];
    let distances: Vec<f64> = scores.iter().map(|s| (s - target_score).abs()).collect();

    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));

    ranked.into_iter().filter(|&i| i != target).take(n).collect()
}

/// Pairwise cosine similarity between feature rows
///
/// A zero vector has similarity 0 with everything, itself included.
pub fn cosine_similarity_matrix(vectors: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let norms: Vec<f64> = vectors
        .iter()
        .map(|v| v.iter().map(|x| x * x).sum::<f64>().sqrt())
        .collect();

    vectors
        .iter()
        .enumerate()
        .map(|(i, a)| {
            vectors
                .iter()
                .enumerate()
                .map(|(j, b)| {
                    let denominator = norms[i] * norms[j];
                    if denominator == 0.0 {
                        return 0.0;
                    }
                    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
                    dot / denominator
                })
                .collect()
        })
        .collect()
}

/// Whether every row has as many columns as there are rows
pub fn is_square(matrix: &[Vec<f64>]) -> bool {
    matrix.iter().all(|row| row.len() == matrix.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_distance_ranking() {
        let scores = [10.0, 12.0, 9.0, 50.0, 11.0];
        // distances: [0, 2, 1, 40, 1]; index 2 and 4 tie and keep index order
        assert_eq!(recommend_by_score_distance(&scores, 0, 2), vec![2, 4]);
        assert_eq!(recommend_by_score_distance(&scores, 0, 10), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_score_distance_without_ties() {
        let scores = [10.0, 12.0, 9.0, 50.0];
        assert_eq!(recommend_by_score_distance(&scores, 0, 2), vec![2, 1]);
    }

    #[test]
    fn test_target_never_recommended() {
        let scores = [3.0, 3.0, 3.0];
        for target in 0..3 {
            let result = recommend_by_score_distance(&scores, target, 5);
            assert_eq!(result.len(), 2);
            assert!(!result.contains(&target));
        }
    }

    #[test]
    fn test_zero_neighbours() {
        assert!(recommend_by_score_distance(&[1.0, 2.0], 0, 0).is_empty());
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_target_panics() {
        recommend_by_score_distance(&[1.0, 2.0], 2, 1);
    }

    #[test]
    fn test_similarity_row_ranking() {
        let matrix = vec![
            vec![1.0, 0.2, 0.9, 0.5],
            vec![0.2, 1.0, 0.1, 0.3],
            vec![0.9, 0.1, 1.0, 0.4],
            vec![0.5, 0.3, 0.4, 1.0],
        ];
        assert_eq!(recommend_by_similarity_row(&matrix, 0, 2), vec![2, 3]);
        assert_eq!(recommend_by_similarity_row(&matrix, 1, 5), vec![3, 0, 2]);
    }

    #[test]
    fn test_similarity_row_excludes_target_even_when_not_highest() {
        let matrix = vec![vec![0.1, 0.8, 0.5], vec![0.8, 1.0, 0.2], vec![0.5, 0.2, 1.0]];
        assert_eq!(recommend_by_similarity_row(&matrix, 0, 3), vec![1, 2]);
    }

    #[test]
    fn test_cosine_similarity_matrix() {
        let vectors = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0], vec![0.0, 0.0]];
        let matrix = cosine_similarity_matrix(&vectors);
        assert!((matrix[0][0] - 1.0).abs() < 1e-12);
        assert!(matrix[0][1].abs() < 1e-12);
        assert!((matrix[0][2] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert_eq!(matrix[3][3], 0.0);
        assert!(is_square(&matrix));
    }

    #[test]
    fn test_is_square() {
        assert!(is_square(&[]));
        assert!(!is_square(&[vec![1.0, 0.0]]));
    }
}
