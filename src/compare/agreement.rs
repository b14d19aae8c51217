//! Partition agreement statistics: Adjusted Rand Index and Normalized
//! Mutual Information.
//!
//! Both are pure functions of the contingency matrix of the two aligned
//! label sequences. Conventions follow the usual reference definitions:
//! ARI uses the pair-counting form with a chance correction, NMI normalizes
//! the mutual information by the arithmetic mean of the marginal entropies.

use serde::Serialize;

use crate::compare::contingency::{count_to_f64, ContingencyMatrix};

/// Agreement scores between two partitions of the same sequence set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AgreementScores {
    /// Chance-corrected pairwise agreement; 1.0 = identical partitions,
    /// ~0.0 = random-equivalent, can go negative.
    pub adjusted_rand: f64,

    /// Mutual information normalized to [0, 1].
    pub normalized_mutual_info: f64,
}

impl AgreementScores {
    /// Compute both scores from two equal-length aligned label sequences.
    #[must_use]
    pub fn from_labels(labels_first: &[String], labels_second: &[String]) -> Self {
        let matrix = ContingencyMatrix::from_labels(labels_first, labels_second);
        Self::from_matrix(&matrix)
    }

    #[must_use]
    pub fn from_matrix(matrix: &ContingencyMatrix) -> Self {
        Self {
            adjusted_rand: adjusted_rand_index(matrix),
            normalized_mutual_info: normalized_mutual_info(matrix),
        }
    }
}

/// Number of unordered pairs in a group of `n` elements.
fn comb2(n: u64) -> f64 {
    count_to_f64(n) * count_to_f64(n.saturating_sub(1)) / 2.0
}

/// Adjusted Rand Index over a contingency matrix.
///
/// Degenerate inputs where the chance-corrected denominator vanishes (both
/// partitions trivially identical, e.g. everything in one cluster on both
/// sides) score 1.0, matching the scikit-learn convention.
#[must_use]
pub fn adjusted_rand_index(matrix: &ContingencyMatrix) -> f64 {
    let index: f64 = matrix
        .rows()
        .flat_map(|(_, counts)| counts.iter().copied())
        .map(comb2)
        .sum();
    let sum_rows: f64 = matrix.row_sums().into_iter().map(comb2).sum();
    let sum_cols: f64 = matrix.col_sums().into_iter().map(comb2).sum();
    let total_pairs = comb2(matrix.total());

    if total_pairs == 0.0 {
        return 1.0;
    }

    let expected = sum_rows * sum_cols / total_pairs;
    let max_index = (sum_rows + sum_cols) / 2.0;
    if (max_index - expected).abs() < f64::EPSILON {
        return 1.0;
    }
    (index - expected) / (max_index - expected)
}

/// Normalized Mutual Information over a contingency matrix.
///
/// Normalizer is the arithmetic mean of the two marginal entropies. Two
/// single-cluster partitions score 1.0; when exactly one side has zero
/// entropy, the mutual information is 0 and so is the score.
#[must_use]
pub fn normalized_mutual_info(matrix: &ContingencyMatrix) -> f64 {
    if matrix.row_labels().len() <= 1 && matrix.col_labels().len() <= 1 {
        return 1.0;
    }

    let n = count_to_f64(matrix.total());
    let row_sums = matrix.row_sums();
    let col_sums = matrix.col_sums();

    let mut mutual_info = 0.0;
    for (i, (_, counts)) in matrix.rows().enumerate() {
        for (j, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let joint = count_to_f64(count) / n;
            let marginal_product =
                count_to_f64(row_sums[i]) * count_to_f64(col_sums[j]) / (n * n);
            mutual_info += joint * (joint / marginal_product).ln();
        }
    }

    let entropy_rows = marginal_entropy(&row_sums, n);
    let entropy_cols = marginal_entropy(&col_sums, n);
    let normalizer = (entropy_rows + entropy_cols) / 2.0;
    if normalizer <= f64::EPSILON {
        return 0.0;
    }
    (mutual_info / normalizer).max(0.0)
}

fn marginal_entropy(sums: &[u64], n: f64) -> f64 {
    sums.iter()
        .filter(|&&s| s > 0)
        .map(|&s| {
            let p = count_to_f64(s) / n;
            -p * p.ln()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    fn scores(first: &[&str], second: &[&str]) -> AgreementScores {
        AgreementScores::from_labels(&labels(first), &labels(second))
    }

    #[test]
    fn test_identical_partitions_score_one() {
        let s = scores(&["0", "0", "1", "1", "2"], &["a", "a", "b", "b", "c"]);
        assert!((s.adjusted_rand - 1.0).abs() < 1e-12);
        assert!((s.normalized_mutual_info - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_groups_vs_one_group_scores_zero() {
        // One side has zero entropy, so there is no shared information and
        // no chance-corrected pair agreement
        let s = scores(&["0", "0", "1"], &["X", "X", "X"]);
        assert!(s.adjusted_rand.abs() < 1e-12);
        assert!(s.normalized_mutual_info.abs() < 1e-12);
    }

    #[test]
    fn test_single_cluster_on_both_sides_scores_one() {
        let s = scores(&["0", "0", "0"], &["X", "X", "X"]);
        assert!((s.adjusted_rand - 1.0).abs() < 1e-12);
        assert!((s.normalized_mutual_info - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_agreement_ari() {
        // Known value: ARI([0,0,1,1], [0,0,1,2]) = 4/7
        let s = scores(&["0", "0", "1", "1"], &["0", "0", "1", "2"]);
        assert!((s.adjusted_rand - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_agreement_nmi() {
        // Reference value computed with sklearn's
        // normalized_mutual_info_score (arithmetic-mean normalization)
        let s = scores(&["0", "0", "1", "1"], &["0", "0", "0", "1"]);
        assert!((s.normalized_mutual_info - 0.343711).abs() < 1e-4);
        assert!(s.adjusted_rand.abs() < 1e-12);
    }

    #[test]
    fn test_scores_serialize_for_json_output() {
        let s = scores(&["0", "0", "1"], &["a", "a", "b"]);
        let value = serde_json::to_value(s).unwrap();
        assert_eq!(value["adjusted_rand"], 1.0);
        assert_eq!(value["normalized_mutual_info"], 1.0);
    }

    #[test]
    fn test_ari_can_go_negative() {
        let s = scores(&["0", "1", "0", "1"], &["a", "a", "b", "b"]);
        assert!(s.adjusted_rand < 0.0 + 1e-12);
    }
}
