//! Contingency matrix and per-cluster impurity measures.

use std::collections::HashMap;

use serde::Serialize;

/// Safely convert a count to f64 for fraction calculations.
///
/// Sequence counts in practice are far below the f64 mantissa limit, so the
/// precision loss flagged by clippy cannot occur.
#[inline]
pub(crate) fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Cross-tabulation of two aligned label sequences.
///
/// Rows are the sorted distinct labels of the first sequence, columns the
/// sorted distinct labels of the second; entry (i, j) counts positions
/// carrying that label pair.
#[derive(Debug, Clone)]
pub struct ContingencyMatrix {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    counts: Vec<Vec<u64>>,
    total: u64,
}

impl ContingencyMatrix {
    /// Build the matrix from two equal-length aligned label sequences.
    #[must_use]
    pub fn from_labels(labels_first: &[String], labels_second: &[String]) -> Self {
        debug_assert_eq!(labels_first.len(), labels_second.len());

        let row_labels = sorted_distinct(labels_first);
        let col_labels = sorted_distinct(labels_second);

        let row_index: HashMap<&str, usize> = row_labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.as_str(), i))
            .collect();
        let col_index: HashMap<&str, usize> = col_labels
            .iter()
            .enumerate()
            .map(|(j, l)| (l.as_str(), j))
            .collect();

        let mut counts = vec![vec![0u64; col_labels.len()]; row_labels.len()];
        for (label1, label2) in labels_first.iter().zip(labels_second) {
            // Indexes exist by construction of the label sets
            if let (Some(&i), Some(&j)) =
                (row_index.get(label1.as_str()), col_index.get(label2.as_str()))
            {
                counts[i][j] += 1;
            }
        }

        let total = labels_first.len() as u64;
        Self {
            row_labels,
            col_labels,
            counts,
            total,
        }
    }

    /// Number of scored sequences (sum of all entries).
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    #[must_use]
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Iterate over rows as (label, counts) pairs, in ascending label order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.row_labels
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().map(Vec::as_slice))
    }

    /// Marginal totals per row.
    #[must_use]
    pub fn row_sums(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    /// Marginal totals per column.
    #[must_use]
    pub fn col_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.col_labels.len()];
        for row in &self.counts {
            for (j, &count) in row.iter().enumerate() {
                sums[j] += count;
            }
        }
        sums
    }
}

fn sorted_distinct(labels: &[String]) -> Vec<String> {
    let mut distinct: Vec<String> = labels.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    distinct
}

/// A reference cluster whose members scatter across more than one
/// counterpart cluster.
#[derive(Debug, Clone, Serialize)]
pub struct BrokenCluster {
    /// Label of the cluster in the reference (first) clustering.
    pub label: String,

    /// Shannon entropy (nats) of the member distribution across counterpart
    /// clusters. Always > 0 for a reported cluster.
    pub entropy: f64,

    /// Fraction of members in the single largest counterpart cluster.
    pub purity: f64,

    /// Gini impurity: 1 - sum of squared counterpart fractions.
    pub gini: f64,
}

/// Find reference clusters that do not map cleanly onto a single counterpart
/// cluster, in ascending label order.
///
/// Rows with entropy exactly 0 (all members in one counterpart cluster) are
/// not broken and are skipped.
#[must_use]
pub fn broken_clusters(matrix: &ContingencyMatrix) -> Vec<BrokenCluster> {
    matrix
        .rows()
        .filter_map(|(label, counts)| {
            let h = row_entropy(counts);
            if h > 0.0 {
                Some(BrokenCluster {
                    label: label.to_string(),
                    entropy: h,
                    purity: row_purity(counts),
                    gini: row_gini(counts),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Shannon entropy (natural log) of a count vector's normalized distribution.
fn row_entropy(counts: &[u64]) -> f64 {
    let total = count_to_f64(counts.iter().sum());
    if total == 0.0 {
        return 0.0;
    }
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = count_to_f64(c) / total;
            -p * p.ln()
        })
        .sum()
}

fn row_purity(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let max = counts.iter().copied().max().unwrap_or(0);
    if total == 0 {
        0.0
    } else {
        count_to_f64(max) / count_to_f64(total)
    }
}

fn row_gini(counts: &[u64]) -> f64 {
    let total = count_to_f64(counts.iter().sum());
    if total == 0.0 {
        return 0.0;
    }
    let sum_squares: f64 = counts
        .iter()
        .map(|&c| {
            let p = count_to_f64(c) / total;
            p * p
        })
        .sum();
    1.0 - sum_squares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_matrix_counts_and_marginals() {
        let first = labels(&["0", "0", "1", "1"]);
        let second = labels(&["x", "x", "x", "y"]);

        let m = ContingencyMatrix::from_labels(&first, &second);
        assert_eq!(m.row_labels(), &["0", "1"]);
        assert_eq!(m.col_labels(), &["x", "y"]);

        let rows: Vec<_> = m.rows().collect();
        assert_eq!(rows[0], ("0", &[2u64, 0][..]));
        assert_eq!(rows[1], ("1", &[1u64, 1][..]));

        assert_eq!(m.row_sums(), vec![2, 2]);
        assert_eq!(m.col_sums(), vec![3, 1]);
        assert_eq!(m.total(), 4);
    }

    #[test]
    fn test_split_cluster_reported_with_purity_and_gini() {
        // Cluster "0" maps cleanly onto one counterpart, cluster "1" splits
        // its three members 2-and-1
        let first = labels(&["0", "0", "1", "1", "1"]);
        let second = labels(&["a", "a", "b", "b", "c"]);

        let m = ContingencyMatrix::from_labels(&first, &second);
        let broken = broken_clusters(&m);

        assert_eq!(broken.len(), 1);
        let b = &broken[0];
        assert_eq!(b.label, "1");
        assert!(b.entropy > 0.0);
        assert!((b.purity - 2.0 / 3.0).abs() < 1e-12);
        assert!((b.gini - 4.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_identical_partitions_have_no_broken_clusters() {
        let first = labels(&["0", "0", "1"]);
        let second = labels(&["g1", "g1", "g2"]);

        let m = ContingencyMatrix::from_labels(&first, &second);
        assert!(broken_clusters(&m).is_empty());
    }

    #[test]
    fn test_broken_clusters_sorted_by_label() {
        let first = labels(&["b", "b", "a", "a", "c", "c"]);
        let second = labels(&["1", "2", "3", "4", "5", "5"]);

        let m = ContingencyMatrix::from_labels(&first, &second);
        let broken = broken_clusters(&m);
        let order: Vec<_> = broken.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_row_entropy_of_even_split() {
        let h = row_entropy(&[1, 1]);
        assert!((h - std::f64::consts::LN_2).abs() < 1e-12);
        assert_eq!(row_entropy(&[3, 0, 0]), 0.0);
    }
}
