//! Reconciling the sequence sets of two clusterings.
//!
//! Only sequences present in both inputs can be scored. The reconciler
//! intersects the two mappings, counts what falls outside the intersection,
//! and projects both mappings over the common ids sorted lexicographically.
//! The sort is what makes runs reproducible; the statistics themselves are
//! permutation-invariant, but any per-sequence debug output is not.

use thiserror::Error;

use crate::core::clustering::ClusterAssignments;

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error(
        "no sequences in common between the two clusterings \
         ({only_in_first} only in the first, {only_in_second} only in the second)"
    )]
    NoCommonSequences {
        only_in_first: usize,
        only_in_second: usize,
    },
}

/// The common sequence set of two clusterings, with both label projections.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// Sequences present only in the first clustering (excluded from scoring).
    pub only_in_first: usize,

    /// Sequences present only in the second clustering (excluded from scoring).
    pub only_in_second: usize,

    /// Common sequence ids, sorted lexicographically.
    pub sequences: Vec<String>,

    /// Label of each common sequence in the first clustering.
    pub labels_first: Vec<String>,

    /// Label of each common sequence in the second clustering.
    pub labels_second: Vec<String>,
}

/// Intersect two sequence→label mappings and align their labels.
///
/// # Errors
///
/// Returns [`ReconcileError::NoCommonSequences`] when the intersection is
/// empty; the error carries both exclusive counts so callers can still report
/// them.
pub fn reconcile(
    first: &ClusterAssignments,
    second: &ClusterAssignments,
) -> Result<Reconciliation, ReconcileError> {
    let mut common: Vec<(&str, &str, &str)> = first
        .seq_ids()
        .filter_map(|id| {
            let label_first = first.label(id)?;
            let label_second = second.label(id)?;
            Some((id, label_first, label_second))
        })
        .collect();

    let only_in_first = first.len() - common.len();
    let only_in_second = second.len() - common.len();

    if common.is_empty() {
        return Err(ReconcileError::NoCommonSequences {
            only_in_first,
            only_in_second,
        });
    }

    common.sort_unstable_by_key(|&(id, _, _)| id);

    let mut sequences = Vec::with_capacity(common.len());
    let mut labels_first = Vec::with_capacity(common.len());
    let mut labels_second = Vec::with_capacity(common.len());
    for (id, label1, label2) in common {
        sequences.push(id.to_string());
        labels_first.push(label1.to_string());
        labels_second.push(label2.to_string());
    }

    Ok(Reconciliation {
        only_in_first,
        only_in_second,
        sequences,
        labels_first,
        labels_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignments(pairs: &[(&str, &str)]) -> ClusterAssignments {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_common_set_sorted_and_aligned() {
        let first = assignments(&[("c", "1"), ("a", "0"), ("b", "0"), ("x", "9")]);
        let second = assignments(&[("b", "X"), ("c", "Y"), ("a", "X")]);

        let rec = reconcile(&first, &second).unwrap();
        assert_eq!(rec.sequences, vec!["a", "b", "c"]);
        assert_eq!(rec.labels_first, vec!["0", "0", "1"]);
        assert_eq!(rec.labels_second, vec!["X", "X", "Y"]);
        assert_eq!(rec.only_in_first, 1);
        assert_eq!(rec.only_in_second, 0);
    }

    #[test]
    fn test_exclusive_counts() {
        let first = assignments(&[("a", "0"), ("b", "0"), ("c", "1")]);
        let second = assignments(&[("b", "g1"), ("d", "g2"), ("e", "g2")]);

        let rec = reconcile(&first, &second).unwrap();
        assert_eq!(rec.sequences, vec!["b"]);
        assert_eq!(rec.only_in_first, 2);
        assert_eq!(rec.only_in_second, 2);
    }

    #[test]
    fn test_disjoint_inputs_fail_with_counts() {
        let first = assignments(&[("a", "0"), ("b", "0")]);
        let second = assignments(&[("c", "g1")]);

        match reconcile(&first, &second) {
            Err(ReconcileError::NoCommonSequences {
                only_in_first,
                only_in_second,
            }) => {
                assert_eq!(only_in_first, 2);
                assert_eq!(only_in_second, 1);
            }
            Ok(_) => panic!("disjoint inputs should not reconcile"),
        }
    }
}
