//! Sequence identifier normalization.
//!
//! Some pipelines prefix sequence ids with a species code, e.g.
//! `Acamar.WP_012160728.1`, while others emit the bare accession
//! `WP_012160728.1`. Stripping the prefix lets files from both styles be
//! compared directly.

/// Strip a species prefix from a sequence id if present.
///
/// The `Species.ID` format is detected by checking whether the part before
/// the first dot consists of letters only (no digits). Only the first dot is
/// inspected; dots later in the id (accession versions like `.1`) are kept.
///
/// ```
/// use cluster_compare::core::ids::strip_species_prefix;
///
/// assert_eq!(strip_species_prefix("Acamar.WP_012160728.1"), "WP_012160728.1");
/// assert_eq!(strip_species_prefix("WP_012160728.1"), "WP_012160728.1");
/// ```
#[must_use]
pub fn strip_species_prefix(seq_id: &str) -> &str {
    match seq_id.split_once('.') {
        Some((prefix, rest)) if !prefix.is_empty() && prefix.chars().all(char::is_alphabetic) => {
            rest
        }
        _ => seq_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_species_prefix() {
        assert_eq!(strip_species_prefix("Acamar.WP_012160728.1"), "WP_012160728.1");
        assert_eq!(strip_species_prefix("Ecoli.b0001"), "b0001");
    }

    #[test]
    fn test_leaves_bare_accessions_alone() {
        // The part before the first dot contains digits, so it is not a
        // species code
        assert_eq!(strip_species_prefix("WP_012160728.1"), "WP_012160728.1");
        assert_eq!(strip_species_prefix("NP_414542.1"), "NP_414542.1");
    }

    #[test]
    fn test_no_dot_passes_through() {
        assert_eq!(strip_species_prefix("b0001"), "b0001");
        assert_eq!(strip_species_prefix(""), "");
    }

    #[test]
    fn test_empty_prefix_passes_through() {
        assert_eq!(strip_species_prefix(".WP_1"), ".WP_1");
    }

    #[test]
    fn test_only_first_dot_is_stripped() {
        assert_eq!(strip_species_prefix("Acamar.WP_1.2"), "WP_1.2");
    }

    #[test]
    fn test_idempotent() {
        for id in ["Acamar.WP_012160728.1", "WP_012160728.1", "b0001", ""] {
            let once = strip_species_prefix(id);
            assert_eq!(strip_species_prefix(once), once);
        }
    }
}
