//! Line-based two-column clustering files.
//!
//! Some clustering tools emit one `cluster-id  sequence-id` (or the reverse)
//! pair per whitespace-delimited line. These parse into the orthogroups
//! shape so downstream tooling only deals with JSON clusterings.

use std::path::Path;

use crate::parsing::json::ParseError;

/// Which column of a two-column clustering file holds the cluster id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ClusterColumn {
    Left,
    Right,
}

/// Parse a two-column clustering file into (cluster id, members) groups.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` for lines with fewer than two columns.
pub fn parse_two_column_file(
    path: &Path,
    cluster_column: ClusterColumn,
) -> Result<Vec<(String, Vec<String>)>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_two_column_text(&content, cluster_column)
}

/// Parse two-column clustering text, grouping sequence ids by cluster id.
///
/// Clusters keep first-seen order; columns beyond the second are ignored;
/// blank lines are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` naming the 1-based line number for
/// lines with fewer than two columns.
pub fn parse_two_column_text(
    text: &str,
    cluster_column: ClusterColumn,
) -> Result<Vec<(String, Vec<String>)>, ParseError> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut columns = line.split_whitespace();
        let (first, second) = match (columns.next(), columns.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(ParseError::InvalidFormat(format!(
                    "Line {} has fewer than 2 columns",
                    i + 1
                )));
            }
        };

        let (family, seq_id) = match cluster_column {
            ClusterColumn::Left => (first, second),
            ClusterColumn::Right => (second, first),
        };

        match groups.iter_mut().find(|(id, _)| id.as_str() == family) {
            Some((_, members)) => members.push(seq_id.to_string()),
            None => groups.push((family.to_string(), vec![seq_id.to_string()])),
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_id_in_left_column() {
        let text = "fam1 seqA\nfam2 seqB\nfam1 seqC\n";
        let groups = parse_two_column_text(text, ClusterColumn::Left).unwrap();
        assert_eq!(
            groups,
            vec![
                ("fam1".to_string(), vec!["seqA".to_string(), "seqC".to_string()]),
                ("fam2".to_string(), vec!["seqB".to_string()]),
            ]
        );
    }

    #[test]
    fn test_cluster_id_in_right_column() {
        let text = "seqA\tfam1\nseqB\tfam1\n";
        let groups = parse_two_column_text(text, ClusterColumn::Right).unwrap();
        assert_eq!(
            groups,
            vec![(
                "fam1".to_string(),
                vec!["seqA".to_string(), "seqB".to_string()]
            )]
        );
    }

    #[test]
    fn test_blank_lines_and_extra_columns() {
        let text = "fam1 seqA extra-ignored\n\n  \nfam1 seqB\n";
        let groups = parse_two_column_text(text, ClusterColumn::Left).unwrap();
        assert_eq!(groups[0].1, vec!["seqA".to_string(), "seqB".to_string()]);
    }

    #[test]
    fn test_single_column_line_is_an_error() {
        let text = "fam1 seqA\nlonely\n";
        let err = parse_two_column_text(text, ClusterColumn::Left).unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }
}
