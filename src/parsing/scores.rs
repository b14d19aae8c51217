//! Pairwise NC-score files.
//!
//! One score per whitespace-delimited `id1 id2 value` line. The pair is
//! unordered: `(a, b)` and `(b, a)` are the same key, stored with the ids
//! sorted. Lines pairing an id with itself are dropped.

use std::collections::HashMap;
use std::path::Path;

use crate::parsing::json::ParseError;

/// Unordered sequence-id pair, stored in sorted order.
pub type ScoreKey = (String, String);

/// Parse an NC-score file into a pair→score map.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` for lines without exactly three columns or
/// with a non-numeric score.
pub fn parse_scores_file(path: &Path) -> Result<HashMap<ScoreKey, f64>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_scores_text(&content)
}

/// Parse NC-score text. Duplicate pairs keep the last score seen.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` naming the 1-based line number for
/// malformed lines.
pub fn parse_scores_text(text: &str) -> Result<HashMap<ScoreKey, f64>, ParseError> {
    let mut scores = HashMap::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split_whitespace().collect();
        let [left, right, value] = columns[..] else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected three columns on line {}, but got \"{}\"",
                i + 1,
                line.trim()
            )));
        };

        let value: f64 = value.parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid score on line {}: '{value}'",
                i + 1
            ))
        })?;

        // Normalize the pair ordering; self-pairs carry no information
        if left < right {
            scores.insert((left.to_string(), right.to_string()), value);
        } else if right < left {
            scores.insert((right.to_string(), left.to_string()), value);
        }
    }

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_unordered() {
        let text = "a b 0.5\nc a 0.25\n";
        let scores = parse_scores_text(text).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[&("a".to_string(), "b".to_string())], 0.5);
        assert_eq!(scores[&("a".to_string(), "c".to_string())], 0.25);
    }

    #[test]
    fn test_self_pairs_dropped() {
        let scores = parse_scores_text("a a 1.0\nb c 0.1\n").unwrap();
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn test_wrong_column_count_is_an_error() {
        let err = parse_scores_text("a b\n").unwrap_err();
        assert!(err.to_string().contains("three columns"));

        let err = parse_scores_text("a b 0.5 extra\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_non_numeric_score_is_an_error() {
        let err = parse_scores_text("a b high\n").unwrap_err();
        assert!(err.to_string().contains("Invalid score"));
    }

    #[test]
    fn test_duplicate_pair_keeps_last_score() {
        let scores = parse_scores_text("a b 0.5\nb a 0.9\n").unwrap();
        assert_eq!(scores[&("a".to_string(), "b".to_string())], 0.9);
    }
}
