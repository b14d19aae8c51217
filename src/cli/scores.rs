use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::parsing::scores::{parse_scores_file, ScoreKey};

#[derive(Args)]
pub struct ScoresArgs {
    /// Path to NC-score file (id1 id2 value per line)
    #[arg(required = true)]
    pub nc1: PathBuf,

    /// Another path to an NC-score file
    #[arg(required = true)]
    pub nc2: PathBuf,

    /// Write the paired-score table to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ScoresArgs) -> anyhow::Result<()> {
    let scores1 = parse_scores_file(&args.nc1)
        .with_context(|| format!("could not read NC scores from {}", args.nc1.display()))?;
    let scores2 = parse_scores_file(&args.nc2)
        .with_context(|| format!("could not read NC scores from {}", args.nc2.display()))?;

    let rows = pair_scores(&scores1, &scores2);

    let joint = rows
        .iter()
        .filter(|(_, a, b)| a.is_some() && b.is_some())
        .count();
    eprintln!("  Pairs in both files: {joint}");
    eprintln!("  Pairs only in file 1: {}", scores1.len() - joint);
    eprintln!("  Pairs only in file 2: {}", scores2.len() - joint);

    // Missing pairs score 0.0 on the side that lacks them, so the paired
    // table covers every pair seen in either file
    let x: Vec<f64> = rows.iter().map(|(_, a, _)| a.unwrap_or(0.0)).collect();
    let y: Vec<f64> = rows.iter().map(|(_, _, b)| b.unwrap_or(0.0)).collect();
    if let Some(r) = pearson(&x, &y) {
        eprintln!("  Pearson correlation : {r:.4}");
    }

    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("could not create {}", path.display()))?;
            write_table(std::io::BufWriter::new(file), &rows)?;
        }
        None => write_table(std::io::stdout().lock(), &rows)?,
    }

    Ok(())
}

type PairedRow = (ScoreKey, Option<f64>, Option<f64>);

/// Align two pair→score maps over the union of their pair sets, sorted by
/// pair for reproducible output.
fn pair_scores(
    scores1: &HashMap<ScoreKey, f64>,
    scores2: &HashMap<ScoreKey, f64>,
) -> Vec<PairedRow> {
    let mut pairs: Vec<&ScoreKey> = scores1.keys().chain(scores2.keys()).collect();
    pairs.sort_unstable();
    pairs.dedup();

    pairs
        .into_iter()
        .map(|pair| {
            (
                pair.clone(),
                scores1.get(pair).copied(),
                scores2.get(pair).copied(),
            )
        })
        .collect()
}

fn write_table(mut out: impl Write, rows: &[PairedRow]) -> anyhow::Result<()> {
    writeln!(out, "id_a\tid_b\tscore_1\tscore_2")?;
    for ((left, right), a, b) in rows {
        writeln!(
            out,
            "{left}\t{right}\t{}\t{}",
            a.unwrap_or(0.0),
            b.unwrap_or(0.0)
        )?;
    }
    Ok(())
}

/// Pearson correlation coefficient; `None` when either side has zero
/// variance or fewer than two points.
fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = x.len() as f64;
    let mean_x: f64 = x.iter().sum::<f64>() / n;
    let mean_y: f64 = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x * var_y).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(a: &str, b: &str) -> ScoreKey {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_pairing_fills_missing_sides_with_none() {
        let scores1: HashMap<_, _> =
            [(key("a", "b"), 0.9), (key("a", "c"), 0.5)].into_iter().collect();
        let scores2: HashMap<_, _> =
            [(key("a", "b"), 0.8), (key("b", "c"), 0.3)].into_iter().collect();

        let rows = pair_scores(&scores1, &scores2);
        assert_eq!(rows.len(), 3);
        // Sorted by pair: (a,b), (a,c), (b,c)
        assert_eq!(rows[0], (key("a", "b"), Some(0.9), Some(0.8)));
        assert_eq!(rows[1], (key("a", "c"), Some(0.5), None));
        assert_eq!(rows[2], (key("b", "c"), None, Some(0.3)));
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 4.0, 6.0];
        let r = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-12);

        let inverted: Vec<f64> = y.iter().map(|v| -v).collect();
        let r = pearson(&x, &inverted).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_undefined_for_constant_input() {
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_none());
        assert!(pearson(&[1.0], &[2.0]).is_none());
    }
}
