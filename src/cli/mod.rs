//! Command-line interface for cluster-compare.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **compare**: Compare two clustering JSON files and print ARI/NMI scores
//! - **convert**: Convert a two-column text clustering to the JSON format
//! - **scores**: Align two pairwise NC-score files into one paired table
//!
//! ## Usage
//!
//! ```text
//! # Compare two clusterings
//! cluster-compare compare uniref_components.json orthogroups.json
//!
//! # Also report clusters of the first file broken up in the second
//! cluster-compare compare truth.json predicted.json -c
//!
//! # JSON output for scripting
//! cluster-compare compare truth.json predicted.json --format json
//!
//! # Convert a "cluster-id  seq-id" text file to JSON
//! cluster-compare convert families.txt --cluster-column left > families.json
//!
//! # Pair up two NC-score files for plotting
//! cluster-compare scores nc_a.txt nc_b.txt --output paired.tsv
//! ```

use clap::{Parser, Subcommand};

pub mod compare;
pub mod convert;
pub mod scores;

#[derive(Parser)]
#[command(name = "cluster-compare")]
#[command(author = "Jon Bryder")]
#[command(version)]
#[command(about = "Compare sequence clusterings produced by different tools")]
#[command(
    long_about = "cluster-compare measures how well two clusterings of the same sequences agree.\n\nIt reads clusterings stored as JSON (either a 'components' list of lists or an orthogroups cluster-id-to-members object), matches sequences across the two files after stripping species prefixes, and reports:\n- Adjusted Rand Score and Normalized Mutual Information over the common sequences\n- Optionally, per-cluster entropy/purity/Gini impurity to flag clusters of the first file that are broken up in the second"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two clusterings stored in a JSON format
    Compare(compare::CompareArgs),

    /// Convert a two-column text clustering to the JSON format
    Convert(convert::ConvertArgs),

    /// Pair up NC scores computed in different ways
    Scores(scores::ScoresArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
