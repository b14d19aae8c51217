use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::compare::agreement::AgreementScores;
use crate::compare::contingency::{broken_clusters, BrokenCluster, ContingencyMatrix};
use crate::compare::reconcile::{reconcile, ReconcileError, Reconciliation};
use crate::core::clustering::{ClusterAssignments, Clustering};
use crate::parsing::json::load_clustering;

#[derive(Args)]
pub struct CompareArgs {
    /// Path to JSON file containing clusters
    #[arg(required = true)]
    pub jsonfile1: PathBuf,

    /// Another path to a JSON file containing clusters
    #[arg(required = true)]
    pub jsonfile2: PathBuf,

    /// Compute a contingency matrix and analyze the differences between the
    /// input clusters, treating the first file as the true clustering
    #[arg(short = 'c', long = "contingency")]
    pub contingency: bool,
}

pub fn run(args: CompareArgs, format: OutputFormat) -> anyhow::Result<()> {
    let clustering1 = load_clustering(&args.jsonfile1)?;
    let clustering2 = load_clustering(&args.jsonfile2)?;

    eprintln!("\nProcessing file 1...");
    let inv1 = invert_with_notes(&clustering1);

    eprintln!("Processing file 2...");
    let inv2 = invert_with_notes(&clustering2);

    eprintln!("\nComparing clusterings...");
    let rec = match reconcile(&inv1, &inv2) {
        Ok(rec) => rec,
        Err(err) => {
            // The exclusivity counts still aid debugging, so report them
            // before failing
            let ReconcileError::NoCommonSequences {
                only_in_first,
                only_in_second,
            } = &err;
            print_exclusive_counts(*only_in_first, *only_in_second);
            return Err(err.into());
        }
    };

    print_exclusive_counts(rec.only_in_first, rec.only_in_second);
    eprintln!("  Sequences in common: {}", rec.sequences.len());

    let matrix = ContingencyMatrix::from_labels(&rec.labels_first, &rec.labels_second);
    let scores = AgreementScores::from_matrix(&matrix);
    let broken = args.contingency.then(|| broken_clusters(&matrix));

    match format {
        OutputFormat::Text => print_text(&scores, broken.as_deref()),
        OutputFormat::Json => print_json(&args, &rec, &scores, broken.as_deref())?,
        OutputFormat::Tsv => print_tsv(&scores, broken.as_deref()),
    }

    Ok(())
}

/// Invert a clustering, reporting the sequence count and how many members
/// collapsed onto an already-seen id (duplicates, or distinct spellings that
/// normalize to the same sequence).
fn invert_with_notes(clustering: &Clustering) -> ClusterAssignments {
    let members = clustering.member_count();
    let inverted = clustering.invert();
    eprintln!("  {} sequences found", inverted.len());
    if members > inverted.len() {
        eprintln!(
            "  Note: {} duplicate members collapsed",
            members - inverted.len()
        );
    }
    inverted
}

fn print_exclusive_counts(only_in_first: usize, only_in_second: usize) {
    if only_in_first > 0 {
        eprintln!("  Note: {only_in_first} sequences only in file 1 (excluded)");
    }
    if only_in_second > 0 {
        eprintln!("  Note: {only_in_second} sequences only in file 2 (excluded)");
    }
}

fn print_text(scores: &AgreementScores, broken: Option<&[BrokenCluster]>) {
    println!("\nAdjusted Rand Score   : {:.4}", scores.adjusted_rand);
    println!(
        "Normalized Mutual Info: {:.4}",
        scores.normalized_mutual_info
    );

    if let Some(broken) = broken {
        print_broken_table(broken);
    }
}

fn print_broken_table(broken: &[BrokenCluster]) {
    let header_label = "Cluster";
    let label_width = broken
        .iter()
        .map(|b| b.label.len())
        .chain(std::iter::once(header_label.len()))
        .max()
        .unwrap_or(header_label.len());

    println!(
        "{header_label:<label_width$}  Entropy  Purity  Gini  Only \"broken\" clusters reported"
    );
    for b in broken {
        println!(
            "{:<label_width$}  {:.4}  {:.4}  {:.4}",
            b.label, b.entropy, b.purity, b.gini
        );
    }
}

fn print_json(
    args: &CompareArgs,
    rec: &Reconciliation,
    scores: &AgreementScores,
    broken: Option<&[BrokenCluster]>,
) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "file1": args.jsonfile1.display().to_string(),
        "file2": args.jsonfile2.display().to_string(),
        "sequences_in_common": rec.sequences.len(),
        "only_in_file1": rec.only_in_first,
        "only_in_file2": rec.only_in_second,
        "scores": scores,
    });

    if let Some(broken) = broken {
        output["broken_clusters"] = serde_json::to_value(broken)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(scores: &AgreementScores, broken: Option<&[BrokenCluster]>) {
    println!("adjusted_rand_score\tnormalized_mutual_info");
    println!(
        "{:.4}\t{:.4}",
        scores.adjusted_rand, scores.normalized_mutual_info
    );

    if let Some(broken) = broken {
        println!("\ncluster\tentropy\tpurity\tgini");
        for b in broken {
            println!("{}\t{:.4}\t{:.4}\t{:.4}", b.label, b.entropy, b.purity, b.gini);
        }
    }
}
