use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::parsing::text::{parse_two_column_file, ClusterColumn};

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to text file with two whitespace-delimited columns, one
    /// cluster-id/sequence-id pair per line
    #[arg(required = true)]
    pub input: PathBuf,

    /// Which column holds the cluster id
    #[arg(long, value_enum)]
    pub cluster_column: ClusterColumn,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let groups = parse_two_column_file(&args.input, args.cluster_column)
        .with_context(|| format!("could not read clustering from {}", args.input.display()))?;

    eprintln!(
        "  {} clusters read from {}",
        groups.len(),
        args.input.display()
    );

    let object: serde_json::Map<String, serde_json::Value> = groups
        .into_iter()
        .map(|(cluster_id, members)| (cluster_id, serde_json::Value::from(members)))
        .collect();

    println!("{}", serde_json::to_string(&serde_json::Value::Object(object))?);
    Ok(())
}
