use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod compare;
mod core;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("cluster_compare=debug,info")
    } else {
        EnvFilter::new("cluster_compare=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Compare(args) => {
            cli::compare::run(args, cli.format)?;
        }
        cli::Commands::Convert(args) => {
            cli::convert::run(args)?;
        }
        cli::Commands::Scores(args) => {
            cli::scores::run(args)?;
        }
    }

    Ok(())
}
