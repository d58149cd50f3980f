// src/main.rs — tooljudge entry point

use clap::Parser;
use std::path::Path;

use tooljudge::cli::{Cli, Commands};
use tooljudge::infra::config::Config;
use tooljudge::infra::logger;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        Commands::Eval {
            predicted,
            reference,
            grader,
        } => {
            let grader = grader.build(&config.grader)?;
            tooljudge::cli::eval::run_eval(&predicted, &reference, &grader).await
        }
        Commands::Batch {
            dataset,
            max_concurrency,
            grader,
        } => {
            let grader = grader.build(&config.grader)?;
            let max_concurrency = max_concurrency.unwrap_or(config.runner.max_concurrency);
            tooljudge::cli::batch::run_batch(&dataset, grader, max_concurrency).await
        }
        Commands::Describe => tooljudge::cli::describe::show_description(),
    }
}
