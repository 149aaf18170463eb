//! repoprof - GitHub repository health profiler CLI tool
//!
//! Analyzes a GitHub repository and reports activity trends, issue
//! health, top contributors, declared dependencies, a composite health
//! score, and an AI-generated summary.

use clap::Parser;
use repoprof::cli::CliArgs;
use repoprof::github::{Credentials, GithubClient};
use repoprof::narrative::{GeminiGenerator, NarrativeGenerator};
use repoprof::orchestrator::Orchestrator;
use repoprof::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("repoprof v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.repo_url);
    }

    // Fail fast on an unparseable URL before touching the network.
    let repo = args.repo_name()?;
    if args.verbose {
        eprintln!("Repository: {}", repo);
    }

    // Mint the installation token and build the data source.
    let credentials = Credentials::from_env()?;
    let token = credentials.fetch_installation_token().await?;
    let source = Arc::new(GithubClient::new(token)?);

    let narrator: Option<Box<dyn NarrativeGenerator>> = if args.no_summary {
        None
    } else {
        GeminiGenerator::from_env().map(|g| Box::new(g) as Box<dyn NarrativeGenerator>)
    };

    // Run the analysis workflow.
    let orchestrator = Orchestrator::new(args.clone(), source, narrator);
    let result = orchestrator.run().await?;

    // Output the report.
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    // Print degradations in verbose mode.
    if args.verbose && !result.errors.is_empty() {
        eprintln!();
        eprintln!("Degraded fetches:");
        for error in &result.errors {
            eprintln!("  - {}", error);
        }
    }

    if result.errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Partial success - the report was produced from degraded data
        Ok(ExitCode::from(2))
    }
}
