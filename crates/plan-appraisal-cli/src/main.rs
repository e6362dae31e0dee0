mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::advisory::AdvisoryArgs;
use commands::appraise::AppraiseArgs;
use commands::extract::ExtractArgs;
use commands::metrics::MetricsArgs;
use commands::schedule::ScheduleArgs;

/// Loan-purpose business plan appraisal
#[derive(Parser)]
#[command(
    name = "pasdv",
    version,
    about = "Appraise a borrower's loan-purpose business plan",
    long_about = "Extracts identity, loan-term, income and collateral fields from a \
                  semi-structured plan document, builds the monthly amortization \
                  schedule, and derives credit ratios with a composite \
                  creditworthiness score."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a loan application from a plan document
    Extract(ExtractArgs),
    /// Build the monthly amortization schedule
    Schedule(ScheduleArgs),
    /// Compute credit ratios and the composite score
    Metrics(MetricsArgs),
    /// Full appraisal: extraction, schedule, metrics, gauges
    Appraise(AppraiseArgs),
    /// Build the natural-language advisory request
    AdvisoryPrompt(AdvisoryArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Extract(args) => commands::extract::run_extract(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Metrics(args) => commands::metrics::run_metrics(args),
        Commands::Appraise(args) => commands::appraise::run_appraise(args),
        Commands::AdvisoryPrompt(args) => commands::advisory::run_advisory(args),
        Commands::Version => {
            println!("pasdv {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
