//! `cpm` - Critical Path Method analysis of a CSV project schedule.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rust_decimal::Decimal;

use cpm_rust::csv_io::{export_schedule, load_records};
use cpm_rust::report::{format_critical_path, format_number, format_table};
use cpm_rust::{analyze_with_config, AnalysisConfig};

#[derive(Parser)]
#[command(name = "cpm")]
#[command(about = "Critical Path Method analysis for project schedules")]
#[command(version)]
struct Cli {
    /// CSV file with Task, Duration and Predecessors columns
    file: PathBuf,

    /// Field delimiter
    #[arg(short, long, default_value_t = ';')]
    delimiter: char,

    /// Directory for the timestamped CSV export
    #[arg(short, long, default_value = "outputs")]
    output_dir: PathBuf,

    /// Skip the CSV export
    #[arg(long)]
    no_export: bool,

    /// Absolute tolerance when testing slack against zero
    #[arg(long, default_value_t = Decimal::ZERO)]
    slack_tolerance: Decimal,

    /// Maximum number of critical chains to list
    #[arg(long)]
    max_paths: Option<usize>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.file.exists() {
        bail!(
            "The file '{}' was not found. Check the name or path.",
            cli.file.display()
        );
    }
    if !cli.delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character");
    }
    if cli.slack_tolerance < Decimal::ZERO {
        bail!("Slack tolerance must be non-negative");
    }
    let delimiter = cli.delimiter as u8;

    let config = AnalysisConfig {
        slack_tolerance: cli.slack_tolerance,
        max_critical_paths: cli.max_paths,
        verbosity: cli.verbose,
    };

    let records = load_records(&cli.file, delimiter)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let result = analyze_with_config(&records, &config)
        .with_context(|| format!("Failed to analyze {}", cli.file.display()))?;

    println!("{}", format_table(&result));
    println!("Project duration: {}", format_number(result.project_duration));
    println!("{}", format_critical_path(&result));

    if !cli.no_export {
        let timestamp = chrono::Local::now().naive_local();
        let path = export_schedule(&result, &cli.output_dir, delimiter, timestamp)
            .with_context(|| format!("Failed to export to {}", cli.output_dir.display()))?;
        println!("CPM results exported to {}", path.display());
    }

    Ok(())
}
