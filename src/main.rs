use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod catalog;
mod classify;
mod fields;
mod merge;
mod photos;
mod types;
mod utils;

pub const DATABASE_FILE: &str = "data/hotwheels_database.json";
pub const DISCOVERED_FILE: &str = "data/discovered-series.json";
pub const FILTERED_FILE: &str = "data/filtered-series.json";

#[derive(Parser)]
#[command(name = "hotwheels-data")]
#[command(about = "Reports and series-list cleanup for the Hot Wheels dataset")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read-only reports over the vehicle database
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },
    /// Build the list of wiki series pages to scrape
    Series {
        #[command(subcommand)]
        action: SeriesAction,
    },
}

#[derive(Subcommand)]
enum ReportAction {
    /// Photo URL coverage and samples
    Photos {
        /// Vehicle database JSON file
        #[arg(short, long, default_value = DATABASE_FILE)]
        input: PathBuf,
    },
    /// Segment and series frequency tables
    Series {
        /// Vehicle database JSON file
        #[arg(short, long, default_value = DATABASE_FILE)]
        input: PathBuf,
        /// Also write the full series table as CSV
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum SeriesAction {
    /// Classify discovered page names and keep the series pages
    Filter {
        /// Discovered names JSON file (with an allSeries array)
        #[arg(short, long, default_value = DISCOVERED_FILE)]
        input: PathBuf,
        /// Output filtered-series JSON file
        #[arg(short, long, default_value = FILTERED_FILE)]
        output: PathBuf,
        /// Quiet mode - don't list every series name
        #[arg(short, long)]
        quiet: bool,
    },
    /// Merge the filtered list with the curated catalog
    Merge {
        /// Filtered-series JSON file to merge into
        #[arg(short, long, default_value = FILTERED_FILE)]
        input: PathBuf,
        /// Output merged JSON file
        #[arg(short, long, default_value = FILTERED_FILE)]
        output: PathBuf,
        /// Quiet mode - don't list newly added names
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { action } => match action {
            ReportAction::Photos { input } => photos::run_photos(&input),
            ReportAction::Series { input, csv } => fields::run_fields(&input, csv.as_deref()),
        },
        Commands::Series { action } => match action {
            SeriesAction::Filter { input, output, quiet } => classify::run_filter(&input, &output, quiet),
            SeriesAction::Merge { input, output, quiet } => merge::run_merge(&input, &output, quiet),
        },
    }
}
