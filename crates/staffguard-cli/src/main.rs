mod errors;
mod parser;
mod rules_doc;
mod runner;
mod writer;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

/// Output format for pipeline results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Print results to standard output (human-readable)
    Stdout,
    /// Output results in JSON format
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "staffguard",
    version,
    about = "StaffGuard CLI - Employee records validation and reporting",
    long_about = "StaffGuard loads an employee CSV, validates every record, computes \
                  salary, city and remote-work summaries, flags likely duplicates and \
                  writes a clean JSON snapshot used to join sales data by department.\n\n\
                  Example usage:\n  \
                  staffguard --config staffguard.toml run --report reports/\n  \
                  staffguard kpi --workbook sales.xlsx"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "stdout", global = true)]
    pub output: OutputFormat,

    /// Enable debug logging and full error chains
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load, validate and summarize the employee source, then write the clean snapshot
    Run {
        /// Employee CSV, overrides `pipeline.source`
        #[arg(long, value_name = "FILE")]
        source: Option<String>,
        /// Clean snapshot path, overrides `pipeline.clean_snapshot`
        #[arg(long, value_name = "FILE")]
        snapshot: Option<String>,
        /// Fail when the clean snapshot cannot be written
        #[arg(long)]
        strict: bool,
        /// Also write the JSON report to this file or directory
        #[arg(long, value_name = "PATH")]
        report: Option<String>,
    },
    /// Build the employee to department map and join the sales workbook
    Kpi {
        /// Employee CSV used when the snapshot is unusable
        #[arg(long, value_name = "FILE")]
        source: Option<String>,
        /// Clean snapshot path
        #[arg(long, value_name = "FILE")]
        snapshot: Option<String>,
        /// Sales workbook, overrides `sales.workbook`
        #[arg(long, value_name = "FILE")]
        workbook: Option<String>,
    },
    /// Describe the record rules
    Rules,
}

fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .try_init()
        .ok();
}

fn main() {
    let args = Args::parse();
    let debug = args.debug;
    init_logger(debug);

    if let Err(err) = runner::run(args) {
        if debug {
            eprintln!("Error: {:?}", err);
        } else {
            eprintln!("Error: {:#}", err);
            eprintln!("\nHint: Run with --debug flag for the full error chain");
        }
        std::process::exit(1);
    }
}
