use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "water-chemistry-etl")]
#[command(about = "Normalizes water-quality exports into a unified chemistry schema")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Suppress progress output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Inputs shared by `process` and `validate`
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[arg(short, long, help = "Built-in source name (wqp) or a JSON mapping file")]
    pub source: String,

    #[arg(long, help = "Station export (.csv, .tsv, .txt or .zip)")]
    pub stations: Option<PathBuf>,

    #[arg(long, help = "Result export (.csv, .tsv, .txt or .zip)")]
    pub results: Option<PathBuf>,

    #[arg(short, long, help = "Settings file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Worker threads for charge balancing [default: CPU count]")]
    pub max_workers: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a source and write SQL insert scripts
    Process {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(short, long, help = "Output directory [default: output]")]
        output_dir: Option<PathBuf>,

        #[arg(short, long, help = "Rows per INSERT statement [default: 500]")]
        batch_size: Option<usize>,

        #[arg(long, default_value = "false")]
        validate_only: bool,
    },

    /// Normalize a source and print the quality report only
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show how a chemical and unit are normalized
    Lookup {
        chemical: String,

        #[arg(short, long)]
        unit: Option<String>,

        #[arg(short, long)]
        amount: Option<f64>,
    },
}
