//! Command line argument parsing for the Categorist CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Categorist - an incremental Naive Bayes text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "categorist")]
#[command(about = "An incremental, multi-category Naive Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CategoristArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Classifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "CATEGORIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CategoristArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log level implied by the verbosity flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add categories to a model
    #[command(name = "add-category")]
    AddCategory(AddCategoryArgs),

    /// Train a category with documents
    Train(TrainArgs),

    /// Remove previously trained documents from a category
    Untrain(TrainArgs),

    /// Classify documents
    Classify(ClassifyArgs),

    /// Show model statistics
    Stats(StatsArgs),
}

/// Arguments for adding categories
#[derive(Parser, Debug, Clone)]
pub struct AddCategoryArgs {
    /// Path to the model file (created if missing)
    #[arg(value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// Category names
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

/// Arguments for training and untraining
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the model file
    #[arg(value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// Category to train
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Document texts
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Arguments for classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the model file
    #[arg(value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// Document texts
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Arguments for model statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the model file
    #[arg(value_name = "MODEL_FILE")]
    pub model: PathBuf,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
