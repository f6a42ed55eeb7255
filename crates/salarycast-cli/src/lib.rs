//! Salarycast CLI Library
//!
//! This crate provides the command-line interface for salarycast:
//!
//! - **Predict**: one-shot salary prediction from job attributes
//! - **Analyze**: aggregate market analysis over the salary dataset
//! - **Inspect**: show a model export's version, metadata and schema
//!
//! # Example
//!
//! ```bash
//! # Predict a salary
//! salarycast predict --model-dir /models/salary-rf \
//!     --experience SE --employment FT --job-title "Data Scientist" \
//!     --company-size L --company-location US --residence IN \
//!     --remote 50 --year 2024 --currency both
//!
//! # Market analysis
//! salarycast analyze --data clean_data.csv --report experience
//!
//! # Inspect a model export
//! salarycast inspect --model-dir /models/salary-rf
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{AnalyzeCommand, InspectCommand, PredictCommand};

/// Salarycast - salary prediction from job attributes
///
/// Serves predictions from a pre-trained regression model export and
/// computes aggregate market analysis over the cleaned salary dataset.
#[derive(Parser, Debug)]
#[command(name = "salarycast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict an annual salary for one set of job attributes
    Predict(PredictCommand),

    /// Aggregate market analysis over the salary dataset
    Analyze(AnalyzeCommand),

    /// Show a model export's version, metadata and feature schema
    Inspect(InspectCommand),
}

/// Result type alias for CLI operations
pub type CliResult<T> = anyhow::Result<T>;
