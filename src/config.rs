use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How the route report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Finds the cheapest route between two locations of a weighted directed graph.
///
/// The problem is read as whitespace separated tokens: `<nodes> <edges>`,
/// then one `<from> <to> <weight>` triple per edge, then `<source> <target>`.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct PlannerConfig {
    /// Read the problem from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format of the route report
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl PlannerConfig {
    /// Default log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            input: None,
            format: OutputFormat::Text,
            verbose: false,
        }
    }
}
