//! Command line configuration

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Rendering of query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `LAST FIRST : PHONE` line per record
    Text,
    /// One JSON object per query
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "dirstore")]
#[command(about = "In-memory directory with scan, binary search and hash index lookups")]
pub struct Config {
    /// Number of random records to generate
    pub records: usize,

    /// Seed for record generation, random when absent
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}
