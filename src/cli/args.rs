//! Command line argument parsing for the Kotoba CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Kotoba - a flexible text analysis library
#[derive(Parser, Debug, Clone)]
#[command(name = "kotoba")]
#[command(about = "A flexible text analysis toolkit for Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KotobaArgs {
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KotobaArgs {
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
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text for reading in a terminal
    Human,
    /// JSON for piping into other tools
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run one text through an analyzer and print the tokens
    Analyze(AnalyzeArgs),

    /// Analyze an index text and a query text and show the overlap
    Compare(CompareArgs),

    /// List the built-in analyzer presets
    Analyzers(AnalyzersArgs),
}

/// Arguments for analyzing a single text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// The text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Preset analyzer name
    #[arg(short, long, default_value = "standard", conflicts_with = "definition_file")]
    pub analyzer: String,

    /// Analyzer definition file (JSON) instead of a preset
    #[arg(short, long = "definition", value_name = "DEFINITION_FILE")]
    pub definition_file: Option<PathBuf>,

    /// Apply autocomplete expansion
    #[arg(long)]
    pub autocomplete: bool,

    /// Expand as the query side (truncation only) instead of the index side
    #[arg(long, requires = "autocomplete")]
    pub query_side: bool,

    /// Autocomplete expansion strategy
    #[arg(long, value_enum, default_value = "edge-gram", requires = "autocomplete")]
    pub kind: ExpansionKind,

    /// Minimum gram length
    #[arg(long, default_value = "3", requires = "autocomplete")]
    pub min_grams: usize,

    /// Maximum gram length
    #[arg(long, default_value = "15", requires = "autocomplete")]
    pub max_grams: usize,
}

/// Arguments for comparing index and query analyses
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// The text analyzed on the index side
    #[arg(value_name = "INDEX_TEXT")]
    pub index_text: String,

    /// The text analyzed on the query side
    #[arg(value_name = "QUERY_TEXT")]
    pub query_text: String,

    /// Preset analyzer for the index side
    #[arg(long, default_value = "standard", conflicts_with = "index_definition_file")]
    pub index_analyzer: String,

    /// Analyzer definition file (JSON) for the index side
    #[arg(long = "index-definition", value_name = "DEFINITION_FILE")]
    pub index_definition_file: Option<PathBuf>,

    /// Preset analyzer for the query side
    #[arg(long, default_value = "standard", conflicts_with = "query_definition_file")]
    pub query_analyzer: String,

    /// Analyzer definition file (JSON) for the query side
    #[arg(long = "query-definition", value_name = "DEFINITION_FILE")]
    pub query_definition_file: Option<PathBuf>,

    /// Apply autocomplete expansion (index side) and truncation (query side)
    #[arg(long)]
    pub autocomplete: bool,

    /// Autocomplete expansion strategy
    #[arg(long, value_enum, default_value = "edge-gram", requires = "autocomplete")]
    pub kind: ExpansionKind,

    /// Minimum gram length
    #[arg(long, default_value = "3", requires = "autocomplete")]
    pub min_grams: usize,

    /// Maximum gram length
    #[arg(long, default_value = "15", requires = "autocomplete")]
    pub max_grams: usize,
}

/// Arguments for listing presets
#[derive(Parser, Debug, Clone)]
pub struct AnalyzersArgs {
    /// Include languages that are listed but not yet supported
    #[arg(long)]
    pub all: bool,
}

/// Autocomplete expansion strategy flag.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionKind {
    /// Prefixes anchored at the start of each shingle
    EdgeGram,
    /// All contiguous substrings within the bounds
    NGram,
}
