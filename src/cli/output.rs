//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{KotobaArgs, OutputFormat};
use crate::engine::AnalyzeResponse;
use crate::error::Result;
use crate::matcher::TokenInfo;
use crate::registry::AnalyzerDetail;

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analyzer: String,
    pub tokens: Vec<String>,
}

/// Result structure for the analyzers command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzerListing {
    pub analyzers: Vec<AnalyzerDetail>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanDisplay>(result: &T, args: &KotobaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_json<T: Serialize>(result: &T, args: &KotobaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Human-readable rendering of a command result.
pub trait HumanDisplay {
    fn print_human(&self, args: &KotobaArgs);
}

impl HumanDisplay for AnalysisResult {
    fn print_human(&self, args: &KotobaArgs) {
        if args.verbosity() > 1 {
            println!("Analyzer: {}", self.analyzer);
        }
        for token in &self.tokens {
            println!("{token}");
        }
        if args.verbosity() > 0 {
            println!();
            println!("{} tokens", self.tokens.len());
        }
    }
}

impl HumanDisplay for AnalyzeResponse {
    fn print_human(&self, args: &KotobaArgs) {
        if args.verbosity() > 1 {
            println!("Analyzer: {}", self.analyzer_used);
            println!();
        }

        println!("Index tokens:");
        print_token_list(&self.index_tokens);
        println!();
        println!("Query tokens:");
        print_token_list(&self.query_tokens);
        println!();

        if self.matching_tokens.is_empty() {
            println!("No matching tokens.");
        } else {
            println!("Matching: {}", self.matching_tokens.join(", "));
        }
    }
}

fn print_token_list(tokens: &[TokenInfo]) {
    for token in tokens {
        let marker = if token.matched { "*" } else { " " };
        println!("  {marker} {}", token.text);
    }
}

impl HumanDisplay for AnalyzerListing {
    fn print_human(&self, _args: &KotobaArgs) {
        for detail in &self.analyzers {
            let category = match detail.category {
                crate::registry::PresetCategory::Base => "base",
                crate::registry::PresetCategory::Language => "language",
            };
            if detail.available {
                println!("{:<12} {category}", detail.name);
            } else {
                println!("{:<12} {category} (not yet supported)", detail.name);
            }
        }
    }
}
