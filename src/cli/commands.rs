//! Command implementations for the Kotoba CLI.

use std::fs;
use std::path::Path;

use crate::analysis::definition::AnalyzerDefinition;
use crate::autocomplete::{
    expand_index_tokens, expand_query_tokens, AutocompleteConfig, AutocompleteKind,
};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::{AnalysisEngine, AnalyzeRequest, AnalyzerSelector};
use crate::error::Result;
use crate::registry::available_analyzers;

/// Execute a CLI command.
pub fn execute_command(args: KotobaArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
        Command::Compare(compare_args) => compare_texts(compare_args.clone(), &args),
        Command::Analyzers(list_args) => list_analyzers(list_args.clone(), &args),
    }
}

/// Build a selector from a preset name or a definition file.
fn load_selector(name: &str, definition_file: Option<&Path>) -> Result<AnalyzerSelector> {
    match definition_file {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            Ok(AnalyzerSelector::Inline(AnalyzerDefinition::from_json(
                &json,
            )?))
        }
        None => Ok(AnalyzerSelector::Name(name.to_string())),
    }
}

fn autocomplete_config(kind: ExpansionKind, min_grams: usize, max_grams: usize) -> AutocompleteConfig {
    AutocompleteConfig {
        kind: match kind {
            ExpansionKind::EdgeGram => AutocompleteKind::EdgeGram,
            ExpansionKind::NGram => AutocompleteKind::NGram,
        },
        min_grams,
        max_grams,
    }
}

/// Analyze one text and print its tokens.
fn analyze_text(args: AnalyzeArgs, cli_args: &KotobaArgs) -> Result<()> {
    let engine = AnalysisEngine::new();
    let selector = load_selector(&args.analyzer, args.definition_file.as_deref())?;

    let tokens = if args.autocomplete {
        let config = autocomplete_config(args.kind, args.min_grams, args.max_grams);
        let analyzer = engine.resolve(&selector)?;
        if args.query_side {
            expand_query_tokens(analyzer.as_ref(), &args.text, &config)?
        } else {
            expand_index_tokens(analyzer.as_ref(), &args.text, &config)?
        }
    } else {
        engine.analyze_text(&selector, &args.text)?
    };

    output_result(
        &AnalysisResult {
            analyzer: selector.display_name().to_string(),
            tokens,
        },
        cli_args,
    )
}

/// Compare index-side and query-side analyses of two texts.
fn compare_texts(args: CompareArgs, cli_args: &KotobaArgs) -> Result<()> {
    let engine = AnalysisEngine::new();

    let request = AnalyzeRequest {
        index_text: args.index_text,
        query_text: args.query_text,
        index_analyzer: load_selector(&args.index_analyzer, args.index_definition_file.as_deref())?,
        query_analyzer: load_selector(&args.query_analyzer, args.query_definition_file.as_deref())?,
        use_autocomplete: args.autocomplete,
        autocomplete: autocomplete_config(args.kind, args.min_grams, args.max_grams),
    };

    let response = engine.analyze(&request)?;
    output_result(&response, cli_args)
}

/// List built-in analyzer presets.
fn list_analyzers(args: AnalyzersArgs, cli_args: &KotobaArgs) -> Result<()> {
    let mut analyzers = available_analyzers();
    if !args.all {
        analyzers.retain(|detail| detail.available);
    }

    output_result(&AnalyzerListing { analyzers }, cli_args)
}
