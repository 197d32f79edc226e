//! Integration tests for the analysis engine and preset registry.

use kotoba::analysis::definition::AnalyzerDefinition;
use kotoba::autocomplete::{AutocompleteConfig, AutocompleteKind};
use kotoba::engine::{AnalysisEngine, AnalyzeRequest, AnalyzerSelector};
use kotoba::error::KotobaError;
use kotoba::registry::{available_analyzers, resolve_preset};

fn request(index_text: &str, query_text: &str) -> AnalyzeRequest {
    AnalyzeRequest {
        index_text: index_text.to_string(),
        query_text: query_text.to_string(),
        index_analyzer: AnalyzerSelector::Name("standard".to_string()),
        query_analyzer: AnalyzerSelector::Name("standard".to_string()),
        use_autocomplete: false,
        autocomplete: AutocompleteConfig::default(),
    }
}

#[test]
fn test_lowercasing_presets_match_across_case() {
    // Index "quick fox" against query "Fox" with lowercasing pipelines.
    let engine = AnalysisEngine::new();
    let response = engine.analyze(&request("quick fox", "Fox")).unwrap();

    assert_eq!(response.matching_tokens, vec!["fox"]);
    assert_eq!(response.analyzer_used, "standard");

    let fox = response
        .index_tokens
        .iter()
        .find(|t| t.text == "fox")
        .unwrap();
    assert!(fox.matched);
    let quick = response
        .index_tokens
        .iter()
        .find(|t| t.text == "quick")
        .unwrap();
    assert!(!quick.matched);
}

#[test]
fn test_unknown_preset_is_not_cached() {
    let engine = AnalysisEngine::new();
    let mut bad = request("a", "b");
    bad.index_analyzer = AnalyzerSelector::Name("lucene.klingon".to_string());

    match engine.analyze(&bad) {
        Err(KotobaError::UnknownAnalyzer(name)) => assert_eq!(name, "lucene.klingon"),
        other => panic!("expected UnknownAnalyzer, got {other:?}"),
    }
    assert!(engine.cache().is_empty());
}

#[test]
fn test_autocomplete_asymmetry_end_to_end() {
    // min=3 keeps 2-character fragments out of the index side, so the
    // short query "ca" does not match "cat".
    let engine = AnalysisEngine::new();
    let mut autocomplete_request = request("cat", "ca");
    autocomplete_request.use_autocomplete = true;
    autocomplete_request.autocomplete = AutocompleteConfig {
        kind: AutocompleteKind::EdgeGram,
        min_grams: 3,
        max_grams: 5,
    };

    let response = engine.analyze(&autocomplete_request).unwrap();
    assert!(response.matching_tokens.is_empty());

    // A three-character query matches the stored prefix.
    let mut matching = request("catalog", "cat");
    matching.use_autocomplete = true;
    matching.autocomplete = AutocompleteConfig {
        kind: AutocompleteKind::EdgeGram,
        min_grams: 3,
        max_grams: 5,
    };
    let response = engine.analyze(&matching).unwrap();
    assert!(response.matching_tokens.contains(&"cat".to_string()));
}

#[test]
fn test_inline_definitions_compile_once() {
    let engine = AnalysisEngine::new();
    let definition = AnalyzerDefinition::from_json(
        r#"{
            "tokenizer": { "type": "whitespace" },
            "tokenFilters": [{ "type": "lowercase" }]
        }"#,
    )
    .unwrap();

    let mut req = request("Alpha Beta", "beta");
    req.index_analyzer = AnalyzerSelector::Inline(definition.clone());
    req.query_analyzer = AnalyzerSelector::Inline(definition);

    engine.analyze(&req).unwrap();
    engine.analyze(&req).unwrap();
    assert_eq!(engine.cache().len(), 1);
}

#[test]
fn test_mixed_selectors() {
    let engine = AnalysisEngine::new();
    let keyword = AnalyzerDefinition::from_json(r#"{ "tokenizer": { "type": "keyword" } }"#)
        .unwrap();

    let mut req = request("quick brown fox", "quick brown fox");
    req.index_analyzer = AnalyzerSelector::Inline(keyword);

    // Index side keeps the phrase whole; the standard query side splits
    // it, so nothing matches.
    let response = engine.analyze(&req).unwrap();
    assert!(response.matching_tokens.is_empty());
    assert_eq!(response.index_tokens.len(), 1);
    assert_eq!(response.query_tokens.len(), 3);
}

#[test]
fn test_request_round_trips_through_json() {
    let json = r#"{
        "indexText": "hello world",
        "queryText": "hello",
        "indexAnalyzer": "standard",
        "queryAnalyzer": { "tokenizer": { "type": "whitespace" } },
        "useAutocomplete": true,
        "autocomplete": { "kind": "nGram", "minGrams": 2, "maxGrams": 8 }
    }"#;

    let request: AnalyzeRequest = serde_json::from_str(json).unwrap();
    assert_eq!(
        request.index_analyzer,
        AnalyzerSelector::Name("standard".to_string())
    );
    assert!(matches!(
        request.query_analyzer,
        AnalyzerSelector::Inline(_)
    ));
    assert_eq!(request.autocomplete.kind, AutocompleteKind::NGram);

    let engine = AnalysisEngine::new();
    let response = engine.analyze(&request).unwrap();
    let round_tripped: kotoba::engine::AnalyzeResponse =
        serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
    assert_eq!(response, round_tripped);
}

#[test]
fn test_language_presets_resolve_and_stem() {
    let analyzer = resolve_preset("french").unwrap();
    let tokens = kotoba::analysis::analyzer::token_texts(analyzer.as_ref(), "Les maisons")
        .unwrap();
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_listing_is_stable_and_marks_availability() {
    let first = available_analyzers();
    let second = available_analyzers();
    assert_eq!(first, second);

    assert!(first.iter().any(|d| d.name == "standard" && d.available));
    assert!(first.iter().any(|d| !d.available));
}
