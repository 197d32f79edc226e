//! Integration tests for autocomplete expansion.

use kotoba::autocomplete::{
    expand_index_tokens, expand_query_tokens, truncate, AutocompleteConfig, AutocompleteKind,
};
use kotoba::error::KotobaError;
use kotoba::registry::resolve_preset;

fn config(kind: AutocompleteKind, min: usize, max: usize) -> AutocompleteConfig {
    AutocompleteConfig {
        kind,
        min_grams: min,
        max_grams: max,
    }
}

#[test]
fn test_truncation_law() {
    // truncate(t, m) is at most m characters, identity when already short.
    for text in ["a", "token", "a much longer phrase", "日本語のテキスト"] {
        for max in 1..=10 {
            let truncated = truncate(text, max);
            assert!(truncated.chars().count() <= max);
            if text.chars().count() <= max {
                assert_eq!(truncated, text);
            }
        }
    }
}

#[test]
fn test_bounds_validated_before_work() {
    let analyzer = resolve_preset("whitespace").unwrap();
    let bad = config(AutocompleteKind::EdgeGram, 4, 2);

    assert!(matches!(
        expand_index_tokens(analyzer.as_ref(), "text", &bad),
        Err(KotobaError::InvalidAutocompleteBounds { min: 4, max: 2 })
    ));
    assert!(matches!(
        expand_query_tokens(analyzer.as_ref(), "text", &bad),
        Err(KotobaError::InvalidAutocompleteBounds { min: 4, max: 2 })
    ));
}

#[test]
fn test_min_gram_bound_excludes_short_index_fragments() {
    // Edge-gram config min=3, max=5: index side of "cat" has no
    // 2-character fragment, so a query for "ca" finds nothing.
    let analyzer = resolve_preset("standard").unwrap();
    let config = config(AutocompleteKind::EdgeGram, 3, 5);

    let index_tokens = expand_index_tokens(analyzer.as_ref(), "cat", &config).unwrap();
    assert!(index_tokens.contains(&"cat".to_string()));
    assert!(!index_tokens.contains(&"ca".to_string()));

    // The query side still passes the short token through.
    let query_tokens = expand_query_tokens(analyzer.as_ref(), "ca", &config).unwrap();
    assert_eq!(query_tokens, vec!["ca"]);

    // So the intersection is empty.
    let result = kotoba::matcher::compare(&index_tokens, &query_tokens);
    assert!(result.matching_tokens.is_empty());
}

#[test]
fn test_query_side_never_expands() {
    let analyzer = resolve_preset("standard").unwrap();
    let config = config(AutocompleteKind::EdgeGram, 2, 6);

    let tokens = expand_query_tokens(analyzer.as_ref(), "signature", &config).unwrap();
    assert_eq!(tokens, vec!["signat", "signature"]);
}

#[test]
fn test_index_side_shingles_cross_token_boundaries() {
    let analyzer = resolve_preset("standard").unwrap();
    let config = config(AutocompleteKind::EdgeGram, 3, 12);

    let tokens = expand_index_tokens(analyzer.as_ref(), "new york city", &config).unwrap();

    // Unigrams, bigrams and the full trigram are all present.
    assert!(tokens.contains(&"new".to_string()));
    assert!(tokens.contains(&"new york".to_string()));
    assert!(tokens.contains(&"york city".to_string()));
    assert!(tokens.contains(&"new york cit".to_string()));
    // Prefixes reach across the space.
    assert!(tokens.contains(&"new y".to_string()));
}

#[test]
fn test_ngram_kind_produces_interior_fragments() {
    let analyzer = resolve_preset("standard").unwrap();
    let edge = config(AutocompleteKind::EdgeGram, 3, 4);
    let ngram = config(AutocompleteKind::NGram, 3, 4);

    let edge_tokens = expand_index_tokens(analyzer.as_ref(), "stream", &edge).unwrap();
    let ngram_tokens = expand_index_tokens(analyzer.as_ref(), "stream", &ngram).unwrap();

    // "rea" is interior: only the plain n-gram expansion has it.
    assert!(!edge_tokens.contains(&"rea".to_string()));
    assert!(ngram_tokens.contains(&"rea".to_string()));
}

#[test]
fn test_fragments_truncated_to_max_grams() {
    let analyzer = resolve_preset("whitespace").unwrap();
    let config = config(AutocompleteKind::EdgeGram, 2, 6);

    let tokens =
        expand_index_tokens(analyzer.as_ref(), "extraordinarily long words", &config).unwrap();
    for token in &tokens {
        assert!(token.chars().count() <= 6, "{token}");
    }
}

#[test]
fn test_expansion_deduplicates_in_order() {
    let analyzer = resolve_preset("whitespace").unwrap();
    let config = config(AutocompleteKind::EdgeGram, 1, 5);

    let tokens = expand_index_tokens(analyzer.as_ref(), "go go go", &config).unwrap();
    let go_count = tokens.iter().filter(|t| *t == "go").count();
    assert_eq!(go_count, 1);
}
