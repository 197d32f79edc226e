//! Autocomplete expansion of analyzed token streams.
//!
//! Search-as-you-type works by storing short fragments of the indexed text
//! and matching the user's partial query against them. The two sides are
//! deliberately asymmetric:
//!
//! - **Index side**: base tokens are combined into shingles of one to three
//!   adjacent tokens, and each shingle is expanded into edge-n-gram
//!   prefixes or plain n-gram substrings within the configured bounds.
//! - **Query side**: base tokens are only truncated to the maximum gram
//!   length, never expanded, because the truncated forms are exactly what
//!   the index stored.
//!
//! All output goes through order-preserving de-duplication, so each
//! distinct fragment appears once, at its first position.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::{KotobaError, Result};

/// The gram expansion applied to index-side shingles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AutocompleteKind {
    /// Prefixes anchored at the start of the shingle.
    #[default]
    EdgeGram,
    /// All contiguous substrings within the bounds.
    NGram,
}

/// Configuration for autocomplete expansion.
///
/// # Examples
///
/// ```
/// use kotoba::autocomplete::AutocompleteConfig;
///
/// let config = AutocompleteConfig::default();
/// assert_eq!(config.min_grams, 3);
/// assert_eq!(config.max_grams, 15);
/// config.validate().unwrap();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteConfig {
    /// Expansion strategy for index-side shingles.
    #[serde(default)]
    pub kind: AutocompleteKind,
    /// Smallest fragment length emitted by the gram expansion.
    #[serde(default = "default_min_grams")]
    pub min_grams: usize,
    /// Largest fragment length; longer strings are truncated to this.
    #[serde(default = "default_max_grams")]
    pub max_grams: usize,
}

fn default_min_grams() -> usize {
    3
}

fn default_max_grams() -> usize {
    15
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            kind: AutocompleteKind::EdgeGram,
            min_grams: default_min_grams(),
            max_grams: default_max_grams(),
        }
    }
}

impl AutocompleteConfig {
    /// Reject bounds outside `1 <= min_grams <= max_grams`.
    pub fn validate(&self) -> Result<()> {
        if self.min_grams == 0 || self.min_grams > self.max_grams {
            return Err(KotobaError::InvalidAutocompleteBounds {
                min: self.min_grams,
                max: self.max_grams,
            });
        }
        Ok(())
    }
}

/// Truncate a string to at most `max_chars` characters.
///
/// Strings at or under the limit are returned unchanged.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

/// Expand query-side text: each base token truncated to `max_grams`, plus
/// the original token.
///
/// No shingling and no gram expansion happen here; tokens shorter than
/// `min_grams` pass through as-is rather than being filtered.
pub fn expand_query_tokens(
    analyzer: &dyn Analyzer,
    text: &str,
    config: &AutocompleteConfig,
) -> Result<Vec<String>> {
    config.validate()?;

    let mut output = DedupedOutput::new();
    for token in analyzer.analyze(text)? {
        output.push(truncate(&token.text, config.max_grams));
        output.push(token.text);
    }
    Ok(output.into_vec())
}

/// Expand index-side text: shingles of 1 to 3 adjacent base tokens, each
/// truncated and expanded into grams per the configured kind.
pub fn expand_index_tokens(
    analyzer: &dyn Analyzer,
    text: &str,
    config: &AutocompleteConfig,
) -> Result<Vec<String>> {
    config.validate()?;

    let base: Vec<String> = analyzer.analyze(text)?.map(|t| t.text).collect();

    let mut output = DedupedOutput::new();
    for start in 0..base.len() {
        for size in 1..=MAX_SHINGLE_SIZE.min(base.len() - start) {
            let shingle = base[start..start + size].join(" ");
            output.push(truncate(&shingle, config.max_grams));
            expand_shingle(&shingle, config, &mut output);
        }
    }
    Ok(output.into_vec())
}

const MAX_SHINGLE_SIZE: usize = 3;

fn expand_shingle(shingle: &str, config: &AutocompleteConfig, output: &mut DedupedOutput) {
    let chars: Vec<char> = shingle.chars().collect();

    match config.kind {
        AutocompleteKind::EdgeGram => {
            for len in config.min_grams..=config.max_grams.min(chars.len()) {
                output.push(chars[..len].iter().collect());
            }
        }
        AutocompleteKind::NGram => {
            for len in config.min_grams..=config.max_grams.min(chars.len()) {
                for start in 0..=chars.len() - len {
                    output.push(chars[start..start + len].iter().collect());
                }
            }
        }
    }
}

/// Accumulates strings in first-occurrence order, dropping repeats.
struct DedupedOutput {
    seen: AHashSet<String>,
    ordered: Vec<String>,
}

impl DedupedOutput {
    fn new() -> Self {
        DedupedOutput {
            seen: AHashSet::new(),
            ordered: Vec::new(),
        }
    }

    fn push(&mut self, text: String) {
        if self.seen.insert(text.clone()) {
            self.ordered.push(text);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::analyzer::PipelineAnalyzer;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    fn whitespace_analyzer() -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
    }

    fn config(kind: AutocompleteKind, min: usize, max: usize) -> AutocompleteConfig {
        AutocompleteConfig {
            kind,
            min_grams: min,
            max_grams: max,
        }
    }

    #[test]
    fn test_truncation_law() {
        assert_eq!(truncate("short", 15), "short");
        assert_eq!(truncate("exactly", 7), "exactly");
        assert_eq!(truncate("overlong-token", 5), "overl");
        assert_eq!(truncate("日本語テキスト", 3), "日本語");
    }

    #[test]
    fn test_invalid_bounds_rejected_before_analysis() {
        let analyzer = whitespace_analyzer();
        let bad = config(AutocompleteKind::EdgeGram, 5, 2);

        assert!(matches!(
            expand_query_tokens(&analyzer, "text", &bad),
            Err(KotobaError::InvalidAutocompleteBounds { min: 5, max: 2 })
        ));
        assert!(expand_index_tokens(&analyzer, "text", &bad).is_err());

        assert!(config(AutocompleteKind::EdgeGram, 0, 2).validate().is_err());
    }

    #[test]
    fn test_query_side_truncates_only() {
        let analyzer = whitespace_analyzer();
        let config = config(AutocompleteKind::EdgeGram, 3, 5);

        let tokens = expand_query_tokens(&analyzer, "elephants", &config).unwrap();
        assert_eq!(tokens, vec!["eleph", "elephants"]);
    }

    #[test]
    fn test_query_side_passes_short_tokens_through() {
        let analyzer = whitespace_analyzer();
        let config = config(AutocompleteKind::EdgeGram, 3, 5);

        // "ca" is below min_grams but is not filtered on the query side.
        let tokens = expand_query_tokens(&analyzer, "ca", &config).unwrap();
        assert_eq!(tokens, vec!["ca"]);
    }

    #[test]
    fn test_index_side_edge_grams() {
        let analyzer = whitespace_analyzer();
        let config = config(AutocompleteKind::EdgeGram, 3, 5);

        let tokens = expand_index_tokens(&analyzer, "cat", &config).unwrap();
        // The truncated unigram plus its single in-bounds prefix.
        assert_eq!(tokens, vec!["cat"]);
        assert!(!tokens.contains(&"ca".to_string()));
    }

    #[test]
    fn test_index_side_shingles() {
        let analyzer = whitespace_analyzer();
        let config = config(AutocompleteKind::EdgeGram, 2, 10);

        let tokens = expand_index_tokens(&analyzer, "big red dog", &config).unwrap();

        assert!(tokens.contains(&"big".to_string()));
        assert!(tokens.contains(&"big red".to_string()));
        assert!(tokens.contains(&"big red do".to_string()));
        assert!(tokens.contains(&"red dog".to_string()));
        assert!(tokens.contains(&"bi".to_string()));
        // Shingle prefixes cross the token boundary.
        assert!(tokens.contains(&"big r".to_string()));
    }

    #[test]
    fn test_index_side_ngrams() {
        let analyzer = whitespace_analyzer();
        let config = config(AutocompleteKind::NGram, 2, 3);

        let tokens = expand_index_tokens(&analyzer, "abc", &config).unwrap();
        assert_eq!(tokens, vec!["abc", "ab", "bc"]);
    }

    #[test]
    fn test_output_deduplicated_in_order() {
        let analyzer = whitespace_analyzer();
        let config = config(AutocompleteKind::EdgeGram, 1, 4);

        let tokens = expand_index_tokens(&analyzer, "aa aa", &config).unwrap();
        let first_aa = tokens.iter().position(|t| t == "aa");
        assert_eq!(tokens.iter().filter(|t| *t == "aa").count(), 1);
        assert!(first_aa.is_some());
    }

    #[test]
    fn test_config_json_defaults() {
        let config: AutocompleteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AutocompleteConfig::default());

        let config: AutocompleteConfig =
            serde_json::from_str(r#"{ "kind": "nGram", "minGrams": 2 }"#).unwrap();
        assert_eq!(config.kind, AutocompleteKind::NGram);
        assert_eq!(config.min_grams, 2);
        assert_eq!(config.max_grams, 15);
    }
}
