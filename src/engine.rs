//! Request orchestration: resolve analyzers, run both sides, compare.
//!
//! [`AnalysisEngine`] is the facade the boundary layer talks to. A request
//! names or inlines an analyzer for each side; the engine resolves preset
//! names through the registry and compiles inline definitions through its
//! pipeline cache, runs the index and query texts, and returns the
//! annotated comparison.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{token_texts, Analyzer};
use crate::analysis::cache::PipelineCache;
use crate::analysis::definition::AnalyzerDefinition;
use crate::autocomplete::{expand_index_tokens, expand_query_tokens, AutocompleteConfig};
use crate::error::Result;
use crate::matcher::{compare, TokenInfo};
use crate::registry::resolve_preset;

/// How a request picks an analyzer: a preset name or an inline definition.
///
/// Untagged: a JSON string is a name, a JSON object is a definition, so the
/// two shapes never overlap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyzerSelector {
    /// A preset name resolved through the registry.
    Name(String),
    /// An inline definition compiled through the cache.
    Inline(AnalyzerDefinition),
}

impl AnalyzerSelector {
    /// The display name reported back in the response.
    pub fn display_name(&self) -> &str {
        match self {
            AnalyzerSelector::Name(name) => name,
            AnalyzerSelector::Inline(definition) => {
                definition.name.as_deref().unwrap_or("custom")
            }
        }
    }
}

/// An index-vs-query analysis request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Text analyzed on the index side.
    pub index_text: String,
    /// Text analyzed on the query side.
    pub query_text: String,
    /// Analyzer for the index side.
    pub index_analyzer: AnalyzerSelector,
    /// Analyzer for the query side.
    pub query_analyzer: AnalyzerSelector,
    /// Apply autocomplete expansion (index side) and truncation (query side).
    #[serde(default)]
    pub use_autocomplete: bool,
    /// Autocomplete bounds; ignored unless `use_autocomplete` is set.
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}

/// The annotated result of an analysis request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Index-side tokens in first-occurrence order.
    pub index_tokens: Vec<TokenInfo>,
    /// Query-side tokens in first-occurrence order.
    pub query_tokens: Vec<TokenInfo>,
    /// Texts present on both sides, ordered by the index side.
    pub matching_tokens: Vec<String>,
    /// Name of the analyzer used on the index side.
    pub analyzer_used: String,
}

/// Resolves analyzers, runs texts through them, and compares the results.
#[derive(Default)]
pub struct AnalysisEngine {
    cache: PipelineCache,
}

impl AnalysisEngine {
    /// Create an engine with an empty pipeline cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a selector to a runnable analyzer.
    pub fn resolve(&self, selector: &AnalyzerSelector) -> Result<Arc<dyn Analyzer>> {
        match selector {
            AnalyzerSelector::Name(name) => resolve_preset(name),
            AnalyzerSelector::Inline(definition) => {
                let pipeline = self.cache.get_or_compile(definition)?;
                Ok(pipeline)
            }
        }
    }

    /// Run one text through the analyzer a selector picks.
    pub fn analyze_text(&self, selector: &AnalyzerSelector, text: &str) -> Result<Vec<String>> {
        let analyzer = self.resolve(selector)?;
        token_texts(analyzer.as_ref(), text)
    }

    /// Run a full index-vs-query request.
    pub fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        if request.use_autocomplete {
            request.autocomplete.validate()?;
        }

        let index_analyzer = self.resolve(&request.index_analyzer)?;
        let query_analyzer = self.resolve(&request.query_analyzer)?;

        let (index_texts, query_texts) = if request.use_autocomplete {
            (
                expand_index_tokens(
                    index_analyzer.as_ref(),
                    &request.index_text,
                    &request.autocomplete,
                )?,
                expand_query_tokens(
                    query_analyzer.as_ref(),
                    &request.query_text,
                    &request.autocomplete,
                )?,
            )
        } else {
            (
                token_texts(index_analyzer.as_ref(), &request.index_text)?,
                token_texts(query_analyzer.as_ref(), &request.query_text)?,
            )
        };

        let comparison = compare(&index_texts, &query_texts);

        Ok(AnalyzeResponse {
            index_tokens: comparison.index_tokens,
            query_tokens: comparison.query_tokens,
            matching_tokens: comparison.matching_tokens,
            analyzer_used: request.index_analyzer.display_name().to_string(),
        })
    }

    /// The engine's pipeline cache, for inspection.
    pub fn cache(&self) -> &PipelineCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowercase_request(index_text: &str, query_text: &str) -> AnalyzeRequest {
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
    fn test_preset_comparison() {
        let engine = AnalysisEngine::new();
        let response = engine.analyze(&lowercase_request("quick fox", "Fox")).unwrap();

        assert_eq!(response.matching_tokens, vec!["fox"]);
        assert_eq!(response.analyzer_used, "standard");
    }

    #[test]
    fn test_inline_definition_uses_cache() {
        let engine = AnalysisEngine::new();
        let definition = AnalyzerDefinition::from_json(
            r#"{ "tokenizer": { "type": "whitespace" } }"#,
        )
        .unwrap();

        let request = AnalyzeRequest {
            index_text: "a b".to_string(),
            query_text: "b".to_string(),
            index_analyzer: AnalyzerSelector::Inline(definition.clone()),
            query_analyzer: AnalyzerSelector::Inline(definition),
            use_autocomplete: false,
            autocomplete: AutocompleteConfig::default(),
        };

        engine.analyze(&request).unwrap();
        assert_eq!(engine.cache().len(), 1);
    }

    #[test]
    fn test_selector_json_shapes() {
        let name: AnalyzerSelector = serde_json::from_str(r#""standard""#).unwrap();
        assert_eq!(name, AnalyzerSelector::Name("standard".to_string()));

        let inline: AnalyzerSelector =
            serde_json::from_str(r#"{ "tokenizer": { "type": "keyword" } }"#).unwrap();
        assert!(matches!(inline, AnalyzerSelector::Inline(_)));
    }

    #[test]
    fn test_display_name() {
        let named = AnalyzerSelector::Inline(AnalyzerDefinition {
            name: Some("mine".to_string()),
            ..AnalyzerDefinition::default()
        });
        assert_eq!(named.display_name(), "mine");

        let anonymous = AnalyzerSelector::Inline(AnalyzerDefinition::default());
        assert_eq!(anonymous.display_name(), "custom");
    }

    #[test]
    fn test_unknown_preset_fails() {
        let engine = AnalysisEngine::new();
        let mut request = lowercase_request("a", "a");
        request.index_analyzer = AnalyzerSelector::Name("missing".to_string());

        assert!(engine.analyze(&request).is_err());
        assert!(engine.cache().is_empty());
    }

    #[test]
    fn test_invalid_autocomplete_bounds_rejected() {
        let engine = AnalysisEngine::new();
        let mut request = lowercase_request("a", "a");
        request.use_autocomplete = true;
        request.autocomplete.min_grams = 9;
        request.autocomplete.max_grams = 3;

        assert!(engine.analyze(&request).is_err());
    }
}
