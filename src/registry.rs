//! Built-in analyzer presets.
//!
//! The registry is a read-only, process-lifetime table mapping preset names
//! to analyzer definitions: four base presets plus one preset per supported
//! stemming language. Presets are stored as definitions and compiled on
//! first use through a registry-private cache, so each preset compiles at
//! most once per process and resolution after that is a map lookup.

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::cache::PipelineCache;
use crate::analysis::definition::{
    AnalyzerDefinition, TokenFilterDefinition, TokenizerDefinition,
};
use crate::analysis::token_filter::stem::SnowballStemmer;
use crate::error::{KotobaError, Result};

/// Preset category, for the listing output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresetCategory {
    /// Language-independent tokenization presets.
    Base,
    /// Language-specific stemming presets.
    Language,
}

/// One entry in the preset listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerDetail {
    /// Preset name accepted by `resolve_preset`.
    pub name: String,
    /// Base or language.
    pub category: PresetCategory,
    /// False for languages listed but not yet supported.
    pub available: bool,
}

/// Languages that appear in the listing but cannot be resolved yet.
const UNSUPPORTED_LANGUAGES: &[&str] = &[
    "armenian",
    "basque",
    "bengali",
    "brazilian",
    "bulgarian",
    "catalan",
    "cjk",
    "czech",
    "estonian",
    "galician",
    "german2",
    "hindi",
    "indonesian",
    "irish",
    "latvian",
    "lithuanian",
    "nepali",
    "persian",
    "serbian",
    "sorani",
    "thai",
    "ukrainian",
    "yiddish",
];

struct Preset {
    name: &'static str,
    category: PresetCategory,
    definition: AnalyzerDefinition,
}

fn named(name: &str, definition: AnalyzerDefinition) -> AnalyzerDefinition {
    AnalyzerDefinition {
        name: Some(name.to_string()),
        ..definition
    }
}

fn base_preset(name: &'static str, definition: AnalyzerDefinition) -> Preset {
    Preset {
        name,
        category: PresetCategory::Base,
        definition: named(name, definition),
    }
}

fn language_preset(name: &'static str, stemmer: TokenFilterDefinition) -> Preset {
    let mut token_filters = vec![TokenFilterDefinition::Lowercase];
    if name == "english" {
        token_filters.push(TokenFilterDefinition::Stopword {
            tokens: crate::analysis::token_filter::stop::english_stop_words(),
            ignore_case: true,
        });
    }
    token_filters.push(stemmer);

    Preset {
        name,
        category: PresetCategory::Language,
        definition: named(
            name,
            AnalyzerDefinition {
                name: None,
                char_filters: Vec::new(),
                tokenizer: Some(TokenizerDefinition::Standard {
                    max_token_length: 255,
                }),
                token_filters,
            },
        ),
    }
}

static PRESETS: LazyLock<Vec<Preset>> = LazyLock::new(|| {
    let mut presets = vec![
        base_preset(
            "standard",
            AnalyzerDefinition {
                name: None,
                char_filters: Vec::new(),
                tokenizer: Some(TokenizerDefinition::Standard {
                    max_token_length: 255,
                }),
                token_filters: vec![TokenFilterDefinition::Lowercase],
            },
        ),
        base_preset(
            "simple",
            AnalyzerDefinition {
                name: None,
                char_filters: Vec::new(),
                tokenizer: Some(TokenizerDefinition::RegexCaptureGroup {
                    pattern: r"\p{L}+".to_string(),
                    group: 0,
                }),
                token_filters: vec![TokenFilterDefinition::Lowercase],
            },
        ),
        base_preset(
            "whitespace",
            AnalyzerDefinition {
                name: None,
                char_filters: Vec::new(),
                tokenizer: Some(TokenizerDefinition::Whitespace {
                    max_token_length: 255,
                }),
                token_filters: Vec::new(),
            },
        ),
        base_preset(
            "keyword",
            AnalyzerDefinition {
                name: None,
                char_filters: Vec::new(),
                tokenizer: Some(TokenizerDefinition::Keyword),
                token_filters: Vec::new(),
            },
        ),
    ];

    for language in SnowballStemmer::supported_languages() {
        presets.push(language_preset(
            language,
            TokenFilterDefinition::SnowballStemming {
                stemmer_name: language.to_string(),
            },
        ));
    }
    presets.push(language_preset(
        "porter",
        TokenFilterDefinition::PorterStemming,
    ));

    presets
});

static COMPILED: LazyLock<PipelineCache> = LazyLock::new(PipelineCache::new);

/// Resolve a preset name to its compiled analyzer.
///
/// Fails with `UnknownAnalyzer` for names outside the preset table,
/// including listed-but-unavailable languages.
pub fn resolve_preset(name: &str) -> Result<Arc<dyn Analyzer>> {
    let preset = PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| KotobaError::unknown_analyzer(name))?;
    let pipeline = COMPILED.get_or_compile(&preset.definition)?;
    Ok(pipeline)
}

/// The definition behind a preset name, if the preset exists.
pub fn preset_definition(name: &str) -> Option<&'static AnalyzerDefinition> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .map(|preset| &preset.definition)
}

/// List every preset, available or not: base presets first, then supported
/// languages, then disabled placeholders for languages not yet supported.
pub fn available_analyzers() -> Vec<AnalyzerDetail> {
    let mut details: Vec<AnalyzerDetail> = PRESETS
        .iter()
        .map(|preset| AnalyzerDetail {
            name: preset.name.to_string(),
            category: preset.category,
            available: true,
        })
        .collect();

    for language in UNSUPPORTED_LANGUAGES {
        details.push(AnalyzerDetail {
            name: (*language).to_string(),
            category: PresetCategory::Language,
            available: false,
        });
    }

    details
}
