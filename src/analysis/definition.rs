//! Declarative analyzer definitions (the component catalog).
//!
//! This module defines the closed, tagged unions describing an analysis
//! pipeline: char filters, exactly one tokenizer, and token filters, each
//! variant carrying its own parameters. Definitions are plain values with
//! structural equality, so they can key a pipeline cache; compiled
//! artifacts (regexes, automata) never live here.
//!
//! JSON shape: every component is an object with a camelCase `type` tag
//! plus that variant's parameters:
//!
//! ```json
//! {
//!   "charFilters": [{ "type": "icuNormalize" }],
//!   "tokenizer": { "type": "whitespace" },
//!   "tokenFilters": [
//!     { "type": "lowercase" },
//!     { "type": "snowballStemming", "stemmerName": "english" }
//!   ]
//! }
//! ```
//!
//! Unknown tags fail immediately with `UnknownComponentType`; a missing
//! tokenizer is reported at compile time, not here, so partially built
//! definitions can be assembled field by field.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::char_filter::unicode_normalize::NormalizationForm;
use crate::analysis::token_filter::edge_gram::OutOfBoundsPolicy;
use crate::analysis::token_filter::pattern_replace::ReplaceMode;
use crate::analysis::token_filter::phonetic::OriginalTokens;
use crate::error::{KotobaError, Result};

fn default_max_token_length() -> usize {
    255
}

fn default_length_max() -> usize {
    255
}

fn default_shingle_size() -> usize {
    2
}

fn default_true() -> bool {
    true
}

fn default_nfc() -> NormalizationForm {
    NormalizationForm::Nfc
}

/// A character filter definition: transforms raw text before tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CharFilterDefinition {
    /// Strip HTML/XML markup, keeping the listed tags verbatim.
    HtmlStrip {
        #[serde(default)]
        ignored_tags: BTreeSet<String>,
    },
    /// Unicode compatibility normalization with case folding.
    IcuNormalize,
    /// Leftmost-longest multi-string replacement, in map order.
    Mapping { mappings: BTreeMap<String, String> },
    /// Replace zero-width non-joiners with spaces.
    Persian,
}

impl CharFilterDefinition {
    /// The definition's type tag as it appears in JSON.
    pub fn tag(&self) -> &'static str {
        match self {
            CharFilterDefinition::HtmlStrip { .. } => "htmlStrip",
            CharFilterDefinition::IcuNormalize => "icuNormalize",
            CharFilterDefinition::Mapping { .. } => "mapping",
            CharFilterDefinition::Persian => "persian",
        }
    }
}

/// A tokenizer definition: splits filtered text into tokens.
///
/// Every pipeline has exactly one; `maxTokenLength` variants chunk
/// over-long tokens rather than dropping them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TokenizerDefinition {
    /// Prefixes of the whole input, `minGram..=maxGram` characters.
    EdgeGram { min_gram: usize, max_gram: usize },
    /// The whole input as a single token.
    Keyword,
    /// All character substrings with lengths in range.
    NGram { min_gram: usize, max_gram: usize },
    /// One token per regex match, taking the numbered capture group.
    RegexCaptureGroup { pattern: String, group: usize },
    /// Tokens are the runs of text between regex matches.
    RegexSplit { pattern: String },
    /// Unicode word segmentation (UAX #29).
    Standard {
        #[serde(default = "default_max_token_length")]
        max_token_length: usize,
    },
    /// Word segmentation keeping URLs and e-mail addresses whole.
    UaxUrlEmail {
        #[serde(default = "default_max_token_length")]
        max_token_length: usize,
    },
    /// Split on Unicode whitespace.
    Whitespace {
        #[serde(default = "default_max_token_length")]
        max_token_length: usize,
    },
}

impl TokenizerDefinition {
    /// The definition's type tag as it appears in JSON.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenizerDefinition::EdgeGram { .. } => "edgeGram",
            TokenizerDefinition::Keyword => "keyword",
            TokenizerDefinition::NGram { .. } => "nGram",
            TokenizerDefinition::RegexCaptureGroup { .. } => "regexCaptureGroup",
            TokenizerDefinition::RegexSplit { .. } => "regexSplit",
            TokenizerDefinition::Standard { .. } => "standard",
            TokenizerDefinition::UaxUrlEmail { .. } => "uaxUrlEmail",
            TokenizerDefinition::Whitespace { .. } => "whitespace",
        }
    }
}

/// A token filter definition: transforms the token stream after
/// tokenization, in declared order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TokenFilterDefinition {
    /// Fold characters to their closest ASCII equivalents.
    AsciiFolding {
        #[serde(default)]
        original_tokens: OriginalTokens,
    },
    /// Daitch–Mokotoff soundex phonetic encoding.
    DaitchMokotoffSoundex {
        #[serde(default)]
        original_tokens: OriginalTokens,
    },
    /// Expand each token into its prefixes.
    EdgeGram {
        min_gram: usize,
        max_gram: usize,
        #[serde(default)]
        term_not_in_bounds: OutOfBoundsPolicy,
    },
    /// Strip trailing English possessives.
    EnglishPossessive,
    /// Linearize a token graph.
    FlattenGraph,
    /// Case folding plus diacritic removal.
    IcuFolding,
    /// Unicode normalization of token text.
    IcuNormalizer {
        #[serde(default = "default_nfc")]
        normalization_form: NormalizationForm,
    },
    /// Emit a keyword-protected copy of each token.
    KeywordRepeat,
    /// Light English inflectional stemming.
    KStemming,
    /// Keep only tokens within a character-length range.
    Length {
        #[serde(default)]
        min: usize,
        #[serde(default = "default_length_max")]
        max: usize,
    },
    /// Lowercase token text.
    Lowercase,
    /// Expand each token into its character n-grams.
    NGram {
        min_gram: usize,
        max_gram: usize,
        #[serde(default)]
        term_not_in_bounds: OutOfBoundsPolicy,
    },
    /// Porter stemming.
    PorterStemming,
    /// Regex find-and-replace on token text.
    Regex {
        pattern: String,
        replacement: String,
        #[serde(default)]
        matches: ReplaceMode,
    },
    /// Drop same-text tokens stacked at the same position.
    RemoveDuplicates,
    /// Reverse each token's characters.
    Reverse,
    /// Join runs of adjacent tokens.
    Shingle {
        #[serde(default = "default_shingle_size")]
        min_shingle_size: usize,
        #[serde(default = "default_shingle_size")]
        max_shingle_size: usize,
    },
    /// Snowball stemming for the named language.
    SnowballStemming { stemmer_name: String },
    /// Spanish plural reduction.
    SpanishPluralStemming,
    /// Remove the listed stop words.
    Stopword {
        tokens: Vec<String>,
        #[serde(default = "default_true")]
        ignore_case: bool,
    },
    /// Trim surrounding whitespace from token text.
    Trim,
    /// Split tokens on intra-word boundaries.
    WordDelimiterGraph {
        #[serde(default = "default_true")]
        generate_word_parts: bool,
        #[serde(default = "default_true")]
        generate_number_parts: bool,
        #[serde(default)]
        catenate_words: bool,
        #[serde(default)]
        catenate_numbers: bool,
        #[serde(default)]
        catenate_all: bool,
        #[serde(default = "default_true")]
        split_on_case_change: bool,
        #[serde(default)]
        preserve_original: bool,
        #[serde(default = "default_true")]
        split_on_numerics: bool,
        #[serde(default = "default_true")]
        stem_english_possessive: bool,
        #[serde(default)]
        protected_words: Vec<String>,
        #[serde(default)]
        ignore_case: bool,
    },
}

impl TokenFilterDefinition {
    /// The definition's type tag as it appears in JSON.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenFilterDefinition::AsciiFolding { .. } => "asciiFolding",
            TokenFilterDefinition::DaitchMokotoffSoundex { .. } => "daitchMokotoffSoundex",
            TokenFilterDefinition::EdgeGram { .. } => "edgeGram",
            TokenFilterDefinition::EnglishPossessive => "englishPossessive",
            TokenFilterDefinition::FlattenGraph => "flattenGraph",
            TokenFilterDefinition::IcuFolding => "icuFolding",
            TokenFilterDefinition::IcuNormalizer { .. } => "icuNormalizer",
            TokenFilterDefinition::KeywordRepeat => "keywordRepeat",
            TokenFilterDefinition::KStemming => "kStemming",
            TokenFilterDefinition::Length { .. } => "length",
            TokenFilterDefinition::Lowercase => "lowercase",
            TokenFilterDefinition::NGram { .. } => "nGram",
            TokenFilterDefinition::PorterStemming => "porterStemming",
            TokenFilterDefinition::Regex { .. } => "regex",
            TokenFilterDefinition::RemoveDuplicates => "removeDuplicates",
            TokenFilterDefinition::Reverse => "reverse",
            TokenFilterDefinition::Shingle { .. } => "shingle",
            TokenFilterDefinition::SnowballStemming { .. } => "snowballStemming",
            TokenFilterDefinition::SpanishPluralStemming => "spanishPluralStemming",
            TokenFilterDefinition::Stopword { .. } => "stopword",
            TokenFilterDefinition::Trim => "trim",
            TokenFilterDefinition::WordDelimiterGraph { .. } => "wordDelimiterGraph",
        }
    }
}

/// Tags accepted for char filters.
pub const CHAR_FILTER_TAGS: &[&str] = &["htmlStrip", "icuNormalize", "mapping", "persian"];

/// Tags accepted for tokenizers.
pub const TOKENIZER_TAGS: &[&str] = &[
    "edgeGram",
    "keyword",
    "nGram",
    "regexCaptureGroup",
    "regexSplit",
    "standard",
    "uaxUrlEmail",
    "whitespace",
];

/// Tags accepted for token filters.
pub const TOKEN_FILTER_TAGS: &[&str] = &[
    "asciiFolding",
    "daitchMokotoffSoundex",
    "edgeGram",
    "englishPossessive",
    "flattenGraph",
    "icuFolding",
    "icuNormalizer",
    "keywordRepeat",
    "kStemming",
    "length",
    "lowercase",
    "nGram",
    "porterStemming",
    "regex",
    "removeDuplicates",
    "reverse",
    "shingle",
    "snowballStemming",
    "spanishPluralStemming",
    "stopword",
    "trim",
    "wordDelimiterGraph",
];

/// A complete declarative analyzer: char filters, one tokenizer, token
/// filters.
///
/// Structural equality and hashing make the definition usable as a cache
/// key: two definitions with the same content compile to pipelines with
/// identical behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerDefinition {
    /// Optional display name for the analyzer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Character filters, applied to the raw text in order.
    #[serde(default)]
    pub char_filters: Vec<CharFilterDefinition>,

    /// The tokenizer. Optional in the data model, required at compile time.
    #[serde(default)]
    pub tokenizer: Option<TokenizerDefinition>,

    /// Token filters, applied to the token stream in order.
    #[serde(default)]
    pub token_filters: Vec<TokenFilterDefinition>,
}

impl AnalyzerDefinition {
    /// Parse a definition from a JSON string.
    ///
    /// Component tags are validated against the catalog before
    /// deserialization, so an unknown tag is reported as
    /// `UnknownComponentType` with the offending tag rather than a generic
    /// parse error.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a definition from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        validate_tags(&value)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Check every component `type` tag in a definition value against the
/// catalog tables.
fn validate_tags(value: &Value) -> Result<()> {
    let Some(object) = value.as_object() else {
        return Ok(());
    };

    if let Some(filters) = object.get("charFilters").and_then(Value::as_array) {
        for filter in filters {
            check_tag(filter, CHAR_FILTER_TAGS)?;
        }
    }
    if let Some(tokenizer) = object.get("tokenizer") {
        if !tokenizer.is_null() {
            check_tag(tokenizer, TOKENIZER_TAGS)?;
        }
    }
    if let Some(filters) = object.get("tokenFilters").and_then(Value::as_array) {
        for filter in filters {
            check_tag(filter, TOKEN_FILTER_TAGS)?;
        }
    }
    Ok(())
}

fn check_tag(component: &Value, known: &[&str]) -> Result<()> {
    let tag = component
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| KotobaError::unknown_component_type("<missing type tag>"))?;
    if !known.contains(&tag) {
        return Err(KotobaError::unknown_component_type(tag));
    }
    Ok(())
}
