//! Compilation of declarative definitions into runnable pipelines.
//!
//! [`compile`] walks an [`AnalyzerDefinition`] and instantiates the concrete
//! component behind each catalog tag: char filters in order, the tokenizer,
//! then token filters in order. Parameter validation happens here, in the
//! component constructors, so a bad regex or inverted gram bounds surfaces
//! as a definition error before any text is analyzed.

use std::sync::Arc;

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::char_filter::html_strip::HtmlStripCharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::persian::PersianCharFilter;
use crate::analysis::char_filter::unicode_normalize::UnicodeNormalizeCharFilter;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::definition::{
    AnalyzerDefinition, CharFilterDefinition, TokenFilterDefinition, TokenizerDefinition,
};
use crate::analysis::token_filter::edge_gram::EdgeGramFilter;
use crate::analysis::token_filter::length::LengthFilter;
use crate::analysis::token_filter::ngram::NgramFilter;
use crate::analysis::token_filter::normalize::NormalizeFilter;
use crate::analysis::token_filter::pattern_replace::PatternReplaceFilter;
use crate::analysis::token_filter::phonetic::{DaitchMokotoffSoundexFilter, OriginalTokens};
use crate::analysis::token_filter::shingle::ShingleFilter;
use crate::analysis::token_filter::stem::{
    KStemmer, PorterStemmer, SpanishPluralStemmer, StemFilter,
};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::word_delimiter::{
    WordDelimiterGraphFilter, WordDelimiterOptions,
};
use crate::analysis::token_filter::{
    AsciiFoldingFilter, EnglishPossessiveFilter, Filter, FlattenGraphFilter, FoldingFilter,
    KeywordRepeatFilter, LowercaseFilter, RemoveDuplicatesFilter, ReverseFilter, TrimFilter,
};
use crate::analysis::tokenizer::edge_gram::EdgeGramTokenizer;
use crate::analysis::tokenizer::keyword::KeywordTokenizer;
use crate::analysis::tokenizer::ngram::NgramTokenizer;
use crate::analysis::tokenizer::pattern::PatternTokenizer;
use crate::analysis::tokenizer::standard::StandardTokenizer;
use crate::analysis::tokenizer::url_email::UrlEmailTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{KotobaError, Result};

/// Compile a definition into a runnable analyzer.
///
/// Fails with `MissingTokenizer` when the definition has none, and with
/// the relevant definition error when a component's parameters are out of
/// range.
pub fn compile(definition: &AnalyzerDefinition) -> Result<PipelineAnalyzer> {
    let tokenizer_definition = definition
        .tokenizer
        .as_ref()
        .ok_or(KotobaError::MissingTokenizer)?;

    let mut analyzer = PipelineAnalyzer::new(build_tokenizer(tokenizer_definition)?);

    for char_filter in &definition.char_filters {
        analyzer = analyzer.add_char_filter(build_char_filter(char_filter)?);
    }
    for token_filter in &definition.token_filters {
        analyzer = analyzer.add_filter(build_token_filter(token_filter)?);
    }

    Ok(analyzer)
}

fn build_char_filter(definition: &CharFilterDefinition) -> Result<Arc<dyn CharFilter>> {
    let char_filter: Arc<dyn CharFilter> = match definition {
        CharFilterDefinition::HtmlStrip { ignored_tags } => {
            Arc::new(HtmlStripCharFilter::with_ignored_tags(ignored_tags))
        }
        CharFilterDefinition::IcuNormalize => Arc::new(UnicodeNormalizeCharFilter::nfkc_case_fold()),
        CharFilterDefinition::Mapping { mappings } => Arc::new(MappingCharFilter::new(mappings)?),
        CharFilterDefinition::Persian => Arc::new(PersianCharFilter::new()),
    };
    Ok(char_filter)
}

fn build_tokenizer(definition: &TokenizerDefinition) -> Result<Arc<dyn Tokenizer>> {
    let tokenizer: Arc<dyn Tokenizer> = match definition {
        TokenizerDefinition::EdgeGram { min_gram, max_gram } => {
            Arc::new(EdgeGramTokenizer::new(*min_gram, *max_gram)?)
        }
        TokenizerDefinition::Keyword => Arc::new(KeywordTokenizer::new()),
        TokenizerDefinition::NGram { min_gram, max_gram } => {
            Arc::new(NgramTokenizer::new(*min_gram, *max_gram)?)
        }
        TokenizerDefinition::RegexCaptureGroup { pattern, group } => {
            Arc::new(PatternTokenizer::capture(pattern, *group)?)
        }
        TokenizerDefinition::RegexSplit { pattern } => Arc::new(PatternTokenizer::split(pattern)?),
        TokenizerDefinition::Standard { max_token_length } => {
            Arc::new(StandardTokenizer::with_max_token_length(*max_token_length)?)
        }
        TokenizerDefinition::UaxUrlEmail { max_token_length } => {
            Arc::new(UrlEmailTokenizer::with_max_token_length(*max_token_length)?)
        }
        TokenizerDefinition::Whitespace { max_token_length } => {
            Arc::new(WhitespaceTokenizer::with_max_token_length(*max_token_length)?)
        }
    };
    Ok(tokenizer)
}

fn build_token_filter(definition: &TokenFilterDefinition) -> Result<Arc<dyn Filter>> {
    let filter: Arc<dyn Filter> = match definition {
        TokenFilterDefinition::AsciiFolding { original_tokens } => match original_tokens {
            OriginalTokens::Include => Arc::new(AsciiFoldingFilter::preserving_original()),
            OriginalTokens::Omit => Arc::new(AsciiFoldingFilter::new()),
        },
        TokenFilterDefinition::DaitchMokotoffSoundex { original_tokens } => match original_tokens {
            OriginalTokens::Include => Arc::new(DaitchMokotoffSoundexFilter::including_original()),
            OriginalTokens::Omit => Arc::new(DaitchMokotoffSoundexFilter::new()),
        },
        TokenFilterDefinition::EdgeGram {
            min_gram,
            max_gram,
            term_not_in_bounds,
        } => Arc::new(EdgeGramFilter::with_policy(
            *min_gram,
            *max_gram,
            *term_not_in_bounds,
        )?),
        TokenFilterDefinition::EnglishPossessive => Arc::new(EnglishPossessiveFilter::new()),
        TokenFilterDefinition::FlattenGraph => Arc::new(FlattenGraphFilter::new()),
        TokenFilterDefinition::IcuFolding => Arc::new(FoldingFilter::new()),
        TokenFilterDefinition::IcuNormalizer { normalization_form } => {
            Arc::new(NormalizeFilter::new(*normalization_form))
        }
        TokenFilterDefinition::KeywordRepeat => Arc::new(KeywordRepeatFilter::new()),
        TokenFilterDefinition::KStemming => {
            Arc::new(StemFilter::with_stemmer(Box::new(KStemmer::new())))
        }
        TokenFilterDefinition::Length { min, max } => Arc::new(LengthFilter::new(*min, *max)?),
        TokenFilterDefinition::Lowercase => Arc::new(LowercaseFilter::new()),
        TokenFilterDefinition::NGram {
            min_gram,
            max_gram,
            term_not_in_bounds,
        } => Arc::new(NgramFilter::with_policy(
            *min_gram,
            *max_gram,
            *term_not_in_bounds,
        )?),
        TokenFilterDefinition::PorterStemming => {
            Arc::new(StemFilter::with_stemmer(Box::new(PorterStemmer::new())))
        }
        TokenFilterDefinition::Regex {
            pattern,
            replacement,
            matches,
        } => Arc::new(PatternReplaceFilter::with_mode(
            pattern,
            replacement,
            *matches,
        )?),
        TokenFilterDefinition::RemoveDuplicates => Arc::new(RemoveDuplicatesFilter::new()),
        TokenFilterDefinition::Reverse => Arc::new(ReverseFilter::new()),
        TokenFilterDefinition::Shingle {
            min_shingle_size,
            max_shingle_size,
        } => Arc::new(ShingleFilter::new(*min_shingle_size, *max_shingle_size)?),
        TokenFilterDefinition::SnowballStemming { stemmer_name } => {
            Arc::new(StemFilter::by_name(stemmer_name)?)
        }
        TokenFilterDefinition::SpanishPluralStemming => {
            Arc::new(StemFilter::with_stemmer(Box::new(SpanishPluralStemmer::new())))
        }
        TokenFilterDefinition::Stopword {
            tokens,
            ignore_case,
        } => Arc::new(StopFilter::from_words(tokens.clone(), *ignore_case)),
        TokenFilterDefinition::Trim => Arc::new(TrimFilter::new()),
        TokenFilterDefinition::WordDelimiterGraph {
            generate_word_parts,
            generate_number_parts,
            catenate_words,
            catenate_numbers,
            catenate_all,
            split_on_case_change,
            preserve_original,
            split_on_numerics,
            stem_english_possessive,
            protected_words,
            ignore_case,
        } => Arc::new(WordDelimiterGraphFilter::new(WordDelimiterOptions {
            generate_word_parts: *generate_word_parts,
            generate_number_parts: *generate_number_parts,
            catenate_words: *catenate_words,
            catenate_numbers: *catenate_numbers,
            catenate_all: *catenate_all,
            split_on_case_change: *split_on_case_change,
            preserve_original: *preserve_original,
            split_on_numerics: *split_on_numerics,
            stem_english_possessive: *stem_english_possessive,
            protected_words: protected_words.clone(),
            ignore_case: *ignore_case,
        })),
    };
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::analysis::token::Token;

    fn analyze(definition: &AnalyzerDefinition, text: &str) -> Vec<Token> {
        compile(definition)
            .unwrap()
            .analyze(text)
            .unwrap()
            .collect()
    }

    #[test]
    fn test_missing_tokenizer() {
        let definition = AnalyzerDefinition::default();
        assert!(matches!(
            compile(&definition),
            Err(KotobaError::MissingTokenizer)
        ));
    }

    #[test]
    fn test_compile_and_run() {
        let definition = AnalyzerDefinition::from_json(
            r#"{
                "tokenizer": { "type": "whitespace" },
                "tokenFilters": [
                    { "type": "lowercase" },
                    { "type": "stopword", "tokens": ["the"] }
                ]
            }"#,
        )
        .unwrap();

        let tokens = analyze(&definition, "The Quick FOX");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["quick", "fox"]);
    }

    #[test]
    fn test_char_filter_applied() {
        let definition = AnalyzerDefinition::from_json(
            r#"{
                "charFilters": [
                    { "type": "mapping", "mappings": { "-": " " } }
                ],
                "tokenizer": { "type": "whitespace" }
            }"#,
        )
        .unwrap();

        let tokens = analyze(&definition, "wi-fi");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_invalid_parameters_surface_at_compile() {
        let definition = AnalyzerDefinition::from_json(
            r#"{
                "tokenizer": { "type": "whitespace" },
                "tokenFilters": [
                    { "type": "edgeGram", "minGram": 5, "maxGram": 2 }
                ]
            }"#,
        )
        .unwrap();

        let result = compile(&definition);
        assert!(matches!(result, Err(e) if e.is_invalid_definition()));
    }

    #[test]
    fn test_invalid_regex_surfaces_at_compile() {
        let definition = AnalyzerDefinition::from_json(
            r#"{
                "tokenizer": { "type": "regexSplit", "pattern": "[" }
            }"#,
        )
        .unwrap();

        assert!(matches!(
            compile(&definition),
            Err(KotobaError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_unknown_snowball_language() {
        let definition = AnalyzerDefinition::from_json(
            r#"{
                "tokenizer": { "type": "standard" },
                "tokenFilters": [
                    { "type": "snowballStemming", "stemmerName": "klingon" }
                ]
            }"#,
        )
        .unwrap();

        assert!(matches!(
            compile(&definition),
            Err(KotobaError::UnknownStemmer(name)) if name == "klingon"
        ));
    }

    #[test]
    fn test_every_catalog_variant_compiles() {
        let definition = AnalyzerDefinition::from_json(
            r#"{
                "charFilters": [
                    { "type": "htmlStrip" },
                    { "type": "icuNormalize" },
                    { "type": "mapping", "mappings": { "a": "b" } },
                    { "type": "persian" }
                ],
                "tokenizer": { "type": "standard" },
                "tokenFilters": [
                    { "type": "asciiFolding" },
                    { "type": "daitchMokotoffSoundex" },
                    { "type": "edgeGram", "minGram": 2, "maxGram": 5 },
                    { "type": "englishPossessive" },
                    { "type": "flattenGraph" },
                    { "type": "icuFolding" },
                    { "type": "icuNormalizer" },
                    { "type": "keywordRepeat" },
                    { "type": "kStemming" },
                    { "type": "length" },
                    { "type": "lowercase" },
                    { "type": "nGram", "minGram": 2, "maxGram": 3 },
                    { "type": "porterStemming" },
                    { "type": "regex", "pattern": "x", "replacement": "y" },
                    { "type": "removeDuplicates" },
                    { "type": "reverse" },
                    { "type": "shingle" },
                    { "type": "snowballStemming", "stemmerName": "english" },
                    { "type": "spanishPluralStemming" },
                    { "type": "stopword", "tokens": ["the"] },
                    { "type": "trim" },
                    { "type": "wordDelimiterGraph" }
                ]
            }"#,
        )
        .unwrap();

        assert!(compile(&definition).is_ok());
    }
}
