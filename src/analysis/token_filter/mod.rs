//! Token filter implementations for token transformation.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod ascii_folding;
pub mod edge_gram;
pub mod flatten_graph;
pub mod folding;
pub mod keyword_repeat;
pub mod length;
pub mod lowercase;
pub mod ngram;
pub mod normalize;
pub mod pattern_replace;
pub mod phonetic;
pub mod possessive;
pub mod remove_duplicates;
pub mod reverse;
pub mod shingle;
pub mod stem;
pub mod stop;
pub mod trim;
pub mod word_delimiter;

// Re-export all filters for convenient access
pub use ascii_folding::AsciiFoldingFilter;
pub use edge_gram::EdgeGramFilter;
pub use flatten_graph::FlattenGraphFilter;
pub use folding::FoldingFilter;
pub use keyword_repeat::KeywordRepeatFilter;
pub use length::LengthFilter;
pub use lowercase::LowercaseFilter;
pub use ngram::NgramFilter;
pub use normalize::NormalizeFilter;
pub use pattern_replace::PatternReplaceFilter;
pub use phonetic::DaitchMokotoffSoundexFilter;
pub use possessive::EnglishPossessiveFilter;
pub use remove_duplicates::RemoveDuplicatesFilter;
pub use reverse::ReverseFilter;
pub use shingle::ShingleFilter;
pub use stem::{
    KStemmer, PorterStemmer, SnowballStemmer, SpanishPluralStemmer, StemFilter, Stemmer,
};
pub use stop::StopFilter;
pub use trim::TrimFilter;
pub use word_delimiter::{WordDelimiterGraphFilter, WordDelimiterOptions};
