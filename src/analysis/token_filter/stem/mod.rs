//! Stemming token filter and stemmer implementations.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod kstem;
pub mod porter;
pub mod snowball;
pub mod spanish_plural;

// Re-export stemmers
pub use kstem::KStemmer;
pub use porter::PorterStemmer;
pub use snowball::SnowballStemmer;
pub use spanish_plural::SpanishPluralStemmer;

/// Look up a stemmer by name.
///
/// `porter` selects the classic Porter algorithm; every other accepted name
/// selects the corresponding snowball algorithm. Unrecognized names fail
/// with `UnknownStemmer`.
pub fn stemmer_for(name: &str) -> Result<Box<dyn Stemmer>> {
    if name == "porter" {
        return Ok(Box::new(PorterStemmer::new()));
    }
    Ok(Box::new(SnowballStemmer::new(name)?))
}

/// Filter that applies stemming to tokens.
///
/// Tokens carrying the keyword flag (set by the keyword-repeat filter)
/// pass through unstemmed.
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Porter stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Box::new(PorterStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// Create a stem filter by stemmer name.
    pub fn by_name(name: &str) -> Result<Self> {
        Ok(StemFilter {
            stemmer: stemmer_for(name)?,
        })
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.keyword {
                    token
                } else {
                    let stemmed = self.stemmer.stem(&token.text);
                    token.with_text(stemmed)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
