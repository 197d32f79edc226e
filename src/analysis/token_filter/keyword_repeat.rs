//! Keyword repeat filter implementation.
//!
//! This module provides a filter that emits each token twice: once marked
//! as a keyword (protected from stemming) and once unmarked. Placed before
//! a stemmer and a duplicate-removal filter, this indexes both the stemmed
//! and the original form of every word.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that duplicates each token as a keyword-protected copy.
///
/// The keyword copy comes first, then the stemmable original stacked at the
/// same position (position increment 0). Tokens already marked as keywords
/// are passed through without duplication.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::keyword_repeat::KeywordRepeatFilter;
/// use kotoba::analysis::token::Token;
///
/// let filter = KeywordRepeatFilter::new();
/// let tokens = vec![Token::new("running", 0)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].keyword);
/// assert!(!result[1].keyword);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeywordRepeatFilter;

impl KeywordRepeatFilter {
    /// Create a new keyword repeat filter.
    pub fn new() -> Self {
        KeywordRepeatFilter
    }
}

impl Filter for KeywordRepeatFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut output: Vec<Token> = Vec::new();

        for token in tokens {
            if token.keyword {
                output.push(token);
                continue;
            }
            let stemmable = token.clone().with_position_increment(0);
            output.push(token.as_keyword());
            output.push(stemmable);
        }

        Ok(Box::new(output.into_iter()))
    }

    fn name(&self) -> &'static str {
        "keyword_repeat"
    }
}
