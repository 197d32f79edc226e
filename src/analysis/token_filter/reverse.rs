//! Reverse filter implementation.
//!
//! This module provides a filter that reverses the characters of each
//! token, which supports leading-wildcard matching against a reversed
//! index.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that reverses each token's characters.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::reverse::ReverseFilter;
/// use kotoba::analysis::token::Token;
///
/// let filter = ReverseFilter::new();
/// let tokens = vec![Token::new("hello", 0)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
/// assert_eq!(result[0].text, "olleh");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReverseFilter;

impl ReverseFilter {
    /// Create a new reverse filter.
    pub fn new() -> Self {
        ReverseFilter
    }
}

impl Filter for ReverseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let reversed: String = token.text.chars().rev().collect();
                token.with_text(reversed)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "reverse"
    }
}
