//! Remove duplicates filter implementation.
//!
//! This module provides a filter that drops tokens with the same text at
//! the same position, typically the overlap produced by keyword-repeat
//! followed by a stemmer that left the word unchanged.

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes same-text tokens stacked at the same position.
///
/// Tokens with the same text at different positions are kept; only exact
/// position-and-text duplicates are dropped, keeping the first occurrence.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::remove_duplicates::RemoveDuplicatesFilter;
/// use kotoba::analysis::token::Token;
///
/// let filter = RemoveDuplicatesFilter::new();
/// let tokens = vec![
///     Token::new("run", 0),
///     Token::new("run", 0).with_position_increment(0),
/// ];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
/// assert_eq!(result.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RemoveDuplicatesFilter;

impl RemoveDuplicatesFilter {
    /// Create a new remove-duplicates filter.
    pub fn new() -> Self {
        RemoveDuplicatesFilter
    }
}

impl Filter for RemoveDuplicatesFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut output: Vec<Token> = Vec::new();
        let mut seen_at_position: AHashSet<String> = AHashSet::new();

        for token in tokens {
            if token.position_increment > 0 {
                seen_at_position.clear();
            }
            if seen_at_position.contains(&token.text) {
                continue;
            }
            seen_at_position.insert(token.text.clone());
            output.push(token);
        }

        Ok(Box::new(output.into_iter()))
    }

    fn name(&self) -> &'static str {
        "remove_duplicates"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_stacked_duplicates() {
        let filter = RemoveDuplicatesFilter::new();
        let tokens = vec![
            Token::new("run", 0),
            Token::new("run", 0).with_position_increment(0),
            Token::new("fast", 1),
        ];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["run", "fast"]);
    }

    #[test]
    fn test_keeps_distinct_stacked_tokens() {
        let filter = RemoveDuplicatesFilter::new();
        let tokens = vec![
            Token::new("running", 0),
            Token::new("run", 0).with_position_increment(0),
        ];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_keeps_repeats_at_different_positions() {
        let filter = RemoveDuplicatesFilter::new();
        let tokens = vec![Token::new("the", 0), Token::new("the", 1)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(RemoveDuplicatesFilter::new().name(), "remove_duplicates");
    }
}
