//! Trim filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that trims leading and trailing whitespace from token text.
///
/// Tokens that become empty are kept; pair with a length filter to drop
/// them.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::trim::TrimFilter;
/// use kotoba::analysis::token::Token;
///
/// let filter = TrimFilter::new();
/// let tokens = vec![Token::new("  padded \t", 0)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
/// assert_eq!(result[0].text, "padded");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TrimFilter;

impl TrimFilter {
    /// Create a new trim filter.
    pub fn new() -> Self {
        TrimFilter
    }
}

impl Filter for TrimFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let trimmed = token.text.trim().to_string();
                token.with_text(trimmed)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "trim"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_trim_filter() {
        let filter = TrimFilter::new();
        let tokens = vec![
            Token::new("  hello", 0),
            Token::new("world  ", 1),
            Token::new("\tboth\n", 2),
            Token::new("none", 3),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "both");
        assert_eq!(result[3].text, "none");
    }

    #[test]
    fn test_all_whitespace_token_kept_empty() {
        let filter = TrimFilter::new();
        let tokens = vec![Token::new("   ", 0)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert!(result[0].text.is_empty());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(TrimFilter::new().name(), "trim");
    }
}
