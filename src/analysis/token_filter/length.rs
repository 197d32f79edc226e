//! Length filter implementation.
//!
//! This module provides a filter that removes tokens whose character count
//! falls outside a configured range.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{KotobaError, Result};

/// A filter that keeps only tokens within a character-length range.
///
/// Removed tokens leave a position gap, like stop-word removal.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::length::LengthFilter;
/// use kotoba::analysis::token::Token;
///
/// let filter = LengthFilter::new(2, 4).unwrap();
/// let tokens = vec![
///     Token::new("a", 0),
///     Token::new("fine", 1),
///     Token::new("lengthy", 2),
/// ];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "fine");
/// ```
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min: usize,
    max: usize,
}

impl LengthFilter {
    /// Create a new length filter keeping tokens of `min..=max` characters.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(KotobaError::invalid_definition(format!(
                "length bounds must satisfy min <= max, got min={min}, max={max}"
            )));
        }
        Ok(LengthFilter { min, max })
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        LengthFilter { min: 0, max: 255 }
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut filtered_tokens: Vec<Token> = Vec::new();
        let mut pending_increment = 0;

        for mut token in tokens {
            let len = token.char_len();
            if len < self.min || len > self.max {
                pending_increment += token.position_increment;
                continue;
            }
            token.position_increment += pending_increment;
            pending_increment = 0;
            filtered_tokens.push(token);
        }

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        let filter = LengthFilter::new(3, 5).unwrap();
        let tokens = vec![
            Token::new("go", 0),
            Token::new("fox", 1),
            Token::new("jumped", 2),
            Token::new("quick", 3),
        ];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["fox", "quick"]);
    }

    #[test]
    fn test_char_count_not_bytes() {
        let filter = LengthFilter::new(1, 3).unwrap();
        let tokens = vec![Token::new("日本語", 0)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_position_gap() {
        let filter = LengthFilter::new(3, 10).unwrap();
        let tokens = vec![Token::new("a", 0), Token::new("world", 1)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].position_increment, 2);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(LengthFilter::new(5, 2).is_err());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LengthFilter::default().name(), "length");
    }
}
