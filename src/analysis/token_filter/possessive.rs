//! English possessive filter implementation.
//!
//! This module provides a filter that strips trailing possessive suffixes
//! (`'s`) from tokens, so "King's" indexes as "King".

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes a trailing English possessive (`'s` or `’s`).
///
/// Both the ASCII apostrophe and the typographic right single quote are
/// recognized; matching is case-insensitive on the `s`.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::possessive::EnglishPossessiveFilter;
/// use kotoba::analysis::token::Token;
///
/// let filter = EnglishPossessiveFilter::new();
/// let tokens = vec![Token::new("King's", 0)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
/// assert_eq!(result[0].text, "King");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EnglishPossessiveFilter;

impl EnglishPossessiveFilter {
    /// Create a new English possessive filter.
    pub fn new() -> Self {
        EnglishPossessiveFilter
    }

    fn strip(text: &str) -> &str {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() >= 2 {
            let apostrophe = chars[chars.len() - 2];
            let s = chars[chars.len() - 1];
            if (apostrophe == '\'' || apostrophe == '\u{2019}') && (s == 's' || s == 'S') {
                let cut = text.len() - apostrophe.len_utf8() - s.len_utf8();
                return &text[..cut];
            }
        }
        text
    }
}

impl Filter for EnglishPossessiveFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let stripped = Self::strip(&token.text).to_string();
                token.with_text(stripped)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "english_possessive"
    }
}
