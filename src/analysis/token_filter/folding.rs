//! Folding filter implementation.
//!
//! This module provides a filter that applies case folding and accent
//! removal together, approximating ICU's folding transform: compatibility
//! decomposition, combining-mark removal, then lowercasing.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that case-folds and strips diacritics from token text.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::folding::FoldingFilter;
/// use kotoba::analysis::token::Token;
///
/// let filter = FoldingFilter::new();
/// let tokens = vec![Token::new("Ｃafé", 0)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
/// assert_eq!(result[0].text, "cafe");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FoldingFilter;

impl FoldingFilter {
    /// Create a new folding filter.
    pub fn new() -> Self {
        FoldingFilter
    }

    fn fold(text: &str) -> String {
        text.nfkd()
            .filter(|&c| canonical_combining_class(c) == 0)
            .collect::<String>()
            .to_lowercase()
    }
}

impl Filter for FoldingFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let folded = Self::fold(&token.text);
                token.with_text(folded)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "folding"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn fold_one(text: &str) -> String {
        let filter = FoldingFilter::new();
        let result: Vec<Token> = filter
            .filter(Box::new(vec![Token::new(text, 0)].into_iter()))
            .unwrap()
            .collect();
        result[0].text.clone()
    }

    #[test]
    fn test_case_fold() {
        assert_eq!(fold_one("HELLO"), "hello");
    }

    #[test]
    fn test_accent_strip() {
        assert_eq!(fold_one("Café"), "cafe");
        assert_eq!(fold_one("Ångström"), "angstrom");
    }

    #[test]
    fn test_compatibility_forms() {
        assert_eq!(fold_one("\u{ff28}\u{ff29}"), "hi");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(FoldingFilter::new().name(), "folding");
    }
}
