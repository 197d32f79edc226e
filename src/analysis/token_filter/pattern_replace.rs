//! Pattern replace filter implementation.
//!
//! This module provides a filter that rewrites token text with a regular
//! expression find-and-replace, either for every match or only the first.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::{KotobaError, Result};

/// Which matches of the pattern are replaced in each token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReplaceMode {
    /// Replace every non-overlapping match.
    #[default]
    All,
    /// Replace only the first match.
    First,
}

/// A filter that applies a regex find-and-replace to token text.
///
/// The pattern is compiled once when the filter is built; an invalid
/// pattern is a definition error, reported before any text is processed.
/// The replacement string supports `$1`-style capture group references.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::pattern_replace::PatternReplaceFilter;
/// use kotoba::analysis::token::Token;
///
/// let filter = PatternReplaceFilter::new(r"[-_]", " ").unwrap();
/// let tokens = vec![Token::new("foo-bar_baz", 0)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
/// assert_eq!(result[0].text, "foo bar baz");
/// ```
#[derive(Clone, Debug)]
pub struct PatternReplaceFilter {
    pattern: Regex,
    replacement: String,
    mode: ReplaceMode,
}

impl PatternReplaceFilter {
    /// Create a filter that replaces all matches.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Self::with_mode(pattern, replacement, ReplaceMode::All)
    }

    /// Create a filter with an explicit replace mode.
    pub fn with_mode(pattern: &str, replacement: &str, mode: ReplaceMode) -> Result<Self> {
        let compiled =
            Regex::new(pattern).map_err(|e| KotobaError::invalid_pattern(pattern, e))?;
        Ok(PatternReplaceFilter {
            pattern: compiled,
            replacement: replacement.to_string(),
            mode,
        })
    }

    /// The source pattern string.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Filter for PatternReplaceFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let replaced = match self.mode {
                    ReplaceMode::All => self
                        .pattern
                        .replace_all(&token.text, self.replacement.as_str()),
                    ReplaceMode::First => {
                        self.pattern.replace(&token.text, self.replacement.as_str())
                    }
                }
                .into_owned();
                token.with_text(replaced)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn apply(filter: &PatternReplaceFilter, text: &str) -> String {
        let result: Vec<Token> = filter
            .filter(Box::new(vec![Token::new(text, 0)].into_iter()))
            .unwrap()
            .collect();
        result[0].text.clone()
    }

    #[test]
    fn test_replace_all() {
        let filter = PatternReplaceFilter::new(r"o", "0").unwrap();
        assert_eq!(apply(&filter, "foobar"), "f00bar");
    }

    #[test]
    fn test_replace_first() {
        let filter = PatternReplaceFilter::with_mode(r"o", "0", ReplaceMode::First).unwrap();
        assert_eq!(apply(&filter, "foobar"), "f0obar");
    }

    #[test]
    fn test_capture_groups() {
        let filter = PatternReplaceFilter::new(r"(\w+)@(\w+)", "$2.$1").unwrap();
        assert_eq!(apply(&filter, "user@host"), "host.user");
    }

    #[test]
    fn test_no_match_unchanged() {
        let filter = PatternReplaceFilter::new(r"\d+", "#").unwrap();
        assert_eq!(apply(&filter, "letters"), "letters");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = PatternReplaceFilter::new("[", "x");
        assert!(matches!(
            result,
            Err(KotobaError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_filter_name() {
        let filter = PatternReplaceFilter::new("a", "b").unwrap();
        assert_eq!(filter.name(), "pattern_replace");
    }
}
