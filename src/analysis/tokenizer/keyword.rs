//! Keyword tokenizer implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that emits the entire input as a single token.
///
/// Useful for identifiers, zip codes, and other fields that must match
/// verbatim. Empty input produces an empty stream.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::tokenizer::keyword::KeywordTokenizer;
/// use kotoba::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = KeywordTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("Hello World").unwrap().collect();
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].text, "Hello World");
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeywordTokenizer;

impl KeywordTokenizer {
    /// Create a new keyword tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for KeywordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        if text.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }

        let token = Token::with_offsets(text, 0, 0, text.len());
        Ok(Box::new(std::iter::once(token)))
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_input_one_token() {
        let tokenizer = KeywordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Hello World").unwrap().collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "Hello World");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 11);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = KeywordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(KeywordTokenizer::new().name(), "keyword");
    }
}
