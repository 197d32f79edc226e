//! N-gram tokenizer implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{KotobaError, Result};

/// A tokenizer that generates character n-grams over the whole input.
///
/// Grams are emitted position-major: all gram sizes at one start offset
/// before moving to the next. N-grams are useful for substring matching,
/// fuzzy lookup, and scripts without word delimiters.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::tokenizer::ngram::NgramTokenizer;
/// use kotoba::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = NgramTokenizer::new(2, 3).unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("abc").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["ab", "abc", "bc"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramTokenizer {
    /// Minimum n-gram size
    min_gram: usize,
    /// Maximum n-gram size
    max_gram: usize,
}

impl NgramTokenizer {
    /// Create a new n-gram tokenizer.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_gram` is 0 or `max_gram < min_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        if min_gram == 0 {
            return Err(KotobaError::invalid_definition("minGram must be at least 1"));
        }
        if max_gram < min_gram {
            return Err(KotobaError::invalid_definition(format!(
                "maxGram ({max_gram}) must be >= minGram ({min_gram})"
            )));
        }
        Ok(Self { min_gram, max_gram })
    }
}

impl Tokenizer for NgramTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        // Byte offset of every char boundary, including the end of input.
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        let char_count = boundaries.len() - 1;

        let mut tokens = Vec::new();
        let mut position = 0;

        for start in 0..char_count {
            for gram_size in self.min_gram..=self.max_gram {
                let end = start + gram_size;
                if end > char_count {
                    break;
                }

                let start_offset = boundaries[start];
                let end_offset = boundaries[end];
                tokens.push(Token::with_offsets(
                    &text[start_offset..end_offset],
                    position,
                    start_offset,
                    end_offset,
                ));
                position += 1;
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &NgramTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_ngram_creation() {
        assert!(NgramTokenizer::new(2, 3).is_ok());
        assert!(NgramTokenizer::new(0, 2).is_err());
        assert!(NgramTokenizer::new(3, 2).is_err());
    }

    #[test]
    fn test_bigram() {
        let tokenizer = NgramTokenizer::new(2, 2).unwrap();
        assert_eq!(texts(&tokenizer, "hello"), vec!["he", "el", "ll", "lo"]);
    }

    #[test]
    fn test_variable_ngram() {
        let tokenizer = NgramTokenizer::new(2, 3).unwrap();
        assert_eq!(texts(&tokenizer, "abc"), vec!["ab", "abc", "bc"]);
    }

    #[test]
    fn test_unicode_offsets() {
        let tokenizer = NgramTokenizer::new(2, 2).unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("日本語").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "日本");
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 6);
        assert_eq!(tokens[1].text, "本語");
        assert_eq!(tokens[1].start_offset, 3);
        assert_eq!(tokens[1].end_offset, 9);
    }

    #[test]
    fn test_short_text() {
        let tokenizer = NgramTokenizer::new(3, 5).unwrap();
        assert!(texts(&tokenizer, "ab").is_empty());
    }

    #[test]
    fn test_exact_length() {
        let tokenizer = NgramTokenizer::new(3, 3).unwrap();
        assert_eq!(texts(&tokenizer, "abc"), vec!["abc"]);
    }

    #[test]
    fn test_tokenizer_name() {
        let tokenizer = NgramTokenizer::new(2, 2).unwrap();
        assert_eq!(tokenizer.name(), "ngram");
    }
}
