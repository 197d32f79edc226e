//! Edge n-gram tokenizer implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{KotobaError, Result};

/// A tokenizer that generates n-grams anchored at the start of the input.
///
/// The whole input is treated as one string (whitespace included), and the
/// tokens are its prefixes with lengths from `min_gram` to `max_gram`
/// characters.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::tokenizer::edge_gram::EdgeGramTokenizer;
/// use kotoba::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = EdgeGramTokenizer::new(2, 4).unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("test").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["te", "tes", "test"]);
/// ```
#[derive(Clone, Debug)]
pub struct EdgeGramTokenizer {
    /// Minimum prefix length
    min_gram: usize,
    /// Maximum prefix length
    max_gram: usize,
}

impl EdgeGramTokenizer {
    /// Create a new edge n-gram tokenizer.
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

impl Tokenizer for EdgeGramTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut prefix = String::new();
        let mut position = 0;

        for (count, c) in text.chars().enumerate() {
            prefix.push(c);
            let gram_size = count + 1;
            if gram_size > self.max_gram {
                break;
            }
            if gram_size >= self.min_gram {
                tokens.push(Token::with_offsets(&prefix, position, 0, prefix.len()));
                position += 1;
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "edge_gram"
    }
}
