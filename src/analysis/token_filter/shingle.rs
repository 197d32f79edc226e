//! Shingle filter implementation.
//!
//! This module provides a filter that joins runs of adjacent tokens into
//! single "shingle" tokens, capturing phrase adjacency: with shingle size
//! 2, "quick brown fox" yields "quick brown" and "brown fox".

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{KotobaError, Result};

/// A filter that emits shingles of adjacent tokens.
///
/// For every start token, shingles of `min_shingle_size..=max_shingle_size`
/// adjacent tokens are emitted (as far as the stream allows), joined by a
/// single space. A shingle takes the position of its first token and spans
/// as many positions as it combines tokens. With `output_unigrams` the
/// original single tokens are emitted too.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::shingle::ShingleFilter;
/// use kotoba::analysis::token::Token;
///
/// let filter = ShingleFilter::new(2, 2).unwrap();
/// let tokens = vec![
///     Token::new("quick", 0),
///     Token::new("brown", 1),
///     Token::new("fox", 2),
/// ];
/// let shingles: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(shingles, vec!["quick brown", "brown fox"]);
/// ```
#[derive(Clone, Debug)]
pub struct ShingleFilter {
    min_shingle_size: usize,
    max_shingle_size: usize,
    output_unigrams: bool,
}

impl ShingleFilter {
    /// Create a new shingle filter without unigram output.
    ///
    /// Returns an error unless `2 <= min <= max`.
    pub fn new(min_shingle_size: usize, max_shingle_size: usize) -> Result<Self> {
        if min_shingle_size < 2 || min_shingle_size > max_shingle_size {
            return Err(KotobaError::invalid_definition(format!(
                "shingle bounds must satisfy 2 <= min <= max, got min={min_shingle_size}, max={max_shingle_size}"
            )));
        }
        Ok(ShingleFilter {
            min_shingle_size,
            max_shingle_size,
            output_unigrams: false,
        })
    }

    /// Also emit the original single tokens alongside the shingles.
    pub fn with_unigrams(mut self) -> Self {
        self.output_unigrams = true;
        self
    }
}

impl Default for ShingleFilter {
    fn default() -> Self {
        ShingleFilter {
            min_shingle_size: 2,
            max_shingle_size: 2,
            output_unigrams: false,
        }
    }
}

impl Filter for ShingleFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let input: Vec<Token> = tokens.collect();
        let mut output: Vec<Token> = Vec::new();

        for (i, base) in input.iter().enumerate() {
            let mut first_increment = Some(base.position_increment);

            if self.output_unigrams {
                let increment = first_increment.take().unwrap_or(0);
                output.push(base.clone().with_position_increment(increment));
            }

            for size in self.min_shingle_size..=self.max_shingle_size {
                if i + size > input.len() {
                    break;
                }
                let text = input[i..i + size]
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let end_offset = input[i + size - 1].end_offset;
                let increment = first_increment.take().unwrap_or(0);
                let mut shingle = base.with_text(text).with_position_increment(increment);
                shingle.end_offset = end_offset;
                shingle.position_length = size;
                output.push(shingle);
            }
        }

        Ok(Box::new(output.into_iter()))
    }

    fn name(&self) -> &'static str {
        "shingle"
    }
}
