//! N-gram filter implementation.
//!
//! This module provides a filter that expands each token into all of its
//! contiguous character substrings within a length range.
//!
//! # Examples
//!
//! ```
//! use kotoba::analysis::token_filter::Filter;
//! use kotoba::analysis::token_filter::ngram::NgramFilter;
//! use kotoba::analysis::token::Token;
//!
//! let filter = NgramFilter::new(2, 3).unwrap();
//! let tokens = vec![Token::new("abc", 0)];
//! let grams: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(grams, vec!["ab", "abc", "bc"]);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::edge_gram::OutOfBoundsPolicy;
use crate::error::{KotobaError, Result};

/// A filter that emits all character n-grams of each token.
///
/// Grams are produced position-major: all grams starting at offset 0 in
/// increasing length order, then all grams at offset 1, and so on. All
/// grams of one token stack at the token's position (the first emitted
/// token keeps the original position increment, the rest use 0).
#[derive(Clone, Debug)]
pub struct NgramFilter {
    min_gram: usize,
    max_gram: usize,
    out_of_bounds: OutOfBoundsPolicy,
}

impl NgramFilter {
    /// Create a new n-gram filter with the default omit policy.
    ///
    /// Returns an error unless `1 <= min_gram <= max_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        Self::with_policy(min_gram, max_gram, OutOfBoundsPolicy::Omit)
    }

    /// Create a new n-gram filter with an explicit out-of-bounds policy.
    pub fn with_policy(
        min_gram: usize,
        max_gram: usize,
        out_of_bounds: OutOfBoundsPolicy,
    ) -> Result<Self> {
        if min_gram == 0 || min_gram > max_gram {
            return Err(KotobaError::invalid_definition(format!(
                "ngram bounds must satisfy 1 <= min <= max, got min={min_gram}, max={max_gram}"
            )));
        }
        Ok(NgramFilter {
            min_gram,
            max_gram,
            out_of_bounds,
        })
    }
}

impl Filter for NgramFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut output: Vec<Token> = Vec::new();

        for token in tokens {
            let chars: Vec<char> = token.text.chars().collect();
            let mut first_increment = Some(token.position_increment);

            if chars.len() < self.min_gram || chars.len() > self.max_gram {
                if self.out_of_bounds == OutOfBoundsPolicy::Include {
                    let increment = first_increment.take().unwrap_or(0);
                    output.push(token.clone().with_position_increment(increment));
                }
            }

            for start in 0..chars.len() {
                let longest = self.max_gram.min(chars.len() - start);
                for len in self.min_gram..=longest {
                    let gram: String = chars[start..start + len].iter().collect();
                    let increment = first_increment.take().unwrap_or(0);
                    output.push(token.with_text(gram).with_position_increment(increment));
                }
            }
        }

        Ok(Box::new(output.into_iter()))
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}
