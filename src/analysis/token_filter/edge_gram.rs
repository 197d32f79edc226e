//! Edge n-gram filter implementation.
//!
//! This module provides a filter that expands each token into its prefixes,
//! which supports search-as-you-type matching.
//!
//! # Examples
//!
//! ```
//! use kotoba::analysis::token_filter::Filter;
//! use kotoba::analysis::token_filter::edge_gram::EdgeGramFilter;
//! use kotoba::analysis::token::Token;
//!
//! let filter = EdgeGramFilter::new(2, 3).unwrap();
//! let tokens = vec![Token::new("test", 0)];
//! let grams: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(grams, vec!["te", "tes"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{KotobaError, Result};

/// What to do with a token whose length falls outside the gram bounds.
///
/// A token shorter than `min_gram` produces no grams at all; a token longer
/// than `max_gram` produces grams but loses its full surface form. The
/// policy decides whether such tokens are additionally emitted unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutOfBoundsPolicy {
    /// Emit the out-of-bounds token unchanged alongside any grams.
    Include,
    /// Drop the out-of-bounds token (grams, if any, are still emitted).
    #[default]
    Omit,
}

/// A filter that emits the prefixes of each token.
///
/// For a token of `n` characters, prefixes of `min_gram..=min(max_gram, n)`
/// characters are emitted in increasing length order. All grams of one
/// token stack at the token's position: the first emitted token keeps the
/// original position increment, the rest use increment 0.
#[derive(Clone, Debug)]
pub struct EdgeGramFilter {
    min_gram: usize,
    max_gram: usize,
    out_of_bounds: OutOfBoundsPolicy,
}

impl EdgeGramFilter {
    /// Create a new edge n-gram filter with the default omit policy.
    ///
    /// Returns an error unless `1 <= min_gram <= max_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        Self::with_policy(min_gram, max_gram, OutOfBoundsPolicy::Omit)
    }

    /// Create a new edge n-gram filter with an explicit out-of-bounds policy.
    pub fn with_policy(
        min_gram: usize,
        max_gram: usize,
        out_of_bounds: OutOfBoundsPolicy,
    ) -> Result<Self> {
        if min_gram == 0 || min_gram > max_gram {
            return Err(KotobaError::invalid_definition(format!(
                "edge gram bounds must satisfy 1 <= min <= max, got min={min_gram}, max={max_gram}"
            )));
        }
        Ok(EdgeGramFilter {
            min_gram,
            max_gram,
            out_of_bounds,
        })
    }
}

impl Filter for EdgeGramFilter {
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

            for len in self.min_gram..=self.max_gram.min(chars.len()) {
                let gram: String = chars[..len].iter().collect();
                let increment = first_increment.take().unwrap_or(0);
                output.push(token.with_text(gram).with_position_increment(increment));
            }
        }

        Ok(Box::new(output.into_iter()))
    }

    fn name(&self) -> &'static str {
        "edge_gram"
    }
}
