//! Flatten graph filter implementation.
//!
//! This module provides a filter that converts a token graph (a stream
//! where tokens span multiple positions, as produced by the word-delimiter
//! filter with catenation or preserved originals) into a flat linear
//! stream. Consumers that ignore `position_length` would otherwise see
//! phantom position gaps.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that linearizes token graphs.
///
/// Every token's start node is the running sum of position increments; its
/// end node is start plus `position_length`. Flattening keeps only the
/// nodes where at least one token starts, renumbers them densely, and
/// rewrites each token's increment and length in the renumbered space.
/// Side paths are squashed onto the main path; the token order and every
/// token's text are unchanged.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::flatten_graph::FlattenGraphFilter;
/// use kotoba::analysis::token::Token;
///
/// // "Wi-Fi" preserved next to its parts: the original spans two positions.
/// let tokens = vec![
///     Token::new("Wi-Fi", 0).with_position_length(2),
///     Token::new("Wi", 0).with_position_increment(0),
///     Token::new("Fi", 1),
/// ];
/// let filter = FlattenGraphFilter::new();
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
/// assert_eq!(result.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FlattenGraphFilter;

impl FlattenGraphFilter {
    /// Create a new flatten graph filter.
    pub fn new() -> Self {
        FlattenGraphFilter
    }

    fn flatten(&self, input: Vec<Token>) -> Vec<Token> {
        if input.is_empty() {
            return input;
        }

        // Start and end nodes for every token, in stream order.
        let mut nodes: Vec<(usize, usize)> = Vec::with_capacity(input.len());
        let mut position = 0;
        for token in &input {
            position += token.position_increment;
            nodes.push((position, position + token.position_length.max(1)));
        }

        // Dense renumbering of the nodes where a token starts.
        let mut starts: Vec<usize> = nodes.iter().map(|&(s, _)| s).collect();
        starts.sort_unstable();
        starts.dedup();
        let rank = |node: usize| starts.partition_point(|&s| s < node);

        let mut output = input;
        let mut last_rank = 0;
        let mut first = true;
        for (token, &(start, end)) in output.iter_mut().zip(&nodes) {
            let start_rank = rank(start);
            let end_rank = rank(end).max(start_rank + 1);

            if first {
                first = false;
                // The leading token keeps its original gap (stop-word
                // removal before us may have left one).
            } else {
                token.position_increment = start_rank - last_rank;
            }
            token.position_length = end_rank - start_rank;
            token.position = start_rank;
            last_rank = start_rank;
        }

        output
    }
}

impl Filter for FlattenGraphFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let flattened = self.flatten(tokens.collect());
        Ok(Box::new(flattened.into_iter()))
    }

    fn name(&self) -> &'static str {
        "flatten_graph"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(tokens: Vec<Token>) -> Vec<Token> {
        FlattenGraphFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect()
    }

    #[test]
    fn test_linear_stream_unchanged() {
        let tokens = vec![
            Token::new("the", 0),
            Token::new("cat", 1),
            Token::new("sat", 2),
        ];
        let result = flatten(tokens);

        assert_eq!(result.len(), 3);
        for token in &result {
            assert_eq!(token.position_increment, 1);
            assert_eq!(token.position_length, 1);
        }
    }

    #[test]
    fn test_stacked_tokens_stay_stacked() {
        let tokens = vec![
            Token::new("running", 0),
            Token::new("run", 0).with_position_increment(0),
        ];
        let result = flatten(tokens);

        assert_eq!(result[0].position_increment, 1);
        assert_eq!(result[1].position_increment, 0);
    }

    #[test]
    fn test_spanning_token_clamped() {
        // Original spanning its two parts keeps a length of 2 because both
        // part positions survive.
        let tokens = vec![
            Token::new("Wi-Fi", 0).with_position_length(2),
            Token::new("Wi", 0).with_position_increment(0),
            Token::new("Fi", 1),
        ];
        let result = flatten(tokens);

        assert_eq!(result[0].position_length, 2);
        assert_eq!(result[1].position_length, 1);
        assert_eq!(result[2].position_increment, 1);
    }

    #[test]
    fn test_hole_in_span_is_squashed() {
        // A token spans three input positions but nothing starts at the
        // middle one, so the flat stream has only two positions.
        let tokens = vec![
            Token::new("a-b-c", 0).with_position_length(3),
            Token::new("abc", 0).with_position_increment(0),
            Token::new("tail", 3).with_position_increment(3),
        ];
        let result = flatten(tokens);

        assert_eq!(result[0].position_length, 1);
        assert_eq!(result[2].position_increment, 1);
    }

    #[test]
    fn test_empty_stream() {
        assert!(flatten(Vec::new()).is_empty());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(FlattenGraphFilter::new().name(), "flatten_graph");
    }
}
