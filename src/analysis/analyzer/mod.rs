//! Analyzer trait and the pipeline analyzer.
//!
//! An analyzer is the complete text processing pipeline: char filters,
//! then a tokenizer, then token filters. [`PipelineAnalyzer`] is the one
//! concrete implementation; the built-in presets in [`crate::registry`]
//! are pipeline analyzers assembled in code.

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod pipeline;

pub use pipeline::PipelineAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
///
/// Requires `Send + Sync` so analyzers can be shared across threads;
/// analysis itself takes `&self` and keeps no per-call state, so one
/// analyzer instance serves any number of concurrent calls.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Collect the distinct token texts an analyzer produces for a text, in
/// first-occurrence order.
pub fn token_texts(analyzer: &dyn Analyzer, text: &str) -> Result<Vec<String>> {
    let mut seen = std::collections::HashSet::new();
    let mut texts = Vec::new();
    for token in analyzer.analyze(text)? {
        if seen.insert(token.text.clone()) {
            texts.push(token.text);
        }
    }
    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    struct FixedAnalyzer;

    impl Analyzer for FixedAnalyzer {
        fn analyze(&self, _text: &str) -> Result<TokenStream> {
            Ok(Box::new(
                vec![
                    Token::new("a", 0),
                    Token::new("b", 1),
                    Token::new("a", 2),
                ]
                .into_iter(),
            ))
        }

        fn name(&self) -> &'static str {
            "fixed"
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[test]
    fn test_token_texts_deduplicates_in_order() {
        let texts = token_texts(&FixedAnalyzer, "ignored").unwrap();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
