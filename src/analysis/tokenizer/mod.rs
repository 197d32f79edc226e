//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Split `text` into chunks of at most `max_chars` characters.
///
/// Yields `(chunk, start_offset, end_offset)` tuples with byte offsets
/// relative to the enclosing text (`base_offset` is the byte offset of
/// `text` itself). Tokenizers with a maximum token length use this to break
/// over-long tokens apart instead of dropping them.
pub(crate) fn chunk_by_chars(
    text: &str,
    base_offset: usize,
    max_chars: usize,
) -> Vec<(String, usize, usize)> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_start = 0;
    let mut count = 0;

    for (i, c) in text.char_indices() {
        if count == 0 {
            chunk_start = i;
        }
        chunk.push(c);
        count += 1;
        if count == max_chars {
            let end = i + c.len_utf8();
            chunks.push((
                std::mem::take(&mut chunk),
                base_offset + chunk_start,
                base_offset + end,
            ));
            count = 0;
        }
    }
    if !chunk.is_empty() {
        chunks.push((chunk, base_offset + chunk_start, base_offset + text.len()));
    }

    chunks
}

// Individual tokenizer modules
pub mod edge_gram;
pub mod keyword;
pub mod ngram;
pub mod pattern;
pub mod standard;
pub mod url_email;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use edge_gram::EdgeGramTokenizer;
pub use keyword::KeywordTokenizer;
pub use ngram::NgramTokenizer;
pub use pattern::PatternTokenizer;
pub use standard::StandardTokenizer;
pub use url_email::UrlEmailTokenizer;
pub use whitespace::WhitespaceTokenizer;
