//! Word-boundary tokenizer that keeps URLs and e-mail addresses whole.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::{Tokenizer, chunk_by_chars};
use crate::analysis::token::{Token, TokenStream};
use crate::error::{KotobaError, Result};

/// Matches URLs (with scheme or a leading `www.`) and e-mail addresses.
static URL_OR_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?:https?|ftp)://[^\s<>()]+
        | www\.[^\s<>()]+
        | [A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9.-]*[A-Za-z0-9])?\.[A-Za-z]{2,}
        ",
    )
    .expect("built-in pattern is valid")
});

/// A tokenizer that splits on Unicode word boundaries but emits URLs and
/// e-mail addresses as single tokens.
///
/// Everything between recognized URL/e-mail spans is segmented like the
/// standard tokenizer. Tokens longer than `max_token_length` characters are
/// split into chunks of that length.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::tokenizer::url_email::UrlEmailTokenizer;
/// use kotoba::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = UrlEmailTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("mail me@example.com now").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["mail", "me@example.com", "now"]);
/// ```
#[derive(Clone, Debug)]
pub struct UrlEmailTokenizer {
    max_token_length: usize,
}

impl UrlEmailTokenizer {
    pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

    /// Create a new tokenizer with the default token length cap.
    pub fn new() -> Self {
        Self {
            max_token_length: Self::DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Create a tokenizer with a custom token length cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_token_length` is 0.
    pub fn with_max_token_length(max_token_length: usize) -> Result<Self> {
        if max_token_length == 0 {
            return Err(KotobaError::invalid_definition(
                "maxTokenLength must be at least 1",
            ));
        }
        Ok(Self { max_token_length })
    }

    fn push_words(&self, text: &str, base: usize, position: &mut usize, out: &mut Vec<Token>) {
        for (offset, word) in text.unicode_word_indices() {
            for (chunk, start, end) in chunk_by_chars(word, base + offset, self.max_token_length)
            {
                out.push(Token::with_offsets(chunk, *position, start, end));
                *position += 1;
            }
        }
    }
}

impl Default for UrlEmailTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for UrlEmailTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut last_end = 0;

        for mat in URL_OR_EMAIL.find_iter(text) {
            self.push_words(&text[last_end..mat.start()], last_end, &mut position, &mut tokens);
            for (chunk, start, end) in
                chunk_by_chars(mat.as_str(), mat.start(), self.max_token_length)
            {
                tokens.push(Token::with_offsets(chunk, position, start, end));
                position += 1;
            }
            last_end = mat.end();
        }
        self.push_words(&text[last_end..], last_end, &mut position, &mut tokens);

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "url_email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &UrlEmailTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_email_kept_whole() {
        let tokenizer = UrlEmailTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "send to jane.doe+tag@mail.example.org please"),
            vec!["send", "to", "jane.doe+tag@mail.example.org", "please"]
        );
    }

    #[test]
    fn test_url_kept_whole() {
        let tokenizer = UrlEmailTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "see https://example.com/a?b=1 and www.rust-lang.org today"),
            vec!["see", "https://example.com/a?b=1", "and", "www.rust-lang.org", "today"]
        );
    }

    #[test]
    fn test_plain_text_like_standard() {
        let tokenizer = UrlEmailTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "Hello, world!"),
            vec!["Hello", "world"]
        );
    }

    #[test]
    fn test_offsets_for_url() {
        let tokenizer = UrlEmailTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("at http://a.io end").unwrap().collect();

        assert_eq!(tokens[1].text, "http://a.io");
        assert_eq!(tokens[1].start_offset, 3);
        assert_eq!(tokens[1].end_offset, 14);
    }

    #[test]
    fn test_max_token_length_applies() {
        let tokenizer = UrlEmailTokenizer::with_max_token_length(5).unwrap();
        assert_eq!(
            texts(&tokenizer, "a@b.io plain"),
            vec!["a@b.i", "o", "plain"]
        );
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UrlEmailTokenizer::new().name(), "url_email");
    }
}
