//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{KotobaError, Result};

#[derive(Clone, Debug)]
enum Mode {
    /// Emit the numbered capture group of every match (0 = whole match).
    Capture(usize),
    /// Emit the runs of text between matches.
    Split,
}

/// A regex-based tokenizer with two modes.
///
/// In capture mode every match of the pattern yields one token, taken from
/// a numbered capture group. In split mode the pattern marks separators and
/// the tokens are the non-empty runs between matches.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::tokenizer::pattern::PatternTokenizer;
/// use kotoba::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = PatternTokenizer::capture(r"([A-Z]+)", 1).unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("aBcDE").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["B", "DE"]);
///
/// let tokenizer = PatternTokenizer::split(r",").unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("a,b,,c").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["a", "b", "c"]);
/// ```
#[derive(Clone, Debug)]
pub struct PatternTokenizer {
    pattern: Arc<Regex>,
    mode: Mode,
}

impl PatternTokenizer {
    /// Create a tokenizer that emits capture group `group` of each match.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the pattern does not parse, or an
    /// invalid-definition error if the group number exceeds the groups the
    /// pattern defines.
    pub fn capture(pattern: &str, group: usize) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| KotobaError::invalid_pattern(pattern, e))?;
        if group >= regex.captures_len() {
            return Err(KotobaError::invalid_definition(format!(
                "capture group {group} exceeds the {} groups in '{pattern}'",
                regex.captures_len() - 1
            )));
        }
        Ok(Self {
            pattern: Arc::new(regex),
            mode: Mode::Capture(group),
        })
    }

    /// Create a tokenizer that splits on matches of the pattern.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the pattern does not parse.
    pub fn split(pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| KotobaError::invalid_pattern(pattern, e))?;
        Ok(Self {
            pattern: Arc::new(regex),
            mode: Mode::Split,
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for PatternTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;

        match self.mode {
            Mode::Capture(group) => {
                for caps in self.pattern.captures_iter(text) {
                    let Some(m) = caps.get(group) else {
                        continue;
                    };
                    if m.as_str().is_empty() {
                        continue;
                    }
                    tokens.push(Token::with_offsets(
                        m.as_str(),
                        position,
                        m.start(),
                        m.end(),
                    ));
                    position += 1;
                }
            }
            Mode::Split => {
                let mut last_end = 0;
                for mat in self.pattern.find_iter(text) {
                    if mat.start() > last_end {
                        tokens.push(Token::with_offsets(
                            &text[last_end..mat.start()],
                            position,
                            last_end,
                            mat.start(),
                        ));
                        position += 1;
                    }
                    last_end = mat.end();
                }
                if last_end < text.len() {
                    tokens.push(Token::with_offsets(
                        &text[last_end..],
                        position,
                        last_end,
                        text.len(),
                    ));
                }
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}
