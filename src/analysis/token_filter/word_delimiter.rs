//! Word delimiter graph filter implementation.
//!
//! This module provides a filter that splits tokens on intra-word
//! boundaries (delimiter characters, case changes, letter/number
//! transitions) and can additionally re-join the split parts, producing a
//! token graph: "PowerShot500" can yield "Power", "Shot", "500",
//! "PowerShot" and the original, all position-aligned.

use std::collections::HashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Behavior flags for [`WordDelimiterGraphFilter`].
///
/// The defaults generate word and number parts, split on case changes and
/// numerics, and strip English possessives, without any catenation.
#[derive(Clone, Debug)]
pub struct WordDelimiterOptions {
    /// Emit each run of letters as its own token.
    pub generate_word_parts: bool,
    /// Emit each run of digits as its own token.
    pub generate_number_parts: bool,
    /// Emit maximal runs of adjacent letter parts joined together.
    pub catenate_words: bool,
    /// Emit maximal runs of adjacent number parts joined together.
    pub catenate_numbers: bool,
    /// Emit all parts of the token joined together.
    pub catenate_all: bool,
    /// Treat a lowercase-to-uppercase transition as a boundary.
    pub split_on_case_change: bool,
    /// Emit the unsplit original token too.
    pub preserve_original: bool,
    /// Treat a letter/digit transition as a boundary.
    pub split_on_numerics: bool,
    /// Strip a trailing English possessive (`'s`) before splitting.
    pub stem_english_possessive: bool,
    /// Tokens never split, regardless of their content.
    pub protected_words: Vec<String>,
    /// Match protected words case-insensitively.
    pub ignore_case: bool,
}

impl Default for WordDelimiterOptions {
    fn default() -> Self {
        WordDelimiterOptions {
            generate_word_parts: true,
            generate_number_parts: true,
            catenate_words: false,
            catenate_numbers: false,
            catenate_all: false,
            split_on_case_change: true,
            preserve_original: false,
            split_on_numerics: true,
            stem_english_possessive: true,
            protected_words: Vec::new(),
            ignore_case: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum PartKind {
    Word,
    Number,
}

struct Part {
    text: String,
    kind: PartKind,
}

/// A filter that splits tokens on intra-word boundaries.
///
/// Split parts occupy successive positions; the preserved original and any
/// catenated forms stack at the position of their first part with a
/// position length spanning the parts they cover. Streams produced with
/// catenation or preserved originals are token graphs; follow with a
/// flatten-graph filter before consumers that need a linear stream.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::word_delimiter::{
///     WordDelimiterGraphFilter, WordDelimiterOptions,
/// };
/// use kotoba::analysis::token::Token;
///
/// let filter = WordDelimiterGraphFilter::new(WordDelimiterOptions::default());
/// let tokens = vec![Token::new("Wi-Fi", 0)];
/// let parts: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(parts, vec!["Wi", "Fi"]);
/// ```
pub struct WordDelimiterGraphFilter {
    options: WordDelimiterOptions,
    protected: HashSet<String>,
}

impl WordDelimiterGraphFilter {
    /// Create a new word delimiter filter with the given options.
    pub fn new(options: WordDelimiterOptions) -> Self {
        let protected = options
            .protected_words
            .iter()
            .map(|w| {
                if options.ignore_case {
                    w.to_lowercase()
                } else {
                    w.clone()
                }
            })
            .collect();
        WordDelimiterGraphFilter { options, protected }
    }

    fn is_protected(&self, text: &str) -> bool {
        if self.protected.is_empty() {
            return false;
        }
        if self.options.ignore_case {
            self.protected.contains(&text.to_lowercase())
        } else {
            self.protected.contains(text)
        }
    }

    fn strip_possessive<'a>(&self, text: &'a str) -> &'a str {
        if !self.options.stem_english_possessive {
            return text;
        }
        let chars: Vec<char> = text.chars().collect();
        if chars.len() >= 2 {
            let apostrophe = chars[chars.len() - 2];
            let s = chars[chars.len() - 1];
            if (apostrophe == '\'' || apostrophe == '\u{2019}') && (s == 's' || s == 'S') {
                return &text[..text.len() - apostrophe.len_utf8() - s.len_utf8()];
            }
        }
        text
    }

    /// Split text into alternating letter and digit parts.
    fn split_parts(&self, text: &str) -> Vec<Part> {
        let mut parts: Vec<Part> = Vec::new();
        let mut current = String::new();
        let mut current_kind: Option<PartKind> = None;
        let mut prev_char: Option<char> = None;

        for c in text.chars() {
            let kind = if c.is_alphabetic() {
                Some(PartKind::Word)
            } else if c.is_numeric() {
                Some(PartKind::Number)
            } else {
                None
            };

            let Some(kind) = kind else {
                // Delimiter character: close the current part.
                if let Some(k) = current_kind.take() {
                    parts.push(Part {
                        text: std::mem::take(&mut current),
                        kind: k,
                    });
                }
                prev_char = None;
                continue;
            };

            let mut boundary = false;
            if let Some(k) = current_kind {
                if k != kind && self.options.split_on_numerics {
                    boundary = true;
                }
                if self.options.split_on_case_change
                    && c.is_uppercase()
                    && prev_char.is_some_and(|p| p.is_lowercase())
                {
                    boundary = true;
                }
            }

            if boundary {
                if let Some(k) = current_kind {
                    parts.push(Part {
                        text: std::mem::take(&mut current),
                        kind: k,
                    });
                }
            }

            // A mixed run without numeric splitting keeps the kind of its
            // first character.
            if current.is_empty() {
                current_kind = Some(kind);
            }
            current.push(c);
            prev_char = Some(c);
        }

        if let Some(k) = current_kind {
            parts.push(Part {
                text: current,
                kind: k,
            });
        }

        parts
    }

    /// Length (in parts) of the maximal same-kind run starting at `start`.
    fn run_length(parts: &[Part], start: usize, kind: PartKind) -> usize {
        parts[start..]
            .iter()
            .take_while(|p| p.kind == kind)
            .count()
    }
}

impl Filter for WordDelimiterGraphFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let opts = &self.options;
        let mut output: Vec<Token> = Vec::new();
        let mut pending_increment = 0;

        for token in tokens {
            if self.is_protected(&token.text) {
                let mut kept = token;
                kept.position_increment += pending_increment;
                pending_increment = 0;
                output.push(kept);
                continue;
            }

            let stripped = self.strip_possessive(&token.text);
            let parts = self.split_parts(stripped);

            // Unsplittable token (single part covering everything): emit
            // as-is, possessive stripped.
            if parts.len() == 1 && parts[0].text == stripped {
                let mut kept = token.with_text(stripped);
                kept.position_increment += pending_increment;
                pending_increment = 0;
                output.push(kept);
                continue;
            }

            if parts.is_empty() {
                // All delimiters; the token vanishes and leaves a gap.
                pending_increment += token.position_increment;
                continue;
            }

            let base_increment = token.position_increment + pending_increment;
            pending_increment = 0;
            let mut emitted_any = false;

            let mut stack_at = |output: &mut Vec<Token>,
                               emitted_any: &mut bool,
                               part_index: usize,
                               text: String,
                               span: usize| {
                let increment = if !*emitted_any {
                    *emitted_any = true;
                    base_increment
                } else if part_index == 0 {
                    0
                } else {
                    1
                };
                let mut t = token.with_text(text).with_position_increment(increment);
                t.position_length = span;
                output.push(t);
            };

            // The original and full catenation span every part.
            if opts.preserve_original {
                stack_at(
                    &mut output,
                    &mut emitted_any,
                    0,
                    token.text.clone(),
                    parts.len(),
                );
            }
            if opts.catenate_all && parts.len() > 1 {
                let all: String = parts.iter().map(|p| p.text.as_str()).collect();
                stack_at(&mut output, &mut emitted_any, 0, all, parts.len());
            }

            let mut position_open = false;
            for (i, part) in parts.iter().enumerate() {
                let run_starts_here =
                    i == 0 || parts[i - 1].kind != part.kind;
                let catenate = match part.kind {
                    PartKind::Word => opts.catenate_words,
                    PartKind::Number => opts.catenate_numbers,
                };
                if catenate && run_starts_here {
                    let run = Self::run_length(&parts, i, part.kind);
                    if run > 1 {
                        let joined: String = parts[i..i + run]
                            .iter()
                            .map(|p| p.text.as_str())
                            .collect();
                        stack_at(&mut output, &mut emitted_any, i, joined, run);
                        position_open = true;
                    }
                }

                let generate = match part.kind {
                    PartKind::Word => opts.generate_word_parts,
                    PartKind::Number => opts.generate_number_parts,
                };
                if generate {
                    let index = if position_open { 0 } else { i };
                    stack_at(&mut output, &mut emitted_any, index, part.text.clone(), 1);
                    position_open = false;
                }
            }

            if !emitted_any {
                pending_increment += base_increment;
            }
        }

        Ok(Box::new(output.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_delimiter_graph"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(options: WordDelimiterOptions, text: &str) -> Vec<Token> {
        let filter = WordDelimiterGraphFilter::new(options);
        filter
            .filter(Box::new(vec![Token::new(text, 0)].into_iter()))
            .unwrap()
            .collect()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_split_on_delimiters() {
        let result = run(WordDelimiterOptions::default(), "Wi-Fi");
        assert_eq!(texts(&result), vec!["Wi", "Fi"]);
        assert_eq!(result[0].position_increment, 1);
        assert_eq!(result[1].position_increment, 1);
    }

    #[test]
    fn test_split_on_case_change() {
        let result = run(WordDelimiterOptions::default(), "PowerShot");
        assert_eq!(texts(&result), vec!["Power", "Shot"]);
    }

    #[test]
    fn test_no_case_split_when_disabled() {
        let options = WordDelimiterOptions {
            split_on_case_change: false,
            ..Default::default()
        };
        let result = run(options, "PowerShot");
        assert_eq!(texts(&result), vec!["PowerShot"]);
    }

    #[test]
    fn test_split_on_numerics() {
        let result = run(WordDelimiterOptions::default(), "SD500");
        assert_eq!(texts(&result), vec!["SD", "500"]);
    }

    #[test]
    fn test_no_numeric_split_when_disabled() {
        let options = WordDelimiterOptions {
            split_on_numerics: false,
            ..Default::default()
        };
        let result = run(options, "j2se");
        assert_eq!(texts(&result), vec!["j2se"]);
    }

    #[test]
    fn test_possessive_stripped() {
        let result = run(WordDelimiterOptions::default(), "O'Neil's");
        assert_eq!(texts(&result), vec!["O", "Neil"]);
    }

    #[test]
    fn test_possessive_kept_when_disabled() {
        let options = WordDelimiterOptions {
            stem_english_possessive: false,
            ..Default::default()
        };
        let result = run(options, "O'Neil's");
        assert_eq!(texts(&result), vec!["O", "Neil", "s"]);
    }

    #[test]
    fn test_preserve_original() {
        let options = WordDelimiterOptions {
            preserve_original: true,
            ..Default::default()
        };
        let result = run(options, "Wi-Fi");
        assert_eq!(texts(&result), vec!["Wi-Fi", "Wi", "Fi"]);
        assert_eq!(result[0].position_increment, 1);
        assert_eq!(result[0].position_length, 2);
        assert_eq!(result[1].position_increment, 0);
        assert_eq!(result[2].position_increment, 1);
    }

    #[test]
    fn test_catenate_words() {
        let options = WordDelimiterOptions {
            catenate_words: true,
            ..Default::default()
        };
        let result = run(options, "wi-fi-500");
        assert_eq!(texts(&result), vec!["wifi", "wi", "fi", "500"]);
        assert_eq!(result[0].position_length, 2);
        assert_eq!(result[1].position_increment, 0);
    }

    #[test]
    fn test_catenate_all() {
        let options = WordDelimiterOptions {
            catenate_all: true,
            generate_word_parts: false,
            generate_number_parts: false,
            ..Default::default()
        };
        let result = run(options, "SD-500x");
        assert_eq!(texts(&result), vec!["SD500x"]);
    }

    #[test]
    fn test_protected_words() {
        let options = WordDelimiterOptions {
            protected_words: vec!["Wi-Fi".to_string()],
            ignore_case: true,
            ..Default::default()
        };
        let result = run(options, "wi-fi");
        assert_eq!(texts(&result), vec!["wi-fi"]);
    }

    #[test]
    fn test_all_delimiter_token_leaves_gap() {
        let filter = WordDelimiterGraphFilter::new(WordDelimiterOptions::default());
        let tokens = vec![
            Token::new("a", 0),
            Token::new("--", 1),
            Token::new("b", 2),
        ];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(texts(&result), vec!["a", "b"]);
        assert_eq!(result[1].position_increment, 2);
    }

    #[test]
    fn test_filter_name() {
        let filter = WordDelimiterGraphFilter::new(WordDelimiterOptions::default());
        assert_eq!(filter.name(), "word_delimiter_graph");
    }
}
