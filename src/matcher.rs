//! Index-vs-query token comparison.
//!
//! Given the token texts produced by the index-side and query-side
//! analyses, [`compare`] computes the intersection of the two sets and
//! annotates each side's tokens with a matched flag. The operation is pure:
//! same inputs, same output, no state kept between calls.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A token text annotated for comparison output.
///
/// Identity is by `text` alone: two `TokenInfo` with equal text are the
/// same entity for set membership regardless of their flags. `length` is
/// always the character count of `text` and is recomputed whenever the
/// text is set.
///
/// # Examples
///
/// ```
/// use kotoba::matcher::TokenInfo;
///
/// let token = TokenInfo::new("café");
/// assert_eq!(token.length, 4);
/// assert!(!token.matched);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// The token's surface form.
    pub text: String,
    /// Character count of `text`.
    pub length: usize,
    /// Whether the text appears on both sides of a comparison.
    pub matched: bool,
}

impl TokenInfo {
    /// Create an unmatched token for the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let length = text.chars().count();
        TokenInfo {
            text,
            length,
            matched: false,
        }
    }

    /// Replace the text, keeping `length` in sync.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.length = self.text.chars().count();
    }
}

impl PartialEq for TokenInfo {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for TokenInfo {}

impl std::hash::Hash for TokenInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

/// The result of comparing index-side and query-side token texts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Index-side tokens, first-occurrence order, annotated.
    pub index_tokens: Vec<TokenInfo>,
    /// Query-side tokens, first-occurrence order, annotated.
    pub query_tokens: Vec<TokenInfo>,
    /// Texts present on both sides, ordered by index-side first occurrence.
    pub matching_tokens: Vec<String>,
}

/// Compare index-side and query-side token texts.
///
/// Each side is de-duplicated to its distinct texts in first-occurrence
/// order; a token is `matched` exactly when its text appears on both
/// sides. The matching set follows the index side's order so the output
/// is byte-stable for fixed inputs.
pub fn compare<S: AsRef<str>>(index_texts: &[S], query_texts: &[S]) -> Comparison {
    let index_distinct = distinct_in_order(index_texts);
    let query_distinct = distinct_in_order(query_texts);

    let query_set: AHashSet<&str> = query_distinct.iter().map(String::as_str).collect();

    let matching_tokens: Vec<String> = index_distinct
        .iter()
        .filter(|text| query_set.contains(text.as_str()))
        .cloned()
        .collect();
    let matching_set: AHashSet<&str> = matching_tokens.iter().map(String::as_str).collect();

    let annotate = |texts: Vec<String>| -> Vec<TokenInfo> {
        texts
            .into_iter()
            .map(|text| {
                let matched = matching_set.contains(text.as_str());
                let mut info = TokenInfo::new(text);
                info.matched = matched;
                info
            })
            .collect()
    };

    Comparison {
        index_tokens: annotate(index_distinct),
        query_tokens: annotate(query_distinct),
        matching_tokens,
    }
}

fn distinct_in_order<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    let mut seen = AHashSet::new();
    let mut ordered = Vec::new();
    for text in texts {
        let text = text.as_ref();
        if seen.insert(text) {
            ordered.push(text.to_string());
        }
    }
    ordered
}
