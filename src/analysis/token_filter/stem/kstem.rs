//! KStem-style light English stemmer.
//!
//! This module provides a conservative inflectional stemmer for English:
//! it undoes plurals, -ing and -ed, restoring the base form where the
//! spelling rules call for it, and leaves derivational suffixes alone.
//! Compared with the Porter algorithm it under-stems rather than
//! over-stems ("organization" stays "organization").

use crate::analysis::token_filter::stem::Stemmer;

/// Light English inflectional stemmer.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::stem::Stemmer;
/// use kotoba::analysis::token_filter::stem::kstem::KStemmer;
///
/// let stemmer = KStemmer::new();
/// assert_eq!(stemmer.stem("policies"), "policy");
/// assert_eq!(stemmer.stem("running"), "run");
/// assert_eq!(stemmer.stem("organization"), "organization");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KStemmer;

impl KStemmer {
    /// Create a new KStem-style stemmer.
    pub fn new() -> Self {
        KStemmer
    }
}

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn has_vowel(word: &str) -> bool {
    word.bytes().any(|c| is_vowel(c) || c == b'y')
}

/// Undo consonant doubling ("stopp" → "stop") after suffix removal.
fn undouble(word: &str) -> &str {
    let bytes = word.as_bytes();
    let len = bytes.len();
    if len >= 3
        && bytes[len - 1] == bytes[len - 2]
        && !is_vowel(bytes[len - 1])
        && !matches!(bytes[len - 1], b'l' | b's' | b'z')
    {
        &word[..len - 1]
    } else {
        word
    }
}

/// Restore a dropped final `e` after -ing/-ed removal when the stem ends
/// consonant-vowel-consonant ("mak" → "make").
fn needs_final_e(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let len = bytes.len();
    len >= 3
        && !is_vowel(bytes[len - 1])
        && !matches!(bytes[len - 1], b'w' | b'x' | b'y')
        && is_vowel(bytes[len - 2])
        && !is_vowel(bytes[len - 3])
}

fn strip_plural(word: &str) -> String {
    let len = word.len();
    if !word.ends_with('s') || len < 4 {
        return word.to_string();
    }
    // -ss, -us, -ous endings are not plurals.
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("ous") {
        return word.to_string();
    }
    if word.ends_with("ies") {
        return format!("{}y", &word[..len - 3]);
    }
    if word.ends_with("ches") || word.ends_with("shes") || word.ends_with("xes")
        || word.ends_with("zes")
    {
        return word[..len - 2].to_string();
    }
    if word.ends_with("es") {
        // "tables" → "table": keep the e when the singular ends in one.
        return word[..len - 1].to_string();
    }
    word[..len - 1].to_string()
}

fn strip_ing(word: &str) -> String {
    let len = word.len();
    if !word.ends_with("ing") || len < 6 {
        return word.to_string();
    }
    let stem = &word[..len - 3];
    if !has_vowel(stem) {
        return word.to_string();
    }
    let undoubled = undouble(stem);
    if undoubled.len() < stem.len() {
        return undoubled.to_string();
    }
    if needs_final_e(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn strip_ed(word: &str) -> String {
    let len = word.len();
    if !word.ends_with("ed") || len < 5 {
        return word.to_string();
    }
    if word.ends_with("ied") {
        return format!("{}y", &word[..len - 3]);
    }
    let stem = &word[..len - 2];
    if !has_vowel(stem) {
        return word.to_string();
    }
    let undoubled = undouble(stem);
    if undoubled.len() < stem.len() {
        return undoubled.to_string();
    }
    if needs_final_e(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

impl Stemmer for KStemmer {
    fn stem(&self, word: &str) -> String {
        if word.len() <= 2 || !word.is_ascii() {
            return word.to_lowercase();
        }

        let word = word.to_lowercase();
        let stemmed = strip_plural(&word);
        if stemmed != word {
            return stemmed;
        }
        let stemmed = strip_ing(&word);
        if stemmed != word {
            return stemmed;
        }
        strip_ed(&word)
    }

    fn name(&self) -> &'static str {
        "kstem"
    }
}
