//! Porter stemming algorithm implementation.
//!
//! This module provides an implementation of the Porter stemming algorithm
//! for reducing English words to their stems.
//!
//! # Algorithm
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! # Examples
//!
//! ```
//! use kotoba::analysis::token_filter::stem::Stemmer;
//! use kotoba::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Porter stemming algorithm implementation.
///
/// A simplified rendition of the Porter algorithm; input is lowercased
/// ASCII (run it after a lowercase filter).
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

/// Vowel test at a byte position; `y` counts as a vowel after a consonant.
fn is_vowel(word: &str, pos: usize) -> bool {
    let bytes = word.as_bytes();
    if pos >= bytes.len() {
        return false;
    }
    match bytes[pos].to_ascii_lowercase() {
        b'a' | b'e' | b'i' | b'o' | b'u' => true,
        b'y' if pos > 0 => !is_vowel(word, pos - 1),
        _ => false,
    }
}

/// The Porter measure: the number of vowel-consonant sequences.
fn measure(word: &str) -> usize {
    let n = word.len();
    let mut m = 0;
    let mut i = 0;

    while i < n && !is_vowel(word, i) {
        i += 1;
    }
    while i < n {
        while i < n && is_vowel(word, i) {
            i += 1;
        }
        if i >= n {
            break;
        }
        m += 1;
        while i < n && !is_vowel(word, i) {
            i += 1;
        }
    }
    m
}

fn contains_vowel(word: &str) -> bool {
    (0..word.len()).any(|i| is_vowel(word, i))
}

fn ends_with(word: &str, suffix: &str) -> bool {
    word.len() >= suffix.len() && word[word.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

fn ends_with_double_consonant(word: &str) -> bool {
    let bytes = word.as_bytes();
    let len = bytes.len();
    len >= 2 && bytes[len - 1] == bytes[len - 2] && !is_vowel(word, len - 1)
}

/// Consonant-vowel-consonant ending, where the last consonant is not
/// `w`, `x` or `y`.
fn ends_cvc(word: &str) -> bool {
    let len = word.len();
    if len < 3 {
        return false;
    }
    !is_vowel(word, len - 3)
        && is_vowel(word, len - 2)
        && !is_vowel(word, len - 1)
        && !matches!(word.as_bytes()[len - 1], b'w' | b'x' | b'y')
}

/// Replace `old_suffix` with `new_suffix` when the remaining stem has at
/// least the given measure.
fn replace_suffix(word: &str, old_suffix: &str, new_suffix: &str, min_measure: usize) -> String {
    if ends_with(word, old_suffix) {
        let stem = &word[..word.len() - old_suffix.len()];
        if measure(stem) >= min_measure {
            return format!("{stem}{new_suffix}");
        }
    }
    word.to_string()
}

/// Step 1a: plural reduction.
fn step1a(word: &str) -> String {
    if ends_with(word, "sses") {
        format!("{}ss", &word[..word.len() - 4])
    } else if ends_with(word, "ies") {
        format!("{}i", &word[..word.len() - 3])
    } else if ends_with(word, "ss") {
        word.to_string()
    } else if ends_with(word, "s") && word.len() > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

/// Step 1b: -eed/-ed/-ing, with restoration of a final `e` where needed.
fn step1b(word: &str) -> String {
    let original = word;
    let word = if ends_with(word, "eed") {
        replace_suffix(word, "eed", "ee", 1)
    } else if ends_with(word, "ed") {
        let stem = &word[..word.len() - 2];
        if contains_vowel(stem) {
            stem.to_string()
        } else {
            word.to_string()
        }
    } else if ends_with(word, "ing") {
        let stem = &word[..word.len() - 3];
        if contains_vowel(stem) {
            stem.to_string()
        } else {
            word.to_string()
        }
    } else {
        word.to_string()
    };

    if word == original {
        return word;
    }
    if ends_with(&word, "at") || ends_with(&word, "bl") || ends_with(&word, "iz") {
        format!("{word}e")
    } else if ends_with_double_consonant(&word)
        && !ends_with(&word, "l")
        && !ends_with(&word, "s")
        && !ends_with(&word, "z")
    {
        word[..word.len() - 1].to_string()
    } else if measure(&word) == 1 && ends_cvc(&word) {
        format!("{word}e")
    } else {
        word
    }
}

/// Step 2: double-suffix reduction.
fn step2(word: &str) -> String {
    const SUFFIXES: &[(&str, &str)] = &[
        ("ational", "ate"),
        ("tional", "tion"),
        ("enci", "ence"),
        ("anci", "ance"),
        ("izer", "ize"),
        ("abli", "able"),
        ("alli", "al"),
        ("entli", "ent"),
        ("eli", "e"),
        ("ousli", "ous"),
        ("ization", "ize"),
        ("ation", "ate"),
        ("ator", "ate"),
        ("alism", "al"),
        ("iveness", "ive"),
        ("fulness", "ful"),
        ("ousness", "ous"),
        ("aliti", "al"),
        ("iviti", "ive"),
        ("biliti", "ble"),
    ];

    for (old_suffix, new_suffix) in SUFFIXES {
        if ends_with(word, old_suffix) {
            return replace_suffix(word, old_suffix, new_suffix, 1);
        }
    }
    word.to_string()
}

/// Step 3: -icate, -ative, -ful, -ness and friends.
fn step3(word: &str) -> String {
    const SUFFIXES: &[(&str, &str)] = &[
        ("icate", "ic"),
        ("ative", ""),
        ("alize", "al"),
        ("iciti", "ic"),
        ("ical", "ic"),
        ("ful", ""),
        ("ness", ""),
    ];

    for (old_suffix, new_suffix) in SUFFIXES {
        if ends_with(word, old_suffix) {
            return replace_suffix(word, old_suffix, new_suffix, 1);
        }
    }
    word.to_string()
}

/// Step 4: strip remaining derivational suffixes when the stem is long
/// enough (measure > 1).
fn step4(word: &str) -> String {
    const SUFFIXES: &[&str] = &[
        "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
        "ou", "ism", "ate", "iti", "ous", "ive", "ize",
    ];

    for suffix in SUFFIXES {
        if ends_with(word, suffix) {
            let stem = &word[..word.len() - suffix.len()];
            if measure(stem) > 1 {
                // -ion only drops after s or t.
                if *suffix != "ion" || ends_with(stem, "s") || ends_with(stem, "t") {
                    return stem.to_string();
                }
            }
        }
    }
    word.to_string()
}

/// Step 5: final -e and -ll cleanup.
fn step5(word: &str) -> String {
    let word = if ends_with(word, "e") {
        let stem = &word[..word.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            stem.to_string()
        } else {
            word.to_string()
        }
    } else {
        word.to_string()
    };

    if ends_with(&word, "ll") && measure(&word) > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if word.len() <= 2 || !word.is_ascii() {
            return word.to_lowercase();
        }

        let word = word.to_lowercase();
        let word = step1a(&word);
        let word = step1b(&word);
        let word = step2(&word);
        let word = step3(&word);
        let word = step4(&word);
        step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
