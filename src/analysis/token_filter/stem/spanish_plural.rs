//! Spanish plural stemmer.
//!
//! This module provides a minimal Spanish stemmer that only reduces
//! plurals to their singular form, leaving gender and derivational
//! morphology alone: "canciones" → "cancion", "luces" → "luz",
//! "gatos" → "gato".

use crate::analysis::token_filter::stem::Stemmer;

/// Minimal Spanish plural-reduction stemmer.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::stem::Stemmer;
/// use kotoba::analysis::token_filter::stem::spanish_plural::SpanishPluralStemmer;
///
/// let stemmer = SpanishPluralStemmer::new();
/// assert_eq!(stemmer.stem("gatos"), "gato");
/// assert_eq!(stemmer.stem("luces"), "luz");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishPluralStemmer;

impl SpanishPluralStemmer {
    /// Create a new Spanish plural stemmer.
    pub fn new() -> Self {
        SpanishPluralStemmer
    }
}

impl Stemmer for SpanishPluralStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();

        if len < 4 || chars[len - 1] != 's' {
            return word;
        }

        // -ces → -z (luces → luz, veces → vez)
        if word.ends_with("ces") {
            let stem: String = chars[..len - 3].iter().collect();
            return format!("{stem}z");
        }

        // -es after a consonant that takes an epenthetic e in the plural
        // (canciones → cancion, papeles → papel, reyes → rey).
        if word.ends_with("es") && len >= 5 {
            let before = chars[len - 3];
            if matches!(before, 'n' | 'r' | 'l' | 'd' | 'j' | 'y' | 'x') {
                return chars[..len - 2].iter().collect();
            }
        }

        // Vowel + s (gatos → gato, casas → casa).
        if matches!(chars[len - 2], 'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú') {
            return chars[..len - 1].iter().collect();
        }

        word
    }

    fn name(&self) -> &'static str {
        "spanish_plural"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_plurals() {
        let stemmer = SpanishPluralStemmer::new();
        assert_eq!(stemmer.stem("gatos"), "gato");
        assert_eq!(stemmer.stem("casas"), "casa");
    }

    #[test]
    fn test_es_plurals() {
        let stemmer = SpanishPluralStemmer::new();
        assert_eq!(stemmer.stem("canciones"), "cancion");
        assert_eq!(stemmer.stem("papeles"), "papel");
        assert_eq!(stemmer.stem("reyes"), "rey");
    }

    #[test]
    fn test_ces_plurals() {
        let stemmer = SpanishPluralStemmer::new();
        assert_eq!(stemmer.stem("luces"), "luz");
        assert_eq!(stemmer.stem("veces"), "vez");
    }

    #[test]
    fn test_non_plurals_unchanged() {
        let stemmer = SpanishPluralStemmer::new();
        assert_eq!(stemmer.stem("cancion"), "cancion");
        assert_eq!(stemmer.stem("gas"), "gas");
        assert_eq!(stemmer.stem("vals"), "vals");
    }

    #[test]
    fn test_name() {
        assert_eq!(SpanishPluralStemmer::new().name(), "spanish_plural");
    }
}
