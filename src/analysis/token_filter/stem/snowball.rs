//! Snowball stemmer adapter.
//!
//! This module wraps the `rust-stemmers` crate's snowball algorithms
//! behind the [`Stemmer`] trait, selected by language name.

use rust_stemmers::Algorithm;

use crate::analysis::token_filter::stem::Stemmer;
use crate::error::{KotobaError, Result};

/// Language names and their snowball algorithms.
const ALGORITHMS: &[(&str, Algorithm)] = &[
    ("arabic", Algorithm::Arabic),
    ("danish", Algorithm::Danish),
    ("dutch", Algorithm::Dutch),
    ("english", Algorithm::English),
    ("finnish", Algorithm::Finnish),
    ("french", Algorithm::French),
    ("german", Algorithm::German),
    ("greek", Algorithm::Greek),
    ("hungarian", Algorithm::Hungarian),
    ("italian", Algorithm::Italian),
    ("norwegian", Algorithm::Norwegian),
    ("portuguese", Algorithm::Portuguese),
    ("romanian", Algorithm::Romanian),
    ("russian", Algorithm::Russian),
    ("spanish", Algorithm::Spanish),
    ("swedish", Algorithm::Swedish),
    ("tamil", Algorithm::Tamil),
    ("turkish", Algorithm::Turkish),
];

/// A snowball stemmer for one language.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::stem::Stemmer;
/// use kotoba::analysis::token_filter::stem::snowball::SnowballStemmer;
///
/// let stemmer = SnowballStemmer::new("english").unwrap();
/// assert_eq!(stemmer.stem("fruitlessly"), "fruitless");
/// ```
pub struct SnowballStemmer {
    language: &'static str,
    stemmer: rust_stemmers::Stemmer,
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl SnowballStemmer {
    /// Create a snowball stemmer for the named language.
    ///
    /// Fails with `UnknownStemmer` for names outside the supported set.
    pub fn new(language: &str) -> Result<Self> {
        let (canonical, algorithm) = ALGORITHMS
            .iter()
            .find(|(name, _)| *name == language)
            .ok_or_else(|| KotobaError::unknown_stemmer(language))?;

        Ok(SnowballStemmer {
            language: canonical,
            stemmer: rust_stemmers::Stemmer::create(*algorithm),
        })
    }

    /// The names this stemmer accepts.
    pub fn supported_languages() -> impl Iterator<Item = &'static str> {
        ALGORITHMS.iter().map(|(name, _)| *name)
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        // Snowball algorithms expect lowercased input.
        let lowered = word.to_lowercase();
        self.stemmer.stem(&lowered).into_owned()
    }

    fn name(&self) -> &'static str {
        self.language
    }
}
