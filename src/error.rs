//! Error types for the Kotoba library.
//!
//! All fallible operations in Kotoba return [`Result`], whose error side is
//! the [`KotobaError`] enum. Definition problems (missing tokenizer, unknown
//! component tags, bad regex patterns, bad autocomplete bounds) are kept
//! distinct from runtime analysis failures so callers can tell "the
//! configuration is wrong" apart from "a stage blew up mid-run".
//!
//! # Examples
//!
//! ```
//! use kotoba::error::{KotobaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KotobaError::unknown_component_type("fancyFilter"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Kotoba operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum KotobaError {
    /// A custom analyzer definition has no tokenizer.
    #[error("tokenizer is required")]
    MissingTokenizer,

    /// A component definition carried a type tag outside the catalog.
    #[error("unknown component type: {0}")]
    UnknownComponentType(String),

    /// A snowball stemmer name that no supported algorithm matches.
    #[error("unknown stemmer: {0}")]
    UnknownStemmer(String),

    /// A regex-bearing definition carried a pattern that does not parse.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// Autocomplete gram bounds outside `1 <= min <= max`.
    #[error("invalid autocomplete bounds: min_grams={min}, max_grams={max}")]
    InvalidAutocompleteBounds { min: usize, max: usize },

    /// A component definition with parameters outside its documented range.
    #[error("invalid definition: {0}")]
    InvalidDefinition(String),

    /// An analyzer name that the preset registry does not know.
    #[error("unknown analyzer: {0}")]
    UnknownAnalyzer(String),

    /// A pipeline stage failed while processing text.
    #[error("analysis failed in {stage}: {cause}")]
    AnalysisFailure { stage: String, cause: String },

    /// I/O errors (reading definition files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KotobaError.
pub type Result<T> = std::result::Result<T, KotobaError>;

impl KotobaError {
    /// Create a new unknown-component-type error.
    pub fn unknown_component_type<S: Into<String>>(tag: S) -> Self {
        KotobaError::UnknownComponentType(tag.into())
    }

    /// Create a new unknown-stemmer error.
    pub fn unknown_stemmer<S: Into<String>>(name: S) -> Self {
        KotobaError::UnknownStemmer(name.into())
    }

    /// Create a new invalid-pattern error from a failed regex compile.
    pub fn invalid_pattern<S: Into<String>>(pattern: S, source: regex::Error) -> Self {
        KotobaError::InvalidPattern {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }

    /// Create a new unknown-analyzer error.
    pub fn unknown_analyzer<S: Into<String>>(name: S) -> Self {
        KotobaError::UnknownAnalyzer(name.into())
    }

    /// Create a new invalid-definition error.
    pub fn invalid_definition<S: Into<String>>(msg: S) -> Self {
        KotobaError::InvalidDefinition(msg.into())
    }

    /// Create a new analysis-failure error for a named pipeline stage.
    pub fn analysis_failure<S: Into<String>, C: Into<String>>(stage: S, cause: C) -> Self {
        KotobaError::AnalysisFailure {
            stage: stage.into(),
            cause: cause.into(),
        }
    }

    /// True when the error was caused by an invalid caller-supplied
    /// definition or request, as opposed to an internal stage failure.
    ///
    /// Boundary layers use this to pick a client-error vs server-error
    /// classification.
    pub fn is_invalid_definition(&self) -> bool {
        matches!(
            self,
            KotobaError::MissingTokenizer
                | KotobaError::UnknownComponentType(_)
                | KotobaError::UnknownStemmer(_)
                | KotobaError::InvalidPattern { .. }
                | KotobaError::InvalidAutocompleteBounds { .. }
                | KotobaError::InvalidDefinition(_)
                | KotobaError::UnknownAnalyzer(_)
        )
    }
}
