//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the text string before it is passed to the
//! tokenizer. They run in declared order, each receiving the previous
//! filter's output.
//!
//! # Available Filters
//!
//! - [`html_strip::HtmlStripCharFilter`] - Removes HTML/XML markup
//! - [`mapping::MappingCharFilter`] - Multi-string mapping replacement
//! - [`persian::PersianCharFilter`] - Zero-width non-joiner normalization
//! - [`unicode_normalize::UnicodeNormalizeCharFilter`] - Unicode normalization (NFC, NFD, etc.)
//!
//! # Examples
//!
//! ```
//! use kotoba::analysis::char_filter::CharFilter;
//! use kotoba::analysis::char_filter::persian::PersianCharFilter;
//!
//! let filter = PersianCharFilter::new();
//! assert_eq!(filter.filter("می\u{200c}خواهم"), "می خواهم");
//! ```

/// Trait for character filters that transform text before tokenization.
///
/// A char filter maps the whole input string to a new string. Token offsets
/// produced downstream refer to the filtered text.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod html_strip;
pub mod mapping;
pub mod persian;
pub mod unicode_normalize;

pub use html_strip::HtmlStripCharFilter;
pub use mapping::MappingCharFilter;
pub use persian::PersianCharFilter;
pub use unicode_normalize::{NormalizationForm, UnicodeNormalizeCharFilter};
