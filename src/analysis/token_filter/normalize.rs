//! Unicode normalization filter implementation.
//!
//! This module provides a filter that applies one of the four Unicode
//! normalization forms to each token's text, the token-level counterpart of
//! the normalizing char filter.

use unicode_normalization::UnicodeNormalization;

use crate::analysis::char_filter::unicode_normalize::NormalizationForm;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that normalizes token text to a Unicode normalization form.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::char_filter::unicode_normalize::NormalizationForm;
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::normalize::NormalizeFilter;
/// use kotoba::analysis::token::Token;
///
/// let filter = NormalizeFilter::new(NormalizationForm::Nfc);
/// let tokens = vec![Token::new("Am\u{0065}\u{0301}lie", 0)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
/// assert_eq!(result[0].text, "Am\u{00e9}lie");
/// ```
#[derive(Clone, Debug)]
pub struct NormalizeFilter {
    form: NormalizationForm,
}

impl NormalizeFilter {
    /// Create a new normalization filter for the given form.
    pub fn new(form: NormalizationForm) -> Self {
        NormalizeFilter { form }
    }
}

impl Default for NormalizeFilter {
    fn default() -> Self {
        NormalizeFilter::new(NormalizationForm::Nfc)
    }
}

impl Filter for NormalizeFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let form = self.form;
        let filtered_tokens = tokens
            .map(move |token| {
                let normalized: String = match form {
                    NormalizationForm::Nfc => token.text.nfc().collect(),
                    NormalizationForm::Nfd => token.text.nfd().collect(),
                    NormalizationForm::Nfkc => token.text.nfkc().collect(),
                    NormalizationForm::Nfkd => token.text.nfkd().collect(),
                };
                token.with_text(normalized)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "normalize"
    }
}
