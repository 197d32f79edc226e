//! ASCII folding filter implementation.
//!
//! This module provides a filter that converts alphabetic, numeric, and
//! symbolic Unicode characters into their closest ASCII equivalents, so
//! that "café" matches "cafe".
//!
//! # Examples
//!
//! ```
//! use kotoba::analysis::token_filter::Filter;
//! use kotoba::analysis::token_filter::ascii_folding::AsciiFoldingFilter;
//! use kotoba::analysis::token::Token;
//!
//! let filter = AsciiFoldingFilter::new();
//! let tokens = vec![Token::new("café", 0)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//! assert_eq!(result[0].text, "cafe");
//! ```

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that folds Unicode characters to their ASCII equivalents.
///
/// Folding decomposes each character (NFKD), drops combining marks, and
/// maps the remaining special cases (ligatures, crossed letters) through an
/// explicit table. Characters with no ASCII equivalent pass through
/// unchanged.
///
/// With `preserve_original` set, a token whose folded form differs from its
/// input emits both: the folded token first, then the original stacked at
/// the same position (position increment 0).
#[derive(Clone, Debug, Default)]
pub struct AsciiFoldingFilter {
    preserve_original: bool,
}

impl AsciiFoldingFilter {
    /// Create a new ASCII folding filter that emits folded tokens only.
    pub fn new() -> Self {
        AsciiFoldingFilter {
            preserve_original: false,
        }
    }

    /// Create a filter that also keeps the unfolded original token.
    pub fn preserving_original() -> Self {
        AsciiFoldingFilter {
            preserve_original: true,
        }
    }

    /// Fold a single string to its ASCII approximation.
    pub fn fold(text: &str) -> String {
        let mut folded = String::with_capacity(text.len());
        for c in text.nfkd() {
            if canonical_combining_class(c) != 0 {
                continue;
            }
            match c {
                'ß' => folded.push_str("ss"),
                'ẞ' => folded.push_str("SS"),
                'æ' => folded.push_str("ae"),
                'Æ' => folded.push_str("AE"),
                'œ' => folded.push_str("oe"),
                'Œ' => folded.push_str("OE"),
                'ø' => folded.push('o'),
                'Ø' => folded.push('O'),
                'đ' | 'ð' => folded.push('d'),
                'Đ' | 'Ð' => folded.push('D'),
                'þ' => folded.push_str("th"),
                'Þ' => folded.push_str("TH"),
                'ł' => folded.push('l'),
                'Ł' => folded.push('L'),
                'ħ' => folded.push('h'),
                'Ħ' => folded.push('H'),
                'ı' => folded.push('i'),
                'ŋ' => folded.push('n'),
                'Ŋ' => folded.push('N'),
                'ŧ' => folded.push('t'),
                'Ŧ' => folded.push('T'),
                _ => folded.push(c),
            }
        }
        folded
    }
}

impl Filter for AsciiFoldingFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut filtered_tokens: Vec<Token> = Vec::new();

        for token in tokens {
            let folded = Self::fold(&token.text);
            if self.preserve_original && folded != token.text {
                let original = token.clone().with_position_increment(0);
                filtered_tokens.push(token.with_text(folded));
                filtered_tokens.push(original);
            } else {
                filtered_tokens.push(token.with_text(folded));
            }
        }

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "ascii_folding"
    }
}
