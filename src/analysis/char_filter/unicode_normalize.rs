use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::CharFilter;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationForm {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

/// A char filter that performs Unicode normalization.
///
/// With `case_fold` enabled the text is additionally lowercased after
/// normalization, approximating NFKC case folding.
pub struct UnicodeNormalizeCharFilter {
    form: NormalizationForm,
    case_fold: bool,
}

impl UnicodeNormalizeCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self {
            form,
            case_fold: false,
        }
    }

    /// Compatibility normalization plus case folding.
    pub fn nfkc_case_fold() -> Self {
        Self {
            form: NormalizationForm::Nfkc,
            case_fold: true,
        }
    }
}

impl CharFilter for UnicodeNormalizeCharFilter {
    fn filter(&self, input: &str) -> String {
        let normalized: String = match self.form {
            NormalizationForm::Nfc => input.nfc().collect(),
            NormalizationForm::Nfd => input.nfd().collect(),
            NormalizationForm::Nfkc => input.nfkc().collect(),
            NormalizationForm::Nfkd => input.nfkd().collect(),
        };

        if self.case_fold {
            normalized.to_lowercase()
        } else {
            normalized
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_normalization() {
        let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::Nfc);
        // "Amélie" where 'é' is composed (U+00E9)
        let input = "Am\u{00e9}lie";
        assert_eq!(filter.filter(input), "Amélie");

        // "Amélie" where 'é' is decomposed (U+0065 U+0301)
        let input_decomposed = "Am\u{0065}\u{0301}lie";
        assert_eq!(filter.filter(input_decomposed), "Am\u{00e9}lie");
    }

    #[test]
    fn test_nfkc_normalization() {
        let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::Nfkc);
        // Fullwidth "Ａ" to halfwidth "A"
        assert_eq!(filter.filter("\u{ff21}"), "A");
    }

    #[test]
    fn test_nfkc_case_fold() {
        let filter = UnicodeNormalizeCharFilter::nfkc_case_fold();
        assert_eq!(filter.filter("Ｑuick"), "quick");
        assert_eq!(filter.filter("STRASSE"), "strasse");
    }
}
