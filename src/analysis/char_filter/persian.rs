use super::CharFilter;

/// A char filter for Persian text.
///
/// Replaces the zero-width non-joiner (U+200C), which Persian orthography
/// uses inside compound words, with an ordinary space so the pieces
/// tokenize separately.
pub struct PersianCharFilter;

impl PersianCharFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PersianCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for PersianCharFilter {
    fn filter(&self, input: &str) -> String {
        input.replace('\u{200c}', " ")
    }

    fn name(&self) -> &'static str {
        "persian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_zwnj() {
        let filter = PersianCharFilter::new();
        // "mi‌khaham" written with a ZWNJ between the prefix and the stem
        assert_eq!(filter.filter("می\u{200c}خواهم"), "می خواهم");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let filter = PersianCharFilter::new();
        assert_eq!(filter.filter("سلام دنیا"), "سلام دنیا");
    }
}
