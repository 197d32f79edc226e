use std::collections::{BTreeSet, HashSet};

use super::CharFilter;

/// A char filter that strips HTML/XML markup from the input.
///
/// Tags, comments, doctype declarations and processing instructions are
/// replaced by a single space so that words on either side of removed markup
/// stay separate. The contents of `script` and `style` elements are removed
/// entirely. Basic named entities and numeric character references are
/// decoded. A `<` that does not open well-formed markup is kept as text.
///
/// Tag names listed in `ignored_tags` are exempt and pass through verbatim.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::char_filter::CharFilter;
/// use kotoba::analysis::char_filter::html_strip::HtmlStripCharFilter;
///
/// let filter = HtmlStripCharFilter::new();
/// assert_eq!(filter.filter("<p>a &amp; b</p>"), " a & b ");
/// ```
pub struct HtmlStripCharFilter {
    /// Lowercased tag names excluded from stripping.
    ignored: HashSet<String>,
}

impl HtmlStripCharFilter {
    /// Create a filter that strips all markup.
    pub fn new() -> Self {
        Self {
            ignored: HashSet::new(),
        }
    }

    /// Create a filter that leaves the given tags in place.
    pub fn with_ignored_tags(tags: &BTreeSet<String>) -> Self {
        Self {
            ignored: tags.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.ignored.contains(&name.to_lowercase())
    }

    /// Scan one markup construct at the start of `s` (which begins with `<`).
    ///
    /// Returns the byte length of the construct and whether it should be
    /// kept verbatim, or `None` when `s` does not open valid markup.
    fn scan_markup(&self, s: &str) -> Option<(usize, bool)> {
        if let Some(rest) = s.strip_prefix("<!--") {
            // Unterminated comments swallow the remainder.
            return match rest.find("-->") {
                Some(end) => Some((4 + end + 3, false)),
                None => Some((s.len(), false)),
            };
        }
        if s.starts_with("<!") || s.starts_with("<?") {
            return match s.find('>') {
                Some(end) => Some((end + 1, false)),
                None => None,
            };
        }

        let inner = &s[1..];
        let body = inner.strip_prefix('/').unwrap_or(inner);
        let name_len = body
            .char_indices()
            .take_while(|&(i, c)| {
                if i == 0 {
                    c.is_ascii_alphabetic()
                } else {
                    c.is_ascii_alphanumeric() || c == '-'
                }
            })
            .count();
        if name_len == 0 {
            return None;
        }
        let name = &body[..name_len];
        let is_closing = inner.starts_with('/');

        let tag_len = find_tag_end(s)?;
        if self.is_ignored(name) {
            return Some((tag_len, true));
        }

        // Drop the contents of script/style elements along with the tags.
        if !is_closing && (name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style"))
        {
            let closer = format!("</{}", name.to_lowercase());
            let after = &s[tag_len..];
            let lower = after.to_lowercase();
            if let Some(pos) = lower.find(&closer) {
                let close_end = after[pos..].find('>').map(|e| pos + e + 1).unwrap_or(after.len());
                return Some((tag_len + close_end, false));
            }
            return Some((s.len(), false));
        }

        Some((tag_len, false))
    }
}

impl Default for HtmlStripCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for HtmlStripCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut stripped = String::with_capacity(input.len());
        let mut i = 0;

        while let Some(rel) = input[i..].find('<') {
            let lt = i + rel;
            stripped.push_str(&input[i..lt]);
            match self.scan_markup(&input[lt..]) {
                Some((len, keep)) => {
                    if keep {
                        stripped.push_str(&input[lt..lt + len]);
                    } else {
                        stripped.push(' ');
                    }
                    i = lt + len;
                }
                None => {
                    stripped.push('<');
                    i = lt + 1;
                }
            }
        }
        stripped.push_str(&input[i..]);

        decode_entities(&stripped)
    }

    fn name(&self) -> &'static str {
        "html_strip"
    }
}

/// Find the byte length of a tag starting at `<`, honoring quoted
/// attribute values that may contain `>`.
fn find_tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                '>' => return Some(i + 1),
                _ => {}
            },
        }
    }
    None
}

fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while let Some(rel) = input[i..].find('&') {
        let amp = i + rel;
        out.push_str(&input[i..amp]);

        let rest = &input[amp + 1..];
        match rest.find(';') {
            // Entity names are short; anything longer is treated as text.
            Some(semi) if semi > 0 && semi <= 10 => {
                let name = &rest[..semi];
                match decode_entity(name) {
                    Some(c) => {
                        out.push(c);
                        i = amp + 1 + semi + 1;
                    }
                    None => {
                        out.push('&');
                        i = amp + 1;
                    }
                }
            }
            _ => {
                out.push('&');
                i = amp + 1;
            }
        }
    }
    out.push_str(&input[i..]);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        let filter = HtmlStripCharFilter::new();
        assert_eq!(filter.filter("<p>hello <b>world</b></p>"), " hello  world  ");
    }

    #[test]
    fn test_attributes_and_self_closing() {
        let filter = HtmlStripCharFilter::new();
        assert_eq!(
            filter.filter(r#"a<a href="x>y" title='>'>link</a>b"#),
            "a link b"
        );
        assert_eq!(filter.filter("a<br/>b"), "a b");
    }

    #[test]
    fn test_comments_and_doctype() {
        let filter = HtmlStripCharFilter::new();
        assert_eq!(filter.filter("x<!-- note -->y"), "x y");
        assert_eq!(filter.filter("<!DOCTYPE html>text"), " text");
        assert_eq!(filter.filter("x<!-- unterminated"), "x ");
    }

    #[test]
    fn test_script_contents_removed() {
        let filter = HtmlStripCharFilter::new();
        assert_eq!(
            filter.filter("before<script>var x = '<div>';</script>after"),
            "before after"
        );
        assert_eq!(filter.filter("a<style>p { }</style>b"), "a b");
    }

    #[test]
    fn test_literal_less_than() {
        let filter = HtmlStripCharFilter::new();
        assert_eq!(filter.filter("1 < 2"), "1 < 2");
        assert_eq!(filter.filter("a <3"), "a <3");
    }

    #[test]
    fn test_entities() {
        let filter = HtmlStripCharFilter::new();
        assert_eq!(filter.filter("fish &amp; chips"), "fish & chips");
        assert_eq!(filter.filter("&#65;&#x42;"), "AB");
        assert_eq!(filter.filter("AT&T"), "AT&T");
        assert_eq!(filter.filter("&bogus;"), "&bogus;");
    }

    #[test]
    fn test_ignored_tags() {
        let tags: BTreeSet<String> = ["em".to_string()].into_iter().collect();
        let filter = HtmlStripCharFilter::with_ignored_tags(&tags);
        assert_eq!(
            filter.filter("<p><em>kept</em> stripped</p>"),
            " <em>kept</em> stripped "
        );
    }

    #[test]
    fn test_multibyte_text() {
        let filter = HtmlStripCharFilter::new();
        assert_eq!(filter.filter("<b>日本語</b>のテキスト"), " 日本語 のテキスト");
    }
}
