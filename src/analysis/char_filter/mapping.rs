use std::collections::BTreeMap;

use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{KotobaError, Result};

/// A char filter that replaces occurrences of mapped strings.
///
/// Matching is leftmost-longest, so with mappings for both `"ab"` and
/// `"abc"` the input `"abc"` is rewritten by the `"abc"` rule.
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    pub fn new(mappings: &BTreeMap<String, String>) -> Result<Self> {
        let mut keys = Vec::new();
        let mut replacements = Vec::new();

        for (k, v) in mappings {
            keys.push(k.clone());
            replacements.push(v.clone());
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| KotobaError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}
