//! Phonetic filter implementation.
//!
//! This module provides a Daitch–Mokotoff soundex encoder and a filter
//! that replaces (or augments) each token with its phonetic codes, so that
//! differently spelled names with the same pronunciation match.
//!
//! # Algorithm
//!
//! Daitch–Mokotoff soundex codes a word as six digits. Letters are
//! consumed in groups (longest match first); each group contributes a
//! digit that depends on whether the group starts the word, precedes a
//! vowel, or neither. Ambiguous groups (CH, CK, C, J, RS, RZ) produce two
//! alternative codings, so one word can yield several codes.

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// One coding rule: a letter group and its digit strings in the three
/// contexts (start of word, before a vowel, any other position).
///
/// An empty digit string means the group is not coded in that context. A
/// rule may carry an alternative second coding, which forks the result.
struct Rule {
    pattern: &'static str,
    start: &'static str,
    before_vowel: &'static str,
    other: &'static str,
    alternate: Option<(&'static str, &'static str, &'static str)>,
}

const fn rule(
    pattern: &'static str,
    start: &'static str,
    before_vowel: &'static str,
    other: &'static str,
) -> Rule {
    Rule {
        pattern,
        start,
        before_vowel,
        other,
        alternate: None,
    }
}

const fn branching(
    pattern: &'static str,
    first: (&'static str, &'static str, &'static str),
    second: (&'static str, &'static str, &'static str),
) -> Rule {
    Rule {
        pattern,
        start: first.0,
        before_vowel: first.1,
        other: first.2,
        alternate: Some(second),
    }
}

/// The Daitch–Mokotoff coding chart, longest patterns first within each
/// starting letter. Matching scans the table in order and takes the first
/// pattern that prefixes the remaining input.
const RULES: &[Rule] = &[
    rule("schtsch", "2", "4", "4"),
    rule("schtsh", "2", "4", "4"),
    rule("schtch", "2", "4", "4"),
    rule("shtch", "2", "4", "4"),
    rule("shtsh", "2", "4", "4"),
    rule("stsch", "2", "4", "4"),
    rule("ttsch", "4", "4", "4"),
    rule("zhdzh", "2", "4", "4"),
    rule("shch", "2", "4", "4"),
    rule("scht", "2", "43", "43"),
    rule("schd", "2", "43", "43"),
    rule("stch", "2", "4", "4"),
    rule("strz", "2", "4", "4"),
    rule("strs", "2", "4", "4"),
    rule("stsh", "2", "4", "4"),
    rule("szcz", "2", "4", "4"),
    rule("szcs", "2", "4", "4"),
    rule("ttch", "4", "4", "4"),
    rule("tsch", "4", "4", "4"),
    rule("ttsz", "4", "4", "4"),
    rule("zdzh", "2", "4", "4"),
    rule("zsch", "4", "4", "4"),
    rule("sch", "4", "4", "4"),
    rule("sht", "2", "43", "43"),
    rule("szt", "2", "43", "43"),
    rule("shd", "2", "43", "43"),
    rule("szd", "2", "43", "43"),
    rule("tch", "4", "4", "4"),
    rule("trz", "4", "4", "4"),
    rule("trs", "4", "4", "4"),
    rule("tsh", "4", "4", "4"),
    rule("tts", "4", "4", "4"),
    rule("ttz", "4", "4", "4"),
    rule("tzs", "4", "4", "4"),
    rule("tsz", "4", "4", "4"),
    rule("zdz", "2", "4", "4"),
    rule("drz", "4", "4", "4"),
    rule("drs", "4", "4", "4"),
    rule("dsh", "4", "4", "4"),
    rule("dsz", "4", "4", "4"),
    rule("dzh", "4", "4", "4"),
    rule("dzs", "4", "4", "4"),
    rule("chs", "5", "54", "54"),
    rule("csz", "4", "4", "4"),
    rule("czs", "4", "4", "4"),
    rule("zhd", "2", "43", "43"),
    rule("ai", "0", "1", ""),
    rule("aj", "0", "1", ""),
    rule("ay", "0", "1", ""),
    rule("au", "0", "7", ""),
    branching("ch", ("5", "5", "5"), ("4", "4", "4")),
    branching("ck", ("5", "5", "5"), ("45", "45", "45")),
    rule("cz", "4", "4", "4"),
    rule("cs", "4", "4", "4"),
    rule("ds", "4", "4", "4"),
    rule("dz", "4", "4", "4"),
    rule("dt", "3", "3", "3"),
    rule("ei", "0", "1", ""),
    rule("ej", "0", "1", ""),
    rule("ey", "0", "1", ""),
    rule("eu", "1", "1", ""),
    rule("fb", "7", "7", "7"),
    rule("ia", "1", "", ""),
    rule("ie", "1", "", ""),
    rule("io", "1", "", ""),
    rule("iu", "1", "", ""),
    rule("ks", "5", "54", "54"),
    rule("kh", "5", "5", "5"),
    rule("mn", "", "66", "66"),
    rule("nm", "", "66", "66"),
    rule("oi", "0", "1", ""),
    rule("oj", "0", "1", ""),
    rule("oy", "0", "1", ""),
    rule("pf", "7", "7", "7"),
    rule("ph", "7", "7", "7"),
    branching("rs", ("94", "94", "94"), ("4", "4", "4")),
    branching("rz", ("94", "94", "94"), ("4", "4", "4")),
    rule("sc", "2", "4", "4"),
    rule("sd", "2", "43", "43"),
    rule("sh", "4", "4", "4"),
    rule("st", "2", "43", "43"),
    rule("sz", "4", "4", "4"),
    rule("tc", "4", "4", "4"),
    rule("th", "3", "3", "3"),
    rule("ts", "4", "4", "4"),
    rule("tz", "4", "4", "4"),
    rule("ue", "0", "", ""),
    rule("ui", "0", "1", ""),
    rule("uj", "0", "1", ""),
    rule("uy", "0", "1", ""),
    rule("zd", "2", "43", "43"),
    rule("zh", "4", "4", "4"),
    rule("zs", "4", "4", "4"),
    rule("a", "0", "", ""),
    rule("b", "7", "7", "7"),
    branching("c", ("5", "5", "5"), ("4", "4", "4")),
    rule("d", "3", "3", "3"),
    rule("e", "0", "", ""),
    rule("f", "7", "7", "7"),
    rule("g", "5", "5", "5"),
    rule("h", "5", "5", ""),
    rule("i", "0", "", ""),
    branching("j", ("1", "", ""), ("4", "4", "4")),
    rule("k", "5", "5", "5"),
    rule("l", "8", "8", "8"),
    rule("m", "6", "6", "6"),
    rule("n", "6", "6", "6"),
    rule("o", "0", "", ""),
    rule("p", "7", "7", "7"),
    rule("q", "5", "5", "5"),
    rule("r", "9", "9", "9"),
    rule("s", "4", "4", "4"),
    rule("t", "3", "3", "3"),
    rule("u", "0", "", ""),
    rule("v", "7", "7", "7"),
    rule("w", "7", "7", "7"),
    rule("x", "5", "54", "54"),
    rule("y", "1", "", ""),
    rule("z", "4", "4", "4"),
];

/// Code length of a finished Daitch–Mokotoff soundex code.
const CODE_LENGTH: usize = 6;

/// Ceiling on alternative codings kept while encoding one word.
const MAX_BRANCHES: usize = 16;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// One in-progress coding: the digits so far plus the digit string the
/// previous group contributed (for the adjacent-duplicate rule).
#[derive(Clone)]
struct Branch {
    code: String,
    last: String,
}

/// Encode a word into its Daitch–Mokotoff soundex codes.
///
/// Non-alphabetic characters are ignored. Returns an empty vector when the
/// word contains no codable letters. Several codes are returned when the
/// word hits a branching rule.
pub fn daitch_mokotoff_soundex(word: &str) -> Vec<String> {
    let letters: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();
    if letters.is_empty() {
        return Vec::new();
    }

    let mut branches = vec![Branch {
        code: String::new(),
        last: String::new(),
    }];

    let mut rest = letters.as_str();
    let mut at_start = true;
    while !rest.is_empty() {
        let Some(matched) = RULES.iter().find(|r| rest.starts_with(r.pattern)) else {
            rest = &rest[1..];
            continue;
        };
        let remainder = &rest[matched.pattern.len()..];
        let next_is_vowel = remainder.chars().next().is_some_and(is_vowel);

        let pick = |(start, before_vowel, other): (&'static str, &'static str, &'static str)| {
            if at_start {
                start
            } else if next_is_vowel {
                before_vowel
            } else {
                other
            }
        };
        let digits = pick((matched.start, matched.before_vowel, matched.other));
        let alternate = matched.alternate.map(pick);

        let mut next_branches = Vec::with_capacity(branches.len() * 2);
        for branch in &branches {
            next_branches.push(apply_digits(branch, digits));
            if let Some(alt) = alternate {
                if next_branches.len() < MAX_BRANCHES {
                    next_branches.push(apply_digits(branch, alt));
                }
            }
        }
        branches = next_branches;

        rest = remainder;
        at_start = false;
    }

    let mut codes: Vec<String> = Vec::with_capacity(branches.len());
    for branch in branches {
        let mut code = branch.code;
        code.truncate(CODE_LENGTH);
        while code.len() < CODE_LENGTH {
            code.push('0');
        }
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}

fn apply_digits(branch: &Branch, digits: &str) -> Branch {
    // A group producing the same digits as the one before it is coded only
    // once. Vowel groups produce "" in non-start positions, which clears
    // `last` and lets a repeated consonant code again after the vowel.
    let mut next = branch.clone();
    if digits.is_empty() {
        next.last.clear();
        return next;
    }
    if next.last != digits {
        next.code.push_str(digits);
    }
    next.last = digits.to_string();
    next
}

/// Whether the phonetic filter keeps the original token next to its codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OriginalTokens {
    /// Emit the original token followed by its codes at the same position.
    Include,
    /// Emit only the phonetic codes.
    #[default]
    Omit,
}

/// A filter that encodes tokens with Daitch–Mokotoff soundex.
///
/// Every code of a token is emitted at the token's position. Tokens that
/// produce no code (no letters) pass through unchanged.
///
/// # Examples
///
/// ```
/// use kotoba::analysis::token_filter::Filter;
/// use kotoba::analysis::token_filter::phonetic::DaitchMokotoffSoundexFilter;
/// use kotoba::analysis::token::Token;
///
/// let filter = DaitchMokotoffSoundexFilter::new();
/// let tokens = vec![Token::new("Topf", 0)];
/// let codes: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(codes, vec!["370000"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DaitchMokotoffSoundexFilter {
    original_tokens: OriginalTokens,
}

impl DaitchMokotoffSoundexFilter {
    /// Create a filter that emits phonetic codes only.
    pub fn new() -> Self {
        DaitchMokotoffSoundexFilter {
            original_tokens: OriginalTokens::Omit,
        }
    }

    /// Create a filter that keeps the original token next to its codes.
    pub fn including_original() -> Self {
        DaitchMokotoffSoundexFilter {
            original_tokens: OriginalTokens::Include,
        }
    }
}

impl Filter for DaitchMokotoffSoundexFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut output: Vec<Token> = Vec::new();

        for token in tokens {
            let codes = daitch_mokotoff_soundex(&token.text);
            if codes.is_empty() {
                output.push(token);
                continue;
            }

            let mut first_increment = Some(token.position_increment);
            if self.original_tokens == OriginalTokens::Include {
                let increment = first_increment.take().unwrap_or(0);
                output.push(token.clone().with_position_increment(increment));
            }
            for code in codes {
                let increment = first_increment.take().unwrap_or(0);
                output.push(token.with_text(code).with_position_increment(increment));
            }
        }

        Ok(Box::new(output.into_iter()))
    }

    fn name(&self) -> &'static str {
        "daitch_mokotoff_soundex"
    }
}
