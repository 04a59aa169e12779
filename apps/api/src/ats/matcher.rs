//! Keyword matcher: decides whether a keyword (or any of its variants) is
//! present in normalized document text, and how directly.
//!
//! Candidates are tried in order: the canonical keyword, its curated lexicon
//! variants, then auto-derived spellings. Each candidate is tested against six
//! surface forms; the first form that hits resolves the candidate.
//! Multi-word keywords fall back to independent token matching.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::lexicon::Lexicon;

/// Proficiency claims that may precede a skill ("proficient in rust").
pub const PROFICIENCY_PREFIXES: &[&str] =
    &["experienced in", "skilled in", "proficient in", "knowledge of"];

/// Role words that may follow a skill ("rust programming").
pub const ROLE_SUFFIXES: &[&str] = &["development", "programming", "engineering", "design"];

/// Relevance assigned per kind of match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    pub exact: f32,
    pub curated: f32,
    pub derived: f32,
    pub all_tokens: f32,
    pub some_tokens: f32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            exact: 1.0,
            curated: 0.9,
            derived: 0.8,
            all_tokens: 0.7,
            some_tokens: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Curated,
    Derived,
    AllTokens,
    SomeTokens,
    None,
}

/// Outcome of matching one keyword against one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub found: bool,
    pub relevance: f32,
    /// Canonical and curated spellings that matched, canonical first. When
    /// only derived spellings hit, holds the first of them.
    pub matched_variants: Vec<String>,
    pub kind: MatchKind,
}

/// A spelling to look for, tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
struct Candidate {
    text: String,
    kind: MatchKind,
}

pub struct KeywordMatcher<'a> {
    lexicon: &'a Lexicon,
    weights: MatchWeights,
}

impl<'a> KeywordMatcher<'a> {
    pub fn new(lexicon: &'a Lexicon, weights: MatchWeights) -> Self {
        Self { lexicon, weights }
    }

    /// Matches `keyword` against `document`, which must already be lowercase.
    pub fn match_keyword(&self, document: &str, keyword: &str) -> KeywordMatch {
        let keyword_lower = keyword.trim().to_lowercase();
        let mut matched_variants = Vec::new();
        let mut first_derived: Option<String> = None;
        let mut best: Option<MatchKind> = None;

        if !keyword_lower.is_empty() {
            for candidate in self.candidates(&keyword_lower) {
                if !candidate_matches(document, &candidate.text) {
                    continue;
                }
                best = Some(match best {
                    Some(kind) if self.weight(kind) >= self.weight(candidate.kind) => kind,
                    _ => candidate.kind,
                });
                // derived spellings are listed only when no listed spelling hit
                if candidate.kind == MatchKind::Derived {
                    first_derived.get_or_insert(candidate.text);
                } else {
                    matched_variants.push(candidate.text);
                }
            }
        }
        if matched_variants.is_empty() {
            matched_variants.extend(first_derived);
        }

        let kind = match best {
            Some(kind) => kind,
            None => self.compound_fallback(document, &keyword_lower),
        };

        let result = KeywordMatch {
            keyword: keyword.to_string(),
            found: kind != MatchKind::None,
            relevance: self.weight(kind),
            matched_variants,
            kind,
        };
        debug!(
            keyword = %result.keyword,
            found = result.found,
            relevance = result.relevance,
            "keyword matched"
        );
        result
    }

    fn weight(&self, kind: MatchKind) -> f32 {
        match kind {
            MatchKind::Exact => self.weights.exact,
            MatchKind::Curated => self.weights.curated,
            MatchKind::Derived => self.weights.derived,
            MatchKind::AllTokens => self.weights.all_tokens,
            MatchKind::SomeTokens => self.weights.some_tokens,
            MatchKind::None => 0.0,
        }
    }

    /// Canonical keyword, curated variants, then derived spellings, deduplicated.
    fn candidates(&self, keyword: &str) -> Vec<Candidate> {
        let mut candidates = vec![Candidate {
            text: keyword.to_string(),
            kind: MatchKind::Exact,
        }];
        let curated = self.lexicon.variants_of(keyword).iter().cloned();
        let derived = derived_variants(keyword);

        for (text, kind) in curated
            .map(|t| (t, MatchKind::Curated))
            .chain(derived.into_iter().map(|t| (t, MatchKind::Derived)))
        {
            if !text.is_empty() && !candidates.iter().any(|c| c.text == text) {
                candidates.push(Candidate { text, kind });
            }
        }
        candidates
    }

    fn compound_fallback(&self, document: &str, keyword: &str) -> MatchKind {
        let tokens = split_tokens(keyword);
        if tokens.len() < 2 {
            return MatchKind::None;
        }
        let present = tokens
            .iter()
            .filter(|token| contains_word(document, token))
            .count();
        if present == tokens.len() {
            MatchKind::AllTokens
        } else if present > 0 {
            MatchKind::SomeTokens
        } else {
            MatchKind::None
        }
    }
}

/// Spellings derived mechanically from the keyword, deduplicated in order.
pub fn derived_variants(keyword: &str) -> Vec<String> {
    let keyword = keyword.to_lowercase();
    let mut variants = vec![
        keyword.clone(),
        keyword.split_whitespace().collect::<String>(),
        keyword.replace('.', ""),
        keyword.replace('-', ""),
        keyword.split_whitespace().collect::<Vec<_>>().join("-"),
        keyword.split_whitespace().collect::<Vec<_>>().join("_"),
    ];
    for prefix in PROFICIENCY_PREFIXES {
        variants.push(format!("{prefix} {keyword}"));
    }
    for suffix in ROLE_SUFFIXES {
        if !keyword.contains(suffix) {
            variants.push(format!("{keyword} {suffix}"));
        }
    }

    let mut unique: Vec<String> = Vec::with_capacity(variants.len());
    for variant in variants {
        if !variant.is_empty() && !unique.contains(&variant) {
            unique.push(variant);
        }
    }
    unique
}

/// Byte index of the first boundary-aware occurrence of the keyword, or of the
/// first matched variant when the keyword itself never occurs.
pub fn first_occurrence(document: &str, result: &KeywordMatch) -> Option<usize> {
    let keyword = result.keyword.trim().to_lowercase();
    std::iter::once(keyword.as_str())
        .chain(result.matched_variants.iter().map(String::as_str))
        .filter(|phrase| !phrase.is_empty())
        .find_map(|phrase| {
            Regex::new(&surface_pattern(phrase))
                .ok()?
                .find(document)
                .map(|m| m.start())
        })
}

/// Up to `radius` characters on each side of `index`, clamped to the document.
pub fn context_window(document: &str, index: usize, radius: usize) -> &str {
    let mut index = index.min(document.len());
    while !document.is_char_boundary(index) {
        index -= 1;
    }
    let start = document[..index]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(index);
    let end = document[index..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| index + i)
        .unwrap_or(document.len());
    &document[start..end]
}

fn split_tokens(keyword: &str) -> Vec<&str> {
    keyword
        .split(|c: char| c.is_whitespace() || c == '.' || c == '-')
        .filter(|t| !t.is_empty())
        .collect()
}

/// True when any of the six surface forms of `phrase` occurs in `document`.
fn candidate_matches(document: &str, phrase: &str) -> bool {
    match Regex::new(&surface_pattern(phrase)) {
        Ok(re) => re.is_match(document),
        Err(e) => {
            debug!(phrase, error = %e, "skipping unmatchable phrase");
            false
        }
    }
}

fn contains_word(document: &str, word: &str) -> bool {
    Regex::new(&bounded(&regex::escape(word), word))
        .map(|re| re.is_match(document))
        .unwrap_or(false)
}

/// One alternation covering: exact, hyphenated, dotted, prefixed by a
/// proficiency claim, followed by a role suffix, and inside parentheses.
fn surface_pattern(phrase: &str) -> String {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let escaped = regex::escape(phrase);
    let hyphenated = words.join("-");
    let dotted = words.join(".");
    let prefixes = PROFICIENCY_PREFIXES.join("|");
    let suffixes = ROLE_SUFFIXES.join("|");

    let forms = [
        bounded(&escaped, phrase),
        bounded(&regex::escape(&hyphenated), &hyphenated),
        bounded(&regex::escape(&dotted), &dotted),
        format!(r"\b(?:{prefixes})\s+{}", trailing_bound(&escaped, phrase)),
        format!(r"{}\s+(?:{suffixes})\b", leading_bound(&escaped, phrase)),
        format!(r"\([^)]*{}[^)]*\)", bounded(&escaped, phrase)),
    ];
    forms.join("|")
}

/// Word boundaries only on edges that are word characters; a literal such as
/// ".ts" cannot be bounded on its punctuation side.
fn bounded(escaped: &str, raw: &str) -> String {
    trailing_bound(&leading_bound(escaped, raw), raw)
}

fn leading_bound(escaped: &str, raw: &str) -> String {
    match raw.chars().next() {
        Some(c) if is_word_char(c) => format!(r"\b{escaped}"),
        _ => escaped.to_string(),
    }
}

fn trailing_bound(escaped: &str, raw: &str) -> String {
    match raw.chars().last() {
        Some(c) if is_word_char(c) => format!(r"{escaped}\b"),
        _ => escaped.to_string(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
