//! Longest-match alias resolution over normalized text.

use std::ops::Range;

use memchr::memmem;
use serde::Serialize;

use super::table::AliasTable;

/// A resolved alias: the canonical value and the exact phrase consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub canonical: String,
    pub matched_phrase: String,
    /// Byte range into the normalized text.
    pub span: Range<usize>,
}

impl Detection {
    /// Re-bases the span when resolution ran on a slice starting at `offset`.
    pub fn shifted(mut self, offset: usize) -> Self {
        self.span = self.span.start + offset..self.span.end + offset;
        self
    }
}

/// Resolves the longest alias of `table` that occurs in `text`.
///
/// Ties on length go to the earliest start offset, so the result does not
/// depend on table order.
pub fn resolve(text: &str, table: &AliasTable) -> Option<Detection> {
    let mut best: Option<(Range<usize>, &str)> = None;

    for (variant, canonical) in table.variants() {
        let Some(start) = first_occurrence(text, variant) else {
            continue;
        };
        let range = start..start + variant.len();
        if is_better(&range, best.as_ref().map(|(current, _)| current)) {
            best = Some((range, canonical));
        }
    }

    best.map(|(span, canonical)| Detection {
        canonical: canonical.to_string(),
        matched_phrase: text[span.clone()].to_string(),
        span,
    })
}

/// Resolves the longest alias of `table` that ends exactly at the end of `text`.
pub fn resolve_suffix(text: &str, table: &AliasTable) -> Option<Detection> {
    let mut best: Option<(Range<usize>, &str)> = None;

    for (variant, canonical) in table.variants() {
        if !text.ends_with(variant) {
            continue;
        }
        let start = text.len() - variant.len();
        if !has_leading_boundary(text, start, variant) {
            continue;
        }
        let range = start..text.len();
        if is_better(&range, best.as_ref().map(|(current, _)| current)) {
            best = Some((range, canonical));
        }
    }

    best.map(|(span, canonical)| Detection {
        canonical: canonical.to_string(),
        matched_phrase: text[span.clone()].to_string(),
        span,
    })
}

/// Whether `phrase` occurs in `text` on word boundaries.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    first_occurrence(text, phrase).is_some()
}

/// All non-overlapping, word-bounded occurrences of `phrase` in `text`.
pub fn find_occurrences(text: &str, phrase: &str) -> Vec<Range<usize>> {
    if phrase.is_empty() {
        return Vec::new();
    }
    let mut ranges: Vec<Range<usize>> = Vec::new();
    for start in memmem::find_iter(text.as_bytes(), phrase.as_bytes()) {
        if ranges.last().is_some_and(|previous| start < previous.end) {
            continue;
        }
        if is_bounded(text, start, phrase) {
            ranges.push(start..start + phrase.len());
        }
    }
    ranges
}

fn first_occurrence(text: &str, phrase: &str) -> Option<usize> {
    if phrase.is_empty() {
        return None;
    }
    memmem::find_iter(text.as_bytes(), phrase.as_bytes())
        .find(|&start| is_bounded(text, start, phrase))
}

fn is_better(candidate: &Range<usize>, current: Option<&Range<usize>>) -> bool {
    match current {
        None => true,
        Some(current) => {
            candidate.len() > current.len()
                || (candidate.len() == current.len() && candidate.start < current.start)
        }
    }
}

fn is_bounded(text: &str, start: usize, phrase: &str) -> bool {
    has_leading_boundary(text, start, phrase) && has_trailing_boundary(text, start, phrase)
}

// A boundary is only required where the alias edge is itself a word
// character, so symbolic aliases like ">=" match inside "pe>=20".
fn has_leading_boundary(text: &str, start: usize, phrase: &str) -> bool {
    let first = phrase.chars().next();
    if !first.is_some_and(is_word_char) {
        return true;
    }
    !text[..start].chars().next_back().is_some_and(is_word_char)
}

fn has_trailing_boundary(text: &str, start: usize, phrase: &str) -> bool {
    let last = phrase.chars().next_back();
    if !last.is_some_and(is_word_char) {
        return true;
    }
    !text[start + phrase.len()..]
        .chars()
        .next()
        .is_some_and(is_word_char)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
