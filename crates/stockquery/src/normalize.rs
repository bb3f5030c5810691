//! Input normalization with an offset map back to the original text.

use std::ops::Range;

/// A single whitespace-delimited token and where it lives in both strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub normalized: Range<usize>,
    pub original: Range<usize>,
}

impl TokenSpan {
    /// Lower-casing kept the byte length, so intra-token offsets line up.
    fn is_aligned(&self) -> bool {
        self.normalized.len() == self.original.len()
    }
}

/// Lower-cased, whitespace-collapsed text that still remembers its source.
///
/// Punctuation inside tokens is kept as-is ("p/e", "m&m") because alias
/// variants are written with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    original: String,
    text: String,
    tokens: Vec<TokenSpan>,
}

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn original(&self) -> &str {
        self.original.as_str()
    }

    pub fn tokens(&self) -> &[TokenSpan] {
        self.tokens.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Normalized text of the token at `index`.
    pub fn token_text(&self, index: usize) -> Option<&str> {
        let span = self.tokens.get(index)?;
        self.text.get(span.normalized.clone())
    }

    /// Original text of the token at `index`.
    pub fn original_token_text(&self, index: usize) -> Option<&str> {
        let span = self.tokens.get(index)?;
        self.original.get(span.original.clone())
    }

    /// Maps a normalized start offset to an offset in the original string.
    pub fn original_start(&self, offset: usize) -> Option<usize> {
        let span = self
            .tokens
            .iter()
            .find(|span| span.normalized.start <= offset && offset < span.normalized.end)?;
        if span.is_aligned() {
            Some(span.original.start + (offset - span.normalized.start))
        } else {
            Some(span.original.start)
        }
    }

    /// Maps a normalized end offset (exclusive) to an offset in the original string.
    pub fn original_end(&self, offset: usize) -> Option<usize> {
        let span = self
            .tokens
            .iter()
            .find(|span| span.normalized.start < offset && offset <= span.normalized.end)?;
        if span.is_aligned() {
            Some(span.original.start + (offset - span.normalized.start))
        } else {
            Some(span.original.end)
        }
    }

    /// Returns the original-text slice covering a normalized byte range.
    pub fn original_slice(&self, range: Range<usize>) -> Option<&str> {
        let start = self.original_start(range.start)?;
        let end = self.original_end(range.end)?;
        self.original.get(start..end)
    }

    /// The word that precedes a normalized offset in the original text.
    ///
    /// Separators such as spaces and hyphens are skipped, so for
    /// "Bajaj-Auto" the word before "auto" is "Bajaj".
    pub fn original_word_before(&self, offset: usize) -> Option<&str> {
        let start = self.original_start(offset)?;
        let prefix = self.original.get(..start)?;
        let trimmed = prefix.trim_end_matches(|ch: char| !is_name_char(ch));
        let word = trimmed
            .rsplit(|ch: char| !is_name_char(ch))
            .next()
            .unwrap_or_default();
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '&' || ch == '.'
}

/// Lower-cases, collapses whitespace runs to a single space and trims.
pub fn normalize(input: &str) -> NormalizedText {
    let mut text = String::with_capacity(input.len());
    let mut tokens = Vec::new();

    for (start, raw) in split_with_offsets(input) {
        if !text.is_empty() {
            text.push(' ');
        }
        let normalized_start = text.len();
        text.push_str(&raw.to_lowercase());
        tokens.push(TokenSpan {
            normalized: normalized_start..text.len(),
            original: start..start + raw.len(),
        });
    }

    NormalizedText {
        original: input.to_string(),
        text,
        tokens,
    }
}

fn split_with_offsets(input: &str) -> Vec<(usize, &str)> {
    let mut parts = Vec::new();
    let mut start: Option<usize> = None;

    for (index, ch) in input.char_indices() {
        if ch.is_whitespace() {
            if let Some(begin) = start.take() {
                parts.push((begin, &input[begin..index]));
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }
    if let Some(begin) = start {
        parts.push((begin, &input[begin..]));
    }

    parts
}
