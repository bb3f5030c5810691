use std::ops::Range;

use logos::Logos;

/// Tokens of the metric-filter grammar over normalized text.
///
/// Digits inside a word ("nifty50", "m&m2") stay part of the word, so only
/// free-standing numerals can anchor a filter. Letters glued to a numeral
/// ("20x", "1e5") stay part of the numeral and make it malformed.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum FilterToken {
    #[regex(r"[0-9][0-9,.]*[a-z0-9]*")]
    Numeral,
    #[regex(r">=|<=|>|<|=")]
    Symbol,
    #[regex(r"[a-z][a-z0-9&/'.\-]*")]
    Word,
}

/// Lexes `text`, dropping characters no token accepts.
pub fn tokenize(text: &str) -> Vec<(FilterToken, Range<usize>)> {
    FilterToken::lexer(text)
        .spanned()
        .filter_map(|(token, span)| token.ok().map(|token| (token, span)))
        .collect()
}

/// Byte ranges of every free-standing numeral, in order.
pub fn numerals(text: &str) -> Vec<Range<usize>> {
    tokenize(text)
        .into_iter()
        .filter(|(token, _)| *token == FilterToken::Numeral)
        .map(|(_, span)| span)
        .collect()
}

/// Parses a lexed numeral. Thousands separators are ignored; exponents and
/// unit suffixes are rejected.
pub fn parse_numeral(raw: &str) -> Option<f64> {
    if !raw.chars().all(|ch| ch.is_ascii_digit() || ch == ',' || ch == '.') {
        return None;
    }
    let cleaned: String = raw.chars().filter(|ch| *ch != ',').collect();
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}
