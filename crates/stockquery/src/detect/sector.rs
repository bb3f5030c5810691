use std::ops::Range;

use crate::alias::{resolve, AliasCatalog, Detection};
use crate::normalize::NormalizedText;

use super::{is_stopword, report_miss, DetectionMiss, LISTING_WORDS};

/// Resolves a sector, dropping single-word matches that read as the tail
/// of a company name ("Axis Bank", "Tata Steel", "Bajaj-Auto").
pub fn detect_sector(text: &NormalizedText, catalog: &AliasCatalog) -> Option<Detection> {
    let detection = resolve(text.as_str(), &catalog.sector)?;
    if let Some(preceding) = name_like_prefix(text, &detection.span) {
        report_miss(DetectionMiss::AmbiguousSectorEntity {
            phrase: detection.matched_phrase.clone(),
            preceding: preceding.to_string(),
        });
        return None;
    }
    Some(detection)
}

/// Whether the sector phrase at `span` is glued to a preceding name-like word.
///
/// Multi-word phrases are never treated as part of a name.
pub fn is_company_name_context(text: &NormalizedText, span: &Range<usize>) -> bool {
    name_like_prefix(text, span).is_some()
}

fn name_like_prefix<'a>(text: &'a NormalizedText, span: &Range<usize>) -> Option<&'a str> {
    let phrase = text.as_str().get(span.clone())?;
    if phrase.contains(' ') {
        return None;
    }
    let preceding = text.original_word_before(span.start)?;
    is_name_like(preceding).then_some(preceding)
}

fn is_name_like(word: &str) -> bool {
    let lowered = word.to_lowercase();
    word.chars().any(char::is_alphabetic)
        && !is_stopword(&lowered)
        && !LISTING_WORDS.contains(&lowered.as_str())
}
