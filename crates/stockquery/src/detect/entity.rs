use std::ops::Range;

use crate::alias::{resolve, AliasCatalog, Detection};
use crate::normalize::NormalizedText;
use crate::query::StockEntity;

use super::is_stopword;

/// Where a stock entity came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntitySource {
    /// The stock-entity table matched.
    Table(Detection),
    /// Leftover words once every other component was removed.
    Residue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDetection {
    pub entity: StockEntity,
    pub source: EntitySource,
}

/// Finds the stock the user is asking about.
///
/// A table match wins. Otherwise the original tokens that no other detector
/// consumed, minus stopwords, form a free-text entity.
pub fn detect_stock_entity(
    text: &NormalizedText,
    catalog: &AliasCatalog,
    consumed: &[Range<usize>],
) -> Option<EntityDetection> {
    if let Some(detection) = resolve(text.as_str(), &catalog.stock_entity) {
        let display = text
            .original_slice(detection.span.clone())
            .unwrap_or(detection.matched_phrase.as_str())
            .to_string();
        return Some(EntityDetection {
            entity: StockEntity::resolved(display, detection.canonical.clone()),
            source: EntitySource::Table(detection),
        });
    }

    let residue = residue_words(text, consumed).join(" ");
    if residue.is_empty() {
        return None;
    }
    tracing::trace!(residue = %residue, "stock entity from residue");
    Some(EntityDetection {
        entity: StockEntity::free_text(residue),
        source: EntitySource::Residue,
    })
}

fn residue_words<'a>(text: &'a NormalizedText, consumed: &[Range<usize>]) -> Vec<&'a str> {
    let mut words = Vec::new();
    for (index, span) in text.tokens().iter().enumerate() {
        if consumed.iter().any(|range| overlaps(range, &span.normalized)) {
            continue;
        }
        let Some(original) = text.original_token_text(index) else {
            continue;
        };
        let word = original.trim_matches(|ch: char| !(ch.is_alphanumeric() || ch == '&'));
        if !word.chars().any(char::is_alphabetic) || is_stopword(&word.to_lowercase()) {
            continue;
        }
        words.push(word);
    }
    words
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn entity(input: &str, consumed: &[Range<usize>]) -> Option<EntityDetection> {
        let catalog = AliasCatalog::builtin().unwrap();
        detect_stock_entity(&normalize(input), &catalog, consumed)
    }

    #[test]
    fn table_match_keeps_original_casing() {
        let found = entity("Show Axis Bank", &[]).unwrap();
        assert_eq!(found.entity.text, "Axis Bank");
        assert_eq!(found.entity.symbol.as_deref(), Some("AXISBANK"));
        assert!(matches!(found.source, EntitySource::Table(_)));
    }

    #[test]
    fn longest_table_alias_wins() {
        let found = entity("state bank of india", &[]).unwrap();
        assert_eq!(found.entity.symbol.as_deref(), Some("SBIN"));
        assert_eq!(found.entity.text, "state bank of india");
    }

    #[test]
    fn residue_drops_consumed_spans_and_stopwords() {
        // "pe" at 0..2 was taken by the metric detector.
        let found = entity("PE of Zomato Ltd?", &[0..2]).unwrap();
        assert_eq!(found.entity.text, "Zomato Ltd");
        assert_eq!(found.entity.symbol, None);
        assert_eq!(found.source, EntitySource::Residue);
    }

    #[test]
    fn empty_residue_is_absent() {
        assert!(entity("", &[]).is_none());
        assert!(entity("show me the stocks", &[]).is_none());
        assert!(entity("under 20", &[0..5]).is_none());
    }
}
