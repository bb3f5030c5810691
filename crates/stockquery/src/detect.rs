//! Component detectors.
//!
//! Each detector reads the normalized text and one or more alias tables and
//! reports what it found. Detectors never share mutable state, so they can
//! run in any order; only the stock-entity residue looks at the spans the
//! others consumed.

mod entity;
mod filter;
mod lexer;
mod sector;

use std::fmt;
use std::ops::Range;

use crate::alias::{contains_phrase, resolve, AliasCatalog, AliasCategory, Detection};
use crate::normalize::NormalizedText;
use crate::query::{Metric, MetricFilter, StockEntity};

pub use entity::{detect_stock_entity, EntityDetection, EntitySource};
pub use filter::{detect_metric_filter, MetricFilterDetection};
pub use sector::{detect_sector, is_company_name_context};

/// Words that signal the user wants a list rather than one stock.
pub const LISTING_WORDS: &[&str] = &["stocks", "companies", "list", "show", "sector"];

/// Filler and modifier words that are never part of a stock name.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "all", "an", "and", "any", "are", "best", "bottom", "cap", "cheap", "companies",
    "company", "details", "dividend", "eps", "find", "for", "get", "give", "good", "high", "in",
    "industry", "info", "is", "large", "leading", "list", "low", "major", "market", "me", "of",
    "on", "p/e", "pe", "price", "sector", "sectors", "share", "shares", "show", "small", "stock",
    "stocks", "tell", "the", "top", "what", "which", "with", "yield",
];

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

pub fn has_listing_context(text: &NormalizedText) -> bool {
    LISTING_WORDS
        .iter()
        .any(|word| contains_phrase(text.as_str(), word))
}

/// Why a detector reported nothing. Logged, never propagated.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionMiss {
    /// A candidate phrase had no canonical value in its table.
    UnresolvedAlias {
        category: AliasCategory,
        phrase: String,
    },
    /// A sector word looked like part of a company name and was dropped.
    AmbiguousSectorEntity { phrase: String, preceding: String },
    /// The filter pattern matched but its numeral is not a finite decimal.
    MalformedFilterNumeral { numeral: String },
}

impl fmt::Display for DetectionMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionMiss::UnresolvedAlias { category, phrase } => {
                write!(f, "unresolved {category} phrase {phrase:?}")
            }
            DetectionMiss::AmbiguousSectorEntity { phrase, preceding } => {
                write!(f, "sector phrase {phrase:?} follows name-like {preceding:?}")
            }
            DetectionMiss::MalformedFilterNumeral { numeral } => {
                write!(f, "malformed filter numeral {numeral:?}")
            }
        }
    }
}

pub(crate) fn report_miss(miss: DetectionMiss) {
    tracing::debug!(miss = %miss, "detection discarded");
}

/// A metric mention and the phrase that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDetection {
    pub metric: Metric,
    pub detection: Detection,
}

/// Everything the detectors found in one input.
#[derive(Debug, Clone)]
pub struct Detections {
    pub raw_input: String,
    pub metric: Option<MetricDetection>,
    pub index: Option<Detection>,
    pub sector: Option<Detection>,
    pub filter: Option<MetricFilterDetection>,
    pub entity: Option<EntityDetection>,
    pub listing_context: bool,
}

impl Detections {
    pub fn metric(&self) -> Option<Metric> {
        self.metric.as_ref().map(|found| found.metric)
    }

    pub fn index(&self) -> Option<&str> {
        self.index.as_ref().map(|found| found.canonical.as_str())
    }

    pub fn sector(&self) -> Option<&str> {
        self.sector.as_ref().map(|found| found.canonical.as_str())
    }

    pub fn metric_filter(&self) -> Option<MetricFilter> {
        self.filter.as_ref().map(|found| found.filter)
    }

    pub fn entity(&self) -> Option<&StockEntity> {
        self.entity.as_ref().map(|found| &found.entity)
    }
}

pub fn detect_metric(text: &NormalizedText, catalog: &AliasCatalog) -> Option<MetricDetection> {
    let detection = resolve(text.as_str(), &catalog.metric)?;
    let Some(metric) = Metric::from_canonical(&detection.canonical) else {
        report_miss(DetectionMiss::UnresolvedAlias {
            category: AliasCategory::Metric,
            phrase: detection.matched_phrase,
        });
        return None;
    };
    Some(MetricDetection { metric, detection })
}

pub fn detect_index(text: &NormalizedText, catalog: &AliasCatalog) -> Option<Detection> {
    resolve(text.as_str(), &catalog.index)
}

/// Runs every detector over `text`.
pub fn detect(text: &NormalizedText, catalog: &AliasCatalog) -> Detections {
    let metric = detect_metric(text, catalog);
    let index = detect_index(text, catalog);
    let sector = detect_sector(text, catalog);
    let filter = detect_metric_filter(text, catalog);

    let mut consumed: Vec<Range<usize>> = Vec::new();
    consumed.extend(metric.as_ref().map(|found| found.detection.span.clone()));
    consumed.extend(index.as_ref().map(|found| found.span.clone()));
    consumed.extend(sector.as_ref().map(|found| found.span.clone()));
    if let Some(found) = &filter {
        consumed.extend(found.spans());
    }
    let entity = detect_stock_entity(text, catalog, &consumed);

    let detections = Detections {
        raw_input: text.original().to_string(),
        metric,
        index,
        sector,
        filter,
        entity,
        listing_context: has_listing_context(text),
    };

    tracing::trace!(
        metric = ?detections.metric(),
        index = ?detections.index(),
        sector = ?detections.sector(),
        filter = ?detections.metric_filter(),
        entity = ?detections.entity().map(|entity| entity.text.as_str()),
        listing = detections.listing_context,
        "detectors finished"
    );
    detections
}
