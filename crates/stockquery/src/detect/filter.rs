use std::ops::Range;

use crate::alias::{resolve, resolve_suffix, AliasCatalog, AliasCategory, Detection};
use crate::normalize::NormalizedText;
use crate::query::{ComparisonOp, Metric, MetricFilter};

use super::lexer::{numerals, parse_numeral};
use super::{report_miss, DetectionMiss};

/// A `metric comparator number` clause and the spans it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFilterDetection {
    pub filter: MetricFilter,
    pub metric_phrase: Detection,
    pub comparator_phrase: Detection,
    pub numeral: Range<usize>,
}

impl MetricFilterDetection {
    pub fn spans(&self) -> [Range<usize>; 3] {
        [
            self.metric_phrase.span.clone(),
            self.comparator_phrase.span.clone(),
            self.numeral.clone(),
        ]
    }
}

/// Extracts the single metric filter in `text`, if any.
///
/// The first numeral whose preceding words end in a comparator anchors the
/// clause. The metric is looked up between the previous numeral and the
/// comparator. Any failure after anchoring discards the whole clause.
pub fn detect_metric_filter(
    text: &NormalizedText,
    catalog: &AliasCatalog,
) -> Option<MetricFilterDetection> {
    let source = text.as_str();
    let mut segment_start = 0;

    for numeral in numerals(source) {
        let start = segment_start;
        segment_start = numeral.end;

        let segment = source[start..numeral.start].trim_end();
        let Some(comparator) = resolve_suffix(segment, &catalog.comparator) else {
            continue;
        };
        return build(source, catalog, comparator.shifted(start), start, numeral);
    }
    None
}

fn build(
    source: &str,
    catalog: &AliasCatalog,
    comparator_phrase: Detection,
    segment_start: usize,
    numeral: Range<usize>,
) -> Option<MetricFilterDetection> {
    let Some(op) = ComparisonOp::from_canonical(&comparator_phrase.canonical) else {
        report_miss(DetectionMiss::UnresolvedAlias {
            category: AliasCategory::Comparator,
            phrase: comparator_phrase.matched_phrase,
        });
        return None;
    };

    let window = &source[segment_start..comparator_phrase.span.start];
    let Some(metric_phrase) = resolve(window, &catalog.metric) else {
        report_miss(DetectionMiss::UnresolvedAlias {
            category: AliasCategory::Metric,
            phrase: window.trim().to_string(),
        });
        return None;
    };
    let metric_phrase = metric_phrase.shifted(segment_start);
    let Some(metric) = Metric::from_canonical(&metric_phrase.canonical) else {
        report_miss(DetectionMiss::UnresolvedAlias {
            category: AliasCategory::Metric,
            phrase: metric_phrase.matched_phrase,
        });
        return None;
    };

    let raw = &source[numeral.clone()];
    let Some(filter) = parse_numeral(raw).and_then(|value| MetricFilter::new(metric, op, value))
    else {
        report_miss(DetectionMiss::MalformedFilterNumeral {
            numeral: raw.to_string(),
        });
        return None;
    };

    Some(MetricFilterDetection {
        filter,
        metric_phrase,
        comparator_phrase,
        numeral,
    })
}
