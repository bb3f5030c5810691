//! Mode routing: detections in, one `QuerySpec` out.

mod rules;

pub use rules::{RouteRule, ROUTE_RULES};

use crate::alias::AliasCategory;
use crate::detect::{Detections, EntitySource};
use crate::query::{Diagnostics, QueryKind, QuerySpec, StockEntity};

/// Name reported when no rule applied.
pub const FALLBACK_RULE: &str = "fallback_overview";

/// Applies an ordered rule list to detections. Never fails.
#[derive(Debug, Clone)]
pub struct ModeRouter {
    rules: &'static [RouteRule],
}

impl ModeRouter {
    pub fn new() -> Self {
        Self { rules: ROUTE_RULES }
    }

    /// Router over a custom rule list, mostly for tests.
    pub fn with_rules(rules: &'static [RouteRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [RouteRule] {
        self.rules
    }

    /// Routes detections to a spec, falling back to an overview of the raw input.
    pub fn route(&self, found: &Detections) -> QuerySpec {
        let (rule, kind) = self.select(found);
        tracing::debug!(rule, mode = %kind.mode(), "query routed");
        QuerySpec {
            kind,
            diagnostics: diagnostics(found),
        }
    }

    fn select(&self, found: &Detections) -> (&'static str, QueryKind) {
        for rule in self.rules {
            if let Some(kind) = (rule.apply)(found) {
                return (rule.name, kind);
            }
        }
        let entity = StockEntity::free_text(found.raw_input.trim());
        (FALLBACK_RULE, QueryKind::SingleStockOverview { entity })
    }
}

impl Default for ModeRouter {
    fn default() -> Self {
        Self::new()
    }
}

fn diagnostics(found: &Detections) -> Diagnostics {
    let mut diagnostics = Diagnostics {
        raw_input: found.raw_input.clone(),
        ..Diagnostics::default()
    };
    let phrases = &mut diagnostics.matched_phrases;

    if let Some(metric) = &found.metric {
        phrases.insert(AliasCategory::Metric, metric.detection.matched_phrase.clone());
    }
    if let Some(index) = &found.index {
        phrases.insert(AliasCategory::Index, index.matched_phrase.clone());
    }
    if let Some(sector) = &found.sector {
        phrases.insert(AliasCategory::Sector, sector.matched_phrase.clone());
    }
    if let Some(filter) = &found.filter {
        phrases.insert(
            AliasCategory::Comparator,
            filter.comparator_phrase.matched_phrase.clone(),
        );
    }
    if let Some(entity) = &found.entity {
        if let EntitySource::Table(detection) = &entity.source {
            phrases.insert(AliasCategory::StockEntity, detection.matched_phrase.clone());
        }
    }
    diagnostics
}
