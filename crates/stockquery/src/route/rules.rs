use crate::detect::Detections;
use crate::query::{QueryKind, QueryMode};

/// A single routing rule: a guard plus the query kind it builds when the guard holds.
#[derive(Clone, Copy)]
pub struct RouteRule {
    pub name: &'static str,
    pub mode: QueryMode,
    pub apply: fn(&Detections) -> Option<QueryKind>,
}

impl std::fmt::Debug for RouteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteRule")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .finish()
    }
}

/// Rules in priority order. The first rule that applies wins.
pub const ROUTE_RULES: &[RouteRule] = &[
    RouteRule {
        name: "index_with_filter",
        mode: QueryMode::ListByIndexWithFilter,
        apply: index_with_filter,
    },
    RouteRule {
        name: "sector_with_filter",
        mode: QueryMode::ListBySectorWithFilter,
        apply: sector_with_filter,
    },
    RouteRule {
        name: "index",
        mode: QueryMode::ListByIndex,
        apply: index,
    },
    RouteRule {
        name: "sector",
        mode: QueryMode::ListBySector,
        apply: sector,
    },
    RouteRule {
        name: "whole_market_filter",
        mode: QueryMode::ListByMetricFilter,
        apply: whole_market_filter,
    },
    RouteRule {
        name: "stock_metric",
        mode: QueryMode::SingleStockMetric,
        apply: stock_metric,
    },
    RouteRule {
        name: "stock_overview",
        mode: QueryMode::SingleStockOverview,
        apply: stock_overview,
    },
];

// ---- listing rules ----

fn index_with_filter(found: &Detections) -> Option<QueryKind> {
    Some(QueryKind::ListByIndexWithFilter {
        index: found.index()?.to_string(),
        filter: found.metric_filter()?,
    })
}

fn sector_with_filter(found: &Detections) -> Option<QueryKind> {
    if !found.listing_context {
        return None;
    }
    Some(QueryKind::ListBySectorWithFilter {
        sector: found.sector()?.to_string(),
        filter: found.metric_filter()?,
    })
}

fn index(found: &Detections) -> Option<QueryKind> {
    Some(QueryKind::ListByIndex {
        index: found.index()?.to_string(),
    })
}

fn sector(found: &Detections) -> Option<QueryKind> {
    if !found.listing_context {
        return None;
    }
    Some(QueryKind::ListBySector {
        sector: found.sector()?.to_string(),
    })
}

// A detected sector without listing context still blocks this rule.
fn whole_market_filter(found: &Detections) -> Option<QueryKind> {
    if found.index.is_some() || found.sector.is_some() {
        return None;
    }
    Some(QueryKind::ListByMetricFilter {
        filter: found.metric_filter()?,
    })
}

// ---- single stock rules ----

// A filter that no listing rule could place blocks this rule too.
fn stock_metric(found: &Detections) -> Option<QueryKind> {
    if found.filter.is_some() {
        return None;
    }
    Some(QueryKind::SingleStockMetric {
        entity: found.entity()?.clone(),
        metric: found.metric()?,
    })
}

fn stock_overview(found: &Detections) -> Option<QueryKind> {
    Some(QueryKind::SingleStockOverview {
        entity: found.entity()?.clone(),
    })
}
