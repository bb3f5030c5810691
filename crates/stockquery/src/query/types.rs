use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::alias::AliasCategory;

use super::metric::{Metric, MetricFilter};

/// A stock the user referred to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockEntity {
    /// Display-quality text taken from the original input.
    pub text: String,
    /// Canonical symbol when the stock-entity table matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl StockEntity {
    pub fn free_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            symbol: None,
        }
    }

    pub fn resolved(text: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            symbol: Some(symbol.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    ListByIndexWithFilter,
    ListBySectorWithFilter,
    ListByIndex,
    ListBySector,
    ListByMetricFilter,
    SingleStockMetric,
    SingleStockOverview,
}

impl QueryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryMode::ListByIndexWithFilter => "list_by_index_with_filter",
            QueryMode::ListBySectorWithFilter => "list_by_sector_with_filter",
            QueryMode::ListByIndex => "list_by_index",
            QueryMode::ListBySector => "list_by_sector",
            QueryMode::ListByMetricFilter => "list_by_metric_filter",
            QueryMode::SingleStockMetric => "single_stock_metric",
            QueryMode::SingleStockOverview => "single_stock_overview",
        }
    }

    /// Listing modes return many rows and ask the backend for a total count.
    pub fn is_listing(self) -> bool {
        !matches!(
            self,
            QueryMode::SingleStockMetric | QueryMode::SingleStockOverview
        )
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One variant per mode, each carrying only the fields that mode uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QueryKind {
    SingleStockMetric { entity: StockEntity, metric: Metric },
    SingleStockOverview { entity: StockEntity },
    ListByIndex { index: String },
    ListByIndexWithFilter { index: String, filter: MetricFilter },
    ListBySector { sector: String },
    ListBySectorWithFilter { sector: String, filter: MetricFilter },
    ListByMetricFilter { filter: MetricFilter },
}

impl QueryKind {
    pub fn mode(&self) -> QueryMode {
        match self {
            QueryKind::SingleStockMetric { .. } => QueryMode::SingleStockMetric,
            QueryKind::SingleStockOverview { .. } => QueryMode::SingleStockOverview,
            QueryKind::ListByIndex { .. } => QueryMode::ListByIndex,
            QueryKind::ListByIndexWithFilter { .. } => QueryMode::ListByIndexWithFilter,
            QueryKind::ListBySector { .. } => QueryMode::ListBySector,
            QueryKind::ListBySectorWithFilter { .. } => QueryMode::ListBySectorWithFilter,
            QueryKind::ListByMetricFilter { .. } => QueryMode::ListByMetricFilter,
        }
    }

    pub fn entity(&self) -> Option<&StockEntity> {
        match self {
            QueryKind::SingleStockMetric { entity, .. }
            | QueryKind::SingleStockOverview { entity } => Some(entity),
            _ => None,
        }
    }

    pub fn filter(&self) -> Option<&MetricFilter> {
        match self {
            QueryKind::ListByIndexWithFilter { filter, .. }
            | QueryKind::ListBySectorWithFilter { filter, .. }
            | QueryKind::ListByMetricFilter { filter } => Some(filter),
            _ => None,
        }
    }
}

/// Observability-only record of what matched. Never read by the compiler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub raw_input: String,
    pub matched_phrases: BTreeMap<AliasCategory, String>,
}

/// The routed, mode-tagged interpretation of one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySpec {
    #[serde(flatten)]
    pub kind: QueryKind,
    pub diagnostics: Diagnostics,
}

impl QuerySpec {
    pub fn mode(&self) -> QueryMode {
        self.kind.mode()
    }
}
