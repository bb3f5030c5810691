//! Structured query model produced by routing.

mod metric;
mod types;

pub use metric::{ComparisonOp, Metric, MetricFilter};
pub use types::{Diagnostics, QueryKind, QueryMode, QuerySpec, StockEntity};
