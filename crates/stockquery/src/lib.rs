//! Natural-language equity query interpretation.
//!
//! This crate turns short requests like "sector materials with PE under 100"
//! into a structured query and then into a search-service request:
//! - Normalization and table-driven alias resolution
//! - Component detection and fixed-priority mode routing
//! - Filter compilation and request serialization
//! - Time-series lookup planning for resolved symbols

pub mod alias;
pub mod compile;
pub mod detect;
pub mod error;
pub mod interpreter;
pub mod lookup;
pub mod normalize;
pub mod query;
pub mod request;
pub mod route;

// Re-export main types
pub use alias::{AliasCatalog, AliasCatalogSource, AliasCategory, AliasEntry, AliasTable};
pub use compile::{compile, CompiledQuery, Field, FilterExpression};
pub use error::{Result, StockQueryError};
pub use interpreter::QueryInterpreter;
pub use lookup::{plan_lookup, Aggregation, LookupField, LookupKind, TimeSeriesQuery};
pub use normalize::{normalize, NormalizedText};
pub use query::{
    ComparisonOp, Diagnostics, Metric, MetricFilter, QueryKind, QueryMode, QuerySpec, StockEntity,
};
pub use request::{render_filter, SearchRequest, SearchTarget};
pub use route::ModeRouter;
