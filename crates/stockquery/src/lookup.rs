//! Planning of time-series lookups for an already resolved symbol.
//!
//! The search index only holds slow-moving fundamentals. Live values
//! (`Price`, `Change`, `ChangePercent`) come from a separate document store
//! keyed by symbol; this module decides which of them the user asked for and
//! builds the parameterized query for that store. The symbol is always a
//! bound parameter.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::alias::{contains_phrase, find_occurrences};
use crate::error::{Result, StockQueryError};
use crate::normalize::normalize;

pub const SYMBOL_PARAMETER: &str = "@symbol";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LookupField {
    Price,
    Change,
    ChangePercent,
}

impl LookupField {
    pub const ALL: [LookupField; 3] = [
        LookupField::Price,
        LookupField::Change,
        LookupField::ChangePercent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LookupField::Price => "Price",
            LookupField::Change => "Change",
            LookupField::ChangePercent => "ChangePercent",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            LookupField::Price => &["price"],
            LookupField::Change => &["change"],
            LookupField::ChangePercent => &["change percent", "percent change", "percentage"],
        }
    }
}

impl fmt::Display for LookupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Aggregation {
    Max,
    Min,
}

impl Aggregation {
    const MAX_WORDS: &'static [&'static str] = &["highest", "maximum", "max", "peak", "top"];
    const MIN_WORDS: &'static [&'static str] = &["lowest", "minimum", "min", "bottom"];

    fn sort_order(self) -> &'static str {
        match self {
            Aggregation::Max => "DESC",
            Aggregation::Min => "ASC",
        }
    }
}

/// What to fetch from the time-series store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupKind {
    /// Most recent record, projecting the named fields.
    Latest { fields: Vec<LookupField> },
    /// The record holding the extreme value of one field.
    Aggregate {
        field: LookupField,
        aggregation: Aggregation,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesQuery {
    pub symbol: String,
    #[serde(flatten)]
    pub kind: LookupKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParameter {
    pub name: String,
    pub value: String,
}

/// SQL text plus its bound parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLookup {
    pub query: String,
    pub parameters: Vec<QueryParameter>,
}

impl TimeSeriesQuery {
    pub fn render(&self) -> RenderedLookup {
        let query = match &self.kind {
            LookupKind::Latest { fields } => {
                let mut columns = vec!["c.Symbol".to_string(), "c.DateTime".to_string()];
                columns.extend(fields.iter().map(|field| format!("c.{field}")));
                format!(
                    "SELECT TOP 1 {} FROM c WHERE c.Symbol = {SYMBOL_PARAMETER} ORDER BY c.DateTime DESC",
                    columns.join(", ")
                )
            }
            LookupKind::Aggregate { field, aggregation } => format!(
                "SELECT TOP 1 c.Symbol, c.DateTime, c.{field} FROM c WHERE c.Symbol = {SYMBOL_PARAMETER} ORDER BY c.{field} {}",
                aggregation.sort_order()
            ),
        };
        RenderedLookup {
            query,
            parameters: vec![QueryParameter {
                name: SYMBOL_PARAMETER.to_string(),
                value: self.symbol.clone(),
            }],
        }
    }
}

/// Plans a lookup for `symbol` from the user's wording.
///
/// An aggregation word with a named field gives an aggregate query for that
/// field. Anything else is a latest-value query; with no field named, all
/// three are fetched.
pub fn plan_lookup(symbol: &str, text: &str) -> Result<TimeSeriesQuery> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(StockQueryError::InvalidInput(
            "lookup symbol must not be empty".to_string(),
        ));
    }

    let normalized = normalize(text);
    let mentions = field_mentions(normalized.as_str());

    let kind = match (detect_aggregation(normalized.as_str()), mentions.first()) {
        (Some(aggregation), Some((field, _))) => LookupKind::Aggregate {
            field: *field,
            aggregation,
        },
        _ => {
            let mut fields: Vec<LookupField> = mentions.iter().map(|(field, _)| *field).collect();
            fields.sort();
            fields.dedup();
            if fields.is_empty() {
                fields = LookupField::ALL.to_vec();
            }
            LookupKind::Latest { fields }
        }
    };

    tracing::debug!(symbol, kind = ?kind, "lookup planned");
    Ok(TimeSeriesQuery {
        symbol: symbol.to_string(),
        kind,
    })
}

fn detect_aggregation(text: &str) -> Option<Aggregation> {
    if Aggregation::MAX_WORDS
        .iter()
        .any(|word| contains_phrase(text, word))
    {
        return Some(Aggregation::Max);
    }
    if Aggregation::MIN_WORDS
        .iter()
        .any(|word| contains_phrase(text, word))
    {
        return Some(Aggregation::Min);
    }
    None
}

/// Field mentions ordered by position. Longer aliases claim their span
/// first, so "change percent" is not also read as "change".
fn field_mentions(text: &str) -> Vec<(LookupField, Range<usize>)> {
    let mut aliases: Vec<(LookupField, &str)> = LookupField::ALL
        .into_iter()
        .flat_map(|field| field.aliases().iter().map(move |alias| (field, *alias)))
        .collect();
    aliases.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

    let mut claimed: Vec<(LookupField, Range<usize>)> = Vec::new();
    for (field, alias) in aliases {
        for range in find_occurrences(text, alias) {
            let overlapping = claimed
                .iter()
                .any(|(_, taken)| range.start < taken.end && taken.start < range.end);
            if !overlapping {
                claimed.push((field, range));
            }
        }
    }
    claimed.sort_by_key(|(_, range)| range.start);
    claimed
}
