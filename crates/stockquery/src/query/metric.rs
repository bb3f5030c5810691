use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric metrics that can be selected or filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "PE")]
    Pe,
    #[serde(rename = "PB")]
    Pb,
    #[serde(rename = "EPS")]
    Eps,
    #[serde(rename = "MarketCapCr")]
    MarketCap,
    #[serde(rename = "DividendYieldPct")]
    DividendYield,
    #[serde(rename = "PRICE")]
    Price,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Pe,
        Metric::Pb,
        Metric::Eps,
        Metric::MarketCap,
        Metric::DividendYield,
        Metric::Price,
    ];

    /// The canonical value used in alias tables.
    pub fn canonical(self) -> &'static str {
        match self {
            Metric::Pe => "PE",
            Metric::Pb => "PB",
            Metric::Eps => "EPS",
            Metric::MarketCap => "MarketCapCr",
            Metric::DividendYield => "DividendYieldPct",
            Metric::Price => "PRICE",
        }
    }

    pub fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.canonical() == value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOp {
    Gt,
    Lt,
    Ge,
    Le,
    Eq,
}

impl ComparisonOp {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOp::Gt => "gt",
            ComparisonOp::Lt => "lt",
            ComparisonOp::Ge => "ge",
            ComparisonOp::Le => "le",
            ComparisonOp::Eq => "eq",
        }
    }

    pub fn from_canonical(value: &str) -> Option<Self> {
        match value {
            "gt" => Some(ComparisonOp::Gt),
            "lt" => Some(ComparisonOp::Lt),
            "ge" => Some(ComparisonOp::Ge),
            "le" => Some(ComparisonOp::Le),
            "eq" => Some(ComparisonOp::Eq),
            _ => None,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `metric op value` constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricFilter {
    pub metric: Metric,
    pub op: ComparisonOp,
    value: f64,
}

impl MetricFilter {
    /// Returns `None` for NaN or infinite values.
    pub fn new(metric: Metric, op: ComparisonOp, value: f64) -> Option<Self> {
        value.is_finite().then_some(Self { metric, op, value })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
