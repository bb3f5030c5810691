//! Serialization of compiled queries into the search service's wire format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::compile::{CompiledQuery, Field, FilterExpression};

pub const DEFAULT_API_VERSION: &str = "2025-09-01";

// ---------------------------------------------------------------------------
// Filter grammar
// ---------------------------------------------------------------------------

/// Renders a filter expression in the backend's OData-style grammar.
pub fn render_filter(expression: &FilterExpression) -> String {
    match expression {
        FilterExpression::Equality { field, value } => {
            format!("{field} eq '{}'", escape_literal(value))
        }
        FilterExpression::Comparison { field, op, value } => {
            format!("{field} {op} {}", format_decimal(*value))
        }
        FilterExpression::CollectionAny { field, value } => {
            format!("{field}/any(i: i eq '{}')", escape_literal(value))
        }
        FilterExpression::And(left, right) => {
            format!("{} and {}", render_filter(left), render_filter(right))
        }
    }
}

/// Doubles single quotes so the value can sit inside a quoted literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Canonical decimal: no exponent, always a fractional part, no trailing zeros.
pub fn format_decimal(value: f64) -> String {
    // Display for f64 is the shortest round-trip form and never uses exponents.
    let mut text = if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    };
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

// ---------------------------------------------------------------------------
// Request envelope
// ---------------------------------------------------------------------------

/// A fully serialized search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub search_text: String,
    pub filter: Option<String>,
    pub select: Vec<String>,
    pub top: usize,
    pub count: bool,
    pub search_fields: Vec<String>,
}

impl SearchRequest {
    /// JSON body the search endpoint expects.
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("search".to_string(), Value::from(self.search_text.as_str()));
        if let Some(filter) = &self.filter {
            body.insert("filter".to_string(), Value::from(filter.as_str()));
        }
        body.insert("select".to_string(), Value::from(self.select.join(",")));
        body.insert("top".to_string(), Value::from(self.top));
        if self.count {
            body.insert("count".to_string(), Value::Bool(true));
        }
        if !self.search_fields.is_empty() {
            body.insert(
                "searchFields".to_string(),
                Value::from(self.search_fields.join(",")),
            );
        }
        Value::Object(body)
    }
}

impl From<&CompiledQuery> for SearchRequest {
    fn from(compiled: &CompiledQuery) -> Self {
        Self {
            search_text: compiled.search_text.clone(),
            filter: compiled.filter.as_ref().map(render_filter),
            select: field_names(&compiled.select),
            top: compiled.top,
            count: compiled.count,
            search_fields: field_names(&compiled.search_fields),
        }
    }
}

fn field_names(fields: &[Field]) -> Vec<String> {
    fields.iter().map(|field| field.as_str().to_string()).collect()
}

/// Where requests are sent. Credentials are supplied by the caller's transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTarget {
    pub endpoint: String,
    pub index_name: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl SearchTarget {
    pub fn new(endpoint: impl Into<String>, index_name: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            index_name: index_name.into(),
            api_version: default_api_version(),
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.index_name,
            self.api_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ComparisonOp;

    #[test]
    fn decimals_are_canonical() {
        assert_eq!(format_decimal(20.0), "20.0");
        assert_eq!(format_decimal(0.25), "0.25");
        assert_eq!(format_decimal(1500.5), "1500.5");
        assert_eq!(format_decimal(-0.0), "0.0");
        assert_eq!(format_decimal(1e21), "1000000000000000000000.0");
        assert_eq!(format_decimal(0.0000001), "0.0000001");
    }

    #[test]
    fn renders_every_node() {
        let expression = FilterExpression::and(
            FilterExpression::collection_any(Field::AllIndices, "NIFTY50"),
            FilterExpression::comparison(Field::Pe, ComparisonOp::Lt, 20.0),
        );
        assert_eq!(
            render_filter(&expression),
            "AllIndices/any(i: i eq 'NIFTY50') and PE lt 20.0"
        );
        let expression = FilterExpression::and(
            FilterExpression::equality(Field::Sector, "Materials"),
            FilterExpression::comparison(Field::MarketCapCr, ComparisonOp::Ge, 1000.0),
        );
        assert_eq!(
            render_filter(&expression),
            "Sector eq 'Materials' and MarketCapCr ge 1000.0"
        );
    }

    #[test]
    fn quotes_are_doubled() {
        let expression = FilterExpression::equality(Field::Sector, "Dr. Reddy's");
        assert_eq!(render_filter(&expression), "Sector eq 'Dr. Reddy''s'");
        assert_eq!(escape_literal("''"), "''''");
    }

    #[test]
    fn body_omits_empty_parts() {
        let request = SearchRequest {
            search_text: "reliance".to_string(),
            filter: None,
            select: vec!["Symbol".to_string(), "PE".to_string()],
            top: 1,
            count: false,
            search_fields: vec!["SymbolRaw".to_string(), "Name".to_string()],
        };
        assert_eq!(
            request.body(),
            serde_json::json!({
                "search": "reliance",
                "select": "Symbol,PE",
                "top": 1,
                "searchFields": "SymbolRaw,Name",
            })
        );

        let request = SearchRequest {
            search_text: "*".to_string(),
            filter: Some("Sector eq 'Energy'".to_string()),
            select: vec!["Symbol".to_string()],
            top: 50,
            count: true,
            search_fields: Vec::new(),
        };
        assert_eq!(
            request.body(),
            serde_json::json!({
                "search": "*",
                "filter": "Sector eq 'Energy'",
                "select": "Symbol",
                "top": 50,
                "count": true,
            })
        );
    }

    #[test]
    fn target_url() {
        let target = SearchTarget::new("https://stocks.search.windows.net//", "equities");
        assert_eq!(
            target.url(),
            "https://stocks.search.windows.net/indexes/equities/docs/search?api-version=2025-09-01"
        );
    }

    #[test]
    fn target_defaults_api_version() {
        let target: SearchTarget = serde_json::from_str(
            r#"{ "endpoint": "https://example.net", "index_name": "equities" }"#,
        )
        .unwrap();
        assert_eq!(target.api_version, DEFAULT_API_VERSION);
    }
}
