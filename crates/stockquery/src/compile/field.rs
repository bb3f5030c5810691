//! Backend field names.

use std::fmt;

use crate::query::Metric;

/// Every field the compiler may select or filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Symbol,
    SymbolRaw,
    Name,
    Sector,
    MarketCapCr,
    Pe,
    Pb,
    Eps,
    DividendYieldPct,
    Price,
    AllIndices,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Symbol => "Symbol",
            Field::SymbolRaw => "SymbolRaw",
            Field::Name => "Name",
            Field::Sector => "Sector",
            Field::MarketCapCr => "MarketCapCr",
            Field::Pe => "PE",
            Field::Pb => "PB",
            Field::Eps => "EPS",
            Field::DividendYieldPct => "DividendYieldPct",
            Field::Price => "Price",
            Field::AllIndices => "AllIndices",
        }
    }
}

impl From<Metric> for Field {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Pe => Field::Pe,
            Metric::Pb => Field::Pb,
            Metric::Eps => Field::Eps,
            Metric::MarketCap => Field::MarketCapCr,
            Metric::DividendYield => Field::DividendYieldPct,
            Metric::Price => Field::Price,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Field groups
// ---------------------------------------------------------------------------

pub const ID_FIELDS: &[Field] = &[Field::Symbol, Field::SymbolRaw, Field::Name];

pub const OVERVIEW_FIELDS: &[Field] = &[
    Field::Sector,
    Field::MarketCapCr,
    Field::Pe,
    Field::Pb,
    Field::Eps,
    Field::DividendYieldPct,
    Field::AllIndices,
];

pub const SINGLE_STOCK_SEARCH_FIELDS: &[Field] = &[Field::SymbolRaw, Field::Name, Field::Symbol];

/// Builds a selection in insertion order, ignoring repeats.
#[derive(Debug, Default)]
pub(crate) struct Selection(Vec<Field>);

impl Selection {
    pub fn with(mut self, fields: &[Field]) -> Self {
        for field in fields {
            self = self.push(*field);
        }
        self
    }

    pub fn push(mut self, field: Field) -> Self {
        if !self.0.contains(&field) {
            self.0.push(field);
        }
        self
    }

    pub fn into_vec(self) -> Vec<Field> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_fields() {
        assert_eq!(Field::from(Metric::MarketCap).as_str(), "MarketCapCr");
        assert_eq!(Field::from(Metric::Price).as_str(), "Price");
        assert_eq!(Field::from(Metric::Pe).to_string(), "PE");
    }

    #[test]
    fn selection_skips_duplicates() {
        let fields = Selection::default()
            .with(ID_FIELDS)
            .push(Field::Sector)
            .push(Field::Name)
            .push(Field::Sector)
            .into_vec();
        assert_eq!(
            fields,
            vec![Field::Symbol, Field::SymbolRaw, Field::Name, Field::Sector]
        );
    }
}
