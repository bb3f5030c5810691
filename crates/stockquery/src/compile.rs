//! QuerySpec to backend query compilation.

mod expression;
mod field;

pub use expression::FilterExpression;
pub use field::{Field, ID_FIELDS, OVERVIEW_FIELDS, SINGLE_STOCK_SEARCH_FIELDS};

use crate::query::{MetricFilter, QueryKind, QuerySpec, StockEntity};

use field::Selection;

/// Search text that matches every document.
pub const MATCH_ALL: &str = "*";
pub const SINGLE_STOCK_TOP: usize = 1;
pub const LISTING_TOP: usize = 50;

/// Backend-neutral compiled query.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub search_text: String,
    pub filter: Option<FilterExpression>,
    pub select: Vec<Field>,
    pub top: usize,
    pub count: bool,
    pub search_fields: Vec<Field>,
}

/// Compiles a spec. Total over every mode.
pub fn compile(spec: &QuerySpec) -> CompiledQuery {
    let compiled = match &spec.kind {
        QueryKind::SingleStockMetric { entity, metric } => single_stock(
            entity,
            Selection::default().with(ID_FIELDS).push((*metric).into()),
        ),
        QueryKind::SingleStockOverview { entity } => single_stock(
            entity,
            Selection::default().with(ID_FIELDS).with(OVERVIEW_FIELDS),
        ),
        QueryKind::ListByIndex { index } => listing(
            FilterExpression::collection_any(Field::AllIndices, index.as_str()),
            Selection::default().with(ID_FIELDS).with(OVERVIEW_FIELDS),
        ),
        QueryKind::ListByIndexWithFilter { index, filter } => listing(
            FilterExpression::and(
                FilterExpression::collection_any(Field::AllIndices, index.as_str()),
                comparison(filter),
            ),
            Selection::default()
                .with(ID_FIELDS)
                .push(filter.metric.into())
                .push(Field::AllIndices),
        ),
        QueryKind::ListBySector { sector } => listing(
            FilterExpression::equality(Field::Sector, sector.as_str()),
            Selection::default().with(ID_FIELDS).with(OVERVIEW_FIELDS),
        ),
        QueryKind::ListBySectorWithFilter { sector, filter } => listing(
            FilterExpression::and(
                FilterExpression::equality(Field::Sector, sector.as_str()),
                comparison(filter),
            ),
            Selection::default()
                .with(ID_FIELDS)
                .push(Field::Sector)
                .push(filter.metric.into()),
        ),
        QueryKind::ListByMetricFilter { filter } => listing(
            comparison(filter),
            Selection::default().with(ID_FIELDS).push(filter.metric.into()),
        ),
    };

    tracing::trace!(
        mode = %spec.mode(),
        top = compiled.top,
        selected = compiled.select.len(),
        "query compiled"
    );
    compiled
}

fn comparison(filter: &MetricFilter) -> FilterExpression {
    FilterExpression::comparison(filter.metric.into(), filter.op, filter.value())
}

fn single_stock(entity: &StockEntity, select: Selection) -> CompiledQuery {
    CompiledQuery {
        search_text: entity.text.clone(),
        filter: None,
        select: select.into_vec(),
        top: SINGLE_STOCK_TOP,
        count: false,
        search_fields: SINGLE_STOCK_SEARCH_FIELDS.to_vec(),
    }
}

fn listing(filter: FilterExpression, select: Selection) -> CompiledQuery {
    CompiledQuery {
        search_text: MATCH_ALL.to_string(),
        filter: Some(filter),
        select: select.into_vec(),
        top: LISTING_TOP,
        count: true,
        search_fields: Vec::new(),
    }
}
