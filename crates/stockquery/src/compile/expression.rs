use crate::query::ComparisonOp;

use super::field::Field;

/// Backend filter AST. Serialization lives in `request`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpression {
    /// `field eq 'value'`
    Equality { field: Field, value: String },
    /// `field op number`
    Comparison {
        field: Field,
        op: ComparisonOp,
        value: f64,
    },
    /// `field/any(i: i eq 'value')`
    CollectionAny { field: Field, value: String },
    And(Box<FilterExpression>, Box<FilterExpression>),
}

impl FilterExpression {
    pub fn equality(field: Field, value: impl Into<String>) -> Self {
        FilterExpression::Equality {
            field,
            value: value.into(),
        }
    }

    pub fn comparison(field: Field, op: ComparisonOp, value: f64) -> Self {
        FilterExpression::Comparison { field, op, value }
    }

    pub fn collection_any(field: Field, value: impl Into<String>) -> Self {
        FilterExpression::CollectionAny {
            field,
            value: value.into(),
        }
    }

    pub fn and(left: FilterExpression, right: FilterExpression) -> Self {
        FilterExpression::And(Box::new(left), Box::new(right))
    }

    /// Fields referenced anywhere in the tree, left to right.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            FilterExpression::Equality { field, .. }
            | FilterExpression::Comparison { field, .. }
            | FilterExpression::CollectionAny { field, .. } => vec![*field],
            FilterExpression::And(left, right) => {
                let mut fields = left.fields();
                fields.extend(right.fields());
                fields
            }
        }
    }
}
