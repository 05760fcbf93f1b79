use serde::{Deserialize, Serialize};

use crate::model::AggregateFunction;

/// One item of the SELECT list. `column == "*"` selects all columns,
/// optionally qualified by `table_ref`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectColumn {
    pub table_ref: Option<String>,
    pub column: String,
    pub alias: Option<String>,
    pub aggregate: Option<AggregateFunction>,
}

impl SelectColumn {
    pub fn named(column: &str) -> Self {
        Self {
            table_ref: None,
            column: column.to_string(),
            alias: None,
            aggregate: None,
        }
    }
}
