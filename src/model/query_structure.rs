use serde::{Deserialize, Serialize};

use crate::model::{
    Condition, FromTable, GroupByColumn, JoinClause, OrderByColumn, SelectColumn,
};

/// The editable representation of a SELECT statement. Produced by the
/// structural parser or assembled field-by-field by the builder UI, and
/// consumed read-only by the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryStructure {
    pub select_columns: Vec<SelectColumn>,
    pub distinct: bool,
    pub from_tables: Vec<FromTable>,
    pub joins: Vec<JoinClause>,
    pub where_conditions: Vec<Condition>,
    pub having_conditions: Vec<Condition>,
    pub group_by_columns: Vec<GroupByColumn>,
    pub order_by_columns: Vec<OrderByColumn>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl QueryStructure {
    /// Every table name and alias declared by FROM and JOIN entries. Aliases
    /// and bare table names share this one namespace.
    pub fn declared_names(&self) -> Vec<String> {
        let mut names = Vec::new();

        for table in &self.from_tables {
            names.push(table.name.clone());
            if let Some(alias) = &table.alias {
                names.push(alias.clone());
            }
        }

        for join in &self.joins {
            names.push(join.table.clone());
            if let Some(alias) = &join.alias {
                names.push(alias.clone());
            }
        }

        names
    }

    /// Whether a table reference resolves against the declared namespace.
    /// Matching is case-insensitive, like SQL identifiers.
    pub fn declares(&self, reference: &str) -> bool {
        self.declared_names()
            .iter()
            .any(|name| name.eq_ignore_ascii_case(reference))
    }
}
