use serde::{Deserialize, Serialize};

use crate::model::{
    Condition, ConditionHost, FromTable, GroupByColumn, JoinClause, Operand, OrderByColumn,
    QueryStructure, SelectColumn,
};

/// A single field-level mutation of the query model. Edits never change the
/// input structure; `apply` returns a new value. Out-of-range indexes leave
/// the structure unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryEdit {
    SetDistinct(bool),
    AddSelectColumn(SelectColumn),
    UpdateSelectColumn(usize, SelectColumn),
    RemoveSelectColumn(usize),
    AddFromTable(FromTable),
    RemoveFromTable(usize),
    AddJoin(JoinClause),
    RemoveJoin(usize),
    AddCondition(ConditionHost, Condition),
    UpdateCondition(ConditionHost, usize, Condition),
    RemoveCondition(ConditionHost, usize),
    AddGroupBy(GroupByColumn),
    RemoveGroupBy(usize),
    AddOrderBy(OrderByColumn),
    RemoveOrderBy(usize),
    SetLimit(Option<i64>),
    SetOffset(Option<i64>),
    RenameTableRef { old: String, new: String },
}

pub fn apply(query: &QueryStructure, edit: QueryEdit) -> QueryStructure {
    let mut next = query.clone();

    match edit {
        QueryEdit::SetDistinct(value) => next.distinct = value,
        QueryEdit::AddSelectColumn(column) => next.select_columns.push(column),
        QueryEdit::UpdateSelectColumn(index, column) => {
            if index < next.select_columns.len() {
                next.select_columns[index] = column;
            }
        }
        QueryEdit::RemoveSelectColumn(index) => {
            if index < next.select_columns.len() {
                next.select_columns.remove(index);
            }
        }
        QueryEdit::AddFromTable(table) => next.from_tables.push(table),
        QueryEdit::RemoveFromTable(index) => {
            if index < next.from_tables.len() {
                next.from_tables.remove(index);
            }
        }
        QueryEdit::AddJoin(join) => next.joins.push(join),
        QueryEdit::RemoveJoin(index) => {
            if index < next.joins.len() {
                next.joins.remove(index);
            }
        }
        QueryEdit::AddCondition(host, condition) => host_conditions(&mut next, host).push(condition),
        QueryEdit::UpdateCondition(host, index, condition) => {
            let conditions = host_conditions(&mut next, host);
            if index < conditions.len() {
                conditions[index] = condition;
            }
        }
        QueryEdit::RemoveCondition(host, index) => {
            let conditions = host_conditions(&mut next, host);
            if index < conditions.len() {
                conditions.remove(index);
            }
        }
        QueryEdit::AddGroupBy(column) => next.group_by_columns.push(column),
        QueryEdit::RemoveGroupBy(index) => {
            if index < next.group_by_columns.len() {
                next.group_by_columns.remove(index);
            }
        }
        QueryEdit::AddOrderBy(column) => next.order_by_columns.push(column),
        QueryEdit::RemoveOrderBy(index) => {
            if index < next.order_by_columns.len() {
                next.order_by_columns.remove(index);
            }
        }
        QueryEdit::SetLimit(limit) => next.limit = limit,
        QueryEdit::SetOffset(offset) => next.offset = offset,
        QueryEdit::RenameTableRef { old, new } => return rename_table_ref(query, &old, &new),
    }

    next
}

/// Renames an alias or table reference everywhere it occurs: the FROM/JOIN
/// declaration itself plus every reference in SELECT, JOIN conditions,
/// WHERE, GROUP BY, HAVING and ORDER BY. One traversal, case-insensitive
/// matching, always total.
pub fn rename_table_ref(query: &QueryStructure, old: &str, new: &str) -> QueryStructure {
    let mut next = query.clone();

    let rename = |reference: &mut Option<String>| {
        if let Some(name) = reference {
            if name.eq_ignore_ascii_case(old) {
                *name = new.to_string();
            }
        }
    };

    for table in &mut next.from_tables {
        rename(&mut table.alias);
    }

    for join in &mut next.joins {
        rename(&mut join.alias);
        for condition in &mut join.conditions {
            if condition.left_ref.eq_ignore_ascii_case(old) {
                condition.left_ref = new.to_string();
            }
            if condition.right_ref.eq_ignore_ascii_case(old) {
                condition.right_ref = new.to_string();
            }
        }
    }

    for column in &mut next.select_columns {
        rename(&mut column.table_ref);
    }

    for condition in next.where_conditions.iter_mut().chain(next.having_conditions.iter_mut()) {
        rename(&mut condition.table_ref);
        condition.operand = rename_operand(&condition.operand, old, new);
    }

    for column in &mut next.group_by_columns {
        rename(&mut column.table_ref);
    }

    for column in &mut next.order_by_columns {
        rename(&mut column.table_ref);
    }

    next
}

fn host_conditions(query: &mut QueryStructure, host: ConditionHost) -> &mut Vec<Condition> {
    match host {
        ConditionHost::Where => &mut query.where_conditions,
        ConditionHost::Having => &mut query.having_conditions,
    }
}

fn rename_operand(operand: &Operand, old: &str, new: &str) -> Operand {
    match operand {
        Operand::None => Operand::None,
        Operand::Value(value) => Operand::Value(value.with_renamed_table_ref(old, new)),
        Operand::List(values) => Operand::List(
            values.iter().map(|value| value.with_renamed_table_ref(old, new)).collect(),
        ),
        Operand::Range { min, max } => Operand::Range {
            min: min.with_renamed_table_ref(old, new),
            max: max.with_renamed_table_ref(old, new),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::model::{
        apply, rename_table_ref, ComparisonOp, Condition, ConditionHost, FromTable,
        GroupByColumn, JoinClause, JoinCondition, JoinType, Literal, Operand, OrderByColumn,
        QueryEdit, QueryStructure, SelectColumn, SortDirection,
    };

    fn base() -> QueryStructure {
        QueryStructure {
            select_columns: vec![SelectColumn {
                table_ref: Some("e".to_string()),
                column: "id".to_string(),
                alias: None,
                aggregate: None,
            }],
            from_tables: vec![FromTable { name: "employees".to_string(), alias: Some("e".to_string()) }],
            ..Default::default()
        }
    }

    #[test]
    pub fn test_apply_returns_new_value() {
        let query = base();

        let edited = apply(&query, QueryEdit::SetDistinct(true));

        assert!(!query.distinct);
        assert!(edited.distinct);
    }

    #[test]
    pub fn test_apply_add_and_remove_condition() {
        let query = base();
        let condition = Condition::compare("active", ComparisonOp::Eq, Literal::Bool(true));

        let edited = apply(&query, QueryEdit::AddCondition(ConditionHost::Where, condition));
        assert_eq!(edited.where_conditions.len(), 1);

        let removed = apply(&edited, QueryEdit::RemoveCondition(ConditionHost::Where, 0));
        assert!(removed.where_conditions.is_empty());
    }

    #[test]
    pub fn test_apply_out_of_range_is_ignored() {
        let query = base();

        let edited = apply(&query, QueryEdit::RemoveSelectColumn(9));

        assert_eq!(edited, query);
    }

    #[test]
    pub fn test_apply_set_limit() {
        let query = base();

        let edited = apply(&query, QueryEdit::SetLimit(Some(25)));

        assert_eq!(edited.limit, Some(25));
        assert_eq!(query.limit, None);
    }

    #[test]
    pub fn test_rename_table_ref_cascades_everywhere() {
        let mut query = base();
        query.joins.push(JoinClause {
            join_type: JoinType::Inner,
            table: "departments".to_string(),
            alias: Some("d".to_string()),
            conditions: vec![JoinCondition {
                left_ref: "e".to_string(),
                left_column: "dept_id".to_string(),
                operator: ComparisonOp::Eq,
                right_ref: "d".to_string(),
                right_column: "id".to_string(),
            }],
        });
        query.where_conditions.push(Condition {
            table_ref: Some("e".to_string()),
            aggregate: None,
            column: "manager_id".to_string(),
            operator: ComparisonOp::Eq,
            operand: Operand::Value(Literal::Column {
                table_ref: Some("e".to_string()),
                name: "id".to_string(),
            }),
            logical_op: None,
            negated: false,
        });
        query.group_by_columns.push(GroupByColumn {
            table_ref: Some("e".to_string()),
            column: "dept_id".to_string(),
        });
        query.order_by_columns.push(OrderByColumn {
            table_ref: Some("e".to_string()),
            aggregate: None,
            column: "id".to_string(),
            direction: SortDirection::Desc,
        });

        let renamed = rename_table_ref(&query, "e", "emp");

        assert_eq!(renamed.from_tables[0].alias, Some("emp".to_string()));
        assert_eq!(renamed.select_columns[0].table_ref, Some("emp".to_string()));
        assert_eq!(renamed.joins[0].conditions[0].left_ref, "emp");
        assert_eq!(renamed.joins[0].conditions[0].right_ref, "d");
        assert_eq!(renamed.where_conditions[0].table_ref, Some("emp".to_string()));
        assert_eq!(
            renamed.where_conditions[0].operand,
            Operand::Value(Literal::Column {
                table_ref: Some("emp".to_string()),
                name: "id".to_string(),
            })
        );
        assert_eq!(renamed.group_by_columns[0].table_ref, Some("emp".to_string()));
        assert_eq!(renamed.order_by_columns[0].table_ref, Some("emp".to_string()));
    }

    #[test]
    pub fn test_rename_edit_variant_matches_function() {
        let query = base();

        let via_edit = apply(
            &query,
            QueryEdit::RenameTableRef { old: "e".to_string(), new: "emp".to_string() },
        );
        let via_function = rename_table_ref(&query, "e", "emp");

        assert_eq!(via_edit, via_function);
    }
}
