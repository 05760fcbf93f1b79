use crate::generator::Dialect;
use crate::model::{
    ComparisonOp, Condition, JoinType, Literal, Operand, QueryStructure,
};

/// Structural problems found while generating. Errors make the result
/// invalid; warnings are surfaced to the UI but never block generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Checks a query structure against its own declarations. Every problem is
/// collected; nothing short-circuits, so the caller sees all of them in one
/// pass.
pub fn validate(query: &QueryStructure, dialect: &Dialect) -> Validation {
    let mut validation = Validation::default();

    if query.from_tables.is_empty() {
        validation
            .errors
            .push("query must reference at least one FROM table".to_string());
    }

    check_duplicate_names(query, &mut validation);

    for column in &query.select_columns {
        check_reference(query, column.table_ref.as_deref(), "SELECT", &mut validation);
    }

    for join in &query.joins {
        if join.conditions.is_empty() {
            validation
                .errors
                .push(format!("join on '{}' has no ON conditions", join.table));
        }
        if join.join_type == JoinType::FullOuter && !dialect.supports_full_outer_join {
            validation.warnings.push(format!(
                "dialect does not support FULL OUTER JOIN (table '{}')",
                join.table
            ));
        }
        for condition in &join.conditions {
            check_reference(query, Some(&condition.left_ref), "JOIN", &mut validation);
            check_reference(query, Some(&condition.right_ref), "JOIN", &mut validation);
        }
    }

    for condition in &query.where_conditions {
        check_condition(query, condition, "WHERE", &mut validation);
    }
    for condition in &query.having_conditions {
        check_condition(query, condition, "HAVING", &mut validation);
    }

    for column in &query.group_by_columns {
        check_reference(query, column.table_ref.as_deref(), "GROUP BY", &mut validation);
    }
    for column in &query.order_by_columns {
        check_reference(query, column.table_ref.as_deref(), "ORDER BY", &mut validation);
    }

    if let Some(limit) = query.limit {
        if limit < 0 {
            validation.errors.push(format!("LIMIT must be non-negative, got {}", limit));
        }
    }
    if let Some(offset) = query.offset {
        if offset < 0 {
            validation.errors.push(format!("OFFSET must be non-negative, got {}", offset));
        }
    }

    validation
}

fn check_duplicate_names(query: &QueryStructure, validation: &mut Validation) {
    let mut seen: Vec<String> = vec![];

    for name in query.declared_names() {
        if seen.iter().any(|known| known.eq_ignore_ascii_case(&name)) {
            validation
                .warnings
                .push(format!("duplicate table name or alias '{}'", name));
        } else {
            seen.push(name);
        }
    }
}

fn check_reference(
    query: &QueryStructure,
    table_ref: Option<&str>,
    clause: &str,
    validation: &mut Validation,
) {
    if let Some(reference) = table_ref {
        if !query.declares(reference) {
            validation.errors.push(format!(
                "unknown table reference '{}' in {} clause",
                reference, clause
            ));
        }
    }
}

fn check_condition(
    query: &QueryStructure,
    condition: &Condition,
    clause: &str,
    validation: &mut Validation,
) {
    check_reference(query, condition.table_ref.as_deref(), clause, validation);

    for value in operand_values(&condition.operand) {
        if let Literal::Column { table_ref: Some(table), .. } = value {
            check_reference(query, Some(table), clause, validation);
        }
    }

    let shape_error = match condition.operator {
        ComparisonOp::Between => (!matches!(condition.operand, Operand::Range { .. }))
            .then(|| format!("BETWEEN on '{}' requires minimum and maximum values", condition.column)),
        ComparisonOp::In => match &condition.operand {
            Operand::List(values) if !values.is_empty() => None,
            _ => Some(format!("IN on '{}' requires at least one value", condition.column)),
        },
        ComparisonOp::IsNull | ComparisonOp::IsNotNull => {
            (!matches!(condition.operand, Operand::None))
                .then(|| format!("null check on '{}' does not take a value", condition.column))
        }
        _ => (!matches!(condition.operand, Operand::Value(_)))
            .then(|| format!("operator {} on '{}' requires a value", condition.operator, condition.column)),
    };

    if let Some(error) = shape_error {
        validation.errors.push(error);
    }
}

fn operand_values(operand: &Operand) -> Vec<&Literal> {
    match operand {
        Operand::None => vec![],
        Operand::Value(value) => vec![value],
        Operand::List(values) => values.iter().collect(),
        Operand::Range { min, max } => vec![min, max],
    }
}
