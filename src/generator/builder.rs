use std::time::Instant;

use tracing::debug;

use crate::generator::{validate, Dialect, Validation};
use crate::model::{
    AggregateFunction, ComparisonOp, Condition, JoinClause, LogicalOp, Operand, QueryStructure,
    SelectColumn,
};
use crate::params::extract_parameters;

#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    pub format_sql: bool,
    pub validate_syntax: bool,
    pub dialect: Dialect,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            format_sql: false,
            validate_syntax: true,
            dialect: Dialect::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildResult {
    pub sql: String,
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub parameters: Vec<String>,
    pub build_time_ms: f64,
}

/// Walks the query model and emits SQL text in fixed clause order. Validation
/// problems never block emission; the best-effort SQL always comes back next
/// to the error list so the UI can show both.
pub struct SqlBuilder;

impl SqlBuilder {
    pub fn build(query: &QueryStructure, options: &BuildOptions) -> BuildResult {
        let started = Instant::now();

        let Validation { errors, warnings } = if options.validate_syntax {
            validate(query, &options.dialect)
        } else {
            Validation::default()
        };

        let separator = if options.format_sql { "\n" } else { " " };
        let sql = Self::clause_strings(query, &options.dialect).join(separator);
        let parameters = extract_parameters(&sql);
        let build_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        debug!(chars = sql.len(), errors = errors.len(), "built select statement");

        BuildResult {
            sql,
            valid: errors.is_empty(),
            errors,
            warnings,
            parameters,
            build_time_ms,
        }
    }

    fn clause_strings(query: &QueryStructure, dialect: &Dialect) -> Vec<String> {
        let mut clauses: Vec<String> = vec![];

        let items: Vec<String> = query
            .select_columns
            .iter()
            .map(|column| Self::render_select_column(column, dialect))
            .collect();
        let list = if items.is_empty() { "*".to_string() } else { items.join(", ") };
        if query.distinct {
            clauses.push(format!("SELECT DISTINCT {}", list));
        } else {
            clauses.push(format!("SELECT {}", list));
        }

        if !query.from_tables.is_empty() {
            let tables: Vec<String> = query
                .from_tables
                .iter()
                .map(|table| Self::render_table(&table.name, table.alias.as_deref(), dialect))
                .collect();
            clauses.push(format!("FROM {}", tables.join(", ")));
        }

        for join in &query.joins {
            clauses.push(Self::render_join(join, dialect));
        }

        if !query.where_conditions.is_empty() {
            clauses.push(format!(
                "WHERE {}",
                Self::render_conditions(&query.where_conditions, dialect)
            ));
        }

        if !query.group_by_columns.is_empty() {
            let columns: Vec<String> = query
                .group_by_columns
                .iter()
                .map(|column| Self::render_reference(column.table_ref.as_deref(), &column.column, dialect))
                .collect();
            clauses.push(format!("GROUP BY {}", columns.join(", ")));
        }

        if !query.having_conditions.is_empty() {
            clauses.push(format!(
                "HAVING {}",
                Self::render_conditions(&query.having_conditions, dialect)
            ));
        }

        if !query.order_by_columns.is_empty() {
            let columns: Vec<String> = query
                .order_by_columns
                .iter()
                .map(|column| {
                    let source = Self::render_source(
                        column.table_ref.as_deref(),
                        column.aggregate,
                        &column.column,
                        dialect,
                    );
                    format!("{} {}", source, column.direction)
                })
                .collect();
            clauses.push(format!("ORDER BY {}", columns.join(", ")));
        }

        if let Some(limit) = query.limit {
            clauses.push(format!("LIMIT {}", limit));
        }
        if let Some(offset) = query.offset {
            clauses.push(format!("OFFSET {}", offset));
        }

        clauses
    }

    fn render_reference(table_ref: Option<&str>, column: &str, dialect: &Dialect) -> String {
        match table_ref {
            Some(table) => format!("{}.{}", dialect.ident(table), dialect.ident(column)),
            None => dialect.ident(column),
        }
    }

    fn render_source(
        table_ref: Option<&str>,
        aggregate: Option<AggregateFunction>,
        column: &str,
        dialect: &Dialect,
    ) -> String {
        let reference = Self::render_reference(table_ref, column, dialect);
        match aggregate {
            Some(function) => format!("{}({})", function, reference),
            None => reference,
        }
    }

    fn render_select_column(column: &SelectColumn, dialect: &Dialect) -> String {
        let source =
            Self::render_source(column.table_ref.as_deref(), column.aggregate, &column.column, dialect);
        match &column.alias {
            Some(alias) => format!("{} AS {}", source, dialect.ident(alias)),
            None => source,
        }
    }

    fn render_table(name: &str, alias: Option<&str>, dialect: &Dialect) -> String {
        match alias {
            Some(alias) => format!("{} AS {}", dialect.ident(name), dialect.ident(alias)),
            None => dialect.ident(name),
        }
    }

    fn render_join(join: &JoinClause, dialect: &Dialect) -> String {
        let conditions: Vec<String> = join
            .conditions
            .iter()
            .map(|condition| {
                format!(
                    "{} {} {}",
                    Self::render_reference(Some(&condition.left_ref), &condition.left_column, dialect),
                    condition.operator,
                    Self::render_reference(Some(&condition.right_ref), &condition.right_column, dialect),
                )
            })
            .collect();

        format!(
            "{} {} ON {}",
            join.join_type,
            Self::render_table(&join.table, join.alias.as_deref(), dialect),
            conditions.join(" AND "),
        )
    }

    fn render_conditions(conditions: &[Condition], dialect: &Dialect) -> String {
        let mut rendered = String::new();

        for (index, condition) in conditions.iter().enumerate() {
            if index > 0 {
                // the first condition's connective is ignored by contract
                let connective = condition.logical_op.unwrap_or(LogicalOp::And);
                rendered.push_str(&format!(" {} ", connective));
            }
            rendered.push_str(&Self::render_condition(condition, dialect));
        }

        rendered
    }

    fn render_condition(condition: &Condition, dialect: &Dialect) -> String {
        let source = Self::render_source(
            condition.table_ref.as_deref(),
            condition.aggregate,
            &condition.column,
            dialect,
        );

        let body = match (&condition.operator, &condition.operand) {
            (ComparisonOp::Between, Operand::Range { min, max }) => {
                format!("{} BETWEEN {} AND {}", source, min, max)
            }
            (ComparisonOp::In, Operand::List(values)) => {
                let list: Vec<String> = values.iter().map(|value| value.to_string()).collect();
                format!("{} IN ({})", source, list.join(", "))
            }
            (ComparisonOp::IsNull, _) => format!("{} IS NULL", source),
            (ComparisonOp::IsNotNull, _) => format!("{} IS NOT NULL", source),
            (operator, Operand::Value(value)) => format!("{} {} {}", source, operator, value),
            // operand missing or mismatched; validation already reported it
            (operator, _) => format!("{} {}", source, operator),
        };

        if condition.negated {
            format!("NOT ({})", body)
        } else {
            body
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::generator::{BuildOptions, Dialect, SqlBuilder};
    use crate::model::{
        ComparisonOp, Condition, FromTable, Literal, LogicalOp, Operand, QueryStructure,
        SelectColumn,
    };
    use crate::parser::StructuralParser;

    fn build_sql(query: &QueryStructure) -> String {
        SqlBuilder::build(query, &BuildOptions::default()).sql
    }

    #[test]
    pub fn test_build_simple_select() {
        let query = QueryStructure {
            select_columns: vec![SelectColumn::named("id"), SelectColumn::named("name")],
            from_tables: vec![FromTable { name: "employees".to_string(), alias: None }],
            ..Default::default()
        };

        assert_eq!(build_sql(&query), "SELECT id, name FROM employees");
    }

    #[test]
    pub fn test_build_empty_select_list_falls_back_to_star() {
        let query = QueryStructure {
            from_tables: vec![FromTable { name: "t".to_string(), alias: None }],
            ..Default::default()
        };

        assert_eq!(build_sql(&query), "SELECT * FROM t");
    }

    #[test]
    pub fn test_build_emits_alias_and_where() {
        let query = StructuralParser::parse("SELECT e.id FROM employees AS e WHERE e.active = 1")
            .expect("Failed to parse");

        assert_eq!(build_sql(&query), "SELECT e.id FROM employees AS e WHERE e.active = 1");
    }

    #[test]
    pub fn test_build_clause_order_is_fixed() {
        let text = "SELECT d.name, COUNT(*) AS cnt FROM employees e \
                    INNER JOIN departments AS d ON e.dept_id = d.id \
                    WHERE e.active = TRUE GROUP BY d.name HAVING cnt > 5 \
                    ORDER BY cnt DESC LIMIT 10 OFFSET 20";
        let query = StructuralParser::parse(text).expect("Failed to parse");

        assert_eq!(
            build_sql(&query),
            "SELECT d.name, COUNT(*) AS cnt FROM employees AS e \
             INNER JOIN departments AS d ON e.dept_id = d.id \
             WHERE e.active = TRUE GROUP BY d.name HAVING cnt > 5 \
             ORDER BY cnt DESC LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    pub fn test_build_formatted_puts_clauses_on_lines() {
        let query = StructuralParser::parse("SELECT id FROM t WHERE id = 1 ORDER BY id")
            .expect("Failed to parse");

        let result = SqlBuilder::build(
            &query,
            &BuildOptions { format_sql: true, ..BuildOptions::default() },
        );

        assert_eq!(result.sql, "SELECT id\nFROM t\nWHERE id = 1\nORDER BY id ASC");
    }

    #[test]
    pub fn test_build_negated_condition_wraps_in_not() {
        let query = StructuralParser::parse("SELECT * FROM t WHERE NOT (status = 3)")
            .expect("Failed to parse");

        assert_eq!(build_sql(&query), "SELECT * FROM t WHERE NOT (status = 3)");
    }

    #[test]
    pub fn test_build_operand_shapes() {
        let text = "SELECT * FROM t WHERE a BETWEEN 1 AND 5 AND b IN (1, 2) \
                    AND c IS NULL OR d LIKE '%x%'";
        let query = StructuralParser::parse(text).expect("Failed to parse");

        assert_eq!(
            build_sql(&query),
            "SELECT * FROM t WHERE a BETWEEN 1 AND 5 AND b IN (1, 2) \
             AND c IS NULL OR d LIKE '%x%'"
        );
    }

    #[test]
    pub fn test_build_reports_validation_but_still_emits() {
        let mut query = QueryStructure {
            select_columns: vec![SelectColumn::named("id")],
            from_tables: vec![FromTable { name: "t".to_string(), alias: None }],
            ..Default::default()
        };
        query.select_columns[0].table_ref = Some("missing".to_string());

        let result = SqlBuilder::build(&query, &BuildOptions::default());

        assert!(!result.valid);
        assert_eq!(result.errors, vec!["unknown table reference 'missing' in SELECT clause"]);
        assert_eq!(result.sql, "SELECT missing.id FROM t");
    }

    #[test]
    pub fn test_build_skips_validation_when_disabled() {
        let query = QueryStructure::default();

        let result = SqlBuilder::build(
            &query,
            &BuildOptions { validate_syntax: false, ..BuildOptions::default() },
        );

        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    pub fn test_build_detects_parameters() {
        let query = StructuralParser::parse(
            "SELECT * FROM t WHERE id = :id AND name = :name AND age > :id",
        )
        .expect("Failed to parse");

        let result = SqlBuilder::build(&query, &BuildOptions::default());

        assert_eq!(result.parameters, vec!["id", "name"]);
    }

    #[test]
    pub fn test_build_never_mutates_input() {
        let query = StructuralParser::parse("SELECT id FROM t").expect("Failed to parse");
        let snapshot = query.clone();

        let _ = SqlBuilder::build(&query, &BuildOptions::default());

        assert_eq!(query, snapshot);
    }

    #[test]
    pub fn test_round_trip_preserves_structure() {
        let text = "SELECT e.department, COUNT(*) AS cnt FROM employees AS e \
                    WHERE e.age >= 18 AND e.city = 'Porto' GROUP BY e.department \
                    HAVING cnt BETWEEN 5 AND 10 ORDER BY cnt DESC LIMIT 3";
        let parsed = StructuralParser::parse(text).expect("Failed to parse");

        let rebuilt = build_sql(&parsed);
        let reparsed = StructuralParser::parse(&rebuilt).expect("Failed to reparse");

        assert_eq!(reparsed, parsed);
    }

    #[test]
    pub fn test_round_trip_between_stays_one_condition() {
        let text = "SELECT department FROM employees GROUP BY department \
                    HAVING cnt BETWEEN 5 AND 10";
        let parsed = StructuralParser::parse(text).expect("Failed to parse");

        assert_eq!(parsed.having_conditions.len(), 1);
        assert_eq!(
            parsed.having_conditions[0].operand,
            Operand::Range { min: Literal::Int(5), max: Literal::Int(10) }
        );

        let rebuilt = build_sql(&parsed);
        let reparsed = StructuralParser::parse(&rebuilt).expect("Failed to reparse");

        assert_eq!(reparsed.having_conditions.len(), 1);
        assert_eq!(reparsed.having_conditions[0].operator, ComparisonOp::Between);
    }

    #[test]
    pub fn test_round_trip_logical_chaining() {
        let parsed = StructuralParser::parse("SELECT * FROM t WHERE a=1 AND b=2 OR c=3")
            .expect("Failed to parse");

        let rebuilt = build_sql(&parsed);
        assert_eq!(rebuilt, "SELECT * FROM t WHERE a = 1 AND b = 2 OR c = 3");

        let reparsed = StructuralParser::parse(&rebuilt).expect("Failed to reparse");
        assert_eq!(reparsed.where_conditions[1].logical_op, Some(LogicalOp::And));
        assert_eq!(reparsed.where_conditions[2].logical_op, Some(LogicalOp::Or));
    }

    #[test]
    pub fn test_first_connective_is_ignored_on_build() {
        let mut query = StructuralParser::parse("SELECT * FROM t WHERE a = 1")
            .expect("Failed to parse");
        query.where_conditions[0].logical_op = Some(LogicalOp::Or);

        assert_eq!(build_sql(&query), "SELECT * FROM t WHERE a = 1");
    }

    #[test]
    pub fn test_build_quotes_identifiers_when_needed() {
        let query = QueryStructure {
            select_columns: vec![SelectColumn::named("first name")],
            from_tables: vec![FromTable { name: "t".to_string(), alias: None }],
            ..Default::default()
        };

        assert_eq!(build_sql(&query), "SELECT \"first name\" FROM t");
    }

    #[test]
    pub fn test_build_condition_without_operand_stays_partial() {
        let query = QueryStructure {
            select_columns: vec![SelectColumn::named("id")],
            from_tables: vec![FromTable { name: "t".to_string(), alias: None }],
            where_conditions: vec![Condition {
                table_ref: None,
                aggregate: None,
                column: "age".to_string(),
                operator: ComparisonOp::Gt,
                operand: Operand::None,
                logical_op: None,
                negated: false,
            }],
            ..Default::default()
        };

        let result = SqlBuilder::build(&query, &BuildOptions::default());

        assert!(!result.valid);
        assert_eq!(result.sql, "SELECT id FROM t WHERE age >");
    }

    #[test]
    pub fn test_build_with_dialect_without_full_outer_join_warns() {
        let query = StructuralParser::parse(
            "SELECT * FROM a FULL OUTER JOIN b ON a.id = b.id",
        )
        .expect("Failed to parse");

        let options = BuildOptions {
            dialect: Dialect { supports_full_outer_join: false, ..Dialect::default() },
            ..BuildOptions::default()
        };
        let result = SqlBuilder::build(&query, &options);

        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.sql, "SELECT * FROM a FULL OUTER JOIN b ON a.id = b.id");
    }
}
