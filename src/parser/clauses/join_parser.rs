use crate::model::{JoinClause, JoinCondition, JoinType};
use crate::parser::clauses::{ColumnTerm, ComparisonScan, TextCollector};
use crate::parser::{ParseError, Phase, QueryCursor, WordComparer};

pub struct JoinParser;

impl JoinParser {
    /// Parses consecutive `<type> JOIN table [AS] [alias] ON l.c op r.c
    /// [AND ...]` clauses until the phase moves on. A bare JOIN reads as
    /// INNER; OUTER variants normalize to their base type.
    pub fn parse(cursor: &mut QueryCursor) -> Result<Vec<JoinClause>, ParseError> {
        let mut joins: Vec<JoinClause> = vec![];

        while cursor.phase == Phase::Joins {
            let join_type = Self::parse_join_type(cursor)?;

            cursor.next_non_whitespace();
            let table = TextCollector::collect(cursor)?;
            let mut alias = None;

            cursor.next_non_whitespace();
            if let Some(len) = cursor.comparers.alias.matched_len(cursor) {
                cursor.jump(len);
                cursor.next_non_whitespace();
                alias = Some(TextCollector::collect(cursor)?);
                cursor.next_non_whitespace();
            } else if !cursor.comparers.on.compare(cursor)
                && WordComparer::is_word_char(cursor.current())
            {
                alias = Some(TextCollector::collect(cursor)?);
                cursor.next_non_whitespace();
            }

            let Some(len) = cursor.comparers.on.matched_len(cursor) else {
                return ParseError::new("expected ON after join table", cursor.position, cursor)
                    .err();
            };
            cursor.jump(len);

            let conditions = Self::parse_conditions(cursor)?;

            joins.push(JoinClause { join_type, table, alias, conditions });
        }

        Ok(joins)
    }

    fn parse_join_type(cursor: &mut QueryCursor) -> Result<JoinType, ParseError> {
        let matched = {
            let comparers = &cursor.comparers;
            [
                (&comparers.inner_join, JoinType::Inner),
                (&comparers.left_outer_join, JoinType::Left),
                (&comparers.left_join, JoinType::Left),
                (&comparers.right_outer_join, JoinType::Right),
                (&comparers.right_join, JoinType::Right),
                (&comparers.full_outer_join, JoinType::FullOuter),
                (&comparers.full_join, JoinType::FullOuter),
                (&comparers.join, JoinType::Inner),
            ]
            .iter()
            .find_map(|(comparer, join_type)| {
                comparer.matched_len(cursor).map(|len| (len, *join_type))
            })
        };

        match matched {
            Some((len, join_type)) => {
                cursor.jump(len);
                Ok(join_type)
            }
            None => ParseError::new("expected join keyword", cursor.position, cursor).err(),
        }
    }

    fn parse_conditions(cursor: &mut QueryCursor) -> Result<Vec<JoinCondition>, ParseError> {
        let mut conditions: Vec<JoinCondition> = vec![];

        loop {
            let (left_ref, left_column) = Self::parse_qualified(cursor)?;

            let Some(operator) = ComparisonScan::check(cursor) else {
                return ParseError::new(
                    "expected comparison operator in join condition",
                    cursor.position,
                    cursor,
                )
                .err();
            };

            let (right_ref, right_column) = Self::parse_qualified(cursor)?;

            conditions.push(JoinCondition {
                left_ref,
                left_column,
                operator,
                right_ref,
                right_column,
            });

            cursor.next_non_whitespace();
            if let Some(len) = cursor.comparers.and.matched_len(cursor) {
                cursor.jump(len);
                continue;
            }

            if cursor.check_next_phase() {
                return Ok(conditions);
            }

            return ParseError::new(
                "expected AND or end of join clause",
                cursor.position,
                cursor,
            )
            .err();
        }
    }

    fn parse_qualified(cursor: &mut QueryCursor) -> Result<(String, String), ParseError> {
        cursor.next_non_whitespace();
        let pivot = cursor.position;

        let term = ColumnTerm::parse(cursor, false)?;

        if term.aggregate.is_some() {
            return ParseError::new("aggregates are not allowed in join conditions", pivot, cursor)
                .err();
        }

        let Some(table_ref) = term.table_ref else {
            return ParseError::new(
                "join conditions require table-qualified columns",
                pivot,
                cursor,
            )
            .err();
        };

        Ok((table_ref, term.column))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{ComparisonOp, JoinType};
    use crate::parser::clauses::JoinParser;
    use crate::parser::{Phase, QueryCursor};

    fn at_joins(text: &str) -> QueryCursor {
        let mut cursor = QueryCursor::new(text);
        cursor.phase = Phase::From;
        assert!(cursor.check_next_phase());
        cursor
    }

    #[test]
    pub fn test_inner_join() {
        let mut cursor = at_joins("INNER JOIN departments d ON e.dept_id = d.id");

        let result = JoinParser::parse(&mut cursor).expect("Failed to parse join");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].join_type, JoinType::Inner);
        assert_eq!(result[0].table, "departments");
        assert_eq!(result[0].alias, Some("d".to_string()));
        assert_eq!(result[0].conditions.len(), 1);
        assert_eq!(result[0].conditions[0].left_ref, "e");
        assert_eq!(result[0].conditions[0].left_column, "dept_id");
        assert_eq!(result[0].conditions[0].operator, ComparisonOp::Eq);
        assert_eq!(result[0].conditions[0].right_ref, "d");
        assert_eq!(result[0].conditions[0].right_column, "id");
    }

    #[test]
    pub fn test_bare_join_reads_as_inner() {
        let mut cursor = at_joins("JOIN departments AS d ON e.dept_id = d.id");

        let result = JoinParser::parse(&mut cursor).expect("Failed to parse join");

        assert_eq!(result[0].join_type, JoinType::Inner);
        assert_eq!(result[0].alias, Some("d".to_string()));
    }

    #[test]
    pub fn test_join_with_two_conditions() {
        let mut cursor =
            at_joins("LEFT JOIN s ON a.x = s.x AND a.y = s.y WHERE a.active = 1");

        let result = JoinParser::parse(&mut cursor).expect("Failed to parse join");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].conditions.len(), 2);
        assert_eq!(cursor.phase, Phase::Where);
    }

    #[test]
    pub fn test_all_join_types() {
        let text = r#"
            INNER JOIN a ON t.id = a.id
            LEFT OUTER JOIN b ON t.id = b.id
            RIGHT JOIN c ON t.id = c.id
            FULL OUTER JOIN d ON t.id = d.id
        "#;
        let mut cursor = at_joins(text.trim());

        let result = JoinParser::parse(&mut cursor).expect("Failed to parse join");

        assert_eq!(result.len(), 4);
        let expected = [JoinType::Inner, JoinType::Left, JoinType::Right, JoinType::FullOuter];
        for (join, expected_type) in result.iter().zip(expected) {
            assert_eq!(join.join_type, expected_type);
        }
    }

    #[test]
    pub fn test_join_without_on_is_error() {
        let mut cursor = at_joins("INNER JOIN departments WHERE x = 1");

        let result = JoinParser::parse(&mut cursor);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "expected ON after join table"),
        };
    }

    #[test]
    pub fn test_join_with_unqualified_column_is_error() {
        let mut cursor = at_joins("INNER JOIN d ON dept_id = d.id");

        let result = JoinParser::parse(&mut cursor);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "join conditions require table-qualified columns"),
        };
    }
}
