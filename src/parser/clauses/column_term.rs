use crate::model::AggregateFunction;
use crate::parser::clauses::TextCollector;
use crate::parser::{ParseError, QueryCursor};

/// A `[AGG(] [table.]column | * [)]` term as it appears in the SELECT list,
/// conditions, GROUP BY and ORDER BY. Only the five standard aggregates are
/// recognized; any other function name fails the parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTerm {
    pub table_ref: Option<String>,
    pub aggregate: Option<AggregateFunction>,
    pub column: String,
}

impl ColumnTerm {
    pub fn parse(cursor: &mut QueryCursor, allow_wildcard: bool) -> Result<Self, ParseError> {
        cursor.next_non_whitespace();
        let pivot = cursor.position;

        if cursor.current() == '*' {
            if !allow_wildcard {
                return ParseError::new("wildcard is not allowed here", pivot, cursor).err();
            }
            cursor.next();
            return Ok(Self { table_ref: None, aggregate: None, column: "*".to_string() });
        }

        if cursor.current() == '(' {
            return ParseError::new("unsupported parenthesized expression", pivot, cursor).err();
        }

        let word = TextCollector::collect(cursor)?;

        if cursor.current() == '(' {
            let Some(aggregate) = AggregateFunction::from_name(&word) else {
                return ParseError::new(&format!("unsupported function '{}'", word), pivot, cursor)
                    .err();
            };

            cursor.next();
            cursor.paren_depth += 1;
            cursor.next_non_whitespace();

            let (table_ref, column) = Self::parse_reference(cursor, true)?;

            cursor.next_non_whitespace();
            if cursor.current() != ')' {
                return ParseError::new("expected ')' after aggregate argument", pivot, cursor)
                    .err();
            }
            cursor.paren_depth -= 1;
            cursor.next();

            return Ok(Self { table_ref, aggregate: Some(aggregate), column });
        }

        let (table_ref, column) = Self::finish_reference(cursor, word, allow_wildcard)?;
        Ok(Self { table_ref, aggregate: None, column })
    }

    fn parse_reference(
        cursor: &mut QueryCursor,
        allow_wildcard: bool,
    ) -> Result<(Option<String>, String), ParseError> {
        if cursor.current() == '*' {
            if !allow_wildcard {
                return ParseError::new("wildcard is not allowed here", cursor.position, cursor)
                    .err();
            }
            cursor.next();
            return Ok((None, "*".to_string()));
        }

        let word = TextCollector::collect(cursor)?;
        Self::finish_reference(cursor, word, allow_wildcard)
    }

    fn finish_reference(
        cursor: &mut QueryCursor,
        word: String,
        allow_wildcard: bool,
    ) -> Result<(Option<String>, String), ParseError> {
        if cursor.current() != '.' {
            return Ok((None, word));
        }
        cursor.next();

        if cursor.current() == '*' {
            if !allow_wildcard {
                return ParseError::new("wildcard is not allowed here", cursor.position, cursor)
                    .err();
            }
            cursor.next();
            return Ok((Some(word), "*".to_string()));
        }

        let column = TextCollector::collect(cursor)?;
        Ok((Some(word), column))
    }
}
