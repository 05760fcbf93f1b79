use crate::model::GroupByColumn;
use crate::parser::clauses::ColumnTerm;
use crate::parser::{ParseError, QueryCursor};

pub struct GroupByParser;

impl GroupByParser {
    /// Parses `GROUP BY [t.]col [, ...]`, consuming the GROUP BY keyword.
    pub fn parse(cursor: &mut QueryCursor) -> Result<Vec<GroupByColumn>, ParseError> {
        let Some(len) = cursor.comparers.group_by.matched_len(cursor) else {
            return ParseError::new("expected GROUP BY", cursor.position, cursor).err();
        };
        cursor.jump(len);

        let mut columns: Vec<GroupByColumn> = vec![];

        loop {
            let pivot = cursor.position;
            let term = ColumnTerm::parse(cursor, false)?;

            if term.aggregate.is_some() {
                return ParseError::new("aggregates are not allowed in GROUP BY", pivot, cursor)
                    .err();
            }

            columns.push(GroupByColumn { table_ref: term.table_ref, column: term.column });

            cursor.next_non_whitespace();

            if cursor.current() == ',' {
                cursor.next();
                if cursor.check_next_phase() {
                    return ParseError::new("expected column after ','", cursor.position, cursor)
                        .err();
                }
                continue;
            }

            if cursor.check_next_phase() {
                return Ok(columns);
            }

            return ParseError::new("expected ',' or end of GROUP BY", cursor.position, cursor)
                .err();
        }
    }
}
