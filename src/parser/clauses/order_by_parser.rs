use crate::model::{OrderByColumn, SortDirection};
use crate::parser::clauses::ColumnTerm;
use crate::parser::{ParseError, QueryCursor};

pub struct OrderByParser;

impl OrderByParser {
    /// Parses `ORDER BY [AGG(] [t.]col [)] [ASC|DESC] [, ...]`, consuming the
    /// ORDER BY keyword. Direction defaults to ASC.
    pub fn parse(cursor: &mut QueryCursor) -> Result<Vec<OrderByColumn>, ParseError> {
        let Some(len) = cursor.comparers.order_by.matched_len(cursor) else {
            return ParseError::new("expected ORDER BY", cursor.position, cursor).err();
        };
        cursor.jump(len);

        let mut columns: Vec<OrderByColumn> = vec![];

        loop {
            let term = ColumnTerm::parse(cursor, false)?;
            let mut direction = SortDirection::Asc;

            cursor.next_non_whitespace();

            if let Some(len) = cursor.comparers.asc.matched_len(cursor) {
                cursor.jump(len);
                cursor.next_non_whitespace();
            } else if let Some(len) = cursor.comparers.desc.matched_len(cursor) {
                cursor.jump(len);
                direction = SortDirection::Desc;
                cursor.next_non_whitespace();
            }

            columns.push(OrderByColumn {
                table_ref: term.table_ref,
                aggregate: term.aggregate,
                column: term.column,
                direction,
            });

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

            return ParseError::new("expected ',' or end of ORDER BY", cursor.position, cursor)
                .err();
        }
    }
}
