use crate::model::SelectColumn;
use crate::parser::clauses::{ColumnTerm, TextCollector};
use crate::parser::{ParseError, QueryCursor, WordComparer};

pub struct SelectListParser;

impl SelectListParser {
    /// Parses the SELECT item list. The SELECT keyword (and an optional
    /// DISTINCT) is consumed by the caller; parsing ends when the cursor
    /// reaches the next clause.
    pub fn parse(cursor: &mut QueryCursor) -> Result<Vec<SelectColumn>, ParseError> {
        let mut columns: Vec<SelectColumn> = vec![];

        loop {
            if cursor.check_next_phase() {
                return ParseError::new("expected select item", cursor.position, cursor).err();
            }

            let term = ColumnTerm::parse(cursor, true)?;
            let mut column = SelectColumn {
                table_ref: term.table_ref,
                column: term.column,
                alias: None,
                aggregate: term.aggregate,
            };

            cursor.next_non_whitespace();

            if let Some(len) = cursor.comparers.alias.matched_len(cursor) {
                cursor.jump(len);
                cursor.next_non_whitespace();
                column.alias = Some(TextCollector::collect(cursor)?);
                cursor.next_non_whitespace();
            } else if WordComparer::is_word_char(cursor.current())
                && !cursor.comparers.from.compare(cursor)
            {
                column.alias = Some(TextCollector::collect(cursor)?);
                cursor.next_non_whitespace();
            }

            columns.push(column);

            if cursor.current() == ',' {
                cursor.next();
                continue;
            }

            if cursor.check_next_phase() {
                return Ok(columns);
            }

            return ParseError::new("expected ',' or FROM", cursor.position, cursor).err();
        }
    }
}
