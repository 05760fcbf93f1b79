use crate::model::FromTable;
use crate::parser::clauses::TextCollector;
use crate::parser::{ParseError, QueryCursor};

pub struct FromParser;

impl FromParser {
    /// Parses `FROM table [AS] [alias] [, ...]`, consuming the FROM keyword.
    /// The first table is the primary one; every name and alias it declares
    /// joins the reference namespace checked at generation time.
    pub fn parse(cursor: &mut QueryCursor) -> Result<Vec<FromTable>, ParseError> {
        let Some(len) = cursor.comparers.from.matched_len(cursor) else {
            return ParseError::new("expected FROM", cursor.position, cursor).err();
        };
        cursor.jump(len);

        let mut tables: Vec<FromTable> = vec![];

        loop {
            cursor.next_non_whitespace();
            let name = TextCollector::collect(cursor)?;
            let mut table = FromTable { name, alias: None };

            let mut advanced = cursor.check_next_phase();

            if !advanced && cursor.current() != ',' {
                if let Some(len) = cursor.comparers.alias.matched_len(cursor) {
                    cursor.jump(len);
                    cursor.next_non_whitespace();
                }
                table.alias = Some(TextCollector::collect(cursor)?);
                advanced = cursor.check_next_phase();
            }

            tables.push(table);

            if !advanced && cursor.current() == ',' {
                cursor.next();
                continue;
            }

            if advanced {
                return Ok(tables);
            }

            return ParseError::new("expected ',' or end of FROM clause", cursor.position, cursor)
                .err();
        }
    }
}
