use tracing::debug;

use crate::model::QueryStructure;
use crate::parser::clauses::{
    ConditionParser, FromParser, GroupByParser, JoinParser, LimitOffsetParser, OrderByParser,
    SelectListParser,
};
use crate::parser::{ParseError, Phase, QueryCursor};

/// Reverse engineer: turns a SELECT statement back into the editable query
/// model. Clause-oriented, not a full grammar; any shape outside the model
/// (subqueries, CASE, window functions) fails the whole parse so callers can
/// fall back to opaque text editing.
pub struct StructuralParser;

impl StructuralParser {
    pub fn parse(sql: &str) -> Result<QueryStructure, ParseError> {
        let mut cursor = QueryCursor::new(sql);
        let result = Self::parse_with(&mut cursor);

        match &result {
            Ok(query) => debug!(
                select_items = query.select_columns.len(),
                joins = query.joins.len(),
                where_conditions = query.where_conditions.len(),
                "parsed select statement"
            ),
            Err(error) => debug!(%error, "statement did not parse"),
        }

        result
    }

    fn parse_with(cursor: &mut QueryCursor) -> Result<QueryStructure, ParseError> {
        cursor.next_non_whitespace();

        let Some(len) = cursor.comparers.select.matched_len(cursor) else {
            return ParseError::new("statement must start with SELECT", cursor.position, cursor)
                .err();
        };
        cursor.jump(len);
        cursor.next_non_whitespace();

        let mut query = QueryStructure::default();

        if let Some(len) = cursor.comparers.distinct.matched_len(cursor) {
            cursor.jump(len);
            query.distinct = true;
        }

        while cursor.phase != Phase::Eof {
            match cursor.phase {
                Phase::SelectList => query.select_columns = SelectListParser::parse(cursor)?,
                Phase::From => query.from_tables = FromParser::parse(cursor)?,
                Phase::Joins => query.joins = JoinParser::parse(cursor)?,
                Phase::Where => {
                    query.where_conditions = ConditionParser::parse(cursor, Phase::Where)?
                }
                Phase::GroupBy => query.group_by_columns = GroupByParser::parse(cursor)?,
                Phase::Having => {
                    query.having_conditions = ConditionParser::parse(cursor, Phase::Having)?
                }
                Phase::OrderBy => query.order_by_columns = OrderByParser::parse(cursor)?,
                Phase::LimitOffset => {
                    let (limit, offset) = LimitOffsetParser::parse(cursor)?;
                    query.limit = limit;
                    query.offset = offset;
                }
                Phase::Eof => {}
            }
        }

        if query.from_tables.is_empty() {
            return ParseError::new("missing FROM clause", cursor.position, cursor).err();
        }

        Ok(query)
    }
}

impl TryFrom<&str> for QueryStructure {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        StructuralParser::parse(value)
    }
}
