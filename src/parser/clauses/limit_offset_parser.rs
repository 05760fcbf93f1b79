use crate::model::Literal;
use crate::parser::clauses::LiteralParser;
use crate::parser::{ParseError, QueryCursor};

pub struct LimitOffsetParser;

impl LimitOffsetParser {
    /// Parses trailing `LIMIT n` / `OFFSET n` in either order, each at most
    /// once. Negative integers parse fine; they become validation errors at
    /// generation time.
    pub fn parse(cursor: &mut QueryCursor) -> Result<(Option<i64>, Option<i64>), ParseError> {
        let mut limit = None;
        let mut offset = None;

        while !cursor.check_next_phase() {
            if let Some(len) = cursor.comparers.limit.matched_len(cursor) {
                if limit.is_some() {
                    return ParseError::new("duplicate LIMIT", cursor.position, cursor).err();
                }
                cursor.jump(len);
                limit = Some(Self::parse_int(cursor, "LIMIT")?);
            } else if let Some(len) = cursor.comparers.offset.matched_len(cursor) {
                if offset.is_some() {
                    return ParseError::new("duplicate OFFSET", cursor.position, cursor).err();
                }
                cursor.jump(len);
                offset = Some(Self::parse_int(cursor, "OFFSET")?);
            } else {
                return ParseError::new(
                    "unexpected token after LIMIT/OFFSET",
                    cursor.position,
                    cursor,
                )
                .err();
            }
        }

        Ok((limit, offset))
    }

    fn parse_int(cursor: &mut QueryCursor, clause: &str) -> Result<i64, ParseError> {
        cursor.next_non_whitespace();
        let pivot = cursor.position;

        match LiteralParser::parse(cursor)? {
            Literal::Int(value) => Ok(value),
            _ => ParseError::new(&format!("{} requires an integer", clause), pivot, cursor).err(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::clauses::LimitOffsetParser;
    use crate::parser::{Phase, QueryCursor};

    fn at_limit(text: &str) -> QueryCursor {
        let mut cursor = QueryCursor::new(text);
        cursor.phase = Phase::OrderBy;
        assert!(cursor.check_next_phase());
        cursor
    }

    #[test]
    pub fn test_limit_only() {
        let mut cursor = at_limit("LIMIT 10");

        let (limit, offset) = LimitOffsetParser::parse(&mut cursor).expect("Failed to parse");

        assert_eq!(limit, Some(10));
        assert_eq!(offset, None);
    }

    #[test]
    pub fn test_offset_only() {
        let mut cursor = at_limit("OFFSET 40");

        let (limit, offset) = LimitOffsetParser::parse(&mut cursor).expect("Failed to parse");

        assert_eq!(limit, None);
        assert_eq!(offset, Some(40));
    }

    #[test]
    pub fn test_offset_then_limit() {
        let mut cursor = at_limit("OFFSET 60 LIMIT 20");

        let (limit, offset) = LimitOffsetParser::parse(&mut cursor).expect("Failed to parse");

        assert_eq!(limit, Some(20));
        assert_eq!(offset, Some(60));
    }

    #[test]
    pub fn test_limit_non_integer_is_error() {
        let mut cursor = at_limit("LIMIT soon");

        let result = LimitOffsetParser::parse(&mut cursor);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "LIMIT requires an integer"),
        };
    }

    #[test]
    pub fn test_duplicate_limit_is_error() {
        let mut cursor = at_limit("LIMIT 10 LIMIT 20");

        let result = LimitOffsetParser::parse(&mut cursor);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "duplicate LIMIT"),
        };
    }

    #[test]
    pub fn test_trailing_garbage_is_error() {
        let mut cursor = at_limit("LIMIT 10 garbage");

        let result = LimitOffsetParser::parse(&mut cursor);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "unexpected token after LIMIT/OFFSET"),
        };
    }
}
