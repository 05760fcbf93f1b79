use crate::model::Literal;
use crate::parser::clauses::TextCollector;
use crate::parser::{ParseError, QueryCursor, WordComparer};

pub struct LiteralParser;

impl LiteralParser {
    /// Parses the value side of a condition: a number, quoted string,
    /// TRUE/FALSE/NULL, a `:name` placeholder, or a column reference.
    pub fn parse(cursor: &mut QueryCursor) -> Result<Literal, ParseError> {
        cursor.next_non_whitespace();
        let pivot = cursor.position;

        if cursor.eof() {
            return ParseError::new("expected a value", pivot, cursor).err();
        }

        let current = cursor.current();

        if current == '\'' || current == '"' {
            return Self::parse_string(cursor, current);
        }

        if current == ':' && WordComparer::is_word_char(cursor.peek(1)) {
            cursor.next();
            let name = TextCollector::collect(cursor)?;
            return Ok(Literal::Param(name));
        }

        if current.is_ascii_digit() || (current == '-' && cursor.peek(1).is_ascii_digit()) {
            return Self::parse_number(cursor);
        }

        if let Some(len) = cursor.comparers.b_true.matched_len(cursor) {
            cursor.jump(len);
            return Ok(Literal::Bool(true));
        }

        if let Some(len) = cursor.comparers.b_false.matched_len(cursor) {
            cursor.jump(len);
            return Ok(Literal::Bool(false));
        }

        if let Some(len) = cursor.comparers.null.matched_len(cursor) {
            cursor.jump(len);
            return Ok(Literal::Null);
        }

        let name = TextCollector::collect(cursor)
            .map_err(|_| ParseError::new("expected a value", pivot, cursor))?;

        if cursor.current() == '.' {
            cursor.next();
            let column = TextCollector::collect(cursor)?;
            return Ok(Literal::Column { table_ref: Some(name), name: column });
        }

        Ok(Literal::Column { table_ref: None, name })
    }

    fn parse_string(cursor: &mut QueryCursor, delimiter: char) -> Result<Literal, ParseError> {
        let pivot = cursor.position;
        cursor.next();

        let mut value = String::new();
        while !cursor.eof() {
            let current = cursor.current();
            if current == delimiter {
                if cursor.peek(1) == delimiter {
                    value.push(delimiter);
                    cursor.jump(2);
                    continue;
                }
                cursor.next();
                return Ok(Literal::Str(value));
            }
            value.push(current);
            cursor.next();
        }

        ParseError::new("unterminated string literal", pivot, cursor).err()
    }

    fn parse_number(cursor: &mut QueryCursor) -> Result<Literal, ParseError> {
        let pivot = cursor.position;

        if cursor.current() == '-' {
            cursor.next();
        }
        while cursor.current().is_ascii_digit() {
            cursor.next();
        }

        let mut is_float = false;
        if cursor.current() == '.' && cursor.peek(1).is_ascii_digit() {
            is_float = true;
            cursor.next();
            while cursor.current().is_ascii_digit() {
                cursor.next();
            }
        }

        let text = cursor.text_from_pivot(pivot);
        if is_float {
            text.parse::<f64>()
                .map(Literal::Float)
                .map_err(|_| ParseError::new("invalid number", pivot, cursor))
        } else {
            text.parse::<i64>()
                .map(Literal::Int)
                .map_err(|_| ParseError::new("invalid number", pivot, cursor))
        }
    }
}
