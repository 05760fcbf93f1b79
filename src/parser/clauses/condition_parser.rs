use crate::model::{ComparisonOp, Condition, Literal, LogicalOp, Operand};
use crate::parser::clauses::{ColumnTerm, ComparisonScan, LiteralParser};
use crate::parser::{ParseError, Phase, QueryCursor};

/// Shared parser for WHERE and HAVING. Both clauses are a flat chain of
/// conditions split on top-level AND/OR, with the connective preceding each
/// condition recorded on it. BETWEEN consumes its own AND before the split
/// ever sees it.
pub struct ConditionParser;

impl ConditionParser {
    /// Parses a full condition chain, consuming the leading WHERE or HAVING
    /// keyword selected by `phase`.
    pub fn parse(cursor: &mut QueryCursor, phase: Phase) -> Result<Vec<Condition>, ParseError> {
        let matched = match phase {
            Phase::Where => cursor.comparers.r#where.matched_len(cursor),
            Phase::Having => cursor.comparers.having.matched_len(cursor),
            _ => None,
        };
        let Some(len) = matched else {
            return ParseError::new("expected WHERE or HAVING", cursor.position, cursor).err();
        };
        cursor.jump(len);

        let mut conditions: Vec<Condition> = vec![];
        let mut logical_op: Option<LogicalOp> = None;

        loop {
            let mut condition = Self::parse_single(cursor)?;
            condition.logical_op = logical_op;
            conditions.push(condition);

            cursor.next_non_whitespace();

            if let Some(len) = cursor.comparers.and.matched_len(cursor) {
                cursor.jump(len);
                logical_op = Some(LogicalOp::And);
                continue;
            }

            if let Some(len) = cursor.comparers.or.matched_len(cursor) {
                cursor.jump(len);
                logical_op = Some(LogicalOp::Or);
                continue;
            }

            if cursor.check_next_phase() {
                return Ok(conditions);
            }

            return ParseError::new("expected AND, OR, or end of clause", cursor.position, cursor)
                .err();
        }
    }

    /// Parses one condition: optional leading NOT (with optional
    /// parentheses), a column term with optional aggregate wrapper, then an
    /// operator-specific right side.
    pub fn parse_single(cursor: &mut QueryCursor) -> Result<Condition, ParseError> {
        cursor.next_non_whitespace();
        let pivot = cursor.position;

        let mut negated = false;
        let mut wrapped = false;

        if let Some(len) = cursor.comparers.not.matched_len(cursor) {
            cursor.jump(len);
            negated = true;
            cursor.next_non_whitespace();

            if cursor.current() == '(' {
                cursor.next();
                cursor.paren_depth += 1;
                wrapped = true;
            }
        }

        let term = ColumnTerm::parse(cursor, false)?;
        let mut condition = Condition {
            table_ref: term.table_ref,
            aggregate: term.aggregate,
            column: term.column,
            operator: ComparisonOp::Eq,
            operand: Operand::None,
            logical_op: None,
            negated,
        };

        cursor.next_non_whitespace();

        if let Some(len) = cursor.comparers.not_between.matched_len(cursor) {
            cursor.jump(len);
            condition.negated = true;
            Self::parse_between(cursor, &mut condition)?;
        } else if let Some(len) = cursor.comparers.between.matched_len(cursor) {
            cursor.jump(len);
            Self::parse_between(cursor, &mut condition)?;
        } else if let Some(len) = cursor.comparers.is_not_null.matched_len(cursor) {
            cursor.jump(len);
            condition.operator = ComparisonOp::IsNotNull;
        } else if let Some(len) = cursor.comparers.is_null.matched_len(cursor) {
            cursor.jump(len);
            condition.operator = ComparisonOp::IsNull;
        } else if let Some(len) = cursor.comparers.not_in.matched_len(cursor) {
            cursor.jump(len);
            condition.negated = true;
            condition.operator = ComparisonOp::In;
            condition.operand = Operand::List(Self::parse_list(cursor)?);
        } else if let Some(len) = cursor.comparers.r#in.matched_len(cursor) {
            cursor.jump(len);
            condition.operator = ComparisonOp::In;
            condition.operand = Operand::List(Self::parse_list(cursor)?);
        } else if let Some(len) = cursor.comparers.not_like.matched_len(cursor) {
            cursor.jump(len);
            condition.negated = true;
            condition.operator = ComparisonOp::Like;
            condition.operand = Operand::Value(LiteralParser::parse(cursor)?);
        } else if let Some(len) = cursor.comparers.like.matched_len(cursor) {
            cursor.jump(len);
            condition.operator = ComparisonOp::Like;
            condition.operand = Operand::Value(LiteralParser::parse(cursor)?);
        } else if let Some(operator) = ComparisonScan::check(cursor) {
            condition.operator = operator;
            condition.operand = Operand::Value(LiteralParser::parse(cursor)?);
        } else {
            return ParseError::new("unsupported condition operator", pivot, cursor).err();
        }

        if wrapped {
            cursor.next_non_whitespace();
            if cursor.current() != ')' {
                return ParseError::new("expected ')' after negated condition", pivot, cursor)
                    .err();
            }
            cursor.next();
            cursor.paren_depth -= 1;
        }

        Ok(condition)
    }

    fn parse_between(
        cursor: &mut QueryCursor,
        condition: &mut Condition,
    ) -> Result<(), ParseError> {
        condition.operator = ComparisonOp::Between;

        let min = LiteralParser::parse(cursor)?;

        cursor.next_non_whitespace();
        let Some(len) = cursor.comparers.and.matched_len(cursor) else {
            return ParseError::new(
                "BETWEEN requires AND between its bounds",
                cursor.position,
                cursor,
            )
            .err();
        };
        cursor.jump(len);

        let max = LiteralParser::parse(cursor)?;
        condition.operand = Operand::Range { min, max };

        Ok(())
    }

    fn parse_list(cursor: &mut QueryCursor) -> Result<Vec<Literal>, ParseError> {
        cursor.next_non_whitespace();
        if cursor.current() != '(' {
            return ParseError::new("expected '(' after IN", cursor.position, cursor).err();
        }
        cursor.next();
        cursor.paren_depth += 1;

        let mut values = vec![];
        loop {
            values.push(LiteralParser::parse(cursor)?);

            cursor.next_non_whitespace();
            match cursor.current() {
                ',' => cursor.next(),
                ')' => {
                    cursor.next();
                    cursor.paren_depth -= 1;
                    return Ok(values);
                }
                _ => {
                    return ParseError::new("expected ',' or ')' in IN list", cursor.position, cursor)
                        .err()
                }
            }
        }
    }
}
