use crate::model::ComparisonOp;
use crate::parser::QueryCursor;

pub struct ComparisonScan;

impl ComparisonScan {
    /// Matches a comparison operator at the cursor, longest form first, and
    /// consumes it. Works with or without surrounding whitespace ("a=1").
    pub fn check(cursor: &mut QueryCursor) -> Option<ComparisonOp> {
        cursor.next_non_whitespace();

        if !cursor.is_live(cursor.position) {
            return None;
        }

        let (op, len) = match (cursor.current(), cursor.peek(1)) {
            ('<', '=') => (ComparisonOp::LtEq, 2),
            ('<', '>') => (ComparisonOp::NotEq, 2),
            ('>', '=') => (ComparisonOp::GtEq, 2),
            ('!', '=') => (ComparisonOp::NotEq, 2),
            ('=', _) => (ComparisonOp::Eq, 1),
            ('<', _) => (ComparisonOp::Lt, 1),
            ('>', _) => (ComparisonOp::Gt, 1),
            _ => return None,
        };

        cursor.jump(len);
        Some(op)
    }
}
