use serde::{Deserialize, Serialize};

use crate::model::{AggregateFunction, ComparisonOp, Literal, LogicalOp};

/// Which clause hosts a condition. The condition shape is identical for both;
/// only edits and UI grouping need the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionHost {
    Where,
    Having,
}

/// Operator-specific right side of a condition. The expected shape per
/// operator is a generation-time validation, not a type constraint, so a
/// half-edited condition coming from the builder UI stays representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    None,
    Value(Literal),
    List(Vec<Literal>),
    Range { min: Literal, max: Literal },
}

/// One condition of a WHERE or HAVING chain. `logical_op` is the connective
/// *preceding* the condition and is meaningful only past the first entry of
/// its clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub table_ref: Option<String>,
    pub aggregate: Option<AggregateFunction>,
    pub column: String,
    pub operator: ComparisonOp,
    pub operand: Operand,
    pub logical_op: Option<LogicalOp>,
    pub negated: bool,
}

impl Condition {
    pub fn compare(column: &str, operator: ComparisonOp, value: Literal) -> Self {
        Self {
            table_ref: None,
            aggregate: None,
            column: column.to_string(),
            operator,
            operand: Operand::Value(value),
            logical_op: None,
            negated: false,
        }
    }
}
