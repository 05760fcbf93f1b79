use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ComparisonOp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    FullOuter,
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER JOIN"),
            JoinType::Left => write!(f, "LEFT JOIN"),
            JoinType::Right => write!(f, "RIGHT JOIN"),
            JoinType::FullOuter => write!(f, "FULL OUTER JOIN"),
        }
    }
}

/// One `left = right` pairing of an ON clause; both sides are table-qualified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinCondition {
    pub left_ref: String,
    pub left_column: String,
    pub operator: ComparisonOp,
    pub right_ref: String,
    pub right_column: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: String,
    pub alias: Option<String>,
    pub conditions: Vec<JoinCondition>,
}

#[cfg(test)]
mod tests {
    use crate::model::JoinType;

    #[test]
    pub fn test_join_type_display() {
        assert_eq!(JoinType::Inner.to_string(), "INNER JOIN");
        assert_eq!(JoinType::Left.to_string(), "LEFT JOIN");
        assert_eq!(JoinType::Right.to_string(), "RIGHT JOIN");
        assert_eq!(JoinType::FullOuter.to_string(), "FULL OUTER JOIN");
    }
}
