use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar value as it appears on the right side of a condition. `Display`
/// renders the SQL form, so generation is a plain `to_string`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Null,
    Param(String),
    Column { table_ref: Option<String>, name: String },
}

impl Literal {
    /// Rewrites the table reference of a `Column` value; other variants are
    /// returned unchanged.
    pub fn with_renamed_table_ref(&self, old: &str, new: &str) -> Literal {
        match self {
            Literal::Column { table_ref: Some(table), name }
                if table.eq_ignore_ascii_case(old) =>
            {
                Literal::Column { table_ref: Some(new.to_string()), name: name.clone() }
            }
            other => other.clone(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Float(value) => write!(f, "{}", value),
            Literal::Str(value) => write!(f, "'{}'", value.replace('\'', "''")),
            Literal::Bool(true) => write!(f, "TRUE"),
            Literal::Bool(false) => write!(f, "FALSE"),
            Literal::Null => write!(f, "NULL"),
            Literal::Param(name) => write!(f, ":{}", name),
            Literal::Column { table_ref: Some(table), name } => write!(f, "{}.{}", table, name),
            Literal::Column { table_ref: None, name } => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Literal;

    #[test]
    pub fn test_literal_display() {
        assert_eq!(Literal::Int(42).to_string(), "42");
        assert_eq!(Literal::Float(1.5).to_string(), "1.5");
        assert_eq!(Literal::Bool(true).to_string(), "TRUE");
        assert_eq!(Literal::Null.to_string(), "NULL");
        assert_eq!(Literal::Param("id".to_string()).to_string(), ":id");
    }

    #[test]
    pub fn test_literal_string_escapes_quotes() {
        let literal = Literal::Str("it's".to_string());

        assert_eq!(literal.to_string(), "'it''s'");
    }

    #[test]
    pub fn test_literal_column_display() {
        let qualified = Literal::Column { table_ref: Some("e".to_string()), name: "id".to_string() };
        let bare = Literal::Column { table_ref: None, name: "id".to_string() };

        assert_eq!(qualified.to_string(), "e.id");
        assert_eq!(bare.to_string(), "id");
    }

    #[test]
    pub fn test_literal_rename_table_ref() {
        let literal = Literal::Column { table_ref: Some("old".to_string()), name: "id".to_string() };

        let renamed = literal.with_renamed_table_ref("OLD", "fresh");

        assert_eq!(
            renamed,
            Literal::Column { table_ref: Some("fresh".to_string()), name: "id".to_string() }
        );
        assert_eq!(Literal::Int(1).with_renamed_table_ref("old", "fresh"), Literal::Int(1));
    }
}
