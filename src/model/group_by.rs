use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupByColumn {
    pub table_ref: Option<String>,
    pub column: String,
}
