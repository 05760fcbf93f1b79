use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromTable {
    pub name: String,
    pub alias: Option<String>,
}
