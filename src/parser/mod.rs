pub mod phase;
pub use phase::*;

pub mod query_cursor;
pub use query_cursor::*;

pub mod word_comparer;
pub use word_comparer::*;

pub mod query_comparers;
pub use query_comparers::*;

pub mod parse_error;
pub use parse_error::*;

pub mod clauses;

pub mod structural_parser;
pub use structural_parser::*;
