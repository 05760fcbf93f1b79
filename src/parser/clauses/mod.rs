pub mod text_collector;
pub use text_collector::*;

pub mod literal_parser;
pub use literal_parser::*;

pub mod column_term;
pub use column_term::*;

pub mod comparison;
pub use comparison::*;

pub mod select_parser;
pub use select_parser::*;

pub mod from_parser;
pub use from_parser::*;

pub mod join_parser;
pub use join_parser::*;

pub mod condition_parser;
pub use condition_parser::*;

pub mod group_by_parser;
pub use group_by_parser::*;

pub mod order_by_parser;
pub use order_by_parser::*;

pub mod limit_offset_parser;
pub use limit_offset_parser::*;
