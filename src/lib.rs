pub mod scanner;
pub use scanner::{LiveText, ScanState};

pub mod params;
pub use params::extract_parameters;

pub mod paging;
pub use paging::{
    classify_paging, has_limit_clause, has_offset_clause, has_order_by_clause,
    PagingCompatibility,
};

pub mod model;
pub use model::QueryStructure;

pub mod parser;
pub use parser::{ParseError, StructuralParser};

pub mod generator;
pub use generator::{BuildOptions, BuildResult, Dialect, QuoteStyle, SqlBuilder};
