pub mod dialect;
pub use dialect::*;

pub mod validate;
pub use validate::*;

pub mod builder;
pub use builder::*;
