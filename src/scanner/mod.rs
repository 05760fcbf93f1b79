pub mod scan_state;
pub use scan_state::*;

pub mod live_text;
pub use live_text::*;
