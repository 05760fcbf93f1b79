use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Code,
    SingleQuote,
    DoubleQuote,
    LineComment,
    BlockComment,
}

impl ScanState {
    pub fn is_code(&self) -> bool {
        matches!(self, ScanState::Code)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, ScanState::LineComment | ScanState::BlockComment)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, ScanState::SingleQuote | ScanState::DoubleQuote)
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanState::Code => write!(f, "code"),
            ScanState::SingleQuote => write!(f, "single-quote"),
            ScanState::DoubleQuote => write!(f, "double-quote"),
            ScanState::LineComment => write!(f, "line-comment"),
            ScanState::BlockComment => write!(f, "block-comment"),
        }
    }
}
