use crate::parser::{Phase, QueryComparers};
use crate::scanner::{LiveText, ScanState};

/// Character cursor over a SQL statement. Carries the scanner classification
/// so comment text reads as filler and keywords only match on live code, plus
/// a parenthesis-depth counter so clause keywords only bind at depth 0.
#[derive(Debug)]
pub struct QueryCursor {
    pub position: usize,
    pub length: usize,
    pub phase: Phase,
    pub paren_depth: usize,
    pub comparers: QueryComparers,
    text_v: Vec<char>,
    states: Vec<ScanState>,
}

impl QueryCursor {
    pub fn new(query: &str) -> Self {
        let (text_v, states) = LiveText::new(query).into_parts();
        Self {
            position: 0,
            length: text_v.len(),
            phase: Phase::default(),
            paren_depth: 0,
            comparers: QueryComparers::new(),
            text_v,
            states,
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        if self.position < self.length {
            return self.text_v[self.position];
        }

        '\0'
    }

    pub fn peek(&self, ahead: usize) -> char {
        self.text_v.get(self.position + ahead).copied().unwrap_or('\0')
    }

    pub fn is_live(&self, position: usize) -> bool {
        self.states
            .get(position)
            .map(|state| state.is_code())
            .unwrap_or(true)
    }

    fn in_comment(&self) -> bool {
        self.states
            .get(self.position)
            .map(|state| state.is_comment())
            .unwrap_or(false)
    }

    pub fn next(&mut self) {
        self.position += 1;
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position = (self.position + ahead).min(self.length);
    }

    /// Advances past whitespace and comment text.
    pub fn next_non_whitespace(&mut self) {
        while !self.eof() && (self.current().is_whitespace() || self.in_comment()) {
            self.next();
        }
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        let start = start.min(end);
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    /// Detects the clause keyword at the cursor and advances the phase when
    /// one is found. Keywords only bind at parenthesis depth 0; transitions
    /// only ever move forward (Joins may repeat).
    pub fn check_next_phase(&mut self) -> bool {
        self.next_non_whitespace();

        if self.eof() {
            self.phase = Phase::Eof;
            return true;
        }

        if self.paren_depth > 0 {
            return false;
        }

        if self.phase < Phase::LimitOffset
            && (self.comparers.limit.compare(self) || self.comparers.offset.compare(self))
        {
            self.phase = Phase::LimitOffset;
            return true;
        }

        if self.phase < Phase::OrderBy && self.comparers.order_by.compare(self) {
            self.phase = Phase::OrderBy;
            return true;
        }

        if self.phase < Phase::Having && self.comparers.having.compare(self) {
            self.phase = Phase::Having;
            return true;
        }

        if self.phase < Phase::GroupBy && self.comparers.group_by.compare(self) {
            self.phase = Phase::GroupBy;
            return true;
        }

        if self.phase < Phase::Where && self.comparers.r#where.compare(self) {
            self.phase = Phase::Where;
            return true;
        }

        if self.phase <= Phase::Joins && self.at_join_keyword() {
            self.phase = Phase::Joins;
            return true;
        }

        if self.phase < Phase::From && self.comparers.from.compare(self) {
            self.phase = Phase::From;
            return true;
        }

        false
    }

    pub fn at_join_keyword(&self) -> bool {
        self.comparers.inner_join.compare(self)
            || self.comparers.left_outer_join.compare(self)
            || self.comparers.left_join.compare(self)
            || self.comparers.right_outer_join.compare(self)
            || self.comparers.right_join.compare(self)
            || self.comparers.full_outer_join.compare(self)
            || self.comparers.full_join.compare(self)
            || self.comparers.join.compare(self)
    }
}
