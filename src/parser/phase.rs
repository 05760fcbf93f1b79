/// Clause-ordered parsing phases. `check_next_phase` only ever moves forward
/// through this ordering (Joins may repeat for consecutive JOIN clauses).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    #[default]
    SelectList = 0,
    From = 1,
    Joins = 2,
    Where = 3,
    GroupBy = 4,
    Having = 5,
    OrderBy = 6,
    LimitOffset = 7,
    Eof = 8,
}
