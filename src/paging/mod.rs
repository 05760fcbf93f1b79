use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::scanner::LiveText;

static ORDER_BY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\border\s+by\b").expect("order by pattern"));
static LIMIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\blimit\s+\d+").expect("limit pattern"));
static OFFSET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\boffset\s+\d+").expect("offset pattern"));

/// Leading keywords of statements that produce a result set.
const QUERY_KEYWORDS: [&str; 6] = ["select", "with", "show", "describe", "desc", "explain"];

/// Whether externally-applied pagination can be layered onto a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PagingCompatibility {
    Compatible,
    NotSelect,
    HasLimitOffset,
    NoOrderBy,
}

impl fmt::Display for PagingCompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagingCompatibility::Compatible => write!(f, "COMPATIBLE"),
            PagingCompatibility::NotSelect => write!(f, "NOT_SELECT"),
            PagingCompatibility::HasLimitOffset => write!(f, "HAS_LIMIT_OFFSET"),
            PagingCompatibility::NoOrderBy => write!(f, "NO_ORDER_BY"),
        }
    }
}

/// Classifies a statement for pagination, looking at live code only.
/// A statement that already carries LIMIT/OFFSET paginates itself; one
/// without ORDER BY cannot yield stable pages.
pub fn classify_paging(sql: &str) -> PagingCompatibility {
    let live = LiveText::new(sql).live_only();

    let leading = live
        .split_whitespace()
        .next()
        .map(|word| word.to_lowercase())
        .unwrap_or_default();
    if !QUERY_KEYWORDS.contains(&leading.as_str()) {
        return PagingCompatibility::NotSelect;
    }

    if LIMIT_PATTERN.is_match(&live) || OFFSET_PATTERN.is_match(&live) {
        return PagingCompatibility::HasLimitOffset;
    }

    if !ORDER_BY_PATTERN.is_match(&live) {
        return PagingCompatibility::NoOrderBy;
    }

    PagingCompatibility::Compatible
}

pub fn has_order_by_clause(sql: &str) -> bool {
    ORDER_BY_PATTERN.is_match(&LiveText::new(sql).live_only())
}

pub fn has_limit_clause(sql: &str) -> bool {
    LIMIT_PATTERN.is_match(&LiveText::new(sql).live_only())
}

pub fn has_offset_clause(sql: &str) -> bool {
    OFFSET_PATTERN.is_match(&LiveText::new(sql).live_only())
}
