use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::scanner::LiveText;

static PARAM_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r":(\w+)").expect("parameter pattern"));

/// Collects the distinct `:name` placeholders of a statement, in first-seen
/// order. Placeholders inside string literals or comments are never reported.
pub fn extract_parameters(sql: &str) -> Vec<String> {
    let live = LiveText::new(sql);
    let mut names: IndexSet<String> = IndexSet::new();

    for (_, span) in live.live_spans() {
        for captures in PARAM_PATTERN.captures_iter(&span) {
            names.insert(captures[1].to_string());
        }
    }

    names.into_iter().collect()
}
