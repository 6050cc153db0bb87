//! The script registry list (`scripts.lst`).
//!
//! One script descriptor per line; the line position is the script number
//! (1-based). The name is the text before the first `.`, and a line may
//! carry a `local_vars=<N>` attribute.

use std::collections::HashMap;

use crate::patterns;

/// `lowercase(name) → local_vars` budgets. The game uses the first entry for
/// a name, so later duplicates are ignored. Lines without a recognizable
/// budget attribute are skipped.
pub fn lvar_budgets(text: &str) -> HashMap<String, u32> {
    let mut budgets = HashMap::new();
    for line in text.lines() {
        if let Some((name, budget)) = patterns::registry_budget(line) {
            budgets.entry(name.to_lowercase()).or_insert(budget);
        }
    }
    budgets
}

/// Upper-cased script name per registry line, index 0 holding line 1. Every
/// line produces an entry, even ones without a `.` separator.
pub fn names_by_line(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.split('.')
                .next()
                .unwrap_or("")
                .to_uppercase()
        })
        .collect()
}
