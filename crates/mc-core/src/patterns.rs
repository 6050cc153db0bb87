//! Named pattern matchers for the game's text formats.
//!
//! Each matcher wraps one compiled regex and returns structured results
//! (typed integers or owned strings) instead of raw match objects, so the
//! extraction rules stay testable in isolation.
//!
//! Message IDs are kept as strings on purpose: the dialog files are the
//! source of truth for their exact textual form, and comparisons are made on
//! that form, never on a parsed integer.

use once_cell::sync::Lazy;
use regex::Regex;

/// `{NNN}` markers in dialog files, 3 to 5 digits.
static DIALOG_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([0-9]{3,5})\}").unwrap());

/// Message-emitting calls taking the message ID as first argument. The
/// leading `[^_]+` requires a preceding non-underscore character, which keeps
/// suffixes of longer identifiers (e.g. `_floater`) from matching.
static CALL_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[^_]+(?:display_mstr|floater|dude_floater|Reply|GOption|GLowOption|NOption|NLowOption|BOption|BLowOption|GMessage|NMessage|BMessage) *\( *([0-9]{3,5}) *[,)]",
    )
    .unwrap()
});

/// Bare `mstr(NNN)` references. The same prefix guard keeps this from
/// matching inside `display_mstr` or `g_mstr`.
static MSTR_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^_]+mstr *\( *([0-9]{3,5}) *\)").unwrap());

/// Ranged calls supplying two inclusive message-ID bounds.
static RANGE_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^_]+(?:floater_rand|Reply_Rand) *\( *([0-9]{3,5}) *, *([0-9]{3,5})").unwrap()
});

/// `g_mstr(NNN)` references into the generic dialog file.
static GENERIC_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^_]+g_mstr *\( *([0-9]{3,5}) *\)").unwrap());

/// `#define NAME SCRIPT_<NAME>` directive naming the script.
static NAME_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#define NAME +SCRIPT_([A-Z0-9_]+)").unwrap());

/// `#define LVAR_<name> (<N>) ...` local-variable slot definition. The
/// closing paren may be followed by whitespace or the end of the line.
static LVAR_DEFINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#define\s+LVAR_\w+\s+\((\d+)\)(?:\s|$)").unwrap());

/// `#define SCRIPT_<NAME> (<NUM>) ...` header entry.
static SCRIPT_DEFINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#define\s+SCRIPT_(\w+)\s+\((\d+)\)(?:\s|$)").unwrap());

/// `<name>.int ... local_vars=<N>` registry line.
static REGISTRY_BUDGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\.int.*local_vars=(\d+)").unwrap());

/// `Script:<digits>` inside a worldmap encounter value.
static SCRIPT_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"Script:(\d+)").unwrap());

/// Block comments, non-greedy, spanning lines.
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.+?\*/").unwrap());

/// All `{NNN}` message IDs on a dialog line, in order.
pub fn dialog_ids(line: &str) -> Vec<String> {
    DIALOG_ID
        .captures_iter(line)
        .map(|c| c[1].to_string())
        .collect()
}

/// First numeric arguments of message-emitting calls on a script line.
pub fn call_refs(line: &str) -> Vec<String> {
    CALL_REF
        .captures_iter(line)
        .map(|c| c[1].to_string())
        .collect()
}

/// Arguments of bare `mstr(...)` references on a script line.
pub fn mstr_refs(line: &str) -> Vec<String> {
    MSTR_REF
        .captures_iter(line)
        .map(|c| c[1].to_string())
        .collect()
}

/// Bounds of the first ranged reference on a script line, if any.
pub fn rand_range(line: &str) -> Option<(u32, u32)> {
    let caps = RANGE_REF.captures(line)?;
    let lo = caps[1].parse().ok()?;
    let hi = caps[2].parse().ok()?;
    Some((lo, hi))
}

/// Arguments of `g_mstr(...)` references on a script line.
pub fn generic_refs(line: &str) -> Vec<String> {
    GENERIC_REF
        .captures_iter(line)
        .map(|c| c[1].to_string())
        .collect()
}

/// The `<NAME>` of the first `#define NAME SCRIPT_<NAME>` directive, if any.
pub fn name_directive(text: &str) -> Option<String> {
    NAME_DIRECTIVE.captures(text).map(|c| c[1].to_string())
}

/// LVAR slot index defined on this line, if it is an LVAR define.
pub fn lvar_define(line: &str) -> Option<u32> {
    LVAR_DEFINE.captures(line)?[1].parse().ok()
}

/// `(NAME, NUM)` of a `#define SCRIPT_...` header line, if it is one.
pub fn script_define(line: &str) -> Option<(String, u32)> {
    let caps = SCRIPT_DEFINE.captures(line)?;
    let num = caps[2].parse().ok()?;
    Some((caps[1].to_string(), num))
}

/// `(name, local_vars)` of a registry line carrying a budget, if it is one.
pub fn registry_budget(line: &str) -> Option<(String, u32)> {
    let caps = REGISTRY_BUDGET.captures(line)?;
    let budget = caps[2].parse().ok()?;
    Some((caps[1].to_string(), budget))
}

/// First `Script:<N>` number inside a worldmap value, if any.
pub fn script_number(value: &str) -> Option<u32> {
    SCRIPT_NUMBER.captures(value)?[1].parse().ok()
}

/// Remove `/*...*/` block comments, including multi-line ones.
pub fn strip_block_comments(text: &str) -> String {
    BLOCK_COMMENT.replace_all(text, "").into_owned()
}

/// Deduplicate while preserving first-seen order.
pub fn ordered_unique(ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
