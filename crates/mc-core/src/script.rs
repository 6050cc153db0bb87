//! Script `.ssl` sources: message-reference extraction and dialog-file
//! name derivation.
//!
//! A script references dialog messages through a fixed set of call names
//! (`Reply`, `floater`, option and message variants), bare `mstr(...)`,
//! ranged `floater_rand`/`Reply_Rand` calls, and `g_mstr(...)` for the
//! generic dialog file. Block comments are stripped before scanning and
//! `//` lines are ignored.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::patterns;

/// Message references extracted from one script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptRefs {
    /// IDs expected in the script's own dialog file, first-seen order.
    pub specific: Vec<String>,
    /// IDs expected in the generic dialog file, first-seen order.
    pub generic: Vec<String>,
}

/// All `.ssl` files under `dir`, recursively, in path order.
pub fn find_scripts(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "ssl"))
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();
    paths
}

/// Extract every message reference from a script's full text.
pub fn extract_refs(text: &str) -> ScriptRefs {
    let stripped = patterns::strip_block_comments(text);
    let mut specific = Vec::new();
    let mut generic = Vec::new();

    for line in stripped.split('\n') {
        if line.trim_start().starts_with("//") {
            continue;
        }
        specific.extend(patterns::call_refs(line));
        specific.extend(patterns::mstr_refs(line));
        if let Some((lo, hi)) = patterns::rand_range(line) {
            specific.extend((lo..=hi).map(|id| id.to_string()));
        }
        generic.extend(patterns::generic_refs(line));
    }

    ScriptRefs {
        specific: patterns::ordered_unique(specific),
        generic: patterns::ordered_unique(generic),
    }
}

/// The script's dialog-file stem: the lower-cased `<NAME>` of a
/// `#define NAME SCRIPT_<NAME>` directive if present, else the lower-cased
/// file stem of the script itself.
pub fn dialog_name(text: &str, script_path: &Path) -> String {
    match patterns::name_directive(text) {
        Some(name) => name.to_lowercase(),
        None => script_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn references_are_deduplicated_in_first_seen_order() {
        let src = " Reply(300);\n mstr(100);\n Reply(300);\n NOption(200, node1, 4);\n";
        let refs = extract_refs(src);
        assert_eq!(refs.specific, vec!["300", "100", "200"]);
        assert!(refs.generic.is_empty());
    }

    #[test]
    fn ranges_expand_inclusively() {
        let refs = extract_refs(" floater_rand(100, 103);\n");
        assert_eq!(refs.specific, vec!["100", "101", "102", "103"]);
    }

    #[test]
    fn generic_refs_are_tracked_separately() {
        let refs = extract_refs(" g_mstr(404);\n mstr(101);\n");
        assert_eq!(refs.specific, vec!["101"]);
        assert_eq!(refs.generic, vec!["404"]);
    }

    #[test]
    fn comments_do_not_contribute_references() {
        let src = "/* Reply(100);\n Reply(101); */\n// Reply(102);\n Reply(103);\n";
        let refs = extract_refs(src);
        assert_eq!(refs.specific, vec!["103"]);
    }

    #[test]
    fn dialog_name_prefers_the_name_directive() {
        let src = "#define NAME SCRIPT_ACMORGUE\n";
        assert_eq!(dialog_name(src, Path::new("dir/other.ssl")), "acmorgue");
        assert_eq!(dialog_name("", Path::new("dir/ACFIST.ssl")), "acfist");
    }

    #[test]
    fn find_scripts_recurses_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("town")).unwrap();
        fs::write(dir.path().join("a.ssl"), "").unwrap();
        fs::write(dir.path().join("town/b.ssl"), "").unwrap();
        fs::write(dir.path().join("town/readme.txt"), "").unwrap();
        let names: Vec<String> = find_scripts(dir.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.ssl", "b.ssl"]);
    }
}
