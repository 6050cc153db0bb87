//! Script registry consistency checker: scripts.lst line positions vs the
//! `#define SCRIPT_<NAME> (<NUM>)` entries of scripts.h.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use mc_core::header::ScriptHeader;
use mc_core::{CheckReport, read_legacy, registry};

/// Sentinel name for an intentionally unused slot, exempt from both checks.
const RESERVED: &str = "RESERVED";

/// Cross-validate scripts.lst against scripts.h: duplicate registry names,
/// name mismatches at shared numbers, and registry names missing from the
/// header entirely.
pub fn check_scripts_lst(header_path: &Path, registry_path: &Path) -> Result<CheckReport> {
    let header = ScriptHeader::parse(
        &read_legacy(header_path)
            .with_context(|| format!("reading {}", header_path.display()))?,
    );
    let names = registry::names_by_line(
        &read_legacy(registry_path)
            .with_context(|| format!("reading {}", registry_path.display()))?,
    );

    let mut report = CheckReport::new();
    check_dupes(&names, &mut report);
    check_header(&names, &header, &mut report);
    Ok(report)
}

/// Report every non-RESERVED name appearing on more than one line, sorted
/// by name, with all its line numbers.
fn check_dupes(names: &[String], report: &mut CheckReport) {
    let mut lines_by_name: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, name) in names.iter().enumerate() {
        lines_by_name.entry(name.as_str()).or_default().push(i + 1);
    }

    for (name, lines) in &lines_by_name {
        if *name == RESERVED || lines.len() < 2 {
            continue;
        }
        let joined = lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        report.record(format!(
            "Dupe: {name} is defined on lines {joined} in scripts.lst"
        ));
    }
}

/// For every registry line: a header entry at the same number must agree on
/// the name; numbers the header lacks must at least have the name defined
/// somewhere in the header (or be RESERVED).
fn check_header(names: &[String], header: &ScriptHeader, report: &mut CheckReport) {
    for (i, name) in names.iter().enumerate() {
        let num = (i + 1) as u32;
        match header.by_num.get(&num) {
            Some(h_name) if h_name != name => {
                report.record(format!("Mismatch: scripts.lst {name}, scripts.h {h_name}"));
            }
            Some(_) => {}
            None => {
                if !header.by_name.contains_key(name) && name != RESERVED {
                    report.record(format!(
                        "Missing: script {name}.int, line number {num} in scripts.lst is absent from scripts.h"
                    ));
                }
            }
        }
    }
}
