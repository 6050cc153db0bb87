//! Dialog reference checker: every message ID a script references must
//! exist in its dialog file, and every `g_mstr` reference must exist in
//! `generic.msg`.

use std::path::Path;

use anyhow::{Context, Result};
use mc_core::{CheckReport, dialog, read_legacy, script};

/// Cross-reference every script under `scripts_dir` against the dialog
/// files in `dialog_dir`. Scripts without a dialog file are skipped.
pub fn check_dialogs(dialog_dir: &Path, scripts_dir: &Path) -> Result<CheckReport> {
    let generic_path = dialog_dir.join("generic.msg");
    let generic_ids = dialog::load_message_ids(&generic_path)
        .with_context(|| format!("reading {}", generic_path.display()))?;

    let mut report = CheckReport::new();
    let mut tested = 0usize;

    for script_path in script::find_scripts(scripts_dir) {
        let text = read_legacy(&script_path)
            .with_context(|| format!("reading {}", script_path.display()))?;
        let refs = script::extract_refs(&text);

        let name = script::dialog_name(&text, &script_path);
        let dialog_path = dialog_dir.join(format!("{name}.msg"));
        let Some(dialog_ids) = dialog::try_load_message_ids(&dialog_path) else {
            // No readable dialog file for this script; nothing to validate.
            continue;
        };

        let missing: Vec<&str> = refs
            .specific
            .iter()
            .filter(|id| !dialog_ids.contains(*id))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            report.record(format!(
                "Messages in {} that missed in {}: {}",
                script_path.display(),
                dialog_path.display(),
                missing.join(" ")
            ));
        }
        tested += refs.specific.len();

        let g_missing: Vec<&str> = refs
            .generic
            .iter()
            .filter(|id| !generic_ids.contains(*id))
            .map(String::as_str)
            .collect();
        if !g_missing.is_empty() {
            report.record(format!(
                "Generic messages in {} that missed in {}: {}",
                script_path.display(),
                generic_path.display(),
                g_missing.join(" ")
            ));
        }
        tested += refs.generic.len();
    }

    report.note(format!("Messages tested: {tested}"));
    Ok(report)
}
