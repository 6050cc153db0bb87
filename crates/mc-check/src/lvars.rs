//! Local-variable count checker: the highest LVAR index a script defines
//! must fit in the `local_vars=<N>` budget declared for it in scripts.lst.

use std::path::Path;

use anyhow::{Context, Result};
use mc_core::{CheckReport, patterns, read_legacy, registry, script};

/// Compare each script's maximum LVAR index against its registry budget.
/// Scripts absent from the registry, or without any LVAR define, are
/// ignored. A report triggers only when the allowed count is strictly less
/// than the raw maximum index.
pub fn check_lvars(scripts_dir: &Path, registry_path: &Path) -> Result<CheckReport> {
    let lst = read_legacy(registry_path)
        .with_context(|| format!("reading {}", registry_path.display()))?;
    let budgets = registry::lvar_budgets(&lst);

    let mut report = CheckReport::new();

    for script_path in script::find_scripts(scripts_dir) {
        let text = read_legacy(&script_path)
            .with_context(|| format!("reading {}", script_path.display()))?;
        let Some(max_index) = text.lines().filter_map(patterns::lvar_define).max() else {
            continue;
        };

        let name = script_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if let Some(&allowed) = budgets.get(&name) {
            if allowed < max_index {
                report.record(format!(
                    "Script {name} max LVAR index is {max_index}, but scripts.lst only allows {allowed}."
                ));
            }
        }
    }

    Ok(report)
}
