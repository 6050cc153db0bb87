//! World-map encounter checker: every combination of script numbers
//! referenced together inside one encounter section must be on the
//! explicit allow-list.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Result, anyhow};
use mc_core::worldmap::WorldmapError;
use mc_core::{CheckReport, patterns, worldmap};

/// Section-name prefix marking an encounter definition.
const ENCOUNTER_PREFIX: &str = "Encounter: ";

/// Parse repeatable `-s` values ("100,101") into sorted combinations.
pub fn parse_allowed_sets(specs: &[String]) -> Result<Vec<Vec<u32>>> {
    let mut allowed = Vec::new();
    for spec in specs {
        let mut combo = Vec::new();
        for part in spec.split(',') {
            let num: u32 = part
                .trim()
                .parse()
                .map_err(|_| anyhow!("invalid script number {part:?} in set {spec:?}"))?;
            combo.push(num);
        }
        combo.sort_unstable();
        allowed.push(combo);
    }
    Ok(allowed)
}

/// Scan every encounter section of the worldmap file and flag script
/// combinations not present in `allowed`. A missing or non-regular worldmap
/// path is a fatal error.
pub fn check_worldmap(
    worldmap_path: &Path,
    allowed: &[Vec<u32>],
) -> Result<CheckReport, WorldmapError> {
    let sections = worldmap::load(worldmap_path)?;

    let mut report = CheckReport::new();

    for section in &sections {
        if !section.name.starts_with(ENCOUNTER_PREFIX) {
            continue;
        }

        let mut scripts = BTreeSet::new();
        for (_key, value) in &section.entries {
            // Dead critters don't matter.
            if value.starts_with("Dead,") {
                continue;
            }
            if let Some(num) = patterns::script_number(value) {
                scripts.insert(num);
            }
        }

        if scripts.len() > 1 {
            let combo: Vec<u32> = scripts.into_iter().collect();
            if !allowed.contains(&combo) {
                let joined = combo
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                report.record(format!(
                    "{} has invalid script combination: [{joined}]",
                    section.name
                ));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_sets_sort_numerically() {
        let allowed = parse_allowed_sets(&["101,100".to_string(), "9,10".to_string()]).unwrap();
        assert_eq!(allowed, vec![vec![100, 101], vec![9, 10]]);
    }

    #[test]
    fn bad_set_specs_are_rejected() {
        assert!(parse_allowed_sets(&["100,abc".to_string()]).is_err());
    }
}
