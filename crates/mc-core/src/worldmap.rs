//! The worldmap configuration file: INI-like sections of key/value pairs.
//!
//! A minimal sectioned parser without value interpolation. Keys split at
//! the earliest `=` or `:` delimiter, `;`/`#` lines are comments, and
//! indented lines continue the previous value.

use std::path::Path;

use thiserror::Error;

use crate::legacy::read_legacy;

#[derive(Error, Debug)]
pub enum WorldmapError {
    #[error("{0} does not exist.")]
    Missing(String),
    #[error("{0} is not a file")]
    NotAFile(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One `[Name]` section with its key/value pairs in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

/// Parse worldmap text into its sections. Pairs before the first section
/// header are dropped.
pub fn parse(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim_end();
        let trimmed = line.trim_start();

        if trimmed.is_empty() {
            continue;
        }

        // Continuation: an indented line extends the previous value.
        if line.starts_with([' ', '\t']) {
            if let Some(section) = sections.last_mut() {
                if let Some((_, value)) = section.entries.last_mut() {
                    value.push('\n');
                    value.push_str(trimmed);
                    continue;
                }
            }
        }

        if trimmed.starts_with(';') || trimmed.starts_with('#') {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            if let Some(end) = rest.find(']') {
                sections.push(Section {
                    name: rest[..end].to_string(),
                    entries: Vec::new(),
                });
                continue;
            }
        }

        let delim = match (trimmed.find('='), trimmed.find(':')) {
            (Some(e), Some(c)) => Some(e.min(c)),
            (Some(e), None) => Some(e),
            (None, Some(c)) => Some(c),
            (None, None) => None,
        };
        if let (Some(pos), Some(section)) = (delim, sections.last_mut()) {
            let key = trimmed[..pos].trim().to_string();
            let value = trimmed[pos + 1..].trim().to_string();
            section.entries.push((key, value));
        }
    }

    sections
}

/// Load and parse a worldmap file, enforcing the fatal preconditions: the
/// path must exist and be a regular file.
pub fn load(path: &Path) -> Result<Vec<Section>, WorldmapError> {
    if !path.exists() {
        return Err(WorldmapError::Missing(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(WorldmapError::NotAFile(path.display().to_string()));
    }
    Ok(parse(&read_legacy(path)?))
}
