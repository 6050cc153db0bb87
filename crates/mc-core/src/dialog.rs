//! Dialog `.msg` files: `{NNN}` message-ID extraction.

use std::io;
use std::path::Path;

use crate::legacy::read_legacy;
use crate::patterns;

/// Extract every `{NNN}` message ID from a dialog file's text, ordered and
/// deduplicated by first appearance.
pub fn extract_message_ids(text: &str) -> Vec<String> {
    let mut ids = Vec::new();
    for line in text.lines() {
        ids.extend(patterns::dialog_ids(line));
    }
    patterns::ordered_unique(ids)
}

/// Load a dialog file and extract its message IDs.
pub fn load_message_ids(path: &Path) -> io::Result<Vec<String>> {
    Ok(extract_message_ids(&read_legacy(path)?))
}

/// Like [`load_message_ids`], but any read failure yields `None`. Per-script
/// dialog files are optional; a script whose dialog file is missing (or
/// otherwise unreadable) is skipped by the dialog checker.
pub fn try_load_message_ids(path: &Path) -> Option<Vec<String>> {
    read_legacy(path).ok().map(|text| extract_message_ids(&text))
}
