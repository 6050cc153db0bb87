//! Reading legacy single-byte text files.
//!
//! The game's data files predate UTF-8; they are stored in a single-byte
//! codepage. Every pattern the checkers match is pure ASCII, so decoding
//! byte-for-byte (Latin-1 mapping) preserves extraction behavior exactly and
//! can never fail on high bytes.

use std::fs;
use std::io;
use std::path::Path;

/// Read a file as single-byte legacy text, mapping each byte to the char
/// with the same code point.
pub fn read_legacy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}
