//! The script numeric-ID header (`scripts.h`).

use std::collections::HashMap;

use crate::patterns;

/// `#define SCRIPT_<NAME> (<NUM>)` entries, indexed both ways.
#[derive(Debug, Clone, Default)]
pub struct ScriptHeader {
    pub by_num: HashMap<u32, String>,
    pub by_name: HashMap<String, u32>,
}

impl ScriptHeader {
    /// Parse every script define in the header text. Other lines are
    /// ignored.
    pub fn parse(text: &str) -> Self {
        let mut header = Self::default();
        for line in text.lines() {
            if let Some((name, num)) = patterns::script_define(line) {
                header.by_num.insert(num, name.clone());
                header.by_name.insert(name, num);
            }
        }
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defines_both_ways() {
        let text = "\
// script numbers\n\
#define SCRIPT_ACKLINT (1) // acklint.int\n\
#define SCRIPT_ACMORGUE (2) // acmorgue.int\n\
#define NOT_A_SCRIPT (3) // ignored\n";
        let header = ScriptHeader::parse(text);
        assert_eq!(header.by_num.get(&1).map(String::as_str), Some("ACKLINT"));
        assert_eq!(header.by_name.get("ACMORGUE"), Some(&2));
        assert_eq!(header.by_num.len(), 2);
    }
}
