//! Finding accumulation and reporting.
//!
//! Checkers never abort on a finding; everything is collected here and
//! printed once the whole input has been processed, and the process exit
//! code is derived from whether anything was found.

use std::process::ExitCode;

use serde::{Deserialize, Serialize};

/// Outcome of one validation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    /// Human-readable finding lines, in discovery order.
    pub findings: Vec<String>,
    /// Informational footer lines (totals etc.), printed after the findings.
    pub notes: Vec<String>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one inconsistency.
    pub fn record(&mut self, finding: String) {
        self.findings.push(finding);
    }

    /// Record an informational footer line.
    pub fn note(&mut self, line: String) {
        self.notes.push(line);
    }

    /// True if no inconsistency was found.
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    /// Print every finding, then the footer lines, to stdout.
    pub fn print(&self) {
        for line in self.findings.iter().chain(self.notes.iter()) {
            println!("{line}");
        }
    }

    /// Process exit code: 0 when clean, 1 when anything was found.
    pub fn exit_code(&self) -> ExitCode {
        if self.passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
