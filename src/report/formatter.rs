// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console formatting for batch progress

use crate::batch::FilenamePattern;
use crate::types::LanguageOutcome;
use colored::*;
use std::io::{self, Write};
use std::path::Path;

const SEPARATOR_WIDTH: usize = 80;

pub const PATTERN_WARNING: &str =
    "Warning: Source file doesn't follow expected naming convention (*_en.arb or *en.arb)";

pub const COMPLETION_MESSAGE: &str = "Translation process completed.";

pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn separator() -> String {
        "-".repeat(SEPARATOR_WIDTH)
    }

    pub fn write_pattern_warning(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", PATTERN_WARNING.yellow())
    }

    pub fn write_header(
        &self,
        out: &mut dyn Write,
        source: &Path,
        output_dir: &Path,
        pattern: &FilenamePattern,
        total: usize,
    ) -> io::Result<()> {
        writeln!(
            out,
            "Translating {} to {} languages...",
            source.display(),
            total
        )?;
        writeln!(out, "Output directory: {}", output_dir.display())?;
        writeln!(out, "File pattern: {}", pattern)?;
        writeln!(out, "{}", Self::separator())
    }

    /// One status line, plus the captured stderr when the language failed.
    pub fn write_outcome(
        &self,
        out: &mut dyn Write,
        outcome: &LanguageOutcome,
        total: usize,
    ) -> io::Result<()> {
        let status = if outcome.success {
            "✓".green()
        } else {
            "✗".red()
        };
        let file_name = outcome
            .target_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        writeln!(
            out,
            "[{}] {}/{}: {} -> {}",
            status, outcome.index, total, outcome.language, file_name
        )?;

        if !outcome.success {
            writeln!(out, "    Error: {}", outcome.stderr.trim_end())?;
        }
        Ok(())
    }

    pub fn write_footer(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", Self::separator())?;
        writeln!(out, "{}", COMPLETION_MESSAGE.bold())
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}
