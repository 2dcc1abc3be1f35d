// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console progress output and report export

pub mod formatter;
pub mod output;

use crate::types::BatchReport;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use formatter::ConsoleFormatter;
pub use output::ReportOutputFormat;

/// Write the batch report to `path`, creating parent directories.
pub fn save_report(report: &BatchReport, path: &Path, format: ReportOutputFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let content = format.serialize(report)?;
    fs::write(path, content).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}
