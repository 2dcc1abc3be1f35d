// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for arb-translate

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything the driver needs to run one batch
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// English source ARB file
    pub source_file: PathBuf,
    /// Directory receiving one ARB file per language
    pub output_dir: PathBuf,
    /// Target language codes, in reporting order
    pub languages: Vec<String>,
}

/// Result of a single collaborator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// `None` when the process was killed by a signal or never started
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl Invocation {
    pub fn from_exit_code(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(code),
            success: code == 0,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// The collaborator could not be started at all.
    pub fn spawn_failure(reason: impl Into<String>) -> Self {
        Self {
            exit_code: None,
            success: false,
            stdout: String::new(),
            stderr: reason.into(),
        }
    }
}

/// Per-language line of the batch report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageOutcome {
    /// 1-based position in the language list
    pub index: usize,
    pub language: String,
    pub target_file: PathBuf,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub stderr: String,
}

/// Complete batch report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub created_at: String,
    pub source_file: PathBuf,
    pub output_dir: PathBuf,
    pub file_pattern: String,
    pub total_languages: usize,
    pub outcomes: Vec<LanguageOutcome>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.success).count()
    }
}
