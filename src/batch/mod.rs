// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch translation driver
//!
//! Sequentially runs the translation collaborator once per target language,
//! printing one status line per language. A failing language never stops
//! the batch.

pub mod executor;
pub mod pattern;

use crate::translator::Translator;
use crate::types::*;
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use executor::BatchExecutor;
pub use pattern::FilenamePattern;

/// Translate `config.source_file` into every configured language
pub fn run<T: Translator>(
    config: BatchConfig,
    translator: T,
    out: &mut dyn Write,
) -> Result<BatchReport> {
    let executor = BatchExecutor::new(config, translator);
    executor.execute(out)
}

/// Output directory used when none is given: the source file's directory.
pub fn default_output_dir(source_file: &Path) -> PathBuf {
    match source_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
