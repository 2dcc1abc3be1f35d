// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch execution engine

use crate::batch::pattern::FilenamePattern;
use crate::report::ConsoleFormatter;
use crate::translator::Translator;
use crate::types::*;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub struct BatchExecutor<T: Translator> {
    config: BatchConfig,
    translator: T,
    formatter: ConsoleFormatter,
}

impl<T: Translator> BatchExecutor<T> {
    pub fn new(config: BatchConfig, translator: T) -> Self {
        Self {
            config,
            translator,
            formatter: ConsoleFormatter::new(),
        }
    }

    pub fn execute(&self, out: &mut dyn Write) -> Result<BatchReport> {
        let pattern = FilenamePattern::derive(&self.config.source_file)?;

        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "creating output directory {}",
                self.config.output_dir.display()
            )
        })?;

        if pattern.is_fallback() {
            self.formatter.write_pattern_warning(out)?;
        }

        let total = self.config.languages.len();
        self.formatter.write_header(
            out,
            &self.config.source_file,
            &self.config.output_dir,
            &pattern,
            total,
        )?;

        let mut outcomes = Vec::with_capacity(total);
        for (offset, lang) in self.config.languages.iter().enumerate() {
            let outcome = self.translate_one(offset + 1, lang, &pattern);
            self.formatter.write_outcome(out, &outcome, total)?;
            outcomes.push(outcome);
        }

        self.formatter.write_footer(out)?;

        Ok(BatchReport {
            created_at: chrono::Utc::now().to_rfc3339(),
            source_file: self.config.source_file.clone(),
            output_dir: self.config.output_dir.clone(),
            file_pattern: pattern.to_string(),
            total_languages: total,
            outcomes,
        })
    }

    fn translate_one(&self, index: usize, lang: &str, pattern: &FilenamePattern) -> LanguageOutcome {
        let target = self.target_path(pattern, lang);

        // A collaborator that cannot even start counts as a failed language.
        let invocation = self
            .translator
            .translate(&self.config.source_file, &target, lang)
            .unwrap_or_else(|err| Invocation::spawn_failure(format!("{:#}", err)));

        LanguageOutcome {
            index,
            language: lang.to_string(),
            target_file: target,
            success: invocation.success,
            exit_code: invocation.exit_code,
            stderr: invocation.stderr,
        }
    }

    fn target_path(&self, pattern: &FilenamePattern, lang: &str) -> PathBuf {
        self.config.output_dir.join(pattern.render(lang))
    }
}
