// SPDX-License-Identifier: PMPL-1.0-or-later

//! arb-translate: translate an English ARB file into every supported language
//!
//! Runs the per-language translation script once for each target language,
//! sequentially, and prints a status line per language.

use anyhow::{bail, Result};
use arb_translate::batch;
use arb_translate::i18n;
use arb_translate::profile::{validate_languages, BatchProfile};
use arb_translate::report::{self, ReportOutputFormat};
use arb_translate::translator::{self, ScriptTranslator, DEFAULT_INTERPRETER, DEFAULT_SCRIPT_NAME};
use arb_translate::types::BatchConfig;
use clap::Parser;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "arb-translate")]
#[command(version)]
#[command(about = "Translate an English ARB localization file into every supported language")]
#[command(long_about = None)]
struct Cli {
    /// English source ARB file (e.g. lib/l10n/app_en.arb)
    #[arg(value_name = "SOURCE_ARB_FILE")]
    source: Option<PathBuf>,

    /// Directory for translated files (default: the source file's directory)
    #[arg(value_name = "OUTPUT_DIRECTORY")]
    output_dir: Option<PathBuf>,

    /// Per-language translation script (default: translate_arb.py next to this executable)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Program used to run the script; pass "" to execute the script directly
    #[arg(long)]
    interpreter: Option<String>,

    /// Comma-separated target languages (default: all supported languages)
    #[arg(short, long, value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// JSON or YAML batch profile
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Write a batch report to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Report format (default: from the report file extension, else json)
    #[arg(long, value_enum)]
    report_format: Option<ReportOutputFormat>,

    /// Exit with status 1 if any language failed
    #[arg(long)]
    strict: bool,
}

fn print_usage() {
    println!("Usage: arb-translate <source_arb_file> [output_directory]");
    println!();
    println!("Examples:");
    println!("  arb-translate lib/l10n/app_en.arb");
    println!("  arb-translate lib/l10n/app_en.arb lib/l10n");
    println!("  arb-translate ../apps/flagsquiz/lib/l10n/app_en.arb ../apps/flagsquiz/lib/l10n");
}

fn resolve_translator(cli: &Cli, profile: &BatchProfile) -> Result<ScriptTranslator> {
    let script = match cli.script.clone().or_else(|| profile.script.clone()) {
        Some(script) => script,
        None => translator::executable_dir()?.join(DEFAULT_SCRIPT_NAME),
    };
    let interpreter = cli
        .interpreter
        .clone()
        .or_else(|| profile.interpreter.clone())
        .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string());
    Ok(ScriptTranslator::new(script, Some(OsString::from(interpreter))))
}

fn resolve_languages(cli: &Cli, profile: &BatchProfile) -> Result<Vec<String>> {
    match &cli.languages {
        Some(languages) => {
            validate_languages(languages)?;
            Ok(languages.clone())
        }
        None => Ok(profile
            .languages
            .clone()
            .unwrap_or_else(i18n::default_languages)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(source_file) = cli.source.clone() else {
        print_usage();
        std::process::exit(1);
    };

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| batch::default_output_dir(&source_file));

    if !source_file.exists() {
        println!("Error: Source file not found: {}", source_file.display());
        std::process::exit(1);
    }

    let profile = match &cli.profile {
        Some(path) => BatchProfile::load(path)?,
        None => BatchProfile::default(),
    };
    let languages = resolve_languages(&cli, &profile)?;
    let translator = resolve_translator(&cli, &profile)?;
    let strict = cli.strict || profile.strict.unwrap_or(false);

    let config = BatchConfig {
        source_file,
        output_dir,
        languages,
    };

    let mut stdout = io::stdout().lock();
    let batch_report = batch::run(config, &translator, &mut stdout)?;
    drop(stdout);

    if let Some(report_path) = &cli.report {
        let format = report_format(cli.report_format, report_path);
        report::save_report(&batch_report, report_path, format)?;
        println!("Report saved to: {}", report_path.display());
    }

    if strict && batch_report.failed() > 0 {
        bail!(
            "{} of {} translations failed",
            batch_report.failed(),
            batch_report.total_languages
        );
    }

    Ok(())
}

fn report_format(explicit: Option<ReportOutputFormat>, path: &Path) -> ReportOutputFormat {
    explicit
        .or_else(|| ReportOutputFormat::from_path(path))
        .unwrap_or(ReportOutputFormat::Json)
}
