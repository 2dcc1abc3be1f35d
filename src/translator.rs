// SPDX-License-Identifier: PMPL-1.0-or-later

//! The per-language translation collaborator.
//!
//! The driver never translates anything itself. It hands each
//! (source, target, language) triple to a [`Translator`] and only looks at
//! the exit status. [`ScriptTranslator`] is the production implementation,
//! running `<interpreter> <script> <source> <target> <lang>` as a child
//! process.

use crate::types::Invocation;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Script run once per language when none is configured.
pub const DEFAULT_SCRIPT_NAME: &str = "translate_arb.py";

/// Interpreter used for the default script.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Translates one source file into one target language.
pub trait Translator {
    fn translate(&self, source: &Path, target: &Path, lang: &str) -> Result<Invocation>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, source: &Path, target: &Path, lang: &str) -> Result<Invocation> {
        (**self).translate(source, target, lang)
    }
}

/// Runs an external script per language and captures its output
#[derive(Debug, Clone)]
pub struct ScriptTranslator {
    script: PathBuf,
    interpreter: Option<OsString>,
}

impl ScriptTranslator {
    /// `interpreter: None` executes the script directly.
    pub fn new(script: impl Into<PathBuf>, interpreter: Option<OsString>) -> Self {
        Self {
            script: script.into(),
            interpreter: interpreter.filter(|i| !i.is_empty()),
        }
    }

    fn command(&self) -> Command {
        match &self.interpreter {
            Some(interpreter) => {
                let mut cmd = Command::new(interpreter);
                cmd.arg(&self.script);
                cmd
            }
            None => Command::new(&self.script),
        }
    }
}

impl Translator for ScriptTranslator {
    fn translate(&self, source: &Path, target: &Path, lang: &str) -> Result<Invocation> {
        let output = self
            .command()
            .arg(source)
            .arg(target)
            .arg(lang)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("failed to run {}", self.script.display()))?;

        Ok(Invocation {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Directory holding the running executable, where the default script lives.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_script(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("translate.sh");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn passes_positional_arguments() {
        let dir = TempDir::new().unwrap();
        let script = write_script(dir.path(), "printf '%s|%s|%s' \"$1\" \"$2\" \"$3\"\n");
        let translator = ScriptTranslator::new(&script, Some(OsString::from("sh")));

        let inv = translator
            .translate(Path::new("in_en.arb"), Path::new("out/in_fr.arb"), "fr")
            .unwrap();
        assert!(inv.success);
        assert_eq!(inv.exit_code, Some(0));
        assert_eq!(inv.stdout, "in_en.arb|out/in_fr.arb|fr");
    }

    #[test]
    fn captures_stderr_and_exit_code() {
        let dir = TempDir::new().unwrap();
        let script = write_script(dir.path(), "echo 'quota exceeded' >&2\nexit 2\n");
        let translator = ScriptTranslator::new(&script, Some(OsString::from("sh")));

        let inv = translator
            .translate(Path::new("a"), Path::new("b"), "de")
            .unwrap();
        assert!(!inv.success);
        assert_eq!(inv.exit_code, Some(2));
        assert_eq!(inv.stderr.trim(), "quota exceeded");
    }

    #[test]
    fn stdin_is_not_forwarded() {
        let dir = TempDir::new().unwrap();
        let script = write_script(dir.path(), "if read line; then exit 3; fi\nexit 0\n");
        let translator = ScriptTranslator::new(&script, Some(OsString::from("sh")));

        let inv = translator
            .translate(Path::new("a"), Path::new("b"), "de")
            .unwrap();
        assert!(inv.success, "stdin should be at EOF");
    }

    #[test]
    fn missing_interpreter_is_an_error() {
        let translator = ScriptTranslator::new(
            "translate_arb.py",
            Some(OsString::from("definitely-not-an-interpreter-xyz")),
        );
        assert!(translator
            .translate(Path::new("a"), Path::new("b"), "fr")
            .is_err());
    }

    #[test]
    fn empty_interpreter_runs_script_directly() {
        let direct = ScriptTranslator::new("tools/run.sh", Some(OsString::new())).command();
        assert_eq!(direct.get_program(), "tools/run.sh");
        assert_eq!(direct.get_args().count(), 0);

        let wrapped = ScriptTranslator::new("tools/run.sh", Some(OsString::from("sh"))).command();
        assert_eq!(wrapped.get_program(), "sh");
        assert_eq!(wrapped.get_args().collect::<Vec<_>>(), ["tools/run.sh"]);
    }

    #[test]
    fn killed_by_signal_has_no_exit_code() {
        let dir = TempDir::new().unwrap();
        let script = write_script(dir.path(), "kill -9 $$\n");
        let translator = ScriptTranslator::new(&script, Some(OsString::from("sh")));

        let inv = translator
            .translate(Path::new("a"), Path::new("b"), "fr")
            .unwrap();
        assert!(!inv.success);
        assert_eq!(inv.exit_code, None);
    }
}
