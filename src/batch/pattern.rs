// SPDX-License-Identifier: PMPL-1.0-or-later

//! Output filename derivation from the English source name.

use anyhow::{anyhow, Result};
use std::fmt;
use std::path::Path;

/// Placeholder shown where the language code goes.
pub const LANG_SLOT: &str = "{lang}";

/// Pattern used when the source name carries no English marker.
pub const FALLBACK_PATTERN: &str = "app_{lang}.arb";

/// Filename template with a language slot at every replaced marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenamePattern {
    /// Text around the replaced markers, verbatim from the source name
    segments: Vec<String>,
    /// `"_"` when the marker was `_en.arb`, empty otherwise
    separator: &'static str,
    fallback: bool,
}

impl FilenamePattern {
    /// Derive the template from a source path's base name. First match wins.
    ///
    /// Fails on a base name that is not valid UTF-8 rather than guessing at
    /// the target name.
    pub fn derive(source_file: &Path) -> Result<Self> {
        match source_file.file_name() {
            Some(name) => name
                .to_str()
                .map(Self::from_base_name)
                .ok_or_else(|| anyhow!("source file name is not valid UTF-8: {:?}", name)),
            None => Ok(Self::from_base_name("")),
        }
    }

    pub fn from_base_name(base_name: &str) -> Self {
        if base_name.contains("_en.arb") {
            Self::split(base_name, "_en.arb", "_")
        } else if base_name.contains("en.arb") {
            Self::split(base_name, "en.arb", "")
        } else {
            Self {
                segments: vec!["app_".to_string(), String::new()],
                separator: "",
                fallback: true,
            }
        }
    }

    fn split(base_name: &str, marker: &str, separator: &'static str) -> Self {
        Self {
            segments: base_name.split(marker).map(str::to_string).collect(),
            separator,
            fallback: false,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Substitute the language code into every slot.
    ///
    /// Braces already present in the source name are left alone.
    pub fn render(&self, lang: &str) -> String {
        self.segments
            .join(&format!("{}{}.arb", self.separator, lang))
    }
}

impl fmt::Display for FilenamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(LANG_SLOT))
    }
}
