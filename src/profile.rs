// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch profile loading for overriding the driver's defaults.
//!
//! ```yaml
//! languages: [fr, de, pt-BR]
//! script: tools/translation/translate_arb.py
//! interpreter: python3
//! strict: true
//! ```

use crate::i18n::is_valid_language_code;
use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BatchProfile {
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub script: Option<PathBuf>,
    /// Empty string means "run the script directly".
    #[serde(default)]
    pub interpreter: Option<String>,
    #[serde(default)]
    pub strict: Option<bool>,
}

impl BatchProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading batch profile {}", path.display()))?;
        let profile: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json batch profile {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml batch profile {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported batch profile extension for {}",
                    path.display()
                ))
            }
        };

        if let Some(languages) = &profile.languages {
            validate_languages(languages)
                .with_context(|| format!("invalid languages in {}", path.display()))?;
        }
        Ok(profile)
    }
}

/// Reject empty lists, malformed codes and duplicates before anything runs.
pub fn validate_languages(languages: &[String]) -> Result<()> {
    if languages.is_empty() {
        bail!("language list is empty");
    }
    let mut seen = Vec::with_capacity(languages.len());
    for code in languages {
        if !is_valid_language_code(code) {
            bail!("invalid language code: {:?}", code);
        }
        if seen.contains(&code) {
            bail!("duplicate language code: {}", code);
        }
        seen.push(code);
    }
    Ok(())
}
