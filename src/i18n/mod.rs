// SPDX-License-Identifier: PMPL-1.0-or-later

//! Target language data for the batch driver.
//!
//! The default list is the set of language codes Amazon Translate accepts,
//! which is what the per-language translation script calls underneath. The
//! order of the list is the order in which languages are translated and
//! reported.
//!
//! Codes from user overrides (`--languages`, profile `languages:`) are
//! checked with [`is_valid_language_code`] before any subprocess runs.

mod iso639;

pub use iso639::{is_valid_iso639_1, is_valid_language_code};

/// Languages translated when no override is given.
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "az", "be", "bg", "bn", "bs", "ca", "hr", "cs", "da",
    "nl", "et", "fi", "fr", "ka", "de", "el", "gu", "he", "hi", "hu", "is",
    "id", "it", "ja", "kn", "kk", "ko", "lv", "lt", "ms", "ml", "mt", "mr",
    "mn", "no", "fa", "pl", "pt", "pa", "ro", "sr", "si", "sk", "sl", "es",
    "sw", "sv", "tl", "ta", "te", "th", "tr", "uk", "ur", "uz", "vi", "cy", "zh",
];

/// Owned copy of [`DEFAULT_LANGUAGES`], ready to drop into a `BatchConfig`.
pub fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|code| code.to_string()).collect()
}
