// SPDX-License-Identifier: PMPL-1.0-or-later

//! arb-translate: batch translation of ARB localization files.
//!
//! Takes one English source file (`app_en.arb`) and produces a sibling file
//! per target language (`app_fr.arb`, `app_de.arb`, ...) by running an
//! external translation script once per language.
//!
//! MODULES:
//! 1. **batch**: the sequential driver loop and filename pattern derivation.
//! 2. **translator**: the subprocess collaborator behind a `Translator` trait.
//! 3. **profile**: JSON/YAML overrides for languages and the script.
//! 4. **report**: console progress lines and JSON/YAML report export.

pub mod batch;
pub mod i18n;
pub mod profile;
pub mod report;
pub mod translator;
pub mod types;
