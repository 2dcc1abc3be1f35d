// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code validation.
//!
//! Translation targets are either a bare two-letter code (`fr`) or a code
//! with a region/script subtag (`pt-BR`, `zh_TW`). Only the primary subtag
//! is checked against ISO 639-1; the subtag is shape-checked.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use regex::Regex;
use std::sync::OnceLock;

fn language_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<primary>[a-z]{2})(?:[-_](?P<subtag>[A-Z]{2}|[A-Z][a-z]{3}|[0-9]{3}))?$")
            .expect("language tag pattern compiles")
    })
}

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// # Examples
/// ```
/// assert!(arb_translate::i18n::is_valid_iso639_1("en"));
/// assert!(arb_translate::i18n::is_valid_iso639_1("ja"));
/// assert!(!arb_translate::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// Accepts `ll`, `ll-RR`, `ll_RR`, `ll-Scrp` and `ll-419` style targets whose
/// primary subtag is ISO 639-1.
pub fn is_valid_language_code(code: &str) -> bool {
    language_tag_re()
        .captures(code)
        .and_then(|caps| caps.name("primary"))
        .map(|primary| is_valid_iso639_1(primary.as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("ja"));
        assert!(is_valid_iso639_1("tl"));
        assert!(is_valid_iso639_1("zh"));
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("eng"));
        assert!(!is_valid_iso639_1("EN"));
    }

    #[test]
    fn region_subtags_accepted() {
        assert!(is_valid_language_code("pt-BR"));
        assert!(is_valid_language_code("zh_TW"));
        assert!(is_valid_language_code("sr-Latn"));
        assert!(is_valid_language_code("es-419"));
    }

    #[test]
    fn malformed_tags_rejected() {
        assert!(!is_valid_language_code("xx-BR"));
        assert!(!is_valid_language_code("fr-"));
        assert!(!is_valid_language_code("fr-br"));
        assert!(!is_valid_language_code("../fr"));
        assert!(!is_valid_language_code("fr/../../etc"));
        assert!(!is_valid_language_code(""));
    }
}
