//! Language catalog: the code <-> display label mapping used by the selectors.

use anyhow::Result;
use std::collections::HashSet;

use super::GatewayError;
use crate::ui::Style;

/// Label shown in the source selector for automatic detection.
pub const AUTO_LABEL: &str = "Auto";

/// Code sent to the gateway when the source language should be detected.
pub const AUTO_CODE: &str = "auto";

/// Supported language codes (ISO 639-1) and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("ha", "Hausa"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("ht", "Haitian Creole"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("jw", "Javanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("ku", "Kurdish (Kurmanji)"),
    ("ky", "Kyrgyz"),
    ("la", "Latin"),
    ("lb", "Luxembourgish"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mg", "Malagasy"),
    ("mi", "Maori"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("so", "Somali"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("tg", "Tajik"),
    ("th", "Thai"),
    ("tl", "Filipino"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("xh", "Xhosa"),
    ("yi", "Yiddish"),
    ("yo", "Yoruba"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
    ("zu", "Zulu"),
];

/// Rejected catalog contents.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate language code '{0}'")]
    DuplicateCode(String),
    #[error("duplicate language label '{0}'")]
    DuplicateLabel(String),
    #[error("'{0}' is reserved for automatic detection")]
    Reserved(String),
}

#[derive(Debug, Clone)]
struct Language {
    code: String,
    label: String,
}

/// Read-only mapping between language codes and display labels.
///
/// Both directions are unique, so a label picked in a selector always
/// resolves back to exactly one code.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl LanguageCatalog {
    /// Builds a catalog, rejecting duplicate codes or labels.
    pub fn new<C, L>(entries: impl IntoIterator<Item = (C, L)>) -> Result<Self, CatalogError>
    where
        C: Into<String>,
        L: Into<String>,
    {
        let mut codes = HashSet::new();
        let mut labels = HashSet::new();
        let mut languages = Vec::new();

        for (code, label) in entries {
            let (code, label) = (code.into(), label.into());
            if code == AUTO_CODE || label == AUTO_LABEL {
                return Err(CatalogError::Reserved(if code == AUTO_CODE {
                    code
                } else {
                    label
                }));
            }
            if !codes.insert(code.clone()) {
                return Err(CatalogError::DuplicateCode(code));
            }
            if !labels.insert(label.clone()) {
                return Err(CatalogError::DuplicateLabel(label));
            }
            languages.push(Language { code, label });
        }

        Ok(Self { languages })
    }

    /// The languages every built-in gateway understands.
    pub fn builtin() -> Self {
        Self {
            languages: SUPPORTED_LANGUAGES
                .iter()
                .map(|(code, label)| Language {
                    code: (*code).to_string(),
                    label: (*label).to_string(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// `(code, label)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.languages
            .iter()
            .map(|l| (l.code.as_str(), l.label.as_str()))
    }

    /// Labels in catalog order, as offered by the target selector.
    pub fn labels(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.label.as_str()).collect()
    }

    /// Labels offered by the source selector: `Auto` followed by the catalog.
    pub fn source_labels(&self) -> Vec<&str> {
        std::iter::once(AUTO_LABEL).chain(self.iter().map(|(_, label)| label)).collect()
    }

    /// Reverse lookup by display label.
    pub fn code_for_label(&self, label: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.code.as_str())
    }

    pub fn label_for_code(&self, code: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| l.code == code)
            .map(|l| l.label.as_str())
    }

    /// Finds the canonical label for user-typed text, ignoring case.
    pub fn find_label(&self, query: &str) -> Option<&str> {
        let query = query.trim();
        self.languages
            .iter()
            .find(|l| l.label.eq_ignore_ascii_case(query))
            .map(|l| l.label.as_str())
    }

    /// Resolves a source selector label; `Auto` becomes the detection sentinel.
    pub fn resolve_source(&self, label: &str) -> Result<String, GatewayError> {
        if label == AUTO_LABEL {
            return Ok(AUTO_CODE.to_string());
        }
        self.resolve_target(label)
    }

    /// Resolves a target selector label. `Auto` is not a valid target.
    pub fn resolve_target(&self, label: &str) -> Result<String, GatewayError> {
        self.code_for_label(label)
            .map(str::to_string)
            .ok_or_else(|| GatewayError::UnknownLanguage(label.to_string()))
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:6} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates that the given language code is supported.
///
/// `auto` is accepted only when `allow_auto` is set (source languages).
pub fn validate_language(lang: &str, allow_auto: bool) -> Result<()> {
    if (allow_auto && lang == AUTO_CODE) || SUPPORTED_LANGUAGES.iter().any(|(code, _)| *code == lang)
    {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes (ISO 639-1): ja, en, zh-CN, ko, fr, de, es, ...\n\
             Run 'tl-desk languages' to see all supported codes."
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_a_bijection() {
        let catalog = LanguageCatalog::builtin();
        let rebuilt = LanguageCatalog::new(SUPPORTED_LANGUAGES.iter().copied());
        assert!(rebuilt.is_ok());

        for (code, label) in catalog.iter() {
            assert_eq!(catalog.code_for_label(label), Some(code));
            assert_eq!(catalog.label_for_code(code), Some(label));
        }
    }

    #[test]
    fn test_auto_resolves_to_sentinel() {
        let catalog = LanguageCatalog::builtin();
        assert_eq!(catalog.resolve_source("Auto").unwrap(), "auto");
    }

    #[test]
    fn test_auto_is_not_a_target() {
        let catalog = LanguageCatalog::builtin();
        assert!(matches!(
            catalog.resolve_target("Auto"),
            Err(GatewayError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_resolve_by_label() {
        let catalog = LanguageCatalog::builtin();
        assert_eq!(catalog.resolve_source("French").unwrap(), "fr");
        assert_eq!(catalog.resolve_target("Japanese").unwrap(), "ja");
    }

    #[test]
    fn test_resolve_unknown_label() {
        let catalog = LanguageCatalog::builtin();
        let err = catalog.resolve_target("Klingon").unwrap_err();
        assert!(err.to_string().contains("Klingon"));
    }

    #[test]
    fn test_new_rejects_duplicate_code() {
        let result = LanguageCatalog::new([("fr", "French"), ("fr", "Français")]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateCode("fr".to_string())
        );
    }

    #[test]
    fn test_new_rejects_duplicate_label() {
        let result = LanguageCatalog::new([("fr", "French"), ("fr-CA", "French")]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateLabel("French".to_string())
        );
    }

    #[test]
    fn test_new_rejects_reserved_auto() {
        assert!(LanguageCatalog::new([("auto", "Detect")]).is_err());
        assert!(LanguageCatalog::new([("xx", "Auto")]).is_err());
    }

    #[test]
    fn test_source_labels_start_with_auto() {
        let catalog = LanguageCatalog::new([("en", "English"), ("fr", "French")]).unwrap();
        assert_eq!(catalog.source_labels(), vec!["Auto", "English", "French"]);
        assert_eq!(catalog.labels(), vec!["English", "French"]);
    }

    #[test]
    fn test_find_label_ignores_case() {
        let catalog = LanguageCatalog::builtin();
        assert_eq!(catalog.find_label("french"), Some("French"));
        assert_eq!(catalog.find_label("  GERMAN "), Some("German"));
        assert_eq!(catalog.find_label("nope"), None);
    }

    #[test]
    fn test_validate_language_valid() {
        assert!(validate_language("ja", false).is_ok());
        assert!(validate_language("en", false).is_ok());
        assert!(validate_language("zh-TW", false).is_ok());
        assert!(validate_language("auto", true).is_ok());
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(validate_language("invalid", false).is_err());
        assert!(validate_language("", false).is_err());
        assert!(validate_language("JA", false).is_err()); // Case sensitive
        assert!(validate_language("auto", false).is_err());
    }
}
