//! Supported translation languages
//!
//! Codes follow Azure Translator's language identifiers.

use crate::error::DocBridgeError;
use std::collections::BTreeMap;

/// Built-in language table (code, display name)
const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("bn", "Bangla"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("nb", "Norwegian"),
    ("nl", "Dutch"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("pt", "Portuguese (Brazil)"),
    ("pt-PT", "Portuguese (Portugal)"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("zh-Hans", "Chinese Simplified"),
    ("zh-Hant", "Chinese Traditional"),
];

/// Fixed set of languages the service accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: BTreeMap<String, String>,
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageCatalog {
    /// Full built-in table
    pub fn builtin() -> Self {
        let languages = BUILTIN_LANGUAGES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();

        Self { languages }
    }

    /// Restrict the built-in table to the given codes
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self, DocBridgeError> {
        let builtin = Self::builtin();
        let mut languages = BTreeMap::new();

        for code in codes {
            let canonical = builtin.resolve(code.as_ref()).map_err(|_| {
                DocBridgeError::config(format!(
                    "SUPPORTED_LANGUAGES contains unknown code '{}'",
                    code.as_ref()
                ))
            })?;
            if let Some(name) = builtin.name(canonical) {
                languages.insert(canonical.to_string(), name.to_string());
            }
        }

        if languages.is_empty() {
            return Err(DocBridgeError::config("SUPPORTED_LANGUAGES cannot be empty"));
        }

        Ok(Self { languages })
    }

    /// Resolve a user-supplied code (case-insensitive) to its canonical form
    pub fn resolve(&self, code: &str) -> Result<&str, DocBridgeError> {
        let code = code.trim();
        self.languages
            .keys()
            .find(|known| known.eq_ignore_ascii_case(code))
            .map(String::as_str)
            .ok_or_else(|| DocBridgeError::invalid_language(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.resolve(code).is_ok()
    }

    /// Display name for a canonical code
    pub fn name(&self, code: &str) -> Option<&str> {
        self.languages.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Code → name map, ordered by code
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_not_empty() {
        let catalog = LanguageCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.contains("es"));
        assert!(catalog.contains("fr"));
        assert!(catalog.contains("hi"));
        assert_eq!(catalog.name("en"), Some("English"));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let catalog = LanguageCatalog::builtin();
        assert_eq!(catalog.resolve("ZH-hans").unwrap(), "zh-Hans");
        assert_eq!(catalog.resolve(" es ").unwrap(), "es");
    }

    #[test]
    fn test_resolve_unknown_code() {
        let catalog = LanguageCatalog::builtin();
        let err = catalog.resolve("klingon").unwrap_err();
        assert_eq!(err.kind(), "InvalidLanguage");
    }

    #[test]
    fn test_from_codes_restricts() {
        let catalog = LanguageCatalog::from_codes(&["en", "FR", "es"]).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("fr"));
        assert!(!catalog.contains("de"));
    }

    #[test]
    fn test_from_codes_rejects_unknown() {
        assert!(LanguageCatalog::from_codes(&["en", "xx"]).is_err());
        assert!(LanguageCatalog::from_codes::<&str>(&[]).is_err());
    }
}
