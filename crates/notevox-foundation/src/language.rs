//! Language selection for transcription runs.

use serde::{Deserialize, Serialize};

/// Language selector passed through to the transcription tool.
///
/// `Auto` leaves language detection to the tool and omits the `--language`
/// flag from the invocation entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Let the tool detect the spoken language.
    Auto,
    /// English
    En,
    /// Dutch
    Nl,
}

impl Language {
    /// Value for the tool's `--language` flag; `None` means the flag is omitted.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            Language::Auto => None,
            Language::En => Some("en"),
            Language::Nl => Some("nl"),
        }
    }

    /// Label used in the inserted transcript header.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Auto => "auto-detected",
            Language::En => "en",
            Language::Nl => "nl",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Auto => write!(f, "auto"),
            Language::En => write!(f, "en"),
            Language::Nl => write!(f, "nl"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_omits_the_language_flag() {
        assert_eq!(Language::Auto.flag(), None);
        assert_eq!(Language::En.flag(), Some("en"));
        assert_eq!(Language::Nl.flag(), Some("nl"));
    }

    #[test]
    fn header_labels() {
        assert_eq!(Language::Auto.label(), "auto-detected");
        assert_eq!(Language::En.label(), "en");
        assert_eq!(Language::Nl.label(), "nl");
    }

    #[test]
    fn display_uses_the_selector_value() {
        assert_eq!(Language::Auto.to_string(), "auto");
        assert_eq!(Language::Nl.to_string(), "nl");
    }
}
