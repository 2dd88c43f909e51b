use crate::error::{GameError, Result};
use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use serde_json::from_str;

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// A frequency-ranked word list, most common words first
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    /// Loads the embedded list for an ISO 639-1 code such as `en`
    pub fn load(code: &str) -> Result<Self> {
        read_language_from_file(&format!("{code}.json"))
            .map_err(|err| match err {
                GameError::UnknownLanguage(_) => GameError::UnknownLanguage(code.to_string()),
                other => other,
            })
    }

    /// The `n` most common words (or all of them if the list is shorter)
    pub fn top_n(&self, n: usize) -> Vec<String> {
        self.words.iter().take(n).cloned().collect()
    }
}

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Serialize, Deserialize, strum_macros::Display,
)]
pub enum SupportedLanguage {
    #[value(name = "en", alias = "english")]
    #[strum(serialize = "en")]
    #[serde(rename = "en", alias = "english")]
    English,
    #[value(name = "es", alias = "spanish")]
    #[strum(serialize = "es")]
    #[serde(rename = "es", alias = "spanish")]
    Spanish,
    #[value(name = "de", alias = "german")]
    #[strum(serialize = "de")]
    #[serde(rename = "de", alias = "german")]
    German,
}

impl SupportedLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLanguage::English => "en",
            SupportedLanguage::Spanish => "es",
            SupportedLanguage::German => "de",
        }
    }
}

fn read_language_from_file(file_name: &str) -> Result<Language> {
    let file = LANG_DIR
        .get_file(file_name)
        .ok_or_else(|| GameError::UnknownLanguage(file_name.to_string()))?;

    // the lists are checked in as UTF-8 JSON
    let file_as_str = file.contents_utf8().unwrap_or_default();

    from_str(file_as_str).map_err(|source| GameError::MalformedWordList {
        name: file_name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_language_load_english() {
        let lang = Language::load("en").unwrap();

        assert_eq!(lang.name, "english");
        assert!(!lang.words.is_empty());
        assert_eq!(lang.size as usize, lang.words.len());
    }

    #[test]
    fn test_every_supported_language_loads() {
        for supported in [
            SupportedLanguage::English,
            SupportedLanguage::Spanish,
            SupportedLanguage::German,
        ] {
            let lang = Language::load(supported.code()).unwrap();
            assert!(!lang.words.is_empty(), "{supported} has no words");
        }
    }

    #[test]
    fn test_words_are_lowercase() {
        for code in ["en", "es", "de"] {
            let lang = Language::load(code).unwrap();
            for word in &lang.words {
                assert_eq!(word, &word.to_lowercase(), "{code}: {word}");
            }
        }
    }

    #[test]
    fn test_top_n() {
        let lang = Language::load("en").unwrap();

        assert_eq!(lang.top_n(3), vec!["the", "of", "and"]);
        assert_eq!(lang.top_n(0).len(), 0);
        assert_eq!(lang.top_n(usize::MAX).len(), lang.words.len());
    }

    #[test]
    fn test_unknown_language() {
        assert_matches!(Language::load("xx"), Err(GameError::UnknownLanguage(code)) if code == "xx");
    }

    #[test]
    fn test_language_deserialization() {
        let json_data = r#"
        {
            "name": "test",
            "size": 3,
            "words": ["hello", "world", "test"]
        }
        "#;

        let lang: Language = from_str(json_data).expect("Failed to deserialize test language");

        assert_eq!(lang.name, "test");
        assert_eq!(lang.size, 3);
        assert_eq!(lang.words, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_supported_language_display_is_code() {
        assert_eq!(SupportedLanguage::English.to_string(), "en");
        assert_eq!(SupportedLanguage::Spanish.to_string(), "es");
        assert_eq!(SupportedLanguage::German.to_string(), "de");
    }
}
