use super::core::Language;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of frequency-ranked vocabulary for the secret-word draw
pub trait VocabularyProvider {
    /// Up to `n` of the most common words for `language`, most common first.
    fn common_words(&self, language: &str, n: usize) -> Result<Vec<String>>;
}

/// Word lists compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedVocabulary;

impl VocabularyProvider for EmbeddedVocabulary {
    fn common_words(&self, language: &str, n: usize) -> Result<Vec<String>> {
        Ok(Language::load(language)?.top_n(n))
    }
}

/// Newline-separated word file; `#` starts a comment line.
/// The language code is ignored, the file is whatever the player hands us.
#[derive(Debug, Clone)]
pub struct FileVocabulary {
    path: PathBuf,
}

impl FileVocabulary {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl VocabularyProvider for FileVocabulary {
    fn common_words(&self, _language: &str, n: usize) -> Result<Vec<String>> {
        let contents = fs::read_to_string(&self.path)?;

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .take(n)
            .collect())
    }
}

/// A fixed list, handy for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct FixedVocabulary {
    words: Vec<String>,
}

impl FixedVocabulary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl VocabularyProvider for FixedVocabulary {
    fn common_words(&self, _language: &str, n: usize) -> Result<Vec<String>> {
        Ok(self.words.iter().take(n).cloned().collect())
    }
}
