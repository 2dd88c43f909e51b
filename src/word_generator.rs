use crate::{
    error::Result,
    game::{GameSession, Rules},
    language::{SupportedLanguage, VocabularyProvider},
};
use rand::Rng;
use tracing::debug;

/// About the size of the embedded English list
pub const DEFAULT_TOP_N: usize = 500;

/// Configuration for drawing secret words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordGenConfig {
    pub language: SupportedLanguage,
    /// how many of the most common words are eligible
    pub top_n: usize,
    pub rules: Rules,
}

impl Default for WordGenConfig {
    fn default() -> Self {
        Self {
            language: SupportedLanguage::English,
            top_n: DEFAULT_TOP_N,
            rules: Rules::default(),
        }
    }
}

/// Fetches vocabulary and turns it into game sessions
#[derive(Debug, Clone)]
pub struct WordGenerator {
    config: WordGenConfig,
}

impl WordGenerator {
    pub fn new(config: WordGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WordGenConfig {
        &self.config
    }

    pub fn new_session<P, R>(&self, provider: &P, rng: &mut R) -> Result<GameSession>
    where
        P: VocabularyProvider + ?Sized,
        R: Rng + ?Sized,
    {
        let vocabulary = self.fetch(provider)?;
        GameSession::new(&vocabulary, self.config.rules, rng)
    }

    pub fn restart_session<P, R>(&self, provider: &P, rng: &mut R) -> Result<GameSession>
    where
        P: VocabularyProvider + ?Sized,
        R: Rng + ?Sized,
    {
        let vocabulary = self.fetch(provider)?;
        GameSession::restart(&vocabulary, self.config.rules, rng)
    }

    fn fetch<P: VocabularyProvider + ?Sized>(&self, provider: &P) -> Result<Vec<String>> {
        let words = provider.common_words(self.config.language.code(), self.config.top_n)?;
        debug!(
            language = %self.config.language,
            fetched = words.len(),
            "fetched vocabulary"
        );
        Ok(words)
    }
}
