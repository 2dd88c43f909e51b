use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no words between {min_len} and {max_len} letters long in the vocabulary")]
    EmptyVocabulary { min_len: usize, max_len: usize },
    #[error("no word list for language `{0}`")]
    UnknownLanguage(String),
    #[error("`{0}` cannot be used as a secret word")]
    InvalidSecret(String),
    #[error("{0} chances is outside the allowed range 1..={}", crate::game::MAX_CHANCES)]
    InvalidChances(u32),
    #[error("word list `{name}` is malformed: {source}")]
    MalformedWordList {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
