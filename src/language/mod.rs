pub mod core;
pub mod provider;

// Re-export the main types for convenience
pub use self::core::{Language, SupportedLanguage};
pub use self::provider::{EmbeddedVocabulary, FileVocabulary, FixedVocabulary, VocabularyProvider};
