use crate::app_dirs::AppDirs;
use crate::game::{Rules, DEFAULT_CHANCES, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, MAX_CHANCES};
use crate::language::SupportedLanguage;
use crate::word_generator::{WordGenConfig, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub language: SupportedLanguage,
    pub top_n: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub max_chances: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: SupportedLanguage::English,
            top_n: DEFAULT_TOP_N,
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
            max_chances: DEFAULT_CHANCES,
        }
    }
}

impl Config {
    /// Replaces out-of-range values with their defaults
    pub fn validated(mut self) -> Self {
        if !(1..=MAX_CHANCES).contains(&self.max_chances) {
            warn!(
                max_chances = self.max_chances,
                "chances out of range, using the default"
            );
            self.max_chances = DEFAULT_CHANCES;
        }
        if self.min_len > self.max_len {
            warn!(
                min_len = self.min_len,
                max_len = self.max_len,
                "empty length band, using the default"
            );
            self.min_len = DEFAULT_MIN_LEN;
            self.max_len = DEFAULT_MAX_LEN;
        }
        self
    }
}

impl From<&Config> for WordGenConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            language: cfg.language,
            top_n: cfg.top_n,
            rules: Rules {
                min_len: cfg.min_len,
                max_len: cfg.max_len,
                max_chances: cfg.max_chances,
            },
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path().unwrap_or_else(|| PathBuf::from("hangr_config.json")),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            match serde_json::from_slice::<Config>(&bytes) {
                Ok(cfg) => return cfg.validated(),
                Err(err) => warn!(path = %self.path.display(), %err, "ignoring unreadable config"),
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
