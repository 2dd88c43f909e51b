use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "HANGR_LOG";

/// Sends `tracing` output to `path`; the terminal belongs to the game.
///
/// Logging is best effort: when the file can't be opened, or a subscriber
/// is already installed, the game runs without it.
pub fn init(path: &Path) {
    let Some(file) = open_log_file(path) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn opens_log_file_in_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("hangr.log");

        assert!(open_log_file(&path).is_some());
        assert!(path.exists());
    }

    #[test]
    fn init_tolerates_unwritable_path() {
        let dir = tempdir().unwrap();
        // a directory can't be opened as the log file
        init(dir.path());
    }
}
