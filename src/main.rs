use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use hangr::{
    app::{Action, App},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    language::{EmbeddedVocabulary, FileVocabulary, SupportedLanguage, VocabularyProvider},
    game::MAX_CHANCES,
    logging,
    runtime::{CrosstermEventSource, Runner, TICK_RATE_MS},
    word_generator::WordGenerator,
    GameError,
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use tracing::info;

/// guess the hidden word before your chances run out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal word-guessing game. A secret word is drawn from the most common words of a language; reveal it one letter at a time or guess it whole before your chances run out."
)]
pub struct Cli {
    /// language to draw the secret word from
    #[clap(short = 'l', long, value_enum)]
    language: Option<SupportedLanguage>,

    /// only consider this many of the most common words
    #[clap(short = 'n', long)]
    top_n: Option<usize>,

    /// shortest secret word allowed
    #[clap(long)]
    min_len: Option<usize>,

    /// longest secret word allowed
    #[clap(long)]
    max_len: Option<usize>,

    /// wrong letters allowed before the game is lost
    #[clap(short = 'c', long, value_parser = clap::value_parser!(u32).range(1..=MAX_CHANCES as i64))]
    chances: Option<u32>,

    /// play the first round on this word instead of a random one
    #[clap(short = 'w', long)]
    word: Option<String>,

    /// newline-separated word list to draw from, most common first
    #[clap(short = 'f', long)]
    words_file: Option<PathBuf>,

    /// seed for the word draw, for reproducible games
    #[clap(long)]
    seed: Option<u64>,

    /// remember the effective settings for next time
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Flags given on the command line win over the stored config
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(language) = self.language {
            cfg.language = language;
        }
        if let Some(top_n) = self.top_n {
            cfg.top_n = top_n;
        }
        if let Some(min_len) = self.min_len {
            cfg.min_len = min_len;
        }
        if let Some(max_len) = self.max_len {
            cfg.max_len = max_len;
        }
        if let Some(chances) = self.chances {
            cfg.max_chances = chances;
        }
        cfg
    }

    fn provider(&self) -> Box<dyn VocabularyProvider> {
        match &self.words_file {
            Some(path) => Box::new(FileVocabulary::new(path)),
            None => Box::new(EmbeddedVocabulary),
        }
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }
}

fn build_app(cli: &Cli, config: &Config) -> Result<App, GameError> {
    App::new(
        WordGenerator::new(config.into()),
        cli.provider(),
        cli.rng(),
        cli.word.as_deref(),
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = AppDirs::log_path() {
        logging::init(&path);
    }

    let store = FileConfigStore::new();
    let config = cli.apply(store.load()).validated();
    if cli.save_config {
        store.save(&config)?;
        info!(path = %store.path().display(), "saved config");
    }

    // fail before touching the terminal so the error stays readable
    let mut app = build_app(&cli, &config)?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let size = terminal.size()?;
    app.size = (size.width, size.height);

    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(TICK_RATE_MS),
    );

    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        if app.handle(runner.step()) == Action::Quit {
            break;
        }
    }

    info!("bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangr::game::{DEFAULT_CHANCES, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["hangr"]);

        assert_eq!(cli.language, None);
        assert_eq!(cli.top_n, None);
        assert_eq!(cli.chances, None);
        assert_eq!(cli.word, None);
        assert_eq!(cli.words_file, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.save_config);
    }

    #[test]
    fn test_cli_language() {
        let cli = Cli::parse_from(["hangr", "-l", "es"]);
        assert_eq!(cli.language, Some(SupportedLanguage::Spanish));

        let cli = Cli::parse_from(["hangr", "--language", "german"]);
        assert_eq!(cli.language, Some(SupportedLanguage::German));

        assert!(Cli::try_parse_from(["hangr", "-l", "klingon"]).is_err());
    }

    #[test]
    fn test_cli_chances_must_be_positive() {
        let cli = Cli::parse_from(["hangr", "-c", "3"]);
        assert_eq!(cli.chances, Some(3));

        assert!(Cli::try_parse_from(["hangr", "--chances", "0"]).is_err());
        assert!(Cli::try_parse_from(["hangr", "--chances", "27"]).is_err());
    }

    #[test]
    fn test_flags_that_invert_the_stored_band_are_reset() {
        let cli = Cli::parse_from(["hangr", "--min-len", "20"]);
        let config = cli.apply(Config::default()).validated();

        assert_eq!(config.min_len, DEFAULT_MIN_LEN);
        assert_eq!(config.max_len, DEFAULT_MAX_LEN);
        assert!(build_app(&cli, &config).is_ok());
    }

    #[test]
    fn test_cli_word_and_file() {
        let cli = Cli::parse_from(["hangr", "-w", "chair", "-f", "/tmp/words.txt"]);
        assert_eq!(cli.word.as_deref(), Some("chair"));
        assert_eq!(cli.words_file, Some(PathBuf::from("/tmp/words.txt")));
    }

    #[test]
    fn test_apply_keeps_config_when_no_flags() {
        let cli = Cli::parse_from(["hangr"]);
        let stored = Config {
            language: SupportedLanguage::German,
            max_chances: 9,
            ..Config::default()
        };

        assert_eq!(cli.apply(stored.clone()), stored);
    }

    #[test]
    fn test_apply_overrides_with_flags() {
        let cli = Cli::parse_from([
            "hangr", "-l", "de", "-n", "50", "--min-len", "5", "--max-len", "6", "-c", "2",
        ]);
        let cfg = cli.apply(Config::default());

        assert_eq!(cfg.language, SupportedLanguage::German);
        assert_eq!(cfg.top_n, 50);
        assert_eq!(cfg.min_len, 5);
        assert_eq!(cfg.max_len, 6);
        assert_eq!(cfg.max_chances, 2);
    }

    #[test]
    fn test_build_app_with_seed_is_reproducible() {
        let cli = Cli::parse_from(["hangr", "--seed", "99"]);
        let config = Config::default();

        let first = build_app(&cli, &config).unwrap();
        let second = build_app(&cli, &config).unwrap();

        assert_eq!(first.game.secret_word(), second.game.secret_word());
        assert_eq!(first.game.chances_remaining(), DEFAULT_CHANCES);
        let len = first.game.secret_word().chars().count();
        assert!((DEFAULT_MIN_LEN..=DEFAULT_MAX_LEN).contains(&len));
    }

    #[test]
    fn test_build_app_with_custom_word() {
        let cli = Cli::parse_from(["hangr", "-w", "Garden", "-c", "3"]);
        let config = cli.apply(Config::default());

        let app = build_app(&cli, &config).unwrap();
        assert_eq!(app.game.secret_word(), "garden");
        assert_eq!(app.game.chances_remaining(), 3);
    }

    #[test]
    fn test_build_app_with_impossible_band() {
        let cli = Cli::parse_from(["hangr", "--min-len", "40", "--max-len", "60"]);
        let config = cli.apply(Config::default()).validated();

        assert!(matches!(
            build_app(&cli, &config),
            Err(GameError::EmptyVocabulary { min_len: 40, .. })
        ));
    }

    #[test]
    fn test_build_app_with_missing_words_file() {
        let cli = Cli::parse_from(["hangr", "-f", "/definitely/not/here.txt"]);
        assert!(matches!(
            build_app(&cli, &Config::default()),
            Err(GameError::Io(_))
        ));
    }
}
