use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use tracing::{error, info};

use crate::{
    celebration::Celebration,
    error::Result,
    game::{GameSession, GuessOutcome, EMPTY_GUESS},
    language::VocabularyProvider,
    runtime::GameEvent,
    word_generator::WordGenerator,
};

/// Input line cap when the secret is shorter than this
pub const MAX_INPUT_CHARS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Everything the terminal front-end needs: the session plus the input line
pub struct App {
    pub game: GameSession,
    pub input: String,
    pub notice: Option<String>,
    pub celebration: Celebration,
    pub size: (u16, u16),
    generator: WordGenerator,
    provider: Box<dyn VocabularyProvider>,
    rng: StdRng,
}

impl App {
    /// Starts the first game, either on `custom_word` or on a freshly drawn secret.
    pub fn new(
        generator: WordGenerator,
        provider: Box<dyn VocabularyProvider>,
        mut rng: StdRng,
        custom_word: Option<&str>,
    ) -> Result<Self> {
        let game = match custom_word {
            Some(word) => GameSession::with_secret(word, generator.config().rules.max_chances)?,
            None => generator.new_session(provider.as_ref(), &mut rng)?,
        };

        Ok(Self {
            game,
            input: String::new(),
            notice: None,
            celebration: Celebration::new(),
            size: (80, 24),
            generator,
            provider,
            rng,
        })
    }

    /// Room for the whole secret, so a full-word guess always fits
    pub fn input_limit(&self) -> usize {
        self.game.secret_word().chars().count().max(MAX_INPUT_CHARS)
    }

    pub fn generator(&self) -> &WordGenerator {
        &self.generator
    }

    /// Replaces the session with a brand-new one. On failure the current game is kept.
    pub fn restart(&mut self) {
        match self
            .generator
            .restart_session(self.provider.as_ref(), &mut self.rng)
        {
            Ok(game) => {
                info!("restarted");
                self.game = game;
                self.input.clear();
                self.notice = None;
                self.celebration.stop();
            }
            Err(err) => {
                error!(%err, "could not start a new game");
                self.notice = Some(format!("Could not start a new game: {err}"));
            }
        }
    }

    /// Evaluates whatever is on the input line and clears it
    pub fn submit(&mut self) -> GuessOutcome {
        let guess = std::mem::take(&mut self.input);
        let outcome = self.game.evaluate_guess(&guess);

        self.notice = match outcome {
            GuessOutcome::Empty => Some(EMPTY_GUESS.to_string()),
            _ => None,
        };
        if outcome == GuessOutcome::Won {
            self.celebration.start(self.size.0, self.size.1);
        }

        outcome
    }

    pub fn handle(&mut self, event: GameEvent) -> Action {
        match event {
            GameEvent::Key(key) => self.on_key(key),
            GameEvent::Resize(w, h) => {
                self.size = (w, h);
                Action::Continue
            }
            GameEvent::Tick => {
                self.celebration.update();
                Action::Continue
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Char('r') if ctrl => {
                self.restart();
                return Action::Continue;
            }
            _ => {}
        }

        if self.game.is_over() {
            match key.code {
                KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('n') => self.restart(),
                KeyCode::Char('q') => return Action::Quit,
                _ => {}
            }
            return Action::Continue;
        }

        match key.code {
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl => {
                if self.input.chars().count() < self.input_limit() {
                    self.input.push(c);
                }
            }
            _ => {}
        }
        Action::Continue
    }
}
