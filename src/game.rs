use crate::error::{GameError, Result};
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

pub const PLACEHOLDER: char = '_';

pub const DEFAULT_MIN_LEN: usize = 4;
pub const DEFAULT_MAX_LEN: usize = 13;
pub const DEFAULT_CHANCES: u32 = 7;
/// Upper bound on the chance budget; the gauge draws one heart per chance
pub const MAX_CHANCES: u32 = 26;

pub const GREETING: &str = "Let's begin!";
pub const RESTARTED: &str = "New game started! Guess the word!";
pub const EMPTY_GUESS: &str = "Please enter a guess before submitting.";
pub const ONE_LETTER: &str = "Kindly enter letter by letter...";
pub const LETTER_FOUND: &str = "Good! Letter is in the word.";
pub const ALREADY_GUESSED: &str = "You already guessed that letter!";
pub const FOUND_THE_WORD: &str = "Wow... You found the word! Thank you for your time!";

/// Word-length band and chance budget for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub min_len: usize,
    pub max_len: usize,
    pub max_chances: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
            max_chances: DEFAULT_CHANCES,
        }
    }
}

impl Rules {
    /// Whether `word` can be drawn as a secret under these rules
    pub fn allows(&self, word: &str) -> bool {
        let len = word.chars().count();
        (self.min_len..=self.max_len).contains(&len) && is_playable(word)
    }
}

// a placeholder inside the secret would never count as revealed, and a word
// whose lowercase form has a different length (`İ` -> `i̇`) would not fit its mask
fn is_playable(word: &str) -> bool {
    !word.is_empty()
        && !word.chars().any(|c| c == PLACEHOLDER || c.is_whitespace())
        && word.to_lowercase().chars().count() == word.chars().count()
}

fn check_chances(max_chances: u32) -> Result<()> {
    if (1..=MAX_CHANCES).contains(&max_chances) {
        Ok(())
    } else {
        Err(GameError::InvalidChances(max_chances))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Won,
    Lost,
}

/// What a single call to [`GameSession::evaluate_guess`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The game was already over, nothing changed
    Ignored,
    /// Blank input, nothing changed
    Empty,
    /// More than one character that isn't the whole word
    NotOneLetter,
    Hit { revealed: usize },
    AlreadyGuessed,
    Miss { chances_remaining: u32 },
    Won,
    Lost,
}

impl GuessOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GuessOutcome::Won | GuessOutcome::Lost)
    }
}

/// One round of the guessing game, from the secret draw until a win or a loss
#[derive(Debug, Clone)]
pub struct GameSession {
    secret_word: String,
    reveal_mask: Vec<char>,
    chances_remaining: u32,
    max_chances: u32,
    status_message: String,
    status: Status,
    guessed_letters: BTreeSet<char>,
}

impl GameSession {
    /// Draws a secret uniformly from the words of `vocabulary` that fit `rules`.
    pub fn new<S, R>(vocabulary: &[S], rules: Rules, rng: &mut R) -> Result<Self>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        Self::draw(vocabulary, rules, rng, GREETING)
    }

    /// Same contract as [`GameSession::new`]; the previous session is simply dropped by the caller.
    pub fn restart<S, R>(vocabulary: &[S], rules: Rules, rng: &mut R) -> Result<Self>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        Self::draw(vocabulary, rules, rng, RESTARTED)
    }

    /// Starts a game on a caller-chosen word. The length band does not apply.
    pub fn with_secret(word: &str, max_chances: u32) -> Result<Self> {
        check_chances(max_chances)?;
        if !is_playable(word) {
            return Err(GameError::InvalidSecret(word.to_string()));
        }
        let session = Self::build(word, max_chances, GREETING);
        info!(
            len = session.reveal_mask.len(),
            chances = max_chances,
            "started game with custom word"
        );
        Ok(session)
    }

    fn draw<S, R>(vocabulary: &[S], rules: Rules, rng: &mut R, greeting: &str) -> Result<Self>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        check_chances(rules.max_chances)?;
        let candidates = vocabulary
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|w| rules.allows(w))
            .collect::<Vec<&str>>();

        let secret = candidates
            .choose(rng)
            .ok_or(GameError::EmptyVocabulary {
                min_len: rules.min_len,
                max_len: rules.max_len,
            })?;

        let session = Self::build(secret, rules.max_chances, greeting);
        info!(
            candidates = candidates.len(),
            len = session.reveal_mask.len(),
            chances = rules.max_chances,
            "drew a new secret word"
        );
        Ok(session)
    }

    fn build(word: &str, max_chances: u32, greeting: &str) -> Self {
        let secret_word = word.to_lowercase();
        Self {
            reveal_mask: vec![PLACEHOLDER; secret_word.chars().count()],
            secret_word,
            chances_remaining: max_chances,
            max_chances,
            status_message: greeting.to_string(),
            status: Status::Active,
            guessed_letters: BTreeSet::new(),
        }
    }

    pub fn evaluate_guess(&mut self, raw_input: &str) -> GuessOutcome {
        if self.is_over() {
            debug!("guess after the game ended, ignoring");
            return GuessOutcome::Ignored;
        }
        if raw_input.trim().is_empty() {
            return GuessOutcome::Empty;
        }

        let outcome = if raw_input.to_lowercase() == self.secret_word {
            self.reveal_all();
            GuessOutcome::Won
        } else {
            let mut chars = raw_input.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => self.guess_letter(letter),
                _ => {
                    self.status_message = ONE_LETTER.to_string();
                    GuessOutcome::NotOneLetter
                }
            }
        };

        let outcome = self.settle(outcome);
        debug!(
            ?outcome,
            chances = self.chances_remaining,
            hidden = self.hidden_count(),
            "evaluated guess"
        );
        outcome
    }

    fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        let lower = letter.to_lowercase().next().unwrap_or(letter);
        self.guessed_letters.insert(lower);

        let positions = self
            .secret_word
            .chars()
            .enumerate()
            .filter(|(_, c)| c.to_lowercase().eq(letter.to_lowercase()))
            .collect::<Vec<(usize, char)>>();

        if positions.is_empty() {
            self.chances_remaining = self.chances_remaining.saturating_sub(1);
            self.status_message = format!(
                "OOPS... Wrong Letter. {} chances left.",
                self.chances_remaining
            );
            return GuessOutcome::Miss {
                chances_remaining: self.chances_remaining,
            };
        }

        let mut revealed = 0;
        for (idx, c) in positions {
            if self.reveal_mask[idx] == PLACEHOLDER {
                self.reveal_mask[idx] = c;
                revealed += 1;
            }
        }

        if revealed > 0 {
            self.status_message = LETTER_FOUND.to_string();
            GuessOutcome::Hit { revealed }
        } else {
            self.status_message = ALREADY_GUESSED.to_string();
            GuessOutcome::AlreadyGuessed
        }
    }

    /// Terminal checks run after every evaluated guess, whatever branch fired
    fn settle(&mut self, outcome: GuessOutcome) -> GuessOutcome {
        if self.hidden_count() == 0 {
            self.status = Status::Won;
            self.status_message = FOUND_THE_WORD.to_string();
            info!(chances = self.chances_remaining, "word found");
            GuessOutcome::Won
        } else if self.chances_remaining == 0 {
            self.reveal_all();
            self.status = Status::Lost;
            self.status_message = format!("Game Over! The word was {}.", self.secret_word);
            info!("out of chances");
            GuessOutcome::Lost
        } else {
            outcome
        }
    }

    fn reveal_all(&mut self) {
        self.reveal_mask = self.secret_word.chars().collect();
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn reveal_mask(&self) -> &[char] {
        &self.reveal_mask
    }

    /// The mask as shown to the player, e.g. `c _ _ _ r`
    pub fn masked_word(&self) -> String {
        self.reveal_mask.iter().join(" ")
    }

    pub fn hidden_count(&self) -> usize {
        self.reveal_mask
            .iter()
            .filter(|&&c| c == PLACEHOLDER)
            .count()
    }

    pub fn chances_remaining(&self) -> u32 {
        self.chances_remaining
    }

    pub fn max_chances(&self) -> u32 {
        self.max_chances
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Active
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }
}
