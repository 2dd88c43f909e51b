// Library surface for the binary, headless/integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod celebration;
pub mod config;
pub mod error;
pub mod game;
pub mod language;
pub mod logging;
pub mod runtime;
pub mod ui;
pub mod word_generator;

pub use error::{GameError, Result};
pub use game::{GameSession, GuessOutcome, Rules, Status};
