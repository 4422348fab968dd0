/// Hangman: the headless engine plus its two renderers.
pub mod config;
pub mod content;
pub mod error;
pub mod game;
pub mod renderer;
pub mod reveal;
pub mod timer;
pub mod view;

pub use config::GameConfig;
pub use content::{ContentProvider, Level, Secret};
pub use error::{ContentError, GuessError};
pub use game::{GameStatus, GuessOutcome, HangmanGame, Snapshot, TIMEOUT_MESSAGE};
pub use renderer::HangmanRenderer;
pub use reveal::{Cell, RevealState};
pub use timer::{Clock, ManualClock, SystemClock, TimerPoll, TurnTimer};
