pub mod cli;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::games::hangman::{
    GameConfig, GameStatus, GuessError, GuessOutcome, HangmanGame, Level, Secret, Snapshot, TimerPoll,
};
