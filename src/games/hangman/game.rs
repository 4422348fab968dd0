use std::collections::BTreeSet;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use super::config::GameConfig;
use super::content::{ContentProvider, Level, Secret};
use super::error::GuessError;
use super::reveal::RevealState;
use super::timer::{Clock, SystemClock, TimerPoll, TurnTimer};

pub const TIMEOUT_MESSAGE: &str = "Time's up! You lost a life.";

/// What an accepted guess did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

impl GuessOutcome {
    pub fn message(self) -> &'static str {
        match self {
            GuessOutcome::Correct => "Correct guess!",
            GuessOutcome::Incorrect => "Wrong guess! You lost a life.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub level: Level,
    pub display: String,
    pub lives: u8,
    pub max_lives: u8,
    pub wrong_guesses: u8,
    pub guessed: Vec<char>,
    pub wrong: Vec<char>,
    pub remaining_secs: u64,
    pub timer_running: bool,
    pub status: GameStatus,
    /// Only filled in once the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Headless hangman engine. The only two places lives change are
/// [`submit_guess`](Self::submit_guess) and [`poll_timer`](Self::poll_timer).
#[derive(Debug, Clone)]
pub struct HangmanGame<C: Clock = SystemClock> {
    secret: Secret,
    guessed: BTreeSet<char>,
    lives: u8,
    config: GameConfig,
    timer: TurnTimer,
    clock: C,
}

impl HangmanGame<SystemClock> {
    /// Random secret from the built-in lists, default lives and turn length.
    pub fn new(level: Level) -> Self {
        Self::with_config(level, GameConfig::default())
    }

    pub fn with_config(level: Level, config: GameConfig) -> Self {
        let mut content = ContentProvider::builtin();
        Self::from_provider(level, &mut content, config, SystemClock)
    }
}

impl<C: Clock> HangmanGame<C> {
    pub fn from_provider<R: Rng>(
        level: Level,
        content: &mut ContentProvider<R>,
        config: GameConfig,
        clock: C,
    ) -> Self {
        Self::from_secret(content.pick(level), config, clock)
    }

    pub fn from_secret(secret: Secret, config: GameConfig, clock: C) -> Self {
        info!(level = %secret.level(), length = secret.as_str().len(), "new game");
        Self {
            secret,
            guessed: BTreeSet::new(),
            lives: config.max_lives,
            timer: TurnTimer::new(config.turn_duration),
            config,
            clock,
        }
    }

    /// Validates `input` and applies it.
    ///
    /// Rejections leave the game untouched. An accepted letter is always
    /// recorded, and costs a life when it is not in the secret.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        let letter = parse_letter(input)?;
        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        self.guessed.insert(letter);

        let outcome = if self.secret.contains_letter(letter) {
            GuessOutcome::Correct
        } else {
            self.lives = self.lives.saturating_sub(1);
            GuessOutcome::Incorrect
        };

        debug!(%letter, ?outcome, lives = self.lives, "guess");
        self.log_if_finished();
        Ok(outcome)
    }

    pub fn start_turn_timer(&mut self) {
        self.timer.start(self.clock.now());
    }

    /// Drops a running turn without any penalty.
    pub fn stop_turn_timer(&mut self) {
        self.timer.stop();
    }

    /// Turns an expired turn into a lost life, once. The timer is unset
    /// afterwards, so polling again right away reports `NotExpired`.
    pub fn poll_timer(&mut self) -> TimerPoll {
        if !self.timer.is_expired(self.clock.now()) {
            return TimerPoll::NotExpired;
        }

        self.timer.stop();
        self.lives = self.lives.saturating_sub(1);
        debug!(lives = self.lives, "turn expired");
        self.log_if_finished();
        TimerPoll::Expired
    }

    pub fn remaining_time(&self) -> u64 {
        self.timer.remaining_secs(self.clock.now())
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn reveal_state(&self) -> RevealState {
        RevealState::compute(&self.secret, &self.guessed)
    }

    pub fn is_won(&self) -> bool {
        self.reveal_state().is_complete()
    }

    pub fn is_lost(&self) -> bool {
        self.lives == 0
    }

    /// Win is checked before loss.
    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    pub fn current_display(&self) -> String {
        self.reveal_state().to_string()
    }

    pub fn reveal_answer(&self) -> &str {
        self.secret.as_str()
    }

    pub fn wrong_guess_count(&self) -> u8 {
        self.config.max_lives - self.lives
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn max_lives(&self) -> u8 {
        self.config.max_lives
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> Level {
        self.secret.level()
    }

    /// Sorted.
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    /// Guessed letters missing from the secret, sorted.
    pub fn wrong_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed
            .iter()
            .copied()
            .filter(move |&c| !self.secret.contains_letter(c))
    }

    pub fn snapshot(&self) -> Snapshot {
        let status = self.status();
        Snapshot {
            level: self.level(),
            display: self.current_display(),
            lives: self.lives,
            max_lives: self.config.max_lives,
            wrong_guesses: self.wrong_guess_count(),
            guessed: self.guessed_letters().collect(),
            wrong: self.wrong_letters().collect(),
            remaining_secs: self.remaining_time(),
            timer_running: self.is_timer_running(),
            status,
            answer: status.is_over().then(|| self.secret.to_string()),
        }
    }

    fn log_if_finished(&self) {
        match self.status() {
            GameStatus::Won => info!(wrong = self.wrong_guess_count(), "game won"),
            GameStatus::Lost => info!(answer = %self.secret, "game lost"),
            GameStatus::InProgress => {}
        }
    }
}

/// Trim, require exactly one character, lowercase, require a letter.
fn parse_letter(input: &str) -> Result<char, GuessError> {
    let mut chars = input.trim().chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(GuessError::InvalidLength);
    };

    // Some uppercase letters lowercase to more than one char; those are not
    // guessable as a single letter.
    let mut lower = c.to_lowercase();
    let (Some(letter), None) = (lower.next(), lower.next()) else {
        return Err(GuessError::NotALetter);
    };

    if !letter.is_alphabetic() {
        return Err(GuessError::NotALetter);
    }
    Ok(letter)
}
