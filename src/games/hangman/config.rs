use std::time::Duration;

use serde::Serialize;

pub const DEFAULT_MAX_LIVES: u8 = 6;
pub const DEFAULT_TURN_DURATION: Duration = Duration::from_secs(15);

/// Per-game constants, fixed once a game is built.
///
/// `turn_duration` may carry a sub-second part; the countdown rounds up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    pub max_lives: u8,
    pub turn_duration: Duration,
}

impl GameConfig {
    pub fn new(max_lives: u8, turn_duration: Duration) -> Self {
        Self { max_lives, turn_duration }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LIVES, DEFAULT_TURN_DURATION)
    }
}
