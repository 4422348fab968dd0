use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::Rng;
use ratatui::{DefaultTerminal, Frame};
use tracing::info;

use crate::core::lobby::{LobbyManager, LobbyResult};
use crate::games::hangman::view::{self, Feedback, Tone};
use crate::games::hangman::{
    Clock, ContentProvider, GameConfig, GuessOutcome, HangmanGame, Level, SystemClock, TimerPoll,
    TIMEOUT_MESSAGE,
};

/// How often the screen is redrawn and the turn timer sampled.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

/// How a finished session hands control back to the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    PlayAgain,
    Menu,
    Quit,
}

/// One game as seen by the full-screen shell: the engine, the half-typed
/// guess, and the last message.
pub struct Session<C: Clock> {
    game: HangmanGame<C>,
    input: String,
    feedback: Feedback,
}

impl<C: Clock> Session<C> {
    /// Starts the first turn straight away.
    pub fn new(mut game: HangmanGame<C>) -> Self {
        game.start_turn_timer();
        let feedback = Feedback::info(format!(
            "You have {}s per guess and {} lives. Good luck!",
            game.config().turn_duration.as_secs(),
            game.max_lives()
        ));
        Self { game, input: String::new(), feedback }
    }

    pub fn game(&self) -> &HangmanGame<C> {
        &self.game
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Samples the timer; an expiry costs a life and opens the next turn.
    pub fn tick(&mut self) {
        if self.game.status().is_over() {
            return;
        }
        if self.game.poll_timer() == TimerPoll::Expired {
            self.feedback = Feedback::new(TIMEOUT_MESSAGE, Tone::Bad);
            self.next_turn();
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Option<SessionExit> {
        if self.game.status().is_over() {
            return match code {
                KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(SessionExit::PlayAgain),
                KeyCode::Char('m') | KeyCode::Char('M') => Some(SessionExit::Menu),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(SessionExit::Quit),
                _ => None,
            };
        }

        match code {
            KeyCode::Esc => return Some(SessionExit::Menu),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
        None
    }

    pub fn draw(&self, frame: &mut Frame) {
        view::draw(frame, &self.game.snapshot(), &self.input, &self.feedback);
    }

    /// A rejected guess leaves the running turn alone.
    fn submit(&mut self) {
        let input = std::mem::take(&mut self.input);
        match self.game.submit_guess(&input) {
            Ok(outcome) => {
                let tone = match outcome {
                    GuessOutcome::Correct => Tone::Good,
                    GuessOutcome::Incorrect => Tone::Bad,
                };
                self.feedback = Feedback::new(outcome.message(), tone);
                self.next_turn();
            }
            Err(rejection) => self.feedback = Feedback::new(rejection.to_string(), Tone::Bad),
        }
    }

    fn next_turn(&mut self) {
        if self.game.status().is_over() {
            self.game.stop_turn_timer();
        } else {
            self.game.start_turn_timer();
        }
    }
}

/// Full-screen shell: level menu, then games until the player quits.
pub struct TuiRunner<R: Rng> {
    content: ContentProvider<R>,
    config: GameConfig,
    tick_rate: Duration,
}

impl<R: Rng> TuiRunner<R> {
    pub fn new(content: ContentProvider<R>, config: GameConfig) -> Self {
        Self { content, config, tick_rate: DEFAULT_TICK_RATE }
    }

    /// `level` skips the menu for the first game only.
    pub async fn run(mut self, mut terminal: DefaultTerminal, level: Option<Level>) -> Result<()> {
        let mut next = level;
        loop {
            let level = match next.take() {
                Some(level) => level,
                None => match LobbyManager::new().run(&mut terminal)? {
                    LobbyResult::Play(level) => level,
                    LobbyResult::Quit => break,
                },
            };

            match self.play(&mut terminal, level).await? {
                SessionExit::PlayAgain => next = Some(level),
                SessionExit::Menu => {}
                SessionExit::Quit => break,
            }
        }
        Ok(())
    }

    async fn play(&mut self, terminal: &mut DefaultTerminal, level: Level) -> Result<SessionExit> {
        let game = HangmanGame::from_provider(level, &mut self.content, self.config, SystemClock);
        let mut session = Session::new(game);
        let mut refresh = tokio::time::interval(self.tick_rate);

        loop {
            refresh.tick().await;
            session.tick();
            terminal.draw(|f| session.draw(f))?;

            // Drain everything typed since the last frame.
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(exit) = session.handle_key(key.code) {
                        info!(?exit, status = ?session.game().status(), "session ended");
                        return Ok(exit);
                    }
                }
            }
        }
    }
}
