//! Line-oriented shells: an interactive text game and a headless JSON mode.
use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::{
    Clock, ContentProvider, GameConfig, GuessOutcome, HangmanGame, HangmanRenderer, Level,
    Snapshot, TimerPoll, TIMEOUT_MESSAGE,
};

/// Plays text-mode games until input runs out or the player declines a rematch.
///
/// Input is read a line at a time, so the turn timer is only sampled when a
/// line arrives: an expired turn is charged before the guess is judged.
pub fn run_text<R, C, I, O>(
    content: &mut ContentProvider<R>,
    config: GameConfig,
    level: Level,
    clock: C,
    input: I,
    out: O,
) -> Result<()>
where
    R: Rng,
    C: Clock + Clone,
    I: BufRead,
    O: Write,
{
    let renderer = HangmanRenderer::new(whoami());
    let mut ctx = TerminalContext::new(out);
    let mut lines = input.lines();

    loop {
        let mut game = HangmanGame::from_provider(level, content, config, clock.clone());
        game.start_turn_timer();
        ctx.clear_screen()?;

        loop {
            ctx.empty_line()?;
            renderer.render(&game.snapshot(), &mut ctx)?;
            if game.status().is_over() {
                break;
            }

            ctx.print(&format!("Guess a letter ({}s): ", game.remaining_time()))?;
            ctx.flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;

            if game.poll_timer() == TimerPoll::Expired {
                ctx.print_colored_line(TIMEOUT_MESSAGE, TerminalColor::Red)?;
                if game.status().is_over() {
                    continue;
                }
                game.start_turn_timer();
            }

            match game.submit_guess(&line) {
                Ok(outcome) => {
                    let color = match outcome {
                        GuessOutcome::Correct => TerminalColor::Green,
                        GuessOutcome::Incorrect => TerminalColor::Red,
                    };
                    ctx.print_colored_line(outcome.message(), color)?;
                    if game.status().is_over() {
                        game.stop_turn_timer();
                    } else {
                        game.start_turn_timer();
                    }
                }
                Err(rejection) => {
                    ctx.print_colored_line(&rejection.to_string(), TerminalColor::Yellow)?;
                }
            }
        }

        ctx.print("Play again? [y/N] ")?;
        ctx.flush()?;
        match lines.next() {
            Some(Ok(answer)) if answer.trim().eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}

fn whoami() -> String {
    std::env::var("USER").unwrap_or_else(|_| "Player".to_string())
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Report {
    Start,
    Accepted { outcome: GuessOutcome, message: &'static str },
    Rejected { message: String },
}

/// One line of `script` output.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(flatten)]
    pub report: Report,
    pub snapshot: Snapshot,
}

/// Headless game: one guess per input line, one JSON object per output line.
/// The turn timer is never started.
pub fn run_script<R, C, I, O>(
    content: &mut ContentProvider<R>,
    config: GameConfig,
    level: Level,
    clock: C,
    input: I,
    mut out: O,
) -> Result<()>
where
    R: Rng,
    C: Clock,
    I: BufRead,
    O: Write,
{
    let mut game = HangmanGame::from_provider(level, content, config, clock);
    emit(&mut out, &ScriptLine { input: None, report: Report::Start, snapshot: game.snapshot() })?;

    for line in input.lines() {
        let line = line?;
        let report = match game.submit_guess(&line) {
            Ok(outcome) => Report::Accepted { outcome, message: outcome.message() },
            Err(rejection) => Report::Rejected { message: rejection.to_string() },
        };
        debug!(input = %line, ?report, "script guess");
        emit(&mut out, &ScriptLine { input: Some(line), report, snapshot: game.snapshot() })?;

        if game.status().is_over() {
            break;
        }
    }
    Ok(())
}

fn emit<O: Write>(out: &mut O, line: &ScriptLine) -> Result<()> {
    serde_json::to_writer(&mut *out, line)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::Value;

    use super::*;
    use crate::games::hangman::ManualClock;

    fn content() -> ContentProvider<StdRng> {
        ContentProvider::new(["hi"], ["hi there"], StdRng::seed_from_u64(3)).unwrap()
    }

    fn script(level: Level, input: &str) -> Vec<Value> {
        let mut out = Vec::new();
        run_script(&mut content(), GameConfig::default(), level, ManualClock::new(), Cursor::new(input), &mut out)
            .unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn script_reports_every_guess_until_won() {
        let lines = script(Level::Word, "h\nzz\nz\ni\nq\n");
        assert_eq!(lines.len(), 5);

        assert_eq!(lines[0]["result"], "start");
        assert_eq!(lines[0]["snapshot"]["display"], "_ _");
        assert!(lines[0].get("input").is_none());

        assert_eq!(lines[1]["result"], "accepted");
        assert_eq!(lines[1]["outcome"], "correct");
        assert_eq!(lines[1]["input"], "h");

        assert_eq!(lines[2]["result"], "rejected");
        assert_eq!(lines[2]["message"], "Please enter a single letter.");

        assert_eq!(lines[3]["outcome"], "incorrect");
        assert_eq!(lines[3]["snapshot"]["lives"], 5);

        assert_eq!(lines[4]["snapshot"]["status"], "won");
        assert_eq!(lines[4]["snapshot"]["answer"], "hi");
        assert_eq!(lines[4]["snapshot"]["timer_running"], false);
    }

    #[test]
    fn script_phrase_display_keeps_the_gap() {
        let lines = script(Level::Phrase, "e\n");
        assert_eq!(lines[1]["snapshot"]["display"], "_ _   _ _ e _ e");
    }

    #[test]
    fn text_game_plays_to_a_win_and_declines_rematch() {
        let mut out = Vec::new();
        let input = Cursor::new("h\n1\ni\nn\n");
        run_text(&mut content(), GameConfig::default(), Level::Word, ManualClock::new(), input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Correct guess!"));
        assert!(text.contains("Please enter a valid letter."));
        assert!(text.contains("Congratulations! You won!"));
        assert!(text.contains("Play again? [y/N]"));
    }

    #[test]
    fn text_game_rematch_starts_a_fresh_game() {
        let mut out = Vec::new();
        let input = Cursor::new("h\ni\ny\nh\n");
        run_text(&mut content(), GameConfig::default(), Level::Word, ManualClock::new(), input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Word: _ _").count(), 2);
    }

    #[test]
    fn text_game_stops_at_end_of_input() {
        let mut out = Vec::new();
        run_text(&mut content(), GameConfig::default(), Level::Word, ManualClock::new(), Cursor::new("z\n"), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Wrong guess! You lost a life."));
        assert!(!text.contains("Play again?"));
    }
}
