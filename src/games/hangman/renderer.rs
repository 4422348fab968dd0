/// Line-mode renderer for Hangman
use std::io::{self, Write};

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::{GameStatus, Snapshot};

pub struct HangmanRenderer {
    player_name: String,
}

impl GameRenderer<Snapshot> for HangmanRenderer {
    fn new(player_name: String) -> Self {
        Self { player_name }
    }

    fn render<W: Write>(&self, state: &Snapshot, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_colored_line(
            &format!("HANGMAN ({}) - Player: {}", state.level.title(), self.player_name),
            TerminalColor::Cyan,
        )?;
        ctx.print_line("══════════════════════════════════")?;
        ctx.empty_line()?;
        ctx.print_line(&format!("Word: {}", state.display))?;
        ctx.empty_line()?;
        ctx.print_line(&format!(
            "Lives: {}/{} {}",
            state.lives,
            state.max_lives,
            "♥".repeat(state.lives as usize)
        ))?;

        if state.timer_running {
            ctx.print("Time: ")?;
            ctx.print_colored_line(
                &format!("{}s", state.remaining_secs),
                TerminalColor::for_remaining(state.remaining_secs),
            )?;
        }

        ctx.print_colored_line(
            &format!("Guessed letters: {}", letter_list(&state.guessed)),
            TerminalColor::Default,
        )?;
        if !state.wrong.is_empty() {
            ctx.print_colored_line(&format!("Wrong: {}", letter_list(&state.wrong)), TerminalColor::Red)?;
        }

        match state.status {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                ctx.empty_line()?;
                ctx.print_colored_line("Congratulations! You won!", TerminalColor::Green)?;
            }
            GameStatus::Lost => {
                ctx.empty_line()?;
                ctx.print_colored_line("Game Over! Lives exhausted!", TerminalColor::Red)?;
            }
        }
        if let Some(answer) = &state.answer {
            ctx.print_line(&format!("Correct answer: {answer}"))?;
        }

        ctx.flush()
    }
}

/// `a, b, c`, or `None` when empty.
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return "None".to_string();
    }
    letters.iter().map(char::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::{GameConfig, HangmanGame, ManualClock, Secret};

    fn render(snapshot: &Snapshot) -> String {
        let renderer = HangmanRenderer::new("tester".into());
        let mut ctx = TerminalContext::new(Vec::new());
        renderer.render(snapshot, &mut ctx).unwrap();
        String::from_utf8(ctx.into_inner()).unwrap()
    }

    #[test]
    fn renders_progress() {
        let mut game =
            HangmanGame::from_secret(Secret::word("test").unwrap(), GameConfig::default(), ManualClock::new());
        game.submit_guess("t").unwrap();
        game.submit_guess("z").unwrap();
        game.start_turn_timer();

        let out = render(&game.snapshot());
        assert!(out.contains("Player: tester"));
        assert!(out.contains("Word: t _ _ t"));
        assert!(out.contains("Lives: 5/6"));
        assert!(out.contains("15s"));
        assert!(out.contains("Guessed letters: t, z"));
        assert!(out.contains("Wrong: z"));
        assert!(!out.contains("Correct answer"));
    }

    #[test]
    fn renders_the_answer_when_lost() {
        let mut game =
            HangmanGame::from_secret(Secret::word("hi").unwrap(), GameConfig::default(), ManualClock::new());
        for letter in ["a", "b", "c", "d", "e", "f"] {
            game.submit_guess(letter).unwrap();
        }

        let out = render(&game.snapshot());
        assert!(out.contains("Game Over! Lives exhausted!"));
        assert!(out.contains("Correct answer: hi"));
    }

    #[test]
    fn empty_letter_list_reads_none() {
        assert_eq!(letter_list(&[]), "None");
        assert_eq!(letter_list(&['a', 'e']), "a, e");
    }
}
