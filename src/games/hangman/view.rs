/// Full-screen ratatui view for Hangman
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::terminal::TerminalColor;
use crate::games::hangman::renderer::letter_list;
use crate::games::hangman::{GameStatus, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Good,
    Bad,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Info => Color::Gray,
            Tone::Good => Color::Green,
            Tone::Bad => Color::Red,
        }
    }
}

/// Last message shown under the input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub tone: Tone,
}

impl Feedback {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Info)
    }
}

pub fn timer_color(remaining: u64) -> Color {
    match TerminalColor::for_remaining(remaining) {
        TerminalColor::Green => Color::Green,
        TerminalColor::Yellow => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn draw(frame: &mut Frame, state: &Snapshot, input: &str, feedback: &Feedback) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(format!(" HANGMAN - {} ", state.level.title()))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan)),
        chunks[0],
    );

    let timer = if state.timer_running {
        Span::styled(
            format!("Time: {}s", state.remaining_secs),
            Style::default()
                .fg(timer_color(state.remaining_secs))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("Time: --", Style::default().fg(Color::DarkGray))
    };
    let stats = Line::from(vec![
        Span::raw(format!("Lives: {}/{} ", state.lives, state.max_lives)),
        Span::styled("♥".repeat(state.lives as usize), Style::default().fg(Color::Red)),
        Span::raw("    "),
        timer,
    ]);
    frame.render_widget(
        Paragraph::new(stats)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(format!("\n{}", state.display))
            .block(Block::default().title(" SECRET ").borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(format!("Guessed letters: {}", letter_list(&state.guessed)))
            .block(Block::default().borders(Borders::ALL)),
        chunks[3],
    );

    if state.status.is_over() {
        draw_game_over(frame, state, chunks[4]);
    } else {
        frame.render_widget(
            Paragraph::new(format!(" > {input}"))
                .block(Block::default().title(" GUESS A LETTER ").borders(Borders::ALL)),
            chunks[4],
        );
    }

    frame.render_widget(
        Paragraph::new(feedback.text.as_str())
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(feedback.tone.color())),
        chunks[5],
    );

    let help = if state.status.is_over() {
        "[R/Enter] Play again  [M] Menu  [Q/Esc] Quit"
    } else {
        "[a-z] Type  [Enter] Guess  [Backspace] Erase  [Esc] Menu"
    };
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), chunks[6]);
}

fn draw_game_over(frame: &mut Frame, state: &Snapshot, area: ratatui::layout::Rect) {
    let (headline, color) = match state.status {
        GameStatus::Won => ("Congratulations! You won!", Color::Green),
        _ => ("Game Over! Lives exhausted!", Color::Red),
    };
    let lines = vec![
        Line::from(Span::styled(headline, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(format!("Correct answer: {}", state.answer.as_deref().unwrap_or_default())),
        Line::from("Play again?"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().title(" GAME OVER ").borders(Borders::ALL))
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::{GameConfig, HangmanGame, ManualClock, Secret};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(state: &Snapshot) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal
            .draw(|f| draw(f, state, "q", &Feedback::info("Correct guess!")))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_an_in_progress_game() {
        let mut game =
            HangmanGame::from_secret(Secret::phrase("hi there").unwrap(), GameConfig::default(), ManualClock::new());
        game.submit_guess("h").unwrap();
        game.start_turn_timer();

        let out = screen(&game.snapshot());
        assert!(out.contains("Intermediate Mode"));
        assert!(out.contains("Lives: 6/6"));
        assert!(out.contains("Time: 15s"));
        assert!(out.contains("GUESS A LETTER"));
        assert!(out.contains("Correct guess!"));
    }

    #[test]
    fn draws_the_game_over_panel() {
        let mut game =
            HangmanGame::from_secret(Secret::word("hi").unwrap(), GameConfig::default(), ManualClock::new());
        game.submit_guess("h").unwrap();
        game.submit_guess("i").unwrap();

        let out = screen(&game.snapshot());
        assert!(out.contains("Congratulations! You won!"));
        assert!(out.contains("Correct answer: hi"));
        assert!(!out.contains("GUESS A LETTER"));
    }

    #[test]
    fn timer_colours_follow_thresholds() {
        assert_eq!(timer_color(12), Color::Green);
        assert_eq!(timer_color(8), Color::Yellow);
        assert_eq!(timer_color(3), Color::Red);
    }
}
